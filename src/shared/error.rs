#[derive(thiserror::Error, Debug)]
pub enum OtpError {
    #[error("Code length must be at least 1, got {0}")]
    InvalidCapacity(usize),

    #[error(
        "A standalone `disabled` flag and a form binding are both present - \
         use the binding's disable authority to toggle the disabled state"
    )]
    DisabledAuthorityConflict,
}
