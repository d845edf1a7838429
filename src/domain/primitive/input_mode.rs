/// Hint mirrored into the host field's `inputmode` attribute.
///
/// Tells hosts with virtual keyboards which layout to raise. Numeric is the
/// default, matching the default digit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputModeHint {
    #[default]
    Numeric,
    Text,
}

impl InputModeHint {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputModeHint::Numeric => "numeric",
            InputModeHint::Text => "text",
        }
    }
}
