use std::fmt;

use crate::shared::error::OtpError;

/// Number of cells in the code, fixed for the lifetime of one widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity(usize);

impl Capacity {
    pub fn new(value: usize) -> Result<Self, OtpError> {
        if value == 0 {
            return Err(OtpError::InvalidCapacity(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> usize {
        self.0
    }

    /// Index of the rightmost cell.
    pub fn last_index(&self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
