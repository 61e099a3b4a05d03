use std::fmt;

use crate::shared::Floor;

/// Rejection of a stop request. The car state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// Requested floor lies outside `[min, max]`.
    OutOfRange { floor: Floor, min: Floor, max: Floor },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::OutOfRange { floor, min, max } => {
                write!(f, "Floor {floor} out of range [{min}..{max}].")
            }
        }
    }
}

impl std::error::Error for RequestError {}
