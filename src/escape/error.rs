use thiserror::Error;

use super::flags::EscapeFlags;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EscapeError {
    #[error("Invalid escape combination {flags}: {reason}")]
    InvalidEscapeCombination { flags: EscapeFlags, reason: String },
}

pub type EscapeResult<T> = Result<T, EscapeError>;

impl EscapeError {
    pub fn invalid_combination<S: Into<String>>(flags: EscapeFlags, reason: S) -> Self {
        EscapeError::InvalidEscapeCombination {
            flags,
            reason: reason.into(),
        }
    }
}
