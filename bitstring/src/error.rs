use crate::Element;

/// Failure category of a [`BitStringError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input or mismatched operand lengths.
    InvalidArgument,
    /// Truncating by more elements than are available.
    LogicError,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BitStringError {
    #[error("invalid character {character:?} at position {position}, expected '0' or '1'")]
    InvalidCharacter { position: usize, character: char },
    #[error("invalid element {value} at position {position}, expected 0 or 1")]
    InvalidElement { position: usize, value: Element },
    #[error("length mismatch: left operand has {left} elements, right operand has {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("negative size: cannot remove {subtrahend} elements from {minuend}")]
    NegativeSize { minuend: usize, subtrahend: usize },
}

impl BitStringError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            BitStringError::InvalidCharacter { .. }
            | BitStringError::InvalidElement { .. }
            | BitStringError::LengthMismatch { .. } => ErrorKind::InvalidArgument,
            BitStringError::NegativeSize { .. } => ErrorKind::LogicError,
        }
    }
}
