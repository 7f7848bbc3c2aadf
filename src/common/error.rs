use thiserror::Error;

use super::codec::Mode;
use super::metadata::ECLevel;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum QRError {
    #[error("invalid {mode:?} character {ch:?} at position {position}")]
    InvalidCharacter { mode: Mode, position: usize, ch: char },

    #[error("{char_count} {mode:?} characters exceed the symbol capacity at EC level {ec_level:?}")]
    CapacityExceeded { mode: Mode, ec_level: ECLevel, char_count: usize },

    #[error("domain error: {0}")]
    DomainError(&'static str),

    #[error("kanji transcoding failed: {0}")]
    TranscodingFailure(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type QRResult<T> = Result<T, QRError>;
