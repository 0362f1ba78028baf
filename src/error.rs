use thiserror::Error;

use crate::mode::Unit;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("Input angle ({unit}) out of boundary: {angle}")]
    OutOfRange { angle: f64, unit: Unit },

    #[error("Unknown angle mode code: {0} (expected 0..=3)")]
    UnknownMode(i32),

    #[error("Unknown angle mode: {0:?}")]
    ParseMode(String),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
