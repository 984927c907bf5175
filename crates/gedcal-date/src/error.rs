//! Crate-level error umbrella.

use thiserror::Error;

use crate::calendar::CalendarError;
use crate::date::{ConversionError, ParseError, ValidationError};

/// Any error raised by this crate.
#[derive(Error, Debug)]
pub enum DateError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    #[error("Calendar error: {0}")]
    Calendar(#[from] CalendarError),

    #[error(transparent)]
    Core(#[from] gedcal_core::error::CoreError),
}

pub type DateResult<T> = std::result::Result<T, DateError>;
