use chrono::NaiveDate;

use crate::models::CycleInput;

pub const CYCLE_LENGTH_MIN: i64 = 20;
pub const CYCLE_LENGTH_MAX: i64 = 40;
pub const PERIOD_LENGTH_MIN: i64 = 2;
pub const PERIOD_LENGTH_MAX: i64 = 10;

pub const DEFAULT_CYCLE_LENGTH: u32 = 28;
pub const DEFAULT_PERIOD_LENGTH: u32 = 5;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("invalid start date: {0:?}")]
    InvalidDate(String),
}

/// Raw values as a form submission carries them, before any parsing.
#[derive(Debug, Clone, Default)]
pub struct RawForm {
    pub start_date: String,
    pub cycle_length: String,
    pub period_length: String,
    pub notes: String,
}

/// Parse and normalize one submission. The start date must be a real
/// `YYYY-MM-DD` calendar date; the two lengths fall back to their
/// defaults when absent or unparseable, and are clamped into range
/// rather than rejected.
pub fn parse(raw: &RawForm) -> Result<CycleInput, FormError> {
    let start_date = NaiveDate::parse_from_str(raw.start_date.trim(), "%Y-%m-%d")
        .map_err(|_| FormError::InvalidDate(raw.start_date.clone()))?;

    Ok(CycleInput {
        start_date,
        cycle_length: parse_length(
            &raw.cycle_length,
            DEFAULT_CYCLE_LENGTH,
            CYCLE_LENGTH_MIN,
            CYCLE_LENGTH_MAX,
        ),
        period_length: parse_length(
            &raw.period_length,
            DEFAULT_PERIOD_LENGTH,
            PERIOD_LENGTH_MIN,
            PERIOD_LENGTH_MAX,
        ),
        notes: raw.notes.trim().to_string(),
    })
}

fn parse_length(raw: &str, default: u32, min: i64, max: i64) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(n) => n.clamp(min, max) as u32,
        Err(_) => default,
    }
}
