use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::form::{DEFAULT_CYCLE_LENGTH, DEFAULT_PERIOD_LENGTH};

/// User input for one tracking session. Overwritten whole on every
/// submission; records saved by older versions may lack fields, which
/// fall back to defaults on load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CycleInput {
    pub start_date: NaiveDate,
    #[serde(default = "default_cycle_length")]
    pub cycle_length: u32,
    #[serde(default = "default_period_length")]
    pub period_length: u32,
    #[serde(default)]
    pub notes: String,
}

fn default_cycle_length() -> u32 {
    DEFAULT_CYCLE_LENGTH
}

fn default_period_length() -> u32 {
    DEFAULT_PERIOD_LENGTH
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Prediction {
    pub next_period: NaiveDate,
    pub ovulation_day: NaiveDate,
    pub fertile_start: NaiveDate,
    pub fertile_end: NaiveDate,
    pub period_end: NaiveDate,
}

/// One entry in the future-cycle forecast. `cycle_number` is 1-based.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectedCycle {
    pub cycle_number: usize,
    pub start: NaiveDate,
    pub prediction: Prediction,
}

/// Data returned to the frontend after a successful computation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackerView {
    pub input: CycleInput,
    pub prediction: Prediction,
    pub projected: Vec<ProjectedCycle>,
    pub summary_html: String,
    pub months_html: String,
}
