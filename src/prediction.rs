use chrono::NaiveDate;

use crate::models::{Prediction, ProjectedCycle};

/// Ovulation is estimated at a fixed 14 days before the next period.
const OVULATION_OFFSET_DAYS: i64 = 14;
/// The fertile window opens 5 days before ovulation and closes on
/// ovulation day itself (6 days inclusive).
const FERTILE_LEAD_DAYS: i64 = 5;

/// How many future cycles the forecast shows.
pub const PROJECTION_COUNT: usize = 6;

/// Predict one cycle from its start date. Callers clamp the lengths
/// before calling; this does no range checks and no I/O.
pub fn predict(start: NaiveDate, cycle_length: u32, period_length: u32) -> Prediction {
    let next_period = start + chrono::Duration::days(cycle_length as i64);
    let ovulation_day = next_period - chrono::Duration::days(OVULATION_OFFSET_DAYS);
    let fertile_start = ovulation_day - chrono::Duration::days(FERTILE_LEAD_DAYS);
    let fertile_end = ovulation_day;
    let period_end = start + chrono::Duration::days(period_length as i64 - 1);

    Prediction {
        next_period,
        ovulation_day,
        fertile_start,
        fertile_end,
        period_end,
    }
}

/// Project the next `count` cycles after `start`. The anchor rolls
/// forward one cycle length per step, so cycle i starts
/// i * cycle_length days after `start`. Lengths are reused unchanged
/// for every projected cycle.
pub fn project(
    start: NaiveDate,
    cycle_length: u32,
    period_length: u32,
    count: usize,
) -> Vec<ProjectedCycle> {
    let mut projected = Vec::with_capacity(count);
    let mut anchor = start;

    for i in 1..=count {
        let this_start = anchor + chrono::Duration::days(cycle_length as i64);
        projected.push(ProjectedCycle {
            cycle_number: i,
            start: this_start,
            prediction: predict(this_start, cycle_length, period_length),
        });
        anchor = this_start;
    }

    projected
}
