//! # Age Calculator
//!
//! Decomposes the span between two dates into whole years, months, and days,
//! plus running totals (months, weeks, days, hours). The decomposition is
//! exact: re-adding the components to the start date reproduces the end date
//! (month additions clamp to month ends, e.g. Jan 31 + 1 month = Feb 28).
//!
//! A start date after the end date is rejected rather than producing
//! negative components.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use toolpack_core::formulas::age::{calculate, AgeInput};
//!
//! let input = AgeInput {
//!     start_date: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
//!     end_date: NaiveDate::from_ymd_opt(2024, 6, 14),
//! };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.years, 33);
//! assert_eq!(result.months, 11);
//! assert_eq!(result.days, 30);
//! ```

use chrono::{Datelike, Duration, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{ToolError, ToolResult};

/// Input parameters for an age breakdown.
///
/// ## JSON Example
///
/// ```json
/// {
///   "start_date": "1990-06-15",
///   "end_date": "2024-06-14"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeInput {
    /// Start of the span (typically a birth date)
    pub start_date: NaiveDate,

    /// End of the span; omitted means "today" in local time
    pub end_date: Option<NaiveDate>,
}

impl AgeInput {
    /// Resolve the end date, defaulting to the current local date.
    pub fn resolved_end(&self) -> NaiveDate {
        self.end_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Results from an age breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeResult {
    /// Whole calendar years elapsed
    pub years: u32,

    /// Whole months beyond the last full year (0-11)
    pub months: u32,

    /// Days beyond the last full month
    pub days: u32,

    /// Total whole months elapsed
    pub total_months: u32,

    /// Total whole weeks elapsed
    pub total_weeks: i64,

    /// Total days elapsed
    pub total_days: i64,

    /// Total hours elapsed (days * 24)
    pub total_hours: i64,

    /// The end date the span was measured against
    pub measured_to: NaiveDate,
}

/// Break the span between the two dates into calendar components.
///
/// # Returns
///
/// * `Ok(AgeResult)` - Exact decomposition
/// * `Err(ToolError::InvalidDateRange)` - If the start date is after the end
pub fn calculate(input: &AgeInput) -> ToolResult<AgeResult> {
    let start = input.start_date;
    let end = input.resolved_end();

    if start > end {
        return Err(ToolError::invalid_date_range(
            start.to_string(),
            end.to_string(),
        ));
    }

    // Whole months elapsed: calendar-field difference, minus one when the
    // end's day-of-month has not yet caught up with the start's.
    let mut total_months =
        (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);
    if month_anchor(start, total_months) > end {
        total_months -= 1;
    }
    let total_months = total_months.max(0) as u32;

    // Leftover days run from the month-aligned anchor to the end date.
    let anchor = month_anchor(start, total_months as i32);
    let days = end.signed_duration_since(anchor).num_days();

    let total_days = end.signed_duration_since(start).num_days();

    Ok(AgeResult {
        years: total_months / 12,
        months: total_months % 12,
        days: days as u32,
        total_months,
        total_weeks: total_days / 7,
        total_days,
        total_hours: total_days * 24,
        measured_to: end,
    })
}

/// Advance `start` by `months`, clamping to the target month's last day.
fn month_anchor(start: NaiveDate, months: i32) -> NaiveDate {
    if months <= 0 {
        return start;
    }
    start
        .checked_add_months(Months::new(months as u32))
        .unwrap_or(start)
}

/// Re-add a (years, months, days) decomposition to a start date.
///
/// Used to verify invertibility; exposed for front ends that display the
/// reconstruction alongside the breakdown.
pub fn add_components(start: NaiveDate, years: u32, months: u32, days: u32) -> NaiveDate {
    let advanced = start
        .checked_add_months(Months::new(years * 12 + months))
        .unwrap_or(start);
    advanced + Duration::days(days as i64)
}
