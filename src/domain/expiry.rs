use super::settings::{EXPIRY_MAX_DAYS, EXPIRY_MIN_DAYS};
use chrono::{Days, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;

/// The calendar date by which a bank transfer must be completed.
///
/// Displays and serializes as an ISO date (`YYYY-MM-DD`), the format the
/// provider expects for `dueDate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DueDate(NaiveDate);

impl DueDate {
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl Serialize for DueDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Computes the due date for a new payment.
///
/// Returns `None` when the feature is disabled or `days` lies outside
/// `[EXPIRY_MIN_DAYS, EXPIRY_MAX_DAYS]`. `today` is always supplied by the caller.
pub fn compute_due_date(enabled: bool, days: i64, today: NaiveDate) -> Option<DueDate> {
    if !enabled || !(EXPIRY_MIN_DAYS..=EXPIRY_MAX_DAYS).contains(&days) {
        return None;
    }
    today
        .checked_add_days(Days::new(days.unsigned_abs()))
        .map(DueDate)
}
