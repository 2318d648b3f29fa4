use chrono::NaiveDate;
use serde::Serialize;

/// One cancelled event announced for the current week.
///
/// Serializes in the shape the site's data file expects: `name`,
/// `reason`, then `date` as an ISO `YYYY-MM-DD` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cancellation {
    pub name: String,
    pub reason: String,
    pub date: NaiveDate,
}
