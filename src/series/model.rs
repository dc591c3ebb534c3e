use chrono::{DateTime, NaiveDate};
use serde::Serialize;

/// One trading-day record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockPricePoint {
    /// Calendar date string, in whatever format the backend emits.
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl StockPricePoint {
    /// Parses [`date`](Self::date) as a calendar date.
    ///
    /// Accepts `YYYY-MM-DD` and RFC 3339 timestamps (the date part is kept).
    /// Returns `None` for any other format.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
    }
}

/// Commonly used range identifiers.
///
/// The valid set is owned by the backend; any string can be passed to the store,
/// these are only conveniences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Range {
    Day,
    Month,
    Year,
}

impl Range {
    pub fn as_str(self) -> &'static str {
        match self {
            Range::Day => "day",
            Range::Month => "month",
            Range::Year => "year",
        }
    }
}

impl From<Range> for String {
    fn from(range: Range) -> Self {
        range.as_str().to_string()
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
