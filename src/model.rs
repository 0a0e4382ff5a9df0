// Core structs: Sample, DaySample, TrendReport
use chrono::NaiveDate;

/// One market-chart observation: epoch-millisecond timestamp plus value.
/// The value is a price or a traded volume depending on the series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub timestamp_ms: i64,
    pub value: f64,
}

/// Representative sample for one UTC calendar day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySample {
    pub date: NaiveDate,
    pub sample: Sample,
}

/// Both series of one market-chart payload, ascending by timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSeries {
    pub prices: Vec<Sample>,
    pub volumes: Vec<Sample>,
}

/// Parameters of one market-chart range request. The range is inclusive
/// and expressed in UTC calendar days.
#[derive(Debug, Clone)]
pub struct RangeRequest {
    pub coin_id: String,
    pub vs_currency: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Full analysis output for one date range.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendReport {
    pub longest_downward_streak_days: u32,
    pub peak_volume_day: NaiveDate,
    pub peak_volume_amount: f64,
    pub best_buy_day: NaiveDate,
    pub best_sell_day: NaiveDate,
    pub all_days_bad_trend: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("http request failed: {0}")]
    Http(String),
    #[error("request timed out")]
    Timeout,
    #[error("unexpected status code {0}")]
    BadStatus(u16),
    #[error("end date must not be earlier than start date")]
    InvalidDateRange,
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("malformed market chart payload: {0}")]
    MalformedPayload(String),
    #[error("missing field: {0}")]
    MissingField(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("cannot analyze an empty {0} series")]
    EmptySeries(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("telegram api error: {0}")]
    ApiError(String),
    #[error("telegram unreachable")]
    Unreachable,
}
