use crate::lookup::error::LookupError;
use chrono::NaiveDate;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("No hourly samples to aggregate")]
    EmptySeries,

    #[error("Forecast must cover at least one day")]
    InvalidDayCount,

    #[error("Expected {expected} days of forecast data but only {found} are available")]
    IncompleteSeries { expected: usize, found: usize },

    #[error("No samples for {0} inside the forecast window")]
    MissingDay(NaiveDate),

    #[error("Aggregated field '{field}' is missing for {date}")]
    MissingValue { date: NaiveDate, field: &'static str },

    #[error("Date value {0} is out of range")]
    DateOutOfRange(i64),

    #[error("Required column '{0}' not found in DataFrame")]
    ColumnNotFound(String, #[source] PolarsError),

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}
