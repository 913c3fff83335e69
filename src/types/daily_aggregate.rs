use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day of reduced forecast data.
///
/// Produced by [`crate::aggregate_daily`]; read-only afterwards. Amount fields (`rain_sum`,
/// `showers_sum`, `snowfall_sum`, `precipitation_sum`) are rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub apparent_temperature_min: f64,
    pub apparent_temperature_max: f64,
    pub relative_humidity_max: f64,
    pub precipitation_probability_max: f64,
    pub rain_sum: f64,
    pub showers_sum: f64,
    pub snowfall_sum: f64,
    pub cloud_cover_mean: f64,
    /// `None` when the day has no wind speed readings.
    pub wind_speed_mean: Option<f64>,
    pub wind_gusts_max: Option<f64>,
    pub uv_index_max: f64,
    pub uv_index_clear_sky_max: Option<f64>,
    pub aqi_max: f64,
    /// Highest WMO code of the day, see [`crate::WmoCode`].
    pub weather_code: i64,
    /// Speed-weighted circular mean in `[0, 360)`; `None` when no sample had both a speed and
    /// a bearing.
    pub wind_direction: Option<f64>,
    pub precipitation_hours: f64,
    pub precipitation_sum: f64,
    /// Number of hourly samples with an air-quality reading that day.
    pub sample_count: u32,
}
