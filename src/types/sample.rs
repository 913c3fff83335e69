//! Raw time-series input handed to the aggregation pipeline by a data source.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A named hourly measurement. The API name doubles as the DataFrame column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HourlyVariable {
    Temperature,
    RelativeHumidity,
    ApparentTemperature,
    PrecipitationProbability,
    Rain,
    Showers,
    Snowfall,
    CloudCover,
    WindSpeed,
    WindDirection,
    WindGusts,
    UvIndex,
    UvIndexClearSky,
    WeatherCode,
    /// US air quality index, delivered by the air-quality API rather than the forecast API.
    UsAqi,
}

impl HourlyVariable {
    /// Variables requested from the forecast endpoint, in request order.
    pub const WEATHER: [HourlyVariable; 14] = [
        HourlyVariable::Temperature,
        HourlyVariable::RelativeHumidity,
        HourlyVariable::ApparentTemperature,
        HourlyVariable::PrecipitationProbability,
        HourlyVariable::Rain,
        HourlyVariable::Showers,
        HourlyVariable::Snowfall,
        HourlyVariable::CloudCover,
        HourlyVariable::WindSpeed,
        HourlyVariable::WindDirection,
        HourlyVariable::WindGusts,
        HourlyVariable::UvIndex,
        HourlyVariable::UvIndexClearSky,
        HourlyVariable::WeatherCode,
    ];

    /// Variables requested from the air-quality endpoint.
    pub const AIR_QUALITY: [HourlyVariable; 1] = [HourlyVariable::UsAqi];

    pub fn api_name(&self) -> &'static str {
        match self {
            HourlyVariable::Temperature => "temperature_2m",
            HourlyVariable::RelativeHumidity => "relative_humidity_2m",
            HourlyVariable::ApparentTemperature => "apparent_temperature",
            HourlyVariable::PrecipitationProbability => "precipitation_probability",
            HourlyVariable::Rain => "rain",
            HourlyVariable::Showers => "showers",
            HourlyVariable::Snowfall => "snowfall",
            HourlyVariable::CloudCover => "cloud_cover",
            HourlyVariable::WindSpeed => "wind_speed_10m",
            HourlyVariable::WindDirection => "wind_direction_10m",
            HourlyVariable::WindGusts => "wind_gusts_10m",
            HourlyVariable::UvIndex => "uv_index",
            HourlyVariable::UvIndexClearSky => "uv_index_clear_sky",
            HourlyVariable::WeatherCode => "weather_code",
            HourlyVariable::UsAqi => "us_aqi",
        }
    }

    pub fn from_api_name(name: &str) -> Option<Self> {
        Self::WEATHER
            .iter()
            .chain(Self::AIR_QUALITY.iter())
            .find(|variable| variable.api_name() == name)
            .copied()
    }
}

impl fmt::Display for HourlyVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

/// One measurement instant with whatever variables the source delivered for it.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use weather_calendar::{HourlyVariable, RawSample};
///
/// let tz = FixedOffset::west_opt(6 * 3600).unwrap();
/// let sample = RawSample::new(tz.with_ymd_and_hms(2025, 6, 1, 13, 0, 0).unwrap())
///     .with(HourlyVariable::Temperature, 24.5)
///     .with(HourlyVariable::Rain, f64::NAN);
///
/// assert_eq!(sample.get(HourlyVariable::Temperature), Some(24.5));
/// assert_eq!(sample.get(HourlyVariable::Rain), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RawSample {
    pub time: DateTime<FixedOffset>,
    values: HashMap<HourlyVariable, f64>,
}

impl RawSample {
    pub fn new(time: DateTime<FixedOffset>) -> Self {
        Self {
            time,
            values: HashMap::new(),
        }
    }

    pub fn with(mut self, variable: HourlyVariable, value: f64) -> Self {
        self.set(variable, value);
        self
    }

    pub fn set(&mut self, variable: HourlyVariable, value: f64) {
        self.values.insert(variable, value);
    }

    /// The value of `variable`, or `None` when it is absent or not a finite number.
    pub fn get(&self, variable: HourlyVariable) -> Option<f64> {
        self.values
            .get(&variable)
            .copied()
            .filter(|value| value.is_finite())
    }
}

/// One sub-hourly precipitation reading. Only used for duration and daily total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecipitationSample {
    pub time: DateTime<FixedOffset>,
    pub amount: Option<f64>,
}

impl PrecipitationSample {
    pub fn new(time: DateTime<FixedOffset>, amount: Option<f64>) -> Self {
        Self { time, amount }
    }
}

/// Whether a response was served from the local cache, and when it was originally fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CacheMetadata {
    pub from_cache: bool,
    /// `None` when the response was just fetched and the cache entry is brand new.
    pub created_at: Option<DateTime<Utc>>,
}

/// Everything a data source delivers for one forecast request.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastData {
    /// Hourly forecast samples.
    pub weather: Vec<RawSample>,
    /// Hourly air-quality samples, joined with `weather` on their instant.
    pub air_quality: Vec<RawSample>,
    /// Sub-hourly precipitation samples.
    pub precipitation: Vec<PrecipitationSample>,
    /// Spacing of `precipitation` samples.
    pub precipitation_interval_minutes: u32,
    /// The location's offset from UTC at request time.
    pub utc_offset: FixedOffset,
    /// E.g. `"MDT"`. Used in the footer of every description.
    pub timezone_abbreviation: String,
    /// Cache metadata of the forecast response.
    pub cache: CacheMetadata,
}
