//! The per-field reducers that turn hourly rows into one daily row.

use crate::aggregation::frames::{COL_WIND_X, COL_WIND_Y};
use crate::types::sample::HourlyVariable;
use polars::prelude::{col, Expr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reducer {
    Min,
    Max,
    Mean,
    Sum,
    /// Number of non-null values.
    Count,
}

impl Reducer {
    pub fn expr(&self, column: &str) -> Expr {
        let column = col(column);
        match self {
            Reducer::Min => column.min(),
            Reducer::Max => column.max(),
            Reducer::Mean => column.mean(),
            Reducer::Sum => column.sum(),
            Reducer::Count => column.count(),
        }
    }
}

pub(crate) const TEMPERATURE_MIN: &str = "temperature_min";
pub(crate) const TEMPERATURE_MAX: &str = "temperature_max";
pub(crate) const APPARENT_TEMPERATURE_MIN: &str = "apparent_temperature_min";
pub(crate) const APPARENT_TEMPERATURE_MAX: &str = "apparent_temperature_max";
pub(crate) const RELATIVE_HUMIDITY_MAX: &str = "relative_humidity_max";
pub(crate) const PRECIPITATION_PROBABILITY_MAX: &str = "precipitation_probability_max";
pub(crate) const RAIN_SUM: &str = "rain_sum";
pub(crate) const SHOWERS_SUM: &str = "showers_sum";
pub(crate) const SNOWFALL_SUM: &str = "snowfall_sum";
pub(crate) const CLOUD_COVER_MEAN: &str = "cloud_cover_mean";
pub(crate) const WIND_SPEED_MEAN: &str = "wind_speed_mean";
pub(crate) const WIND_GUSTS_MAX: &str = "wind_gusts_max";
pub(crate) const UV_INDEX_MAX: &str = "uv_index_max";
pub(crate) const UV_INDEX_CLEAR_SKY_MAX: &str = "uv_index_clear_sky_max";
pub(crate) const AQI_MAX: &str = "aqi_max";
pub(crate) const WEATHER_CODE_MAX: &str = "weather_code_max";
pub(crate) const SAMPLE_COUNT: &str = "sample_count";
pub(crate) const WIND_X_SUM: &str = "wind_x_sum";
pub(crate) const WIND_Y_SUM: &str = "wind_y_sum";
pub(crate) const WIND_PAIRS: &str = "wind_pairs";

/// `(source variable, reducer, output column)` for every hourly variable that feeds the
/// daily row. Condition code uses `Max` as a "worst weather of the day" proxy.
pub const DAILY_REDUCERS: [(HourlyVariable, Reducer, &str); 17] = [
    (HourlyVariable::Temperature, Reducer::Min, TEMPERATURE_MIN),
    (HourlyVariable::Temperature, Reducer::Max, TEMPERATURE_MAX),
    (HourlyVariable::ApparentTemperature, Reducer::Min, APPARENT_TEMPERATURE_MIN),
    (HourlyVariable::ApparentTemperature, Reducer::Max, APPARENT_TEMPERATURE_MAX),
    (HourlyVariable::RelativeHumidity, Reducer::Max, RELATIVE_HUMIDITY_MAX),
    (HourlyVariable::PrecipitationProbability, Reducer::Max, PRECIPITATION_PROBABILITY_MAX),
    (HourlyVariable::Rain, Reducer::Sum, RAIN_SUM),
    (HourlyVariable::Showers, Reducer::Sum, SHOWERS_SUM),
    (HourlyVariable::Snowfall, Reducer::Sum, SNOWFALL_SUM),
    (HourlyVariable::CloudCover, Reducer::Mean, CLOUD_COVER_MEAN),
    (HourlyVariable::WindSpeed, Reducer::Mean, WIND_SPEED_MEAN),
    (HourlyVariable::WindGusts, Reducer::Max, WIND_GUSTS_MAX),
    (HourlyVariable::UvIndex, Reducer::Max, UV_INDEX_MAX),
    (HourlyVariable::UvIndexClearSky, Reducer::Max, UV_INDEX_CLEAR_SKY_MAX),
    (HourlyVariable::UsAqi, Reducer::Max, AQI_MAX),
    (HourlyVariable::WeatherCode, Reducer::Max, WEATHER_CODE_MAX),
    (HourlyVariable::UsAqi, Reducer::Count, SAMPLE_COUNT),
];

/// All aggregation expressions for the daily group-by, wind component sums included.
pub(crate) fn daily_aggregations() -> Vec<Expr> {
    DAILY_REDUCERS
        .iter()
        .map(|(variable, reducer, alias)| reducer.expr(variable.api_name()).alias(*alias))
        .chain([
            Reducer::Sum.expr(COL_WIND_X).alias(WIND_X_SUM),
            Reducer::Sum.expr(COL_WIND_Y).alias(WIND_Y_SUM),
            Reducer::Count.expr(COL_WIND_X).alias(WIND_PAIRS),
        ])
        .collect()
}
