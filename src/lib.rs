mod aggregation;
mod describe;
mod error;
mod lookup;
mod open_meteo;
mod pipeline;
mod types;
mod utils;
mod weather_calendar;

#[cfg(test)]
mod test_support;

pub use error::WeatherCalendarError;
pub use weather_calendar::*;

pub use aggregation::daily::{aggregate_daily, check_coverage};
pub use aggregation::filtering::ForecastFrameExt;
pub use aggregation::reducer::{Reducer, DAILY_REDUCERS};
pub use aggregation::wind::{direction_from_components, vector_average, weighted_components};

pub use describe::cleanup::clean_description;
pub use describe::format::{format_float, format_hours_minutes, format_rounded};
pub use describe::precipitation::*;
pub use describe::synthesizer::{describe_day, UpdateStamp, ATTRIBUTION};

pub use lookup::error::LookupError;
pub use lookup::range_table::{RangeEntry, RangeTable, UNBOUNDED};
pub use lookup::tables;

pub use open_meteo::cache::{CacheEntry, CachePolicy, ResponseCache};
pub use open_meteo::client::OpenMeteoClient;
pub use open_meteo::error::SourceError;
pub use open_meteo::response::{ForecastResponse, GeocodingResponse, GeocodingResult, TimeSeriesBlock};

pub use pipeline::error::ForecastError;
pub use pipeline::report::{build_report, FORECAST_DAYS};

pub use types::daily_aggregate::DailyAggregate;
pub use types::forecast_entry::{ForecastEntry, ForecastReport};
pub use types::location::{validate_zip, LatLon, Location};
pub use types::sample::{CacheMetadata, ForecastData, HourlyVariable, PrecipitationSample, RawSample};
pub use types::units::{ParseUnitsError, Units};
pub use types::weather_condition::WmoCode;
