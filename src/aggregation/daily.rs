//! Reduces hourly and sub-hourly samples to one [`DailyAggregate`] per local calendar day.

use crate::aggregation::filtering::ForecastFrameExt;
use crate::aggregation::frames::{hourly_frame, precipitation_frame, COL_DATE, COL_PRECIPITATION};
use crate::aggregation::reducer::*;
use crate::aggregation::wind::direction_from_components;
use crate::pipeline::error::ForecastError;
use crate::types::daily_aggregate::DailyAggregate;
use crate::types::sample::{ForecastData, PrecipitationSample};
use chrono::{DateTime, Days, NaiveDate};
use log::{debug, info, warn};
use polars::prelude::*;
use std::collections::HashMap;

const PRECIPITATION_INTERVALS: &str = "precipitation_intervals";
const PRECIPITATION_HOURS: &str = "precipitation_hours";
const PRECIPITATION_SUM: &str = "precipitation_sum";

/// Aggregates `data` into at most `days` daily rows, sorted by date.
///
/// The window starts at the earliest local date present in the joined hourly data and spans
/// `days` calendar days. Days without any hourly sample produce no row; use
/// [`check_coverage`] to turn such gaps into errors. Precipitation hours and totals are `0.0`
/// on days without sub-hourly precipitation.
///
/// # Errors
///
/// * [`ForecastError::InvalidDayCount`] when `days` is zero.
/// * [`ForecastError::EmptySeries`] when no hourly instant has both weather and air-quality data.
/// * [`ForecastError::MissingValue`] when a required field has no value for a whole day.
/// * [`ForecastError::DataFrameProcessing`] when Polars fails.
pub fn aggregate_daily(
    data: &ForecastData,
    days: usize,
) -> Result<Vec<DailyAggregate>, ForecastError> {
    if days == 0 {
        return Err(ForecastError::InvalidDayCount);
    }

    let hourly = hourly_frame(&data.weather, &data.air_quality)?
        .with_local_date()
        .collect()?;
    let hourly_rows = hourly.height();
    let first_date = first_date(&hourly)?.ok_or(ForecastError::EmptySeries)?;
    let last_date = first_date
        .checked_add_days(Days::new(days as u64 - 1))
        .ok_or(ForecastError::InvalidDayCount)?;
    debug!(
        "Aggregating {} hourly rows for window {} ..= {}",
        hourly_rows, first_date, last_date
    );

    let precipitation =
        daily_precipitation(&data.precipitation, data.precipitation_interval_minutes)?;

    let df = hourly
        .lazy()
        .filter_window(first_date, last_date)
        .group_by([col(COL_DATE)])
        .agg(daily_aggregations())
        .join(
            precipitation,
            [col(COL_DATE)],
            [col(COL_DATE)],
            JoinArgs::new(JoinType::Left),
        )
        .with_columns([
            col(PRECIPITATION_HOURS).fill_null(lit(0.0)),
            col(PRECIPITATION_SUM).fill_null(lit(0.0)),
        ])
        .sort([COL_DATE], SortMultipleOptions::default())
        .collect()?;

    let rows = extract_rows(&df)?;
    info!(
        "Aggregated {} hourly rows into {} daily rows starting {}",
        hourly_rows,
        rows.len(),
        first_date
    );
    Ok(rows)
}

/// Verifies that `rows` hold `days` consecutive dates.
///
/// # Errors
///
/// * [`ForecastError::EmptySeries`] when `rows` is empty.
/// * [`ForecastError::MissingDay`] for the first date without a row.
/// * [`ForecastError::IncompleteSeries`] when the data ends before `days` dates.
pub fn check_coverage(rows: &[DailyAggregate], days: usize) -> Result<(), ForecastError> {
    let first = rows.first().ok_or(ForecastError::EmptySeries)?.date;
    for (offset, row) in rows.iter().enumerate() {
        let expected = first
            .checked_add_days(Days::new(offset as u64))
            .ok_or(ForecastError::InvalidDayCount)?;
        if row.date != expected {
            return Err(ForecastError::MissingDay(expected));
        }
    }
    if rows.len() < days {
        return Err(ForecastError::IncompleteSeries {
            expected: days,
            found: rows.len(),
        });
    }
    Ok(())
}

/// Duration and total of sub-hourly precipitation per local date.
///
/// Only intervals with a positive amount are counted; a day's duration is the number of such
/// intervals times the interval length.
pub(crate) fn daily_precipitation(
    samples: &[PrecipitationSample],
    interval_minutes: u32,
) -> Result<LazyFrame, ForecastError> {
    Ok(precipitation_frame(samples)?
        .lazy()
        .with_local_date()
        .filter(col(COL_PRECIPITATION).gt(lit(0.0)))
        .group_by([col(COL_DATE)])
        .agg([
            col(COL_PRECIPITATION)
                .count()
                .alias(PRECIPITATION_INTERVALS),
            col(COL_PRECIPITATION).sum().alias(PRECIPITATION_SUM),
        ])
        .with_column(
            (col(PRECIPITATION_INTERVALS).cast(DataType::Float64)
                * lit(f64::from(interval_minutes))
                / lit(60.0))
            .alias(PRECIPITATION_HOURS),
        )
        .select([
            col(COL_DATE),
            col(PRECIPITATION_HOURS),
            col(PRECIPITATION_SUM),
        ]))
}

fn get_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, ForecastError> {
    df.column(name)
        .map_err(|e| ForecastError::ColumnNotFound(name.to_string(), e))
}

fn float_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, ForecastError> {
    let column = get_column(df, name)?.cast(&DataType::Float64)?;
    Ok(column.f64()?.into_iter().collect())
}

fn date_from_days(days: i32) -> Result<NaiveDate, ForecastError> {
    DateTime::from_timestamp(i64::from(days) * 86_400, 0)
        .map(|dt| dt.date_naive())
        .ok_or(ForecastError::DateOutOfRange(i64::from(days)))
}

fn date_values(df: &DataFrame) -> Result<Vec<Option<NaiveDate>>, ForecastError> {
    let column = get_column(df, COL_DATE)?.cast(&DataType::Int32)?;
    column
        .i32()?
        .into_iter()
        .map(|days| days.map(date_from_days).transpose())
        .collect()
}

fn first_date(df: &DataFrame) -> Result<Option<NaiveDate>, ForecastError> {
    let column = get_column(df, COL_DATE)?.cast(&DataType::Int32)?;
    column.i32()?.min().map(date_from_days).transpose()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Column values of the collected daily frame, looked up once.
struct DailyColumns {
    values: HashMap<&'static str, Vec<Option<f64>>>,
}

impl DailyColumns {
    fn load(df: &DataFrame, names: &[&'static str]) -> Result<Self, ForecastError> {
        let values = names
            .iter()
            .map(|&name| Ok((name, float_values(df, name)?)))
            .collect::<Result<_, ForecastError>>()?;
        Ok(Self { values })
    }

    fn optional(&self, name: &'static str, row: usize) -> Option<f64> {
        self.values
            .get(name)
            .and_then(|values| values.get(row).copied().flatten())
    }

    fn required(
        &self,
        name: &'static str,
        row: usize,
        date: NaiveDate,
    ) -> Result<f64, ForecastError> {
        self.optional(name, row)
            .ok_or(ForecastError::MissingValue { date, field: name })
    }
}

fn extract_rows(df: &DataFrame) -> Result<Vec<DailyAggregate>, ForecastError> {
    let mut names: Vec<&'static str> = DAILY_REDUCERS.iter().map(|(_, _, alias)| *alias).collect();
    names.extend([
        WIND_X_SUM,
        WIND_Y_SUM,
        WIND_PAIRS,
        PRECIPITATION_HOURS,
        PRECIPITATION_SUM,
    ]);
    let columns = DailyColumns::load(df, &names)?;

    date_values(df)?
        .into_iter()
        .enumerate()
        .map(|(row, date)| {
            // group keys come from the filtered window and are never null
            let date = date.ok_or(ForecastError::MissingValue {
                date: NaiveDate::MIN,
                field: COL_DATE,
            })?;
            let pairs = columns.optional(WIND_PAIRS, row).unwrap_or(0.0) as usize;
            let wind_direction = direction_from_components(
                columns.optional(WIND_X_SUM, row).unwrap_or(0.0),
                columns.optional(WIND_Y_SUM, row).unwrap_or(0.0),
                pairs,
            );
            if wind_direction.is_none() {
                warn!("No valid wind speed/bearing pairs on {}", date);
            }

            Ok(DailyAggregate {
                date,
                temperature_min: columns.required(TEMPERATURE_MIN, row, date)?,
                temperature_max: columns.required(TEMPERATURE_MAX, row, date)?,
                apparent_temperature_min: columns.required(APPARENT_TEMPERATURE_MIN, row, date)?,
                apparent_temperature_max: columns.required(APPARENT_TEMPERATURE_MAX, row, date)?,
                relative_humidity_max: columns.required(RELATIVE_HUMIDITY_MAX, row, date)?,
                precipitation_probability_max: columns.required(
                    PRECIPITATION_PROBABILITY_MAX,
                    row,
                    date,
                )?,
                rain_sum: round2(columns.optional(RAIN_SUM, row).unwrap_or(0.0)),
                showers_sum: round2(columns.optional(SHOWERS_SUM, row).unwrap_or(0.0)),
                snowfall_sum: round2(columns.optional(SNOWFALL_SUM, row).unwrap_or(0.0)),
                cloud_cover_mean: columns.required(CLOUD_COVER_MEAN, row, date)?,
                wind_speed_mean: columns.optional(WIND_SPEED_MEAN, row),
                wind_gusts_max: columns.optional(WIND_GUSTS_MAX, row),
                uv_index_max: columns.required(UV_INDEX_MAX, row, date)?,
                uv_index_clear_sky_max: columns.optional(UV_INDEX_CLEAR_SKY_MAX, row),
                aqi_max: columns.required(AQI_MAX, row, date)?,
                weather_code: columns.required(WEATHER_CODE_MAX, row, date)?.round() as i64,
                wind_direction,
                precipitation_hours: columns.optional(PRECIPITATION_HOURS, row).unwrap_or(0.0),
                precipitation_sum: round2(columns.optional(PRECIPITATION_SUM, row).unwrap_or(0.0)),
                sample_count: columns.optional(SAMPLE_COUNT, row).unwrap_or(0.0) as u32,
            })
        })
        .collect()
}
