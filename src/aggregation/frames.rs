//! Builds Polars frames from raw samples.
//!
//! Every frame carries a `local_datetime` column holding each sample's wall-clock time in its
//! own offset, so calendar dates are derived from local time rather than fixed 24h buckets.

use crate::aggregation::wind::weighted_components;
use crate::types::sample::{HourlyVariable, PrecipitationSample, RawSample};
use chrono::NaiveDateTime;
use polars::prelude::*;

pub(crate) const COL_TIMESTAMP: &str = "timestamp";
pub(crate) const COL_LOCAL_DATETIME: &str = "local_datetime";
pub(crate) const COL_DATE: &str = "date";
pub(crate) const COL_WIND_X: &str = "wind_x";
pub(crate) const COL_WIND_Y: &str = "wind_y";
pub(crate) const COL_PRECIPITATION: &str = "precipitation";

fn time_columns<'a>(times: impl Iterator<Item = &'a chrono::DateTime<chrono::FixedOffset>>) -> [Column; 2] {
    let (utc, local): (Vec<NaiveDateTime>, Vec<NaiveDateTime>) = times
        .map(|time| (time.naive_utc(), time.naive_local()))
        .unzip();
    [
        Series::new(COL_TIMESTAMP.into(), utc).into(),
        Series::new(COL_LOCAL_DATETIME.into(), local).into(),
    ]
}

fn variable_column(samples: &[RawSample], variable: HourlyVariable) -> Column {
    let values: Vec<Option<f64>> = samples.iter().map(|s| s.get(variable)).collect();
    Series::new(variable.api_name().into(), values).into()
}

/// A frame with one row per sample and one `Float64` column per requested variable.
pub(crate) fn sample_frame(
    samples: &[RawSample],
    variables: &[HourlyVariable],
) -> PolarsResult<DataFrame> {
    let mut columns: Vec<Column> = time_columns(samples.iter().map(|s| &s.time)).into();
    columns.extend(variables.iter().map(|&v| variable_column(samples, v)));
    DataFrame::new(columns)
}

/// The hourly forecast frame, including the per-sample wind vector components.
pub(crate) fn weather_frame(samples: &[RawSample]) -> PolarsResult<DataFrame> {
    let mut df = sample_frame(samples, &HourlyVariable::WEATHER)?;

    let (wind_x, wind_y): (Vec<Option<f64>>, Vec<Option<f64>>) = samples
        .iter()
        .map(|s| {
            match weighted_components(
                s.get(HourlyVariable::WindDirection),
                s.get(HourlyVariable::WindSpeed),
            ) {
                Some((x, y)) => (Some(x), Some(y)),
                None => (None, None),
            }
        })
        .unzip();
    df.with_column(Series::new(COL_WIND_X.into(), wind_x))?;
    df.with_column(Series::new(COL_WIND_Y.into(), wind_y))?;
    Ok(df)
}

/// The hourly forecast and air-quality frames inner-joined on their UTC instant.
pub(crate) fn hourly_frame(
    weather: &[RawSample],
    air_quality: &[RawSample],
) -> PolarsResult<LazyFrame> {
    let weather = weather_frame(weather)?.lazy();
    let air_quality = sample_frame(air_quality, &HourlyVariable::AIR_QUALITY)?
        .lazy()
        .select([
            col(COL_TIMESTAMP),
            col(HourlyVariable::UsAqi.api_name()),
        ]);

    Ok(weather.join(
        air_quality,
        [col(COL_TIMESTAMP)],
        [col(COL_TIMESTAMP)],
        JoinArgs::new(JoinType::Inner),
    ))
}

/// Sub-hourly precipitation readings.
pub(crate) fn precipitation_frame(samples: &[PrecipitationSample]) -> PolarsResult<DataFrame> {
    let mut columns: Vec<Column> = time_columns(samples.iter().map(|s| &s.time)).into();
    let amounts: Vec<Option<f64>> = samples
        .iter()
        .map(|s| s.amount.filter(|a| a.is_finite()))
        .collect();
    columns.push(Series::new(COL_PRECIPITATION.into(), amounts).into());
    DataFrame::new(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{hour, TestSeries};

    #[test]
    fn test_weather_frame_has_variable_and_wind_columns() -> Result<(), Box<dyn std::error::Error>>
    {
        let series = TestSeries::new(1).build();
        let df = weather_frame(&series.weather)?;

        assert_eq!(df.height(), 24);
        for variable in HourlyVariable::WEATHER {
            assert_eq!(df.column(variable.api_name())?.dtype(), &DataType::Float64);
        }
        assert!(df.column(COL_WIND_X).is_ok());
        assert!(matches!(
            df.column(COL_LOCAL_DATETIME)?.dtype(),
            DataType::Datetime(_, None)
        ));
        Ok(())
    }

    #[test]
    fn test_missing_values_become_nulls() -> Result<(), Box<dyn std::error::Error>> {
        let mut series = TestSeries::new(1).build();
        series.weather[3].set(HourlyVariable::WindSpeed, f64::NAN);
        let df = weather_frame(&series.weather)?;

        assert_eq!(df.column(HourlyVariable::WindSpeed.api_name())?.null_count(), 1);
        assert_eq!(df.column(COL_WIND_X)?.null_count(), 1);
        Ok(())
    }

    #[test]
    fn test_hourly_frame_keeps_only_matching_instants() -> Result<(), Box<dyn std::error::Error>> {
        let mut series = TestSeries::new(1).build();
        series.air_quality.retain(|s| s.time != hour(0, 5));
        let df = hourly_frame(&series.weather, &series.air_quality)?.collect()?;

        assert_eq!(df.height(), 23);
        assert!(df.column(HourlyVariable::UsAqi.api_name()).is_ok());
        Ok(())
    }
}
