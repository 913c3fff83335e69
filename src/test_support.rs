//! Synthetic forecast data shared by unit tests.

use crate::types::daily_aggregate::DailyAggregate;
use crate::types::sample::{
    CacheMetadata, ForecastData, HourlyVariable, PrecipitationSample, RawSample,
};
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone};

pub(crate) const PRECIPITATION_INTERVAL_MINUTES: u32 = 15;

/// UTC-6, the offset of every sample built here unless a test says otherwise.
pub(crate) fn offset() -> FixedOffset {
    FixedOffset::west_opt(6 * 3600).unwrap()
}

/// Day `d` of the synthetic series, counted from 2025-06-01.
pub(crate) fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap() + Duration::days(i64::from(d))
}

pub(crate) fn hour_in(offset: FixedOffset, d: u32, h: u32) -> DateTime<FixedOffset> {
    offset
        .from_local_datetime(&day(d).and_hms_opt(h, 0, 0).unwrap())
        .single()
        .unwrap()
}

pub(crate) fn hour(d: u32, h: u32) -> DateTime<FixedOffset> {
    hour_in(offset(), d, h)
}

/// Builds [`ForecastData`] with every hourly variable populated and a dry precipitation series.
pub(crate) struct TestSeries {
    days: u32,
}

impl TestSeries {
    pub(crate) fn new(days: u32) -> Self {
        Self { days }
    }

    fn weather_sample(time: DateTime<FixedOffset>, h: u32) -> RawSample {
        let h = f64::from(h);
        RawSample::new(time)
            .with(HourlyVariable::Temperature, 10.0 + h * 0.5)
            .with(HourlyVariable::ApparentTemperature, 9.0 + h * 0.5)
            .with(HourlyVariable::RelativeHumidity, 60.0)
            .with(HourlyVariable::PrecipitationProbability, 10.0)
            .with(HourlyVariable::Rain, 0.0)
            .with(HourlyVariable::Showers, 0.0)
            .with(HourlyVariable::Snowfall, 0.0)
            .with(HourlyVariable::CloudCover, 25.0)
            .with(HourlyVariable::WindSpeed, 10.0)
            .with(HourlyVariable::WindDirection, 180.0)
            .with(HourlyVariable::WindGusts, 20.0)
            .with(HourlyVariable::UvIndex, 5.0)
            .with(HourlyVariable::UvIndexClearSky, 6.0)
            .with(HourlyVariable::WeatherCode, 2.0)
    }

    pub(crate) fn build(&self) -> ForecastData {
        let mut weather = Vec::new();
        let mut air_quality = Vec::new();
        let mut precipitation = Vec::new();

        for d in 0..self.days {
            for h in 0..24 {
                let time = hour(d, h);
                weather.push(Self::weather_sample(time, h));
                air_quality.push(RawSample::new(time).with(HourlyVariable::UsAqi, 40.0));
                for quarter in 0..4 {
                    let offset = Duration::minutes(i64::from(quarter * PRECIPITATION_INTERVAL_MINUTES));
                    precipitation.push(PrecipitationSample::new(time + offset, Some(0.0)));
                }
            }
        }

        ForecastData {
            weather,
            air_quality,
            precipitation,
            precipitation_interval_minutes: PRECIPITATION_INTERVAL_MINUTES,
            utc_offset: offset(),
            timezone_abbreviation: "MDT".to_string(),
            cache: CacheMetadata::default(),
        }
    }
}

/// Overwrites `variable` at hour `h` of day `d`.
pub(crate) fn set_hour(
    data: &mut ForecastData,
    d: u32,
    h: u32,
    variable: HourlyVariable,
    value: f64,
) {
    let time = hour(d, h);
    let samples = if variable == HourlyVariable::UsAqi {
        &mut data.air_quality
    } else {
        &mut data.weather
    };
    for sample in samples.iter_mut().filter(|s| s.time == time) {
        sample.set(variable, value);
    }
}

/// Overwrites `variable` for every hour of day `d`.
pub(crate) fn set_day(data: &mut ForecastData, d: u32, variable: HourlyVariable, value: f64) {
    for h in 0..24 {
        set_hour(data, d, h, variable, value);
    }
}

/// Sets `intervals` consecutive sub-hourly readings from hour `h` of day `d` to `amount`.
pub(crate) fn add_precipitation(
    data: &mut ForecastData,
    d: u32,
    h: u32,
    intervals: u32,
    amount: f64,
) {
    let start = hour(d, h);
    let step = Duration::minutes(i64::from(data.precipitation_interval_minutes));
    for i in 0..intervals {
        let time = start + step * i as i32;
        for sample in data.precipitation.iter_mut().filter(|s| s.time == time) {
            sample.amount = Some(amount);
        }
    }
}

/// A dry, fully populated daily row.
pub(crate) fn daily_row(date: NaiveDate) -> DailyAggregate {
    DailyAggregate {
        date,
        temperature_min: 10.0,
        temperature_max: 21.0,
        apparent_temperature_min: 8.6,
        apparent_temperature_max: 19.7,
        relative_humidity_max: 60.0,
        precipitation_probability_max: 10.0,
        rain_sum: 0.0,
        showers_sum: 0.0,
        snowfall_sum: 0.0,
        cloud_cover_mean: 25.0,
        wind_speed_mean: Some(10.0),
        wind_gusts_max: Some(20.0),
        uv_index_max: 5.0,
        uv_index_clear_sky_max: Some(6.0),
        aqi_max: 40.0,
        weather_code: 2,
        wind_direction: Some(180.0),
        precipitation_hours: 0.0,
        precipitation_sum: 0.0,
        sample_count: 24,
    }
}
