use chrono::{Duration, FixedOffset, TimeZone};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use weather_calendar::{
    aggregate_daily, build_report, CacheMetadata, ForecastData, HourlyVariable, LatLon, Location,
    PrecipitationSample, RawSample, Units,
};

fn synthetic_data(days: i64) -> ForecastData {
    let offset = FixedOffset::west_opt(6 * 3600).unwrap();
    let start = offset.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();

    let mut weather = Vec::new();
    let mut air_quality = Vec::new();
    let mut precipitation = Vec::new();
    for hour in 0..days * 24 {
        let time = start + Duration::hours(hour);
        let h = (hour % 24) as f64;
        weather.push(
            RawSample::new(time)
                .with(HourlyVariable::Temperature, 12.0 + h * 0.4)
                .with(HourlyVariable::ApparentTemperature, 11.0 + h * 0.4)
                .with(HourlyVariable::RelativeHumidity, 55.0 + h)
                .with(HourlyVariable::PrecipitationProbability, h * 3.0)
                .with(HourlyVariable::Rain, if h > 14.0 { 0.2 } else { 0.0 })
                .with(HourlyVariable::Showers, 0.0)
                .with(HourlyVariable::Snowfall, 0.0)
                .with(HourlyVariable::CloudCover, 40.0)
                .with(HourlyVariable::WindSpeed, 8.0 + h * 0.1)
                .with(HourlyVariable::WindDirection, (hour * 17 % 360) as f64)
                .with(HourlyVariable::WindGusts, 15.0)
                .with(HourlyVariable::UvIndex, h / 3.0)
                .with(HourlyVariable::UvIndexClearSky, h / 2.5)
                .with(HourlyVariable::WeatherCode, if h > 14.0 { 61.0 } else { 2.0 }),
        );
        air_quality.push(RawSample::new(time).with(HourlyVariable::UsAqi, 30.0 + h));
        for quarter in 0..4 {
            let amount = if h > 14.0 { 0.05 } else { 0.0 };
            precipitation.push(PrecipitationSample::new(
                time + Duration::minutes(quarter * 15),
                Some(amount),
            ));
        }
    }

    ForecastData {
        weather,
        air_quality,
        precipitation,
        precipitation_interval_minutes: 15,
        utc_offset: offset,
        timezone_abbreviation: "MDT".to_string(),
        cache: CacheMetadata::default(),
    }
}

fn bench_pipeline(c: &mut Criterion) {
    let data = synthetic_data(7);
    let location = Location {
        name: "Boulder".to_string(),
        admin1: Some("Colorado".to_string()),
        coordinates: LatLon(40.015, -105.2705),
    };

    c.bench_function("aggregate_daily", |b| {
        b.iter(|| aggregate_daily(black_box(&data), black_box(5)))
    });
    c.bench_function("build_report", |b| {
        b.iter(|| {
            build_report()
                .data(black_box(&data))
                .location(&location)
                .units(Units::Metric)
                .call()
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
