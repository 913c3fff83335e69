//! Turns one [`DailyAggregate`] into the summary and description of a calendar entry.

use crate::describe::cleanup::clean_description;
use crate::describe::format::{format_float, format_rounded};
use crate::describe::precipitation::describe_precipitation;
use crate::lookup::tables::{AIR_QUALITY, COMPASS, UV_INDEX};
use crate::pipeline::error::ForecastError;
use crate::types::daily_aggregate::DailyAggregate;
use crate::types::forecast_entry::ForecastEntry;
use crate::types::units::Units;
use crate::types::weather_condition::WmoCode;
use chrono::{DateTime, FixedOffset, Utc};

pub const ATTRIBUTION: &str = "Weather data by Open-Meteo.com, CC BY 4.0";

/// When the forecast was fetched, shown in the location's local time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStamp {
    pub time: DateTime<FixedOffset>,
    pub timezone_abbreviation: String,
}

impl UpdateStamp {
    pub fn new(
        updated: DateTime<Utc>,
        offset: FixedOffset,
        timezone_abbreviation: impl Into<String>,
    ) -> Self {
        Self {
            time: updated.with_timezone(&offset),
            timezone_abbreviation: timezone_abbreviation.into(),
        }
    }

    /// E.g. `"Updated: Sun, 01 Jun 2025 12:05PM MDT"`.
    pub fn footer(&self) -> String {
        format!(
            "Updated: {} {}",
            self.time.format("%a, %d %b %Y %I:%M%p"),
            self.timezone_abbreviation
        )
    }
}

fn summary_line(day: &DailyAggregate, code: WmoCode, headline: f64, units: Units) -> String {
    let mut summary = format!(
        "{} {}° | {}°, {}",
        code.icon(),
        format_rounded(day.temperature_max),
        format_rounded(day.temperature_min),
        code.label()
    );
    if headline > 0.0 {
        summary.push_str(&format!(
            " ({} {})",
            format_float(headline, 2),
            units.precipitation_unit()
        ));
    }
    summary
}

fn clear_sky_line(day: &DailyAggregate) -> Result<String, ForecastError> {
    let uv = day.uv_index_max.round();
    match day.uv_index_clear_sky_max.map(f64::round) {
        Some(clear_sky) if clear_sky != 0.0 && clear_sky != uv => Ok(format!(
            "UV index (Clear Sky): {} ({})",
            UV_INDEX.lookup(clear_sky as i64)?,
            format_rounded(clear_sky)
        )),
        _ => Ok(String::new()),
    }
}

fn wind_line(day: &DailyAggregate, units: Units) -> Result<String, ForecastError> {
    let Some(speed) = day.wind_speed_mean.map(format_rounded) else {
        return Ok(String::new());
    };
    let unit = units.wind_speed_unit();
    match day.wind_direction {
        Some(direction) => {
            let bearing = direction.round() as i64;
            Ok(format!(
                "Wind: {speed} {unit} {} ({}°)",
                COMPASS.lookup(bearing)?,
                bearing % 360
            ))
        }
        None => Ok(format!("Wind: {speed} {unit}")),
    }
}

fn gust_line(day: &DailyAggregate, units: Units) -> String {
    day.wind_gusts_max
        .map(|gusts| format!("Wind gust: {} {}", format_rounded(gusts), units.wind_speed_unit()))
        .unwrap_or_default()
}

/// Builds the calendar entry for `day`.
///
/// # Errors
///
/// Returns [`ForecastError::Lookup`] when the condition code, AQI or UV index has no label.
pub fn describe_day(
    day: &DailyAggregate,
    units: Units,
    updated: &UpdateStamp,
) -> Result<ForecastEntry, ForecastError> {
    let code = WmoCode::lookup(day.weather_code)?;
    let precipitation = describe_precipitation(day, units);
    let temperature = units.temperature_letter();

    let aqi = day.aqi_max.round();
    let uv = day.uv_index_max.round();

    let lines = [
        format!(
            "Temperature: {}°{temperature} … {}°{temperature}",
            format_rounded(day.temperature_min),
            format_rounded(day.temperature_max)
        ),
        format!(
            "Feels like: {}°{temperature} … {}°{temperature}",
            format_rounded(day.apparent_temperature_min),
            format_rounded(day.apparent_temperature_max)
        ),
        format!("Humidity: {}%", format_rounded(day.relative_humidity_max)),
        String::new(),
        format!(
            "Air quality: {} ({})",
            AIR_QUALITY.lookup(aqi as i64)?,
            format_rounded(aqi)
        ),
        format!(
            "UV index: {} ({})",
            UV_INDEX.lookup(uv as i64)?,
            format_rounded(uv)
        ),
        clear_sky_line(day)?,
        String::new(),
        precipitation.text,
        format!("Cloud cover: {}%", format_rounded(day.cloud_cover_mean)),
        String::new(),
        wind_line(day, units)?,
        gust_line(day, units),
        String::new(),
        ATTRIBUTION.to_string(),
        String::new(),
        updated.footer(),
    ];

    Ok(ForecastEntry {
        date: day.date,
        summary: summary_line(day, code, precipitation.headline_amount, units),
        description: clean_description(&lines.join("\n")),
    })
}
