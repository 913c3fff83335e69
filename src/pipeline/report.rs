//! From raw samples to the entries handed to a calendar renderer.

use crate::aggregation::daily::{aggregate_daily, check_coverage};
use crate::describe::synthesizer::{describe_day, UpdateStamp};
use crate::pipeline::error::ForecastError;
use crate::types::forecast_entry::{ForecastEntry, ForecastReport};
use crate::types::location::Location;
use crate::types::sample::ForecastData;
use crate::types::units::Units;
use bon::builder;
use chrono::Utc;
use log::debug;

/// Number of days covered when the caller does not ask for a specific count.
pub const FORECAST_DAYS: usize = 5;

/// Aggregates `data` into daily rows and renders one [`ForecastEntry`] per day.
///
/// `last_updated` is the cache creation time of the forecast response, or now when the
/// response was just fetched. Coordinates are only included when `show_location` is set.
///
/// # Arguments
///
/// * `data` - Samples and metadata delivered by the data source.
/// * `location` - The resolved location, used for the report label.
/// * `units` - Unit system for every formatted line. Defaults to [`Units::Imperial`].
/// * `days` - Number of calendar days. Defaults to [`FORECAST_DAYS`].
/// * `show_location` - Whether to attach coordinates to the report. Defaults to `false`.
///
/// # Errors
///
/// Any [`ForecastError`] from aggregation, including [`ForecastError::MissingDay`] and
/// [`ForecastError::IncompleteSeries`] when the data does not cover `days` consecutive days,
/// and [`ForecastError::Lookup`] when a value has no display label.
///
/// # Example
///
/// ```no_run
/// # use weather_calendar::{build_report, ForecastData, Location, Units};
/// # fn run(data: &ForecastData, location: &Location) -> Result<(), weather_calendar::ForecastError> {
/// let report = build_report()
///     .data(data)
///     .location(location)
///     .units(Units::Metric)
///     .days(3)
///     .call()?;
///
/// for entry in &report.entries {
///     println!("{}: {}", entry.date, entry.summary);
/// }
/// # Ok(())
/// # }
/// ```
#[builder]
pub fn build_report(
    data: &ForecastData,
    location: &Location,
    units: Option<Units>,
    days: Option<usize>,
    show_location: Option<bool>,
) -> Result<ForecastReport, ForecastError> {
    let units = units.unwrap_or_default();
    let days = days.unwrap_or(FORECAST_DAYS);
    let show_location = show_location.unwrap_or(false);

    let rows = aggregate_daily(data, days)?;
    check_coverage(&rows, days)?;

    let last_updated = data.cache.created_at.unwrap_or_else(Utc::now);
    let stamp = UpdateStamp::new(
        last_updated,
        data.utc_offset,
        data.timezone_abbreviation.as_str(),
    );
    let entries = rows
        .iter()
        .map(|day| describe_day(day, units, &stamp))
        .collect::<Result<Vec<ForecastEntry>, ForecastError>>()?;
    debug!(
        "Built {} entries for {} ({})",
        entries.len(),
        location.label(),
        units
    );

    Ok(ForecastReport {
        location_label: location.label(),
        geo: show_location.then_some(location.coordinates),
        last_updated,
        entries,
    })
}
