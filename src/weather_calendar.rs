//! The main entry point: ZIP code in, calendar-ready forecast report out.

use crate::error::WeatherCalendarError;
use crate::open_meteo::client::OpenMeteoClient;
use crate::pipeline::report::{build_report, FORECAST_DAYS};
use crate::types::forecast_entry::ForecastReport;
use crate::types::location::validate_zip;
use crate::types::units::Units;
use crate::utils::{ensure_cache_dir_exists, get_cache_dir};
use bon::bon;
use log::info;
use std::path::{Path, PathBuf};

/// Fetches forecasts from Open-Meteo and turns them into daily calendar entries.
///
/// Create an instance using [`WeatherCalendar::new()`] for the default cache directory or
/// [`WeatherCalendar::with_cache_folder()`] for a custom one.
///
/// # Examples
///
/// ```no_run
/// # use weather_calendar::{Units, WeatherCalendar, WeatherCalendarError};
/// # async fn run() -> Result<(), WeatherCalendarError> {
/// let calendar = WeatherCalendar::new().await?;
/// let report = calendar
///     .forecast()
///     .zip("80302")
///     .units(Units::Metric)
///     .call()
///     .await?;
///
/// println!("{}", report.location_label);
/// for entry in report.entries {
///     println!("{} {}", entry.date, entry.summary);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WeatherCalendar {
    client: OpenMeteoClient,
}

#[bon]
impl WeatherCalendar {
    /// Creates a client that caches responses in `cache_folder`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherCalendarError::CacheDirCreation`] if the directory cannot be created.
    pub async fn with_cache_folder(cache_folder: PathBuf) -> Result<Self, WeatherCalendarError> {
        ensure_cache_dir_exists(&cache_folder)
            .await
            .map_err(|e| WeatherCalendarError::CacheDirCreation(cache_folder.clone(), e))?;
        Ok(Self {
            client: OpenMeteoClient::new(cache_folder),
        })
    }

    /// Creates a client using the platform cache directory.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherCalendarError::CacheDirResolution`] if there is no cache directory on
    /// this platform, or [`WeatherCalendarError::CacheDirCreation`] if it cannot be created.
    pub async fn new() -> Result<Self, WeatherCalendarError> {
        let cache_folder = get_cache_dir().map_err(WeatherCalendarError::CacheDirResolution)?;
        Self::with_cache_folder(cache_folder).await
    }

    pub fn cache_dir(&self) -> &Path {
        self.client.cache_dir()
    }

    /// Builds the forecast report for a US ZIP code.
    ///
    /// The ZIP code is validated before any request is made. The location is geocoded, the
    /// forecast and air-quality series are fetched, then aggregated into one entry per day.
    ///
    /// # Arguments
    ///
    /// * `.zip(&str)`: **Required.** A five-digit ZIP or ZIP+4 code.
    /// * `.units(Units)`: Optional. Defaults to [`Units::Imperial`].
    /// * `.days(usize)`: Optional. Defaults to [`FORECAST_DAYS`].
    /// * `.show_location(bool)`: Optional. Attach coordinates to the report. Defaults to `false`.
    ///
    /// # Errors
    ///
    /// * [`WeatherCalendarError::InvalidZip`] for a malformed or unassigned ZIP code.
    /// * [`WeatherCalendarError::Source`] when geocoding, fetching or caching fails.
    /// * [`WeatherCalendarError::Forecast`] when the data cannot be aggregated or described.
    #[builder]
    pub async fn forecast(
        &self,
        zip: &str,
        units: Option<Units>,
        days: Option<usize>,
        show_location: Option<bool>,
    ) -> Result<ForecastReport, WeatherCalendarError> {
        let zip =
            validate_zip(zip).ok_or_else(|| WeatherCalendarError::InvalidZip(zip.to_string()))?;
        let units = units.unwrap_or_default();
        let days = days.unwrap_or(FORECAST_DAYS);

        let location = self.client.geocode_zip(&zip).await?;
        let data = self.client.fetch(location.coordinates, units, days).await?;
        info!(
            "Fetched {} hourly samples for {} (from cache: {})",
            data.weather.len(),
            location.label(),
            data.cache.from_cache
        );

        let report = build_report()
            .data(&data)
            .location(&location)
            .units(units)
            .days(days)
            .maybe_show_location(show_location)
            .call()?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_with_cache_folder_creates_directory() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let folder = dir.path().join("cache");
        let calendar = WeatherCalendar::with_cache_folder(folder.clone()).await?;
        assert!(folder.is_dir());
        assert_eq!(calendar.cache_dir(), folder.as_path());
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_zip_is_rejected_before_fetching() -> Result<(), Box<dyn std::error::Error>>
    {
        let dir = TempDir::new()?;
        let calendar = WeatherCalendar::with_cache_folder(dir.path().to_path_buf()).await?;
        for zip in ["", "1234", "00100", "99999", "abcde", "12345-67"] {
            let result = calendar.forecast().zip(zip).call().await;
            assert!(
                matches!(result, Err(WeatherCalendarError::InvalidZip(ref z)) if z == zip),
                "zip {zip:?}"
            );
        }
        // Nothing was requested, so nothing was cached.
        assert_eq!(std::fs::read_dir(dir.path())?.count(), 0);
        Ok(())
    }
}
