//! Open-Meteo HTTP client with a local response cache.

use crate::open_meteo::cache::{CachePolicy, ResponseCache};
use crate::open_meteo::error::SourceError;
use crate::open_meteo::response::{ForecastResponse, GeocodingResponse};
use crate::types::location::{LatLon, Location};
use crate::types::sample::{CacheMetadata, ForecastData, HourlyVariable};
use crate::types::units::Units;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use reqwest::{Client, Request};
use std::path::{Path, PathBuf};

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const AIR_QUALITY_URL: &str = "https://air-quality-api.open-meteo.com/v1/air-quality";
const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const AIR_QUALITY_DOMAIN: &str = "cams_global";
const PRECIPITATION_VARIABLE: &str = "precipitation";
const PRECIPITATION_INTERVAL_MINUTES: u32 = 15;

/// A response body together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FetchedBody {
    url: String,
    body: String,
    cache: CacheMetadata,
}

fn join_names(variables: &[HourlyVariable]) -> String {
    variables
        .iter()
        .map(HourlyVariable::api_name)
        .collect::<Vec<_>>()
        .join(",")
}

/// Decides what a cached lookup should return once the network result is known.
///
/// * A fresh `cached` entry wins without touching the network (handled by the caller).
/// * A successful fetch is used and reported as not cached.
/// * A transport failure falls back to `cached` while the policy allows stale reads.
fn resolve_fetch(
    url: &str,
    fetched: Result<String, SourceError>,
    cached: Option<(String, DateTime<Utc>)>,
    stale_allowed: bool,
) -> Result<(String, CacheMetadata, bool), SourceError> {
    match (fetched, cached) {
        (Ok(body), _) => Ok((body, CacheMetadata::default(), true)),
        (Err(e), Some((body, created_at))) if e.is_transport() && stale_allowed => {
            warn!("Request to {} failed ({}), serving stale cache entry", url, e);
            Ok((
                body,
                CacheMetadata {
                    from_cache: true,
                    created_at: Some(created_at),
                },
                false,
            ))
        }
        (Err(e), _) => Err(e),
    }
}

#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: Client,
    cache: ResponseCache,
}

impl OpenMeteoClient {
    /// Creates a client caching responses under `cache_dir`. The directory must exist.
    pub fn new(cache_dir: PathBuf) -> Self {
        Self {
            http: Client::new(),
            cache: ResponseCache::new(cache_dir),
        }
    }

    pub fn cache_dir(&self) -> &Path {
        self.cache.dir()
    }

    fn build_request(&self, base: &str, params: &[(&str, String)]) -> Result<Request, SourceError> {
        self.http
            .get(base)
            .query(params)
            .build()
            .map_err(|e| SourceError::NetworkRequest(base.to_string(), e))
    }

    async fn send(&self, request: Request) -> Result<String, SourceError> {
        let url = request.url().to_string();
        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| SourceError::from_reqwest(&url, e))?
            .error_for_status()
            .map_err(|e| SourceError::from_reqwest(&url, e))?;
        response
            .text()
            .await
            .map_err(|e| SourceError::NetworkRequest(url, e))
    }

    /// Returns the body for `request`, from the cache while fresh and from the network otherwise.
    ///
    /// Unreadable cache files count as misses; they are overwritten by the next fetch.
    async fn get_cached(
        &self,
        request: Request,
        policy: CachePolicy,
    ) -> Result<FetchedBody, SourceError> {
        let url = request.url().to_string();
        let now = Utc::now();

        let cached = match self.cache.read(&url).await {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Ignoring unreadable cache entry for {}: {}", url, e);
                None
            }
        };
        if let Some(entry) = cached.as_ref().filter(|entry| policy.is_fresh(entry, now)) {
            debug!("Cache hit for {}", url);
            return Ok(FetchedBody {
                url,
                body: entry.body.clone(),
                cache: CacheMetadata {
                    from_cache: true,
                    created_at: Some(entry.created_at),
                },
            });
        }

        info!("Fetching {}", url);
        let stale_allowed = cached
            .as_ref()
            .is_some_and(|entry| policy.allows_stale(entry, now));
        let fetched = self.send(request).await;
        let (body, cache, store) = resolve_fetch(
            &url,
            fetched,
            cached.map(|entry| (entry.body, entry.created_at)),
            stale_allowed,
        )?;
        if store {
            self.store(&url, &body, now).await;
        }
        Ok(FetchedBody { url, body, cache })
    }

    /// Writes a freshly fetched body to the cache. A failed write only costs a later refetch.
    async fn store(&self, url: &str, body: &str, fetched_at: DateTime<Utc>) {
        if let Err(e) = self.cache.write(url, body, fetched_at).await {
            warn!("Could not cache response for {}: {}", url, e);
        }
    }

    /// Resolves a validated five-digit ZIP code to a named location.
    ///
    /// # Errors
    ///
    /// [`SourceError::NoLocationFound`] when the geocoder knows no place for `zip`, plus any
    /// network, parsing or cache error.
    pub async fn geocode_zip(&self, zip: &str) -> Result<Location, SourceError> {
        let request = self.build_request(
            GEOCODING_URL,
            &[
                ("name", zip.to_string()),
                ("count", "1".to_string()),
                ("countryCode", "US".to_string()),
            ],
        )?;
        let fetched = self.get_cached(request, CachePolicy::geocoding()).await?;
        let response: GeocodingResponse = serde_json::from_str(&fetched.body)?;

        let location: Location = response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| SourceError::NoLocationFound(zip.to_string()))?
            .into();
        info!(
            "Resolved {} to {} at ({}, {}), cached: {}",
            zip,
            location.label(),
            location.coordinates.0,
            location.coordinates.1,
            fetched.cache.from_cache
        );
        Ok(location)
    }

    fn forecast_request(
        &self,
        coordinates: LatLon,
        units: Units,
        days: usize,
    ) -> Result<Request, SourceError> {
        self.build_request(
            FORECAST_URL,
            &[
                ("latitude", coordinates.0.to_string()),
                ("longitude", coordinates.1.to_string()),
                ("hourly", join_names(&HourlyVariable::WEATHER)),
                ("minutely_15", PRECIPITATION_VARIABLE.to_string()),
                ("timezone", "auto".to_string()),
                ("timeformat", "unixtime".to_string()),
                ("forecast_days", days.to_string()),
                ("past_hours", "0".to_string()),
                ("past_minutely_15", "0".to_string()),
                ("temperature_unit", units.api_temperature_unit().to_string()),
                ("precipitation_unit", units.api_precipitation_unit().to_string()),
                ("wind_speed_unit", units.api_wind_speed_unit().to_string()),
            ],
        )
    }

    fn air_quality_request(&self, coordinates: LatLon, days: usize) -> Result<Request, SourceError> {
        self.build_request(
            AIR_QUALITY_URL,
            &[
                ("latitude", coordinates.0.to_string()),
                ("longitude", coordinates.1.to_string()),
                ("hourly", join_names(&HourlyVariable::AIR_QUALITY)),
                ("domains", AIR_QUALITY_DOMAIN.to_string()),
                ("timezone", "auto".to_string()),
                ("timeformat", "unixtime".to_string()),
                ("forecast_days", days.to_string()),
                ("past_hours", "0".to_string()),
            ],
        )
    }

    /// Fetches `days` days of hourly weather, 15-minute precipitation and hourly air quality.
    ///
    /// The forecast and air-quality requests run concurrently; the result is only built once
    /// both have completed. Cache metadata is that of the forecast response.
    pub async fn fetch(
        &self,
        coordinates: LatLon,
        units: Units,
        days: usize,
    ) -> Result<ForecastData, SourceError> {
        let forecast_request = self.forecast_request(coordinates, units, days)?;
        let air_quality_request = self.air_quality_request(coordinates, days)?;

        let (forecast, air_quality) = tokio::try_join!(
            self.get_cached(forecast_request, CachePolicy::forecast()),
            self.get_cached(air_quality_request, CachePolicy::forecast()),
        )?;
        info!(
            "Forecast data cache hit: {}, air quality data cache hit: {}",
            forecast.cache.from_cache, air_quality.cache.from_cache
        );

        let weather: ForecastResponse = serde_json::from_str(&forecast.body)?;
        let aqi: ForecastResponse = serde_json::from_str(&air_quality.body)?;
        let utc_offset = weather.utc_offset(&forecast.url)?;

        Ok(ForecastData {
            weather: weather.hourly_block(&forecast.url)?.to_samples(
                &HourlyVariable::WEATHER,
                utc_offset,
                &forecast.url,
            )?,
            air_quality: aqi.hourly_block(&air_quality.url)?.to_samples(
                &HourlyVariable::AIR_QUALITY,
                aqi.utc_offset(&air_quality.url)?,
                &air_quality.url,
            )?,
            precipitation: weather.minutely_15_block(&forecast.url)?.to_precipitation(
                PRECIPITATION_VARIABLE,
                utc_offset,
                &forecast.url,
            )?,
            precipitation_interval_minutes: PRECIPITATION_INTERVAL_MINUTES,
            utc_offset,
            timezone_abbreviation: weather.timezone_abbreviation,
            cache: forecast.cache,
        })
    }
}
