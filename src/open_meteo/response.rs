//! Serde models of the Open-Meteo JSON responses and their conversion into samples.

use crate::open_meteo::error::SourceError;
use crate::types::location::{LatLon, Location};
use crate::types::sample::{HourlyVariable, PrecipitationSample, RawSample};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Column-oriented time series: one `time` array and one value array per variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesBlock {
    /// Unix seconds.
    pub time: Vec<i64>,
    #[serde(flatten)]
    pub variables: HashMap<String, Vec<Option<f64>>>,
}

/// A forecast or air-quality response requested with `timeformat=unixtime`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub utc_offset_seconds: i32,
    #[serde(default)]
    pub timezone_abbreviation: String,
    pub hourly: Option<TimeSeriesBlock>,
    pub minutely_15: Option<TimeSeriesBlock>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub admin1: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Vec<GeocodingResult>,
}

impl From<GeocodingResult> for Location {
    fn from(result: GeocodingResult) -> Self {
        Location {
            name: result.name,
            admin1: result.admin1,
            coordinates: LatLon(result.latitude, result.longitude),
        }
    }
}

fn malformed(url: &str, message: impl Into<String>) -> SourceError {
    SourceError::MalformedResponse {
        url: url.to_string(),
        message: message.into(),
    }
}

impl ForecastResponse {
    pub(crate) fn utc_offset(&self, url: &str) -> Result<FixedOffset, SourceError> {
        FixedOffset::east_opt(self.utc_offset_seconds).ok_or_else(|| {
            malformed(
                url,
                format!("invalid utc_offset_seconds {}", self.utc_offset_seconds),
            )
        })
    }

    pub(crate) fn hourly_block(&self, url: &str) -> Result<&TimeSeriesBlock, SourceError> {
        self.hourly
            .as_ref()
            .ok_or_else(|| malformed(url, "missing 'hourly' block"))
    }

    pub(crate) fn minutely_15_block(&self, url: &str) -> Result<&TimeSeriesBlock, SourceError> {
        self.minutely_15
            .as_ref()
            .ok_or_else(|| malformed(url, "missing 'minutely_15' block"))
    }
}

impl TimeSeriesBlock {
    fn timestamps(
        &self,
        offset: FixedOffset,
        url: &str,
    ) -> Result<Vec<DateTime<FixedOffset>>, SourceError> {
        self.time
            .iter()
            .map(|&seconds| {
                DateTime::from_timestamp(seconds, 0)
                    .map(|utc| utc.with_timezone(&offset))
                    .ok_or_else(|| malformed(url, format!("timestamp {seconds} out of range")))
            })
            .collect()
    }

    fn values(&self, name: &str, url: &str) -> Result<&[Option<f64>], SourceError> {
        let values = self
            .variables
            .get(name)
            .ok_or_else(|| malformed(url, format!("missing variable '{name}'")))?;
        if values.len() != self.time.len() {
            return Err(malformed(
                url,
                format!(
                    "variable '{name}' has {} values for {} timestamps",
                    values.len(),
                    self.time.len()
                ),
            ));
        }
        Ok(values)
    }

    /// One [`RawSample`] per timestamp carrying every requested variable.
    pub(crate) fn to_samples(
        &self,
        variables: &[HourlyVariable],
        offset: FixedOffset,
        url: &str,
    ) -> Result<Vec<RawSample>, SourceError> {
        let mut samples: Vec<RawSample> = self
            .timestamps(offset, url)?
            .into_iter()
            .map(RawSample::new)
            .collect();
        for &variable in variables {
            let values = self.values(variable.api_name(), url)?;
            for (sample, value) in samples.iter_mut().zip(values) {
                if let Some(value) = value {
                    sample.set(variable, *value);
                }
            }
        }
        Ok(samples)
    }

    pub(crate) fn to_precipitation(
        &self,
        name: &str,
        offset: FixedOffset,
        url: &str,
    ) -> Result<Vec<PrecipitationSample>, SourceError> {
        let values = self.values(name, url)?;
        Ok(self
            .timestamps(offset, url)?
            .into_iter()
            .zip(values)
            .map(|(time, amount)| PrecipitationSample::new(time, *amount))
            .collect())
    }
}
