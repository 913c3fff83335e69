use crate::types::location::LatLon;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One all-day calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub date: NaiveDate,
    /// Single line, e.g. `"🌧 18° | 9°, Light rain (1.5 mm)"`.
    pub summary: String,
    /// Multi-line details block.
    pub description: String,
}

/// What a calendar renderer needs to produce a document: ordered entries plus header data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    pub location_label: String,
    /// Only present when the caller asked for the location to be shown.
    pub geo: Option<LatLon>,
    pub last_updated: DateTime<Utc>,
    pub entries: Vec<ForecastEntry>,
}
