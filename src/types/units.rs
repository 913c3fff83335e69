//! Defines the unit system a forecast is requested and rendered in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The unit system used for both the upstream request and every formatted line.
///
/// The aggregation itself is unit-agnostic; only labels, request parameters and the
/// "measurable precipitation" cutoff depend on the choice.
///
/// # Examples
///
/// ```
/// use weather_calendar::Units;
///
/// let units: Units = "metric".parse().unwrap();
/// assert_eq!(units.precipitation_unit(), "mm");
/// assert_eq!(Units::Imperial.wind_speed_unit(), "mph");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Celsius, millimetres, kilometres per hour.
    Metric,
    /// Fahrenheit, inches, miles per hour.
    #[default]
    Imperial,
}

impl Units {
    /// Single letter appended to `°`.
    pub fn temperature_letter(&self) -> &'static str {
        match self {
            Units::Metric => "C",
            Units::Imperial => "F",
        }
    }

    pub fn precipitation_unit(&self) -> &'static str {
        match self {
            Units::Metric => "mm",
            Units::Imperial => "in",
        }
    }

    pub fn wind_speed_unit(&self) -> &'static str {
        match self {
            Units::Metric => "km/h",
            Units::Imperial => "mph",
        }
    }

    /// Daily precipitation totals at or below this amount count as measurement noise.
    pub fn precipitation_cutoff(&self) -> f64 {
        match self {
            Units::Metric => 0.25,
            Units::Imperial => 0.01,
        }
    }

    pub(crate) fn api_temperature_unit(&self) -> &'static str {
        match self {
            Units::Metric => "celsius",
            Units::Imperial => "fahrenheit",
        }
    }

    pub(crate) fn api_precipitation_unit(&self) -> &'static str {
        match self {
            Units::Metric => "mm",
            Units::Imperial => "inch",
        }
    }

    pub(crate) fn api_wind_speed_unit(&self) -> &'static str {
        match self {
            Units::Metric => "kmh",
            Units::Imperial => "mph",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Units::Metric => write!(f, "metric"),
            Units::Imperial => write!(f, "imperial"),
        }
    }
}

/// Returned when a string is neither `metric` nor `imperial`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown unit system '{0}', expected 'metric' or 'imperial'")]
pub struct ParseUnitsError(pub String);

impl FromStr for Units {
    type Err = ParseUnitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" | "si" => Ok(Units::Metric),
            "imperial" | "us" => Ok(Units::Imperial),
            _ => Err(ParseUnitsError(s.to_string())),
        }
    }
}
