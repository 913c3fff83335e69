//! Location types and ZIP code validation.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Represents a geographical coordinate using latitude and longitude.
///
/// # Examples
///
/// ```
/// use weather_calendar::LatLon;
///
/// let boulder = LatLon(40.015, -105.2705);
/// assert_eq!(boulder.0, 40.015);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon(pub f64, pub f64);

/// A resolved place: display name, optional first-level admin area, and coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub admin1: Option<String>,
    pub coordinates: LatLon,
}

impl Location {
    /// `"Boulder, Colorado"`, or just the name when no admin area is known.
    pub fn label(&self) -> String {
        match self.admin1.as_deref() {
            Some(admin1) if !admin1.is_empty() => format!("{}, {}", self.name, admin1),
            _ => self.name.clone(),
        }
    }
}

const MIN_ZIP: u32 = 501;
const MAX_ZIP: u32 = 99950;

/// Five digits, an optional `-` or whitespace separator, then an optional four-digit suffix.
static ZIP_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^([0-9]{5})[-\s]?(?:[0-9]{4})?$"));

/// Normalizes a US ZIP or ZIP+4 code to its five-digit form.
///
/// Accepts `12345`, `12345-6789`, `12345 6789` and `123456789`; the five-digit part must lie
/// in the range of assigned ZIP codes (00501..=99950).
///
/// # Examples
///
/// ```
/// use weather_calendar::validate_zip;
///
/// assert_eq!(validate_zip("80302-1234").as_deref(), Some("80302"));
/// assert_eq!(validate_zip("8030"), None);
/// ```
pub fn validate_zip(zip_code: &str) -> Option<String> {
    let captures = ZIP_PATTERN.as_ref().ok()?.captures(zip_code)?;
    let zip5 = captures.get(1)?.as_str();
    let number: u32 = zip5.parse().ok()?;
    (MIN_ZIP..=MAX_ZIP)
        .contains(&number)
        .then(|| zip5.to_string())
}
