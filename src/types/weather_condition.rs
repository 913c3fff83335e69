//! Defines the `WmoCode` enum, mapping WMO 4677 weather interpretation codes (as reported by
//! Open-Meteo) to a label and an icon.

use crate::lookup::error::LookupError;

/// Represents a WMO weather interpretation code.
///
/// When hourly codes are reduced to a single daily code, the crate takes the maximum code of
/// the day. Within this coding scheme higher codes mostly describe more severe weather, so the
/// maximum is a reasonable "worst weather of the day" proxy. It is an approximation: the
/// ordering is not strictly monotonic in severity (fog, 45/48, sorts below drizzle) and does not
/// carry over to other coding schemes.
///
/// Convert an integer code using [`WmoCode::from_i64`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum WmoCode {
    /// Code 0: Clear sky.
    Clear = 0,
    /// Code 1: Mainly clear.
    MainlyClear = 1,
    /// Code 2: Partly cloudy.
    PartlyCloudy = 2,
    /// Code 3: Overcast.
    Overcast = 3,
    /// Code 45: Fog.
    Fog = 45,
    /// Code 48: Depositing rime fog.
    RimeFog = 48,
    /// Code 51: Light drizzle.
    LightDrizzle = 51,
    /// Code 53: Moderate drizzle.
    Drizzle = 53,
    /// Code 55: Dense drizzle.
    HeavyDrizzle = 55,
    /// Code 56: Light freezing drizzle.
    LightFreezingDrizzle = 56,
    /// Code 57: Dense freezing drizzle.
    FreezingDrizzle = 57,
    /// Code 61: Slight rain.
    LightRain = 61,
    /// Code 63: Moderate rain.
    Rain = 63,
    /// Code 65: Heavy rain.
    HeavyRain = 65,
    /// Code 66: Light freezing rain.
    LightFreezingRain = 66,
    /// Code 67: Heavy freezing rain.
    FreezingRain = 67,
    /// Code 71: Slight snowfall.
    LightSnow = 71,
    /// Code 73: Moderate snowfall.
    Snow = 73,
    /// Code 75: Heavy snowfall.
    HeavySnow = 75,
    /// Code 77: Snow grains.
    SnowGrains = 77,
    /// Code 80: Slight rain showers.
    LightShowers = 80,
    /// Code 81: Moderate rain showers.
    Showers = 81,
    /// Code 82: Violent rain showers.
    HeavyShowers = 82,
    /// Code 85: Slight snow showers.
    LightSnowShowers = 85,
    /// Code 86: Heavy snow showers.
    SnowShowers = 86,
    /// Code 95: Thunderstorm.
    Thunderstorm = 95,
    /// Code 96: Thunderstorm with slight hail.
    LightHailThunderstorm = 96,
    /// Code 99: Thunderstorm with heavy hail.
    HailThunderstorm = 99,
}

impl WmoCode {
    /// Attempts to convert a WMO code into a `WmoCode` variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use weather_calendar::WmoCode;
    ///
    /// assert_eq!(WmoCode::from_i64(63), Some(WmoCode::Rain));
    /// assert_eq!(WmoCode::from_i64(4), None);
    /// ```
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            0 => Some(WmoCode::Clear),
            1 => Some(WmoCode::MainlyClear),
            2 => Some(WmoCode::PartlyCloudy),
            3 => Some(WmoCode::Overcast),
            45 => Some(WmoCode::Fog),
            48 => Some(WmoCode::RimeFog),
            51 => Some(WmoCode::LightDrizzle),
            53 => Some(WmoCode::Drizzle),
            55 => Some(WmoCode::HeavyDrizzle),
            56 => Some(WmoCode::LightFreezingDrizzle),
            57 => Some(WmoCode::FreezingDrizzle),
            61 => Some(WmoCode::LightRain),
            63 => Some(WmoCode::Rain),
            65 => Some(WmoCode::HeavyRain),
            66 => Some(WmoCode::LightFreezingRain),
            67 => Some(WmoCode::FreezingRain),
            71 => Some(WmoCode::LightSnow),
            73 => Some(WmoCode::Snow),
            75 => Some(WmoCode::HeavySnow),
            77 => Some(WmoCode::SnowGrains),
            80 => Some(WmoCode::LightShowers),
            81 => Some(WmoCode::Showers),
            82 => Some(WmoCode::HeavyShowers),
            85 => Some(WmoCode::LightSnowShowers),
            86 => Some(WmoCode::SnowShowers),
            95 => Some(WmoCode::Thunderstorm),
            96 => Some(WmoCode::LightHailThunderstorm),
            99 => Some(WmoCode::HailThunderstorm),
            _ => None,
        }
    }

    /// Like [`WmoCode::from_i64`], but an unknown code is a lookup failure.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NoMapping`] for codes outside the WMO table.
    pub fn lookup(value: i64) -> Result<Self, LookupError> {
        Self::from_i64(value).ok_or(LookupError::NoMapping {
            table: "weather condition",
            value,
        })
    }

    pub fn code(&self) -> i64 {
        *self as i64
    }

    /// Short human-readable label, e.g. `"Partly cloudy"`.
    pub fn label(&self) -> &'static str {
        match self {
            WmoCode::Clear => "Sunny",
            WmoCode::MainlyClear => "Mostly sunny",
            WmoCode::PartlyCloudy => "Partly cloudy",
            WmoCode::Overcast => "Cloudy",
            WmoCode::Fog => "Fog",
            WmoCode::RimeFog => "Icy fog",
            WmoCode::LightDrizzle => "Light drizzle",
            WmoCode::Drizzle => "Drizzle",
            WmoCode::HeavyDrizzle => "Heavy drizzle",
            WmoCode::LightFreezingDrizzle => "Light freezing drizzle",
            WmoCode::FreezingDrizzle => "Freezing drizzle",
            WmoCode::LightRain => "Light rain",
            WmoCode::Rain => "Rain",
            WmoCode::HeavyRain => "Heavy rain",
            WmoCode::LightFreezingRain => "Light freezing rain",
            WmoCode::FreezingRain => "Freezing rain",
            WmoCode::LightSnow => "Light snow",
            WmoCode::Snow => "Snow",
            WmoCode::HeavySnow => "Heavy Snow",
            WmoCode::SnowGrains => "Snow grains",
            WmoCode::LightShowers => "Light showers",
            WmoCode::Showers => "Showers",
            WmoCode::HeavyShowers => "Heavy showers",
            WmoCode::LightSnowShowers => "Light snow showers",
            WmoCode::SnowShowers => "Snow showers",
            WmoCode::Thunderstorm => "Thunderstorm",
            WmoCode::LightHailThunderstorm => "Light T-storm w/ hail",
            WmoCode::HailThunderstorm => "T-storm w/ hail",
        }
    }

    /// Emoji shown in front of the summary line.
    pub fn icon(&self) -> &'static str {
        match self {
            WmoCode::Clear => "\u{2600}\u{fe0f}",
            WmoCode::MainlyClear => "\u{1f324}",
            WmoCode::PartlyCloudy => "\u{26c5}\u{fe0f}",
            WmoCode::Overcast => "\u{2601}\u{fe0f}",
            WmoCode::Fog => "\u{1f32b}",
            WmoCode::RimeFog | WmoCode::LightHailThunderstorm | WmoCode::HailThunderstorm => {
                "\u{1f9ca}"
            }
            WmoCode::LightDrizzle
            | WmoCode::Drizzle
            | WmoCode::HeavyDrizzle
            | WmoCode::LightRain
            | WmoCode::Rain
            | WmoCode::HeavyRain
            | WmoCode::LightShowers
            | WmoCode::Showers
            | WmoCode::HeavyShowers => "\u{1f327}",
            WmoCode::LightFreezingDrizzle
            | WmoCode::FreezingDrizzle
            | WmoCode::LightFreezingRain
            | WmoCode::FreezingRain => "\u{1f328}",
            WmoCode::LightSnow
            | WmoCode::Snow
            | WmoCode::HeavySnow
            | WmoCode::SnowGrains
            | WmoCode::LightSnowShowers
            | WmoCode::SnowShowers => "\u{2744}\u{fe0f}",
            WmoCode::Thunderstorm => "\u{26c8}\u{fe0f}",
        }
    }
}
