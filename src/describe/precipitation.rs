//! Decides whether a day has measurable precipitation and which kind headlines it.

use crate::describe::format::{format_float, format_hours_minutes, format_rounded};
use crate::types::daily_aggregate::DailyAggregate;
use crate::types::units::Units;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrecipitationKind {
    Rain,
    Showers,
    Snow,
}

impl PrecipitationKind {
    /// Every kind in tie-break priority order: on equal amounts the earlier kind wins.
    pub const PRIORITY: [PrecipitationKind; 3] = [
        PrecipitationKind::Rain,
        PrecipitationKind::Showers,
        PrecipitationKind::Snow,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PrecipitationKind::Rain => "Rain",
            PrecipitationKind::Showers => "Showers",
            PrecipitationKind::Snow => "Snow",
        }
    }

    /// The day's summed amount of this kind.
    pub fn amount(&self, day: &DailyAggregate) -> f64 {
        match self {
            PrecipitationKind::Rain => day.rain_sum,
            PrecipitationKind::Showers => day.showers_sum,
            PrecipitationKind::Snow => day.snowfall_sum,
        }
    }

    fn rank(&self) -> usize {
        Self::PRIORITY
            .iter()
            .position(|kind| kind == self)
            .unwrap_or(Self::PRIORITY.len())
    }
}

/// `true` when the total exceeds `cutoff` or any sub-hourly interval was wet.
pub fn has_precipitation(day: &DailyAggregate, cutoff: f64) -> bool {
    day.precipitation_sum > cutoff || day.precipitation_hours > 0.0
}

/// The kind with the largest positive amount, ties going to the higher-priority kind.
pub fn dominant_kind(day: &DailyAggregate) -> Option<PrecipitationKind> {
    PrecipitationKind::PRIORITY
        .into_iter()
        .filter(|kind| kind.amount(day) > 0.0)
        .max_by_key(|kind| (OrderedFloat(kind.amount(day)), Reverse(kind.rank())))
}

/// The precipitation block of a description plus the amount shown in the summary line.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecipitationReport {
    /// Zero, one or three lines, without a trailing newline.
    pub text: String,
    /// `0.0` unless a dominant kind was found.
    pub headline_amount: f64,
    pub dominant: Option<PrecipitationKind>,
}

impl PrecipitationReport {
    fn empty(text: String) -> Self {
        Self {
            text,
            headline_amount: 0.0,
            dominant: None,
        }
    }
}

/// Builds the precipitation block for `day`.
///
/// A wet day gets amount, duration and probability lines for its dominant kind. A dry day
/// only mentions the probability, and only when it exceeds 1%. A day that is wet by duration
/// but has no positive typed amount gets an empty block.
pub fn describe_precipitation(day: &DailyAggregate, units: Units) -> PrecipitationReport {
    let probability = day.precipitation_probability_max;

    if !has_precipitation(day, units.precipitation_cutoff()) {
        return if probability > 1.0 {
            PrecipitationReport::empty(format!(
                "Chance of precipitation: {}%",
                format_rounded(probability)
            ))
        } else {
            PrecipitationReport::empty(String::new())
        };
    }

    let Some(kind) = dominant_kind(day) else {
        return PrecipitationReport::empty(String::new());
    };

    let amount = kind.amount(day);
    let noun = kind.label().to_lowercase();
    let text = [
        format!(
            "{}: {} {}",
            kind.label(),
            format_float(amount, 2),
            units.precipitation_unit()
        ),
        format!(
            "Length of {noun}: {}",
            format_hours_minutes(day.precipitation_hours)
        ),
        format!("Chance of {noun}: {}%", format_rounded(probability)),
    ]
    .join("\n");

    PrecipitationReport {
        text,
        headline_amount: amount,
        dominant: Some(kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{day, daily_row};

    fn wet_day(rain: f64, showers: f64, snow: f64) -> DailyAggregate {
        DailyAggregate {
            rain_sum: rain,
            showers_sum: showers,
            snowfall_sum: snow,
            precipitation_sum: rain + showers + snow,
            precipitation_hours: 1.0,
            precipitation_probability_max: 60.0,
            ..daily_row(day(0))
        }
    }

    #[test]
    fn test_metric_cutoff_boundary() {
        let mut row = daily_row(day(0));
        row.precipitation_sum = 0.25;
        assert!(!has_precipitation(&row, Units::Metric.precipitation_cutoff()));
        row.precipitation_sum = 0.26;
        assert!(has_precipitation(&row, Units::Metric.precipitation_cutoff()));
    }

    #[test]
    fn test_duration_alone_means_precipitation() {
        let mut row = daily_row(day(0));
        row.precipitation_hours = 0.25;
        assert!(has_precipitation(&row, Units::Imperial.precipitation_cutoff()));
    }

    #[test]
    fn test_tie_goes_to_rain() {
        assert_eq!(
            dominant_kind(&wet_day(2.0, 0.0, 2.0)),
            Some(PrecipitationKind::Rain)
        );
        assert_eq!(
            dominant_kind(&wet_day(0.0, 1.0, 1.0)),
            Some(PrecipitationKind::Showers)
        );
    }

    #[test]
    fn test_largest_amount_wins() {
        assert_eq!(
            dominant_kind(&wet_day(0.5, 0.2, 3.0)),
            Some(PrecipitationKind::Snow)
        );
        assert_eq!(dominant_kind(&wet_day(0.0, 0.0, 0.0)), None);
    }

    #[test]
    fn test_wet_day_block() {
        let mut row = wet_day(1.5, 0.0, 0.0);
        row.precipitation_hours = 2.5;
        row.precipitation_probability_max = 80.0;
        let report = describe_precipitation(&row, Units::Metric);

        assert_eq!(
            report.text,
            "Rain: 1.5 mm\nLength of rain: 2h 30m\nChance of rain: 80%"
        );
        assert_eq!(report.headline_amount, 1.5);
        assert_eq!(report.dominant, Some(PrecipitationKind::Rain));
    }

    #[test]
    fn test_snow_block_uses_lowercase_noun() {
        let report = describe_precipitation(&wet_day(0.0, 0.0, 0.4), Units::Imperial);
        assert_eq!(
            report.text,
            "Snow: 0.4 in\nLength of snow: 1h\nChance of snow: 60%"
        );
    }

    #[test]
    fn test_dry_day_mentions_probability_above_one_percent() {
        let mut row = daily_row(day(0));
        row.precipitation_probability_max = 35.4;
        let report = describe_precipitation(&row, Units::Metric);
        assert_eq!(report.text, "Chance of precipitation: 35%");
        assert_eq!(report.headline_amount, 0.0);

        row.precipitation_probability_max = 1.0;
        assert_eq!(describe_precipitation(&row, Units::Metric).text, "");
    }

    #[test]
    fn test_wet_without_typed_amount_is_empty() {
        let mut row = daily_row(day(0));
        row.precipitation_hours = 0.5;
        row.precipitation_probability_max = 70.0;
        let report = describe_precipitation(&row, Units::Metric);
        assert_eq!(report.text, "");
        assert_eq!(report.dominant, None);
    }
}
