//! The static bucket tables used when describing a forecast day.

use crate::lookup::range_table::{RangeEntry, RangeTable, UNBOUNDED};

/// Wind bearing in whole degrees to an arrow glyph. Covers `[0, 361)` so a bearing that
/// rounds up to 360 still resolves to north.
pub const COMPASS: RangeTable = RangeTable::new(
    "compass",
    &[
        RangeEntry::new(0, 23, "⬆"),
        RangeEntry::new(23, 68, "↗"),
        RangeEntry::new(68, 113, "➡"),
        RangeEntry::new(113, 158, "↘"),
        RangeEntry::new(158, 203, "⬇"),
        RangeEntry::new(203, 248, "↙"),
        RangeEntry::new(248, 293, "⬅"),
        RangeEntry::new(293, 338, "↖"),
        RangeEntry::new(338, 361, "⬆"),
    ],
);

/// US AQI categories.
pub const AIR_QUALITY: RangeTable = RangeTable::new(
    "air quality",
    &[
        RangeEntry::new(0, 51, "Good"),
        RangeEntry::new(51, 101, "Fair"),
        RangeEntry::new(101, 151, "Unhealthy (Sensitive)"),
        RangeEntry::new(151, 201, "Poor"),
        RangeEntry::new(201, 301, "Very Poor"),
        RangeEntry::new(301, UNBOUNDED, "Hazardous"),
    ],
);

/// WHO UV index categories.
pub const UV_INDEX: RangeTable = RangeTable::new(
    "UV index",
    &[
        RangeEntry::new(0, 3, "Low"),
        RangeEntry::new(3, 6, "Moderate"),
        RangeEntry::new(6, 8, "High"),
        RangeEntry::new(8, 11, "Very High"),
        RangeEntry::new(11, UNBOUNDED, "Extreme"),
    ],
);
