//! Half-open interval tables used to bucket integer readings (bearings, indices) into labels.

use crate::lookup::error::LookupError;

/// Upper bound that marks the last bucket of a table as open-ended ("and above").
pub const UNBOUNDED: i64 = -1;

/// One `[start, stop)` bucket of a [`RangeTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeEntry {
    pub start: i64,
    /// Exclusive upper bound, or [`UNBOUNDED`].
    pub stop: i64,
    pub label: &'static str,
}

impl RangeEntry {
    pub const fn new(start: i64, stop: i64, label: &'static str) -> Self {
        Self { start, stop, label }
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= self.start && (self.stop == UNBOUNDED || value < self.stop)
    }
}

/// A static table of non-overlapping, sorted half-open intervals.
///
/// Lookups binary-search on the interval starts, so entries must be sorted by `start`.
/// [`RangeTable::validate`] checks that a table fully partitions its domain.
///
/// # Examples
///
/// ```
/// use weather_calendar::{RangeEntry, RangeTable, UNBOUNDED};
///
/// const SPEED: RangeTable = RangeTable::new(
///     "speed",
///     &[RangeEntry::new(0, 10, "Calm"), RangeEntry::new(10, UNBOUNDED, "Windy")],
/// );
///
/// assert_eq!(SPEED.lookup(9).unwrap(), "Calm");
/// assert_eq!(SPEED.lookup(10_000).unwrap(), "Windy");
/// assert!(SPEED.lookup(-3).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RangeTable {
    name: &'static str,
    entries: &'static [RangeEntry],
}

impl RangeTable {
    pub const fn new(name: &'static str, entries: &'static [RangeEntry]) -> Self {
        Self { name, entries }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn entries(&self) -> &'static [RangeEntry] {
        self.entries
    }

    /// Returns the label of the bucket containing `value`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NoMapping`] when no bucket contains `value`.
    pub fn lookup(&self, value: i64) -> Result<&'static str, LookupError> {
        // Index of the first entry starting after `value`; the candidate is the one before it.
        let idx = self.entries.partition_point(|entry| entry.start <= value);
        idx.checked_sub(1)
            .map(|i| &self.entries[i])
            .filter(|entry| entry.contains(value))
            .map(|entry| entry.label)
            .ok_or(LookupError::NoMapping {
                table: self.name,
                value,
            })
    }

    /// Checks that the table is sorted, gap-free, non-overlapping, and that only the last
    /// entry is unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidTable`] describing the first problem found.
    pub fn validate(&self) -> Result<(), LookupError> {
        let invalid = |reason: String| LookupError::InvalidTable {
            table: self.name,
            reason,
        };

        if self.entries.is_empty() {
            return Err(invalid("table has no entries".to_string()));
        }

        for (i, entry) in self.entries.iter().enumerate() {
            let is_last = i + 1 == self.entries.len();
            if entry.stop == UNBOUNDED {
                if !is_last {
                    return Err(invalid(format!(
                        "unbounded entry '{}' is not the last entry",
                        entry.label
                    )));
                }
            } else if entry.stop <= entry.start {
                return Err(invalid(format!(
                    "entry '{}' is empty: [{}, {})",
                    entry.label, entry.start, entry.stop
                )));
            }

            if let Some(next) = self.entries.get(i + 1) {
                if next.start != entry.stop {
                    return Err(invalid(format!(
                        "entry '{}' ends at {} but '{}' starts at {}",
                        entry.label, entry.stop, next.label, next.start
                    )));
                }
            }
        }
        Ok(())
    }
}
