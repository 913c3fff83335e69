use crate::aggregation::frames::{COL_DATE, COL_LOCAL_DATETIME};
use chrono::NaiveDate;
use polars::prelude::{col, lit, DataType, LazyFrame};

pub trait ForecastFrameExt {
    /// Adds a `date` column holding the local calendar date of `local_datetime`.
    ///
    /// # Returns
    /// A new `LazyFrame` with the column added.
    fn with_local_date(self) -> LazyFrame;

    /// Keeps rows whose `date` lies in `[start_date, end_date]` (inclusive).
    ///
    /// # Arguments
    /// * `start_date`: The first day of the window.
    /// * `end_date`: The last day of the window.
    ///
    /// # Returns
    /// A new `LazyFrame` with the filter applied. Type errors surface on `collect`.
    fn filter_window(self, start_date: NaiveDate, end_date: NaiveDate) -> LazyFrame;
}

impl ForecastFrameExt for LazyFrame {
    fn with_local_date(self) -> LazyFrame {
        self.with_column(col(COL_LOCAL_DATETIME).dt().date().alias(COL_DATE))
    }

    fn filter_window(self, start_date: NaiveDate, end_date: NaiveDate) -> LazyFrame {
        self.filter(
            col(COL_DATE)
                .cast(DataType::Date)
                .gt_eq(lit(start_date))
                .and(col(COL_DATE).cast(DataType::Date).lt_eq(lit(end_date))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::frames::sample_frame;
    use crate::test_support::{day, hour_in, TestSeries};
    use crate::types::sample::{HourlyVariable, RawSample};
    use chrono::FixedOffset;
    use polars::prelude::IntoLazy;

    #[test]
    fn test_filter_window_is_inclusive() -> Result<(), Box<dyn std::error::Error>> {
        let series = TestSeries::new(4).build();
        let df = sample_frame(&series.weather, &[HourlyVariable::Temperature])?
            .lazy()
            .with_local_date()
            .filter_window(day(1), day(2))
            .collect()?;

        assert_eq!(df.height(), 48);
        Ok(())
    }

    #[test]
    fn test_local_date_follows_each_samples_offset() -> Result<(), Box<dyn std::error::Error>> {
        // The same UTC instant lands on different local dates on either side of an offset change.
        let standard = FixedOffset::west_opt(7 * 3600).ok_or("offset")?;
        let daylight = FixedOffset::west_opt(6 * 3600).ok_or("offset")?;
        let samples = vec![
            RawSample::new(hour_in(standard, 0, 23)).with(HourlyVariable::Temperature, 1.0),
            RawSample::new(hour_in(daylight, 1, 0)).with(HourlyVariable::Temperature, 2.0),
        ];
        let df = sample_frame(&samples, &[HourlyVariable::Temperature])?
            .lazy()
            .with_local_date()
            .collect()?;

        let days = df.column(COL_DATE)?.cast(&DataType::Int32)?;
        let days: Vec<Option<i32>> = days.i32()?.into_iter().collect();
        let first = days[0].ok_or("date")?;
        assert_eq!(days[1], Some(first + 1));
        Ok(())
    }
}
