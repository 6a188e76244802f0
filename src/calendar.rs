//! Calendar enumeration: one month as a flat run of grid cells.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::ConfigError;

/// Label of a leading blank cell.
pub const BLANK_LABEL: &str = ".";

/// One slot of the 7-wide calendar grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    /// Decimal day number, or [`BLANK_LABEL`].
    pub label: String,
    /// Weekday of the day. Always `Sun` for blank cells and not meaningful there.
    pub weekday: Weekday,
}

impl DayCell {
    fn blank() -> Self {
        Self {
            label: BLANK_LABEL.to_string(),
            weekday: Weekday::Sun,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.label == BLANK_LABEL
    }
}

/// A month ready to be drawn: its title and its cells in grid order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthPlan {
    /// `YYYY-MM`, also the output file stem.
    pub title: String,
    pub cells: Vec<DayCell>,
}

impl MonthPlan {
    pub fn leading_blanks(&self) -> usize {
        self.cells.iter().take_while(|c| c.is_blank()).count()
    }

    pub fn days_in_month(&self) -> usize {
        self.cells.len() - self.leading_blanks()
    }

    /// Number of week rows the month occupies (4 to 6).
    pub fn rows(&self) -> usize {
        self.cells.len().div_ceil(7)
    }
}

/// A day exists when the date built from it keeps the same year, month and day.
fn day_exists(year: i32, month: u32, day: u32) -> bool {
    NaiveDate::from_ymd_opt(year, month, day)
        .is_some_and(|d| d.year() == year && d.month() == month && d.day() == day)
}

/// Lay out `month` of `year` as leading blanks followed by one cell per day.
///
/// Day 1 lands in the column of its weekday, with Sunday as column 0.
pub fn enumerate(year: i32, month: u32) -> Result<MonthPlan, ConfigError> {
    let first =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(ConfigError::InvalidDate { year, month })?;
    let leading = first.weekday().num_days_from_sunday() as usize;

    let mut cells = Vec::with_capacity(42);
    cells.extend(std::iter::repeat_with(DayCell::blank).take(leading));

    let mut date = first;
    let mut day = 1;
    while day_exists(year, month, day) {
        cells.push(DayCell {
            label: day.to_string(),
            weekday: date.weekday(),
        });
        date = date.succ_opt().unwrap_or(date);
        day += 1;
    }

    Ok(MonthPlan {
        title: format!("{year}-{month:02}"),
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn january_2021_starts_on_friday() {
        let plan = enumerate(2021, 1).unwrap();
        assert_eq!(plan.title, "2021-01");
        assert_eq!(plan.cells.len(), 36);
        assert_eq!(plan.leading_blanks(), 5);
        assert!(plan.cells[..5].iter().all(DayCell::is_blank));
        assert_eq!(plan.cells[5].label, "1");
        assert_eq!(plan.cells[5].weekday, Weekday::Fri);
        assert_eq!(plan.cells[35].label, "31");
        assert_eq!(plan.rows(), 6);
    }

    #[test]
    fn february_follows_leap_years() {
        assert_eq!(enumerate(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(enumerate(2023, 2).unwrap().days_in_month(), 28);
        assert_eq!(enumerate(1900, 2).unwrap().days_in_month(), 28);
        assert_eq!(enumerate(2000, 2).unwrap().days_in_month(), 29);
    }

    #[test]
    fn february_2015_fits_four_rows() {
        // Starts on a Sunday with 28 days.
        let plan = enumerate(2015, 2).unwrap();
        assert_eq!(plan.leading_blanks(), 0);
        assert_eq!(plan.cells.len(), 28);
        assert_eq!(plan.rows(), 4);
    }

    #[test]
    fn cell_count_is_blanks_plus_days_for_every_month() {
        for year in [1999, 2020, 2021, 2024, 2100] {
            for month in 1..=12 {
                let plan = enumerate(year, month).unwrap();
                let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
                let blanks = first.weekday().num_days_from_sunday() as usize;
                assert_eq!(plan.leading_blanks(), blanks);
                assert!((28..=31).contains(&plan.days_in_month()));
                assert_eq!(plan.cells.len(), blanks + plan.days_in_month());
                assert!((28..=42).contains(&plan.cells.len()));
            }
        }
    }

    #[test]
    fn stored_weekday_matches_reconstructed_date() {
        for month in 1..=12 {
            let plan = enumerate(2022, month).unwrap();
            for cell in plan.cells.iter().filter(|c| !c.is_blank()) {
                let day: u32 = cell.label.parse().unwrap();
                let date = NaiveDate::from_ymd_opt(2022, month, day).unwrap();
                assert_eq!(date.weekday(), cell.weekday, "{} day {day}", plan.title);
            }
        }
    }

    #[test]
    fn day_exists_rejects_rollover() {
        assert!(day_exists(2021, 4, 30));
        assert!(!day_exists(2021, 4, 31));
        assert!(!day_exists(2021, 2, 29));
        assert!(day_exists(2024, 2, 29));
    }

    #[test]
    fn invalid_month_is_an_error() {
        assert!(matches!(
            enumerate(2021, 13),
            Err(ConfigError::InvalidDate {
                year: 2021,
                month: 13
            })
        ));
    }
}
