//! Budget period windows and report date ranges
//!
//! Two boundary policies live here and must not be mixed up: a budget's
//! [`PeriodWindow`] is half-open (`[start, end)`), while an explicit
//! report or dashboard [`DateRange`] includes both ends.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::budget::BudgetPeriodKind;
use super::dates::{add_one_month_rolling, first_of_month_offset, last_of_month};

/// Longest trailing range accepted; larger requests are clamped
pub const MAX_TRAILING_MONTHS: u32 = 1200;

/// Half-open date window `[start, end)` of one budget period occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodWindow {
    /// First day inside the window
    pub start: NaiveDate,
    /// First day after the window
    pub end: NaiveDate,
}

impl PeriodWindow {
    /// Window of the budget period that starts on `start_date`
    ///
    /// This is the *first* occurrence: the window is never re-anchored to
    /// the current date, so once it has closed later spending no longer
    /// counts against the budget. A window reaching past the last
    /// representable day ends at [`NaiveDate::MAX`].
    pub fn current(start_date: NaiveDate, period: BudgetPeriodKind) -> Self {
        let end = match period {
            BudgetPeriodKind::Monthly => add_one_month_rolling(start_date),
            BudgetPeriodKind::Weekly => start_date.checked_add_days(Days::new(7)),
            BudgetPeriodKind::Once | BudgetPeriodKind::Other => {
                start_date.checked_add_days(Days::new(1))
            }
        }
        .unwrap_or(NaiveDate::MAX);
        tracing::trace!(%start_date, %end, ?period, "computed budget window");
        Self {
            start: start_date,
            end,
        }
    }

    /// Check if a date falls within this window (inclusive start, exclusive end)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}

impl fmt::Display for PeriodWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Inclusive date range `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day included
    pub start: NaiveDate,
    /// Last day included
    pub end: NaiveDate,
}

impl DateRange {
    /// Create an inclusive range
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The trailing `months` calendar months ending with `today`'s month
    ///
    /// Runs from the first day of the oldest month through the last day of
    /// the current one. Zero months gives a range that contains nothing.
    pub fn trailing_months(today: NaiveDate, months: u32) -> Self {
        let end = last_of_month(today);
        if months == 0 {
            return Self {
                start: end,
                end: end.pred_opt().unwrap_or(NaiveDate::MIN),
            };
        }
        let offset = 1 - months.min(MAX_TRAILING_MONTHS) as i32;
        Self {
            start: first_of_month_offset(today, offset).unwrap_or(NaiveDate::MIN),
            end,
        }
    }

    /// The `days` days ending with `today`, both included
    pub fn trailing_days(today: NaiveDate, days: u32) -> Self {
        Self {
            start: today
                .checked_sub_days(Days::new(u64::from(days)))
                .unwrap_or(NaiveDate::MIN),
            end: today,
        }
    }

    /// Check if a date falls within this range (both ends included)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Check if the range contains no day at all
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// First day of every calendar month the range touches, in order
    pub fn months(&self) -> Vec<NaiveDate> {
        let mut months = Vec::new();
        if self.is_empty() {
            return months;
        }
        let mut next = first_of_month_offset(self.start, 0);
        while let Some(current) = next.filter(|month| *month <= self.end) {
            months.push(current);
            next = first_of_month_offset(current, 1);
        }
        months
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_monthly_window() {
        let window = PeriodWindow::current(d(2025, 1, 1), BudgetPeriodKind::Monthly);
        assert_eq!(window.start, d(2025, 1, 1));
        assert_eq!(window.end, d(2025, 2, 1));
        assert!(window.contains(d(2025, 1, 1)));
        assert!(window.contains(d(2025, 1, 31)));
        assert!(!window.contains(d(2025, 2, 1)));
        assert!(!window.contains(d(2024, 12, 31)));
    }

    #[test]
    fn test_monthly_window_rolls_over_short_months() {
        let window = PeriodWindow::current(d(2025, 1, 31), BudgetPeriodKind::Monthly);
        assert_eq!(window.end, d(2025, 3, 3));
    }

    #[test]
    fn test_weekly_window() {
        let window = PeriodWindow::current(d(2025, 3, 28), BudgetPeriodKind::Weekly);
        assert_eq!(window.end, d(2025, 4, 4));
        assert_eq!((window.end - window.start).num_days(), 7);
    }

    #[test]
    fn test_once_and_unknown_periods_cover_one_day() {
        let once = PeriodWindow::current(d(2025, 5, 5), BudgetPeriodKind::Once);
        let other = PeriodWindow::current(d(2025, 5, 5), BudgetPeriodKind::Other);
        assert_eq!(once.end, d(2025, 5, 6));
        assert_eq!(other, once);
        assert!(once.contains(d(2025, 5, 5)));
        assert!(!once.contains(d(2025, 5, 6)));
    }

    #[test]
    fn test_window_is_anchored_at_start_not_today() {
        // A budget started long ago keeps reporting its first window.
        let window = PeriodWindow::current(d(2024, 6, 1), BudgetPeriodKind::Monthly);
        assert_eq!(window, PeriodWindow { start: d(2024, 6, 1), end: d(2024, 7, 1) });
        assert!(!window.contains(d(2025, 3, 15)));
    }

    #[test]
    fn test_trailing_months_range() {
        let range = DateRange::trailing_months(d(2025, 3, 15), 3);
        assert_eq!(range.start, d(2025, 1, 1));
        assert_eq!(range.end, d(2025, 3, 31));
        assert!(range.contains(d(2025, 3, 31)));
        assert!(range.contains(d(2025, 1, 1)));
        assert!(!range.contains(d(2024, 12, 31)));
    }

    #[test]
    fn test_trailing_zero_months_is_empty() {
        let range = DateRange::trailing_months(d(2025, 3, 15), 0);
        assert!(range.is_empty());
        assert!(!range.contains(d(2025, 3, 15)));
        assert!(range.months().is_empty());
    }

    #[test]
    fn test_inclusive_range_includes_end() {
        let range = DateRange::new(d(2025, 1, 1), d(2025, 1, 31));
        assert!(range.contains(d(2025, 1, 31)));
        assert!(!range.contains(d(2025, 2, 1)));
    }

    #[test]
    fn test_range_months() {
        let range = DateRange::new(d(2024, 11, 20), d(2025, 2, 3));
        assert_eq!(
            range.months(),
            vec![d(2024, 11, 1), d(2024, 12, 1), d(2025, 1, 1), d(2025, 2, 1)]
        );
    }

    #[test]
    fn test_ranges_at_the_end_of_the_calendar() {
        let last_month = NaiveDate::MAX.with_day(1).unwrap();
        let range = DateRange::new(last_month, NaiveDate::MAX);
        assert_eq!(range.months(), vec![last_month]);

        let trailing = DateRange::trailing_months(NaiveDate::MAX, 2);
        assert_eq!(trailing.months().len(), 2);
        assert_eq!(trailing.end, NaiveDate::MAX);

        let window = PeriodWindow::current(NaiveDate::MAX, BudgetPeriodKind::Monthly);
        assert_eq!(window.end, NaiveDate::MAX);
        let weekly = PeriodWindow::current(NaiveDate::MAX, BudgetPeriodKind::Weekly);
        assert_eq!(weekly.end, NaiveDate::MAX);
    }

    #[test]
    fn test_ranges_at_the_start_of_the_calendar() {
        let range = DateRange::trailing_days(NaiveDate::MIN, 30);
        assert_eq!(range.start, NaiveDate::MIN);
        assert_eq!(DateRange::trailing_months(NaiveDate::MIN, 3).start, NaiveDate::MIN);
    }

    #[test]
    fn test_trailing_days() {
        let range = DateRange::trailing_days(d(2025, 3, 31), 30);
        assert_eq!(range.start, d(2025, 3, 1));
        assert_eq!(range.end, d(2025, 3, 31));
    }
}
