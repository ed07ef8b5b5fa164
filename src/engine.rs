//! Date engine abstraction.
//!
//! The pipeline never does date arithmetic itself. Everything that needs to
//! look inside a date goes through a [`DateEngine`], so callers can plug in
//! whatever date type they already use.

use std::rc::Rc;

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::types::{decade_of, quarter_of, PanelMode, Shared};

/// Handle to the date engine threaded through the pipeline
pub type SharedEngine<D> = Shared<dyn DateEngine<D>>;

/// Date primitives needed by the boundary and invalidity rules.
pub trait DateEngine<D> {
    /// Whether the value is a real, usable date
    fn is_valid(&self, date: &D) -> bool;

    /// Whether `a` is strictly after `b`
    fn is_after(&self, a: &D, b: &D) -> bool;

    fn year(&self, date: &D) -> i32;

    /// Month of the year, 1-based
    fn month(&self, date: &D) -> u32;

    /// Day of the month, 1-based
    fn day(&self, date: &D) -> u32;

    fn hour(&self, date: &D) -> u32;
    fn minute(&self, date: &D) -> u32;
    fn second(&self, date: &D) -> u32;
    fn millisecond(&self, date: &D) -> u32;

    /// Returns `(week_year, week)` for the date under the given locale.
    fn week(&self, locale: &str, date: &D) -> (i32, u32);

    /// Whether two dates fall in the same unit at the given granularity.
    fn is_same(&self, locale: &str, a: &D, b: &D, mode: PanelMode) -> bool {
        let same_year = self.year(a) == self.year(b);
        let same_month = same_year && self.month(a) == self.month(b);
        let same_day = same_month && self.day(a) == self.day(b);

        match mode {
            PanelMode::Decade => decade_of(self.year(a)) == decade_of(self.year(b)),
            PanelMode::Year => same_year,
            PanelMode::Quarter => same_year && quarter_of(self.month(a)) == quarter_of(self.month(b)),
            PanelMode::Month => same_month,
            PanelMode::Week => self.week(locale, a) == self.week(locale, b),
            PanelMode::Date => same_day,
            PanelMode::Time => {
                self.hour(a) == self.hour(b)
                    && self.minute(a) == self.minute(b)
                    && self.second(a) == self.second(b)
            }
        }
    }
}

impl<D> Shared<dyn DateEngine<D>> {
    pub fn new(engine: impl DateEngine<D> + 'static) -> Self {
        Self::from(Rc::new(engine) as Rc<dyn DateEngine<D>>)
    }
}

/// [`DateEngine`] over `chrono::NaiveDateTime`.
///
/// Weeks are ISO 8601 weeks regardless of locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChronoEngine;

impl DateEngine<NaiveDateTime> for ChronoEngine {
    fn is_valid(&self, _date: &NaiveDateTime) -> bool {
        // NaiveDateTime cannot hold an invalid date
        true
    }

    fn is_after(&self, a: &NaiveDateTime, b: &NaiveDateTime) -> bool {
        a > b
    }

    fn year(&self, date: &NaiveDateTime) -> i32 {
        date.year()
    }

    fn month(&self, date: &NaiveDateTime) -> u32 {
        date.month()
    }

    fn day(&self, date: &NaiveDateTime) -> u32 {
        date.day()
    }

    fn hour(&self, date: &NaiveDateTime) -> u32 {
        date.hour()
    }

    fn minute(&self, date: &NaiveDateTime) -> u32 {
        date.minute()
    }

    fn second(&self, date: &NaiveDateTime) -> u32 {
        date.second()
    }

    fn millisecond(&self, date: &NaiveDateTime) -> u32 {
        // leap seconds report nanos >= 1e9, clamp into the last millisecond
        (date.nanosecond() / 1_000_000).min(999)
    }

    fn week(&self, _locale: &str, date: &NaiveDateTime) -> (i32, u32) {
        let iso = date.iso_week();
        (iso.year(), iso.week())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{dt, dt_hms};

    #[test]
    fn test_chrono_engine_components() {
        let engine = ChronoEngine;
        let date = dt_hms(2024, 8, 15, 13, 45, 30);

        assert_eq!(engine.year(&date), 2024);
        assert_eq!(engine.month(&date), 8);
        assert_eq!(engine.day(&date), 15);
        assert_eq!(engine.hour(&date), 13);
        assert_eq!(engine.minute(&date), 45);
        assert_eq!(engine.second(&date), 30);
        assert_eq!(engine.millisecond(&date), 0);
        assert!(engine.is_valid(&date));
    }

    #[test]
    fn test_chrono_engine_is_after() {
        let engine = ChronoEngine;
        let earlier = dt(2024, 1, 1);
        let later = dt(2024, 1, 2);

        assert!(engine.is_after(&later, &earlier));
        assert!(!engine.is_after(&earlier, &later));
        assert!(!engine.is_after(&earlier, &earlier));
    }

    #[test]
    fn test_chrono_engine_iso_week() {
        let engine = ChronoEngine;
        // 2021-01-01 belongs to ISO week 53 of 2020
        assert_eq!(engine.week("en_US", &dt(2021, 1, 1)), (2020, 53));
        assert_eq!(engine.week("en_US", &dt(2024, 8, 15)), (2024, 33));
    }

    #[test]
    fn test_is_same_cases() {
        struct TestCase {
            a: NaiveDateTime,
            b: NaiveDateTime,
            mode: PanelMode,
            expected: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                a: dt(2024, 8, 15),
                b: dt_hms(2024, 8, 15, 23, 59, 59),
                mode: PanelMode::Date,
                expected: true,
                description: "same day, different time",
            },
            TestCase {
                a: dt(2024, 8, 15),
                b: dt(2024, 8, 16),
                mode: PanelMode::Date,
                expected: false,
                description: "adjacent days",
            },
            TestCase {
                a: dt(2024, 8, 1),
                b: dt(2024, 8, 31),
                mode: PanelMode::Month,
                expected: true,
                description: "same month",
            },
            TestCase {
                a: dt(2024, 7, 1),
                b: dt(2024, 9, 30),
                mode: PanelMode::Quarter,
                expected: true,
                description: "same quarter",
            },
            TestCase {
                a: dt(2024, 6, 30),
                b: dt(2024, 7, 1),
                mode: PanelMode::Quarter,
                expected: false,
                description: "quarter boundary",
            },
            TestCase {
                a: dt(2024, 1, 1),
                b: dt(2024, 12, 31),
                mode: PanelMode::Year,
                expected: true,
                description: "same year",
            },
            TestCase {
                a: dt(2020, 1, 1),
                b: dt(2029, 12, 31),
                mode: PanelMode::Decade,
                expected: true,
                description: "same decade",
            },
            TestCase {
                a: dt(2024, 8, 12),
                b: dt(2024, 8, 18),
                mode: PanelMode::Week,
                expected: true,
                description: "monday and sunday of one ISO week",
            },
            TestCase {
                a: dt_hms(2020, 1, 1, 10, 30, 0),
                b: dt_hms(2024, 5, 5, 10, 30, 0),
                mode: PanelMode::Time,
                expected: true,
                description: "same time of day",
            },
        ];

        let engine = ChronoEngine;
        for case in &cases {
            assert_eq!(
                engine.is_same("en_US", &case.a, &case.b, case.mode),
                case.expected,
                "{}",
                case.description
            );
        }
    }
}
