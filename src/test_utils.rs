use std::cell::RefCell;
use std::rc::Rc;

use chrono::{NaiveDate, NaiveDateTime};

use crate::diagnostics::DiagnosticSink;
use crate::engine::{ChronoEngine, SharedEngine};
use crate::props::PickerProps;

pub type Date = NaiveDateTime;

pub fn dt(year: i32, month: u32, day: u32) -> Date {
    dt_hms(year, month, day, 0, 0, 0)
}

pub fn dt_hms(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Date {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .expect("valid test date")
}

pub fn engine() -> SharedEngine<Date> {
    SharedEngine::new(ChronoEngine)
}

pub fn props() -> PickerProps<Date> {
    PickerProps::new(engine())
}

/// Sink that keeps every advisory it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink(Rc<RefCell<Vec<String>>>);

impl RecordingSink {
    pub fn messages(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn warn(&self, message: &str) {
        self.0.borrow_mut().push(message.to_owned());
    }
}
