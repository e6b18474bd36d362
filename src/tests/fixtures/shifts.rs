// Shared test fixtures for shifts.

use crate::modules::schedule::core::shift::{Shift, ShiftInput, ShiftKind};
use chrono::NaiveDate;

pub fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

pub struct ShiftInputBuilder {
    inner: ShiftInput,
}

impl Default for ShiftInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ShiftInputBuilder {
    pub fn new() -> Self {
        Self {
            inner: ShiftInput {
                employee_id: 1,
                date: fixed_date(),
                shift: ShiftKind::Morning,
                note: None,
            },
        }
    }

    pub fn employee_id(mut self, v: i64) -> Self {
        self.inner.employee_id = v;
        self
    }

    pub fn date(mut self, v: NaiveDate) -> Self {
        self.inner.date = v;
        self
    }

    pub fn shift(mut self, v: ShiftKind) -> Self {
        self.inner.shift = v;
        self
    }

    pub fn note(mut self, v: impl Into<String>) -> Self {
        self.inner.note = Some(v.into());
        self
    }

    pub fn build(self) -> ShiftInput {
        self.inner
    }
}

pub fn make_shift(id: i64, employee_id: i64, date: NaiveDate, label: &str) -> Shift {
    Shift {
        id,
        employee_id,
        date,
        shift: label.to_string(),
        note: None,
    }
}
