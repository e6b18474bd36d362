use crate::shared::core::primitives::{DateParseError, parse_iso_date};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Precedence given to labels that are not one of the known shift kinds.
pub const UNKNOWN_SHIFT_PRECEDENCE: u8 = 99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftKind {
    Day,
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl ShiftKind {
    pub const ALL: [ShiftKind; 5] = [
        ShiftKind::Day,
        ShiftKind::Morning,
        ShiftKind::Afternoon,
        ShiftKind::Evening,
        ShiftKind::Night,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShiftKind::Day => "Day",
            ShiftKind::Morning => "Morning",
            ShiftKind::Afternoon => "Afternoon",
            ShiftKind::Evening => "Evening",
            ShiftKind::Night => "Night",
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            ShiftKind::Day => 0,
            ShiftKind::Morning => 1,
            ShiftKind::Afternoon => 2,
            ShiftKind::Evening => 3,
            ShiftKind::Night => 4,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ShiftKind::Day => "is-day",
            ShiftKind::Morning => "is-morning",
            ShiftKind::Afternoon => "is-afternoon",
            ShiftKind::Evening => "is-evening",
            ShiftKind::Night => "is-night",
        }
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShiftKind {
    type Err = ShiftValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        ShiftKind::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ShiftValidationError::UnknownShift(wanted.to_string()))
    }
}

/// A scheduled shift as stored by the backend. The label is kept verbatim so
/// rows with labels outside [`ShiftKind`] still render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    pub shift: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Shift {
    pub fn kind(&self) -> Option<ShiftKind> {
        self.shift.parse().ok()
    }

    pub fn precedence(&self) -> u8 {
        self.kind()
            .map(ShiftKind::precedence)
            .unwrap_or(UNKNOWN_SHIFT_PRECEDENCE)
    }

    pub fn css_class(&self) -> &'static str {
        self.kind().map(ShiftKind::css_class).unwrap_or_default()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShiftValidationError {
    #[error("Select an employee.")]
    MissingEmployee,

    #[error("Unknown employee '{0}'.")]
    InvalidEmployee(String),

    #[error("Select a shift.")]
    MissingShift,

    #[error("Unknown shift '{0}'.")]
    UnknownShift(String),

    #[error(transparent)]
    InvalidDate(#[from] DateParseError),
}

/// Payload sent to the backend when creating or updating a shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftInput {
    pub employee_id: i64,
    pub date: NaiveDate,
    pub shift: ShiftKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ShiftInput {
    pub fn parse(
        employee_id: &str,
        date: &str,
        shift: &str,
        note: &str,
    ) -> Result<Self, ShiftValidationError> {
        let employee_id = employee_id.trim();
        if employee_id.is_empty() {
            return Err(ShiftValidationError::MissingEmployee);
        }
        let employee_id = employee_id
            .parse::<i64>()
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| ShiftValidationError::InvalidEmployee(employee_id.to_string()))?;
        if shift.trim().is_empty() {
            return Err(ShiftValidationError::MissingShift);
        }
        let shift = shift.parse()?;
        let date = parse_iso_date(date)?;
        let note = Some(note.trim())
            .filter(|note| !note.is_empty())
            .map(str::to_string);
        Ok(Self {
            employee_id,
            date,
            shift,
            note,
        })
    }
}

#[cfg(test)]
mod shift_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("day", ShiftKind::Day)]
    #[case("MORNING", ShiftKind::Morning)]
    #[case(" Afternoon ", ShiftKind::Afternoon)]
    #[case("evening", ShiftKind::Evening)]
    #[case("Night", ShiftKind::Night)]
    fn it_should_parse_shift_labels_case_insensitively(
        #[case] label: &str,
        #[case] expected: ShiftKind,
    ) {
        assert_eq!(label.parse::<ShiftKind>().unwrap(), expected);
    }

    #[rstest]
    fn it_should_rank_unknown_labels_last() {
        let shift = Shift {
            id: 1,
            employee_id: 1,
            date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            shift: "Graveyard".into(),
            note: None,
        };
        assert_eq!(shift.kind(), None);
        assert_eq!(shift.precedence(), UNKNOWN_SHIFT_PRECEDENCE);
        assert_eq!(shift.css_class(), "");
    }

    #[rstest]
    fn it_should_keep_precedence_in_declaration_order() {
        let ranks: Vec<u8> = ShiftKind::ALL.iter().map(|kind| kind.precedence()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
    }

    #[rstest]
    fn it_should_parse_a_complete_shift_form() {
        let input = ShiftInput::parse("7", "2026-10-16", "evening", "  covering  ").unwrap();
        assert_eq!(input.employee_id, 7);
        assert_eq!(input.date, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        assert_eq!(input.shift, ShiftKind::Evening);
        assert_eq!(input.note.as_deref(), Some("covering"));
    }

    #[rstest]
    #[case("", "Day", "2026-10-16", ShiftValidationError::MissingEmployee)]
    #[case("abc", "Day", "2026-10-16", ShiftValidationError::InvalidEmployee("abc".into()))]
    #[case("0", "Day", "2026-10-16", ShiftValidationError::InvalidEmployee("0".into()))]
    #[case("1", "", "2026-10-16", ShiftValidationError::MissingShift)]
    #[case("1", "Brunch", "2026-10-16", ShiftValidationError::UnknownShift("Brunch".into()))]
    #[case(
        "1",
        "Day",
        "16-10-2026",
        ShiftValidationError::InvalidDate(DateParseError::InvalidDate("16-10-2026".into()))
    )]
    fn it_should_reject_incomplete_shift_forms(
        #[case] employee_id: &str,
        #[case] shift: &str,
        #[case] date: &str,
        #[case] expected: ShiftValidationError,
    ) {
        assert_eq!(ShiftInput::parse(employee_id, date, shift, ""), Err(expected));
    }

    #[rstest]
    fn it_should_omit_a_blank_note_from_the_payload() {
        let input = ShiftInput::parse("3", "2026-10-16", "Night", "   ").unwrap();
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"employee_id": 3, "date": "2026-10-16", "shift": "Night"})
        );
    }

    #[rstest]
    fn it_should_read_backend_rows_without_a_note() {
        let shift: Shift = serde_json::from_str(
            r#"{"id":4,"employee_id":2,"date":"2026-10-12","shift":"Morning"}"#,
        )
        .unwrap();
        assert_eq!(shift.note, None);
        assert_eq!(shift.kind(), Some(ShiftKind::Morning));
    }
}
