// Calendar arithmetic for the schedule page.
//
// Purpose
// - Turn a view mode and a reference date into the grid of days to draw, the
//   range to fetch from the backend and the navigation targets.
//
// Responsibilities
// - Weeks start on Monday.
// - Bucket shifts per day and order them by shift precedence, then employee
//   name, then employee id.

use crate::modules::employees::core::employee::{Employee, find_employee};
use crate::modules::schedule::core::shift::Shift;
use crate::shared::core::primitives::{DateRange, format_iso, parse_optional_date};
use chrono::{Datelike, Days, Months, NaiveDate};
use feruca::Collator;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Month,
    Week,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Month => "month",
            ViewMode::Week => "week",
        }
    }
}

pub fn week_range(reference: NaiveDate) -> DateRange {
    let offset = u64::from(reference.weekday().num_days_from_monday());
    let start = reference.checked_sub_days(Days::new(offset)).unwrap_or(reference);
    let end = start.checked_add_days(Days::new(6)).unwrap_or(start);
    DateRange::new(start, end)
}

pub fn month_range(reference: NaiveDate) -> DateRange {
    let first = first_of_month(reference);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first);
    DateRange::new(first, last)
}

/// Whole weeks covering the month of `reference`.
pub fn month_grid(reference: NaiveDate) -> DateRange {
    let month = month_range(reference);
    DateRange::new(week_range(month.start).start, week_range(month.end).end)
}

/// Range of shifts fetched from the backend.
pub fn visible_range(mode: ViewMode, reference: NaiveDate) -> DateRange {
    match mode {
        ViewMode::Month => month_range(reference),
        ViewMode::Week => week_range(reference),
    }
}

/// Range of cells drawn on the page.
pub fn grid_range(mode: ViewMode, reference: NaiveDate) -> DateRange {
    match mode {
        ViewMode::Month => month_grid(reference),
        ViewMode::Week => week_range(reference),
    }
}

pub fn previous(mode: ViewMode, reference: NaiveDate) -> NaiveDate {
    match mode {
        ViewMode::Month => {
            let first = first_of_month(reference);
            first.checked_sub_months(Months::new(1)).unwrap_or(first)
        }
        ViewMode::Week => week_range(reference).shift_days(-7).start,
    }
}

pub fn next(mode: ViewMode, reference: NaiveDate) -> NaiveDate {
    match mode {
        ViewMode::Month => {
            let first = first_of_month(reference);
            first.checked_add_months(Months::new(1)).unwrap_or(first)
        }
        ViewMode::Week => week_range(reference).shift_days(7).start,
    }
}

pub fn title(mode: ViewMode, reference: NaiveDate) -> String {
    match mode {
        ViewMode::Month => reference.format("%B %Y").to_string(),
        ViewMode::Week => {
            let week = week_range(reference);
            format!(
                "{} {} \u{2013} {} {}, {}",
                week.start.format("%B"),
                week.start.day(),
                week.end.format("%B"),
                week.end.day(),
                week.end.year()
            )
        }
    }
}

fn first_of_month(reference: NaiveDate) -> NaiveDate {
    reference.with_day(1).unwrap_or(reference)
}

/// Where the calendar is anchored: view mode plus reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarPosition {
    pub mode: ViewMode,
    pub reference: NaiveDate,
}

impl CalendarPosition {
    /// A missing or unreadable reference date falls back to `today`.
    pub fn resolve(mode: Option<ViewMode>, reference: Option<&str>, today: NaiveDate) -> Self {
        let reference = reference
            .and_then(|value| parse_optional_date(value).ok().flatten())
            .unwrap_or(today);
        Self {
            mode: mode.unwrap_or_default(),
            reference,
        }
    }

    pub fn with_mode(self, mode: ViewMode) -> Self {
        Self { mode, ..self }
    }

    pub fn with_reference(self, reference: NaiveDate) -> Self {
        Self { reference, ..self }
    }

    pub fn previous(self) -> Self {
        self.with_reference(previous(self.mode, self.reference))
    }

    pub fn next(self) -> Self {
        self.with_reference(next(self.mode, self.reference))
    }

    pub fn visible_range(self) -> DateRange {
        visible_range(self.mode, self.reference)
    }

    pub fn title(self) -> String {
        title(self.mode, self.reference)
    }

    pub fn query_pairs(self) -> [(&'static str, String); 2] {
        [
            ("view", self.mode.as_str().to_string()),
            ("at", format_iso(self.reference)),
        ]
    }
}

/// A shift positioned on the calendar, with the employee name resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedShift {
    pub shift: Shift,
    pub employee_name: Option<String>,
}

impl PlacedShift {
    pub fn place(shift: Shift, employees: &[Employee]) -> Self {
        let employee_name = find_employee(employees, shift.employee_id).map(|e| e.name.clone());
        Self {
            shift,
            employee_name,
        }
    }

    pub fn initials(&self) -> String {
        initials(self.employee_name.as_deref())
    }

    fn sort_name(&self) -> String {
        self.employee_name.as_deref().unwrap_or_default().to_lowercase()
    }

    pub fn display_name(&self) -> String {
        self.employee_name
            .clone()
            .unwrap_or_else(|| format!("Emp {}", self.shift.employee_id))
    }
}

/// Precedence, then employee name in Unicode collation order, then employee id.
pub fn compare_same_day(collator: &mut Collator, a: &PlacedShift, b: &PlacedShift) -> Ordering {
    a.shift
        .precedence()
        .cmp(&b.shift.precedence())
        .then_with(|| collator.collate(a.sort_name().as_str(), b.sort_name().as_str()))
        .then_with(|| a.shift.employee_id.cmp(&b.shift.employee_id))
}

/// Shifts grouped by ISO date, each day already ordered.
pub fn bucket_shifts(shifts: &[Shift], employees: &[Employee]) -> HashMap<String, Vec<PlacedShift>> {
    let mut buckets: HashMap<String, Vec<PlacedShift>> = HashMap::new();
    for shift in shifts {
        buckets
            .entry(format_iso(shift.date))
            .or_default()
            .push(PlacedShift::place(shift.clone(), employees));
    }
    let mut collator = Collator::default();
    for day in buckets.values_mut() {
        day.sort_by(|a, b| compare_same_day(&mut collator, a, b));
    }
    buckets
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub outside_month: bool,
    pub is_today: bool,
    pub shifts: Vec<PlacedShift>,
}

pub fn build_grid(
    mode: ViewMode,
    reference: NaiveDate,
    today: NaiveDate,
    shifts: &[Shift],
    employees: &[Employee],
) -> Vec<CalendarDay> {
    let mut buckets = bucket_shifts(shifts, employees);
    grid_range(mode, reference)
        .days()
        .map(|date| CalendarDay {
            date,
            outside_month: mode == ViewMode::Month && date.month() != reference.month(),
            is_today: date == today,
            shifts: buckets.remove(&format_iso(date)).unwrap_or_default(),
        })
        .collect()
}

/// Shifts for the list below the calendar: by date, then same-day order.
pub fn ordered_list(shifts: &[Shift], employees: &[Employee]) -> Vec<PlacedShift> {
    let mut placed: Vec<PlacedShift> = shifts
        .iter()
        .cloned()
        .map(|shift| PlacedShift::place(shift, employees))
        .collect();
    let mut collator = Collator::default();
    placed.sort_by(|a, b| {
        a.shift
            .date
            .cmp(&b.shift.date)
            .then_with(|| compare_same_day(&mut collator, a, b))
    });
    placed
}

pub fn initials(name: Option<&str>) -> String {
    let parts: Vec<&str> = name.unwrap_or_default().split_whitespace().collect();
    match parts.as_slice() {
        [] => "E".to_string(),
        [single] => single.chars().take(2).collect::<String>().to_uppercase(),
        [first, .., last] => first
            .chars()
            .take(1)
            .chain(last.chars().take(1))
            .collect::<String>()
            .to_uppercase(),
    }
}

pub fn format_day_month_year(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}
