use chrono::{Days, NaiveDate};
use thiserror::Error;

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateParseError {
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }

    pub fn len(&self) -> usize {
        if self.end < self.start {
            return 0;
        }
        (self.end - self.start).num_days() as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn shift_days(&self, days: i64) -> Self {
        let move_by = |date: NaiveDate| {
            if days >= 0 {
                date.checked_add_days(Days::new(days as u64))
            } else {
                date.checked_sub_days(Days::new(days.unsigned_abs()))
            }
            .unwrap_or(date)
        };
        Self::new(move_by(self.start), move_by(self.end))
    }
}

impl From<DateRange> for OptionalDateRange {
    fn from(range: DateRange) -> Self {
        Self {
            start: Some(range.start),
            end: Some(range.end),
        }
    }
}

/// Date filter where either bound may be left open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionalDateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl OptionalDateRange {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: Some(date),
            end: Some(date),
        }
    }

    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self, DateParseError> {
        Ok(Self {
            start: parse_optional_date(start.unwrap_or_default())?,
            end: parse_optional_date(end.unwrap_or_default())?,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| start <= date) && self.end.is_none_or(|end| date <= end)
    }

    /// `start`/`end` pairs for the bounds that are set.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(start) = self.start {
            pairs.push(("start", format_iso(start)));
        }
        if let Some(end) = self.end {
            pairs.push(("end", format_iso(end)));
        }
        pairs
    }
}

pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

pub fn parse_iso_date(value: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT)
        .map_err(|_| DateParseError::InvalidDate(trimmed.to_string()))
}

pub fn parse_optional_date(value: &str) -> Result<Option<NaiveDate>, DateParseError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_iso_date(value).map(Some)
}

#[cfg(test)]
mod primitives_tests {
    use super::*;
    use rstest::rstest;

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).unwrap()
    }

    #[rstest]
    fn it_should_iterate_every_day_of_an_inclusive_range() {
        let range = DateRange::new(date("2026-10-30"), date("2026-11-02"));
        let days: Vec<String> = range.days().map(format_iso).collect();
        assert_eq!(
            days,
            vec!["2026-10-30", "2026-10-31", "2026-11-01", "2026-11-02"]
        );
        assert_eq!(range.len(), 4);
        assert!(range.contains(date("2026-11-02")));
        assert!(!range.contains(date("2026-11-03")));
    }

    #[rstest]
    fn it_should_report_an_inverted_range_as_empty() {
        let range = DateRange::new(date("2026-10-02"), date("2026-10-01"));
        assert!(range.is_empty());
        assert_eq!(range.days().count(), 0);
    }

    #[rstest]
    #[case(7, "2026-10-19", "2026-10-25")]
    #[case(-7, "2026-10-05", "2026-10-11")]
    fn it_should_shift_both_bounds(#[case] days: i64, #[case] start: &str, #[case] end: &str) {
        let range = DateRange::new(date("2026-10-12"), date("2026-10-18"));
        assert_eq!(range.shift_days(days), DateRange::new(date(start), date(end)));
    }

    #[rstest]
    #[case("", None)]
    #[case("   ", None)]
    #[case("2026-02-28", Some("2026-02-28"))]
    #[case(" 2026-02-28 ", Some("2026-02-28"))]
    fn it_should_parse_optional_dates(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(parse_optional_date(input).unwrap(), expected.map(date));
    }

    #[rstest]
    #[case("2026-02-30")]
    #[case("28-02-2026")]
    #[case("tomorrow")]
    fn it_should_reject_malformed_dates(#[case] input: &str) {
        assert_eq!(
            parse_optional_date(input),
            Err(DateParseError::InvalidDate(input.to_string()))
        );
    }

    #[rstest]
    fn it_should_only_emit_query_pairs_for_set_bounds() {
        let open_end = OptionalDateRange::parse(Some("2026-10-01"), Some("")).unwrap();
        assert_eq!(
            open_end.query_pairs(),
            vec![("start", "2026-10-01".to_string())]
        );
        assert!(OptionalDateRange::unbounded().query_pairs().is_empty());
    }

    #[rstest]
    fn it_should_treat_missing_bounds_as_open() {
        let filter = OptionalDateRange {
            start: None,
            end: Some(date("2026-10-15")),
        };
        assert!(filter.contains(date("1999-01-01")));
        assert!(filter.contains(date("2026-10-15")));
        assert!(!filter.contains(date("2026-10-16")));
    }
}
