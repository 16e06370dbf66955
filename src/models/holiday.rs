//! Holiday table and day classification models.
//!
//! This module contains the [`HolidayTable`] for one calendar year, the
//! [`YearSource`] describing where a year's holidays come from, and the
//! [`DayType`] classification used to highlight dates.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Classification of a calendar date.
///
/// A national holiday that falls on a weekend is still a `Holiday`.
///
/// # Example
///
/// ```
/// use attendance_engine::models::DayType;
///
/// assert_eq!(DayType::Holiday.to_string(), "holiday");
/// assert_eq!(serde_json::to_string(&DayType::Workday).unwrap(), "\"workday\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// A national holiday or substitute holiday.
    Holiday,
    /// Saturday or Sunday.
    Weekend,
    /// Any other day.
    Workday,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Holiday => write!(f, "holiday"),
            DayType::Weekend => write!(f, "weekend"),
            DayType::Workday => write!(f, "workday"),
        }
    }
}

/// Where a year's holiday list comes from.
///
/// Selected once per year and cached together with the resulting table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearSource {
    /// A hand-authored table, used verbatim (substitute holidays included).
    Authoritative(BTreeMap<NaiveDate, String>),
    /// No table exists; the general rules approximate the year.
    RuleBased,
}

impl YearSource {
    /// The provenance tag recorded on the resulting table.
    pub fn kind(&self) -> HolidaySource {
        match self {
            YearSource::Authoritative(_) => HolidaySource::Authoritative,
            YearSource::RuleBased => HolidaySource::RuleBased,
        }
    }
}

/// Provenance of a [`HolidayTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidaySource {
    /// Copied from a hand-authored table.
    Authoritative,
    /// Derived from the general rules.
    RuleBased,
}

/// All national holidays of one calendar year, keyed by date.
///
/// Serialises its entries as a `"YYYY-MM-DD" -> name` map.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{HolidaySource, HolidayTable};
/// use chrono::NaiveDate;
/// use std::collections::BTreeMap;
///
/// let mut entries = BTreeMap::new();
/// entries.insert(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), "元日".to_string());
/// let table = HolidayTable::new(2025, HolidaySource::Authoritative, entries);
///
/// assert_eq!(table.name(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()), Some("元日"));
/// assert_eq!(table.to_iso_map()["2025-01-01"], "元日");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayTable {
    /// The calendar year covered.
    pub year: i32,
    /// Where the entries came from.
    pub source: HolidaySource,
    /// Holiday names keyed by date.
    pub entries: BTreeMap<NaiveDate, String>,
}

impl HolidayTable {
    /// Creates a table, dropping any entry outside `year`.
    pub fn new(year: i32, source: HolidaySource, mut entries: BTreeMap<NaiveDate, String>) -> Self {
        entries.retain(|date, _| date.year() == year);
        Self {
            year,
            source,
            entries,
        }
    }

    /// The holiday name on `date`, if any.
    pub fn name(&self, date: NaiveDate) -> Option<&str> {
        self.entries.get(&date).map(String::as_str)
    }

    /// Whether `date` is listed.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.entries.contains_key(&date)
    }

    /// Number of holidays in the year.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates holidays in date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &str)> {
        self.entries.iter().map(|(date, name)| (*date, name.as_str()))
    }

    /// The holidays falling in `month` (1-12).
    pub fn for_month(&self, month: u32) -> BTreeMap<NaiveDate, String> {
        self.entries
            .iter()
            .filter(|(date, _)| date.month() == month)
            .map(|(date, name)| (*date, name.clone()))
            .collect()
    }

    /// The entries keyed by ISO `YYYY-MM-DD` strings.
    pub fn to_iso_map(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(date, name)| (date.format("%Y-%m-%d").to_string(), name.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample_table() -> HolidayTable {
        let entries = [
            ("2025-01-01", "元日"),
            ("2025-05-05", "こどもの日"),
            ("2025-05-06", "振替休日"),
        ]
        .into_iter()
        .map(|(d, n)| (make_date(d), n.to_string()))
        .collect();
        HolidayTable::new(2025, HolidaySource::Authoritative, entries)
    }

    #[test]
    fn test_new_drops_dates_outside_year() {
        let mut entries = BTreeMap::new();
        entries.insert(make_date("2025-12-31"), "a".to_string());
        entries.insert(make_date("2026-01-01"), "b".to_string());
        let table = HolidayTable::new(2025, HolidaySource::RuleBased, entries);
        assert_eq!(table.len(), 1);
        assert!(table.contains(make_date("2025-12-31")));
    }

    #[test]
    fn test_for_month_filters() {
        let table = sample_table();
        let may = table.for_month(5);
        assert_eq!(may.len(), 2);
        assert!(table.for_month(2).is_empty());
    }

    #[test]
    fn test_iter_is_date_ordered() {
        let table = sample_table();
        let dates: Vec<NaiveDate> = table.iter().map(|(d, _)| d).collect();
        assert_eq!(
            dates,
            vec![
                make_date("2025-01-01"),
                make_date("2025-05-05"),
                make_date("2025-05-06")
            ]
        );
    }

    #[test]
    fn test_table_serializes_iso_keys() {
        let json = serde_json::to_value(sample_table()).unwrap();
        assert_eq!(json["year"], 2025);
        assert_eq!(json["source"], "authoritative");
        assert_eq!(json["entries"]["2025-05-06"], "振替休日");
    }

    #[test]
    fn test_year_source_kind() {
        assert_eq!(YearSource::RuleBased.kind(), HolidaySource::RuleBased);
        assert_eq!(
            YearSource::Authoritative(BTreeMap::new()).kind(),
            HolidaySource::Authoritative
        );
    }

    #[test]
    fn test_day_type_display() {
        assert_eq!(DayType::Weekend.to_string(), "weekend");
        assert_eq!(format!("{:?}", DayType::Holiday), "Holiday");
    }
}
