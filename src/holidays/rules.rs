//! Rule-based holiday generation for years without a table.
//!
//! The equinox dates use a year-parity approximation, not an astronomical
//! calculation; years that need exact dates should ship a table instead.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};

/// Name given to substitute holidays.
pub const SUBSTITUTE_HOLIDAY: &str = "振替休日";

const FIXED_HOLIDAYS: &[(u32, u32, &str)] = &[
    (1, 1, "元日"),
    (2, 11, "建国記念の日"),
    (4, 29, "昭和の日"),
    (5, 3, "憲法記念日"),
    (5, 4, "みどりの日"),
    (5, 5, "こどもの日"),
    (11, 3, "文化の日"),
    (11, 23, "勤労感謝の日"),
];

// (month, nth Monday, name)
const HAPPY_MONDAYS: &[(u32, u8, &str)] = &[
    (1, 2, "成人の日"),
    (7, 3, "海の日"),
    (9, 3, "敬老の日"),
    (10, 2, "スポーツの日"),
];

/// Day of March on which Vernal Equinox Day falls.
pub fn vernal_equinox_day(year: i32) -> u32 {
    if (2000..=2030).contains(&year) && year % 4 != 0 {
        21
    } else {
        20
    }
}

/// Day of September on which Autumnal Equinox Day falls.
pub fn autumnal_equinox_day(year: i32) -> u32 {
    if (2000..=2030).contains(&year) && year % 4 == 0 {
        22
    } else {
        23
    }
}

/// The `n`th Monday of a month.
pub fn nth_monday(year: i32, month: u32, n: u8) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, Weekday::Mon, n)
}

/// Generates every holiday of `year` from the general rules, substitute
/// holidays included.
///
/// # Example
///
/// ```
/// use attendance_engine::holidays::rule_based_holidays;
/// use chrono::NaiveDate;
///
/// let holidays = rule_based_holidays(2023);
/// // New Year's Day 2023 was a Sunday.
/// assert_eq!(holidays[&NaiveDate::from_ymd_opt(2023, 1, 2).unwrap()], "振替休日");
/// ```
pub fn rule_based_holidays(year: i32) -> BTreeMap<NaiveDate, String> {
    let mut holidays = BTreeMap::new();
    let mut add = |date: Option<NaiveDate>, name: &str| {
        if let Some(date) = date {
            holidays.insert(date, name.to_string());
        }
    };

    for &(month, day, name) in FIXED_HOLIDAYS {
        add(NaiveDate::from_ymd_opt(year, month, day), name);
    }
    if year >= 2019 {
        add(NaiveDate::from_ymd_opt(year, 2, 23), "天皇誕生日");
    }
    // Mountain Day moved for the 2020 Olympics.
    let mountain_day = if year == 2020 { 10 } else { 11 };
    add(NaiveDate::from_ymd_opt(year, 8, mountain_day), "山の日");

    for &(month, n, name) in HAPPY_MONDAYS {
        add(nth_monday(year, month, n), name);
    }

    add(NaiveDate::from_ymd_opt(year, 3, vernal_equinox_day(year)), "春分の日");
    add(NaiveDate::from_ymd_opt(year, 9, autumnal_equinox_day(year)), "秋分の日");

    let substitutes = substitute_holidays(&holidays);
    holidays.extend(substitutes);
    holidays
}

/// Finds the substitute holiday owed for each Sunday holiday.
///
/// The substitute is the first later date that is neither a holiday nor a
/// weekend. Substitutes never leave the year of the holiday they replace.
pub fn substitute_holidays(holidays: &BTreeMap<NaiveDate, String>) -> BTreeMap<NaiveDate, String> {
    let mut substitutes = BTreeMap::new();

    for date in holidays.keys().filter(|d| d.weekday() == Weekday::Sun) {
        let mut next = date.succ_opt();
        while let Some(candidate) = next.filter(|c| c.year() == date.year()) {
            let weekend = matches!(candidate.weekday(), Weekday::Sat | Weekday::Sun);
            if !weekend
                && !holidays.contains_key(&candidate)
                && !substitutes.contains_key(&candidate)
            {
                substitutes.insert(candidate, SUBSTITUTE_HOLIDAY.to_string());
                break;
            }
            next = candidate.succ_opt();
        }
    }

    substitutes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_equinox_parity() {
        assert_eq!(vernal_equinox_day(2024), 20);
        assert_eq!(vernal_equinox_day(2023), 21);
        assert_eq!(vernal_equinox_day(2031), 20);
        assert_eq!(vernal_equinox_day(1999), 20);
        assert_eq!(autumnal_equinox_day(2024), 22);
        assert_eq!(autumnal_equinox_day(2023), 23);
        assert_eq!(autumnal_equinox_day(2032), 23);
    }

    #[test]
    fn test_nth_monday() {
        assert_eq!(nth_monday(2023, 1, 2), Some(make_date("2023-01-09")));
        assert_eq!(nth_monday(2023, 7, 3), Some(make_date("2023-07-17")));
        assert_eq!(nth_monday(2023, 10, 2), Some(make_date("2023-10-09")));
    }

    #[test]
    fn test_2023_matches_gazette() {
        let holidays = rule_based_holidays(2023);
        let expected = [
            "2023-01-01", "2023-01-02", "2023-01-09", "2023-02-11", "2023-02-23",
            "2023-03-21", "2023-04-29", "2023-05-03", "2023-05-04", "2023-05-05",
            "2023-07-17", "2023-08-11", "2023-09-18", "2023-09-23", "2023-10-09",
            "2023-11-03", "2023-11-23",
        ];
        let dates: Vec<String> = holidays
            .keys()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect();
        assert_eq!(dates, expected);
        assert_eq!(holidays[&make_date("2023-01-02")], SUBSTITUTE_HOLIDAY);
    }

    #[test]
    fn test_2020_mountain_day_and_may_substitute() {
        let holidays = rule_based_holidays(2020);
        assert_eq!(holidays[&make_date("2020-08-10")], "山の日");
        assert!(!holidays.contains_key(&make_date("2020-08-11")));
        // May 3 2020 was a Sunday; May 4 and 5 are holidays already.
        assert_eq!(holidays[&make_date("2020-05-06")], SUBSTITUTE_HOLIDAY);
    }

    #[test]
    fn test_emperor_birthday_from_2019() {
        assert!(!rule_based_holidays(2018).contains_key(&make_date("2018-02-23")));
        assert!(rule_based_holidays(2019).contains_key(&make_date("2019-02-23")));
    }

    #[test]
    fn test_substitute_never_leaves_year() {
        let mut holidays = BTreeMap::new();
        // 2028-12-31 is a Sunday.
        holidays.insert(make_date("2028-12-31"), "test".to_string());
        assert!(substitute_holidays(&holidays).is_empty());
    }

    #[test]
    fn test_substitute_skips_existing_holidays() {
        let mut holidays = BTreeMap::new();
        // Sunday followed by a Monday holiday.
        holidays.insert(make_date("2023-01-01"), "a".to_string());
        holidays.insert(make_date("2023-01-02"), "b".to_string());
        let subs = substitute_holidays(&holidays);
        assert_eq!(subs.len(), 1);
        assert!(subs.contains_key(&make_date("2023-01-03")));
    }

    #[test]
    fn test_extreme_year_does_not_panic() {
        let holidays = rule_based_holidays(i32::MAX);
        assert!(holidays.is_empty());
    }
}
