//! Built-in holiday tables.
//!
//! These years are transcribed from the Cabinet Office calendar and are used
//! verbatim, substitute holidays included.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::YearSource;

type Entry = (u32, u32, &'static str);

const HOLIDAYS_2024: &[Entry] = &[
    (1, 1, "元日"),
    (1, 8, "成人の日"),
    (2, 11, "建国記念の日"),
    (2, 12, "振替休日"),
    (2, 23, "天皇誕生日"),
    (3, 20, "春分の日"),
    (4, 29, "昭和の日"),
    (5, 3, "憲法記念日"),
    (5, 4, "みどりの日"),
    (5, 5, "こどもの日"),
    (5, 6, "振替休日"),
    (7, 15, "海の日"),
    (8, 11, "山の日"),
    (8, 12, "振替休日"),
    (9, 16, "敬老の日"),
    (9, 22, "秋分の日"),
    (9, 23, "振替休日"),
    (10, 14, "スポーツの日"),
    (11, 3, "文化の日"),
    (11, 4, "振替休日"),
    (11, 23, "勤労感謝の日"),
];

const HOLIDAYS_2025: &[Entry] = &[
    (1, 1, "元日"),
    (1, 13, "成人の日"),
    (2, 11, "建国記念の日"),
    (2, 23, "天皇誕生日"),
    (2, 24, "振替休日"),
    (3, 20, "春分の日"),
    (4, 29, "昭和の日"),
    (5, 3, "憲法記念日"),
    (5, 4, "みどりの日"),
    (5, 5, "こどもの日"),
    (5, 6, "振替休日"),
    (7, 21, "海の日"),
    (8, 11, "山の日"),
    (9, 15, "敬老の日"),
    (9, 23, "秋分の日"),
    (10, 13, "スポーツの日"),
    (11, 3, "文化の日"),
    (11, 23, "勤労感謝の日"),
    (11, 24, "振替休日"),
];

const HOLIDAYS_2026: &[Entry] = &[
    (1, 1, "元日"),
    (1, 12, "成人の日"),
    (2, 11, "建国記念の日"),
    (2, 23, "天皇誕生日"),
    (3, 20, "春分の日"),
    (4, 29, "昭和の日"),
    (5, 3, "憲法記念日"),
    (5, 4, "みどりの日"),
    (5, 5, "こどもの日"),
    (5, 6, "振替休日"),
    (7, 20, "海の日"),
    (8, 11, "山の日"),
    (9, 21, "敬老の日"),
    (9, 22, "国民の休日"),
    (9, 23, "秋分の日"),
    (10, 12, "スポーツの日"),
    (11, 3, "文化の日"),
    (11, 23, "勤労感謝の日"),
];

/// Years that ship with a built-in table.
pub const BUILTIN_YEARS: [i32; 3] = [2024, 2025, 2026];

/// The built-in table for `year`, if one ships with the crate.
pub fn builtin_table(year: i32) -> Option<BTreeMap<NaiveDate, String>> {
    let entries = match year {
        2024 => HOLIDAYS_2024,
        2025 => HOLIDAYS_2025,
        2026 => HOLIDAYS_2026,
        _ => return None,
    };

    Some(
        entries
            .iter()
            .filter_map(|&(month, day, name)| {
                NaiveDate::from_ymd_opt(year, month, day).map(|date| (date, name.to_string()))
            })
            .collect(),
    )
}

/// Chooses where `year`'s holidays come from.
///
/// Configured tables win over built-in ones; every other year is rule-based.
pub fn year_source(year: i32, overrides: &BTreeMap<i32, BTreeMap<NaiveDate, String>>) -> YearSource {
    if let Some(table) = overrides.get(&year) {
        return YearSource::Authoritative(table.clone());
    }
    builtin_table(year).map_or(YearSource::RuleBased, YearSource::Authoritative)
}
