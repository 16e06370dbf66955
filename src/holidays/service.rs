//! The holiday calendar service.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{DayType, HolidayTable, YearSource};

use super::rules::rule_based_holidays;
use super::tables::year_source;

const DAY_NAMES: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Default number of year tables a [`HolidayService`] keeps.
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Year tables in insertion order; the oldest is evicted once full.
#[derive(Debug, Default)]
struct YearCache {
    tables: HashMap<i32, Arc<HolidayTable>>,
    order: VecDeque<i32>,
}

impl YearCache {
    fn get(&self, year: i32) -> Option<Arc<HolidayTable>> {
        self.tables.get(&year).map(Arc::clone)
    }

    fn insert(&mut self, year: i32, table: Arc<HolidayTable>, capacity: usize) -> Arc<HolidayTable> {
        if let Some(existing) = self.get(year) {
            return existing;
        }
        while self.order.len() >= capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.tables.remove(&oldest);
        }
        self.order.push_back(year);
        self.tables.insert(year, Arc::clone(&table));
        table
    }
}

/// Japanese national holiday calendar with a bounded per-year cache.
///
/// Each year's table is computed on first use and kept until the cache is
/// full, after which the oldest cached year makes room. Separate instances
/// never share a cache.
///
/// # Example
///
/// ```
/// use attendance_engine::holidays::HolidayService;
/// use attendance_engine::models::DayType;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayService::new();
/// let date = NaiveDate::from_ymd_opt(2025, 11, 24).unwrap();
///
/// assert!(calendar.is_holiday(date));
/// assert_eq!(calendar.holiday_name(date).as_deref(), Some("振替休日"));
/// assert_eq!(calendar.day_type(date), DayType::Holiday);
/// assert!(!calendar.is_working_day(date));
/// ```
#[derive(Debug)]
pub struct HolidayService {
    overrides: BTreeMap<i32, BTreeMap<NaiveDate, String>>,
    capacity: usize,
    cache: RwLock<YearCache>,
}

impl Default for HolidayService {
    fn default() -> Self {
        Self::with_tables(BTreeMap::new())
    }
}

impl HolidayService {
    /// Creates a calendar backed by the built-in tables and rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calendar whose tables take precedence over the built-in ones.
    pub fn with_tables(overrides: BTreeMap<i32, BTreeMap<NaiveDate, String>>) -> Self {
        Self {
            overrides,
            capacity: DEFAULT_CACHE_CAPACITY,
            cache: RwLock::default(),
        }
    }

    /// Limits the cache to `capacity` years (at least one).
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    /// Maximum number of cached years.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Creates a calendar from the holiday tables in a loaded configuration.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_tables(config.holiday_tables().clone())
    }

    /// All holidays of `year`.
    pub fn holidays_for_year(&self, year: i32) -> Arc<HolidayTable> {
        if let Some(table) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(year)
        {
            return table;
        }

        let table = Arc::new(self.compute(year));
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(year, table, self.capacity)
    }

    fn compute(&self, year: i32) -> HolidayTable {
        let source = year_source(year, &self.overrides);
        let kind = source.kind();
        let entries = match source {
            YearSource::Authoritative(table) => table,
            YearSource::RuleBased => rule_based_holidays(year),
        };

        debug!(year, source = ?kind, holidays = entries.len(), "Computed holiday table");
        HolidayTable::new(year, kind, entries)
    }

    /// The holidays of one month.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidMonth`] unless `month` is 1-12.
    pub fn holidays_for_month(&self, year: i32, month: u32) -> EngineResult<BTreeMap<NaiveDate, String>> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidMonth { month });
        }
        Ok(self.holidays_for_year(year).for_month(month))
    }

    /// Number of holidays in `year`, substitutes included.
    pub fn year_holiday_count(&self, year: i32) -> usize {
        self.holidays_for_year(year).len()
    }

    /// Whether `date` is a national or substitute holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays_for_year(date.year()).contains(date)
    }

    /// The holiday name on `date`.
    pub fn holiday_name(&self, date: NaiveDate) -> Option<String> {
        self.holidays_for_year(date.year())
            .name(date)
            .map(str::to_string)
    }

    /// Saturday or Sunday.
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Sunday.
    pub fn is_sunday(&self, date: NaiveDate) -> bool {
        date.weekday() == Weekday::Sun
    }

    /// Saturday.
    pub fn is_saturday(&self, date: NaiveDate) -> bool {
        date.weekday() == Weekday::Sat
    }

    /// Neither a weekend nor a holiday.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Classifies `date`; a holiday on a weekend is a holiday.
    pub fn day_type(&self, date: NaiveDate) -> DayType {
        if self.is_holiday(date) {
            DayType::Holiday
        } else if self.is_weekend(date) {
            DayType::Weekend
        } else {
            DayType::Workday
        }
    }

    /// The Japanese weekday character for `date`.
    pub fn japanese_day_name(&self, date: NaiveDate) -> &'static str {
        japanese_day_name(date)
    }

    /// Years currently cached, ascending.
    pub fn cached_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .tables
            .keys()
            .copied()
            .collect();
        years.sort_unstable();
        years
    }
}

/// The Japanese weekday character (日 to 土) for `date`.
///
/// # Example
///
/// ```
/// use attendance_engine::holidays::japanese_day_name;
/// use chrono::NaiveDate;
///
/// assert_eq!(japanese_day_name(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()), "日");
/// assert_eq!(japanese_day_name(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()), "月");
/// ```
pub fn japanese_day_name(date: NaiveDate) -> &'static str {
    DAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| EngineError::InvalidDate {
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HolidaySource;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_builtin_year_is_authoritative() {
        let service = HolidayService::new();
        let table = service.holidays_for_year(2025);
        assert_eq!(table.source, HolidaySource::Authoritative);
        assert_eq!(table.len(), 19);
        assert_eq!(service.year_holiday_count(2025), 19);
    }

    #[test]
    fn test_rule_based_year() {
        let service = HolidayService::new();
        let table = service.holidays_for_year(2023);
        assert_eq!(table.source, HolidaySource::RuleBased);
        assert_eq!(table.len(), 17);
        assert_eq!(
            service.holiday_name(make_date("2023-01-02")).as_deref(),
            Some("振替休日")
        );
    }

    #[test]
    fn test_cache_is_reused() {
        let service = HolidayService::new();
        assert!(service.cached_years().is_empty());

        let first = service.holidays_for_year(2030);
        let second = service.holidays_for_year(2030);
        assert!(Arc::ptr_eq(&first, &second));

        service.holidays_for_year(2024);
        assert_eq!(service.cached_years(), vec![2024, 2030]);
    }

    #[test]
    fn test_cache_is_bounded() {
        let service = HolidayService::new();
        for year in 0..2_000 {
            service.holidays_for_year(year);
        }
        let cached = service.cached_years();
        assert_eq!(cached.len(), DEFAULT_CACHE_CAPACITY);
        assert_eq!(cached.first(), Some(&(2_000 - DEFAULT_CACHE_CAPACITY as i32)));
        assert_eq!(cached.last(), Some(&1_999));
    }

    #[test]
    fn test_oldest_year_is_evicted() {
        let service = HolidayService::new().with_capacity(2);
        assert_eq!(service.capacity(), 2);

        let first_2024 = service.holidays_for_year(2024);
        service.holidays_for_year(2025);
        assert!(Arc::ptr_eq(&first_2024, &service.holidays_for_year(2024)));

        service.holidays_for_year(2026);
        assert_eq!(service.cached_years(), vec![2025, 2026]);

        // Recomputed after eviction, equal but not the same allocation.
        let second_2024 = service.holidays_for_year(2024);
        assert_eq!(*first_2024, *second_2024);
        assert!(!Arc::ptr_eq(&first_2024, &second_2024));
        assert_eq!(service.cached_years(), vec![2024, 2026]);
    }

    #[test]
    fn test_zero_capacity_keeps_one_year() {
        let service = HolidayService::new().with_capacity(0);
        service.holidays_for_year(2024);
        service.holidays_for_year(2025);
        assert_eq!(service.cached_years(), vec![2025]);
    }

    #[test]
    fn test_instances_do_not_share_cache() {
        let a = HolidayService::new();
        let b = HolidayService::new();
        a.holidays_for_year(2025);
        assert!(b.cached_years().is_empty());
    }

    #[test]
    fn test_configured_table_overrides_builtin() {
        let mut custom = BTreeMap::new();
        custom.insert(make_date("2025-12-29"), "年末休暇".to_string());
        let mut overrides = BTreeMap::new();
        overrides.insert(2025, custom);

        let service = HolidayService::with_tables(overrides);
        assert!(service.is_holiday(make_date("2025-12-29")));
        assert!(!service.is_holiday(make_date("2025-01-01")));
        assert_eq!(service.year_holiday_count(2025), 1);
    }

    #[test]
    fn test_day_type_precedence() {
        let service = HolidayService::new();
        // Sunday holiday
        assert_eq!(service.day_type(make_date("2025-02-23")), DayType::Holiday);
        // Plain Saturday
        assert_eq!(service.day_type(make_date("2025-06-07")), DayType::Weekend);
        // Plain Monday
        assert_eq!(service.day_type(make_date("2025-06-02")), DayType::Workday);
        assert!(service.is_working_day(make_date("2025-06-02")));
    }

    #[test]
    fn test_weekday_helpers() {
        let service = HolidayService::new();
        assert!(service.is_sunday(make_date("2025-06-01")));
        assert!(service.is_saturday(make_date("2025-06-07")));
        assert!(service.is_weekend(make_date("2025-06-07")));
        assert!(!service.is_weekend(make_date("2025-06-06")));
        assert_eq!(service.japanese_day_name(make_date("2025-06-07")), "土");
    }

    #[test]
    fn test_holidays_for_month() {
        let service = HolidayService::new();
        let may = service.holidays_for_month(2025, 5).unwrap();
        assert_eq!(may.len(), 4);
        assert!(service.holidays_for_month(2025, 6).unwrap().is_empty());
        assert!(matches!(
            service.holidays_for_month(2025, 13),
            Err(EngineError::InvalidMonth { month: 13 })
        ));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-01-01").unwrap(), make_date("2025-01-01"));
        assert!(matches!(
            parse_date("2025-02-30"),
            Err(EngineError::InvalidDate { .. })
        ));
        assert!(parse_date("tomorrow").is_err());
    }
}
