//! Date adapters.
//!
//! Selection models never do calendar arithmetic themselves. They ask a
//! [`DateAdapter`] to compare, validate and deserialize values of an opaque
//! date type `D`. [`NaiveDateAdapter`] is the stock adapter for
//! [`chrono::NaiveDate`].
//!
//! # Example
//!
//! ```
//! use std::cmp::Ordering;
//! use chrono::NaiveDate;
//! use horizon_datepicker::{DateAdapter, NaiveDateAdapter};
//!
//! let min = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let max = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
//! let adapter = NaiveDateAdapter::new().with_date_range(min, max);
//!
//! let date = adapter.deserialize("2025-06-15").unwrap();
//! assert!(adapter.is_valid(&date));
//! assert_eq!(adapter.compare_date(&min, &date), Ordering::Less);
//!
//! // Bounds restrict input, not validity.
//! let late = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
//! assert!(adapter.is_valid(&late));
//! assert!(!adapter.is_in_range(&late));
//! assert_eq!(adapter.deserialize("2026-01-01"), None);
//! ```

use std::any::Any;
use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate};
use horizon_datepicker_core::logging::targets;

/// Default parse format for [`NaiveDateAdapter::deserialize`] (ISO 8601).
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Capabilities a selection model needs from a date type.
///
/// An adapter is shared between every model that uses it and is only ever
/// read, so implementations must be `Send + Sync`.
pub trait DateAdapter<D: 'static>: Send + Sync {
    /// Three-way comparison of two dates.
    fn compare_date(&self, first: &D, second: &D) -> Ordering;

    /// Whether `date` is a real calendar date (not, say, February 30th).
    fn is_valid(&self, date: &D) -> bool;

    /// Parse a raw value into a date, or `None` if it is not one.
    fn deserialize(&self, value: &str) -> Option<D>;

    /// Whether `value` is an instance of this adapter's date type.
    fn is_date_instance(&self, value: &dyn Any) -> bool {
        value.is::<D>()
    }

    /// Null-safe date equality.
    ///
    /// Two absent dates are the same; an absent and a present date never are.
    /// Two valid dates are the same when they compare equal. Two invalid dates
    /// are considered the same, and a valid date never matches an invalid one.
    fn same_date(&self, first: Option<&D>, second: Option<&D>) -> bool {
        match (first, second) {
            (Some(first), Some(second)) => {
                let first_valid = self.is_valid(first);
                let second_valid = self.is_valid(second);
                if first_valid && second_valid {
                    self.compare_date(first, second) == Ordering::Equal
                } else {
                    first_valid == second_valid
                }
            }
            (None, None) => true,
            _ => false,
        }
    }

    /// Return `value` as a date if it is a date instance and valid.
    fn valid_date_or_none(&self, value: &dyn Any) -> Option<D>
    where
        D: Clone,
    {
        if !self.is_date_instance(value) {
            return None;
        }
        value.downcast_ref::<D>().filter(|date| self.is_valid(date)).cloned()
    }
}

/// A [`DateAdapter`] for [`chrono::NaiveDate`].
///
/// Every `NaiveDate` is a real calendar date, so every value is valid. The
/// optional minimum/maximum bounds only restrict what
/// [`deserialize`](DateAdapter::deserialize) accepts; see
/// [`is_in_range`](Self::is_in_range) and [`clamp`](Self::clamp).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaiveDateAdapter {
    /// Earliest accepted date, inclusive.
    minimum_date: Option<NaiveDate>,
    /// Latest accepted date, inclusive.
    maximum_date: Option<NaiveDate>,
    /// `strftime` format tried first by `deserialize`.
    parse_format: String,
}

impl Default for NaiveDateAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl NaiveDateAdapter {
    /// Create an adapter with no bounds and ISO parsing.
    pub fn new() -> Self {
        Self {
            minimum_date: None,
            maximum_date: None,
            parse_format: ISO_DATE_FORMAT.to_string(),
        }
    }

    /// Get the minimum accepted date.
    pub fn minimum_date(&self) -> Option<NaiveDate> {
        self.minimum_date
    }

    /// Set minimum date using builder pattern.
    pub fn with_minimum_date(mut self, date: NaiveDate) -> Self {
        self.minimum_date = Some(date);
        self
    }

    /// Get the maximum accepted date.
    pub fn maximum_date(&self) -> Option<NaiveDate> {
        self.maximum_date
    }

    /// Set maximum date using builder pattern.
    pub fn with_maximum_date(mut self, date: NaiveDate) -> Self {
        self.maximum_date = Some(date);
        self
    }

    /// Set both bounds using builder pattern. Swapped bounds are reordered.
    pub fn with_date_range(mut self, min: NaiveDate, max: NaiveDate) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.minimum_date = Some(min);
        self.maximum_date = Some(max);
        self
    }

    /// Get the parse format.
    pub fn parse_format(&self) -> &str {
        &self.parse_format
    }

    /// Set the parse format using builder pattern.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.parse_format = format.into();
        self
    }

    /// Whether `date` lies within the configured bounds (inclusive).
    pub fn is_in_range(&self, date: &NaiveDate) -> bool {
        self.minimum_date.is_none_or(|min| *date >= min)
            && self.maximum_date.is_none_or(|max| *date <= max)
    }

    /// Clamp `date` into the configured bounds.
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        let date = self.minimum_date.map_or(date, |min| date.max(min));
        self.maximum_date.map_or(date, |max| date.min(max))
    }
}

impl DateAdapter<NaiveDate> for NaiveDateAdapter {
    fn compare_date(&self, first: &NaiveDate, second: &NaiveDate) -> Ordering {
        first.cmp(second)
    }

    fn is_valid(&self, _date: &NaiveDate) -> bool {
        true
    }

    fn deserialize(&self, value: &str) -> Option<NaiveDate> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let parsed = NaiveDate::parse_from_str(value, &self.parse_format)
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(value)
                    .ok()
                    .map(|timestamp| timestamp.date_naive())
            });
        let Some(date) = parsed else {
            tracing::trace!(target: targets::ADAPTER, value, "value is not a date");
            return None;
        };
        if !self.is_in_range(&date) {
            tracing::trace!(target: targets::ADAPTER, %date, "date outside bounds");
            return None;
        }
        Some(date)
    }
}

static_assertions::assert_impl_all!(NaiveDateAdapter: Send, Sync);


#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_compare_date() {
        let adapter = NaiveDateAdapter::new();
        assert_eq!(adapter.compare_date(&date(2025, 1, 1), &date(2025, 1, 2)), Ordering::Less);
        assert_eq!(adapter.compare_date(&date(2025, 1, 2), &date(2025, 1, 2)), Ordering::Equal);
        assert_eq!(adapter.compare_date(&date(2025, 2, 1), &date(2025, 1, 2)), Ordering::Greater);
    }

    #[test]
    fn test_unbounded_dates_are_valid() {
        let adapter = NaiveDateAdapter::new();
        assert!(adapter.is_valid(&NaiveDate::MIN));
        assert!(adapter.is_valid(&NaiveDate::MAX));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let adapter = NaiveDateAdapter::new().with_date_range(date(2025, 1, 1), date(2025, 12, 31));
        assert!(adapter.is_in_range(&date(2025, 1, 1)));
        assert!(adapter.is_in_range(&date(2025, 12, 31)));
        assert!(!adapter.is_in_range(&date(2024, 12, 31)));
        assert!(!adapter.is_in_range(&date(2026, 1, 1)));
    }

    #[test]
    fn test_bounds_do_not_affect_validity() {
        let adapter = NaiveDateAdapter::new().with_maximum_date(date(2025, 1, 10));
        assert!(adapter.is_valid(&date(2025, 1, 20)));
        assert!(adapter.is_valid(&date(2025, 1, 25)));
        assert!(!adapter.same_date(Some(&date(2025, 1, 20)), Some(&date(2025, 1, 25))));
        assert!(adapter.same_date(Some(&date(2025, 1, 20)), Some(&date(2025, 1, 20))));
    }

    #[test]
    fn test_clamp() {
        let adapter = NaiveDateAdapter::new().with_date_range(date(2025, 1, 1), date(2025, 12, 31));
        assert_eq!(adapter.clamp(date(2024, 6, 1)), date(2025, 1, 1));
        assert_eq!(adapter.clamp(date(2026, 6, 1)), date(2025, 12, 31));
        assert_eq!(adapter.clamp(date(2025, 6, 1)), date(2025, 6, 1));
        assert_eq!(NaiveDateAdapter::new().clamp(date(1990, 1, 1)), date(1990, 1, 1));
    }

    #[test]
    fn test_deserialize_rejects_out_of_bounds() {
        let adapter = NaiveDateAdapter::new().with_date_range(date(2025, 1, 1), date(2025, 12, 31));
        assert_eq!(adapter.deserialize("2025-12-31"), Some(date(2025, 12, 31)));
        assert_eq!(adapter.deserialize("2026-01-01"), None);
        assert_eq!(adapter.deserialize("2024-12-31T23:00:00Z"), None);
    }

    #[test]
    fn test_swapped_range_is_reordered() {
        let adapter = NaiveDateAdapter::new().with_date_range(date(2025, 12, 31), date(2025, 1, 1));
        assert_eq!(adapter.minimum_date(), Some(date(2025, 1, 1)));
        assert_eq!(adapter.maximum_date(), Some(date(2025, 12, 31)));
    }

    #[test]
    fn test_single_bound() {
        let adapter = NaiveDateAdapter::new().with_minimum_date(date(2025, 3, 1));
        assert!(!adapter.is_in_range(&date(2025, 2, 28)));
        assert!(adapter.is_in_range(&date(2099, 1, 1)));
        assert_eq!(adapter.maximum_date(), None);
    }

    #[test]
    fn test_same_date_null_handling() {
        let adapter = NaiveDateAdapter::new();
        let d = date(2025, 5, 5);
        assert!(adapter.same_date(None, None));
        assert!(!adapter.same_date(Some(&d), None));
        assert!(!adapter.same_date(None, Some(&d)));
        assert!(adapter.same_date(Some(&d), Some(&date(2025, 5, 5))));
        assert!(!adapter.same_date(Some(&d), Some(&date(2025, 5, 6))));
    }

    #[test]
    fn test_same_date_invalid_dates() {
        let adapter = testing::TripleAdapter;
        let feb_30 = (2025, 2, 30);
        let apr_31 = (2025, 4, 31);
        let valid = (2025, 3, 1);
        assert!(adapter.same_date(Some(&feb_30), Some(&apr_31)));
        assert!(!adapter.same_date(Some(&feb_30), Some(&valid)));
        assert!(adapter.same_date(Some(&valid), Some(&(2025, 3, 1))));
        assert_eq!(adapter.valid_date_or_none(&feb_30), None);
    }

    #[test]
    fn test_deserialize_iso() {
        let adapter = NaiveDateAdapter::new();
        assert_eq!(adapter.deserialize("2025-06-15"), Some(date(2025, 6, 15)));
        assert_eq!(adapter.deserialize("  2025-06-15 "), Some(date(2025, 6, 15)));
    }

    #[test]
    fn test_deserialize_rfc3339() {
        let adapter = NaiveDateAdapter::new();
        assert_eq!(
            adapter.deserialize("2025-06-15T10:30:00+02:00"),
            Some(date(2025, 6, 15))
        );
    }

    #[test]
    fn test_deserialize_rejects_garbage() {
        let adapter = NaiveDateAdapter::new();
        assert_eq!(adapter.deserialize(""), None);
        assert_eq!(adapter.deserialize("not a date"), None);
        assert_eq!(adapter.deserialize("2025-02-30"), None);
    }

    #[test]
    fn test_deserialize_custom_format() {
        let adapter = NaiveDateAdapter::new().with_format("%m/%d/%Y");
        assert_eq!(adapter.parse_format(), "%m/%d/%Y");
        assert_eq!(adapter.deserialize("01/15/2025"), Some(date(2025, 1, 15)));
        assert_eq!(adapter.deserialize("2025-01-15"), None);
    }

    #[test]
    fn test_is_date_instance() {
        let adapter = NaiveDateAdapter::new();
        assert!(adapter.is_date_instance(&date(2025, 1, 1)));
        assert!(!adapter.is_date_instance(&"2025-01-01"));
        assert!(!adapter.is_date_instance(&42_i32));
    }

    #[test]
    fn test_valid_date_or_none() {
        let adapter = NaiveDateAdapter::new().with_maximum_date(date(2025, 12, 31));
        assert_eq!(adapter.valid_date_or_none(&date(2025, 1, 1)), Some(date(2025, 1, 1)));
        assert_eq!(adapter.valid_date_or_none(&date(2026, 1, 1)), Some(date(2026, 1, 1)));
        assert_eq!(adapter.valid_date_or_none(&"2025-01-01"), None);
    }
}
