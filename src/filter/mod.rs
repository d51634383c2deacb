//! # Filter State
//!
//! The user-facing filter and sort selection for browsing listings. Every field
//! carries its inactive default; `"All"` and the empty string are sentinels for
//! "this dimension does not filter".
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod predicates;
pub mod sort;

use std::{convert::Infallible, fmt, str::FromStr};

use chrono::{DateTime, Months, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

pub use self::{
    predicates::{matches_filter, Criteria},
    sort::{compare_names, sort_products},
};
use crate::{
    constants::{
        DATE_RANGE_MONTH_MONTHS, DATE_RANGE_QUARTER_MONTHS, DATE_RANGE_WEEK_DAYS, FILTER_ALL,
    },
    product::parse_number_prefix,
};

// =============================================================================
// Date Range
// =============================================================================

/// Recency filter relative to "now".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DateRange {
    /// No lower bound
    #[default]
    All,
    /// Since the start of the current calendar day
    Today,
    /// The last 7 days
    Week,
    /// The last calendar month
    Month,
    /// The last 3 calendar months
    ThreeMonths,
    /// Any other value; active, but bounded only by the far past
    Unrecognized(String),
}

impl DateRange {
    /// Returns the wire name of the range
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => FILTER_ALL,
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
            Self::ThreeMonths => "3months",
            Self::Unrecognized(other) => other,
        }
    }

    /// Returns true if this range does not filter
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Computes the earliest admitted listing date.
    ///
    /// Returns `None` for [`DateRange::All`]. Unrecognized ranges resolve to
    /// the earliest representable instant, so every dated listing passes and
    /// undated ones do not.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let cutoff = match self {
            Self::All => return None,
            Self::Unrecognized(_) => Some(DateTime::<Utc>::MIN_UTC),
            Self::Today => now
                .date_naive()
                .and_hms_opt(0, 0, 0)
                .map(|midnight| midnight.and_utc()),
            Self::Week => now.checked_sub_signed(TimeDelta::days(DATE_RANGE_WEEK_DAYS)),
            Self::Month => now.checked_sub_months(Months::new(DATE_RANGE_MONTH_MONTHS)),
            Self::ThreeMonths => now.checked_sub_months(Months::new(DATE_RANGE_QUARTER_MONTHS)),
        };

        Some(cutoff.unwrap_or(DateTime::<Utc>::MIN_UTC))
    }
}

impl FromStr for DateRange {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            FILTER_ALL => Self::All,
            "today" => Self::Today,
            "week" => Self::Week,
            "month" => Self::Month,
            "3months" => Self::ThreeMonths,
            other => Self::Unrecognized(other.to_string()),
        })
    }
}

impl From<String> for DateRange {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(range) => range,
            Err(never) => match never {},
        }
    }
}

impl From<DateRange> for String {
    fn from(range: DateRange) -> Self {
        range.as_str().to_string()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Sort Order
// =============================================================================

/// Sort order for filtered listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortBy {
    /// Most recently listed first
    #[default]
    Newest,
    /// Least recently listed first
    Oldest,
    /// Cheapest first
    PriceLow,
    /// Most expensive first
    PriceHigh,
    /// Best rated first
    Rating,
    /// Alphabetical by name
    Name,
    /// Any other value; sorts like [`SortBy::Newest`]
    Unrecognized(String),
}

impl SortBy {
    /// Wire names of the recognized sort orders
    pub const VARIANTS: &'static [&'static str] =
        &["newest", "oldest", "price-low", "price-high", "rating", "name"];

    /// Returns the wire name of the sort order
    pub fn as_str(&self) -> &str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
            Self::Name => "name",
            Self::Unrecognized(other) => other,
        }
    }
}

impl FromStr for SortBy {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "newest" => Self::Newest,
            "oldest" => Self::Oldest,
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "rating" => Self::Rating,
            "name" => Self::Name,
            other => Self::Unrecognized(other.to_string()),
        })
    }
}

impl From<String> for SortBy {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(sort) => sort,
            Err(never) => match never {},
        }
    }
}

impl From<SortBy> for String {
    fn from(sort: SortBy) -> Self {
        sort.as_str().to_string()
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Price Range
// =============================================================================

/// Inclusive price bounds as entered by the user. Empty strings are unbounded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    #[serde(default)]
    pub min: String,
    #[serde(default)]
    pub max: String,
}

impl PriceRange {
    /// Creates a price range from raw bound strings
    pub fn new(min: impl Into<String>, max: impl Into<String>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }

    /// Returns the numeric bounds `(min, max)`.
    ///
    /// An empty or unparseable minimum is `0`; an empty or unparseable
    /// maximum is `+inf`.
    pub fn bounds(&self) -> (f64, f64) {
        let min = parse_number_prefix(&self.min)
            .filter(|n| !n.is_nan())
            .unwrap_or(0.0);
        let max = parse_number_prefix(&self.max)
            .filter(|n| !n.is_nan())
            .unwrap_or(f64::INFINITY);
        (min, max)
    }

    /// Returns true if neither bound is set
    pub fn is_empty(&self) -> bool {
        self.min.is_empty() && self.max.is_empty()
    }
}

// =============================================================================
// Filter State
// =============================================================================

/// Complete filter and sort selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    /// Free-text search over name, description, and breed
    pub search_term: String,
    /// Exact category, or `"All"`
    pub category: String,
    /// Inclusive price bounds
    pub price_range: PriceRange,
    /// Minimum rating (inclusive), or `"All"`
    pub rating: String,
    /// Location substring
    pub location: String,
    /// Recency filter
    pub date_range: DateRange,
    /// Result ordering
    pub sort_by: SortBy,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: FILTER_ALL.to_string(),
            price_range: PriceRange::default(),
            rating: FILTER_ALL.to_string(),
            location: String::new(),
            date_range: DateRange::All,
            sort_by: SortBy::Newest,
        }
    }
}

impl FilterState {
    /// Creates a filter state with every dimension inactive
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if at least one filter dimension is active.
    ///
    /// Sort order is not a filter and never counts.
    pub fn has_active_filters(&self) -> bool {
        !self.search_term.is_empty()
            || self.category != FILTER_ALL
            || !self.price_range.min.is_empty()
            || !self.price_range.max.is_empty()
            || self.rating != FILTER_ALL
            || !self.location.is_empty()
            || !self.date_range.is_all()
    }

    /// Resets every field to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns the minimum rating, or `None` when the rating filter is `"All"`.
    ///
    /// A malformed threshold coerces to `0`.
    pub fn rating_threshold(&self) -> Option<f64> {
        if self.rating == FILTER_ALL {
            return None;
        }
        Some(
            parse_number_prefix(&self.rating)
                .filter(|n| !n.is_nan())
                .unwrap_or(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_default_state_is_inactive() {
        let state = FilterState::default();
        assert_eq!(state.category, "All");
        assert_eq!(state.rating, "All");
        assert_eq!(state.sort_by, SortBy::Newest);
        assert!(!state.has_active_filters());
    }

    #[test]
    fn test_each_dimension_activates_filters() {
        let activations: Vec<fn(&mut FilterState)> = vec![
            |s: &mut FilterState| s.search_term = "dog".into(),
            |s: &mut FilterState| s.category = "Pets".into(),
            |s: &mut FilterState| s.price_range.min = "10".into(),
            |s: &mut FilterState| s.price_range.max = "30".into(),
            |s: &mut FilterState| s.rating = "4".into(),
            |s: &mut FilterState| s.location = "NY".into(),
            |s: &mut FilterState| s.date_range = DateRange::Week,
        ];

        for activate in activations {
            let mut state = FilterState::default();
            activate(&mut state);
            assert!(state.has_active_filters(), "{state:?}");
        }
    }

    #[test]
    fn test_sort_does_not_activate_filters() {
        let state = FilterState {
            sort_by: SortBy::PriceHigh,
            ..FilterState::default()
        };
        assert!(!state.has_active_filters());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut state = FilterState {
            search_term: "cat".into(),
            category: "Pets".into(),
            price_range: PriceRange::new("1", "2"),
            rating: "3".into(),
            location: "LA".into(),
            date_range: DateRange::Month,
            sort_by: SortBy::Name,
        };
        state.clear();
        assert_eq!(state, FilterState::default());
        state.clear();
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn test_price_bounds_defaults() {
        assert_eq!(PriceRange::default().bounds(), (0.0, f64::INFINITY));
        assert_eq!(PriceRange::new("10", "30").bounds(), (10.0, 30.0));
        assert_eq!(PriceRange::new("abc", "xyz").bounds(), (0.0, f64::INFINITY));
        assert_eq!(PriceRange::new("", "0").bounds(), (0.0, 0.0));
    }

    #[test]
    fn test_rating_threshold() {
        let mut state = FilterState::default();
        assert_eq!(state.rating_threshold(), None);
        state.rating = "4".into();
        assert_eq!(state.rating_threshold(), Some(4.0));
        state.rating = "lots".into();
        assert_eq!(state.rating_threshold(), Some(0.0));
    }

    #[test]
    fn test_date_range_parsing() {
        assert_eq!("All".parse::<DateRange>().unwrap(), DateRange::All);
        assert_eq!("3months".parse::<DateRange>().unwrap(), DateRange::ThreeMonths);
        assert_eq!(
            "year".parse::<DateRange>().unwrap(),
            DateRange::Unrecognized("year".into())
        );
        assert_eq!(DateRange::ThreeMonths.to_string(), "3months");
    }

    #[test]
    fn test_date_range_cutoffs() {
        let now = at(2024, 3, 31, 15);
        assert_eq!(DateRange::All.cutoff(now), None);
        assert_eq!(DateRange::Today.cutoff(now), Some(at(2024, 3, 31, 0)));
        assert_eq!(DateRange::Week.cutoff(now), Some(at(2024, 3, 24, 15)));
        // Calendar month subtraction clamps to the end of February
        assert_eq!(DateRange::Month.cutoff(now), Some(at(2024, 2, 29, 15)));
        assert_eq!(DateRange::ThreeMonths.cutoff(now), Some(at(2023, 12, 31, 15)));
        assert_eq!(
            DateRange::Unrecognized("decade".into()).cutoff(now),
            Some(DateTime::<Utc>::MIN_UTC)
        );
    }

    #[test]
    fn test_sort_by_parsing() {
        assert_eq!("price-low".parse::<SortBy>().unwrap(), SortBy::PriceLow);
        assert_eq!(
            "cheapest".parse::<SortBy>().unwrap(),
            SortBy::Unrecognized("cheapest".into())
        );
        for name in SortBy::VARIANTS {
            assert_eq!(name.parse::<SortBy>().unwrap().as_str(), *name);
        }
    }

    #[test]
    fn test_state_serializes_with_wire_names() {
        let state = FilterState {
            date_range: DateRange::ThreeMonths,
            sort_by: SortBy::PriceHigh,
            ..FilterState::default()
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["dateRange"], "3months");
        assert_eq!(json["sortBy"], "price-high");
        assert_eq!(json["priceRange"]["min"], "");

        let back: FilterState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }
}
