// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar-date ranges.
//!
//! [`DateRange`] stores a [`Range<NaiveDateTime>`] whose start is midnight of
//! the first date and whose end is the last instant of the last date. All
//! queries go through that range; only construction and formatting speak in
//! dates.

use crate::cursor::DayCursor;
use crate::error::{Error, Result};
use crate::instant::{MonthSpan, TimeInstant, END_OF_DAY, START_OF_DAY};
use crate::range::{bound_text, split_display, Range, BOUND_SEPARATOR};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Inclusive range of whole calendar days.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use dating_core::DateRange;
///
/// let feb = DateRange::month_containing(NaiveDate::from_ymd_opt(2017, 2, 14).unwrap());
/// assert_eq!(feb.to_string(), "(2017-02-01 - 2017-02-28)");
/// assert_eq!(feb.days().count(), 28);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DateRange {
    range: Range<NaiveDateTime>,
}

impl DateRange {
    /// Creates a range from `start` 00:00:00 to `end` 23:59:59.999999999.
    /// A missing date stands for `NaiveDate::MIN` / `NaiveDate::MAX`.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        let start = start.unwrap_or(NaiveDate::MIN).and_time(START_OF_DAY);
        let end = end.unwrap_or(NaiveDate::MAX).and_time(END_OF_DAY);
        DateRange {
            range: Range::new(Some(start), Some(end)),
        }
    }

    /// Like [`DateRange::new`], but rejects a start date after the end date.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRange`] if `start > end`.
    pub fn new_checked(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self> {
        let range = Self::new(start, end);
        if range.is_empty() {
            tracing::debug!(start = ?start, end = ?end, "rejected inverted date range");
            return Err(Error::InvalidRange {
                start: range.start_date().to_iso8601(),
                end: range.end_date().to_iso8601(),
            });
        }
        Ok(range)
    }

    /// Parses `YYYY-MM-DD` bounds; `None` or blank means unbounded.
    ///
    /// # Errors
    /// Returns [`Error::Parse`] if a non-empty bound is not an ISO-8601 date.
    pub fn from_strings(start: Option<&str>, end: Option<&str>) -> Result<Self> {
        let dates = Range::<NaiveDate>::from_strings(start, end)?;
        Ok(Self::new(Some(dates.start()), Some(dates.end())))
    }

    /// Every day of the month `date` falls in.
    pub fn month_containing(date: NaiveDate) -> Self {
        let (first, last) = date.and_time(START_OF_DAY).month_span();
        Self::new(Some(first.date()), Some(last.date()))
    }

    /// The underlying datetime range.
    pub fn as_range(&self) -> &Range<NaiveDateTime> {
        &self.range
    }

    pub fn start(&self) -> NaiveDateTime {
        self.range.start()
    }

    pub fn end(&self) -> NaiveDateTime {
        self.range.end()
    }

    pub fn start_date(&self) -> NaiveDate {
        self.range.start_date()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.range.end_date()
    }

    pub fn is_well_defined(&self) -> bool {
        self.range.is_well_defined()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// `true` iff `date` is one of the days of the range.
    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.range.contains(&date.and_time(START_OF_DAY))
    }

    pub fn contains_datetime(&self, instant: &NaiveDateTime) -> bool {
        self.range.contains(instant)
    }

    /// Number of days covered, `None` when unbounded.
    pub fn len_days(&self) -> Option<i64> {
        if self.is_empty() {
            return self.is_well_defined().then_some(0);
        }
        self.range
            .duration()
            .map(|duration| duration.num_days() + 1)
    }

    /// A fresh cursor over the dates of the range.
    pub fn days(&self) -> Dates {
        Dates {
            inner: self.range.days(),
        }
    }

    pub fn equals(&self, other: &Self) -> bool {
        self.range.equals(&other.range)
    }

    pub fn precedes(&self, other: &Self) -> bool {
        self.range.precedes(&other.range)
    }

    pub fn precedes_or_equals(&self, other: &Self) -> bool {
        self.range.precedes_or_equals(&other.range)
    }

    pub fn succeeds(&self, other: &Self) -> bool {
        self.range.succeeds(&other.range)
    }

    pub fn succeeds_or_equals(&self, other: &Self) -> bool {
        self.range.succeeds_or_equals(&other.range)
    }
}

impl From<DateRange> for Range<NaiveDateTime> {
    fn from(dates: DateRange) -> Self {
        dates.range
    }
}

/// Dates of a [`DateRange`], one per day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dates {
    inner: DayCursor<NaiveDateTime>,
}

impl Iterator for Dates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        self.inner.next().map(|instant| instant.date())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl FusedIterator for Dates {}

impl<'a> IntoIterator for &'a DateRange {
    type Item = NaiveDate;
    type IntoIter = Dates;

    fn into_iter(self) -> Self::IntoIter {
        self.days()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}{}{})",
            bound_text(&self.start_date(), NaiveDate::MIN),
            BOUND_SEPARATOR,
            bound_text(&self.end_date(), NaiveDate::MAX)
        )
    }
}

impl FromStr for DateRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (start, end) = split_display(s).ok_or_else(|| {
            tracing::debug!(input = s, "rejected date range display string");
            Error::parse(s, "range")
        })?;
        Self::from_strings(Some(start), Some(end))
    }
}

#[cfg(feature = "serde")]
impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
