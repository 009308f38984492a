// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Inclusive range between two instants.
//!
//! This module provides:
//! - [`Range<T>`]: generic `[start, end]` interval over any [`TimeInstant`]
//! - [`DateTimeRange`] and [`ZonedRange`]: aliases for the datetime flavors

use crate::cursor::DayCursor;
use crate::error::{Error, Result};
use crate::instant::{MonthSpan, TimeInstant};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Separator between the two bounds in the display form.
pub const BOUND_SEPARATOR: &str = " - ";

/// Text for the lower sentinel when it sits in the end slot.
pub const MIN_TOKEN: &str = "-inf";

/// Text for the upper sentinel when it sits in the start slot.
pub const MAX_TOKEN: &str = "+inf";

/// Represents the inclusive interval `[start, end]` between two instants.
///
/// Unbounded sides are stored as the flavor's sentinels
/// ([`TimeInstant::min_value`] / [`TimeInstant::max_value`]), never as
/// `Option`, so membership and ordering need no special cases. A range is
/// immutable once built.
///
/// `start > end` is accepted by [`Range::new`]: such a range contains
/// nothing and yields no days, but still compares and sorts normally. Use
/// [`Range::new_checked`] to reject it instead.
///
/// The derived `Ord` is lexicographic on `(start, end)`, which is what
/// sorting uses. The named comparisons ([`precedes`](Self::precedes),
/// [`precedes_or_equals`](Self::precedes_or_equals), …) are described on
/// each method; note that the `_or_equals` variants are componentwise.
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, Utc};
/// use dating_core::Range;
///
/// let q1 = Range::<DateTime<Utc>>::from_strings(Some("2017-01-01"), Some("2017-03-31T23:59:59"))?;
/// let valentines: DateTime<Utc> = "2017-02-14T15:30:00Z".parse().unwrap();
///
/// assert!(q1.contains(&valentines));
/// assert!(q1.is_well_defined());
/// assert_eq!(q1.to_string(), "(2017-01-01T00:00:00Z - 2017-03-31T23:59:59Z)");
/// # Ok::<(), dating_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Range<T: TimeInstant> {
    start: T,
    end: T,
}

/// UTC datetime range.
pub type DateTimeRange = Range<DateTime<Utc>>;

/// Datetime range whose bounds carry a fixed UTC offset.
pub type ZonedRange = Range<DateTime<FixedOffset>>;

// ═══════════════════════════════════════════════════════════════════════════
// Construction
// ═══════════════════════════════════════════════════════════════════════════

impl<T: TimeInstant> Range<T> {
    /// Creates a range; a missing bound becomes the matching sentinel.
    pub fn new(start: Option<T>, end: Option<T>) -> Self {
        Range {
            start: start.unwrap_or_else(T::min_value),
            end: end.unwrap_or_else(T::max_value),
        }
    }

    /// Like [`Range::new`], but rejects `start > end`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRange`] if the start is after the end.
    pub fn new_checked(start: Option<T>, end: Option<T>) -> Result<Self> {
        let range = Self::new(start, end);
        if range.is_empty() {
            tracing::debug!(start = ?range.start, end = ?range.end, "rejected inverted range");
            return Err(Error::InvalidRange {
                start: range.start.to_iso8601(),
                end: range.end.to_iso8601(),
            });
        }
        Ok(range)
    }

    /// The range containing every instant.
    pub fn unbounded() -> Self {
        Self::new(None, None)
    }

    /// Parses both bounds as ISO-8601. `None`, empty or blank input gives
    /// the sentinel for that side; [`MIN_TOKEN`] and [`MAX_TOKEN`] give the
    /// lower and upper sentinel on either side.
    ///
    /// # Errors
    /// Returns [`Error::Parse`] if a non-empty bound is not valid ISO-8601
    /// for `T`.
    pub fn from_strings(start: Option<&str>, end: Option<&str>) -> Result<Self> {
        Ok(Self::new(parse_bound(start)?, parse_bound(end)?))
    }

    /// Converts both bounds to another flavor. Sentinels map to the target's
    /// sentinels, so open sides stay open.
    pub fn map<U, F>(&self, f: F) -> Range<U>
    where
        U: TimeInstant,
        F: Fn(T) -> U,
    {
        let start = (self.start != T::min_value()).then(|| f(self.start));
        let end = (self.end != T::max_value()).then(|| f(self.end));
        Range::new(start, end)
    }
}

pub(crate) fn parse_bound<T: TimeInstant>(input: Option<&str>) -> Result<Option<T>> {
    match input.map(str::trim) {
        None | Some("") => Ok(None),
        Some(MIN_TOKEN) => Ok(Some(T::min_value())),
        Some(MAX_TOKEN) => Ok(Some(T::max_value())),
        Some(text) => T::parse_iso8601(text).map(Some).inspect_err(|_| {
            tracing::debug!(input = text, kind = T::KIND, "rejected ISO-8601 bound");
        }),
    }
}

impl<T: MonthSpan> Range<T> {
    /// The calendar month containing `instant`, from midnight of the 1st to
    /// the end of its last day, in the zone of `instant`.
    pub fn month_containing(instant: T) -> Self {
        let (start, end) = instant.month_span();
        Range { start, end }
    }
}

impl Range<DateTime<Utc>> {
    /// Builds a UTC range from wall-clock datetimes taken as UTC.
    pub fn from_naive(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Self {
        Self::new(start.map(|s| s.and_utc()), end.map(|e| e.and_utc()))
    }
}

impl Range<DateTime<FixedOffset>> {
    /// The same interval expressed in UTC.
    pub fn to_utc(&self) -> DateTimeRange {
        self.map(|instant| instant.with_timezone(&Utc))
    }
}

impl<T: TimeInstant> Default for Range<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Queries
// ═══════════════════════════════════════════════════════════════════════════

impl<T: TimeInstant> Range<T> {
    /// Inclusive lower bound (the sentinel when unbounded below).
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// Inclusive upper bound (the sentinel when unbounded above).
    #[inline]
    pub fn end(&self) -> T {
        self.end
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start.calendar_date()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end.calendar_date()
    }

    /// `true` iff both bounds are concrete.
    pub fn is_well_defined(&self) -> bool {
        self.start > T::min_value() && self.end < T::max_value()
    }

    /// `true` iff the range was built with its start after its end.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// `start <= instant <= end`.
    pub fn contains(&self, instant: &T) -> bool {
        self.start <= *instant && *instant <= self.end
    }

    /// `end - start`, or `None` when a side is unbounded.
    pub fn duration(&self) -> Option<TimeDelta> {
        self.is_well_defined()
            .then(|| self.end.difference(&self.start))
    }

    /// A fresh cursor over the days of the range, starting at `start`.
    ///
    /// Every call starts over; the range itself holds no iteration state.
    pub fn days(&self) -> DayCursor<T> {
        DayCursor::new(self.start, self.end)
    }
}

impl<'a, T: TimeInstant> IntoIterator for &'a Range<T> {
    type Item = T;
    type IntoIter = DayCursor<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.days()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Comparisons
// ═══════════════════════════════════════════════════════════════════════════

impl<T: TimeInstant> Range<T> {
    /// Same start and same end.
    pub fn equals(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }

    /// Lexicographic `<` on `(start, end)`.
    pub fn precedes(&self, other: &Self) -> bool {
        self.start < other.start || (self.start == other.start && self.end < other.end)
    }

    /// Componentwise: `start <= other.start` and `end <= other.end`.
    ///
    /// This is not `precedes || equals`: `[t0, t9]` precedes `[t1, t5]`
    /// while neither `precedes_or_equals` the other.
    pub fn precedes_or_equals(&self, other: &Self) -> bool {
        self.start <= other.start && self.end <= other.end
    }

    /// Lexicographic `>` on `(start, end)`.
    pub fn succeeds(&self, other: &Self) -> bool {
        self.start > other.start || (self.start == other.start && self.end > other.end)
    }

    /// Componentwise: `start >= other.start` and `end >= other.end`.
    pub fn succeeds_or_equals(&self, other: &Self) -> bool {
        self.start >= other.start && self.end >= other.end
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Text form
// ═══════════════════════════════════════════════════════════════════════════

/// Renders a bound for display. `open` is the sentinel meaning "unbounded"
/// on this side and is left empty; the other sentinel gets its token.
pub(crate) fn bound_text<T: TimeInstant>(bound: &T, open: T) -> String {
    if *bound == open {
        String::new()
    } else if *bound == T::min_value() {
        MIN_TOKEN.to_owned()
    } else if *bound == T::max_value() {
        MAX_TOKEN.to_owned()
    } else {
        bound.to_iso8601()
    }
}

/// Splits `"(start - end)"` into its two bound texts.
pub(crate) fn split_display(input: &str) -> Option<(&str, &str)> {
    input
        .trim()
        .strip_prefix('(')?
        .strip_suffix(')')?
        .split_once(BOUND_SEPARATOR)
}

/// `(start - end)`, each bound as ISO-8601. An open side is left empty; a
/// sentinel on the opposite side is written as [`MIN_TOKEN`] or [`MAX_TOKEN`].
impl<T: TimeInstant> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}{}{})",
            bound_text(&self.start, T::min_value()),
            BOUND_SEPARATOR,
            bound_text(&self.end, T::max_value())
        )
    }
}

impl<T: TimeInstant> FromStr for Range<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (start, end) = split_display(s).ok_or_else(|| {
            tracing::debug!(input = s, "rejected range display string");
            Error::parse(s, "range")
        })?;
        Self::from_strings(Some(start), Some(end))
    }
}

#[cfg(feature = "serde")]
impl<T: TimeInstant> Serialize for Range<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: TimeInstant> Deserialize<'de> for Range<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
