// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Date Ranges
//!
//! This crate is a façade over `dating-core` and re-exports its public API.
//!
//! # Core types
//!
//! - [`Range<T>`] — inclusive `[start, end]` interval over any [`TimeInstant`].
//! - [`TimeInstant`] — trait for points in time usable as range bounds.
//! - [`DateRange`] — whole-day range built from calendar dates.
//! - [`DayCursor`] — independent day-by-day cursor returned by [`Range::days`].
//! - [`DateTimeRange`] — alias for `Range<DateTime<Utc>>`.
//! - [`ZonedRange`] — alias for `Range<DateTime<FixedOffset>>`.
//!
//! # Instant flavors
//!
//! | Type | Flavor |
//! |------|--------|
//! | `NaiveDate` | calendar date |
//! | `NaiveDateTime` | wall-clock datetime |
//! | `DateTime<Utc>` | UTC datetime |
//! | `DateTime<FixedOffset>` | datetime with a fixed UTC offset |
//!
//! # Example
//!
//! ```
//! use dating::DateTimeRange;
//!
//! let cycle = DateTimeRange::from_strings(Some("2017-01-12"), Some("2017-01-14"))?;
//! assert_eq!(cycle.days().count(), 3);
//! assert_eq!(cycle.to_string(), "(2017-01-12T00:00:00Z - 2017-01-14T00:00:00Z)");
//! # Ok::<(), dating::Error>(())
//! ```

pub use dating_core::{
    DateRange, DateTimeRange, Dates, DayCursor, Error, MonthSpan, Range, Result, TimeInstant,
    ZonedRange, BOUND_SEPARATOR, END_OF_DAY, MAX_TOKEN, MIN_TOKEN, ONE_DAY, START_OF_DAY,
};
