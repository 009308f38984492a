// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Date Ranges
//!
//! Value types for periods of calendar time: validity windows, billing
//! cycles, reporting months.
//!
//! # Core types
//!
//! - [`Range<T>`] — inclusive `[start, end]` interval over any [`TimeInstant`].
//! - [`TimeInstant`] — trait for points in time usable as range bounds.
//! - [`MonthSpan`] — instants that can produce their calendar month.
//! - [`DateRange`] — whole-day range built from calendar dates.
//! - [`DayCursor`] — independent day-by-day cursor returned by [`Range::days`].
//! - [`DateTimeRange`] — alias for `Range<DateTime<Utc>>`.
//! - [`ZonedRange`] — alias for `Range<DateTime<FixedOffset>>`.
//!
//! # Open bounds
//!
//! A missing bound is stored as the flavor's `MIN`/`MAX` sentinel, which
//! keeps `contains` and the comparisons branch-free. In the text form
//! `"(start - end)"` a sentinel bound is written as the empty string, and
//! [`Range::from_strings`] reads an empty bound back as the sentinel. An
//! inverted range holding a sentinel on the "wrong" side writes it as
//! [`MIN_TOKEN`] / [`MAX_TOKEN`] so the text still parses back unchanged.
//!
//! # Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `serde` | (De)serialize ranges as their text form |

mod cursor;
mod date_range;
mod error;
pub(crate) mod instant;
mod range;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use cursor::{DayCursor, ONE_DAY};
pub use date_range::{DateRange, Dates};
pub use error::{Error, Result};
pub use instant::{MonthSpan, TimeInstant, END_OF_DAY, START_OF_DAY};
pub use range::{DateTimeRange, Range, ZonedRange, BOUND_SEPARATOR, MAX_TOKEN, MIN_TOKEN};
