// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day-by-day iteration over a range.
//!
//! A [`DayCursor`] owns a copy of the next instant to yield, the inclusive
//! end and the step. It never points back into the [`Range`](crate::Range)
//! that created it, so any number of cursors can walk the same range at once.

use crate::instant::TimeInstant;
use std::iter::FusedIterator;

/// Step between consecutive items, in days.
pub const ONE_DAY: i64 = 1;

/// Lazy sequence of instants one calendar day apart.
///
/// Yields `start`, `start + 1 day`, … while the value is `<= end`. When `end`
/// is the upper sentinel the sequence only stops once the next day is no
/// longer representable, so callers are expected to bound it (`take`,
/// `take_while`, …).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCursor<T: TimeInstant> {
    next: Option<T>,
    end: T,
    step_days: i64,
}

impl<T: TimeInstant> DayCursor<T> {
    pub(crate) fn new(start: T, end: T) -> Self {
        DayCursor {
            next: Some(start),
            end,
            step_days: ONE_DAY,
        }
    }

    /// The instant the next call to [`Iterator::next`] would yield, if any.
    pub fn peek(&self) -> Option<T> {
        self.next.filter(|next| *next <= self.end)
    }
}

impl<T: TimeInstant> Iterator for DayCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = match self.peek() {
            Some(current) => current,
            None => {
                self.next = None;
                return None;
            }
        };
        self.next = current.add_days(self.step_days);
        if self.next.is_none() {
            tracing::trace!(last = ?current, "day cursor reached the end of the representable range");
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.peek() {
            None => (0, Some(0)),
            Some(_) if self.end.is_sentinel() => (1, None),
            Some(next) => {
                let days = self.end.difference(&next).num_days();
                let remaining = usize::try_from(days / self.step_days).ok().map(|n| n + 1);
                (remaining.unwrap_or(1), remaining)
            }
        }
    }
}

impl<T: TimeInstant> FusedIterator for DayCursor<T> {}
