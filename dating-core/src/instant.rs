// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Points in time usable as range bounds.
//!
//! [`TimeInstant`] is the only thing [`Range`](crate::Range) knows about
//! time: a totally ordered value with `MIN`/`MAX` sentinels, a calendar-date
//! projection, day-offset addition and ISO-8601 text in both directions.
//! Calendar arithmetic itself is delegated to `chrono`.
//!
//! Four flavors are provided:
//!
//! | Type | Flavor | Parses |
//! |------|--------|--------|
//! | [`NaiveDate`] | pure calendar date | `2017-01-12` |
//! | [`NaiveDateTime`] | wall-clock datetime | `2017-01-12T14:25:10`, `2017-01-12` |
//! | [`DateTime<Utc>`] | UTC datetime | RFC 3339, or naive input taken as UTC |
//! | [`DateTime<FixedOffset>`] | zoned datetime | RFC 3339 keeping its offset |

use crate::error::{Error, Result};
use chrono::{
    DateTime, Datelike, FixedOffset, Months, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat,
    TimeDelta, TimeZone, Utc,
};
use std::fmt;
use std::hash::Hash;

/// First instant of a calendar day.
pub const START_OF_DAY: NaiveTime = match NaiveTime::from_hms_opt(0, 0, 0) {
    Some(t) => t,
    None => panic!("00:00:00 is a valid time of day"),
};

/// Last representable instant of a calendar day (nanosecond resolution).
pub const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999) {
    Some(t) => t,
    None => panic!("23:59:59.999999999 is a valid time of day"),
};

const NAIVE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const NAIVE_DATETIME_SPACED_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

// ═══════════════════════════════════════════════════════════════════════════
// TimeInstant trait
// ═══════════════════════════════════════════════════════════════════════════

/// Trait for types that can bound a [`Range`](crate::Range).
///
/// Unbounded sides of a range are stored as [`min_value`](Self::min_value)
/// and [`max_value`](Self::max_value), so every implementor must make those
/// two sentinels compare below and above every other value.
pub trait TimeInstant: Copy + Ord + Hash + fmt::Debug + Sized {
    /// Human-readable flavor name, used in error messages.
    const KIND: &'static str;

    /// Sentinel standing for "unbounded below".
    fn min_value() -> Self;

    /// Sentinel standing for "unbounded above".
    fn max_value() -> Self;

    /// Calendar date this instant falls on, in its own zone.
    fn calendar_date(&self) -> NaiveDate;

    /// Shift by a whole number of days. `None` when the result is not
    /// representable.
    fn add_days(&self, days: i64) -> Option<Self>;

    /// Signed time elapsed from `earlier` to `self`.
    fn difference(&self, earlier: &Self) -> TimeDelta;

    /// Parse an ISO-8601 string into this flavor.
    fn parse_iso8601(input: &str) -> Result<Self>;

    /// Canonical ISO-8601 text, accepted back by [`parse_iso8601`](Self::parse_iso8601).
    fn to_iso8601(&self) -> String;

    /// `true` when `self` is one of the two sentinels.
    #[inline]
    fn is_sentinel(&self) -> bool {
        *self == Self::min_value() || *self == Self::max_value()
    }
}

/// Instants that know the calendar month they belong to.
pub trait MonthSpan: TimeInstant {
    /// First instant of the month (midnight of day 1) and last instant of its
    /// last day, both in the zone of `self`.
    fn month_span(&self) -> (Self, Self);
}

// ═══════════════════════════════════════════════════════════════════════════
// Helpers
// ═══════════════════════════════════════════════════════════════════════════

#[inline]
fn naive_min() -> NaiveDateTime {
    NaiveDate::MIN.and_time(START_OF_DAY)
}

#[inline]
fn naive_max() -> NaiveDateTime {
    NaiveDate::MAX.and_time(END_OF_DAY)
}

/// Start-of-day of the 1st and end-of-day of the last day of `date`'s month.
fn month_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let first = date.with_day(1).unwrap_or(date);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    (first.and_time(START_OF_DAY), last.and_time(END_OF_DAY))
}

fn parse_naive(input: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input, NAIVE_DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(input, NAIVE_DATETIME_SPACED_FORMAT))
        .ok()
        .or_else(|| {
            input
                .parse::<NaiveDate>()
                .ok()
                .map(|date| date.and_time(START_OF_DAY))
        })
}

/// Offset-carrying input keeps its offset, naive input is taken as UTC.
fn parse_zoned(input: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(input)
        .ok()
        .or_else(|| input.parse::<DateTime<FixedOffset>>().ok())
        .or_else(|| parse_naive(input).map(|naive| naive.and_utc().fixed_offset()))
}

#[inline]
fn shift(days: i64) -> Option<TimeDelta> {
    TimeDelta::try_days(days)
}

// ═══════════════════════════════════════════════════════════════════════════
// Flavors
// ═══════════════════════════════════════════════════════════════════════════

impl TimeInstant for NaiveDate {
    const KIND: &'static str = "date";

    fn min_value() -> Self {
        NaiveDate::MIN
    }

    fn max_value() -> Self {
        NaiveDate::MAX
    }

    fn calendar_date(&self) -> NaiveDate {
        *self
    }

    fn add_days(&self, days: i64) -> Option<Self> {
        self.checked_add_signed(shift(days)?)
    }

    fn difference(&self, earlier: &Self) -> TimeDelta {
        self.signed_duration_since(*earlier)
    }

    fn parse_iso8601(input: &str) -> Result<Self> {
        input
            .parse::<NaiveDate>()
            .map_err(|_| Error::parse(input, Self::KIND))
    }

    fn to_iso8601(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }
}

impl TimeInstant for NaiveDateTime {
    const KIND: &'static str = "datetime";

    fn min_value() -> Self {
        naive_min()
    }

    fn max_value() -> Self {
        naive_max()
    }

    fn calendar_date(&self) -> NaiveDate {
        NaiveDateTime::date(self)
    }

    fn add_days(&self, days: i64) -> Option<Self> {
        self.checked_add_signed(shift(days)?)
    }

    fn difference(&self, earlier: &Self) -> TimeDelta {
        self.signed_duration_since(*earlier)
    }

    fn parse_iso8601(input: &str) -> Result<Self> {
        parse_naive(input).ok_or_else(|| Error::parse(input, Self::KIND))
    }

    fn to_iso8601(&self) -> String {
        self.format(NAIVE_DATETIME_FORMAT).to_string()
    }
}

impl MonthSpan for NaiveDateTime {
    fn month_span(&self) -> (Self, Self) {
        month_bounds(NaiveDateTime::date(self))
    }
}

impl TimeInstant for DateTime<Utc> {
    const KIND: &'static str = "UTC datetime";

    fn min_value() -> Self {
        naive_min().and_utc()
    }

    fn max_value() -> Self {
        naive_max().and_utc()
    }

    fn calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }

    fn add_days(&self, days: i64) -> Option<Self> {
        self.checked_add_signed(shift(days)?)
    }

    fn difference(&self, earlier: &Self) -> TimeDelta {
        self.signed_duration_since(*earlier)
    }

    fn parse_iso8601(input: &str) -> Result<Self> {
        parse_zoned(input)
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| Error::parse(input, Self::KIND))
    }

    fn to_iso8601(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

impl MonthSpan for DateTime<Utc> {
    fn month_span(&self) -> (Self, Self) {
        let (first, last) = month_bounds(self.date_naive());
        (first.and_utc(), last.and_utc())
    }
}

impl TimeInstant for DateTime<FixedOffset> {
    const KIND: &'static str = "zoned datetime";

    fn min_value() -> Self {
        naive_min().and_utc().fixed_offset()
    }

    fn max_value() -> Self {
        naive_max().and_utc().fixed_offset()
    }

    fn calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }

    fn add_days(&self, days: i64) -> Option<Self> {
        self.checked_add_signed(shift(days)?)
    }

    fn difference(&self, earlier: &Self) -> TimeDelta {
        self.signed_duration_since(*earlier)
    }

    fn parse_iso8601(input: &str) -> Result<Self> {
        parse_zoned(input).ok_or_else(|| Error::parse(input, Self::KIND))
    }

    fn to_iso8601(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::AutoSi, false)
    }
}

impl MonthSpan for DateTime<FixedOffset> {
    fn month_span(&self) -> (Self, Self) {
        let offset = *self.offset();
        let (first, last) = month_bounds(self.date_naive());
        // Local month bounds close to the representable limits may fall
        // outside the UTC range once the offset is applied.
        let start = offset.from_local_datetime(&first).single().unwrap_or_else(|| {
            tracing::warn!(%first, %offset, "month start not representable, using sentinel");
            Self::min_value()
        });
        let end = offset.from_local_datetime(&last).single().unwrap_or_else(|| {
            tracing::warn!(%last, %offset, "month end not representable, using sentinel");
            Self::max_value()
        });
        (start, end)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sentinels_bracket_everything() {
        let instant = date(2017, 2, 14).and_hms_opt(15, 30, 0).unwrap();
        assert!(NaiveDateTime::min_value() < instant);
        assert!(NaiveDateTime::max_value() > instant);
        assert!(DateTime::<Utc>::min_value() < instant.and_utc());
        assert!(DateTime::<Utc>::max_value() > instant.and_utc());
        assert!(NaiveDate::min_value() < instant.date());
        assert!(NaiveDate::max_value() > instant.date());
    }

    #[test]
    fn test_sentinels_match_day_boundaries() {
        assert_eq!(NaiveDateTime::min_value().time(), START_OF_DAY);
        assert_eq!(NaiveDateTime::max_value().time(), END_OF_DAY);
        assert_eq!(NaiveDateTime::max_value().date(), NaiveDate::MAX);
        assert!(NaiveDateTime::max_value().is_sentinel());
        assert!(!date(2017, 1, 1).and_time(START_OF_DAY).is_sentinel());
    }

    #[test]
    fn test_parse_naive_datetime() {
        let parsed = NaiveDateTime::parse_iso8601("2017-01-12T14:25:10").unwrap();
        assert_eq!(parsed, date(2017, 1, 12).and_hms_opt(14, 25, 10).unwrap());

        let spaced = NaiveDateTime::parse_iso8601("2017-01-12 14:25:10.5").unwrap();
        assert_eq!(
            spaced,
            date(2017, 1, 12).and_hms_milli_opt(14, 25, 10, 500).unwrap()
        );

        let bare = NaiveDateTime::parse_iso8601("2017-01-12").unwrap();
        assert_eq!(bare, date(2017, 1, 12).and_time(START_OF_DAY));
    }

    #[test]
    fn test_parse_utc_defaults_zone() {
        let parsed = DateTime::<Utc>::parse_iso8601("2017-01-12T14:25:10").unwrap();
        assert_eq!(
            parsed,
            Utc.with_ymd_and_hms(2017, 1, 12, 14, 25, 10).unwrap()
        );
    }

    #[test]
    fn test_parse_utc_converts_offsets() {
        let parsed = DateTime::<Utc>::parse_iso8601("2017-01-12T14:25:10+02:00").unwrap();
        assert_eq!(
            parsed,
            Utc.with_ymd_and_hms(2017, 1, 12, 12, 25, 10).unwrap()
        );
    }

    #[test]
    fn test_parse_zoned_keeps_offset() {
        let parsed = DateTime::<FixedOffset>::parse_iso8601("2017-01-12T14:25:10+02:00").unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(parsed.to_iso8601(), "2017-01-12T14:25:10+02:00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = DateTime::<Utc>::parse_iso8601("not a date").unwrap_err();
        assert_eq!(
            err,
            Error::Parse {
                input: "not a date".into(),
                expected: "UTC datetime"
            }
        );
        assert!(NaiveDate::parse_iso8601("2017-02-30").is_err());
        assert!(NaiveDateTime::parse_iso8601("2017-01-12T25:00:00").is_err());
    }

    #[test]
    fn test_iso8601_roundtrip_text() {
        let utc = Utc.with_ymd_and_hms(2017, 1, 12, 14, 25, 10).unwrap();
        assert_eq!(utc.to_iso8601(), "2017-01-12T14:25:10Z");
        assert_eq!(DateTime::<Utc>::parse_iso8601(&utc.to_iso8601()).unwrap(), utc);

        let naive = date(2017, 1, 12).and_hms_nano_opt(0, 0, 0, 250_000_000).unwrap();
        assert_eq!(naive.to_iso8601(), "2017-01-12T00:00:00.250");
        assert_eq!(NaiveDateTime::parse_iso8601(&naive.to_iso8601()).unwrap(), naive);

        assert_eq!(date(2017, 1, 12).to_iso8601(), "2017-01-12");
    }

    #[test]
    fn test_add_days_overflow() {
        assert_eq!(
            date(2017, 2, 28).add_days(1),
            Some(date(2017, 3, 1))
        );
        assert_eq!(NaiveDate::max_value().add_days(1), None);
        assert_eq!(NaiveDateTime::max_value().add_days(1), None);
        assert_eq!(DateTime::<Utc>::max_value().add_days(1), None);
    }

    #[test]
    fn test_month_span_non_leap_february() {
        let instant = Utc.with_ymd_and_hms(2017, 2, 14, 15, 30, 0).unwrap();
        let (start, end) = instant.month_span();
        assert_eq!(start, Utc.with_ymd_and_hms(2017, 2, 1, 0, 0, 0).unwrap());
        assert_eq!(end, date(2017, 2, 28).and_time(END_OF_DAY).and_utc());
    }

    #[test]
    fn test_month_span_leap_february() {
        let instant = date(2020, 2, 3).and_hms_opt(8, 0, 0).unwrap();
        let (start, end) = instant.month_span();
        assert_eq!(start, date(2020, 2, 1).and_time(START_OF_DAY));
        assert_eq!(end, date(2020, 2, 29).and_time(END_OF_DAY));
    }

    #[test]
    fn test_month_span_december_rolls_year() {
        let instant = date(2016, 12, 31).and_hms_opt(23, 0, 0).unwrap();
        let (start, end) = instant.month_span();
        assert_eq!(start.date(), date(2016, 12, 1));
        assert_eq!(end.date(), date(2016, 12, 31));
    }

    #[test]
    fn test_month_span_preserves_offset() {
        let tz = FixedOffset::east_opt(5 * 3600).unwrap();
        // 2017-03-01 01:00 at +05:00 is still February in UTC.
        let instant = tz.with_ymd_and_hms(2017, 3, 1, 1, 0, 0).unwrap();
        let (start, end) = instant.month_span();
        assert_eq!(start, tz.with_ymd_and_hms(2017, 3, 1, 0, 0, 0).unwrap());
        assert_eq!(end.offset(), &tz);
        assert_eq!(end.date_naive(), date(2017, 3, 31));
        assert_eq!(end.time(), END_OF_DAY);
    }

    #[test]
    fn test_difference() {
        let a = date(2017, 1, 1);
        let b = date(2017, 1, 16);
        assert_eq!(b.difference(&a), TimeDelta::days(15));
    }
}
