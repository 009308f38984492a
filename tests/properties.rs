use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use dating::{DateTimeRange, Range, TimeInstant, ZonedRange};
use proptest::prelude::*;

// Roughly years 1653..2286, well inside chrono's range.
fn instant() -> impl Strategy<Value = DateTime<Utc>> {
    (-10_000_000_000i64..10_000_000_000).prop_map(|secs| DateTime::from_timestamp(secs, 0).unwrap())
}

// Sentinels also show up as concrete bounds, on either side.
fn bound() -> impl Strategy<Value = Option<DateTime<Utc>>> {
    prop_oneof![
        2 => Just(None),
        1 => Just(Some(DateTime::<Utc>::min_value())),
        1 => Just(Some(DateTime::<Utc>::max_value())),
        8 => instant().prop_map(Some),
    ]
}

fn range() -> impl Strategy<Value = DateTimeRange> {
    (bound(), bound()).prop_map(|(start, end)| Range::new(start, end))
}

// Whole-minute offsets, which is what RFC 3339 can write.
fn zoned() -> impl Strategy<Value = DateTime<FixedOffset>> {
    (instant(), -14 * 60..=14 * 60).prop_map(|(utc, minutes)| {
        utc.with_timezone(&FixedOffset::east_opt(minutes * 60).unwrap())
    })
}

fn zoned_range() -> impl Strategy<Value = ZonedRange> {
    let side = || prop_oneof![1 => Just(None), 4 => zoned().prop_map(Some)];
    (side(), side()).prop_map(|(start, end)| Range::new(start, end))
}

proptest! {
    #[test]
    fn unbounded_contains_everything(x in instant()) {
        prop_assert!(DateTimeRange::unbounded().contains(&x));
    }

    #[test]
    fn contains_matches_bounds(r in range(), x in instant()) {
        prop_assert_eq!(r.contains(&x), r.start() <= x && x <= r.end());
        if !r.is_empty() {
            prop_assert!(r.contains(&r.start()));
            prop_assert!(r.contains(&r.end()));
        }
    }

    #[test]
    fn well_defined_iff_no_sentinel((start, end) in (bound(), bound())) {
        let r = Range::new(start, end);
        let concrete_start = start.is_some_and(|s| s != DateTime::<Utc>::min_value());
        let concrete_end = end.is_some_and(|e| e != DateTime::<Utc>::max_value());
        prop_assert_eq!(r.is_well_defined(), concrete_start && concrete_end);
    }

    #[test]
    fn precedes_agrees_with_ord(a in range(), b in range()) {
        prop_assert_eq!(a.precedes(&b), a < b);
        prop_assert_eq!(a.succeeds(&b), a > b);
        prop_assert_eq!(a.equals(&b), a == b);
    }

    #[test]
    fn or_equals_is_componentwise(a in range(), b in range()) {
        prop_assert_eq!(a.precedes_or_equals(&b), a.start() <= b.start() && a.end() <= b.end());
        prop_assert_eq!(a.succeeds_or_equals(&b), b.precedes_or_equals(&a));
    }

    #[test]
    fn display_roundtrips(r in range()) {
        let parsed: DateTimeRange = r.to_string().parse().unwrap();
        prop_assert_eq!(parsed, r);
    }

    #[test]
    fn zoned_display_roundtrips(r in zoned_range()) {
        let text = r.to_string();
        let parsed: ZonedRange = text.parse().unwrap();
        prop_assert_eq!(parsed, r);
        // Equality ignores the offset, the text does not.
        prop_assert_eq!(parsed.to_string(), text);
    }

    #[test]
    fn days_are_one_day_apart(start in instant(), len in 0i64..60) {
        let r = Range::new(Some(start), Some(start + TimeDelta::days(len)));
        let days: Vec<_> = r.days().collect();
        prop_assert_eq!(days.len() as i64, len + 1);
        prop_assert!(days.windows(2).all(|w| w[1].difference(&w[0]) == TimeDelta::days(1)));
        prop_assert!(days.iter().all(|d| r.contains(d)));
    }
}
