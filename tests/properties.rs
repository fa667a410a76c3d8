use std::io::Cursor;

use chrono::NaiveDate;
use plain_types::{Date, DateTime, filetype, validators::is_valid_slug};
use proptest::collection::vec;
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = Date> {
    // 0001-01-01 ..= 9999-12-31 as days from the common era
    (1i32..=3_652_059).prop_map(|days| Date::from(NaiveDate::from_num_days_from_ce_opt(days).unwrap()))
}

proptest! {
    #[test]
    fn year_month_gets_day_one(year in 0i32..=9999, month in 1u32..=12) {
        let d = Date::parse(&format!("{year:04}-{month:02}"))?;
        prop_assert_eq!((d.year(), d.month(), d.day()), (year, month, 1));
    }

    #[test]
    fn canonical_text_round_trips(d in any_date()) {
        let text = d.to_string();
        let reparsed = Date::parse(&text)?;
        prop_assert_eq!(reparsed, d);
        prop_assert_eq!(reparsed.to_string(), text);
    }

    #[test]
    fn comparisons_are_exclusive(a in any_date(), b in any_date()) {
        let flags = [a.equal(&b), a.is_before(&b), a.is_after(&b)];
        prop_assert_eq!(flags.iter().filter(|f| **f).count(), 1);
        prop_assert_eq!(a.is_before(&b), b.is_after(&a));
        prop_assert_eq!(a.is_before(&b), a < b);
    }

    #[test]
    fn datetime_text_round_trips(secs in 0i64..4_102_444_800, offset_minutes in -720i32..=840) {
        let offset = chrono::FixedOffset::east_opt(offset_minutes * 60).unwrap();
        let instant = chrono::DateTime::from_timestamp(secs, 0).unwrap().with_timezone(&offset);
        let dt = DateTime::from(instant);
        let reparsed = DateTime::parse(&dt.to_string())?;
        prop_assert!(reparsed.equal(&dt));
    }

    #[test]
    fn generated_slugs_are_valid(slug in "[a-z0-9]{1,8}(-[a-z0-9]{1,8}){0,3}") {
        prop_assert!(is_valid_slug(&slug));
        let leading_dash = format!("-{slug}");
        prop_assert!(!is_valid_slug(&leading_dash));
    }

    #[test]
    fn sniffing_restores_position(data in vec(any::<u8>(), 0..2048), cut in any::<prop::sample::Index>()) {
        let start = cut.index(data.len() + 1) as u64;
        let mut stream = Cursor::new(data);
        stream.set_position(start);

        filetype::mime_type(&mut stream)?;
        prop_assert_eq!(stream.position(), start);
        filetype::sha256_sum(&mut stream)?;
        prop_assert_eq!(stream.position(), start);
    }
}
