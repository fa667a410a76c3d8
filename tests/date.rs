use chrono::{TimeZone, Utc};
use plain_types::{
    Date, TypesError,
    sql::{FromSqlValue, SqlValue, ToSqlValue},
};
use serde::{Deserialize, Serialize};

fn date(s: &str) -> Date {
    Date::parse(s).unwrap()
}

#[test]
fn today_matches_utc_clock() {
    let today = Date::today();
    let now = Utc::now().date_naive();
    // Tolerate a midnight rollover between the two clock reads
    assert!(today.as_naive_date() == now || today.as_naive_date().succ_opt() == Some(now));
}

#[test]
fn parses_full_date() {
    let d = date("2017-09-08");
    assert_eq!((d.year(), d.month(), d.day()), (2017, 9, 8));
}

#[test]
fn parses_year_month_as_first_day() {
    let d = date("2013-01");
    assert_eq!((d.year(), d.month(), d.day()), (2013, 1, 1));
}

#[test]
fn rejects_other_shapes() {
    for input in ["03-25-1989", "", "2013-01-32", "2013", "2013-1-1", "2013-01-01T00:00:00"] {
        let err = Date::parse(input).unwrap_err();
        assert!(err.is_format_error(), "{input:?} gave {err:?}");
    }
}

#[test]
fn from_str_shares_parse_rules() {
    let d: Date = "2013-01".parse().unwrap();
    assert_eq!(d, date("2013-01-01"));
    assert!("nothing".parse::<Date>().is_err());
}

#[test]
fn display_round_trips_canonical_input() {
    for input in ["2017-09-07", "1999-12-31", "0001-01-01", "2024-02-29"] {
        assert_eq!(date(input).to_string(), input);
    }
}

#[test]
fn equal_ignores_short_form() {
    assert!(date("2017-09").equal(&date("2017-09-01")));
    assert!(!date("2016-09-01").equal(&date("2017-09-01")));
    assert!(!date("2017-09-01").equal(&date("2017-10-01")));
    assert!(!date("2017-09-02").equal(&date("2017-09-01")));
}

#[test]
fn is_before_compares_year_month_day() {
    assert!(date("2011-01-01").is_before(&date("2017-09-09")));
    assert!(!date("2017-09-08").is_before(&date("2017-08-08")));
    assert!(!date("2017-09-09").is_before(&date("2017-09-08")));
    assert!(!date("2017-09-09").is_before(&date("2017-09-09")));
}

#[test]
fn is_after_compares_year_month_day() {
    assert!(!date("2011-01-01").is_after(&date("2017-09-09")));
    assert!(date("2017-09-08").is_after(&date("2017-08-08")));
    assert!(date("2017-09-09").is_after(&date("2017-09-08")));
    assert!(!date("2017-09-09").is_after(&date("2017-09-09")));
}

#[derive(Serialize, Deserialize)]
struct Payload {
    date: Date,
}

#[test]
fn serializes_as_quoted_date() {
    let d = date("2017-09-07");
    assert_eq!(serde_json::to_string(&d).unwrap(), r#""2017-09-07""#);
    let out = serde_json::to_string(&Payload { date: d }).unwrap();
    assert_eq!(out, r#"{"date":"2017-09-07"}"#);
}

#[test]
fn deserializes_from_json() {
    let d: Date = serde_json::from_str(r#""2017-09-09""#).unwrap();
    assert_eq!(d, date("2017-09-09"));

    let pld: Payload = serde_json::from_str(r#"{"date":"2017-09-08"}"#).unwrap();
    assert_eq!((pld.date.year(), pld.date.month(), pld.date.day()), (2017, 9, 8));
}

#[test]
fn deserializes_null_to_zero() {
    let d: Date = serde_json::from_str("null").unwrap();
    assert!(d.is_zero());
    assert_eq!(d, Date::default());
}

#[test]
fn rejects_malformed_json() {
    assert!(serde_json::from_str::<Date>(r#""09/09/2017""#).is_err());
    assert!(serde_json::from_str::<Date>("20170909").is_err());
    assert!(serde_json::from_str::<Date>(r#""2017-09""#).is_err());
}

#[test]
fn sql_value_is_text() {
    let d = date("2017-09-09");
    assert_eq!(d.to_sql_value(), SqlValue::Text("2017-09-09".to_string()));
}

#[test]
fn reads_native_timestamp() {
    let ts = Utc.with_ymd_and_hms(2017, 9, 9, 22, 15, 0).unwrap();
    let d = Date::from_sql_value(SqlValue::Timestamp(ts)).unwrap();
    assert_eq!(d.to_string(), "2017-09-09");
}

#[test]
fn reads_sql_text_and_null() {
    let d = Date::from_sql_value(SqlValue::Text("2017-09".into())).unwrap();
    assert_eq!(d, date("2017-09-01"));
    assert!(Date::from_sql_value(SqlValue::Null).unwrap().is_zero());
    assert!(matches!(
        Date::from_sql_value(SqlValue::Text("junk".into())),
        Err(TypesError::InvalidFormat { .. })
    ));
}
