use chrono::{NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;

use mealie_client::models::convert::{
    convert_date, convert_datetime, parse_duration, safe_get, strip_nulls,
};
use mealie_client::MealieError;

#[test]
fn test_parse_duration_hours_and_minutes() {
    assert_eq!(parse_duration(Some("PT1H30M")).unwrap(), Some(90));
    assert_eq!(parse_duration(Some("PT45M")).unwrap(), Some(45));
    assert_eq!(parse_duration(Some("PT2H")).unwrap(), Some(120));
    assert_eq!(parse_duration(Some("PT0M")).unwrap(), Some(0));
}

#[test]
fn test_parse_duration_absent_input() {
    assert_eq!(parse_duration(None).unwrap(), None);
    assert_eq!(parse_duration(Some("")).unwrap(), None);
}

#[test]
fn test_parse_duration_malformed_input_raises() {
    for bad in ["garbage", "PT", "90", "PT90", "PTM", "PT30S", "PT30M1H", "PT1H2H"] {
        let err = parse_duration(Some(bad)).unwrap_err();
        assert!(
            matches!(err, MealieError::Format(_)),
            "expected Format error for {bad:?}, got {err:?}"
        );
    }
}

#[test]
fn test_parse_duration_overflowing_input_raises() {
    // Syntactically valid but arithmetically unrepresentable durations fail
    // with a Format error instead of overflowing.
    for bad in [
        "PT200000000000000000H",
        "PT9223372036854775807H",
        "PT9999999999999999999M",
    ] {
        let err = parse_duration(Some(bad)).unwrap_err();
        assert!(
            matches!(err, MealieError::Format(_)),
            "expected Format error for {bad:?}, got {err:?}"
        );
    }
}

#[test]
fn test_convert_datetime_with_offset() {
    let expected = Utc.with_ymd_and_hms(2023, 6, 1, 10, 0, 0).unwrap();
    assert_eq!(
        convert_datetime(Some("2023-06-01T10:00:00Z")).unwrap(),
        Some(expected)
    );
    assert_eq!(
        convert_datetime(Some("2023-06-01T12:00:00+02:00")).unwrap(),
        Some(expected)
    );
}

#[test]
fn test_convert_datetime_without_offset_assumes_utc() {
    let expected = Utc.with_ymd_and_hms(2023, 6, 1, 10, 0, 0).unwrap();
    assert_eq!(
        convert_datetime(Some("2023-06-01T10:00:00")).unwrap(),
        Some(expected)
    );
    assert_eq!(
        convert_datetime(Some("2023-06-01T10:00:00.000")).unwrap(),
        Some(expected)
    );
}

#[test]
fn test_convert_datetime_absent_and_malformed() {
    assert_eq!(convert_datetime(None).unwrap(), None);
    assert_eq!(convert_datetime(Some("")).unwrap(), None);
    assert!(matches!(
        convert_datetime(Some("yesterday")),
        Err(MealieError::Format(_))
    ));
}

#[test]
fn test_convert_date() {
    assert_eq!(
        convert_date(Some("2023-07-03")).unwrap(),
        Some(NaiveDate::from_ymd_opt(2023, 7, 3).unwrap())
    );
    assert_eq!(convert_date(None).unwrap(), None);
    assert_eq!(convert_date(Some("")).unwrap(), None);
    assert!(matches!(
        convert_date(Some("03/07/2023")),
        Err(MealieError::Format(_))
    ));
}

#[test]
fn test_safe_get_never_panics() {
    let value = json!({"a": 1, "b": null, "nested": {"x": "y"}});
    assert_eq!(safe_get(&value, "a"), Some(&json!(1)));
    assert_eq!(safe_get(&value, "b"), None);
    assert_eq!(safe_get(&value, "missing"), None);
    assert_eq!(safe_get(&json!("not an object"), "a"), None);
    assert_eq!(safe_get(&json!(null), "a"), None);
}

#[test]
fn test_strip_nulls_removes_nested_null_keys() {
    let value = json!({
        "name": "Cake",
        "description": null,
        "settings": {"public": true, "locked": null},
        "tags": [{"name": "a", "slug": null}, null]
    });
    let cleaned = strip_nulls(value);
    assert_eq!(
        cleaned,
        json!({
            "name": "Cake",
            "settings": {"public": true},
            "tags": [{"name": "a"}, null]
        })
    );
}
