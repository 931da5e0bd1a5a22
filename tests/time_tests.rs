// Host-side tests for duration formatting and parsing.

use landscape_core::time::{format_duration, parse_leading_int};
use landscape_core::DurationValue;

#[test]
fn formats_zero_and_mixed_components() {
    assert_eq!(format_duration(0), "00:00:00");
    assert_eq!(format_duration(3661), "01:01:01");
    assert_eq!(format_duration(7200), "02:00:00");
    assert_eq!(format_duration(59), "00:00:59");
    assert_eq!(format_duration(600), "00:10:00");
}

#[test]
fn hours_are_not_wrapped_at_a_day() {
    assert_eq!(format_duration(90000), "25:00:00");
    assert_eq!(format_duration(360000), "100:00:00");
}

#[test]
fn parses_leading_integer_of_strings() {
    assert_eq!(parse_leading_int("3661"), 3661);
    assert_eq!(parse_leading_int("  42.9"), 42);
    assert_eq!(parse_leading_int("120s"), 120);
    assert_eq!(parse_leading_int("+15"), 15);
    assert_eq!(parse_leading_int("abc"), 0);
    assert_eq!(parse_leading_int(""), 0);
    assert_eq!(parse_leading_int("-30"), 0);
}

#[test]
fn duration_values_truncate_to_whole_seconds() {
    assert_eq!(DurationValue::Seconds(3661.8).whole_seconds(), 3661);
    assert_eq!(DurationValue::Seconds(-5.0).whole_seconds(), 0);
    assert_eq!(DurationValue::Seconds(f64::NAN).whole_seconds(), 0);
    assert_eq!(DurationValue::Text("7200".into()).whole_seconds(), 7200);
}
