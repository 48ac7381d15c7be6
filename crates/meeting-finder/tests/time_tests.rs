//! Tests for `HH:MM` time parsing and `[HH:MM]` duration parsing.

use meeting_finder::{ErrorKind, MeetingDuration, TimeOfDay};

fn kind_of_time(text: &str) -> ErrorKind {
    text.parse::<TimeOfDay>().unwrap_err().kind()
}

fn kind_of_duration(text: &str) -> ErrorKind {
    text.parse::<MeetingDuration>().unwrap_err().kind()
}

// ── TimeOfDay ───────────────────────────────────────────────────────────────

#[test]
fn parses_strict_hh_mm() {
    let time: TimeOfDay = "08:05".parse().unwrap();
    assert_eq!(time.hour(), 8);
    assert_eq!(time.minute(), 5);
    assert_eq!(time.to_string(), "08:05");
}

#[test]
fn accepts_full_day_range() {
    assert_eq!("00:00".parse::<TimeOfDay>().unwrap().to_string(), "00:00");
    assert_eq!("23:59".parse::<TimeOfDay>().unwrap().to_string(), "23:59");
}

#[test]
fn rejects_malformed_shapes() {
    for text in ["8:00", "08:0", "08:00:00", " 08:00", "08:00 ", "0800", "ab:cd", "08-00"] {
        assert_eq!(kind_of_time(text), ErrorKind::Format, "input {:?}", text);
    }
}

#[test]
fn rejects_out_of_range_components() {
    assert_eq!(kind_of_time("24:00"), ErrorKind::Format);
    assert_eq!(kind_of_time("12:60"), ErrorKind::Format);
}

#[test]
fn rejects_non_ascii_digits() {
    // Arabic-Indic digits are Unicode digits but not valid HH:MM.
    assert_eq!(kind_of_time("\u{0660}\u{0668}:00"), ErrorKind::Format);
}

#[test]
fn empty_time_is_missing() {
    assert_eq!(kind_of_time(""), ErrorKind::MissingValue);
}

#[test]
fn whitespace_only_time_is_missing() {
    assert_eq!(kind_of_time("   "), ErrorKind::MissingValue);
    assert_eq!(kind_of_time("\t\n"), ErrorKind::MissingValue);
}

#[test]
fn minutes_until_is_signed() {
    let nine: TimeOfDay = "09:00".parse().unwrap();
    let ten_thirty: TimeOfDay = "10:30".parse().unwrap();
    assert_eq!(nine.minutes_until(ten_thirty), 90);
    assert_eq!(ten_thirty.minutes_until(nine), -90);
    assert_eq!(nine.minutes_until(nine), 0);
}

#[test]
fn times_are_totally_ordered() {
    let mut times: Vec<TimeOfDay> = ["12:00", "08:30", "08:29", "23:00"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    times.sort();
    let rendered: Vec<String> = times.iter().map(|t| t.to_string()).collect();
    assert_eq!(rendered, ["08:29", "08:30", "12:00", "23:00"]);
}

#[test]
fn serializes_as_hh_mm_string() {
    let time = TimeOfDay::from_hm(7, 5).unwrap();
    assert_eq!(serde_json::to_string(&time).unwrap(), "\"07:05\"");
}

// ── MeetingDuration ─────────────────────────────────────────────────────────

#[test]
fn parses_bracketed_duration_to_minutes() {
    assert_eq!("[00:30]".parse::<MeetingDuration>().unwrap().minutes(), 30);
    assert_eq!("[02:10]".parse::<MeetingDuration>().unwrap().minutes(), 130);
}

#[test]
fn duration_hours_are_not_capped_at_a_day() {
    assert_eq!("[20:10]".parse::<MeetingDuration>().unwrap().minutes(), 1210);
    assert_eq!("[36:00]".parse::<MeetingDuration>().unwrap().minutes(), 2160);
}

#[test]
fn zero_duration_is_rejected() {
    assert_eq!(kind_of_duration("[00:00]"), ErrorKind::InvalidDuration);
    assert_eq!(
        MeetingDuration::from_minutes(0).unwrap_err().kind(),
        ErrorKind::InvalidDuration
    );
}

#[test]
fn duration_minutes_over_59_is_a_format_error() {
    assert_eq!(kind_of_duration("[00:61]"), ErrorKind::Format);
}

#[test]
fn duration_requires_brackets_and_shape() {
    for text in [
        "00:30",
        "[00:30",
        "00:30]",
        "[0:30]",
        "[00:30:00]",
        "[ 00:30]",
        "I am not time format string",
    ] {
        assert_eq!(kind_of_duration(text), ErrorKind::Format, "input {:?}", text);
    }
}

#[test]
fn empty_duration_is_missing() {
    assert_eq!(kind_of_duration(""), ErrorKind::MissingValue);
}

#[test]
fn whitespace_only_duration_is_missing() {
    assert_eq!(kind_of_duration("   "), ErrorKind::MissingValue);
}

#[test]
fn duration_displays_bracketed() {
    assert_eq!(MeetingDuration::from_minutes(75).unwrap().to_string(), "[01:15]");
}
