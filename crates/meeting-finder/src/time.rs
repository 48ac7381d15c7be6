//! Wall-clock times of day and requested meeting durations.
//!
//! Both are parsed from strict `HH:MM` text: exactly two ASCII digits, a colon,
//! and two more digits. No seconds, no whitespace, no single-digit hours.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{NaiveTime, Timelike};
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::error::{Result, ScheduleError};

static HH_MM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{2}):([0-9]{2})$").expect("HH:MM pattern is valid"));

/// Split a strict `HH:MM` literal into its hour and minute components.
///
/// Only the shape is checked here; range limits are up to the caller.
fn split_hh_mm(text: &str) -> Option<(u32, u32)> {
    let caps = HH_MM.captures(text)?;
    let hours = caps[1].parse().ok()?;
    let minutes = caps[2].parse().ok()?;
    Some((hours, minutes))
}

/// A time of day with minute precision, `00:00` through `23:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Build a time of day from an hour (0-23) and minute (0-59).
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(TimeOfDay)
            .ok_or_else(|| {
                ScheduleError::Format(format!(
                    "{:02}:{:02} is not a valid time of day",
                    hour, minute
                ))
            })
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Signed number of minutes from `self` until `later`.
    ///
    /// Negative when `later` actually precedes `self`.
    pub fn minutes_until(&self, later: TimeOfDay) -> i64 {
        (later.0 - self.0).num_minutes()
    }
}

impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(ScheduleError::MissingValue("time value is empty".to_string()));
        }
        let (hour, minute) = split_hh_mm(s).ok_or_else(|| {
            ScheduleError::Format(format!("time [{}] is not in required format [HH:MM]", s))
        })?;
        TimeOfDay::from_hm(hour, minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Requested length of a meeting, always at least one minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MeetingDuration(u32);

impl MeetingDuration {
    /// Build a duration from an already-known minute count.
    pub fn from_minutes(minutes: u32) -> Result<Self> {
        if minutes == 0 {
            return Err(ScheduleError::InvalidDuration(
                "meeting has to have non zero time".to_string(),
            ));
        }
        Ok(MeetingDuration(minutes))
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }
}

impl FromStr for MeetingDuration {
    type Err = ScheduleError;

    /// Parse a bracketed `[HH:MM]` literal.
    ///
    /// The hour part is a plain count and may exceed 23; the minute part may not
    /// exceed 59.
    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(ScheduleError::MissingValue(
                "meeting duration is empty".to_string(),
            ));
        }
        let bad_format =
            || ScheduleError::Format(format!("duration [{}] is not in required format [HH:MM]", s));

        let inner = s
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(bad_format)?;
        let (hours, minutes) = split_hh_mm(inner).ok_or_else(bad_format)?;
        if minutes > 59 {
            return Err(bad_format());
        }

        MeetingDuration::from_minutes(hours * 60 + minutes)
    }
}

impl TryFrom<&str> for MeetingDuration {
    type Error = ScheduleError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for MeetingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:02}:{:02}]", self.0 / 60, self.0 % 60)
    }
}
