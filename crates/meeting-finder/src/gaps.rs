//! Find common free windows between two calendars.
//!
//! Meetings from both calendars are pooled and sorted by start time (then end
//! time), without merging overlaps. A sweep then walks the sorted list and
//! reports every stretch between the furthest meeting end seen so far and the
//! next meeting start, clipped to the effective window, that is long enough to
//! host the requested meeting.

use serde::Serialize;

use crate::calendar::{Calendar, Meeting};
use crate::time::{MeetingDuration, TimeOfDay};

/// A free window shared by both calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gap {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl Gap {
    pub fn duration_minutes(&self) -> i64 {
        self.start.minutes_until(self.end)
    }

    /// Render as a `("HH:MM", "HH:MM")` pair.
    pub fn to_pair(&self) -> (String, String) {
        (self.start.to_string(), self.end.to_string())
    }
}

/// Intersection of both calendars' working hours.
///
/// Returns `None` when the later start falls after the earlier end.
pub fn effective_window(
    calendar1: &Calendar,
    calendar2: &Calendar,
) -> Option<(TimeOfDay, TimeOfDay)> {
    let (hours1, hours2) = (calendar1.working_hours(), calendar2.working_hours());
    let start = hours1.start().max(hours2.start());
    let end = hours1.end().min(hours2.end());
    (start <= end).then_some((start, end))
}

/// Pool both calendars' meetings, sorted by start and then by end.
fn merge_meetings(calendar1: &Calendar, calendar2: &Calendar) -> Vec<Meeting> {
    let mut meetings: Vec<Meeting> = calendar1
        .meetings()
        .iter()
        .chain(calendar2.meetings())
        .copied()
        .collect();
    meetings.sort();
    meetings
}

/// Find every free window of at least `duration` shared by both calendars.
///
/// Gaps are returned in ascending start order and always lie within the
/// effective window. A gap exactly as long as `duration` is included. Meetings
/// that sit outside the effective window only matter where they overlap it.
pub fn find_gaps(
    calendar1: &Calendar,
    calendar2: &Calendar,
    duration: MeetingDuration,
) -> Vec<Gap> {
    let Some((window_start, window_end)) = effective_window(calendar1, calendar2) else {
        log::debug!("working hours do not overlap, no gaps");
        return Vec::new();
    };

    let required = i64::from(duration.minutes());
    let mut gaps = Vec::new();
    let mut emit = |start: TimeOfDay, end: TimeOfDay| {
        let gap = Gap {
            start: start.max(window_start),
            end: end.min(window_end),
        };
        if gap.duration_minutes() >= required {
            log::debug!("free window {}-{}", gap.start, gap.end);
            gaps.push(gap);
        }
    };

    // Furthest meeting end so far; a meeting nested inside an earlier, longer
    // one must not reopen the time the longer one still covers.
    let mut busy_until = window_start;
    for meeting in merge_meetings(calendar1, calendar2) {
        emit(busy_until, meeting.start());
        busy_until = busy_until.max(meeting.end());
    }
    emit(busy_until, window_end);

    gaps
}

/// Find the earliest free window of at least `duration`.
///
/// Delegates to [`find_gaps`] and keeps only the first result.
pub fn find_first_gap(
    calendar1: &Calendar,
    calendar2: &Calendar,
    duration: MeetingDuration,
) -> Option<Gap> {
    find_gaps(calendar1, calendar2, duration).into_iter().next()
}
