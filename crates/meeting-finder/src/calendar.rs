//! Calendar records and the validator that turns them into typed calendars.
//!
//! [`CalendarData`] mirrors the serialized record, where any field may be
//! absent. [`Calendar`] is the validated form: its fields are private and it
//! can only be built through the checks in this module, so every `Calendar`
//! handed to the gap finder already satisfies:
//!
//! - working hours end strictly after they start
//! - every meeting ends strictly after it starts
//! - every meeting lies within its calendar's working hours

use serde::Deserialize;

use crate::error::{Result, ScheduleError};
use crate::time::TimeOfDay;

/// A nullable `{start, end}` pair as it appears in a calendar record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TimeSpanData {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl TimeSpanData {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }
}

/// Unvalidated calendar, either deserialized or assembled by hand.
///
/// Missing `working_hours` or `planned_meeting` keys decode to `None` and are
/// rejected later by [`validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CalendarData {
    pub working_hours: Option<TimeSpanData>,
    #[serde(rename = "planned_meeting")]
    pub planned_meetings: Option<Vec<Option<TimeSpanData>>>,
}

impl CalendarData {
    pub fn new(working_hours: TimeSpanData, planned_meetings: Vec<TimeSpanData>) -> Self {
        Self {
            working_hours: Some(working_hours),
            planned_meetings: Some(planned_meetings.into_iter().map(Some).collect()),
        }
    }
}

/// The daily availability window of one calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingHours {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl WorkingHours {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        check_range("working hours", start, end)?;
        Ok(Self { start, end })
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Whether `meeting` lies entirely inside these working hours.
    pub fn contains(&self, meeting: &Meeting) -> bool {
        meeting.start >= self.start && meeting.end <= self.end
    }
}

/// An already-booked interval on a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Meeting {
    // Field order gives the derived `Ord` its start-then-end ordering.
    start: TimeOfDay,
    end: TimeOfDay,
}

impl Meeting {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        check_range("planned meeting", start, end)?;
        Ok(Self { start, end })
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }
}

/// A validated calendar: working hours plus the meetings booked inside them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    working_hours: WorkingHours,
    meetings: Vec<Meeting>,
}

impl Calendar {
    /// Assemble a calendar from typed parts, checking that every meeting fits
    /// inside the working hours.
    pub fn new(working_hours: WorkingHours, meetings: Vec<Meeting>) -> Result<Self> {
        for meeting in &meetings {
            check_bounds(&working_hours, meeting)?;
        }
        Ok(Self {
            working_hours,
            meetings,
        })
    }

    pub fn working_hours(&self) -> &WorkingHours {
        &self.working_hours
    }

    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }
}

impl From<&Calendar> for Calendar {
    fn from(calendar: &Calendar) -> Self {
        calendar.clone()
    }
}

impl TryFrom<&CalendarData> for Calendar {
    type Error = ScheduleError;

    fn try_from(data: &CalendarData) -> Result<Self> {
        build_calendar(Some(data))
    }
}

impl TryFrom<Option<&CalendarData>> for Calendar {
    type Error = ScheduleError;

    fn try_from(data: Option<&CalendarData>) -> Result<Self> {
        build_calendar(data)
    }
}

impl TryFrom<CalendarData> for Calendar {
    type Error = ScheduleError;

    fn try_from(data: CalendarData) -> Result<Self> {
        build_calendar(Some(&data))
    }
}

/// Check a calendar record, failing on the first violation found.
///
/// Checks run in a fixed order: the record itself, `working_hours`, the meeting
/// list, the working-hours fields and their range, then each meeting in list
/// order (presence, range, containment).
pub fn validate(calendar: Option<&CalendarData>) -> Result<()> {
    build_calendar(calendar).map(|_| ())
}

fn build_calendar(calendar: Option<&CalendarData>) -> Result<Calendar> {
    let data =
        calendar.ok_or_else(|| ScheduleError::MissingValue("given calendar is null".to_string()))?;
    let hours = data
        .working_hours
        .as_ref()
        .ok_or_else(|| ScheduleError::MissingValue("null working_hours".to_string()))?;
    let slots = data
        .planned_meetings
        .as_ref()
        .ok_or_else(|| ScheduleError::MissingValue("null planned_meeting".to_string()))?;

    let (Some(start), Some(end)) = (hours.start.as_deref(), hours.end.as_deref()) else {
        return Err(ScheduleError::Format(
            "invalid working hours: must contain start and end".to_string(),
        ));
    };
    let working_hours = WorkingHours::new(start.parse()?, end.parse()?)?;

    let mut meetings = Vec::with_capacity(slots.len());
    for slot in slots {
        let slot = slot.as_ref().ok_or_else(|| {
            ScheduleError::MissingValue("empty planned_meeting element".to_string())
        })?;
        let meeting = Meeting::new(
            required_time(slot.start.as_deref(), "start")?,
            required_time(slot.end.as_deref(), "end")?,
        )?;
        check_bounds(&working_hours, &meeting)?;
        meetings.push(meeting);
    }

    log::trace!(
        "validated calendar {}-{} with {} meetings",
        working_hours.start,
        working_hours.end,
        meetings.len()
    );

    Ok(Calendar {
        working_hours,
        meetings,
    })
}

fn required_time(value: Option<&str>, field: &str) -> Result<TimeOfDay> {
    value
        .ok_or_else(|| {
            ScheduleError::MissingValue(format!("planned_meeting {} time is empty", field))
        })?
        .parse()
}

fn check_range(what: &'static str, start: TimeOfDay, end: TimeOfDay) -> Result<()> {
    if end <= start {
        return Err(ScheduleError::InvalidRange {
            what,
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok(())
}

fn check_bounds(working_hours: &WorkingHours, meeting: &Meeting) -> Result<()> {
    if !working_hours.contains(meeting) {
        return Err(ScheduleError::OutOfBounds {
            meeting_start: meeting.start.to_string(),
            meeting_end: meeting.end.to_string(),
            work_start: working_hours.start.to_string(),
            work_end: working_hours.end.to_string(),
        });
    }
    Ok(())
}
