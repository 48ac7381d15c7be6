//! Decoding of serialized calendars and the `find_meeting` entry point.
//!
//! Calendars arrive as JSON records:
//!
//! ```json
//! {
//!   "working_hours": { "start": "09:00", "end": "17:00" },
//!   "planned_meeting": [ { "start": "10:00", "end": "10:30" } ]
//! }
//! ```

use crate::calendar::{Calendar, CalendarData};
use crate::error::{Result, ScheduleError};
use crate::gaps::{find_gaps, Gap};
use crate::time::MeetingDuration;

/// Decode a JSON calendar record and validate it.
///
/// # Errors
/// Returns `ScheduleError::MissingValue` for empty or `null` input or absent fields,
/// `ScheduleError::InvalidRecord` when the text is not a calendar object, and
/// any validation error raised by [`crate::calendar::validate`].
pub fn parse_calendar(json: &str) -> Result<Calendar> {
    if json.trim().is_empty() {
        return Err(ScheduleError::MissingValue(
            "given calendar string is empty".to_string(),
        ));
    }
    // A literal `null` record decodes to `None` and is reported as missing.
    let data: Option<CalendarData> = serde_json::from_str(json)?;
    log::trace!("decoded calendar record: {:?}", data);
    Calendar::try_from(data.as_ref())
}

impl TryFrom<&str> for Calendar {
    type Error = ScheduleError;

    fn try_from(json: &str) -> Result<Self> {
        parse_calendar(json)
    }
}

/// Find common free windows for a meeting of at least `duration`.
///
/// Each calendar may be JSON text, a [`CalendarData`] record (optionally
/// absent), or an already-built [`Calendar`]. The duration may be `[HH:MM]`
/// text or a [`MeetingDuration`]. Calendars are decoded in argument order and
/// the duration last; the first failure is returned.
///
/// Each result is a `(start, end)` pair of zero-padded `HH:MM` strings, in
/// ascending start order.
pub fn find_meeting<A, B, D>(
    calendar1: A,
    calendar2: B,
    duration: D,
) -> Result<Vec<(String, String)>>
where
    A: TryInto<Calendar>,
    B: TryInto<Calendar>,
    D: TryInto<MeetingDuration>,
    ScheduleError: From<A::Error> + From<B::Error> + From<D::Error>,
{
    let calendar1: Calendar = calendar1.try_into()?;
    let calendar2: Calendar = calendar2.try_into()?;
    let duration: MeetingDuration = duration.try_into()?;

    Ok(find_gaps(&calendar1, &calendar2, duration)
        .iter()
        .map(Gap::to_pair)
        .collect())
}
