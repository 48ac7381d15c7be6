//! # meeting-finder
//!
//! Find the free time two calendars have in common.
//!
//! Each calendar is a working-hours window plus the meetings already booked in
//! it. Given two calendars and a minimum meeting length, the engine returns
//! every window inside both calendars' working hours that neither calendar has
//! booked and that is long enough to host the meeting.
//!
//! ## Quick start
//!
//! ```rust
//! use meeting_finder::find_meeting;
//!
//! let alice = r#"{"working_hours":{"start":"09:00","end":"17:00"},
//!                 "planned_meeting":[{"start":"09:00","end":"10:30"}]}"#;
//! let bob = r#"{"working_hours":{"start":"10:00","end":"12:00"},"planned_meeting":[]}"#;
//!
//! let gaps = find_meeting(alice, bob, "[00:30]").unwrap();
//! assert_eq!(gaps, vec![("10:30".to_string(), "12:00".to_string())]);
//! ```
//!
//! ## Modules
//!
//! - [`time`] — `HH:MM` times of day and `[HH:MM]` meeting durations
//! - [`calendar`] — Calendar records, typed calendars, and the validator
//! - [`gaps`] — The gap finder over two validated calendars
//! - [`schedule`] — JSON decoding and the `find_meeting` entry point
//! - [`error`] — Error types

pub mod calendar;
pub mod error;
pub mod gaps;
pub mod schedule;
pub mod time;

pub use calendar::{validate, Calendar, CalendarData, Meeting, TimeSpanData, WorkingHours};
pub use error::{ErrorKind, ScheduleError};
pub use gaps::{effective_window, find_first_gap, find_gaps, Gap};
pub use schedule::{find_meeting, parse_calendar};
pub use time::{MeetingDuration, TimeOfDay};
