//! WASM bindings for meeting-finder.
//!
//! Exposes calendar validation and common free-slot search to JavaScript via
//! `wasm-bindgen`. Calendars are passed in as the same JSON records the library
//! decodes, and results come back as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p meeting-finder-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/meeting-finder-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/meeting_finder_wasm.wasm
//! ```

use meeting_finder::{find_gaps, parse_calendar, ErrorKind, Gap, MeetingDuration, ScheduleError};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct GapDto {
    start: String,
    end: String,
    duration_minutes: i64,
}

impl From<&Gap> for GapDto {
    fn from(gap: &Gap) -> Self {
        Self {
            start: gap.start.to_string(),
            end: gap.end.to_string(),
            duration_minutes: gap.duration_minutes(),
        }
    }
}

/// Error payload so JavaScript callers can branch on the failure kind.
#[derive(Serialize)]
struct ErrorDto {
    kind: &'static str,
    message: String,
}

impl From<&ScheduleError> for ErrorDto {
    fn from(err: &ScheduleError) -> Self {
        let kind = match err.kind() {
            ErrorKind::MissingValue => "MissingValue",
            ErrorKind::Format => "Format",
            ErrorKind::InvalidRange => "InvalidRange",
            ErrorKind::OutOfBounds => "OutOfBounds",
            ErrorKind::InvalidDuration => "InvalidDuration",
        };
        Self {
            kind,
            message: err.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// JSON-level logic, kept free of `JsValue` so it runs on native targets too
// ---------------------------------------------------------------------------

fn error_json(err: &ScheduleError) -> String {
    serde_json::to_string(&ErrorDto::from(err))
        .unwrap_or_else(|e| format!("Serialization error: {}", e))
}

fn find_gaps_json(calendar1: &str, calendar2: &str, duration: &str) -> Result<String, String> {
    let run = || -> meeting_finder::error::Result<Vec<GapDto>> {
        let calendar1 = parse_calendar(calendar1)?;
        let calendar2 = parse_calendar(calendar2)?;
        let duration: MeetingDuration = duration.parse()?;
        Ok(find_gaps(&calendar1, &calendar2, duration)
            .iter()
            .map(GapDto::from)
            .collect())
    };

    let dtos = run().map_err(|e| error_json(&e))?;
    serde_json::to_string(&dtos).map_err(|e| format!("Serialization error: {}", e))
}

fn validate_json(calendar: &str) -> Result<(), String> {
    parse_calendar(calendar)
        .map(|_| ())
        .map_err(|e| error_json(&e))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Find free windows of at least `duration` shared by two calendars.
///
/// Both calendars are JSON records with `working_hours` and `planned_meeting`
/// keys; `duration` is an `[HH:MM]` literal. Returns a JSON string containing
/// an array of `{start, end, duration_minutes}` objects. On failure the thrown
/// value is a JSON string `{kind, message}`.
#[wasm_bindgen(js_name = "findMeeting")]
pub fn find_meeting(calendar1: &str, calendar2: &str, duration: &str) -> Result<String, JsValue> {
    find_gaps_json(calendar1, calendar2, duration).map_err(|e| JsValue::from_str(&e))
}

/// Validate a calendar JSON record. Throws a JSON `{kind, message}` string on failure.
#[wasm_bindgen(js_name = "validateCalendar")]
pub fn validate_calendar(calendar: &str) -> Result<(), JsValue> {
    validate_json(calendar).map_err(|e| JsValue::from_str(&e))
}
