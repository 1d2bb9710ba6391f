//! Calendar date-time parsing and the locale/timezone formatting seam.
//!
//! Calendar events carry their times in one of three encodings; parsing is
//! strict, and a value fitting none of them is a parse failure rather than a
//! partial result. Rendering is locale- and timezone-dependent, which is the
//! caller's concern: the classifier only ever renders through the
//! [`EventTimeFormatter`] trait, threaded in explicitly via the
//! configuration. There is no process-wide default locale anywhere in this
//! crate, so concurrent classifications with different formatters cannot
//! interfere.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};
use serde::{Deserialize, Serialize};

/// One of the three date-time encodings a calendar event may carry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EventTime {
    /// `YYYYMMDDTHHMMSSZ`, an instant in UTC.
    Utc(DateTime<Utc>),
    /// `YYYYMMDDTHHMMSS`, a floating local date-time.
    Local(NaiveDateTime),
    /// `YYYYMMDD`, a date with no time of day (all-day event).
    AllDay(NaiveDate),
}

/// Parses a calendar date-time value, trying the UTC, local and date-only
/// shapes in that order.
///
/// Returns `None` when no shape fits or when the components are
/// calendar-invalid (month 13, hour 25).
pub fn parse_event_time(value: &str) -> Option<EventTime> {
    if let Some(instant) = value.strip_suffix('Z') {
        let naive = NaiveDateTime::parse_from_str(instant, "%Y%m%dT%H%M%S").ok()?;
        return Some(EventTime::Utc(naive.and_utc()));
    }
    if value.len() == 15 {
        return NaiveDateTime::parse_from_str(value, "%Y%m%dT%H%M%S")
            .ok()
            .map(EventTime::Local);
    }
    if value.len() == 8 {
        return NaiveDate::parse_from_str(value, "%Y%m%d")
            .ok()
            .map(EventTime::AllDay);
    }
    None
}

/// Locale- and timezone-aware rendering of event times.
pub trait EventTimeFormatter: fmt::Debug + Send + Sync {
    fn render(&self, when: &EventTime) -> String;
}

/// English medium-length renderer, e.g. `May 4, 2008 12:34:56 PM`.
///
/// UTC instants are shifted into `offset` before rendering; local and
/// all-day values render as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediumDateTimeFormat {
    pub offset: FixedOffset,
}

impl MediumDateTimeFormat {
    /// Renderer that keeps UTC instants in UTC.
    pub fn utc() -> Self {
        Self { offset: Utc.fix() }
    }

    pub fn with_offset(offset: FixedOffset) -> Self {
        Self { offset }
    }
}

const MEDIUM_DATETIME: &str = "%b %-d, %Y %-I:%M:%S %p";
const MEDIUM_DATE: &str = "%b %-d, %Y";

impl EventTimeFormatter for MediumDateTimeFormat {
    fn render(&self, when: &EventTime) -> String {
        match when {
            EventTime::Utc(instant) => instant
                .with_timezone(&self.offset)
                .format(MEDIUM_DATETIME)
                .to_string(),
            EventTime::Local(naive) => naive.format(MEDIUM_DATETIME).to_string(),
            EventTime::AllDay(date) => date.format(MEDIUM_DATE).to_string(),
        }
    }
}
