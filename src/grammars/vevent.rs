//! iCalendar VEVENT blocks, optionally nested inside a VCALENDAR wrapper.
//!
//! The trigger is a whole line equal to `BEGIN:VEVENT`; a run-together
//! block with no line separators has no such line and falls through to
//! later grammars. DTSTART is mandatory, and any DTSTART/DTEND value that
//! fits none of the three date-time shapes fails the whole grammar; a
//! partially populated event would mislead.

use crate::config::ClassifyConfig;
use crate::datetime::parse_event_time;
use crate::error::ClassifyError;
use crate::result::{CalendarResult, ParsedResult};
use crate::types::RawPayload;

use super::{non_empty, Outcome};

pub(crate) fn parse(payload: &RawPayload, cfg: &ClassifyConfig) -> Outcome {
    let mut lines = payload.text.lines();
    if !lines
        .by_ref()
        .any(|line| line.trim_end().eq_ignore_ascii_case("BEGIN:VEVENT"))
    {
        return Ok(None);
    }
    let mut summary = None;
    let mut start = None;
    let mut end = None;
    for line in lines {
        if line.trim_end().eq_ignore_ascii_case("END:VEVENT") {
            break;
        }
        let Some((key, value)) = content_line(line) else {
            continue;
        };
        match key.to_ascii_uppercase().as_str() {
            "SUMMARY" if summary.is_none() => summary = non_empty(value.to_string()),
            "DTSTART" if start.is_none() => match parse_event_time(value) {
                Some(when) => start = Some(when),
                None => return Ok(None),
            },
            "DTEND" if end.is_none() => match parse_event_time(value) {
                Some(when) => end = Some(when),
                None => return Ok(None),
            },
            _ => {}
        }
    }
    let Some(start) = start else {
        return Ok(None);
    };
    let Some(formatter) = cfg.event_time.as_deref() else {
        return Err(ClassifyError::MissingEventTimeFormatter);
    };
    Ok(Some(ParsedResult::Calendar(CalendarResult::new(
        summary, start, end, formatter,
    ))))
}

fn content_line(line: &str) -> Option<(&str, &str)> {
    let (head, value) = line.split_once(':')?;
    let key = match head.find(';') {
        Some(semi) => &head[..semi],
        None => head,
    };
    Some((key, value.trim_end()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::datetime::MediumDateTimeFormat;
    use crate::types::Symbology;

    fn cfg() -> ClassifyConfig {
        ClassifyConfig::with_event_time(Arc::new(MediumDateTimeFormat::utc()))
    }

    fn parse_text(text: &str) -> Option<ParsedResult> {
        parse(&RawPayload::new(text, Symbology::QrCode), &cfg()).expect("config carries a formatter")
    }

    #[test]
    fn utc_local_and_all_day_events() {
        let result = parse_text(
            "BEGIN:VEVENT\r\nSUMMARY:foo\r\nDTSTART:20080504T123456Z\r\nDTEND:20080505T234555Z\r\nEND:VEVENT",
        )
        .expect("matches");
        assert_eq!(
            result.display(),
            "foo\nMay 4, 2008 12:34:56 PM\nMay 5, 2008 11:45:55 PM"
        );
        let result =
            parse_text("BEGIN:VEVENT\r\nSUMMARY:foo\r\nDTSTART:20080504\r\nEND:VEVENT")
                .expect("matches");
        assert_eq!(result.display(), "foo\nMay 4, 2008");
    }

    #[test]
    fn vcalendar_wrapper_is_accepted() {
        let result = parse_text(
            "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nSUMMARY:foo\r\nDTSTART:20080504T123456Z\r\nEND:VEVENT\r\nEND:VCALENDAR",
        )
        .expect("matches");
        assert_eq!(result.display(), "foo\nMay 4, 2008 12:34:56 PM");
    }

    #[test]
    fn missing_or_malformed_start_declines_entirely() {
        assert_eq!(parse_text("BEGIN:VEVENT\r\nSUMMARY:foo\r\nEND:VEVENT"), None);
        assert_eq!(parse_text("BEGIN:VEVENT\r\nDTEND:20080505T\r\nEND:VEVENT"), None);
        assert_eq!(
            parse_text("BEGIN:VEVENT\r\nSUMMARY:foo\r\nDTSTART:yesterday\r\nEND:VEVENT"),
            None
        );
    }

    #[test]
    fn run_together_blocks_are_not_events() {
        assert_eq!(
            parse_text("BEGIN:VEVENTSUMMARY:EventDTSTART:20081030T122030ZEND:VEVENT"),
            None
        );
    }

    #[test]
    fn missing_formatter_is_a_configuration_error() {
        let payload = RawPayload::new(
            "BEGIN:VEVENT\r\nSUMMARY:foo\r\nDTSTART:20080504\r\nEND:VEVENT",
            Symbology::QrCode,
        );
        let outcome = parse(&payload, &ClassifyConfig::default());
        assert_eq!(outcome, Err(ClassifyError::MissingEventTimeFormatter));
    }
}
