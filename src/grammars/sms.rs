//! SMS/MMS message URIs.
//!
//! Two families share the category: `sms:`/`mms:` with comma-separated
//! recipients, discarded `;via=` routing hints and a percent-encoded
//! `?subject=&body=` query; and `smsto:`/`mmsto:` with exactly one
//! recipient and an optional free-form message after the first colon,
//! which is never split further; embedded colons and question marks
//! belong to the message.

use crate::config::ClassifyConfig;
use crate::result::{ParsedResult, SmsResult};
use crate::types::RawPayload;

use super::{non_empty, strip_prefix_ci, Outcome};

pub(crate) fn parse(payload: &RawPayload, _cfg: &ClassifyConfig) -> Outcome {
    let text = payload.text.as_str();
    for prefix in ["smsto:", "mmsto:"] {
        if let Some(rest) = strip_prefix_ci(text, prefix) {
            return Ok(Some(parse_single_recipient(rest)));
        }
    }
    for prefix in ["sms:", "mms:"] {
        if let Some(rest) = strip_prefix_ci(text, prefix) {
            return Ok(Some(parse_recipient_list(rest)));
        }
    }
    Ok(None)
}

fn parse_single_recipient(rest: &str) -> ParsedResult {
    let (number, body) = match rest.split_once(':') {
        Some((number, message)) => (number, non_empty(message.to_string())),
        None => (rest, None),
    };
    ParsedResult::Sms(SmsResult::new(vec![number.to_string()], None, body))
}

fn parse_recipient_list(rest: &str) -> ParsedResult {
    let (list, query) = match rest.split_once('?') {
        Some((list, query)) => (list, Some(query)),
        None => (rest, None),
    };
    let numbers = list
        .split(',')
        .map(|recipient| {
            let recipient = match recipient.find(";via=") {
                Some(via) => &recipient[..via],
                None => recipient,
            };
            recipient.to_string()
        })
        .collect();
    let mut subject = None;
    let mut body = None;
    if let Some(query) = query {
        for pair in query.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "subject" if subject.is_none() => subject = non_empty(percent_decode(value)),
                "body" if body.is_none() => body = non_empty(percent_decode(value)),
                _ => {}
            }
        }
    }
    ParsedResult::Sms(SmsResult::new(numbers, subject, body))
}

/// Percent-decodes a query value, keeping it raw when the encoding is
/// invalid.
fn percent_decode(value: &str) -> String {
    match urlencoding::decode(value) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Symbology;

    fn parse_text(text: &str) -> Option<ParsedResult> {
        parse(
            &RawPayload::new(text, Symbology::QrCode),
            &ClassifyConfig::default(),
        )
        .expect("grammar is pure")
    }

    #[test]
    fn recipient_lists_and_via_hints() {
        assert_eq!(
            parse_text("sms:+15551212,+12124440101").expect("matches").display(),
            "+15551212\n+12124440101"
        );
        assert_eq!(
            parse_text("sms:+15551212;via=999333").expect("matches").display(),
            "+15551212"
        );
    }

    #[test]
    fn query_supplies_subject_and_body() {
        assert_eq!(
            parse_text("mms:+15551212?subject=foo&body=bar").expect("matches").display(),
            "+15551212\nfoo\nbar"
        );
        assert_eq!(
            parse_text("sms:+15551212?subject=h%C3%A9llo").expect("matches").display(),
            "+15551212\nhéllo"
        );
    }

    #[test]
    fn smsto_message_is_never_split_again() {
        assert_eq!(
            parse_text("smsto:+15551212:Directions: Do this").expect("matches").display(),
            "+15551212\nDirections: Do this"
        );
        assert_eq!(
            parse_text("mmsto:+15551212:What's up?").expect("matches").display(),
            "+15551212\nWhat's up?"
        );
        assert_eq!(parse_text("SMSTO:+15551212").expect("matches").display(), "+15551212");
    }

    #[test]
    fn unrelated_schemes_decline() {
        assert_eq!(parse_text("tel:+15551212"), None);
        assert_eq!(parse_text("sms"), None);
    }
}
