//! Email recognizers: DoCoMo `MATMSG:` message records and bare addresses
//! with an optional `mailto:` prefix.

use crate::config::ClassifyConfig;
use crate::fields::scan_fields;
use crate::result::{EmailResult, ParsedResult};
use crate::types::RawPayload;

use super::{non_empty, strip_prefix_ci, Outcome};

/// Loose address test: a single `@` split with a non-empty local part, no
/// whitespace anywhere, and a domain with an interior dot.
pub(crate) fn is_basically_valid_address(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.find('.') {
        Some(0) | None => false,
        Some(_) => !domain.ends_with('.'),
    }
}

/// `MATMSG:TO:...;SUB:...;BODY:...;;` message records. TO is mandatory and
/// must look like an address.
pub(crate) fn parse_matmsg(payload: &RawPayload, _cfg: &ClassifyConfig) -> Outcome {
    let Some(record) = strip_prefix_ci(&payload.text, "MATMSG:") else {
        return Ok(None);
    };
    let mut to = None;
    let mut subject = None;
    let mut body = None;
    for field in scan_fields(record) {
        match field.key.as_str() {
            "TO" if to.is_none() => to = Some(field.value),
            "SUB" if subject.is_none() => subject = non_empty(field.value),
            "BODY" if body.is_none() => body = non_empty(field.value),
            _ => {}
        }
    }
    let Some(to) = to else {
        return Ok(None);
    };
    if !is_basically_valid_address(&to) {
        return Ok(None);
    }
    Ok(Some(ParsedResult::EmailAddress(EmailResult::new(
        to, subject, body,
    ))))
}

/// A bare address, optionally prefixed with `mailto:`; any query suffix
/// after the address is dropped.
pub(crate) fn parse_address(payload: &RawPayload, _cfg: &ClassifyConfig) -> Outcome {
    let text = payload.text.as_str();
    let address = match strip_prefix_ci(text, "mailto:") {
        Some(rest) => match rest.split_once('?') {
            Some((address, _query)) => address,
            None => rest,
        },
        None => text,
    };
    if !is_basically_valid_address(address) {
        return Ok(None);
    }
    Ok(Some(ParsedResult::EmailAddress(EmailResult::new(
        address.to_string(),
        None,
        None,
    ))))
}
