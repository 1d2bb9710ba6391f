//! Generic URIs: the last grammar before the plain-text fallback.

use crate::config::ClassifyConfig;
use crate::result::{ParsedResult, UriResult};
use crate::types::RawPayload;
use crate::uri;

use super::Outcome;

pub(crate) fn parse(payload: &RawPayload, _cfg: &ClassifyConfig) -> Outcome {
    let text = payload.text.as_str();
    if !uri::is_basically_valid(text) {
        return Ok(None);
    }
    Ok(Some(ParsedResult::Uri(UriResult::new(
        None,
        uri::massage(text),
    ))))
}
