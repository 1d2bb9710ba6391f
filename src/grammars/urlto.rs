//! `URLTO:title:uri` bookmarks; the title may be empty.

use crate::config::ClassifyConfig;
use crate::result::{ParsedResult, UriResult};
use crate::types::RawPayload;
use crate::uri;

use super::{strip_prefix_ci, Outcome};

pub(crate) fn parse(payload: &RawPayload, _cfg: &ClassifyConfig) -> Outcome {
    let Some(body) = strip_prefix_ci(&payload.text, "URLTO:") else {
        return Ok(None);
    };
    let Some((title, target)) = body.split_once(':') else {
        return Ok(None);
    };
    let title = (!title.is_empty()).then(|| title.to_string());
    Ok(Some(ParsedResult::Uri(UriResult::new(
        title,
        uri::massage(target),
    ))))
}
