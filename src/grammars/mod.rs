//! One recognizer per micro-format.
//!
//! Each grammar is a pure function over the payload (plus the classifier
//! configuration) returning `Ok(Some(result))` on a match, `Ok(None)` when
//! the input is not in its format, or a configuration error. Declining is
//! ordinary control flow; a grammar that has committed to its format but
//! finds a malformed mandatory field declines entirely rather than produce
//! a partial result.

pub(crate) mod address_au;
pub(crate) mod bizcard;
pub(crate) mod bookmark;
pub(crate) mod email;
pub(crate) mod geo;
pub(crate) mod mecard;
pub(crate) mod product;
pub(crate) mod sms;
pub(crate) mod tel;
pub(crate) mod uri;
pub(crate) mod urlto;
pub(crate) mod vcard;
pub(crate) mod vevent;

use crate::config::ClassifyConfig;
use crate::error::ClassifyError;
use crate::result::ParsedResult;
use crate::types::RawPayload;

/// Outcome signature shared by every grammar.
pub(crate) type Outcome = Result<Option<ParsedResult>, ClassifyError>;

/// A grammar entry in the dispatcher's priority table.
pub(crate) type Grammar = fn(&RawPayload, &ClassifyConfig) -> Outcome;

/// Strips `prefix` from the head of `text` without regard to ASCII case.
pub(crate) fn strip_prefix_ci<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then_some(&text[prefix.len()..])
}

/// Empty strings become `None`; display building omits absent fields.
pub(crate) fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
