//! Grammar dispatch in fixed priority order.

use tracing::debug;

use crate::config::ClassifyConfig;
use crate::error::ClassifyError;
use crate::grammars::{self, Grammar};
use crate::result::{ParsedResult, TextResult};
use crate::types::RawPayload;

/// Priority table, consulted left to right; the first match wins.
///
/// Order is load-bearing: several grammars have overlapping trigger
/// conditions (a run-together VEVENT block, for example, satisfies the
/// loose URI heuristic), so entries keep their position deliberately.
const GRAMMARS: &[Grammar] = &[
    grammars::bookmark::parse,
    grammars::urlto::parse,
    grammars::email::parse_matmsg,
    grammars::email::parse_address,
    grammars::mecard::parse,
    grammars::address_au::parse,
    grammars::bizcard::parse,
    grammars::product::parse,
    grammars::geo::parse,
    grammars::tel::parse,
    grammars::vcard::parse,
    grammars::vevent::parse,
    grammars::sms::parse,
    grammars::uri::parse,
];

/// Classifies one decoded payload.
///
/// Total over payload content: every text, however malformed, yields a
/// result, with plain text as the universal fallback. The error paths are
/// configuration-level only: an invalid config version, or a calendar
/// event reached without an event-time formatter.
pub fn classify(
    payload: &RawPayload,
    cfg: &ClassifyConfig,
) -> Result<ParsedResult, ClassifyError> {
    cfg.validate()?;
    for grammar in GRAMMARS {
        if let Some(result) = grammar(payload, cfg)? {
            debug!(category = ?result.category(), "payload classified");
            return Ok(result);
        }
    }
    debug!(category = ?crate::result::ResultCategory::Text, "payload classified");
    Ok(ParsedResult::Text(TextResult::new(payload.text.clone())))
}
