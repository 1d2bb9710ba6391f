//! `tel:` telephone URIs. The remainder is the display value, punctuation
//! and spacing preserved.

use crate::config::ClassifyConfig;
use crate::result::{ParsedResult, TelResult};
use crate::types::RawPayload;

use super::{strip_prefix_ci, Outcome};

pub(crate) fn parse(payload: &RawPayload, _cfg: &ClassifyConfig) -> Outcome {
    let Some(number) = strip_prefix_ci(&payload.text, "tel:") else {
        return Ok(None);
    };
    Ok(Some(ParsedResult::Tel(TelResult::new(
        number.to_string(),
        payload.text.clone(),
    ))))
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
    fn remainder_is_shown_verbatim() {
        assert_eq!(parse_text("tel:+15551212").expect("matches").display(), "+15551212");
        assert_eq!(
            parse_text("TEL:212 555 1212").expect("matches").display(),
            "212 555 1212"
        );
        assert_eq!(
            parse_text("tel:212-555-1212").expect("matches").display(),
            "212-555-1212"
        );
    }

    #[test]
    fn prefix_must_be_complete() {
        assert_eq!(parse_text("tel"), None);
        assert_eq!(parse_text("telephone"), None);
    }
}
