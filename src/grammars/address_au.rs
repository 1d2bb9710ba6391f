//! Line-oriented AU carrier address-book records.
//!
//! Matched only when the text contains a `MEMORY` key and `\r\n` line
//! separators. Keys are `NAME1`, `TEL1`..`TEL3` and `MEMORY`, one per
//! line; values are trimmed and there is no escaping. MEMORY carries a
//! free-form note.

use crate::config::ClassifyConfig;
use crate::result::{AddressBookFields, AddressBookResult, ParsedResult};
use crate::types::RawPayload;

use super::{non_empty, Outcome};

pub(crate) fn parse(payload: &RawPayload, _cfg: &ClassifyConfig) -> Outcome {
    let text = payload.text.as_str();
    if !text.contains("MEMORY") || !text.contains("\r\n") {
        return Ok(None);
    }
    let mut fields = AddressBookFields::default();
    let mut tels: [Option<String>; 3] = [None, None, None];
    for line in text.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match key {
            "NAME1" if fields.names.is_empty() => {
                if !value.is_empty() {
                    fields.names.push(value.to_string());
                }
            }
            "TEL1" if tels[0].is_none() => tels[0] = non_empty(value.to_string()),
            "TEL2" if tels[1].is_none() => tels[1] = non_empty(value.to_string()),
            "TEL3" if tels[2].is_none() => tels[2] = non_empty(value.to_string()),
            "MEMORY" if fields.note.is_none() => fields.note = non_empty(value.to_string()),
            _ => {}
        }
    }
    fields.phones.extend(tels.into_iter().flatten());
    Ok(Some(ParsedResult::AddressBook(AddressBookResult::contact(
        fields,
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
    fn memory_and_crlf_are_the_trigger() {
        assert!(parse_text("MEMORY:\r\n").is_some());
        assert_eq!(parse_text("MEMORY:foo"), None);
        assert_eq!(parse_text("NAME1:Sean\r\n"), None);
    }

    #[test]
    fn name_then_phone_then_note() {
        let result = parse_text("MEMORY:foo\r\nNAME1:Sean\r\n").expect("record matches");
        assert_eq!(result.display(), "Sean\nfoo");
        let result = parse_text("TEL1:+12125551212\r\nMEMORY:\r\n").expect("record matches");
        assert_eq!(result.display(), "+12125551212");
    }

    #[test]
    fn phones_keep_their_numbered_order() {
        let result =
            parse_text("TEL2:+2\r\nTEL1:+1\r\nMEMORY:note\r\n").expect("record matches");
        assert_eq!(result.display(), "+1\n+2\nnote");
    }
}
