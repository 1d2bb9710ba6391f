//! vCard address-book records.
//!
//! An unterminated record is accepted with whatever fields were parsed;
//! `BEGIN:VCARD` alone yields an empty address-book result. Content-line
//! parameters (`ADR;HOME:...`) are ignored when picking the field key, and
//! unknown keys (VERSION included) are skipped without failing.

use crate::config::ClassifyConfig;
use crate::result::{AddressBookFields, AddressBookResult, ParsedResult};
use crate::types::RawPayload;

use super::{non_empty, Outcome};

pub(crate) fn parse(payload: &RawPayload, _cfg: &ClassifyConfig) -> Outcome {
    let mut lines = payload.text.lines();
    match lines.next() {
        Some(first) if first.trim_end().eq_ignore_ascii_case("BEGIN:VCARD") => {}
        _ => return Ok(None),
    }
    let mut fields = AddressBookFields::default();
    for line in lines {
        if line.trim_end().eq_ignore_ascii_case("END:VCARD") {
            break;
        }
        let Some((key, value)) = content_line(line) else {
            continue;
        };
        match key.to_ascii_uppercase().as_str() {
            "N" if fields.names.is_empty() => {
                let name = format_name(value);
                if !name.is_empty() {
                    fields.names.push(name);
                }
            }
            "TEL" => {
                if !value.is_empty() {
                    fields.phones.push(value.to_string());
                }
            }
            "EMAIL" => {
                if !value.is_empty() {
                    fields.emails.push(value.to_string());
                }
            }
            "URL" => {
                if !value.is_empty() {
                    fields.urls.push(value.to_string());
                }
            }
            "ADR" if fields.address.is_none() => fields.address = non_empty(value.to_string()),
            "ORG" if fields.org.is_none() => fields.org = non_empty(value.to_string()),
            "BDAY" if fields.birthday.is_none() => fields.birthday = non_empty(value.to_string()),
            "NOTE" if fields.note.is_none() => fields.note = non_empty(value.to_string()),
            _ => {}
        }
    }
    Ok(Some(ParsedResult::AddressBook(AddressBookResult::contact(
        fields,
    ))))
}

/// Splits `NAME[;PARAM...]:VALUE`, dropping the parameters. Lines without a
/// `:` are not content lines.
fn content_line(line: &str) -> Option<(&str, &str)> {
    let (head, value) = line.split_once(':')?;
    let key = match head.find(';') {
        Some(semi) => &head[..semi],
        None => head,
    };
    Some((key, value))
}

/// vCard N is `family;given[;additional...]`; renders as `given family`.
fn format_name(value: &str) -> String {
    let mut parts = value.split(';');
    let family = parts.next().unwrap_or_default();
    let given = parts.next().unwrap_or_default();
    [given, family]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
