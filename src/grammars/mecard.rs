//! DoCoMo MECARD address-book records.

use crate::config::ClassifyConfig;
use crate::fields::scan_fields;
use crate::result::{AddressBookFields, AddressBookResult, ParsedResult};
use crate::types::RawPayload;

use super::{non_empty, strip_prefix_ci, Outcome};

pub(crate) fn parse(payload: &RawPayload, _cfg: &ClassifyConfig) -> Outcome {
    let Some(body) = strip_prefix_ci(&payload.text, "MECARD:") else {
        return Ok(None);
    };
    let mut fields = AddressBookFields::default();
    let mut saw_name = false;
    for field in scan_fields(body) {
        match field.key.as_str() {
            "N" if !saw_name => {
                saw_name = true;
                if !field.value.is_empty() {
                    fields.names.push(format_name(&field.value));
                }
            }
            "TEL" => {
                if !field.value.is_empty() {
                    fields.phones.push(field.value);
                }
            }
            "EMAIL" => {
                if !field.value.is_empty() {
                    fields.emails.push(field.value);
                }
            }
            "URL" => {
                if !field.value.is_empty() {
                    fields.urls.push(field.value);
                }
            }
            "ADR" if fields.address.is_none() => fields.address = non_empty(field.value),
            "ORG" if fields.org.is_none() => fields.org = non_empty(field.value),
            "BDAY" if fields.birthday.is_none() => fields.birthday = non_empty(field.value),
            "NOTE" if fields.note.is_none() => fields.note = non_empty(field.value),
            _ => {}
        }
    }
    if !saw_name {
        return Ok(None);
    }
    Ok(Some(ParsedResult::AddressBook(AddressBookResult::contact(
        fields,
    ))))
}

/// MECARD names may be `family,given`; those render as `given family`.
fn format_name(value: &str) -> String {
    match value.split_once(',') {
        Some((family, given)) => format!("{given} {family}"),
        None => value.to_string(),
    }
}
