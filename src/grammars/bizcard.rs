//! BIZCARD records: a DoCoMo-style variant with single-letter keys.

use crate::config::ClassifyConfig;
use crate::fields::scan_fields;
use crate::result::{AddressBookFields, AddressBookResult, ParsedResult};
use crate::types::RawPayload;

use super::{non_empty, strip_prefix_ci, Outcome};

pub(crate) fn parse(payload: &RawPayload, _cfg: &ClassifyConfig) -> Outcome {
    let Some(body) = strip_prefix_ci(&payload.text, "BIZCARD:") else {
        return Ok(None);
    };
    let mut first = None;
    let mut last = None;
    let mut fields = AddressBookFields::default();
    for field in scan_fields(body) {
        match field.key.as_str() {
            "N" if first.is_none() => first = non_empty(field.value),
            "X" if last.is_none() => last = non_empty(field.value),
            "C" if fields.org.is_none() => fields.org = non_empty(field.value),
            "A" if fields.address.is_none() => fields.address = non_empty(field.value),
            "M" => {
                if !field.value.is_empty() {
                    fields.phones.push(field.value);
                }
            }
            "E" => {
                if !field.value.is_empty() {
                    fields.emails.push(field.value);
                }
            }
            _ => {}
        }
    }
    let name: Vec<String> = [first, last].into_iter().flatten().collect();
    if !name.is_empty() {
        fields.names.push(name.join(" "));
    }
    Ok(Some(ParsedResult::AddressBook(
        AddressBookResult::business_card(fields),
    )))
}
