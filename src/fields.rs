//! Field scanner for the DoCoMo-style `KEY:value;` record formats.
//!
//! MEBKM, MATMSG, MECARD and BIZCARD share one body shape: `KEY:value`
//! pairs separated by `;`, conventionally closed with `;;`, with `\`
//! escaping a literal `;`, `:` or `\` inside a value. The scanner is a
//! single character walk; keeping the escaping rules here, in one place,
//! is what lets each grammar stay a plain key-to-field mapping.

/// One `KEY:value` pair extracted from a record body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Field {
    pub key: String,
    pub value: String,
}

/// Splits the body that follows a format prefix into fields.
///
/// Values run to the next unescaped `;`; an empty segment (the `;;`
/// terminator) ends the scan; segments with no `:` separator are skipped.
/// Fields are returned in input order, duplicates included; callers decide
/// which keys repeat.
pub(crate) fn scan_fields(body: &str) -> Vec<Field> {
    let mut fields = Vec::new();
    let mut iter = body.chars();
    'segments: loop {
        let mut key = String::new();
        let mut value = String::new();
        let mut in_value = false;
        let mut escaped = false;
        let mut consumed = false;
        loop {
            let Some(ch) = iter.next() else {
                if consumed {
                    push_field(&mut fields, key, value, in_value);
                }
                break 'segments;
            };
            consumed = true;
            if escaped {
                if in_value {
                    value.push(ch);
                } else {
                    key.push(ch);
                }
                escaped = false;
                continue;
            }
            match ch {
                '\\' => escaped = true,
                ';' => {
                    if key.is_empty() && !in_value {
                        break 'segments;
                    }
                    push_field(&mut fields, key, value, in_value);
                    continue 'segments;
                }
                ':' if !in_value => in_value = true,
                _ => {
                    if in_value {
                        value.push(ch);
                    } else {
                        key.push(ch);
                    }
                }
            }
        }
    }
    fields
}

fn push_field(fields: &mut Vec<Field>, key: String, value: String, had_separator: bool) {
    if had_separator && !key.is_empty() {
        fields.push(Field { key, value });
    }
}
