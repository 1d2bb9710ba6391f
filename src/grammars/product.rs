//! Retail product numbers (UPC/EAN) and their ISBN subset.
//!
//! Only consulted when the producing symbology is one of the 1-D product
//! kinds; a QR code containing twelve digits stays plain text. Content must
//! be all digits of the length the symbology implies, and the trailing
//! check digit must validate; a mismatch falls through to later grammars.

use crate::checksum::{expand_upce, validate_check_digit};
use crate::config::ClassifyConfig;
use crate::result::{IsbnResult, ParsedResult, ProductResult};
use crate::types::{RawPayload, Symbology};

use super::Outcome;

pub(crate) fn parse(payload: &RawPayload, _cfg: &ClassifyConfig) -> Outcome {
    if !payload.symbology.is_product() {
        return Ok(None);
    }
    let text = payload.text.as_str();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(None);
    }
    let normalized = match payload.symbology {
        Symbology::UpcE => {
            if text.len() != 8 {
                return Ok(None);
            }
            match expand_upce(text) {
                Some(expanded) if validate_check_digit(&expanded) => expanded,
                _ => return Ok(None),
            }
        }
        Symbology::UpcA => {
            // A 13-digit rendering is accepted only as the EAN-13 form of a
            // UPC-A, i.e. with a leading zero.
            let length_fits = text.len() == 12 || (text.len() == 13 && text.starts_with('0'));
            if !length_fits || !validate_check_digit(text) {
                return Ok(None);
            }
            text.to_string()
        }
        Symbology::Ean8 => {
            if text.len() != 8 || !validate_check_digit(text) {
                return Ok(None);
            }
            text.to_string()
        }
        Symbology::Ean13 => {
            if text.len() != 13 || !validate_check_digit(text) {
                return Ok(None);
            }
            text.to_string()
        }
        _ => return Ok(None),
    };
    if payload.symbology == Symbology::Ean13
        && (text.starts_with("978") || text.starts_with("979"))
    {
        return Ok(Some(ParsedResult::Isbn(IsbnResult::new(text.to_string()))));
    }
    Ok(Some(ParsedResult::Product(ProductResult::new(
        text.to_string(),
        normalized,
    ))))
}
