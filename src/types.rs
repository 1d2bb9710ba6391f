//! Inbound payload types supplied by the upstream decoder.

use serde::{Deserialize, Serialize};

/// Barcode symbology that produced a payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Symbology {
    QrCode,
    DataMatrix,
    Aztec,
    Pdf417,
    Code39,
    Code128,
    Itf,
    Rss14,
    UpcA,
    UpcE,
    Ean8,
    Ean13,
}

impl Symbology {
    /// True for the 1-D retail symbologies whose content is a checksummed
    /// product number.
    pub fn is_product(self) -> bool {
        matches!(
            self,
            Symbology::UpcA | Symbology::UpcE | Symbology::Ean8 | Symbology::Ean13
        )
    }
}

/// The decoded content of one barcode, prior to semantic classification.
///
/// The text is preserved verbatim; classification never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawPayload {
    /// Decoded text, possibly empty.
    pub text: String,
    /// The symbology the decoder reported.
    pub symbology: Symbology,
}

impl RawPayload {
    pub fn new(text: impl Into<String>, symbology: Symbology) -> Self {
        Self {
            text: text.into(),
            symbology,
        }
    }
}
