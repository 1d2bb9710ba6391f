//! Semantic classification of decoded barcode payloads.
//!
//! The upstream decoder hands over a raw text payload plus the symbology
//! that produced it; this crate classifies the pair into one of a fixed set
//! of categories (text, URI, email, address book, product code, ISBN,
//! geographic coordinate, phone number, calendar event, SMS/MMS) and builds
//! the category's display string from its typed fields.
//!
//! ## What we do
//!
//! - Try ~14 micro-format grammars in a fixed priority order; first match
//!   wins, plain text is the universal fallback
//! - Build a display string per result, once, in a fixed per-format field
//!   order, never from the raw payload
//! - Validate UPC/EAN check digits before calling anything a product code
//! - Render calendar times through an explicit locale/timezone collaborator
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence. Same payload, same
//! config, same result on any machine; concurrent calls share nothing
//! mutable.
//!
//! ## Invariants worth knowing
//!
//! - "Does not match" is ordinary control flow, never an error
//! - A grammar that commits to its format but finds a malformed mandatory
//!   field declines entirely; partial results are forbidden
//! - Errors are configuration-level only (reserved version, missing
//!   event-time formatter)
//! - The input payload is never mutated; the text fallback returns it
//!   byte-for-byte

mod checksum;
pub mod config;
pub mod datetime;
mod dispatcher;
pub mod error;
mod fields;
mod grammars;
pub mod result;
pub mod types;
mod uri;

pub use crate::config::ClassifyConfig;
pub use crate::datetime::{
    parse_event_time, EventTime, EventTimeFormatter, MediumDateTimeFormat,
};
pub use crate::dispatcher::classify;
pub use crate::error::ClassifyError;
pub use crate::result::{
    AddressBookFields, AddressBookResult, CalendarResult, EmailResult, GeoResult, IsbnResult,
    ParsedResult, ProductResult, ResultCategory, SmsResult, TelResult, TextResult, UriResult,
};
pub use crate::types::{RawPayload, Symbology};
