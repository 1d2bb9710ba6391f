//! Classified results and their display renderings.
//!
//! Every result owns a display string computed once at construction from the
//! typed fields, in an order fixed per format. Downstream consumers can
//! present it directly; nothing here is ever recomputed or re-derived from
//! the raw payload (the plain-text category excepted, where the payload *is*
//! the value).

use serde::{Deserialize, Serialize};

use crate::datetime::{EventTime, EventTimeFormatter};

/// Semantic category of a classified payload. Exactly one per result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ResultCategory {
    Text,
    Uri,
    EmailAddress,
    AddressBook,
    Product,
    Isbn,
    Geo,
    Tel,
    Sms,
    Calendar,
}

/// A classified payload: the category's typed fields plus the ready-to-show
/// display string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ParsedResult {
    Text(TextResult),
    Uri(UriResult),
    EmailAddress(EmailResult),
    AddressBook(AddressBookResult),
    Product(ProductResult),
    Isbn(IsbnResult),
    Geo(GeoResult),
    Tel(TelResult),
    Sms(SmsResult),
    Calendar(CalendarResult),
}

impl ParsedResult {
    pub fn category(&self) -> ResultCategory {
        match self {
            ParsedResult::Text(_) => ResultCategory::Text,
            ParsedResult::Uri(_) => ResultCategory::Uri,
            ParsedResult::EmailAddress(_) => ResultCategory::EmailAddress,
            ParsedResult::AddressBook(_) => ResultCategory::AddressBook,
            ParsedResult::Product(_) => ResultCategory::Product,
            ParsedResult::Isbn(_) => ResultCategory::Isbn,
            ParsedResult::Geo(_) => ResultCategory::Geo,
            ParsedResult::Tel(_) => ResultCategory::Tel,
            ParsedResult::Sms(_) => ResultCategory::Sms,
            ParsedResult::Calendar(_) => ResultCategory::Calendar,
        }
    }

    pub fn display(&self) -> &str {
        match self {
            ParsedResult::Text(r) => r.display(),
            ParsedResult::Uri(r) => r.display(),
            ParsedResult::EmailAddress(r) => r.display(),
            ParsedResult::AddressBook(r) => r.display(),
            ParsedResult::Product(r) => r.display(),
            ParsedResult::Isbn(r) => r.display(),
            ParsedResult::Geo(r) => r.display(),
            ParsedResult::Tel(r) => r.display(),
            ParsedResult::Sms(r) => r.display(),
            ParsedResult::Calendar(r) => r.display(),
        }
    }
}

/// Appends `value` on its own line, skipping empty values entirely.
fn push_line(out: &mut String, value: &str) {
    if value.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(value);
}

fn push_opt(out: &mut String, value: Option<&str>) {
    if let Some(value) = value {
        push_line(out, value);
    }
}

/// Renders a coordinate component with at least one fractional digit,
/// matching the conventional floating rendering of whole values (`1` shows
/// as `1.0`).
fn float_display(value: f64) -> String {
    if value == value.trunc() {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Identity fallback: the payload itself, untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextResult {
    pub text: String,
    display: String,
}

impl TextResult {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            display: text.clone(),
            text,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }
}

/// A URI, already normalized, with an optional bookmark title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UriResult {
    pub title: Option<String>,
    pub uri: String,
    display: String,
}

impl UriResult {
    pub fn new(title: Option<String>, uri: String) -> Self {
        let mut display = String::new();
        push_opt(&mut display, title.as_deref());
        push_line(&mut display, &uri);
        Self {
            title,
            uri,
            display,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }
}

/// An email recipient with optional subject and body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailResult {
    pub to: String,
    pub subject: Option<String>,
    pub body: Option<String>,
    display: String,
}

impl EmailResult {
    pub fn new(to: String, subject: Option<String>, body: Option<String>) -> Self {
        let mut display = String::new();
        push_line(&mut display, &to);
        push_opt(&mut display, subject.as_deref());
        push_opt(&mut display, body.as_deref());
        Self {
            to,
            subject,
            body,
            display,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }
}

/// Contact fields shared by the address-book formats. Every field is
/// optional at this level; each grammar enforces its own mandatory keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressBookFields {
    pub names: Vec<String>,
    pub phones: Vec<String>,
    pub emails: Vec<String>,
    pub urls: Vec<String>,
    pub address: Option<String>,
    pub org: Option<String>,
    pub birthday: Option<String>,
    pub note: Option<String>,
}

/// An address-book record.
///
/// Two display orders exist, both pure functions of the fields: the standard
/// contact order (names, phones, address, org, emails, urls, birthday,
/// note) used by the MECARD, vCard and AU grammars, and the business-card
/// order (names, org, address, phones, emails, then the remainder) used by
/// the bizcard grammar. Absent fields are omitted entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressBookResult {
    pub fields: AddressBookFields,
    display: String,
}

impl AddressBookResult {
    pub fn contact(fields: AddressBookFields) -> Self {
        let mut display = String::new();
        for name in &fields.names {
            push_line(&mut display, name);
        }
        for phone in &fields.phones {
            push_line(&mut display, phone);
        }
        push_opt(&mut display, fields.address.as_deref());
        push_opt(&mut display, fields.org.as_deref());
        for email in &fields.emails {
            push_line(&mut display, email);
        }
        for url in &fields.urls {
            push_line(&mut display, url);
        }
        push_opt(&mut display, fields.birthday.as_deref());
        push_opt(&mut display, fields.note.as_deref());
        Self { fields, display }
    }

    pub fn business_card(fields: AddressBookFields) -> Self {
        let mut display = String::new();
        for name in &fields.names {
            push_line(&mut display, name);
        }
        push_opt(&mut display, fields.org.as_deref());
        push_opt(&mut display, fields.address.as_deref());
        for phone in &fields.phones {
            push_line(&mut display, phone);
        }
        for email in &fields.emails {
            push_line(&mut display, email);
        }
        for url in &fields.urls {
            push_line(&mut display, url);
        }
        push_opt(&mut display, fields.birthday.as_deref());
        push_opt(&mut display, fields.note.as_deref());
        Self { fields, display }
    }

    pub fn display(&self) -> &str {
        &self.display
    }
}

/// A checksummed retail product number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductResult {
    /// The digits exactly as decoded.
    pub product_id: String,
    /// The UPC-A expansion for UPC-E content; otherwise equal to
    /// `product_id`.
    pub normalized_id: String,
    display: String,
}

impl ProductResult {
    pub fn new(product_id: String, normalized_id: String) -> Self {
        Self {
            display: product_id.clone(),
            product_id,
            normalized_id,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }
}

/// An EAN-13 encoded ISBN (978/979 prefix).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IsbnResult {
    pub isbn: String,
    display: String,
}

impl IsbnResult {
    pub fn new(isbn: String) -> Self {
        Self {
            display: isbn.clone(),
            isbn,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }
}

/// A geographic coordinate with optional altitude in meters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoResult {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
    display: String,
}

impl GeoResult {
    pub fn new(latitude: f64, longitude: f64, altitude: Option<f64>) -> Self {
        let mut display = format!(
            "{}, {}",
            float_display(latitude),
            float_display(longitude)
        );
        if let Some(altitude) = altitude {
            display.push_str(", ");
            display.push_str(&float_display(altitude));
            display.push('m');
        }
        Self {
            latitude,
            longitude,
            altitude,
            display,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }
}

/// A telephone number; the number is shown verbatim, punctuation included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TelResult {
    pub number: String,
    pub tel_uri: String,
    display: String,
}

impl TelResult {
    pub fn new(number: String, tel_uri: String) -> Self {
        Self {
            display: number.clone(),
            number,
            tel_uri,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }
}

/// An SMS/MMS message: recipients in order, optional subject and body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SmsResult {
    pub numbers: Vec<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
    display: String,
}

impl SmsResult {
    pub fn new(numbers: Vec<String>, subject: Option<String>, body: Option<String>) -> Self {
        let mut display = String::new();
        for number in &numbers {
            push_line(&mut display, number);
        }
        push_opt(&mut display, subject.as_deref());
        push_opt(&mut display, body.as_deref());
        Self {
            numbers,
            subject,
            body,
            display,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }
}

/// A calendar event; times are rendered through the caller's formatter at
/// construction time and never again.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarResult {
    pub summary: Option<String>,
    pub start: EventTime,
    pub end: Option<EventTime>,
    display: String,
}

impl CalendarResult {
    pub fn new(
        summary: Option<String>,
        start: EventTime,
        end: Option<EventTime>,
        formatter: &dyn EventTimeFormatter,
    ) -> Self {
        let mut display = String::new();
        push_opt(&mut display, summary.as_deref());
        push_line(&mut display, &formatter.render(&start));
        if let Some(end) = &end {
            push_line(&mut display, &formatter.render(end));
        }
        Self {
            summary,
            start,
            end,
            display,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }
}
