//! Contract-level properties of the public API.

use std::sync::Arc;

use classify::{
    classify, ClassifyConfig, ClassifyError, MediumDateTimeFormat, ParsedResult, RawPayload,
    ResultCategory, Symbology,
};

fn cfg() -> ClassifyConfig {
    ClassifyConfig::with_event_time(Arc::new(MediumDateTimeFormat::utc()))
}

#[test]
fn every_payload_yields_a_result() {
    let junk = [
        "",
        " ",
        ";;;;",
        "MECARD:",
        "MEBKM:;;",
        "MATMSG:",
        "BEGIN:VCARD is not at line start? no it is",
        "geo:,,",
        "sms:",
        "urlto:",
        "\\",
        "\u{FEFF}",
        "日本語のテキスト",
        "a\tb",
        ":::",
        "BIZCARD:",
        "tel:",
    ];
    for text in junk {
        for symbology in [Symbology::QrCode, Symbology::Ean13, Symbology::UpcE] {
            let result = classify(&RawPayload::new(text, symbology), &cfg())
                .expect("classification is total over payloads");
            // Whatever the category, the display string is ready to show.
            let _ = result.display();
        }
    }
}

#[test]
fn text_results_reclassify_to_themselves() {
    for text in ["plain words here", "12345", "Hi.", ""] {
        let first = classify(&RawPayload::new(text, Symbology::QrCode), &cfg())
            .expect("classification is total over payloads");
        assert_eq!(first.category(), ResultCategory::Text);
        let second = classify(&RawPayload::new(first.display(), Symbology::QrCode), &cfg())
            .expect("classification is total over payloads");
        assert_eq!(first, second);
    }
}

#[test]
fn mecard_key_order_is_irrelevant() {
    let permutations = [
        "MECARD:N:Sean Owen;TEL:+12125551212;EMAIL:srowen@example.org;URL:google.com;;",
        "MECARD:TEL:+12125551212;N:Sean Owen;URL:google.com;EMAIL:srowen@example.org;;",
        "MECARD:URL:google.com;EMAIL:srowen@example.org;TEL:+12125551212;N:Sean Owen;;",
        "MECARD:EMAIL:srowen@example.org;URL:google.com;N:Sean Owen;TEL:+12125551212;;",
    ];
    let displays: Vec<String> = permutations
        .iter()
        .map(|text| {
            classify(&RawPayload::new(*text, Symbology::QrCode), &cfg())
                .expect("classification is total over payloads")
                .display()
                .to_string()
        })
        .collect();
    for display in &displays {
        assert_eq!(display, &displays[0]);
    }
}

#[test]
fn calendar_needs_an_explicit_formatter() {
    let event = RawPayload::new(
        "BEGIN:VEVENT\r\nSUMMARY:foo\r\nDTSTART:20080504\r\nEND:VEVENT",
        Symbology::QrCode,
    );
    let outcome = classify(&event, &ClassifyConfig::default());
    assert_eq!(outcome, Err(ClassifyError::MissingEventTimeFormatter));

    // Everything that is not a calendar event classifies fine without one.
    let other = RawPayload::new("geo:1,2", Symbology::QrCode);
    let result = classify(&other, &ClassifyConfig::default())
        .expect("non-calendar payloads need no formatter");
    assert_eq!(result.category(), ResultCategory::Geo);
}

#[test]
fn results_round_trip_through_json() {
    let payloads = [
        ("MECARD:N:Sean Owen;TEL:+12125551212;;", Symbology::QrCode),
        ("geo:80.33,-32.3344,3.35", Symbology::QrCode),
        ("9780201633610", Symbology::Ean13),
        ("BEGIN:VEVENT\r\nSUMMARY:foo\r\nDTSTART:20080504T123456Z\r\nEND:VEVENT", Symbology::QrCode),
        ("just text", Symbology::QrCode),
    ];
    for (text, symbology) in payloads {
        let result = classify(&RawPayload::new(text, symbology), &cfg())
            .expect("classification is total over payloads");
        let json = serde_json::to_string(&result).expect("results serialize");
        let back: ParsedResult = serde_json::from_str(&json).expect("results deserialize");
        assert_eq!(result, back, "round trip for {text:?}");
    }
}

#[test]
fn identical_inputs_give_identical_results() {
    let payload = RawPayload::new("MEBKM:URL:google.com;TITLE:Google;;", Symbology::QrCode);
    let a = classify(&payload, &cfg()).expect("classification is total over payloads");
    let b = classify(&payload, &cfg()).expect("classification is total over payloads");
    assert_eq!(a, b);
}
