//! DoCoMo bookmark records: `MEBKM:URL:...;TITLE:...;;`.

use crate::config::ClassifyConfig;
use crate::fields::scan_fields;
use crate::result::{ParsedResult, UriResult};
use crate::types::RawPayload;
use crate::uri;

use super::{non_empty, strip_prefix_ci, Outcome};

pub(crate) fn parse(payload: &RawPayload, _cfg: &ClassifyConfig) -> Outcome {
    let Some(body) = strip_prefix_ci(&payload.text, "MEBKM:") else {
        return Ok(None);
    };
    let mut url = None;
    let mut title = None;
    for field in scan_fields(body) {
        match field.key.as_str() {
            "URL" if url.is_none() => url = Some(field.value),
            "TITLE" if title.is_none() => title = non_empty(field.value),
            _ => {}
        }
    }
    let Some(url) = url else {
        return Ok(None);
    };
    Ok(Some(ParsedResult::Uri(UriResult::new(
        title,
        uri::massage(&url),
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Symbology;

    fn parse_text(text: &str) -> Outcome {
        parse(
            &RawPayload::new(text, Symbology::QrCode),
            &ClassifyConfig::default(),
        )
    }

    #[test]
    fn url_is_mandatory() {
        assert_eq!(parse_text("MEBKM:TITLE:Google;;").expect("grammar is pure"), None);
    }

    #[test]
    fn title_position_does_not_matter() {
        let a = parse_text("MEBKM:URL:google.com;TITLE:Google;;").expect("grammar is pure");
        let b = parse_text("MEBKM:TITLE:Google;URL:google.com;;").expect("grammar is pure");
        assert_eq!(a, b);
        let result = a.expect("bookmark matches");
        assert_eq!(result.display(), "Google\nhttp://google.com");
    }

    #[test]
    fn existing_scheme_is_left_alone() {
        let result = parse_text("MEBKM:URL:HTTPS://google.com;;")
            .expect("grammar is pure")
            .expect("bookmark matches");
        assert_eq!(result.display(), "HTTPS://google.com");
    }
}
