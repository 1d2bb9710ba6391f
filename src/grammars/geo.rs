//! `geo:` coordinate URIs.

use crate::config::ClassifyConfig;
use crate::result::{GeoResult, ParsedResult};
use crate::types::RawPayload;

use super::{strip_prefix_ci, Outcome};

pub(crate) fn parse(payload: &RawPayload, _cfg: &ClassifyConfig) -> Outcome {
    let Some(rest) = strip_prefix_ci(&payload.text, "geo:") else {
        return Ok(None);
    };
    let mut parts = rest.split(',');
    let latitude = parts.next().and_then(|p| p.parse::<f64>().ok());
    let longitude = parts.next().and_then(|p| p.parse::<f64>().ok());
    let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
        return Ok(None);
    };
    let altitude = match parts.next() {
        Some(part) => match part.parse::<f64>() {
            Ok(altitude) => Some(altitude),
            Err(_) => return Ok(None),
        },
        None => None,
    };
    if parts.next().is_some() {
        return Ok(None);
    }
    Ok(Some(ParsedResult::Geo(GeoResult::new(
        latitude, longitude, altitude,
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Symbology;

    fn parse_text(text: &str) -> Option<ParsedResult> {
        parse(
            &RawPayload::new(text, Symbology::QrCode),
            &ClassifyConfig::default(),
        )
        .expect("grammar is pure")
    }

    #[test]
    fn two_and_three_component_forms() {
        assert_eq!(parse_text("geo:1,2").expect("matches").display(), "1.0, 2.0");
        assert_eq!(
            parse_text("GEO:1,2,3").expect("matches").display(),
            "1.0, 2.0, 3.0m"
        );
        assert_eq!(
            parse_text("geo:80.33,-32.3344,3.35").expect("matches").display(),
            "80.33, -32.3344, 3.35m"
        );
    }

    #[test]
    fn malformed_coordinates_decline() {
        assert_eq!(parse_text("geo:1"), None);
        assert_eq!(parse_text("geo:1,north"), None);
        assert_eq!(parse_text("geo:1,2,3,4"), None);
        assert_eq!(parse_text("geography"), None);
    }
}
