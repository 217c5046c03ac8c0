//! Configuration document returned by the settings page.
//!
//! The webview hands back a URL-encoded JSON object naming a color for
//! each hand. Decoding and parsing happen here; nothing downstream runs
//! on a malformed result.

use crate::color::{ColorParseError, Rgb};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The JSON object produced by the configuration page.
///
/// Extra keys in the document are ignored; a missing color key is a
/// parse error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    pub minute_hand_color: String,
    pub hour_hand_color: String,
}

/// Which hand a color belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Minute,
    Hour,
}

impl Hand {
    pub fn as_str(self) -> &'static str {
        match self {
            Hand::Minute => "minute",
            Hand::Hour => "hour",
        }
    }
}

/// Error decoding or parsing a configuration result
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The webview response was not valid percent-encoded UTF-8
    #[error("invalid percent-encoding in webview response: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
    /// The decoded response was not the expected JSON object
    #[error("malformed configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A color string failed channel parsing
    #[error("invalid {} hand color: {source}", .hand.as_str())]
    Color {
        hand: Hand,
        source: ColorParseError,
    },
}

impl ConfigDocument {
    /// Decode a raw webview response into a configuration document.
    ///
    /// The response is percent-decoded, then parsed as a JSON object.
    /// Malformed encoding, malformed JSON, a non-object result and
    /// missing keys all fail here.
    pub fn from_webview_response(raw: &str) -> Result<Self, ConfigError> {
        let decoded = urlencoding::decode(raw)?;

        // Parse as an object explicitly; the derived struct
        // deserializer alone would also accept a JSON sequence,
        // filling the fields positionally.
        let object: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&decoded)?;
        let document = serde_json::from_value(serde_json::Value::Object(object))?;
        Ok(document)
    }
}

/// The fully parsed configuration: one color per hand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandColors {
    pub minute: Rgb,
    pub hour: Rgb,
}

impl TryFrom<&ConfigDocument> for HandColors {
    type Error = ConfigError;

    fn try_from(document: &ConfigDocument) -> Result<Self, Self::Error> {
        let minute = Rgb::parse_prefixed(&document.minute_hand_color)
            .map_err(|source| ConfigError::Color {
                hand: Hand::Minute,
                source,
            })?;
        let hour =
            Rgb::parse_prefixed(&document.hour_hand_color).map_err(|source| ConfigError::Color {
                hand: Hand::Hour,
                source,
            })?;
        Ok(Self { minute, hour })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(json: &str) -> String {
        urlencoding::encode(json).into_owned()
    }

    #[test]
    fn test_from_webview_response() {
        let raw = encoded(r#"{"minute_hand_color":"0x1A2B3C","hour_hand_color":"0xFFFFFF"}"#);
        let document = ConfigDocument::from_webview_response(&raw).unwrap();
        assert_eq!(document.minute_hand_color, "0x1A2B3C");
        assert_eq!(document.hour_hand_color, "0xFFFFFF");
    }

    #[test]
    fn test_from_webview_response_extra_keys_ignored() {
        let raw = encoded(
            r#"{"minute_hand_color":"0x000000","hour_hand_color":"0x000000","background":"dark"}"#,
        );
        let document = ConfigDocument::from_webview_response(&raw).unwrap();
        assert_eq!(document.minute_hand_color, "0x000000");
    }

    #[test]
    fn test_from_webview_response_missing_key() {
        let raw = encoded(r#"{"minute_hand_color":"0x000000"}"#);
        let err = ConfigDocument::from_webview_response(&raw).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_from_webview_response_malformed_json() {
        let raw = encoded(r#"{"minute_hand_color""#);
        let err = ConfigDocument::from_webview_response(&raw).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_from_webview_response_not_an_object() {
        // A sequence would otherwise fill the struct fields positionally
        let raw = encoded(r#"["0x000000","0xFFFFFF"]"#);
        let err = ConfigDocument::from_webview_response(&raw).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));

        let raw = encoded(r#""0x000000""#);
        let err = ConfigDocument::from_webview_response(&raw).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_from_webview_response_bad_percent_encoding() {
        // %FF%FE is not valid UTF-8 once decoded
        let err = ConfigDocument::from_webview_response("%FF%FE").unwrap_err();
        assert!(matches!(err, ConfigError::Decode(_)));
    }

    #[test]
    fn test_hand_colors_try_from() {
        let document = ConfigDocument {
            minute_hand_color: "0xFFFFFF".to_string(),
            hour_hand_color: "0x000000".to_string(),
        };
        let colors = HandColors::try_from(&document).unwrap();
        assert_eq!(
            colors.minute,
            Rgb {
                r: 255,
                g: 255,
                b: 255
            }
        );
        assert_eq!(colors.hour, Rgb { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_hand_colors_reports_failing_hand() {
        let document = ConfigDocument {
            minute_hand_color: "0xFFFFFF".to_string(),
            hour_hand_color: "0xXYZXYZ".to_string(),
        };
        let err = HandColors::try_from(&document).unwrap_err();
        match err {
            ConfigError::Color { hand, .. } => assert_eq!(hand, Hand::Hour),
            other => panic!("Expected color error, got {other:?}"),
        }
    }
}
