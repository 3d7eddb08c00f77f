use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::error::{MlboardError, Result};

/// Decode a job log blob into its lines.
///
/// The gateway serves log payloads either as raw text or wrapped in a base64
/// data URI; the `data:…;base64,` prefix is stripped and the remainder
/// decoded before the text is split on newlines.
pub fn decode_log_blob(blob: &[u8]) -> Result<Vec<String>> {
    let text = std::str::from_utf8(blob)
        .map_err(|e| MlboardError::LogDecode(format!("log is not valid UTF-8: {e}")))?;

    let text = match data_uri_payload(text) {
        Some(encoded) => {
            let raw = BASE64
                .decode(encoded.trim_end())
                .map_err(|e| MlboardError::LogDecode(format!("invalid base64 payload: {e}")))?;
            String::from_utf8(raw).map_err(|e| {
                MlboardError::LogDecode(format!("decoded log is not valid UTF-8: {e}"))
            })?
        }
        None => text.to_string(),
    };

    Ok(text.split('\n').map(str::to_string).collect())
}

/// Returns the base64 payload of a data URI, or `None` for plain text.
fn data_uri_payload(text: &str) -> Option<&str> {
    let rest = text.strip_prefix("data:")?;
    let (_, payload) = rest.split_once(";base64,")?;
    Some(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_plain_text_blob() {
        let lines = decode_log_blob(b"line one\nline two\n").unwrap();
        assert_eq!(lines, vec!["line one", "line two", ""]);
    }

    #[test]
    fn test_decodes_data_uri_blob() {
        // "first\nsecond" base64-encoded
        let blob = b"data:application/octet-stream;base64,Zmlyc3QKc2Vjb25k";
        let lines = decode_log_blob(blob).unwrap();
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_invalid_base64_payload_is_a_decode_error() {
        let blob = b"data:application/octet-stream;base64,@@not-base64@@";
        let result = decode_log_blob(blob);
        assert!(matches!(result, Err(MlboardError::LogDecode(_))));
    }

    #[test]
    fn test_invalid_utf8_blob_is_a_decode_error() {
        let result = decode_log_blob(&[0xff, 0xfe, 0x00]);
        assert!(matches!(result, Err(MlboardError::LogDecode(_))));
    }

    #[test]
    fn test_non_data_uri_prefix_is_treated_as_text() {
        let lines = decode_log_blob(b"data without the uri shape").unwrap();
        assert_eq!(lines, vec!["data without the uri shape"]);
    }
}
