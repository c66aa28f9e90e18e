use serde::Deserialize;
use serde_json::Value;

pub const FALLBACK_REJECTION_MESSAGE: &str = "Failed to summarize";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

/// Human-readable message for a non-success response body.
///
/// Uses the JSON `detail` field: strings as-is, other values as compact JSON.
/// Anything else falls back to [`FALLBACK_REJECTION_MESSAGE`].
pub fn rejection_message(body: &[u8]) -> String {
    let detail = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.detail);

    match detail {
        Some(Value::String(text)) if !text.is_empty() => text,
        Some(Value::String(_)) | Some(Value::Null) | None => {
            FALLBACK_REJECTION_MESSAGE.to_string()
        }
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{rejection_message, FALLBACK_REJECTION_MESSAGE};

    #[test]
    fn string_detail_is_used() {
        let body = br#"{"detail": "Could not extract text from document."}"#;
        assert_eq!(
            rejection_message(body),
            "Could not extract text from document."
        );
    }

    #[test]
    fn missing_or_empty_detail_falls_back() {
        assert_eq!(rejection_message(b"{}"), FALLBACK_REJECTION_MESSAGE);
        assert_eq!(
            rejection_message(br#"{"detail": null}"#),
            FALLBACK_REJECTION_MESSAGE
        );
        assert_eq!(
            rejection_message(br#"{"detail": ""}"#),
            FALLBACK_REJECTION_MESSAGE
        );
    }

    #[test]
    fn non_json_body_falls_back() {
        assert_eq!(
            rejection_message(b"Internal Server Error"),
            FALLBACK_REJECTION_MESSAGE
        );
        assert_eq!(rejection_message(b""), FALLBACK_REJECTION_MESSAGE);
    }

    #[test]
    fn structured_detail_rendered_as_json() {
        let body = br#"{"detail": [{"loc": ["body", "file"], "msg": "Field required"}]}"#;
        assert_eq!(
            rejection_message(body),
            r#"[{"loc":["body","file"],"msg":"Field required"}]"#
        );
    }
}
