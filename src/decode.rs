//! JSON body decoding.
//!
//! Pure and synchronous: bytes in, value out. Fetching and decoding are
//! separate steps so callers that want the raw body never pay for a parse.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use snafu::{ResultExt as _, Snafu};

/// Deserializes `body` into `T`.
///
/// # Errors
///
/// Returns [`DecodeError::Json`] when the bytes are not valid JSON for `T`.
pub fn json<T: DeserializeOwned>(body: &Bytes) -> Result<T, DecodeError> {
    serde_json::from_slice(body).context(JsonSnafu)
}

/// Loosely parses `body` as a JSON object.
///
/// Returns `None` when the bytes are anything other than a JSON object,
/// without saying why. Useful for peeking at a payload whose shape is not
/// known up front; prefer [`json`] when it is.
#[must_use]
pub fn json_object(body: &Bytes) -> Option<Map<String, Value>> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Errors produced when decoding a response body.
#[derive(Debug, Snafu)]
pub enum DecodeError {
    /// The body was not valid JSON for the requested type.
    #[snafu(display("body is not valid JSON for the requested type"))]
    Json {
        /// The deserializer's error.
        source: serde_json::Error,
    },
}

impl crate::Error for DecodeError {
    fn is_retryable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Post {
        id: u64,
        title: String,
    }

    #[test]
    fn valid_json_decodes() {
        let body = Bytes::from_static(br#"{"id":1,"title":"hello"}"#);
        let post: Post = json(&body).unwrap();
        assert_eq!(
            post,
            Post {
                id: 1,
                title: "hello".to_owned()
            }
        );
    }

    #[test]
    fn malformed_json_is_reported() {
        let body = Bytes::from_static(b"{id: 1");
        let err = json::<Post>(&body).unwrap_err();
        assert!(matches!(err, DecodeError::Json { .. }));
    }

    #[test]
    fn mismatched_shape_is_reported() {
        let body = Bytes::from_static(br#"{"id":"one","title":"hello"}"#);
        assert!(json::<Post>(&body).is_err());
    }

    #[test]
    fn loose_parse_yields_object() {
        let body = Bytes::from_static(br#"{"id":1,"nested":{"a":true}}"#);
        let object = json_object(&body).unwrap();
        assert_eq!(object.get("id"), Some(&Value::from(1)));
    }

    #[test]
    fn loose_parse_rejects_non_objects() {
        assert!(json_object(&Bytes::from_static(b"[1,2,3]")).is_none());
        assert!(json_object(&Bytes::from_static(b"not json")).is_none());
    }
}
