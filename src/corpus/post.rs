use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// One line of a collected stream. Only `text` is used; everything else the
/// collector stored (author, timestamps, counts) is ignored.
#[derive(Debug, PartialEq, Eq, Clone, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub text: Option<String>,
}

impl Post {
    /// Parses one raw record and returns its text. Records must be JSON
    /// objects; arrays and scalars are rejected.
    pub fn parse_text(line: &[u8]) -> Result<String> {
        let record: Map<String, Value> = serde_json::from_slice(line)?;
        let post: Self = serde_json::from_value(Value::Object(record))?;

        post.text.ok_or(Error::MissingField("text"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_fields_ignored() {
        let line =
            br#"{"created_at": "Mon", "text": "hello :)", "retweet_count": 3, "user": {"id": 1}}"#;

        assert_eq!(
            Post::parse_text(line).expect("Failed to parse post"),
            "hello :)"
        );
    }

    #[test]
    fn missing_text() {
        let result = Post::parse_text(br#"{"limit": {"track": 12}}"#);

        assert!(matches!(result, Err(Error::MissingField("text"))));
    }

    #[test]
    fn null_or_non_string_text() {
        assert!(matches!(
            Post::parse_text(br#"{"text": null}"#),
            Err(Error::MissingField("text"))
        ));
        assert!(matches!(
            Post::parse_text(br#"{"text": 42}"#),
            Err(Error::SerdeJson(_))
        ));
    }

    #[test]
    fn malformed() {
        assert!(matches!(
            Post::parse_text(b"{\"text\": \"unterminated"),
            Err(Error::SerdeJson(_))
        ));
        assert!(matches!(
            Post::parse_text(b"{\"text\": \"\xff\xfe\"}"),
            Err(Error::SerdeJson(_))
        ));
    }

    #[test]
    fn non_object_records() {
        for line in [&br#"["x"]"#[..], br#"["hello world"]"#, br#""text""#, b"42", b"null"] {
            assert!(
                matches!(Post::parse_text(line), Err(Error::SerdeJson(_))),
                "{} should be rejected",
                String::from_utf8_lossy(line)
            );
        }
    }
}
