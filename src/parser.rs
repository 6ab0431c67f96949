//! Body parsing strategy.
//!
//! The pipeline treats the parser as a black box behind [`BodyParser`];
//! the default [`JsonParser`] delegates to serde_json.

use serde_json::Value;

use crate::errors::Error;

/// Turns a raw body string into a structured value.
pub trait BodyParser: Send + Sync {
    fn parse(&self, raw: &str) -> Result<Value, Error>;
}

/// Default parser: strict JSON via serde_json.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonParser;

impl BodyParser for JsonParser {
    fn parse(&self, raw: &str) -> Result<Value, Error> {
        serde_json::from_str(raw).map_err(|e| Error::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_objects_arrays_and_scalars() {
        let p = JsonParser;
        assert_eq!(p.parse(r#"{"id": 1}"#).unwrap(), json!({"id": 1}));
        assert_eq!(p.parse(r#"[1, 2, 3]"#).unwrap(), json!([1, 2, 3]));
        assert_eq!(p.parse(r#""John""#).unwrap(), json!("John"));
        assert_eq!(p.parse("null").unwrap(), Value::Null);
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let p = JsonParser;
        assert!(matches!(p.parse("Not found"), Err(Error::Parse(_))));
        assert!(matches!(p.parse(r#"{"id"": 1}"#), Err(Error::Parse(_))));
    }
}
