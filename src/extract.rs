//! Projection of a sub-value out of a parsed body.
//!
//! The projection is a configured closure over the parsed value. Its error
//! handling is deliberately asymmetric:
//!
//! - returning `Ok(None)` falls back to the **parsed** body unchanged;
//! - an [`ProjectionError::Encoding`] failure is fatal and surfaces as
//!   [`Error::Extract`](crate::errors::Error::Extract);
//! - any other failure is swallowed and falls back to the **raw** body
//!   string as received on the wire, not the parsed value.

use std::sync::Arc;

use serde_json::Value;

use crate::errors::Error;

/// How a projection closure can fail.
#[derive(Debug, Clone)]
pub enum ProjectionError {
    /// Encoding-class failure: the projection is fundamentally incompatible
    /// with the body encoding. Never swallowed.
    Encoding(String),
    /// Anything else. Swallowed with a raw-body fallback.
    Other(String),
}

/// Configured projection from a parsed body to an optional sub-value.
pub type Projection = Arc<dyn Fn(&Value) -> Result<Option<Value>, ProjectionError> + Send + Sync>;

/// The default projection: hand the parsed body back unchanged.
pub fn identity() -> Projection {
    Arc::new(|value| Ok(Some(value.clone())))
}

/// Applies `projection` to `parsed` with the fallback policy above.
pub fn extract(parsed: Value, raw_body: &str, projection: &Projection) -> Result<Value, Error> {
    match projection(&parsed) {
        Ok(Some(value)) => Ok(value),
        Ok(None) => Ok(parsed),
        Err(ProjectionError::Encoding(msg)) => Err(Error::Extract(msg)),
        Err(ProjectionError::Other(msg)) => {
            log::warn!("projection failed ({msg}), falling back to the raw body");
            Ok(Value::String(raw_body.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field(name: &'static str) -> Projection {
        Arc::new(move |v| Ok(v.get(name).cloned()))
    }

    #[test]
    fn projection_result_is_returned() {
        let parsed = json!({"result": {"id": 1}});
        let out = extract(parsed, "{}", &field("result")).unwrap();
        assert_eq!(out, json!({"id": 1}));
    }

    #[test]
    fn null_projection_falls_back_to_the_parsed_body() {
        let parsed = json!({"id": 1, "name": "John"});
        let out = extract(parsed.clone(), "{}", &field("result")).unwrap();
        assert_eq!(out, parsed);
    }

    #[test]
    fn identity_is_a_no_op() {
        let parsed = json!([1, 2, 3]);
        assert_eq!(extract(parsed.clone(), "[]", &identity()).unwrap(), parsed);
    }

    #[test]
    fn encoding_errors_propagate() {
        let boom: Projection =
            Arc::new(|_| Err(ProjectionError::Encoding("bad byte sequence".into())));
        match extract(json!({}), "{}", &boom) {
            Err(Error::Extract(msg)) => assert_eq!(msg, "bad byte sequence"),
            other => panic!("expected Extract error, got {other:?}"),
        }
    }

    #[test]
    fn other_errors_fall_back_to_the_raw_body_string() {
        let boom: Projection = Arc::new(|_| Err(ProjectionError::Other("whoops".into())));
        let raw = r#"{"id": 1}"#;
        let out = extract(json!({"id": 1}), raw, &boom).unwrap();
        // Raw string, not the parsed value.
        assert_eq!(out, Value::String(raw.to_string()));
    }
}
