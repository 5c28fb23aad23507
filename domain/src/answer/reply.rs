//! Decoded reply from the ask endpoint

use serde_json::Value;

/// Body returned by the ask endpoint (Value Object)
///
/// Both fields are optional on the wire. A field is kept when it holds a
/// truthy scalar: a non-empty string, a non-zero number or `true`. Numbers
/// and `true` are kept as their JSON text. Anything else is stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AskReply {
    pub answer: Option<String>,
    pub error: Option<String>,
}

impl AskReply {
    pub fn answer(text: impl Into<String>) -> Self {
        Self {
            answer: Some(text.into()),
            error: None,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            answer: None,
            error: Some(text.into()),
        }
    }

    /// Build a reply from an arbitrary JSON value.
    ///
    /// Returns `None` only for `null`. Any other value that is not an object
    /// carries no fields and decodes to an empty reply.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Object(object) => Some(Self {
                answer: Self::field_text(object.get("answer")),
                error: Self::field_text(object.get("error")),
            }),
            _ => Some(Self::default()),
        }
    }

    fn field_text(value: Option<&Value>) -> Option<String> {
        match value? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
            Value::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_answer() {
        let reply = AskReply::from_json(&json!({"answer": "Be calm."})).unwrap();
        assert_eq!(reply, AskReply::answer("Be calm."));
    }

    #[test]
    fn test_from_json_error() {
        let reply = AskReply::from_json(&json!({"error": "No question provided"})).unwrap();
        assert_eq!(reply, AskReply::error("No question provided"));
    }

    #[test]
    fn test_from_json_ignores_falsy_fields() {
        let reply = AskReply::from_json(&json!({"answer": "", "error": 0, "extra": true})).unwrap();
        assert_eq!(reply, AskReply::default());

        let reply = AskReply::from_json(&json!({"answer": null, "error": false})).unwrap();
        assert_eq!(reply, AskReply::default());

        let reply = AskReply::from_json(&json!({"answer": ["a"], "error": {}})).unwrap();
        assert_eq!(reply, AskReply::default());
    }

    #[test]
    fn test_from_json_keeps_truthy_scalars_as_text() {
        let reply = AskReply::from_json(&json!({"answer": 42})).unwrap();
        assert_eq!(reply, AskReply::answer("42"));

        let reply = AskReply::from_json(&json!({"error": true})).unwrap();
        assert_eq!(reply, AskReply::error("true"));

        let reply = AskReply::from_json(&json!({"answer": -1.5})).unwrap();
        assert_eq!(reply, AskReply::answer("-1.5"));
    }

    #[test]
    fn test_from_json_non_object_values_carry_no_fields() {
        assert_eq!(AskReply::from_json(&json!(["answer"])), Some(AskReply::default()));
        assert_eq!(AskReply::from_json(&json!("answer")), Some(AskReply::default()));
        assert_eq!(AskReply::from_json(&json!(7)), Some(AskReply::default()));
    }

    #[test]
    fn test_from_json_null_is_rejected() {
        assert!(AskReply::from_json(&json!(null)).is_none());
    }
}
