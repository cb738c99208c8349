use serde_json::Value;

/// The six kinds of the JSON value model.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

pub(crate) fn value_kind(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Bool,
        Value::Number(_) => ValueKind::Number,
        Value::String(_) => ValueKind::String,
        Value::Array(_) => ValueKind::Array,
        Value::Object(_) => ValueKind::Object,
    }
}

/// Structural equality: kind and full nested content must match.
///
/// Equivalent to comparing canonical serializations: `serde_json`
/// already canonicalizes number widths on construction, and object
/// comparison is key-order independent (the default map is sorted), so
/// formatting differences in whatever produced the values never reach
/// this point.
pub(crate) fn values_equal(a: &Value, b: &Value) -> bool {
    a == b
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(value_kind(&json!(null)), ValueKind::Null);
        assert_eq!(value_kind(&json!(true)), ValueKind::Bool);
        assert_eq!(value_kind(&json!(1.5)), ValueKind::Number);
        assert_eq!(value_kind(&json!("a")), ValueKind::String);
        assert_eq!(value_kind(&json!([])), ValueKind::Array);
        assert_eq!(value_kind(&json!({})), ValueKind::Object);
    }

    #[test]
    fn nested_equality() {
        let a = json!({"x": [1, {"y": null}]});
        let b = json!({"x": [1, {"y": null}]});
        assert!(values_equal(&a, &b));

        let c = json!({"x": [1, {"y": 0}]});
        assert!(!values_equal(&a, &c));
    }

    #[test]
    fn integer_widths_are_canonical() {
        // u32 and u64 sources collapse to the same number.
        let a = serde_json::to_value(1u32).unwrap();
        let b = serde_json::to_value(1u64).unwrap();
        assert!(values_equal(&a, &b));
    }
}
