// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scalar text conversion.

use serde_json::Value;

/// Text form of a resolved node.
///
/// Strings render as their content, every other scalar as its literal JSON
/// text (`null` included). Containers render as compact JSON; mappings are
/// expected to terminate at scalars, so that arm is a fallback rather than
/// a contract.
#[must_use]
pub fn text_form(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_renders_unquoted() {
        assert_eq!(text_form(&json!("A1")), "A1");
    }

    #[test]
    fn test_scalars_render_as_literal_text() {
        assert_eq!(text_form(&json!(42)), "42");
        assert_eq!(text_form(&json!(2.5)), "2.5");
        assert_eq!(text_form(&json!(true)), "true");
        assert_eq!(text_form(&json!(null)), "null");
    }

    #[test]
    fn test_containers_render_as_compact_json() {
        assert_eq!(text_form(&json!({"a": 1})), r#"{"a":1}"#);
        assert_eq!(text_form(&json!([1, 2])), "[1,2]");
    }
}
