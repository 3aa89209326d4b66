//! Description of dynamic values for the object-table variant.
//!
//! An [`ObjectTable`](crate::ObjectTable) cell shows two things about a
//! value: the label of its runtime type and its textual form. Both are fixed
//! at entry-construction time so that rendering never has to reason about
//! missing data — absent values are normalized here to the `"(n/a)"` and
//! `"(null)"` placeholders.

use serde_json::Value;

/// Placeholder shown in place of a missing value.
pub const NULL_TEXT: &str = "(null)";

/// Placeholder shown as the type label of a missing value.
pub const NA_TEXT: &str = "(n/a)";

/// A value paired with the label of its runtime type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DescribedValue {
    type_label: String,
    display_text: String,
}

impl DescribedValue {
    /// Derives the type label and display text for a dynamic value.
    ///
    /// Null values yield `"(n/a)"` / `"(null)"`. Arrays render as a
    /// bracketed, comma-joined list of their elements' textual forms.
    /// Everything else uses its default textual representation, with
    /// strings shown bare rather than quoted.
    pub fn describe(raw: &Value) -> Self {
        match raw {
            Value::Null => DescribedValue {
                type_label: NA_TEXT.to_string(),
                display_text: NULL_TEXT.to_string(),
            },
            Value::Array(items) => DescribedValue {
                type_label: type_label_of(raw).to_string(),
                display_text: bracketed(items),
            },
            other => DescribedValue {
                type_label: type_label_of(other).to_string(),
                display_text: plain_text(other),
            },
        }
    }

    /// Label of the value's runtime type, or `"(n/a)"` if it was absent.
    pub fn type_label(&self) -> &str {
        &self.type_label
    }

    /// Textual form of the value, or `"(null)"` if it was absent.
    pub fn display_text(&self) -> &str {
        &self.display_text
    }
}

impl From<&Value> for DescribedValue {
    fn from(raw: &Value) -> Self {
        DescribedValue::describe(raw)
    }
}

fn type_label_of(value: &Value) -> &'static str {
    match value {
        Value::Null => NA_TEXT,
        Value::Bool(_) => "Bool",
        Value::Number(_) => "Number",
        Value::String(_) => "String",
        Value::Array(_) => "Array",
        Value::Object(_) => "Object",
    }
}

/// Textual form of a single value: strings render bare, everything else
/// through its JSON form.
fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn bracketed(items: &[Value]) -> String {
    let mut out = String::from("[");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&plain_text(item));
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn describes_null() {
        let described = DescribedValue::describe(&Value::Null);
        assert_eq!(described.type_label(), "(n/a)");
        assert_eq!(described.display_text(), "(null)");
    }

    #[test]
    fn describes_string_bare() {
        let described = DescribedValue::describe(&json!("alice"));
        assert_eq!(described.type_label(), "String");
        assert_eq!(described.display_text(), "alice");
    }

    #[test]
    fn describes_number_and_bool() {
        let number = DescribedValue::describe(&json!(42));
        assert_eq!(number.type_label(), "Number");
        assert_eq!(number.display_text(), "42");

        let flag = DescribedValue::describe(&json!(true));
        assert_eq!(flag.type_label(), "Bool");
        assert_eq!(flag.display_text(), "true");
    }

    #[test]
    fn describes_array_as_bracketed_list() {
        let described = DescribedValue::describe(&json!([1, 2, 3]));
        assert_eq!(described.type_label(), "Array");
        assert_eq!(described.display_text(), "[1, 2, 3]");
    }

    #[test]
    fn describes_mixed_array() {
        let described = DescribedValue::describe(&json!(["a", 1, null]));
        assert_eq!(described.display_text(), "[a, 1, null]");
    }

    #[test]
    fn describes_empty_array() {
        let described = DescribedValue::describe(&json!([]));
        assert_eq!(described.display_text(), "[]");
    }

    #[test]
    fn describes_object_as_json() {
        let described = DescribedValue::describe(&json!({"k": "v"}));
        assert_eq!(described.type_label(), "Object");
        assert_eq!(described.display_text(), r#"{"k":"v"}"#);
    }

    #[test]
    fn from_ref_matches_describe() {
        let raw = json!([true, false]);
        assert_eq!(DescribedValue::from(&raw), DescribedValue::describe(&raw));
    }
}
