//! Dynamic record data

use serde_json::Value;

/// One row of dynamic key-value data
///
/// Records are plain JSON objects; the grid never validates their
/// shape. A key referenced by a column but absent from the record
/// resolves to null and renders as an empty cell.
pub type Record = serde_json::Map<String, Value>;

/// Format a JSON value for display in a grid cell
///
/// Nulls display as empty text and strings display without quotes;
/// everything else uses its compact JSON form.
///
/// # Examples
///
/// ```
/// use datagrid::record::display_value;
/// use serde_json::json;
///
/// assert_eq!(display_value(&json!(null)), "");
/// assert_eq!(display_value(&json!("John")), "John");
/// assert_eq!(display_value(&json!(42)), "42");
/// assert_eq!(display_value(&json!(true)), "true");
/// ```
pub fn display_value(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}
