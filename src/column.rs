//! Column definitions
//!
//! A [`DataColumn`] is an immutable configuration value describing how
//! one table column derives its header label, its cell content, and
//! its cell attributes from each record. Definitions are built once
//! with consuming fluent methods and consumed read-only while
//! rendering.

use crate::record::{Record, display_value};
use crate::text::humanize_field_name;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A cell value source: a constant or a per-record resolver
#[derive(Clone)]
pub enum CellValue {
	/// The same value for every record
	Const(Value),
	/// A value computed from the record
	With(Arc<dyn Fn(&Record) -> Value + Send + Sync>),
}

impl CellValue {
	/// Resolves the value for one record
	pub fn resolve(&self, record: &Record) -> Value {
		match self {
			Self::Const(value) => value.clone(),
			Self::With(resolver) => resolver(record),
		}
	}
}

impl fmt::Debug for CellValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Const(value) => f.debug_tuple("Const").field(value).finish(),
			Self::With(_) => f.write_str("With(..)"),
		}
	}
}

/// An HTML attribute value source: a constant or a per-record resolver
#[derive(Clone)]
pub enum AttrValue {
	/// The same attribute value for every record
	Const(String),
	/// An attribute value computed from the record
	With(Arc<dyn Fn(&Record) -> String + Send + Sync>),
}

impl AttrValue {
	/// Resolves the attribute value for one record
	pub fn resolve(&self, record: &Record) -> String {
		match self {
			Self::Const(value) => value.clone(),
			Self::With(resolver) => resolver(record),
		}
	}
}

impl fmt::Debug for AttrValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Const(value) => f.debug_tuple("Const").field(value).finish(),
			Self::With(_) => f.write_str("With(..)"),
		}
	}
}

/// Resolved cell content
///
/// `Markup` comes from a `content` resolver and is emitted verbatim;
/// `Text` is HTML-escaped by the row renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
	/// Pre-rendered markup, emitted as-is
	Markup(String),
	/// Plain text derived from a value or record attribute
	Text(String),
}

/// Configuration for one grid column
///
/// # Examples
///
/// ```
/// use datagrid::DataColumn;
///
/// let column = DataColumn::new()
/// 	.attribute("created_at")
/// 	.with_sorting(false);
/// assert_eq!(column.label_text(), "Created At");
/// assert_eq!(column.sort_field(), None);
/// ```
#[derive(Clone)]
pub struct DataColumn {
	attribute: Option<String>,
	label: Option<String>,
	label_attributes: Vec<(String, String)>,
	value: Option<CellValue>,
	content: Option<Arc<dyn Fn(&Record) -> String + Send + Sync>>,
	content_attributes: Vec<(String, AttrValue)>,
	data_label: Option<String>,
	name: Option<String>,
	with_sorting: bool,
	visible: bool,
}

impl DataColumn {
	/// Creates an empty column definition
	///
	/// Sorting and visibility default to enabled; everything else is
	/// unset. A column with no attribute, value, or content renders an
	/// empty cell.
	pub fn new() -> Self {
		Self {
			attribute: None,
			label: None,
			label_attributes: Vec::new(),
			value: None,
			content: None,
			content_attributes: Vec::new(),
			data_label: None,
			name: None,
			with_sorting: true,
			visible: true,
		}
	}

	/// Sets the record attribute this column reads
	pub fn attribute(mut self, attribute: impl Into<String>) -> Self {
		self.attribute = Some(attribute.into());
		self
	}

	/// Sets an explicit header label
	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Appends static attributes for the header cell
	pub fn label_attributes<N, V>(mut self, attributes: impl IntoIterator<Item = (N, V)>) -> Self
	where
		N: Into<String>,
		V: Into<String>,
	{
		self.label_attributes
			.extend(attributes.into_iter().map(|(n, v)| (n.into(), v.into())));
		self
	}

	/// Sets a constant cell value used for every record
	pub fn value(mut self, value: impl Into<Value>) -> Self {
		self.value = Some(CellValue::Const(value.into()));
		self
	}

	/// Sets a per-record cell value resolver
	pub fn value_with(
		mut self,
		resolver: impl Fn(&Record) -> Value + Send + Sync + 'static,
	) -> Self {
		self.value = Some(CellValue::With(Arc::new(resolver)));
		self
	}

	/// Sets a content resolver producing pre-rendered markup
	///
	/// Overrides `value` and `attribute` entirely. The output is
	/// emitted verbatim; escaping is the resolver's responsibility.
	pub fn content(mut self, resolver: impl Fn(&Record) -> String + Send + Sync + 'static) -> Self {
		self.content = Some(Arc::new(resolver));
		self
	}

	/// Appends static attributes for body cells
	pub fn content_attributes<N, V>(mut self, attributes: impl IntoIterator<Item = (N, V)>) -> Self
	where
		N: Into<String>,
		V: Into<String>,
	{
		self.content_attributes.extend(
			attributes
				.into_iter()
				.map(|(n, v)| (n.into(), AttrValue::Const(v.into()))),
		);
		self
	}

	/// Appends a per-record body cell attribute
	pub fn content_attribute_with(
		mut self,
		name: impl Into<String>,
		resolver: impl Fn(&Record) -> String + Send + Sync + 'static,
	) -> Self {
		self.content_attributes
			.push((name.into(), AttrValue::With(Arc::new(resolver))));
		self
	}

	/// Overrides the body cell `data-label` attribute
	pub fn data_label(mut self, label: impl Into<String>) -> Self {
		self.data_label = Some(label.into());
		self
	}

	/// Sets the body cell `name` attribute
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Enables or disables sort links for this column
	pub fn with_sorting(mut self, sorting: bool) -> Self {
		self.with_sorting = sorting;
		self
	}

	/// Shows or hides the column
	///
	/// Hidden columns are excluded from header and body render passes
	/// entirely.
	pub fn visible(mut self, visible: bool) -> Self {
		self.visible = visible;
		self
	}

	/// Whether the column participates in render passes
	pub fn is_visible(&self) -> bool {
		self.visible
	}

	/// Field this column sorts on, when sorting applies
	///
	/// Sorting requires an attribute; disabling `with_sorting` turns
	/// the header cell into plain text even when a sort context is
	/// present.
	pub fn sort_field(&self) -> Option<&str> {
		if self.with_sorting {
			self.attribute.as_deref()
		} else {
			None
		}
	}

	/// Header label text: the explicit label, else the humanized
	/// attribute name, else empty
	pub fn label_text(&self) -> String {
		match (&self.label, &self.attribute) {
			(Some(label), _) => label.clone(),
			(None, Some(attribute)) => humanize_field_name(attribute),
			(None, None) => String::new(),
		}
	}

	/// Body cell `data-label` text: the explicit override, else the
	/// lower-cased label text
	pub fn data_label_text(&self) -> String {
		match &self.data_label {
			Some(label) => label.clone(),
			None => self.label_text().to_lowercase(),
		}
	}

	/// Static header cell attributes in configuration order
	pub fn header_attributes(&self) -> &[(String, String)] {
		&self.label_attributes
	}

	/// Resolves body cell attributes for one record
	///
	/// Configured content attributes come first in configuration
	/// order, then `name`, then `data-label` (omitted when it resolves
	/// empty).
	pub fn cell_attributes(&self, record: &Record) -> Vec<(String, String)> {
		let mut attributes: Vec<(String, String)> = self
			.content_attributes
			.iter()
			.map(|(name, value)| (name.clone(), value.resolve(record)))
			.collect();
		if let Some(name) = &self.name {
			attributes.push(("name".to_string(), name.clone()));
		}
		let data_label = self.data_label_text();
		if !data_label.is_empty() {
			attributes.push(("data-label".to_string(), data_label));
		}
		attributes
	}

	/// Resolves the cell content for one record
	///
	/// `content` wins over `value`, which wins over reading
	/// `attribute` from the record. A column with none of the three,
	/// or an attribute missing from the record, yields empty text.
	pub fn resolve_content(&self, record: &Record) -> CellContent {
		if let Some(content) = &self.content {
			return CellContent::Markup(content(record));
		}
		if let Some(value) = &self.value {
			return CellContent::Text(display_value(&value.resolve(record)));
		}
		match &self.attribute {
			Some(attribute) => CellContent::Text(
				record.get(attribute).map(display_value).unwrap_or_default(),
			),
			None => CellContent::Text(String::new()),
		}
	}
}

impl Default for DataColumn {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for DataColumn {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DataColumn")
			.field("attribute", &self.attribute)
			.field("label", &self.label)
			.field("data_label", &self.data_label)
			.field("name", &self.name)
			.field("with_sorting", &self.with_sorting)
			.field("visible", &self.visible)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn record() -> Record {
		json!({"id": 7, "name": "Alice"})
			.as_object()
			.cloned()
			.unwrap_or_default()
	}

	#[test]
	fn test_attribute_resolution() {
		let column = DataColumn::new().attribute("name");
		assert_eq!(
			column.resolve_content(&record()),
			CellContent::Text("Alice".to_string())
		);
	}

	#[test]
	fn test_missing_attribute_resolves_empty() {
		let column = DataColumn::new().attribute("missing");
		assert_eq!(
			column.resolve_content(&record()),
			CellContent::Text(String::new())
		);
	}

	#[test]
	fn test_empty_column_resolves_empty() {
		let column = DataColumn::new();
		assert_eq!(
			column.resolve_content(&record()),
			CellContent::Text(String::new())
		);
	}

	#[test]
	fn test_static_value_ignores_record() {
		let column = DataColumn::new().attribute("id").value("fixed");
		assert_eq!(
			column.resolve_content(&record()),
			CellContent::Text("fixed".to_string())
		);
	}

	#[test]
	fn test_value_resolver_reads_record() {
		let column = DataColumn::new().value_with(|record| record["id"].clone());
		assert_eq!(
			column.resolve_content(&record()),
			CellContent::Text("7".to_string())
		);
	}

	#[test]
	fn test_content_overrides_value_and_attribute() {
		let column = DataColumn::new()
			.attribute("name")
			.value("ignored")
			.content(|record| format!("<b>{}</b>", record["id"]));
		assert_eq!(
			column.resolve_content(&record()),
			CellContent::Markup("<b>7</b>".to_string())
		);
	}

	#[test]
	fn test_label_text_fallbacks() {
		assert_eq!(DataColumn::new().label_text(), "");
		assert_eq!(DataColumn::new().attribute("user_name").label_text(), "User Name");
		assert_eq!(
			DataColumn::new().attribute("id").label("Key").label_text(),
			"Key"
		);
	}

	#[test]
	fn test_data_label_lowercases_label() {
		let column = DataColumn::new().attribute("name").label("Όνομα χρήστη");
		assert_eq!(column.data_label_text(), "όνομα χρήστη");
	}

	#[test]
	fn test_data_label_override_wins() {
		let column = DataColumn::new().attribute("id").data_label("test.id");
		assert_eq!(column.data_label_text(), "test.id");
	}

	#[test]
	fn test_cell_attribute_order() {
		let column = DataColumn::new()
			.attribute("id")
			.content_attributes([("class", "wide")])
			.name("test.id");
		let attributes = column.cell_attributes(&record());
		let names: Vec<&str> = attributes.iter().map(|(name, _)| name.as_str()).collect();
		assert_eq!(names, ["class", "name", "data-label"]);
	}

	#[test]
	fn test_dynamic_cell_attribute() {
		let column = DataColumn::new()
			.attribute("id")
			.content_attribute_with("class", |record| format!("row-{}", record["id"]));
		let attributes = column.cell_attributes(&record());
		assert_eq!(attributes[0], ("class".to_string(), "row-7".to_string()));
	}

	#[test]
	fn test_sort_field_requires_attribute_and_flag() {
		assert_eq!(DataColumn::new().sort_field(), None);
		assert_eq!(DataColumn::new().attribute("id").sort_field(), Some("id"));
		assert_eq!(
			DataColumn::new().attribute("id").with_sorting(false).sort_field(),
			None
		);
	}
}
