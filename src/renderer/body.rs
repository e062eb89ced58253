//! Body row rendering

use crate::column::{CellContent, DataColumn};
use crate::html::{escape, render_attributes};
use crate::record::Record;

/// Renders body rows for the visible columns of one grid
///
/// Cell values resolve through the column definition; plain text is
/// HTML-escaped, `content` resolver output is emitted verbatim.
#[derive(Debug)]
pub struct RowRenderer<'a> {
	columns: &'a [&'a DataColumn],
}

impl<'a> RowRenderer<'a> {
	/// Creates a renderer over the visible columns
	pub fn new(columns: &'a [&'a DataColumn]) -> Self {
		Self { columns }
	}

	/// Renders one `<tr>` for a record, one tag per line
	pub fn render_row(&self, record: &Record) -> String {
		let mut lines = vec!["<tr>".to_string()];
		for column in self.columns {
			let content = match column.resolve_content(record) {
				CellContent::Markup(markup) => markup,
				CellContent::Text(text) => escape(&text),
			};
			lines.push(format!(
				"<td{}>{}</td>",
				render_attributes(&column.cell_attributes(record)),
				content
			));
		}
		lines.push("</tr>".to_string());
		lines.join("\n")
	}

	/// Renders the empty-state row spanning every visible column
	pub fn render_empty(&self, empty_text: &str) -> String {
		format!(
			"<tr>\n<td colspan=\"{}\">{}</td>\n</tr>",
			self.columns.len().max(1),
			escape(empty_text)
		)
	}
}
