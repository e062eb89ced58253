//! Header cell rendering and sort links

use crate::column::DataColumn;
use crate::error::GridResult;
use crate::html::{escape, render_attributes};
use crate::sort::SortState;
use crate::url::SortUrl;

/// Renders the `<thead>` block for the visible columns of one grid
///
/// With a sort context, sortable column labels become toggle links:
/// the link applies the toggled sort expression (direction flipped,
/// field moved to the highest priority), mirrors that expression in
/// `data-sort`, and — when the field participates in the current sort
/// — carries an `asc`/`desc` class plus a directional icon for the
/// current direction. Without a sort context every label renders as
/// plain text.
#[derive(Debug)]
pub struct HeaderRenderer<'a> {
	sort: Option<&'a SortState>,
	url: &'a SortUrl,
}

impl<'a> HeaderRenderer<'a> {
	/// Creates a renderer for the given sort context
	pub fn new(sort: Option<&'a SortState>, url: &'a SortUrl) -> Self {
		Self { sort, url }
	}

	/// Renders the full `<thead>` block, one tag per line
	pub fn render(&self, columns: &[&DataColumn]) -> GridResult<String> {
		let mut lines = vec!["<thead>".to_string(), "<tr>".to_string()];
		for column in columns {
			lines.push(self.render_cell(column)?);
		}
		lines.push("</tr>".to_string());
		lines.push("</thead>".to_string());
		Ok(lines.join("\n"))
	}

	fn render_cell(&self, column: &DataColumn) -> GridResult<String> {
		let label = escape(&column.label_text());
		let content = match (self.sort, column.sort_field()) {
			(Some(sort), Some(field)) => self.render_link(sort, field, &label)?,
			_ => label,
		};
		Ok(format!(
			"<th{}>{}</th>",
			render_attributes(column.header_attributes()),
			content
		))
	}

	fn render_link(&self, sort: &SortState, field: &str, label: &str) -> GridResult<String> {
		let expression = sort.toggled(field).expression();
		let href = self.url.href(&expression)?;
		let current = sort.direction_of(field);

		let mut attributes: Vec<(String, String)> = Vec::with_capacity(3);
		if let Some(direction) = current {
			attributes.push(("class".to_string(), direction.css_class().to_string()));
		}
		attributes.push(("href".to_string(), href));
		attributes.push(("data-sort".to_string(), expression));

		let icon = match current {
			Some(direction) => format!(" <i class=\"{}\"></i>", direction.icon_class()),
			None => String::new(),
		};
		Ok(format!(
			"<a{}>{}{}</a>",
			render_attributes(&attributes),
			label,
			icon
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn url() -> SortUrl {
		SortUrl::new("/users", Vec::new(), "sort")
	}

	#[test]
	fn test_plain_header_without_sort_context() {
		let url = url();
		let renderer = HeaderRenderer::new(None, &url);
		let column = DataColumn::new().attribute("id");
		let html = renderer.render(&[&column]).unwrap();
		assert_eq!(html, "<thead>\n<tr>\n<th>Id</th>\n</tr>\n</thead>");
	}

	#[test]
	fn test_sorted_field_gets_class_and_icon() {
		let url = url();
		let sort = SortState::parse("id,name").unwrap();
		let renderer = HeaderRenderer::new(Some(&sort), &url);
		let column = DataColumn::new().attribute("id");
		let html = renderer.render(&[&column]).unwrap();
		assert!(html.contains(
			r#"<a class="asc" href="/users?sort=-id%2Cname" data-sort="-id,name">Id <i class="bi bi-sort-alpha-up"></i></a>"#
		));
	}

	#[test]
	fn test_descending_field_gets_desc_class_and_down_icon() {
		let url = url();
		let sort = SortState::parse("-id").unwrap();
		let renderer = HeaderRenderer::new(Some(&sort), &url);
		let column = DataColumn::new().attribute("id");
		let html = renderer.render(&[&column]).unwrap();
		assert!(html.contains(r#"class="desc""#));
		assert!(html.contains("bi bi-sort-alpha-down"));
		assert!(html.contains(r#"data-sort="id""#));
	}

	#[test]
	fn test_unsorted_field_gets_link_without_class_or_icon() {
		let url = url();
		let sort = SortState::parse("id").unwrap();
		let renderer = HeaderRenderer::new(Some(&sort), &url);
		let column = DataColumn::new().attribute("name");
		let html = renderer.render(&[&column]).unwrap();
		assert!(html.contains(
			r#"<a href="/users?sort=name%2Cid" data-sort="name,id">Name</a>"#
		));
		assert!(!html.contains("<i"));
	}

	#[test]
	fn test_sorting_disabled_renders_plain_label() {
		let url = url();
		let sort = SortState::parse("id").unwrap();
		let renderer = HeaderRenderer::new(Some(&sort), &url);
		let column = DataColumn::new().attribute("id").with_sorting(false);
		let html = renderer.render(&[&column]).unwrap();
		assert!(html.contains("<th>Id</th>"));
		assert!(!html.contains("<a"));
	}

	#[test]
	fn test_label_attributes_and_escaping() {
		let url = url();
		let renderer = HeaderRenderer::new(None, &url);
		let column = DataColumn::new()
			.label("A & B")
			.label_attributes([("class", "wide")]);
		let html = renderer.render(&[&column]).unwrap();
		assert!(html.contains(r#"<th class="wide">A &amp; B</th>"#));
	}
}
