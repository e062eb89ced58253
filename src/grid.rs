//! Grid composition
//!
//! [`GridView`] orchestrates one render pass: pull the current page
//! from the paginator, filter the column list to visible columns,
//! render the header once, render one row per record (or the
//! empty-state row), then the summary, wrapped in a container `<div>`.
//! Rendering is synchronous and side-effect free; identical inputs
//! produce identical output.

#[cfg(feature = "export")]
use crate::column::CellContent;
use crate::column::DataColumn;
use crate::error::{GridError, GridResult};
use crate::html::{format_html, render_attributes};
use crate::pagination::{DataPage, PageSource};
use crate::renderer::{HeaderRenderer, RowRenderer};
use crate::url::SortUrl;
use std::fmt;
use tracing::debug;

const DEFAULT_SUMMARY: &str = "Page {page} of {pages}";
const DEFAULT_EMPTY_TEXT: &str = "No results found.";

/// Declarative data grid widget
///
/// Composes a page of records and an ordered column list into a
/// `<div>`-wrapped `<table>` with sortable headers and a pagination
/// summary.
///
/// # Examples
///
/// ```
/// use datagrid::{DataColumn, GridView, OffsetPaginator, Record};
/// use serde_json::json;
///
/// let records: Vec<Record> = [
/// 	json!({"id": 1, "name": "John"}),
/// 	json!({"id": 2, "name": "Mary"}),
/// ]
/// .iter()
/// .filter_map(|value| value.as_object().cloned())
/// .collect();
///
/// let html = GridView::new()
/// 	.columns([
/// 		DataColumn::new().attribute("id"),
/// 		DataColumn::new().attribute("name"),
/// 	])
/// 	.id("users-grid")
/// 	.paginator(OffsetPaginator::new(records, 10))
/// 	.render()?;
///
/// assert!(html.contains("<th>Id</th>"));
/// assert!(html.contains(r#"<td data-label="name">Mary</td>"#));
/// # Ok::<(), datagrid::GridError>(())
/// ```
pub struct GridView {
	columns: Vec<DataColumn>,
	id: Option<String>,
	paginator: Option<Box<dyn PageSource>>,
	base_url: String,
	url_params: Vec<(String, String)>,
	sort_param: String,
	table_attributes: Vec<(String, String)>,
	empty_text: String,
	summary_template: String,
}

impl GridView {
	/// Creates an empty grid
	pub fn new() -> Self {
		Self {
			columns: Vec::new(),
			id: None,
			paginator: None,
			base_url: String::new(),
			url_params: Vec::new(),
			sort_param: "sort".to_string(),
			table_attributes: vec![("class".to_string(), "table".to_string())],
			empty_text: DEFAULT_EMPTY_TEXT.to_string(),
			summary_template: DEFAULT_SUMMARY.to_string(),
		}
	}

	/// Appends column definitions in display order
	pub fn columns(mut self, columns: impl IntoIterator<Item = DataColumn>) -> Self {
		self.columns.extend(columns);
		self
	}

	/// Sets the container element id
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// Attaches the page source records are pulled from
	pub fn paginator(mut self, paginator: impl PageSource + 'static) -> Self {
		self.paginator = Some(Box::new(paginator));
		self
	}

	/// Sets the base URL sort links point at
	///
	/// Without a base URL, links render as query-only (`?sort=...`).
	pub fn url(mut self, base: impl Into<String>) -> Self {
		self.base_url = base.into();
		self
	}

	/// Appends one query parameter carried into every sort link
	pub fn url_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.url_params.push((name.into(), value.into()));
		self
	}

	/// Appends query parameters carried into every sort link
	pub fn url_params<N, V>(mut self, params: impl IntoIterator<Item = (N, V)>) -> Self
	where
		N: Into<String>,
		V: Into<String>,
	{
		self.url_params
			.extend(params.into_iter().map(|(n, v)| (n.into(), v.into())));
		self
	}

	/// Renames the sort query parameter (default `sort`)
	pub fn sort_param(mut self, name: impl Into<String>) -> Self {
		self.sort_param = name.into();
		self
	}

	/// Replaces the `<table>` attributes (default `class="table"`)
	pub fn table_attributes<N, V>(mut self, attributes: impl IntoIterator<Item = (N, V)>) -> Self
	where
		N: Into<String>,
		V: Into<String>,
	{
		self.table_attributes = attributes
			.into_iter()
			.map(|(n, v)| (n.into(), v.into()))
			.collect();
		self
	}

	/// Sets the text shown when the current page has no records
	pub fn empty_text(mut self, text: impl Into<String>) -> Self {
		self.empty_text = text.into();
		self
	}

	/// Sets the summary template (default `Page {page} of {pages}`)
	///
	/// Placeholders: `{page}`, `{pages}`, `{start}`, `{end}`,
	/// `{total}`. Substituted values are HTML-escaped; the template
	/// itself may carry markup.
	pub fn summary_template(mut self, template: impl Into<String>) -> Self {
		self.summary_template = template.into();
		self
	}

	/// Renders the grid to an HTML string
	///
	/// Fails when no paginator is attached or a sort link cannot be
	/// encoded.
	pub fn render(&self) -> GridResult<String> {
		let source = self
			.paginator
			.as_deref()
			.ok_or(GridError::MissingPaginator)?;
		let page = source.page();
		debug!(
			page = page.number,
			records = page.records.len(),
			total = page.total_count,
			"rendering data grid"
		);

		let visible: Vec<&DataColumn> = self
			.columns
			.iter()
			.filter(|column| column.is_visible())
			.collect();

		let url = SortUrl::new(
			self.base_url.clone(),
			self.url_params.clone(),
			self.sort_param.clone(),
		);
		let header = HeaderRenderer::new(page.sort.as_ref(), &url).render(&visible)?;

		let rows = RowRenderer::new(&visible);
		let body = if page.records.is_empty() {
			rows.render_empty(&self.empty_text)
		} else {
			page.records
				.iter()
				.map(|record| rows.render_row(record))
				.collect::<Vec<_>>()
				.join("\n")
		};

		let container_attributes = match &self.id {
			Some(id) => render_attributes(&[("id".to_string(), id.clone())]),
			None => String::new(),
		};
		Ok(format!(
			"<div{}>\n<table{}>\n{}\n<tbody>\n{}\n</tbody>\n</table>\n<div>{}</div>\n</div>",
			container_attributes,
			render_attributes(&self.table_attributes),
			header,
			body,
			self.render_summary(&page)
		))
	}

	/// Writes the visible grid as CSV
	///
	/// One header row of column labels, then one row per record on the
	/// current page. Cell values use the same resolution order as HTML
	/// rendering, without HTML escaping.
	#[cfg(feature = "export")]
	pub fn write_csv<W: std::io::Write>(&self, writer: W) -> GridResult<()> {
		let source = self
			.paginator
			.as_deref()
			.ok_or(GridError::MissingPaginator)?;
		let page = source.page();
		let visible: Vec<&DataColumn> = self
			.columns
			.iter()
			.filter(|column| column.is_visible())
			.collect();

		let mut csv_writer = csv::Writer::from_writer(writer);
		csv_writer.write_record(visible.iter().map(|column| column.label_text()))?;
		for record in &page.records {
			let cells: Vec<String> = visible
				.iter()
				.map(|column| match column.resolve_content(record) {
					CellContent::Markup(markup) => markup,
					CellContent::Text(text) => text,
				})
				.collect();
			csv_writer.write_record(&cells)?;
		}
		csv_writer.flush().map_err(csv::Error::from)?;
		Ok(())
	}

	fn render_summary(&self, page: &DataPage) -> String {
		let number = page.number.to_string();
		let pages = page.page_count().to_string();
		let start = page.start_index().to_string();
		let end = page.end_index().to_string();
		let total = page.total_count.to_string();
		format_html(
			&self.summary_template,
			&[
				("page", number.as_str()),
				("pages", pages.as_str()),
				("start", start.as_str()),
				("end", end.as_str()),
				("total", total.as_str()),
			],
		)
	}
}

impl Default for GridView {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for GridView {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("GridView")
			.field("columns", &self.columns)
			.field("id", &self.id)
			.field("base_url", &self.base_url)
			.field("sort_param", &self.sort_param)
			.finish_non_exhaustive()
	}
}
