//! Declarative HTML data grid rendering
//!
//! This crate turns a paginated data source and an ordered set of
//! column definitions into HTML table markup: sortable headers,
//! per-cell content and attribute customization, an empty-state row,
//! and a pagination summary. Rendering is a synchronous, side-effect
//! free transformation; each call is independent and idempotent given
//! identical inputs.
//!
//! # Features
//!
//! - **Column definitions**: fluent, immutable column configuration
//!   (attribute, label, value/content resolvers, attribute maps,
//!   visibility, sorting)
//! - **Sorting**: URL parameter-based multi-field sort expressions
//!   (`?sort=-name,id`) rendered as toggle links in the header
//! - **Pagination**: renders any [`PageSource`]; ships an in-memory
//!   [`OffsetPaginator`]
//! - **Export**: CSV export of the current page (requires the
//!   `export` feature)
//!
//! # Example
//!
//! ```
//! use datagrid::{DataColumn, GridView, OffsetPaginator, Record};
//! use serde_json::json;
//!
//! let records: Vec<Record> = [
//! 	json!({"id": 1, "name": "John"}),
//! 	json!({"id": 2, "name": "Mary"}),
//! ]
//! .iter()
//! .filter_map(|value| value.as_object().cloned())
//! .collect();
//!
//! let html = GridView::new()
//! 	.columns([
//! 		DataColumn::new().attribute("id"),
//! 		DataColumn::new().attribute("name").label("User"),
//! 	])
//! 	.id("users-grid")
//! 	.paginator(OffsetPaginator::new(records, 10))
//! 	.render()?;
//!
//! assert!(html.starts_with(r#"<div id="users-grid">"#));
//! assert!(html.contains("<th>User</th>"));
//! # Ok::<(), datagrid::GridError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod error;
pub mod grid;
pub mod html;
pub mod pagination;
pub mod record;
pub mod renderer;
pub mod sort;
pub mod text;
pub mod url;

pub use column::{AttrValue, CellContent, CellValue, DataColumn};
pub use error::{GridError, GridResult};
pub use grid::GridView;
pub use pagination::{DataPage, OffsetPaginator, PageSource};
pub use record::Record;
pub use sort::{SortDirection, SortField, SortState};
