//! Page data and offset pagination

use crate::record::Record;
use crate::sort::SortState;
use serde::Serialize;
use std::fmt;

/// One page of records plus the metadata the grid renders from
#[derive(Debug, Clone, Serialize)]
pub struct DataPage {
	/// Records on this page, in source order
	pub records: Vec<Record>,
	/// Current page number (1-indexed)
	pub number: usize,
	/// Configured page size
	pub page_size: usize,
	/// Total record count across all pages
	pub total_count: usize,
	/// Sort state the data source applied, if any
	pub sort: Option<SortState>,
}

impl DataPage {
	/// Creates a page; page number and page size of 0 are treated as 1
	pub fn new(records: Vec<Record>, number: usize, page_size: usize, total_count: usize) -> Self {
		Self {
			records,
			number: number.max(1),
			page_size: page_size.max(1),
			total_count,
			sort: None,
		}
	}

	/// Attaches the sort state the data source applied
	pub fn with_sort(mut self, sort: SortState) -> Self {
		self.sort = Some(sort);
		self
	}

	/// Total number of pages, never less than 1
	pub fn page_count(&self) -> usize {
		self.total_count.div_ceil(self.page_size).max(1)
	}

	/// 1-based index of the first record on this page, 0 when empty
	///
	/// # Examples
	///
	/// ```
	/// use datagrid::DataPage;
	///
	/// let page = DataPage::new(vec![Default::default(); 3], 2, 3, 15);
	/// assert_eq!(page.start_index(), 4);
	/// assert_eq!(page.end_index(), 6);
	/// ```
	pub fn start_index(&self) -> usize {
		if self.records.is_empty() {
			0
		} else {
			(self.number - 1) * self.page_size + 1
		}
	}

	/// 1-based index of the last record on this page, 0 when empty
	pub fn end_index(&self) -> usize {
		if self.records.is_empty() {
			0
		} else {
			self.start_index() + self.records.len() - 1
		}
	}
}

/// Source of the current page of records
///
/// The grid pulls exactly one page per render; implement this to
/// bridge any data layer. [`DataPage`] implements it directly for
/// callers that already hold a materialized page.
pub trait PageSource: fmt::Debug {
	/// Returns the current page
	fn page(&self) -> DataPage;
}

impl PageSource for DataPage {
	fn page(&self) -> DataPage {
		self.clone()
	}
}

/// In-memory offset paginator over a fixed record set
///
/// # Examples
///
/// ```
/// use datagrid::{OffsetPaginator, PageSource, Record};
/// use serde_json::json;
///
/// let records: Vec<Record> = (1..=5)
/// 	.filter_map(|id| json!({"id": id}).as_object().cloned())
/// 	.collect();
///
/// let page = OffsetPaginator::new(records, 2).current_page(3).page();
/// assert_eq!(page.records.len(), 1);
/// assert_eq!(page.page_count(), 3);
/// assert_eq!(page.start_index(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct OffsetPaginator {
	records: Vec<Record>,
	page_size: usize,
	current_page: usize,
	sort: Option<SortState>,
}

impl OffsetPaginator {
	/// Creates a paginator; a page size of 0 is treated as 1
	pub fn new(records: Vec<Record>, page_size: usize) -> Self {
		Self {
			records,
			page_size: page_size.max(1),
			current_page: 1,
			sort: None,
		}
	}

	/// Selects the current page (1-indexed; 0 is treated as 1)
	pub fn current_page(mut self, number: usize) -> Self {
		self.current_page = number.max(1);
		self
	}

	/// Attaches the sort state this record set is ordered by
	pub fn sorted_by(mut self, sort: SortState) -> Self {
		self.sort = Some(sort);
		self
	}
}

impl PageSource for OffsetPaginator {
	fn page(&self) -> DataPage {
		let start = (self.current_page - 1)
			.saturating_mul(self.page_size)
			.min(self.records.len());
		let end = start.saturating_add(self.page_size).min(self.records.len());
		let mut page = DataPage::new(
			self.records[start..end].to_vec(),
			self.current_page,
			self.page_size,
			self.records.len(),
		);
		page.sort = self.sort.clone();
		page
	}
}
