//! Sort state and sort expression handling
//!
//! A sort expression is a comma-separated field list in priority
//! order, descending fields prefixed with `-`: `-name,id`. Toggling a
//! field flips its direction and moves it to the highest priority.

use crate::error::{GridError, GridResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of one sorted field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
	/// Ascending order
	Ascending,
	/// Descending order
	Descending,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn toggled(self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// CSS class applied to header links for this direction
	pub fn css_class(self) -> &'static str {
		match self {
			Self::Ascending => "asc",
			Self::Descending => "desc",
		}
	}

	/// Icon class rendered after the header label for this direction
	pub fn icon_class(self) -> &'static str {
		match self {
			Self::Ascending => "bi bi-sort-alpha-up",
			Self::Descending => "bi bi-sort-alpha-down",
		}
	}
}

/// One (field, direction) pair in a sort state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
	/// Field name the data source sorts on
	pub name: String,
	/// Direction the field sorts in
	pub direction: SortDirection,
}

impl SortField {
	/// Creates an ascending sort field
	pub fn asc(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			direction: SortDirection::Ascending,
		}
	}

	/// Creates a descending sort field
	pub fn desc(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			direction: SortDirection::Descending,
		}
	}
}

/// Ordered multi-field sort state
///
/// # Examples
///
/// ```
/// use datagrid::{SortDirection, SortState};
///
/// let state = SortState::parse("id,name").unwrap();
/// assert_eq!(state.direction_of("id"), Some(SortDirection::Ascending));
///
/// let next = state.toggled("name");
/// assert_eq!(next.expression(), "-name,id");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
	fields: Vec<SortField>,
}

impl SortState {
	/// Creates a sort state from fields in priority order
	pub fn new(fields: Vec<SortField>) -> Self {
		Self { fields }
	}

	/// Parses a sort expression
	///
	/// An empty expression yields an empty state. An empty field name
	/// anywhere in the list is a configuration error.
	pub fn parse(expression: &str) -> GridResult<Self> {
		if expression.is_empty() {
			return Ok(Self::default());
		}
		let mut fields = Vec::new();
		for segment in expression.split(',') {
			let (direction, name) = match segment.strip_prefix('-') {
				Some(rest) => (SortDirection::Descending, rest),
				None => (SortDirection::Ascending, segment),
			};
			if name.is_empty() {
				return Err(GridError::InvalidSort {
					expression: expression.to_string(),
					reason: "empty field name".to_string(),
				});
			}
			fields.push(SortField {
				name: name.to_string(),
				direction,
			});
		}
		Ok(Self { fields })
	}

	/// Fields in priority order
	pub fn fields(&self) -> &[SortField] {
		&self.fields
	}

	/// Whether no field is sorted
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Current direction of `name`, if it participates in the sort
	pub fn direction_of(&self, name: &str) -> Option<SortDirection> {
		self.fields
			.iter()
			.find(|field| field.name == name)
			.map(|field| field.direction)
	}

	/// Next state after toggling `name`
	///
	/// The field's direction flips and the field moves to the highest
	/// priority; the other fields keep their relative order and
	/// directions. A field absent from the state is prepended
	/// ascending.
	pub fn toggled(&self, name: &str) -> Self {
		let mut rest: Vec<SortField> = Vec::with_capacity(self.fields.len() + 1);
		let mut toggled: Option<SortField> = None;
		for field in &self.fields {
			if field.name == name {
				toggled = Some(SortField {
					name: field.name.clone(),
					direction: field.direction.toggled(),
				});
			} else {
				rest.push(field.clone());
			}
		}
		let mut fields = vec![toggled.unwrap_or_else(|| SortField::asc(name))];
		fields.extend(rest);
		Self { fields }
	}

	/// The textual sort expression for this state
	pub fn expression(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for SortState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (index, field) in self.fields.iter().enumerate() {
			if index > 0 {
				f.write_str(",")?;
			}
			if field.direction == SortDirection::Descending {
				f.write_str("-")?;
			}
			f.write_str(&field.name)?;
		}
		Ok(())
	}
}

impl FromStr for SortState {
	type Err = GridError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}


#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	fn arb_state() -> impl Strategy<Value = SortState> {
		(
			proptest::collection::btree_set("[a-z]{2,6}", 1..5),
			any::<u8>(),
		)
			.prop_map(|(names, mask)| {
				let fields = names
					.into_iter()
					.enumerate()
					.map(|(index, name)| SortField {
						name,
						direction: if (mask >> (index % 8)) & 1 == 1 {
							SortDirection::Descending
						} else {
							SortDirection::Ascending
						},
					})
					.collect();
				SortState::new(fields)
			})
	}

	proptest! {
		#[test]
		fn prop_expression_round_trips(state in arb_state()) {
			let parsed = SortState::parse(&state.expression()).unwrap();
			prop_assert_eq!(parsed, state);
		}

		#[test]
		fn prop_double_toggle_restores_direction_and_order(
			state in arb_state(),
			index in any::<proptest::sample::Index>(),
		) {
			let field = state.fields()[index.index(state.fields().len())].clone();
			let toggled = state.toggled(&field.name).toggled(&field.name);

			prop_assert_eq!(toggled.direction_of(&field.name), Some(field.direction));

			let others = |s: &SortState| {
				s.fields()
					.iter()
					.filter(|f| f.name != field.name)
					.cloned()
					.collect::<Vec<_>>()
			};
			prop_assert_eq!(others(&toggled), others(&state));
		}
	}
}
