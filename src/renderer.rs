//! HTML renderers for grid sections

mod body;
mod header;

pub use body::RowRenderer;
pub use header::HeaderRenderer;
