//! Error types for grid configuration and rendering

/// Errors raised while configuring or rendering a grid
#[derive(Debug, thiserror::Error)]
pub enum GridError {
	/// `render` was called before a paginator was attached
	#[error("grid view requires a paginator before rendering")]
	MissingPaginator,
	/// A sort expression could not be parsed
	#[error("invalid sort expression {expression:?}: {reason}")]
	InvalidSort {
		/// The expression that was rejected
		expression: String,
		/// Why it was rejected
		reason: String,
	},
	/// A sort link query string could not be encoded
	#[error("failed to encode sort link query: {0}")]
	Query(#[from] serde_urlencoded::ser::Error),
	/// CSV export failed
	#[cfg(feature = "export")]
	#[error("failed to export grid data: {0}")]
	Export(#[from] csv::Error),
}

/// Convenience result alias for grid operations
pub type GridResult<T> = Result<T, GridError>;
