//! Sort link URL assembly

use crate::error::GridResult;

/// Builds the URLs header sort links point at
///
/// Carried query parameters render in configuration order; the sort
/// parameter always renders last with the expression for the link.
/// Any carried parameter shadowed by the sort parameter name is
/// dropped.
///
/// # Examples
///
/// ```
/// use datagrid::url::SortUrl;
///
/// let url = SortUrl::new(
/// 	"/users",
/// 	vec![("page".to_string(), "1".to_string())],
/// 	"sort",
/// );
/// assert_eq!(url.href("-name,id").unwrap(), "/users?page=1&sort=-name%2Cid");
/// ```
#[derive(Debug, Clone)]
pub struct SortUrl {
	base: String,
	params: Vec<(String, String)>,
	sort_param: String,
}

impl SortUrl {
	/// Creates a builder for `base` carrying `params` into every link
	pub fn new(
		base: impl Into<String>,
		params: Vec<(String, String)>,
		sort_param: impl Into<String>,
	) -> Self {
		Self {
			base: base.into(),
			params,
			sort_param: sort_param.into(),
		}
	}

	/// The URL applying `expression` as the new sort
	pub fn href(&self, expression: &str) -> GridResult<String> {
		let mut pairs: Vec<(&str, &str)> = self
			.params
			.iter()
			.filter(|(name, _)| name != &self.sort_param)
			.map(|(name, value)| (name.as_str(), value.as_str()))
			.collect();
		pairs.push((&self.sort_param, expression));
		let query = serde_urlencoded::to_string(&pairs)?;
		Ok(format!("{}?{}", self.base, query))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_href_without_base_or_params() {
		let url = SortUrl::new("", Vec::new(), "sort");
		assert_eq!(url.href("id").unwrap(), "?sort=id");
	}

	#[test]
	fn test_href_encodes_expression() {
		let url = SortUrl::new("/admin/manage", Vec::new(), "sort");
		assert_eq!(
			url.href("-id,name").unwrap(),
			"/admin/manage?sort=-id%2Cname"
		);
	}

	#[test]
	fn test_href_preserves_param_order() {
		let url = SortUrl::new(
			"/admin/manage",
			vec![
				("page".to_string(), "1".to_string()),
				("pagesize".to_string(), "10".to_string()),
			],
			"sort",
		);
		assert_eq!(
			url.href("-name,id").unwrap(),
			"/admin/manage?page=1&pagesize=10&sort=-name%2Cid"
		);
	}

	#[test]
	fn test_href_drops_stale_sort_param() {
		let url = SortUrl::new(
			"/users",
			vec![
				("sort".to_string(), "old".to_string()),
				("page".to_string(), "2".to_string()),
			],
			"sort",
		);
		assert_eq!(url.href("name").unwrap(), "/users?page=2&sort=name");
	}

	#[test]
	fn test_custom_sort_param_name() {
		let url = SortUrl::new("/users", Vec::new(), "order");
		assert_eq!(url.href("-id").unwrap(), "/users?order=-id");
	}
}
