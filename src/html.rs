//! HTML escaping and attribute rendering helpers

/// Escape HTML special characters in text content
///
/// # Examples
///
/// ```
/// use datagrid::html::escape;
///
/// assert_eq!(escape("Mary & John"), "Mary &amp; John");
/// assert_eq!(escape("<td>"), "&lt;td&gt;");
/// assert_eq!(escape("it's \"quoted\""), "it&#x27;s &quot;quoted&quot;");
/// ```
pub fn escape(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Escape a value for use inside a quoted HTML attribute
///
/// # Examples
///
/// ```
/// use datagrid::html::escape_attr;
///
/// assert_eq!(escape_attr("?page=1&sort=id"), "?page=1&amp;sort=id");
/// assert_eq!(escape_attr("line\nbreak"), "line&#10;break");
/// ```
pub fn escape_attr(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			'\n' => result.push_str("&#10;"),
			'\r' => result.push_str("&#13;"),
			'\t' => result.push_str("&#9;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Substitute `{key}` placeholders in a template with HTML-escaped
/// values
///
/// The template itself passes through unchanged; only substituted
/// values are escaped.
///
/// # Examples
///
/// ```
/// use datagrid::html::format_html;
///
/// let summary = format_html("Page {page} of {pages}", &[("page", "2"), ("pages", "5")]);
/// assert_eq!(summary, "Page 2 of 5");
///
/// let cell = format_html("<span>{text}</span>", &[("text", "a < b")]);
/// assert_eq!(cell, "<span>a &lt; b</span>");
/// ```
pub fn format_html(template: &str, args: &[(&str, &str)]) -> String {
	let mut result = template.to_string();
	for (key, value) in args {
		let placeholder = format!("{{{}}}", key);
		result = result.replace(&placeholder, &escape(value));
	}
	result
}

/// Render an ordered attribute list as ` name="value"` pairs
///
/// Values are attribute-escaped; names are emitted as configured.
/// An empty list renders as an empty string so tags close cleanly.
///
/// # Examples
///
/// ```
/// use datagrid::html::render_attributes;
///
/// let attrs = vec![("class".to_string(), "asc".to_string())];
/// assert_eq!(render_attributes(&attrs), r#" class="asc""#);
/// assert_eq!(render_attributes(&[]), "");
/// ```
pub fn render_attributes(attributes: &[(String, String)]) -> String {
	let mut result = String::new();
	for (name, value) in attributes {
		result.push(' ');
		result.push_str(name);
		result.push_str("=\"");
		result.push_str(&escape_attr(value));
		result.push('"');
	}
	result
}


#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn prop_escape_leaves_no_raw_specials(s in "\\PC*") {
			let escaped = escape(&s);
			prop_assert!(!escaped.contains('<'));
			prop_assert!(!escaped.contains('>'));
			prop_assert!(!escaped.contains('"'));
			prop_assert!(!escaped.contains('\''));
		}

		#[test]
		fn prop_escape_identity_without_specials(s in "[^<>&\"']*") {
			prop_assert_eq!(escape(&s), s);
		}

		#[test]
		fn prop_escape_attr_leaves_no_raw_whitespace_controls(s in "\\PC*") {
			let escaped = escape_attr(&s);
			prop_assert!(!escaped.contains('\n'));
			prop_assert!(!escaped.contains('\r'));
			prop_assert!(!escaped.contains('\t'));
			prop_assert!(!escaped.contains('"'));
		}

		#[test]
		fn prop_format_html_without_args_is_identity(template in "\\PC*") {
			let args: [(&str, &str); 0] = [];
			prop_assert_eq!(format_html(&template, &args), template);
		}
	}
}
