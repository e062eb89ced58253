//! Text helpers for header label derivation

/// Derive a human-readable label from a field name
///
/// Splits on `_`, `-`, spaces, and lower-to-upper camelCase
/// boundaries, then upper-cases the first letter of each word.
///
/// # Examples
///
/// ```
/// use datagrid::text::humanize_field_name;
///
/// assert_eq!(humanize_field_name("id"), "Id");
/// assert_eq!(humanize_field_name("created_at"), "Created At");
/// assert_eq!(humanize_field_name("firstName"), "First Name");
/// ```
pub fn humanize_field_name(name: &str) -> String {
	let mut words: Vec<String> = Vec::new();
	let mut current = String::new();
	let mut prev_lower = false;
	for ch in name.chars() {
		if ch == '_' || ch == '-' || ch == ' ' {
			if !current.is_empty() {
				words.push(std::mem::take(&mut current));
			}
			prev_lower = false;
		} else if ch.is_uppercase() && prev_lower {
			words.push(std::mem::take(&mut current));
			current.push(ch);
			prev_lower = false;
		} else {
			prev_lower = ch.is_lowercase();
			current.push(ch);
		}
	}
	if !current.is_empty() {
		words.push(current);
	}
	words
		.iter()
		.map(|word| capitalize(word))
		.collect::<Vec<_>>()
		.join(" ")
}

fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
