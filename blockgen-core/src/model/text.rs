/// Sentence terminators recognized when trimming output.
const NATURAL_ENDINGS: [char; 3] = ['.', '?', '!'];

/// Trims `text` back to its last complete sentence.
///
/// Returns the prefix of `text` through the rightmost `.`, `?` or `!`
/// inclusive. When no terminator occurs, returns the empty string rather
/// than a partial sentence.
pub fn trim_to_natural_ending(text: &str) -> &str {
	match text.rfind(NATURAL_ENDINGS) {
		Some(position) => &text[..=position],
		None => "",
	}
}

/// Removes markup-language tags (`<...>` spans) from `text`.
///
/// An unclosed `<` drops the rest of the text; a stray `>` outside a tag is
/// kept as-is.
pub(crate) fn strip_tags(text: &str) -> String {
	let mut stripped = String::with_capacity(text.len());
	let mut in_tag = false;

	for c in text.chars() {
		match c {
			'<' => in_tag = true,
			'>' if in_tag => in_tag = false,
			c if !in_tag => stripped.push(c),
			_ => {}
		}
	}

	stripped
}
