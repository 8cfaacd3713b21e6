use crate::model::text::strip_tags;

/// Default cap on accepted sentence beginnings per scan.
pub const DEFAULT_BEGINNINGS_LIMIT: usize = 100;

/// Sentence-ending marks, scanned in this order.
///
/// All `.` boundaries are processed before all `!` boundaries, then all `?`
/// boundaries, rather than in left-to-right document order across mark
/// types. Callers consume the result via uniform random pick, so the
/// ordering only affects which candidates survive the acceptance limit.
const SENTENCE_ENDINGS: [char; 3] = ['.', '!', '?'];

/// Collects the beginnings of sentences in `text`, each up to `block_size`
/// words long.
///
/// The first entry is always the opening `block_size` words of the text.
/// Subsequent entries follow each sentence-ending mark + space boundary.
/// Extracted beginnings have markup tags stripped.
///
/// # Notes
/// - A candidate with no ASCII alphabetic character (a boundary landing in
///   a numeric or whitespace run) is skipped and does not count toward the
///   limit; the opening entry is kept unconditionally.
/// - When the text holds fewer than `block_size` words after a boundary,
///   the shorter remainder is accepted as-is.
/// - Scanning stops once `limit` boundary beginnings are accepted;
///   `None` collects all of them.
pub fn sentence_beginnings(text: &str, block_size: usize, limit: Option<usize>) -> Vec<String> {
	let mut beginnings = Vec::new();

	// The opening of the text counts as a sentence beginning
	let first_end = nth_occurrence(text, " ", 0, block_size).unwrap_or(text.len());
	beginnings.push(strip_tags(&text[..first_end]));

	let mut accepted = 0;
	for ending in SENTENCE_ENDINGS {
		let pattern = format!("{ending} ");
		let mut offset = 0;

		while let Some(found) = text[offset..].find(&pattern) {
			let start = offset + found + pattern.len();
			let end = nth_occurrence(text, " ", start, block_size).unwrap_or(text.len());
			let candidate = &text[start..end];

			// Continue the search just past the extracted region
			offset = end;

			// Reject boundaries that land in non-word runs
			if !candidate.chars().any(|c| c.is_ascii_alphabetic()) {
				continue;
			}

			beginnings.push(strip_tags(candidate));
			accepted += 1;
			if limit.is_some_and(|limit| accepted >= limit) {
				return beginnings;
			}
		}
	}

	beginnings
}

/// Finds the byte position of the `n`-th occurrence of `needle` at or after
/// `offset`, advancing a search cursor one occurrence at a time.
///
/// Returns `None` when fewer than `n` occurrences remain (or `n == 0`).
fn nth_occurrence(text: &str, needle: &str, offset: usize, n: usize) -> Option<usize> {
	if n == 0 || needle.is_empty() {
		return None;
	}

	let mut from = offset;
	let mut remaining = n;
	loop {
		let found = from + text.get(from..)?.find(needle)?;
		remaining -= 1;
		if remaining == 0 {
			return Some(found);
		}
		from = found + needle.len();
	}
}
