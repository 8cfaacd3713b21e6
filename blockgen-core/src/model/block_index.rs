use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Fixed-size word-block index over a sample text.
///
/// The `BlockIndex` splits a sample into blocks of `block_size` consecutive
/// words (the last block may be shorter) and, in case-insensitive mode,
/// keeps a positionally parallel mirror built from the lowercased sample.
/// Block position is meaningful: the block at index `i` is immediately
/// followed, in generation terms, by the block at index `i + 1`.
///
/// # Responsibilities
/// - Split the sample on runs of whitespace and chunk it into blocks
/// - Maintain the lowercase mirror for case-insensitive lookup
/// - Retrieve successor candidates for a given block
///
/// # Invariants
/// - `block_size` is always >= 1
/// - In case-insensitive mode, `lookup_blocks()` has the same length as
///   `blocks()` and index `i` in one corresponds to index `i` in the other
/// - Blocks are never mutated after construction
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BlockIndex {
	/// Number of words per block.
	block_size: usize,

	/// Whether adjacency lookup ignores letter case.
	case_insensitive: bool,

	/// Blocks of the sample in original case, in order of appearance.
	blocks: Vec<String>,

	/// Lowercase mirror of `blocks`; empty in case-sensitive mode.
	lc_blocks: Vec<String>,
}

impl BlockIndex {
	/// Builds an index over `sample` with the given block size.
	///
	/// The whole sample is lowercased once when `case_insensitive` is set,
	/// so punctuation attached to words is preserved in the mirror; only
	/// letter case changes.
	///
	/// # Errors
	/// Returns [`Error::InvalidBlockSize`] if `block_size < 1`.
	pub fn build(sample: &str, block_size: usize, case_insensitive: bool) -> Result<Self> {
		if block_size < 1 {
			return Err(Error::InvalidBlockSize(block_size));
		}

		let blocks = split_text(sample, block_size);
		let lc_blocks = if case_insensitive {
			split_text(&sample.to_lowercase(), block_size)
		} else {
			Vec::new()
		};

		Ok(Self { block_size, case_insensitive, blocks, lc_blocks })
	}

	/// Returns the blocks of the sample in original case.
	pub fn blocks(&self) -> &[String] {
		&self.blocks
	}

	/// Returns the sequence adjacency lookups run against: the lowercase
	/// mirror in case-insensitive mode, the original blocks otherwise.
	pub fn lookup_blocks(&self) -> &[String] {
		if self.case_insensitive {
			&self.lc_blocks
		} else {
			&self.blocks
		}
	}

	/// Returns the configured block size.
	pub fn block_size(&self) -> usize {
		self.block_size
	}

	/// Returns whether lookups ignore letter case.
	pub fn case_insensitive(&self) -> bool {
		self.case_insensitive
	}

	/// Collects every successor candidate observed for `previous`.
	///
	/// A position `p` matches when its lookup block equals `previous`
	/// (lowercased first in case-insensitive mode); the candidate is the
	/// ORIGINAL-case block at `p + 1`, which preserves the sample's casing
	/// in generated output. A match at the final position has no successor
	/// and contributes nothing.
	pub fn successors(&self, previous: &str) -> Vec<&str> {
		let key = if self.case_insensitive {
			previous.to_lowercase()
		} else {
			previous.to_owned()
		};

		self.lookup_blocks()
			.iter()
			.enumerate()
			.filter(|(_, block)| block.as_str() == key)
			.filter_map(|(position, _)| self.blocks.get(position + 1))
			.map(String::as_str)
			.collect()
	}
}

/// Splits `text` on runs of whitespace and chunks the words into blocks of
/// `block_size`, joined with single spaces. The final block may hold fewer
/// than `block_size` words. A block size of 1 returns the words unchanged.
fn split_text(text: &str, block_size: usize) -> Vec<String> {
	let words: Vec<&str> = text.split_whitespace().collect();

	if block_size == 1 {
		return words.into_iter().map(str::to_owned).collect();
	}

	words
		.chunks(block_size)
		.map(|chunk| chunk.join(" "))
		.collect()
}
