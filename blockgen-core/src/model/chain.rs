use crate::error::{Error, Result};
use crate::model::block_index::BlockIndex;
use crate::model::sentence::{DEFAULT_BEGINNINGS_LIMIT, sentence_beginnings};
use crate::model::start::Start;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

/// High-level generator producing block chains from a sample text.
///
/// The chain recombines fixed-size word blocks of the sample using order-1
/// adjacency: each step appends a block observed immediately after an equal
/// block somewhere in the sample, or a uniformly random block when no
/// successor exists.
///
/// # Responsibilities
/// - Own the sample and its block index, built once at construction
/// - Resolve the starting block from a [`Start`] specification
/// - Walk the chain, recovering from dead ends with a random block
///
/// # Invariants
/// - No mutation after construction; `generate` is a pure read plus
///   external random sampling, so sharing across readers is safe
/// - Generation never fails once a valid start is resolved
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MarkovChain {
	/// The raw sample text, kept for sentence-beginning scans.
	sample: String,

	/// Block segmentation of the sample plus the lowercase lookup mirror.
	index: BlockIndex,
}

impl MarkovChain {
	/// Block size used by [`MarkovChain::from_sample`].
	pub const DEFAULT_BLOCK_SIZE: usize = 2;

	/// Creates a generator over `sample` with the given block size.
	///
	/// In case-insensitive mode, adjacency and literal-start lookups ignore
	/// letter case while generated output keeps the sample's original
	/// casing.
	///
	/// # Errors
	/// Returns [`Error::InvalidBlockSize`] if `block_size < 1`.
	pub fn new(sample: &str, block_size: usize, case_insensitive: bool) -> Result<Self> {
		Ok(Self {
			sample: sample.to_owned(),
			index: BlockIndex::build(sample, block_size, case_insensitive)?,
		})
	}

	/// Creates a generator with the default configuration: two-word blocks,
	/// case-insensitive lookup.
	pub fn from_sample(sample: &str) -> Self {
		// The default block size always passes validation
		Self::new(sample, Self::DEFAULT_BLOCK_SIZE, true)
			.expect("default block size is valid")
	}

	/// Returns the configured block size.
	pub fn block_size(&self) -> usize {
		self.index.block_size()
	}

	/// Returns whether lookups ignore letter case.
	pub fn case_insensitive(&self) -> bool {
		self.index.case_insensitive()
	}

	/// Returns the blocks of the sample in original case.
	pub fn blocks(&self) -> &[String] {
		self.index.blocks()
	}

	/// Returns the raw sample text.
	pub fn sample(&self) -> &str {
		&self.sample
	}

	/// Generates a chain of `chain_length` blocks appended to a starting
	/// block resolved from `start`, using the thread-local random source.
	///
	/// # Errors
	/// Returns [`Error::NoMatchingBlock`] when `start` is a literal with no
	/// whole-word match in any block. All other shortfalls (no successor,
	/// no sentence beginnings) fall back to random selection.
	pub fn generate(&self, chain_length: usize, start: Start) -> Result<String> {
		self.generate_with_rng(&mut rand::rng(), chain_length, start)
	}

	/// Same as [`MarkovChain::generate`] with a caller-supplied random
	/// source, for deterministic generation from a seeded generator.
	pub fn generate_with_rng<R: Rng>(
		&self,
		rng: &mut R,
		chain_length: usize,
		start: Start,
	) -> Result<String> {
		let starting_point = match start {
			Start::Literal(text) => self.matching_block(rng, &text)?,
			Start::SentenceBeginning => self.random_sentence_beginning(rng),
			Start::Random => self
				.random_block(rng)
				.map(str::to_owned)
				.unwrap_or_default(),
		};

		Ok(self.make_chain(rng, &starting_point, chain_length))
	}

	/// Retrieves a uniformly random block, or `None` for an empty sample.
	fn random_block<'a, R: Rng>(&'a self, rng: &mut R) -> Option<&'a str> {
		self.index.blocks().choose(rng).map(String::as_str)
	}

	/// Picks a uniformly random block containing `text` as a whole word.
	///
	/// Matching is word-boundary-delimited and runs against the lookup
	/// sequence (lowercased needle and blocks in case-insensitive mode);
	/// the returned block keeps its original case.
	///
	/// # Errors
	/// Returns [`Error::NoMatchingBlock`] when no block matches.
	fn matching_block<R: Rng>(&self, rng: &mut R, text: &str) -> Result<String> {
		let needle = if self.index.case_insensitive() {
			text.to_lowercase()
		} else {
			text.to_owned()
		};

		let matches: Vec<usize> = self
			.index
			.lookup_blocks()
			.iter()
			.enumerate()
			.filter(|(_, block)| contains_word(block, &needle))
			.map(|(position, _)| position)
			.collect();

		matches
			.choose(rng)
			.map(|&position| self.index.blocks()[position].clone())
			.ok_or_else(|| Error::NoMatchingBlock(text.to_owned()))
	}

	/// Picks a uniformly random sentence beginning from the sample.
	///
	/// The scan is capped at [`DEFAULT_BEGINNINGS_LIMIT`] accepted
	/// beginnings. The scanner always yields at least the opening of the
	/// text, so this only falls back to empty for an empty sample.
	fn random_sentence_beginning<R: Rng>(&self, rng: &mut R) -> String {
		let beginnings =
			sentence_beginnings(&self.sample, self.index.block_size(), Some(DEFAULT_BEGINNINGS_LIMIT));
		beginnings.choose(rng).cloned().unwrap_or_default()
	}

	/// Walks the chain: `chain_length` times, appends a successor of the
	/// previous block (uniform among observed candidates) or a uniformly
	/// random block when the previous block was never followed by anything.
	fn make_chain<R: Rng>(&self, rng: &mut R, beginning: &str, chain_length: usize) -> String {
		let mut output = beginning.to_owned();
		let mut previous = beginning.to_owned();

		for _ in 0..chain_length {
			let candidates = self.index.successors(&previous);
			let complement = match candidates.choose(rng) {
				Some(block) => (*block).to_owned(),
				None => match self.random_block(rng) {
					Some(block) => block.to_owned(),
					// Empty sample: nothing to append
					None => break,
				},
			};

			output.push(' ');
			output.push_str(&complement);
			previous = complement;
		}

		output
	}
}

/// Reports whether `haystack` contains `needle` delimited by word
/// boundaries (word characters are ASCII alphanumerics and `_`).
fn contains_word(haystack: &str, needle: &str) -> bool {
	if needle.is_empty() {
		return false;
	}

	let mut from = 0;
	while let Some(found) = haystack.get(from..).and_then(|rest| rest.find(needle)) {
		let start = from + found;
		let end = start + needle.len();

		let bounded_before = haystack[..start]
			.chars()
			.next_back()
			.is_none_or(|c| !is_word_char(c));
		let bounded_after = haystack[end..]
			.chars()
			.next()
			.is_none_or(|c| !is_word_char(c));

		if bounded_before && bounded_after {
			return true;
		}

		// Advance past the first character of this occurrence
		from = start + needle.chars().next().map_or(1, char::len_utf8);
	}

	false
}

fn is_word_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || c == '_'
}
