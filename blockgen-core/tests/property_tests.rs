//! Property-based tests for block segmentation and chain generation.
//!
//! These tests verify the structural invariants of the generator:
//! - Block count: `len(blocks) == ceil(word_count / block_size)`
//! - Block size 1 means single words with no internal spaces
//! - Generated chains re-split into the expected number of blocks
//! - Trimmed output ends on a sentence terminator or is empty

use blockgen_core::{MarkovChain, Start, trim_to_natural_ending};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Generate whitespace-separated word text
fn word_text() -> impl Strategy<Value = String> {
	prop::collection::vec("[A-Za-z]{1,8}", 1..40).prop_map(|words| words.join(" "))
}

/// Generate word text whose word count is a multiple of `block_size`,
/// so every block is full-sized
fn full_block_text(block_size: usize) -> impl Strategy<Value = String> {
	prop::collection::vec("[A-Za-z]{1,8}", 1..12)
		.prop_map(move |groups| {
			groups
				.iter()
				.flat_map(|word| std::iter::repeat_n(word.clone(), block_size))
				.collect::<Vec<_>>()
				.join(" ")
		})
}

proptest! {
	#[test]
	fn block_count_is_ceil_of_word_count(text in word_text(), block_size in 1usize..6) {
		let chain = MarkovChain::new(&text, block_size, true).unwrap();
		let words = text.split_whitespace().count();
		prop_assert_eq!(chain.blocks().len(), words.div_ceil(block_size));
	}

	#[test]
	fn unit_blocks_are_single_words(text in word_text()) {
		let chain = MarkovChain::new(&text, 1, true).unwrap();
		prop_assert!(chain.blocks().iter().all(|block| !block.contains(' ')));
	}

	#[test]
	fn lookup_mirror_stays_parallel(text in word_text(), block_size in 1usize..6) {
		let chain = MarkovChain::new(&text, block_size, true).unwrap();
		let lowered = MarkovChain::new(&text.to_lowercase(), block_size, true).unwrap();
		prop_assert_eq!(chain.blocks().len(), lowered.blocks().len());
	}

	#[test]
	fn chains_resplit_into_expected_blocks(
		text in full_block_text(2),
		chain_length in 0usize..12,
		seed in 0u64..64,
	) {
		let chain = MarkovChain::new(&text, 2, true).unwrap();
		let output = chain
			.generate_with_rng(&mut StdRng::seed_from_u64(seed), chain_length, Start::Random)
			.unwrap();
		prop_assert_eq!(
			output.split_whitespace().count(),
			2 * (chain_length + 1)
		);
	}

	#[test]
	fn generation_never_fails_without_literal_start(
		text in word_text(),
		block_size in 1usize..6,
		seed in 0u64..64,
	) {
		let chain = MarkovChain::new(&text, block_size, true).unwrap();
		let mut rng = StdRng::seed_from_u64(seed);
		prop_assert!(chain.generate_with_rng(&mut rng, 8, Start::Random).is_ok());
		prop_assert!(chain.generate_with_rng(&mut rng, 8, Start::SentenceBeginning).is_ok());
	}

	#[test]
	fn trim_output_ends_on_terminator(text in ".{0,200}") {
		let trimmed = trim_to_natural_ending(&text);
		prop_assert!(trimmed.is_empty() || trimmed.ends_with(['.', '?', '!']));
		prop_assert!(text.starts_with(trimmed));
	}
}
