use serde::{Deserialize, Serialize};

/// Strategy used to select the starting block when generating a chain.
///
/// This enum controls how the initial block is chosen before chain walking
/// begins.
///
/// # Variants
/// - `Literal(String)`: the chain must begin with a block containing the
///   given text as a whole word (case-insensitive when the generator is
///   configured that way). Resolution fails when no block matches.
/// - `SentenceBeginning`: start from a sentence beginning sampled from the
///   text, for output that opens like a natural sentence.
/// - `Random`: start from a uniformly random block.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum Start {
	Literal(String),
	SentenceBeginning,
	Random,
}
