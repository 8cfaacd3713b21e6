//! Error types for block-based chain generation.

/// Errors surfaced by chain construction and generation.
///
/// Only two situations are reported as errors: an unusable block size at
/// construction time, and a literal starting string that matches no block.
/// Every other "no data found" situation (missing successor, no sentence
/// beginnings) falls back to a random block so that generation always
/// produces output once a valid start is established.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// Invalid block size (must be >= 1).
	#[error("invalid block size: {0} (must be >= 1)")]
	InvalidBlockSize(usize),

	/// A literal starting string matched no block in the sample.
	#[error("no block matches the requested beginning: {0:?}")]
	NoMatchingBlock(String),
}

/// Result type for chain operations.
pub type Result<T> = std::result::Result<T, Error>;
