//! Block-based Markov text generation library.
//!
//! This crate generates pseudo-random text by recombining fixed-size word
//! blocks drawn from a sample text, using an order-1 Markov model over
//! blocks rather than single words. It provides:
//! - Block segmentation of a sample text with an optional lowercase mirror
//!   for case-insensitive adjacency lookup
//! - Chain walking with uniform random successor selection and random-block
//!   recovery at dead ends
//! - Sentence-beginning detection for natural chain starting points
//! - Trimming of generated output back to the last complete sentence
//!
//! All randomness is uniform: no frequency weighting, no multi-order
//! context. The generator is immutable after construction and safe to share
//! across readers.

/// Core chain model and generation logic.
pub mod model;

/// Typed errors for construction and generation.
pub mod error;

pub use error::{Error, Result};
pub use model::chain::MarkovChain;
pub use model::sentence::{DEFAULT_BEGINNINGS_LIMIT, sentence_beginnings};
pub use model::start::Start;
pub use model::text::trim_to_natural_ending;
