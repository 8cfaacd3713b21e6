//! Top-level module for the block-chain generation system.
//!
//! This module provides a word-block Markov text generator, including:
//! - Fixed-size block segmentation of a sample text (`BlockIndex`)
//! - Chain walking over observed block adjacency (`MarkovChain`)
//! - Start-point specification (`Start`)
//! - Sentence-beginning scanning and output trimming utilities

/// Fixed-size word-block index over a sample text.
///
/// Handles whitespace splitting, block chunking, the lowercase mirror used
/// for case-insensitive lookup, and successor-candidate retrieval.
pub mod block_index;

/// High-level interface for generating block chains.
///
/// Exposes start resolution (literal, sentence beginning, or random) and
/// chain construction with random-block dead-end recovery.
pub mod chain;

/// Start-specification enum for chain generation.
pub mod start;

/// Sentence-beginning detection over raw sample text.
///
/// Scans for sentence boundaries and extracts block-sized beginnings used
/// as natural chain starting points.
pub mod sentence;

/// Plain-text utilities: markup stripping and natural-ending trimming.
pub mod text;
