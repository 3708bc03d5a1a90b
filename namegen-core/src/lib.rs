//! Markov-chain word generation library.
//!
//! This crate learns character transitions from a list of example words
//! and samples new, plausible words from them. It provides:
//! - Extraction of fixed-width character contexts from training words
//! - A per-context transition model with end-of-word detection
//! - A word generator facade with novelty retries and a length cap
//! - Corpus loading helpers (word lists, city CSV files)

/// Markov model, context extraction and generation logic.
///
/// This module exposes the model and the high-level generator interface.
pub mod model;

/// Corpus loading (word files, city CSV files, country codes).
pub mod io;

/// Error types returned by the model and the corpus loaders.
pub mod error;

pub use error::{LoadError, ModelError};
