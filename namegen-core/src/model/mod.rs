//! Top-level module for the Markov word generation system.
//!
//! This module provides:
//! - START / END sentinels (`Sentinels`)
//! - Context extraction from training words (`extract_observations`)
//! - Per-context next-symbol distributions (`Distribution`)
//! - The fixed-order transition model (`MarkovModel`)
//! - Generation configuration (`GenerationInput`)
//! - A high-level generation interface (`WordGenerator`)

/// START / END symbols framing training words.
pub mod sentinel;

/// Sliding-window extraction of `(context, next)` observations.
pub mod context;

/// Next-symbol distribution of a single context.
///
/// Stores observed transitions and supports weighted random sampling.
pub mod distribution;

/// Fixed-order character Markov chain.
///
/// Handles corpus ingestion, transition counting and word generation.
pub mod markov_model;

/// Generation parameters (window size, retries, length cap, sentinels).
pub mod generation_input;

/// High-level interface wrapping a model with its generation parameters.
///
/// Adds novelty retries against the training corpus.
pub mod generator;

pub use context::{Observation, extract_observations};
pub use distribution::Distribution;
pub use generation_input::{DEFAULT_WINDOW_SIZE, GenerationInput};
pub use generator::WordGenerator;
pub use markov_model::MarkovModel;
pub use sentinel::{DEFAULT_END, DEFAULT_START, Sentinels};
