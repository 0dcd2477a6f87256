//! # Pipeline Module
//!
//! The main orchestration engine that ties ordering, decoding, normalization
//! and encoding together into a single call.

pub mod engine;

pub use engine::AnimationEngine;
