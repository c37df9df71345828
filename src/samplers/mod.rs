//! Sampling strategies for drawing minimal sample sets.
//!
//! Samplers work on positions into the candidate slice, so two candidates
//! with equal values are still distinct draws.

pub mod uniform;

pub use uniform::UniformRandomSampler;
