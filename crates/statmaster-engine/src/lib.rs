//! Exercise generation and answer checking for descriptive statistics drills.
//!
//! - [`core`] - Attribute catalog, languages, rounding precisions and fractions
//! - [`engine`] - Seeded dataset generation
//! - [`grading`] - Expected answers and tolerance-based checking
//! - [`statement`] - Localized exercise texts
//!
//! Indicator computation lives in `statmaster_stats`; this crate feeds it the
//! raw samples it generates.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;
pub mod grading;
pub mod statement;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unsupported language code: {code:?}")]
pub struct UnsupportedLanguageError {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid seed {input:?}: expected 32 hexadecimal characters")]
pub struct ParseSeedError {
    pub input: String,
}
