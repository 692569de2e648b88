//! Core rewrite-stage abstraction.
//!
//! Every transform in the crate is a [`Stage`]: a named rewrite over a
//! `Cow<str>` with a cheap `needs_apply` pre-check so unchanged text flows
//! through without allocating. Stages compose through [`crate::process`] —
//! monomorphised chains for compile-time pipelines, a dynamic vector for
//! runtime-assembled ones.
//!
//! The built-in stages are total: unmapped characters copy verbatim, they
//! never reject input. `StageError` exists for the trait contract and for
//! user-supplied stages that do validate.

pub mod decompose_signs;
pub mod map_glyphs;
pub mod nfc;
pub mod tokenize_conjuncts;
pub mod transliterate;

use crate::context::Context;
use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("transcoding failed at stage `{0}`: {1}")]
    Failed(&'static str, String),
}

/// A single rewrite step.
pub trait Stage: Send + Sync {
    /// Human-readable name — used in profile error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `Ok(false)` skips the whole stage.
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError>;

    /// Allocation-aware transformation. Must always be correct.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;
}
