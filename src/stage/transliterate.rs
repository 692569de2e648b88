//! stage/transliterate.rs – **Singlish → Sinhala Unicode**
//! * Greedy longest-match substitution over the derived spelling table
//! * Unmatched characters (digits, punctuation, unmapped letters) copy
//!   verbatim
//! * Zero-copy when no spelling starts anywhere in the input
use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Public stage – zero-sized, stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transliterate;

impl Stage for Transliterate {
    fn name(&self) -> &'static str {
        "transliterate"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        Ok(ctx.romanization.needs_transliteration(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        match ctx.romanization.transliterate(&text) {
            Cow::Borrowed(_) => Ok(text),
            Cow::Owned(s) => Ok(Cow::Owned(s)),
        }
    }
}
