//! stage/decompose_signs.rs – **Composite vowel-sign decomposition**
//! * ේ ො ෝ split into kombuva + ා/al-lakuna components
//! * Must run before conjunct tokenization — the later patterns assume the
//!   components are already atomic
//! * Zero-copy when no composite sign occurs
use crate::{
    context::Context,
    legacy,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Public stage – zero-sized, stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecomposeSigns;

impl Stage for DecomposeSigns {
    fn name(&self) -> &'static str {
        "decompose_signs"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(legacy::contains_composite_sign(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        match legacy::decompose_signs(&text) {
            Cow::Borrowed(_) => Ok(text),
            Cow::Owned(s) => Ok(Cow::Owned(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_composites_everywhere() {
        let ctx = Context::new();
        let stage = DecomposeSigns;
        let result = stage.apply(Cow::Borrowed("කේ කෝ"), &ctx).unwrap();
        assert_eq!(result, "ක\u{0DD9}\u{0DCA} ක\u{0DD9}\u{0DCF}\u{0DCA}");
    }

    #[test]
    fn zero_copy_without_composites() {
        let ctx = Context::new();
        let stage = DecomposeSigns;
        assert!(!stage.needs_apply("කෙ", &ctx).unwrap());
        let input = "කෙ";
        let result = stage.apply(Cow::Borrowed(input), &ctx).unwrap();
        assert!(matches!(result, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }
}
