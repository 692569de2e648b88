//! stage/tokenize_conjuncts.rs – **Conjunct tokenization**
//! * repha / rakaransaya / yansaya three-codepoint sequences collapse into
//!   single tokens, in that rule order
//! * Runs after sign decomposition so fresh al-lakunas are visible
//! * Zero-copy when no conjunct sequence occurs
use crate::{
    context::Context,
    legacy,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Public stage – zero-sized, stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenizeConjuncts;

impl Stage for TokenizeConjuncts {
    fn name(&self) -> &'static str {
        "tokenize_conjuncts"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(legacy::contains_conjunct_sequence(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        match legacy::tokenize_conjuncts(&text) {
            Cow::Borrowed(_) => Ok(text),
            Cow::Owned(s) => Ok(Cow::Owned(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::chars::{RAKARANSAYA_TOKEN, YANSAYA_TOKEN};

    #[test]
    fn collapses_each_conjunct_to_one_token() {
        let ctx = Context::new();
        let stage = TokenizeConjuncts;
        let result = stage
            .apply(Cow::Borrowed("ක\u{0DCA}\u{200D}ර ස\u{0DCA}\u{200D}ය"), &ctx)
            .unwrap();
        assert_eq!(result, format!("ක{RAKARANSAYA_TOKEN} ස{YANSAYA_TOKEN}"));
    }

    #[test]
    fn plain_al_lakuna_is_untouched() {
        let ctx = Context::new();
        let stage = TokenizeConjuncts;
        assert!(!stage.needs_apply("ක්ර", &ctx).unwrap());
    }
}
