//! stage/nfc.rs – **Canonical composition pre-pass**
//! * Folds canonically-decomposed vowel signs (ෙ + ා, ෙ + ්) back into the
//!   composite codepoints the decomposition rules expect
//! * A no-op on already-composed text, so it is safe to leave enabled
use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::{borrow::Cow, sync::LazyLock};

use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};

static NFC: LazyLock<ComposingNormalizerBorrowed<'static>> =
    LazyLock::new(ComposingNormalizer::new_nfc);

/// Public stage – zero-sized, stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nfc;

impl Stage for Nfc {
    fn name(&self) -> &'static str {
        "nfc"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(!NFC.is_normalized(text))
    }

    #[inline(always)]
    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(NFC.normalize(text.as_ref()).into_owned().into())
    }
}
