use thiserror::Error;

use crate::{
    context::Context,
    legacy::GlyphTable,
    process::{DynamicProcess, Process},
    profile::ProfileError,
    romanize::RomanizationTable,
    stage::{
        Stage, StageError, decompose_signs::DecomposeSigns, map_glyphs::MapGlyphs, nfc::Nfc,
        tokenize_conjuncts::TokenizeConjuncts, transliterate::Transliterate,
    },
};
use std::borrow::Cow;

#[derive(Debug, Error)]
pub enum TranscodeError {
    #[error("stage error: {0}")]
    Stage(#[from] StageError),
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
}

/// Top-level facade: a context plus a runtime-assembled stage pipeline.
pub struct Transcoder {
    ctx: Context,
    pipeline: DynamicProcess,
}

impl Transcoder {
    pub fn builder() -> TranscoderBuilder {
        TranscoderBuilder::default()
    }

    /// Ready-made Singlish → Sinhala Unicode transcoder.
    pub fn singlish() -> Self {
        Self::builder().add_stage(Transliterate).build()
    }

    /// Ready-made Sinhala Unicode → FM Abhaya transcoder.
    pub fn legacy_glyphs() -> Self {
        Self::builder()
            .add_stage(Nfc)
            .add_stage(DecomposeSigns)
            .add_stage(TokenizeConjuncts)
            .add_stage(MapGlyphs)
            .build()
    }

    pub fn convert<'a>(
        &self,
        text: impl Into<Cow<'a, str>>,
    ) -> Result<Cow<'a, str>, TranscodeError> {
        Ok(self.pipeline.process(text.into(), &self.ctx)?)
    }
}

#[derive(Default)]
pub struct TranscoderBuilder {
    stages: DynamicProcess,
}

impl TranscoderBuilder {
    pub fn add_stage<S: Stage + 'static>(self, stage: S) -> Self {
        Self {
            stages: self.stages.push(stage),
        }
    }

    pub fn build(self) -> Transcoder {
        Transcoder {
            ctx: Context::new(),
            pipeline: self.stages,
        }
    }
}

/// Convert a Singlish string to Sinhala Unicode using the global table.
pub fn singlish_to_unicode(input: &str) -> String {
    RomanizationTable::global().transliterate(input).into_owned()
}

/// Re-encode Sinhala Unicode into FM Abhaya visual glyph order using the
/// global table.
pub fn unicode_to_legacy_glyphs(input: &str) -> String {
    GlyphTable::global().transcode(input)
}
