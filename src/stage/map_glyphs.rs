//! stage/map_glyphs.rs – **Glyph substitution with visual reordering**
//! * Greedy ligature match first at every position
//! * Pre-base vowel signs jump in front of their consonant cluster
//! * Anything without a mapping passes through unchanged
use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Public stage – zero-sized, stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapGlyphs;

impl Stage for MapGlyphs {
    fn name(&self) -> &'static str {
        "map_glyphs"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        Ok(ctx.glyphs.needs_transcoding(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(Cow::Owned(ctx.glyphs.map_glyphs(&text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reorders_pre_base_sign() {
        let ctx = Context::new();
        let stage = MapGlyphs;
        let result = stage.apply(Cow::Borrowed("කෙ"), &ctx).unwrap();
        assert_eq!(result, "fl");
    }

    #[test]
    fn skips_unmappable_text() {
        let ctx = Context::new();
        let stage = MapGlyphs;
        assert!(!stage.needs_apply("hello world", &ctx).unwrap());
    }
}
