// src/context.rs
// The single handle passed to every stage invocation. Deliberately tiny and
// Copy: it only carries &'static references to the two process-wide tables.

use crate::legacy::GlyphTable;
use crate::romanize::RomanizationTable;

/// Runtime context passed to every rewrite stage.
///
/// Contains:
/// - `romanization`: the Singlish → Unicode substitution table
/// - `glyphs`: the Unicode → FM Abhaya glyph table
///
/// Both are built once on first use and never mutated, so a `Context` can be
/// copied freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub romanization: &'static RomanizationTable,
    pub glyphs: &'static GlyphTable,
}

impl Default for Context {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Resolve both global tables, building them on first use.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            romanization: RomanizationTable::global(),
            glyphs: GlyphTable::global(),
        }
    }
}
