//! Sinhala Unicode → FM Abhaya legacy glyph transcoding.
//!
//! FM Abhaya is a non-shaping 8-bit font: whichever glyph comes first in the
//! character stream draws first, left to right. Unicode stores the
//! kombuva-class vowel signs *after* their consonant in logical order, so
//! the producer has to emit them *before* the consonant cluster. The engine
//! runs three passes over the whole string:
//!
//! 1. composite kombuva signs decompose into their atomic components;
//! 2. the three conjunct sequences collapse into single tokens;
//! 3. a single scan substitutes ligatures and characters, fronting pre-base
//!    signs across the consonant cluster they attach to.
//!
//! Every pass falls back to verbatim emission; the engine is total.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

use memchr::memmem;
use smallvec::SmallVec;

use crate::script::GlyphClass;
use crate::script::chars::{is_cluster_token, is_pre_base_sign};
use crate::script::data::{
    COMPOSITE_SIGN_REWRITES, CONJUNCT_REWRITES, EXTRA_BASE_CONSONANTS, GLYPHS,
};

/// Apply ordered literal rewrites over a working buffer; each rule sees the
/// previous rule's full output. Rule order is load-bearing.
fn rewrite_all<'a>(text: Cow<'a, str>, rules: &[(&str, &str)]) -> Cow<'a, str> {
    let mut current = text;
    for &(pattern, replacement) in rules {
        if memmem::find(current.as_bytes(), pattern.as_bytes()).is_some() {
            current = Cow::Owned(current.replace(pattern, replacement));
        }
    }
    current
}

/// Phase A: split composite kombuva signs into the components the glyph
/// table has entries for.
pub fn decompose_signs(text: &str) -> Cow<'_, str> {
    rewrite_all(Cow::Borrowed(text), COMPOSITE_SIGN_REWRITES)
}

/// Phase B: collapse conjunct sequences into single tokens. Must run after
/// [`decompose_signs`] so freshly decomposed al-lakunas are visible to the
/// patterns.
pub fn tokenize_conjuncts(text: &str) -> Cow<'_, str> {
    rewrite_all(Cow::Borrowed(text), CONJUNCT_REWRITES)
}

pub fn contains_composite_sign(text: &str) -> bool {
    COMPOSITE_SIGN_REWRITES
        .iter()
        .any(|&(pattern, _)| memmem::find(text.as_bytes(), pattern.as_bytes()).is_some())
}

pub fn contains_conjunct_sequence(text: &str) -> bool {
    CONJUNCT_REWRITES
        .iter()
        .any(|&(pattern, _)| memmem::find(text.as_bytes(), pattern.as_bytes()).is_some())
}

#[derive(Debug)]
pub struct GlyphTable {
    singles: HashMap<char, &'static str>,
    /// Multi-codepoint keys with their glyphs, longest key first.
    ligatures: Vec<(&'static str, &'static str)>,
    /// Sorted cluster-head letters: `Consonant`-tagged entries plus the two
    /// hard-coded legacy-conjunct letters.
    base_consonants: Vec<char>,
}

impl GlyphTable {
    /// The process-wide table, built on first use and immutable after.
    pub fn global() -> &'static GlyphTable {
        static TABLE: OnceLock<GlyphTable> = OnceLock::new();
        TABLE.get_or_init(GlyphTable::build)
    }

    /// Partition the tagged source map into the single-codepoint map, the
    /// ligature match order, and the base-consonant set.
    pub fn build() -> Self {
        let mut singles = HashMap::new();
        let mut ligatures = Vec::new();
        let mut base_consonants = Vec::new();

        for (key, entry) in GLYPHS.entries() {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => {
                    singles.insert(c, entry.glyph);
                    if entry.class == GlyphClass::Consonant {
                        base_consonants.push(c);
                    }
                }
                _ => ligatures.push((*key, entry.glyph)),
            }
        }
        ligatures.sort_by(|a, b| {
            b.0.chars()
                .count()
                .cmp(&a.0.chars().count())
                .then_with(|| a.0.cmp(b.0))
        });
        for &c in EXTRA_BASE_CONSONANTS {
            if !base_consonants.contains(&c) {
                base_consonants.push(c);
            }
        }
        base_consonants.sort_unstable();

        Self {
            singles,
            ligatures,
            base_consonants,
        }
    }

    /// The ligature match order: multi-codepoint keys, longest first.
    pub fn ligature_order(&self) -> &[(&'static str, &'static str)] {
        &self.ligatures
    }

    /// Cluster-head letters, sorted.
    pub fn base_consonants(&self) -> &[char] {
        &self.base_consonants
    }

    /// Direct glyph lookup for one codepoint.
    pub fn glyph(&self, c: char) -> Option<&'static str> {
        self.singles.get(&c).copied()
    }

    #[inline]
    fn is_base_consonant(&self, c: char) -> bool {
        self.base_consonants.binary_search(&c).is_ok()
    }

    /// Cheap pre-check: does anything in `text` have a glyph mapping?
    #[inline]
    pub fn needs_transcoding(&self, text: &str) -> bool {
        text.chars().any(|c| self.singles.contains_key(&c))
    }

    #[inline]
    fn emit(&self, c: char, out: &mut String) {
        match self.singles.get(&c) {
            Some(glyph) => out.push_str(glyph),
            None => out.push(c),
        }
    }

    fn match_ligature(&self, rest: &str) -> Option<(&'static str, &'static str)> {
        self.ligatures
            .iter()
            .copied()
            .find(|&(key, _)| rest.starts_with(key))
    }

    /// The mapping scan: greedy ligature match first at every position,
    /// then per-character substitution. A base consonant looks ahead past
    /// any cluster tokens; if a pre-base sign follows, the sign's glyph is
    /// emitted first and the whole cluster is consumed in one step.
    /// Otherwise the tokens are left for later iterations, where each maps
    /// individually.
    pub fn map_glyphs(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut i = 0;
        while let Some(c) = text[i..].chars().next() {
            let rest = &text[i..];
            if let Some((key, glyph)) = self.match_ligature(rest) {
                out.push_str(glyph);
                i += key.len();
                continue;
            }
            if self.is_base_consonant(c) {
                let mut cluster: SmallVec<[char; 2]> = SmallVec::new();
                let mut consumed = c.len_utf8();
                let mut next = None;
                for t in rest[c.len_utf8()..].chars() {
                    if is_cluster_token(t) {
                        cluster.push(t);
                        consumed += t.len_utf8();
                    } else {
                        next = Some(t);
                        break;
                    }
                }
                match next {
                    Some(sign) if is_pre_base_sign(sign) => {
                        // visual order: the sign draws before the cluster
                        self.emit(sign, &mut out);
                        self.emit(c, &mut out);
                        for &t in &cluster {
                            self.emit(t, &mut out);
                        }
                        i += consumed + sign.len_utf8();
                    }
                    _ => {
                        self.emit(c, &mut out);
                        i += c.len_utf8();
                    }
                }
            } else {
                self.emit(c, &mut out);
                i += c.len_utf8();
            }
        }
        out
    }

    /// All phases: decompose, tokenize, map.
    pub fn transcode(&self, input: &str) -> String {
        let decomposed = rewrite_all(Cow::Borrowed(input), COMPOSITE_SIGN_REWRITES);
        let tokenized = rewrite_all(decomposed, CONJUNCT_REWRITES);
        self.map_glyphs(&tokenized)
    }
}
