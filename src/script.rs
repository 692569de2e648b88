pub mod chars;
pub mod data;

/// How a glyph-table entry participates in the legacy mapping scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphClass {
    /// Dependent vowel sign or combining modifier; never heads a cluster.
    Modifier,
    /// Plain consonant letter; candidate head of a consonant cluster.
    Consonant,
    /// Independent (word-initial) vowel letter.
    IndependentVowel,
    /// Multi-codepoint consonant + al-lakuna sequence the font draws as one
    /// precomposed glyph.
    Ligature,
    /// Conjunct token standing in for a three-codepoint sequence; the token
    /// character doubles as the font's glyph for that conjunct.
    Sentinel,
}

/// One `latin key → sinhala output` insertion rule.
#[derive(Clone, Copy, Debug)]
pub struct MapRule {
    pub key: &'static str,
    pub out: &'static str,
}

/// One consonant row. Derived spellings (bare, per-vowel-sign, `ra`/`ya`
/// conjuncts) are composed from the letter at build time.
#[derive(Clone, Copy, Debug)]
pub struct ConsonantRule {
    pub key: &'static str,
    pub letter: char,
}

/// One FM Abhaya glyph-table entry.
#[derive(Clone, Copy, Debug)]
pub struct GlyphEntry {
    pub glyph: &'static str,
    pub class: GlyphClass,
}
