//! Single source of truth for both scripts' static data.
//!
//! The Singlish tables are *ordered rule slices*, not maps: the
//! romanization builder folds them left to right and later writes win.
//! Five consonant spellings (`th`, `d`, `dh`, `n`, `nd`) are deliberately
//! defined twice — retroflex row first, dental row later — so the dental
//! letters take those spellings and the retroflex letters (ඨ ඩ ඪ ණ ඬ) stay
//! reachable only through the glyph table. Reordering the rows changes the
//! table; keep them as authored.

use crate::script::{ConsonantRule, GlyphClass, GlyphEntry, MapRule};

use phf::{Map, phf_map};

// ---------------------------------------------------------------------------
//    Singlish → Sinhala Unicode source tables
// ---------------------------------------------------------------------------

/// Independent vowel letters, keyed by phonetic spelling.
pub static STANDALONE_VOWELS: &[MapRule] = &[
    MapRule { key: "aa", out: "ආ" },
    MapRule { key: "aae", out: "ඈ" },
    MapRule { key: "ae", out: "ඇ" },
    MapRule { key: "a", out: "අ" },
    MapRule { key: "ii", out: "ඊ" },
    MapRule { key: "i", out: "ඉ" },
    MapRule { key: "uu", out: "ඌ" },
    MapRule { key: "u", out: "උ" },
    MapRule { key: "ee", out: "ඒ" },
    MapRule { key: "e", out: "එ" },
    MapRule { key: "oo", out: "ඕ" },
    MapRule { key: "o", out: "ඔ" },
    MapRule { key: "au", out: "ඖ" },
    MapRule { key: "ai", out: "ඓ" },
];

/// Consonant rows, in authoring order. Duplicated spellings resolve
/// last-write-wins in the fold.
pub static CONSONANTS: &[ConsonantRule] = &[
    ConsonantRule { key: "k", letter: 'ක' },
    ConsonantRule { key: "kh", letter: 'ඛ' },
    ConsonantRule { key: "g", letter: 'ග' },
    ConsonantRule { key: "gh", letter: 'ඝ' },
    ConsonantRule { key: "ng", letter: 'ඞ' },
    ConsonantRule { key: "nng", letter: 'ඟ' },
    ConsonantRule { key: "ch", letter: 'ච' },
    ConsonantRule { key: "chh", letter: 'ඡ' },
    ConsonantRule { key: "j", letter: 'ජ' },
    ConsonantRule { key: "jh", letter: 'ඣ' },
    ConsonantRule { key: "ny", letter: 'ඤ' },
    ConsonantRule { key: "jny", letter: 'ඥ' },
    ConsonantRule { key: "ndg", letter: 'ඦ' },
    // retroflex series
    ConsonantRule { key: "t", letter: 'ට' },
    ConsonantRule { key: "th", letter: 'ඨ' },
    ConsonantRule { key: "d", letter: 'ඩ' },
    ConsonantRule { key: "dh", letter: 'ඪ' },
    ConsonantRule { key: "n", letter: 'ණ' },
    ConsonantRule { key: "nd", letter: 'ඬ' },
    // dental series, same spellings — these win
    ConsonantRule { key: "th", letter: 'ත' },
    ConsonantRule { key: "d", letter: 'ද' },
    ConsonantRule { key: "dh", letter: 'ධ' },
    ConsonantRule { key: "n", letter: 'න' },
    ConsonantRule { key: "nd", letter: 'ඳ' },
    ConsonantRule { key: "p", letter: 'ප' },
    ConsonantRule { key: "ph", letter: 'ඵ' },
    ConsonantRule { key: "b", letter: 'බ' },
    ConsonantRule { key: "bh", letter: 'භ' },
    ConsonantRule { key: "m", letter: 'ම' },
    ConsonantRule { key: "mb", letter: 'ඹ' },
    ConsonantRule { key: "y", letter: 'ය' },
    ConsonantRule { key: "r", letter: 'ර' },
    ConsonantRule { key: "l", letter: 'ල' },
    ConsonantRule { key: "w", letter: 'ව' },
    ConsonantRule { key: "v", letter: 'ව' },
    ConsonantRule { key: "sh", letter: 'ශ' },
    ConsonantRule { key: "shh", letter: 'ෂ' },
    ConsonantRule { key: "s", letter: 'ස' },
    ConsonantRule { key: "h", letter: 'හ' },
    ConsonantRule { key: "f", letter: 'ෆ' },
    ConsonantRule { key: "L", letter: 'ළ' },
    ConsonantRule { key: "lh", letter: 'ළ' },
];

/// Dependent vowel signs appended to every consonant spelling. The inherent
/// `a` contributes an empty sign: the bare letter already carries it.
pub static VOWEL_SIGNS: &[MapRule] = &[
    MapRule { key: "aa", out: "ා" },
    MapRule { key: "aae", out: "ෑ" },
    MapRule { key: "ae", out: "ැ" },
    MapRule { key: "a", out: "" },
    MapRule { key: "ii", out: "ී" },
    MapRule { key: "i", out: "ි" },
    MapRule { key: "uu", out: "ූ" },
    MapRule { key: "u", out: "ු" },
    MapRule { key: "ee", out: "ේ" },
    MapRule { key: "e", out: "ෙ" },
    MapRule { key: "oo", out: "ෝ" },
    MapRule { key: "o", out: "ො" },
    MapRule { key: "au", out: "ෞ" },
    MapRule { key: "ai", out: "ෛ" },
];

/// Hand-authored irregular spellings. Folded last, so they override any
/// compositional entry with the same key.
pub static SPECIAL_MAPPINGS: &[MapRule] = &[
    MapRule { key: "ru", out: "රු" },
    MapRule { key: "ruu", out: "රූ" },
    MapRule { key: "lu", out: "ලු" },
    MapRule { key: "luu", out: "ලූ" },
    MapRule { key: "ksha", out: "ක්ෂ" },
    MapRule { key: "hra", out: "හ්\u{200D}ර" },
    MapRule { key: "ri", out: "රි" },
    MapRule { key: "rii", out: "රී" },
];

// ---------------------------------------------------------------------------
//    Sinhala Unicode → FM Abhaya rewrite rules
// ---------------------------------------------------------------------------

/// Composite kombuva signs split into the atomic components the glyph table
/// has entries for. Applied before conjunct tokenization.
pub static COMPOSITE_SIGN_REWRITES: &[(&str, &str)] = &[
    // ේ → ෙ + al-lakuna
    ("\u{0DDA}", "\u{0DD9}\u{0DCA}"),
    // ො → ෙ + ා
    ("\u{0DDC}", "\u{0DD9}\u{0DCF}"),
    // ෝ → ෙ + ා + al-lakuna
    ("\u{0DDD}", "\u{0DD9}\u{0DCF}\u{0DCA}"),
];

/// Conjunct sequences collapse to single tokens so the mapping scan can
/// treat each as one unit. Repha must rewrite first: a ර+al-lakuna+ZWJ+ර run
/// reads as repha-then-ර, not ර-then-rakaransaya.
pub static CONJUNCT_REWRITES: &[(&str, &str)] = &[
    // ර + al-lakuna + ZWJ (repha)
    ("\u{0DBB}\u{0DCA}\u{200D}", "ƒ"),
    // al-lakuna + ZWJ + ර (rakaransaya)
    ("\u{0DCA}\u{200D}\u{0DBB}", "`"),
    // al-lakuna + ZWJ + ය (yansaya)
    ("\u{0DCA}\u{200D}\u{0DBA}", "H"),
];

// ---------------------------------------------------------------------------
//    FM Abhaya glyph table
// ---------------------------------------------------------------------------

/// Every Unicode key FM Abhaya has a glyph for, tagged with how it behaves
/// in the mapping scan. ථ has a glyph here although no Singlish spelling
/// reaches it; the two tables are independent surfaces.
pub static GLYPHS: Map<&'static str, GlyphEntry> = phf_map! {
    // precomposed consonant + al-lakuna ligatures
    "ව්" => GlyphEntry { glyph: "õ", class: GlyphClass::Ligature },
    "ම්" => GlyphEntry { glyph: "ï", class: GlyphClass::Ligature },
    "ච්" => GlyphEntry { glyph: "É", class: GlyphClass::Ligature },
    "ඬ්" => GlyphEntry { glyph: "å", class: GlyphClass::Ligature },
    "ධ්" => GlyphEntry { glyph: "è", class: GlyphClass::Ligature },
    "ට්\u{200D}" => GlyphEntry { glyph: "Ü", class: GlyphClass::Ligature },
    "ඩ්" => GlyphEntry { glyph: "â", class: GlyphClass::Ligature },
    "බ්" => GlyphEntry { glyph: "í", class: GlyphClass::Ligature },

    // vowel signs and modifiers
    "්" => GlyphEntry { glyph: "a", class: GlyphClass::Modifier },
    "ා" => GlyphEntry { glyph: "d", class: GlyphClass::Modifier },
    "ැ" => GlyphEntry { glyph: "e", class: GlyphClass::Modifier },
    "ෑ" => GlyphEntry { glyph: "E", class: GlyphClass::Modifier },
    "ි" => GlyphEntry { glyph: "s", class: GlyphClass::Modifier },
    "ී" => GlyphEntry { glyph: "S", class: GlyphClass::Modifier },
    "ු" => GlyphEntry { glyph: "q", class: GlyphClass::Modifier },
    "ූ" => GlyphEntry { glyph: "Q", class: GlyphClass::Modifier },
    "ෙ" => GlyphEntry { glyph: "f", class: GlyphClass::Modifier },
    "ෛ" => GlyphEntry { glyph: "I", class: GlyphClass::Modifier },
    "ං" => GlyphEntry { glyph: "x", class: GlyphClass::Modifier },
    "ඃ" => GlyphEntry { glyph: "H", class: GlyphClass::Modifier },
    "ෘ" => GlyphEntry { glyph: "D", class: GlyphClass::Modifier },

    // consonants
    "ක" => GlyphEntry { glyph: "l", class: GlyphClass::Consonant },
    "ඛ" => GlyphEntry { glyph: "L", class: GlyphClass::Consonant },
    "ග" => GlyphEntry { glyph: ".", class: GlyphClass::Consonant },
    "ඝ" => GlyphEntry { glyph: ">", class: GlyphClass::Consonant },
    "ච" => GlyphEntry { glyph: "p", class: GlyphClass::Consonant },
    "ඡ" => GlyphEntry { glyph: "P", class: GlyphClass::Consonant },
    "ජ" => GlyphEntry { glyph: "c", class: GlyphClass::Consonant },
    "ඣ" => GlyphEntry { glyph: "C", class: GlyphClass::Consonant },
    "ට" => GlyphEntry { glyph: "g", class: GlyphClass::Consonant },
    "ඨ" => GlyphEntry { glyph: "G", class: GlyphClass::Consonant },
    "ඩ" => GlyphEntry { glyph: "v", class: GlyphClass::Consonant },
    "ඪ" => GlyphEntry { glyph: "V", class: GlyphClass::Consonant },
    "ණ" => GlyphEntry { glyph: "K", class: GlyphClass::Consonant },
    "ත" => GlyphEntry { glyph: ";", class: GlyphClass::Consonant },
    "ථ" => GlyphEntry { glyph: ":", class: GlyphClass::Consonant },
    "ද" => GlyphEntry { glyph: "o", class: GlyphClass::Consonant },
    "ධ" => GlyphEntry { glyph: "O", class: GlyphClass::Consonant },
    "න" => GlyphEntry { glyph: "k", class: GlyphClass::Consonant },
    "ඳ" => GlyphEntry { glyph: "K", class: GlyphClass::Consonant },
    "ප" => GlyphEntry { glyph: "m", class: GlyphClass::Consonant },
    "ඵ" => GlyphEntry { glyph: "]", class: GlyphClass::Consonant },
    "බ" => GlyphEntry { glyph: "n", class: GlyphClass::Consonant },
    "භ" => GlyphEntry { glyph: "N", class: GlyphClass::Consonant },
    "ම" => GlyphEntry { glyph: "u", class: GlyphClass::Consonant },
    "ඹ" => GlyphEntry { glyph: "U", class: GlyphClass::Consonant },
    "ය" => GlyphEntry { glyph: "h", class: GlyphClass::Consonant },
    "ර" => GlyphEntry { glyph: "r", class: GlyphClass::Consonant },
    "ල" => GlyphEntry { glyph: ",", class: GlyphClass::Consonant },
    "ව" => GlyphEntry { glyph: "j", class: GlyphClass::Consonant },
    "ශ" => GlyphEntry { glyph: "M", class: GlyphClass::Consonant },
    "ෂ" => GlyphEntry { glyph: "/", class: GlyphClass::Consonant },
    "ස" => GlyphEntry { glyph: "i", class: GlyphClass::Consonant },
    "හ" => GlyphEntry { glyph: "y", class: GlyphClass::Consonant },
    "ළ" => GlyphEntry { glyph: "<", class: GlyphClass::Consonant },
    "ෆ" => GlyphEntry { glyph: "Z", class: GlyphClass::Consonant },
    "ඥ" => GlyphEntry { glyph: "{", class: GlyphClass::Consonant },
    "ඤ" => GlyphEntry { glyph: "}", class: GlyphClass::Consonant },
    "ඞ" => GlyphEntry { glyph: "W", class: GlyphClass::Consonant },
    "ඟ" => GlyphEntry { glyph: "\\", class: GlyphClass::Consonant },

    // independent vowels
    "අ" => GlyphEntry { glyph: "w", class: GlyphClass::IndependentVowel },
    "ආ" => GlyphEntry { glyph: "W", class: GlyphClass::IndependentVowel },
    "ඇ" => GlyphEntry { glyph: "A", class: GlyphClass::IndependentVowel },
    "ඈ" => GlyphEntry { glyph: "A", class: GlyphClass::IndependentVowel },
    "ඉ" => GlyphEntry { glyph: "b", class: GlyphClass::IndependentVowel },
    "ඊ" => GlyphEntry { glyph: "B", class: GlyphClass::IndependentVowel },
    "උ" => GlyphEntry { glyph: "L", class: GlyphClass::IndependentVowel },
    "ඌ" => GlyphEntry { glyph: "|", class: GlyphClass::IndependentVowel },
    "එ" => GlyphEntry { glyph: "t", class: GlyphClass::IndependentVowel },
    "ඒ" => GlyphEntry { glyph: "T", class: GlyphClass::IndependentVowel },
    "ඕ" => GlyphEntry { glyph: "´", class: GlyphClass::IndependentVowel },
    "ඔ" => GlyphEntry { glyph: "T", class: GlyphClass::IndependentVowel },
    "ඖ" => GlyphEntry { glyph: "Tw", class: GlyphClass::IndependentVowel },

    // conjunct tokens map to their own glyph bytes
    "ƒ" => GlyphEntry { glyph: "ƒ", class: GlyphClass::Sentinel },
    "`" => GlyphEntry { glyph: "`", class: GlyphClass::Sentinel },
    "H" => GlyphEntry { glyph: "H", class: GlyphClass::Sentinel },
};

/// Legacy-conjunct letters force-added to the base-consonant set. ඳ is
/// already `Consonant`-tagged and folds in as a no-op; ඦ has no glyph of its
/// own and falls back verbatim, yet a following pre-base sign still jumps
/// over it.
pub static EXTRA_BASE_CONSONANTS: &[char] = &['ඳ', 'ඦ'];
