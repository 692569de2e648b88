use crate::{
    DecomposeSigns, MapGlyphs, Nfc, TokenizeConjuncts, Transliterate, process::Process,
    profile::Profile,
};

/// Singlish text → Sinhala Unicode.
pub fn singlish_to_unicode() -> Profile<impl Process> {
    Profile::builder("singlish_to_unicode")
        .add_stage(Transliterate)
        .build()
}

/// Sinhala Unicode → FM Abhaya visual glyph order.
///
/// The NFC pre-pass folds canonically-decomposed vowel signs back into the
/// composite codepoints the decomposition rules expect; phase order after
/// that is fixed (decompose, tokenize, map).
pub fn unicode_to_legacy() -> Profile<impl Process> {
    Profile::builder("unicode_to_legacy")
        .add_stage(Nfc)
        .add_stage(DecomposeSigns)
        .add_stage(TokenizeConjuncts)
        .add_stage(MapGlyphs)
        .build()
}
