pub mod context;
pub mod legacy;
pub mod process;
pub mod profile;
pub mod romanize;
pub mod script;
pub mod stage;
pub mod transcoder;

pub use context::Context;
pub use legacy::GlyphTable;
pub use romanize::RomanizationTable;
pub use stage::decompose_signs::DecomposeSigns;
pub use stage::map_glyphs::MapGlyphs;
pub use stage::nfc::Nfc;
pub use stage::tokenize_conjuncts::TokenizeConjuncts;
pub use stage::transliterate::Transliterate;
pub use transcoder::{Transcoder, singlish_to_unicode, unicode_to_legacy_glyphs};

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
