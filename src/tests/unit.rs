#[cfg(test)]
mod unit_tests {

    use crate::{singlish_to_unicode, unicode_to_legacy_glyphs};

    #[test]
    fn greedy_longest_match() {
        // "thaa" must take the four-char spelling, never t / h / aa
        assert_eq!(singlish_to_unicode("thaa"), "තා");
    }

    #[test]
    fn verbatim_fallback() {
        assert_eq!(singlish_to_unicode("hello 123!"), "හෙල්ලො 123!");
        assert_eq!(singlish_to_unicode("@#$"), "@#$");
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(singlish_to_unicode(""), "");
        assert_eq!(unicode_to_legacy_glyphs(""), "");
    }

    #[test]
    fn standalone_vowel_versus_dependent_sign() {
        assert_eq!(singlish_to_unicode("aa"), "ආ");
        assert_eq!(singlish_to_unicode("kaa"), "කා");
    }

    #[test]
    fn conjunct_spellings() {
        assert_eq!(singlish_to_unicode("kra"), "ක\u{0DCA}\u{200D}ර");
        assert_eq!(singlish_to_unicode("kya"), "ක\u{0DCA}\u{200D}ය");
        assert_eq!(singlish_to_unicode("ksha"), "ක්ෂ");
    }

    #[test]
    fn legacy_reorders_pre_base_sign() {
        // logical ක + ෙ renders sign-first in the legacy stream
        assert_eq!(unicode_to_legacy_glyphs("කෙ"), "fl");
    }

    #[test]
    fn composite_sign_equals_predecomposed() {
        let composed = unicode_to_legacy_glyphs("කේ");
        let decomposed = unicode_to_legacy_glyphs("ක\u{0DD9}\u{0DCA}");
        assert_eq!(composed, "fla");
        assert_eq!(composed, decomposed);
    }

    #[test]
    fn conjunct_tokens_resolve_to_glyphs() {
        assert_eq!(unicode_to_legacy_glyphs("ක\u{0DCA}\u{200D}ය"), "lH");
        assert_eq!(unicode_to_legacy_glyphs("ක\u{0DCA}\u{200D}ර"), "l`");
        // sign fronts the whole cluster
        assert_eq!(unicode_to_legacy_glyphs("ක\u{0DCA}\u{200D}යෙ"), "flH");
    }

    #[test]
    fn whole_word_round() {
        assert_eq!(singlish_to_unicode("kohomada"), "කොහොමද");
        assert_eq!(unicode_to_legacy_glyphs("කොහොමද"), "fldfyduo");
    }

    #[test]
    fn transforms_are_one_shot_not_inverses() {
        let unicode = singlish_to_unicode("ke");
        assert_eq!(unicode, "කෙ");
        let legacy = unicode_to_legacy_glyphs(&unicode);
        assert_eq!(legacy, "fl");
        // the legacy bytes re-read as fresh Singlish, not as an inverse
        assert_ne!(singlish_to_unicode(&legacy), unicode);
    }
}
