#[cfg(test)]
mod integration_tests {

    use crate::{
        Context, MapGlyphs, Transcoder, profile::preset, singlish_to_unicode,
        unicode_to_legacy_glyphs,
    };
    use std::borrow::Cow;

    #[test]
    fn singlish_transcoder_pipeline() {
        let transcoder = Transcoder::singlish();
        assert_eq!(transcoder.convert("ayubowan").unwrap(), "අයුබොවන්");
    }

    #[test]
    fn legacy_transcoder_pipeline() {
        let transcoder = Transcoder::legacy_glyphs();
        assert_eq!(transcoder.convert("කොහොමද").unwrap(), "fldfyduo");
    }

    #[test]
    fn singlish_then_legacy_chain() {
        let unicode = singlish_to_unicode("kohomada");
        assert_eq!(unicode_to_legacy_glyphs(&unicode), "fldfyduo");
    }

    #[test]
    fn zero_copy_through_the_legacy_pipeline() {
        let transcoder = Transcoder::legacy_glyphs();
        let input = "plain ascii, nothing mappable";
        let result = transcoder.convert(input).unwrap();
        assert!(matches!(result, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn nfc_pre_pass_accepts_decomposed_input() {
        let transcoder = Transcoder::legacy_glyphs();
        // ෙ + ා arrives split; NFC folds it into ො before the phases run
        let decomposed = transcoder.convert("ක\u{0DD9}\u{0DCF}").unwrap();
        let composed = transcoder.convert("කො").unwrap();
        assert_eq!(decomposed, "fld");
        assert_eq!(decomposed, composed);
    }

    #[test]
    fn skipping_decomposition_changes_the_result() {
        // a pipeline without the rewrite phases leaves composite signs alone
        let transcoder = Transcoder::builder().add_stage(MapGlyphs).build();
        assert_eq!(transcoder.convert("කේ").unwrap(), "lේ");
        assert_eq!(Transcoder::legacy_glyphs().convert("කේ").unwrap(), "fla");
    }

    #[test]
    fn preset_profiles_match_free_functions() {
        let ctx = Context::new();
        let singlish = preset::singlish_to_unicode();
        let legacy = preset::unicode_to_legacy();

        let unicode = singlish.run(Cow::Borrowed("bohoma sthuuthiyi"), &ctx).unwrap();
        assert_eq!(unicode, singlish_to_unicode("bohoma sthuuthiyi"));
        let glyphs = legacy.run(Cow::Borrowed("කොහොමද"), &ctx).unwrap();
        assert_eq!(glyphs, unicode_to_legacy_glyphs("කොහොමද"));
    }

    #[test]
    fn icu_nfc_agrees_with_unicode_normalization() {
        use unicode_normalization::UnicodeNormalization;

        let samples = ["ක\u{0DD9}\u{0DCF}", "ක\u{0DD9}\u{0DCA}", "කොළඹ", "ශ්\u{200D}රී"];
        let transcoder = Transcoder::legacy_glyphs();
        for s in samples {
            let reference: String = s.nfc().collect();
            assert_eq!(
                transcoder.convert(s).unwrap(),
                transcoder.convert(reference.as_str()).unwrap(),
                "NFC pre-pass diverged for {s:?}"
            );
        }
    }

    #[test]
    fn owned_input_converts_too() {
        let transcoder = Transcoder::singlish();
        let owned = String::from("puthaa");
        assert_eq!(transcoder.convert(owned).unwrap(), "පුතා");
    }
}
