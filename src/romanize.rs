//! Singlish → Sinhala Unicode substitution.
//!
//! The table is an ordered fold of the rules in [`crate::script::data`]:
//! standalone vowels, then every consonant row (bare spelling, one derived
//! spelling per dependent vowel sign, and the formal `ra`/`ya` conjunct
//! spellings), then the hand-authored overrides. Later writes win — the
//! duplicated consonant spellings resolve to the dental letters, and `nya`
//! ends up as the න conjunct rather than ඤ.
//!
//! Matching is greedy longest-first over the derived order, bucketed by
//! first byte. Every key starts with an ASCII letter, so a 128-slot bitmap
//! rejects non-candidate positions before any key comparison.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::script::chars::{AL_LAKUNA, RAYANNA, YAYANNA, ZERO_WIDTH_JOINER};
use crate::script::data::{CONSONANTS, SPECIAL_MAPPINGS, STANDALONE_VOWELS, VOWEL_SIGNS};

#[derive(Debug)]
pub struct RomanizationTable {
    entries: HashMap<String, String>,
    /// Every key, longest first. This is the greedy-match priority.
    order: Vec<String>,
    /// First byte → indices into `order`, in `order`'s relative order.
    buckets: HashMap<u8, Vec<usize>>,
    /// ASCII bytes that can start a key.
    key_starts: [bool; 128],
}

impl RomanizationTable {
    /// The process-wide table, built on first use and immutable after.
    pub fn global() -> &'static RomanizationTable {
        static TABLE: OnceLock<RomanizationTable> = OnceLock::new();
        TABLE.get_or_init(RomanizationTable::build)
    }

    /// Fold the source rules into the full substitution table and derive the
    /// match order. Pure and infallible: the rules are a closed, finite
    /// composition.
    pub fn build() -> Self {
        let mut entries: HashMap<String, String> = HashMap::new();

        for rule in STANDALONE_VOWELS {
            entries.insert(rule.key.to_owned(), rule.out.to_owned());
        }
        for row in CONSONANTS {
            // bare spelling suppresses the inherent vowel
            entries.insert(row.key.to_owned(), format!("{}{AL_LAKUNA}", row.letter));
            for sign in VOWEL_SIGNS {
                entries.insert(
                    format!("{}{}", row.key, sign.key),
                    format!("{}{}", row.letter, sign.out),
                );
            }
            // formal conjunct spellings render through al-lakuna + joiner
            entries.insert(
                format!("{}ra", row.key),
                format!("{}{AL_LAKUNA}{ZERO_WIDTH_JOINER}{RAYANNA}", row.letter),
            );
            entries.insert(
                format!("{}ya", row.key),
                format!("{}{AL_LAKUNA}{ZERO_WIDTH_JOINER}{YAYANNA}", row.letter),
            );
        }
        for rule in SPECIAL_MAPPINGS {
            entries.insert(rule.key.to_owned(), rule.out.to_owned());
        }

        // Equal-length keys can never both match at one position; the
        // lexicographic tie-break only makes iteration reproducible.
        let mut order: Vec<String> = entries.keys().cloned().collect();
        order.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let mut buckets: HashMap<u8, Vec<usize>> = HashMap::new();
        let mut key_starts = [false; 128];
        for (idx, key) in order.iter().enumerate() {
            let first = key.as_bytes()[0];
            buckets.entry(first).or_default().push(idx);
            key_starts[first as usize] = true;
        }

        Self {
            entries,
            order,
            buckets,
            key_starts,
        }
    }

    /// Greedy-match priority: every key, longest first.
    pub fn match_order(&self) -> &[String] {
        &self.order
    }

    /// Direct lookup of a single spelling.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Cheap pre-check: does any position in `text` start a key? Every
    /// single-letter consonant and vowel spelling is itself a key, so a
    /// start-byte hit is always a real match.
    #[inline]
    pub fn needs_transliteration(&self, text: &str) -> bool {
        text.bytes().any(|b| b < 128 && self.key_starts[b as usize])
    }

    /// Single left-to-right scan, greedy longest match, verbatim copy on no
    /// match. Total over any input; borrows when nothing matches.
    pub fn transliterate<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if !self.needs_transliteration(input) {
            return Cow::Borrowed(input);
        }

        let mut out = String::with_capacity(input.len() * 2);
        let mut i = 0;
        while let Some(c) = input[i..].chars().next() {
            if let Some((key, value)) = self.match_at(input, i) {
                out.push_str(value);
                i += key.len();
            } else {
                out.push(c);
                i += c.len_utf8();
            }
        }
        Cow::Owned(out)
    }

    /// Longest key matching at byte offset `at`, with its value.
    fn match_at(&self, input: &str, at: usize) -> Option<(&str, &str)> {
        let first = input.as_bytes()[at];
        if first >= 128 || !self.key_starts[first as usize] {
            return None;
        }
        let rest = &input[at..];
        for &idx in self.buckets.get(&first)? {
            let key = self.order[idx].as_str();
            if rest.starts_with(key) {
                return Some((key, self.entries[key].as_str()));
            }
        }
        None
    }
}
