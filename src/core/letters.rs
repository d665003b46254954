//! Per-letter occurrence grouping

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Letters of a text keyed by lowercase letter, in first-occurrence order.
///
/// Each key maps to one copy of the letter per occurrence, so the length of a
/// value equals how often the letter appears.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterGrouping {
    entries: Vec<(char, Vec<char>)>,
}

impl LetterGrouping {
    fn get_or_insert_empty(&mut self, letter: char) -> &mut Vec<char> {
        let idx = match self.entries.iter().position(|(key, _)| *key == letter) {
            Some(idx) => idx,
            None => {
                self.entries.push((letter, Vec::new()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }

    /// Occurrences recorded for a letter
    pub fn get(&self, letter: char) -> Option<&[char]> {
        self.entries
            .iter()
            .find(|(key, _)| *key == letter)
            .map(|(_, occurrences)| occurrences.as_slice())
    }

    /// Number of occurrences of a letter, zero when absent
    pub fn count(&self, letter: char) -> usize {
        self.get(letter).map_or(0, <[char]>::len)
    }

    /// Keys in first-occurrence order
    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// Entries in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (char, &[char])> + '_ {
        self.entries
            .iter()
            .map(|(key, occurrences)| (*key, occurrences.as_slice()))
    }

    /// Number of distinct letters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the text had no letters
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of letters across all keys
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, occurrences)| occurrences.len()).sum()
    }
}

/// True for characters in a Unicode letter category (Lu, Ll, Lt, Lm, Lo).
///
/// Combining marks such as Devanagari or Thai vowel signs are not letters.
pub fn is_letter(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Group the letters of `sentence`.
///
/// The sentence is trimmed and lowercased first. Anything that is not a
/// letter (digits, punctuation, whitespace, combining marks) is skipped.
pub fn count_letters(sentence: &str) -> LetterGrouping {
    let mut grouping = LetterGrouping::default();
    for ch in sentence.trim().to_lowercase().chars() {
        if is_letter(ch) {
            grouping.get_or_insert_empty(ch).push(ch);
        }
    }
    grouping
}

impl fmt::Display for LetterGrouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, occurrences)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}: [", key)?;
            for (j, ch) in occurrences.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{:?}", ch)?;
            }
            f.write_str("]")?;
        }
        f.write_str("}")
    }
}

impl Serialize for LetterGrouping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, occurrences) in &self.entries {
            map.serialize_entry(key, occurrences)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sentence() {
        let grouping = count_letters("");
        assert!(grouping.is_empty());
        assert_eq!(grouping.total(), 0);
        assert_eq!(grouping.to_string(), "{}");
    }

    #[test]
    fn test_no_letters() {
        let grouping = count_letters("  123 !?., \t ");
        assert!(grouping.is_empty());
    }

    #[test]
    fn test_case_is_folded() {
        let grouping = count_letters("AaBb");
        assert_eq!(grouping.keys().collect::<Vec<_>>(), vec!['a', 'b']);
        assert_eq!(grouping.get('a'), Some(&['a', 'a'][..]));
        assert_eq!(grouping.get('b'), Some(&['b', 'b'][..]));
        assert_eq!(grouping.get('A'), None);
    }

    #[test]
    fn test_hello_world() {
        let grouping = count_letters("Hello, World! 123");
        assert_eq!(
            grouping.keys().collect::<String>(),
            "helowrd"
        );
        let counts: Vec<_> = grouping.iter().map(|(k, v)| (k, v.len())).collect();
        assert_eq!(
            counts,
            vec![('h', 1), ('e', 1), ('l', 3), ('o', 2), ('w', 1), ('r', 1), ('d', 1)]
        );
        assert_eq!(grouping.total(), 10);
        assert_eq!(grouping.count('z'), 0);
    }

    #[test]
    fn test_letter_totals_across_scripts() {
        let samples = [
            ("Grüße aus Köln", 12),
            ("Привет, мир!", 9),
            ("日本語のテキスト", 8),
            ("A1 b2 C3 ...", 3),
            ("  padded  ", 6),
        ];
        for (sample, expected) in samples {
            let grouping = count_letters(sample);
            assert_eq!(grouping.total(), expected, "sample {sample:?}");
            for (key, occurrences) in grouping.iter() {
                assert!(is_letter(key));
                assert!(!key.is_uppercase());
                assert!(occurrences.iter().all(|c| *c == key));
            }
        }
    }

    #[test]
    fn test_combining_marks_are_skipped() {
        let hindi = count_letters("नमस्ते");
        assert_eq!(hindi.keys().collect::<Vec<_>>(), vec!['न', 'म', 'स', 'त']);
        assert_eq!(hindi.total(), 4);

        let thai = count_letters("สวัสดี");
        assert_eq!(thai.keys().collect::<Vec<_>>(), vec!['ส', 'ว', 'ด']);
        assert_eq!(thai.count('ส'), 2);
        assert_eq!(thai.total(), 4);
        assert!(!thai.to_string().contains("\\u"));
    }

    #[test]
    fn test_letter_numbers_are_skipped() {
        assert!(count_letters("Ⅻ").is_empty());
    }

    #[test]
    fn test_unicode_letters() {
        let grouping = count_letters("Éé ÄÖü");
        assert_eq!(grouping.keys().collect::<String>(), "éäöü");
        assert_eq!(grouping.count('é'), 2);
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(count_letters("Mississippi"), count_letters("Mississippi"));
    }

    #[test]
    fn test_display() {
        assert_eq!(count_letters("Abba").to_string(), "{'a': ['a', 'a'], 'b': ['b', 'b']}");
    }

    #[test]
    fn test_serialize_keeps_order() {
        let json = serde_json::to_string(&count_letters("zZa")).unwrap();
        assert_eq!(json, r#"{"z":["z","z"],"a":["a"]}"#);
    }
}
