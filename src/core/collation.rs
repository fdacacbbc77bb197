//! Locale-aware, case-insensitive text comparison.
//!
//! A [`Collator`] folds case per character using the full Unicode lowercase
//! mapping, tailored for the locale it was built for. Accents and other marks
//! survive folding, so `"é"` and `"e"` stay distinct while `"World"` and
//! `"WORLD"` compare equal.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tailoring {
    Root,
    /// Turkish and Azeri: dotted and dotless I are separate letters.
    Turkic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collator {
    language: String,
    tailoring: Tailoring,
}

impl Collator {
    /// Builds a collator for a locale tag such as `en`, `en_US` or `tr-TR`.
    pub fn new(locale: &str) -> Self {
        let language = locale
            .split(|c| c == '-' || c == '_')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        let tailoring = match language.as_str() {
            "tr" | "az" => Tailoring::Turkic,
            _ => Tailoring::Root,
        };

        Self {
            language,
            tailoring,
        }
    }

    pub fn english() -> Self {
        Self::new("en")
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Case-folded sort key. Two strings are equal under this collator
    /// exactly when their keys are equal.
    pub fn fold(&self, text: &str) -> String {
        let mut key = String::with_capacity(text.len());
        // per char, so a prefix of the input always folds to a prefix of the key
        for c in text.chars() {
            match (self.tailoring, c) {
                (Tailoring::Turkic, 'I') => key.push('ı'),
                (Tailoring::Turkic, 'İ') => key.push('i'),
                _ => key.extend(c.to_lowercase()),
            }
        }
        key
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.fold(a).cmp(&self.fold(b))
    }

    pub fn equals(&self, a: &str, b: &str) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    pub fn starts_with(&self, text: &str, prefix: &str) -> bool {
        self.fold(text).starts_with(&self.fold(prefix))
    }

    /// Keeps the candidates that start with `prefix`, preserving their order.
    pub fn partial_matches<I, S>(&self, prefix: &str, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let folded_prefix = self.fold(prefix);
        candidates
            .into_iter()
            .filter(|candidate| self.fold(candidate.as_ref()).starts_with(&folded_prefix))
            .map(|candidate| candidate.as_ref().to_string())
            .collect()
    }
}

impl Default for Collator {
    fn default() -> Self {
        Self::english()
    }
}
