//! Text normalisation for situation descriptions and keyword phrases.
//!
//! Queries arrive in Dutch or English free text. Both the query and every
//! configured keyword phrase pass through the same [`Normalizer`], so a
//! phrase matches exactly when its canonical tokens appear contiguously in
//! the canonical query.

use std::collections::HashSet;

/// Default stop words: short Dutch and English function words that never
/// carry a legal topic on their own.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    // Dutch
    "de", "het", "een", "en", "of", "in", "op", "te", "van", "voor", "met", "aan", "bij", "naar",
    "om", "door", "dat", "die", "dit", "deze", "is", "ben", "bent", "was", "waren", "ik", "mijn",
    "me", "mij", "je", "jij", "jou", "u", "uw", "wij", "we", "hij", "zij", "ze", "er", "niet",
    "wel", "ook", "als", "dan", "maar", "want", "nog", "al", "heb", "hebt", "heeft", "hebben",
    "wordt", "word", "worden", "vanwege",
    // English
    "a", "an", "the", "and", "or", "on", "at", "to", "of", "for", "with", "by", "from", "am",
    "are", "were", "be", "been", "being", "i", "my", "our", "you", "your", "he", "she", "it",
    "its", "they", "them", "their", "this", "that", "these", "those", "because", "as", "but",
    "so", "not", "do", "does", "did", "have", "has", "had",
];

/// Converts raw text into a canonical token sequence.
///
/// Deterministic and side-effect free. Empty or whitespace-only input
/// yields an empty sequence.
#[derive(Debug, Clone)]
pub struct Normalizer {
    stop_words: HashSet<String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::with_stop_words(DEFAULT_STOP_WORDS.iter().copied())
    }
}

impl Normalizer {
    /// Build a normalizer with a custom stop-word list.
    ///
    /// Stop words are themselves lower-cased so the list is case-insensitive.
    pub fn with_stop_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { stop_words }
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }

    /// Normalise text into tokens.
    ///
    /// # Algorithm
    ///
    /// 1. Lower-case (Unicode aware, so `Oriëntatie` → `oriëntatie`)
    /// 2. Replace every character that is not alphanumeric with a space
    /// 3. Split on whitespace, which also collapses runs of it
    /// 4. Drop stop words
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { ' ' })
            .collect();

        cleaned
            .split_whitespace()
            .filter(|t| !self.is_stop_word(t))
            .map(str::to_string)
            .collect()
    }
}
