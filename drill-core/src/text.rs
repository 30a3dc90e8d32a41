//! Text analysis: tokenizing, word frequency, longest words, letter counts.
//!
//! Words are *normalized* before they are counted: lowercased, stripped of
//! the punctuation set `.,!?;:` and apostrophes, and split on whitespace.
//! An apostrophe is removed rather than treated as a separator, so `I'm`
//! becomes `im`.

use drill_types::{LetterCounts, TextStats};
use std::collections::{BTreeMap, BTreeSet};

use crate::round2;

/// Number of words returned by [`find_longest_words`] when the caller has
/// no preference.
pub const DEFAULT_LONGEST_N: usize = 3;

const STRIPPED: &[char] = &['.', ',', '!', '?', ';', ':', '\'', '\u{2019}'];

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Split text into normalized words.
///
/// Tokens made only of stripped punctuation disappear.
pub fn normalize_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| {
            token
                .chars()
                .filter(|c| !STRIPPED.contains(c))
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

/// Word statistics for `text`.
///
/// When several words share the highest frequency, the one appearing
/// first in the text wins.
pub fn analyze_text(text: &str) -> TextStats {
    let words = normalize_words(text);
    if words.is_empty() {
        return TextStats::default();
    }

    let mut word_frequency: BTreeMap<String, usize> = BTreeMap::new();
    for word in &words {
        *word_frequency.entry(word.clone()).or_insert(0) += 1;
    }

    let top = word_frequency.values().copied().max().unwrap_or(0);
    let most_common_word = words
        .iter()
        .find(|w| word_frequency.get(*w) == Some(&top))
        .cloned()
        .unwrap_or_default();

    let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();

    TextStats {
        word_count: words.len(),
        unique_words: word_frequency.len(),
        most_common_word,
        average_word_length: round2(total_chars as f64 / words.len() as f64),
        word_frequency,
    }
}

/// The `n` longest distinct words, longest first, ties alphabetical.
pub fn find_longest_words(text: &str, n: usize) -> Vec<String> {
    let unique: BTreeSet<String> = normalize_words(text).into_iter().collect();
    let mut words: Vec<String> = unique.into_iter().collect();

    // Already alphabetical; a stable sort by length keeps that within ties.
    words.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));
    words.truncate(n);
    words
}

/// Count vowels and consonants among the alphabetic characters of `text`.
///
/// Case is ignored; digits, punctuation and whitespace are skipped.
pub fn count_vowels_consonants(text: &str) -> LetterCounts {
    text.chars()
        .filter(|c| c.is_alphabetic())
        .fold(LetterCounts::default(), |mut counts, c| {
            if c.to_lowercase().all(|l| VOWELS.contains(&l)) {
                counts.vowels += 1;
            } else {
                counts.consonants += 1;
            }
            counts
        })
}
