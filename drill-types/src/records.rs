//! Result records produced by the exercise functions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Grades keyed by student name, in insertion order.
///
/// Insertion order matters: it breaks ties when ranking students.
pub type Gradebook = IndexMap<String, Vec<f64>>;

/// Summary statistics for one student's grades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentStats {
    /// Mean grade, rounded to 2 decimal places.
    pub average: f64,
    /// Highest grade.
    pub highest: f64,
    /// Lowest grade.
    pub lowest: f64,
    /// Number of graded assignments.
    pub total_assignments: usize,
}

/// Word statistics for a piece of text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextStats {
    /// Total number of normalized words.
    pub word_count: usize,
    /// Number of distinct normalized words.
    pub unique_words: usize,
    /// Occurrences of each normalized word.
    pub word_frequency: BTreeMap<String, usize>,
    /// The most frequent word, or `""` for empty text.
    pub most_common_word: String,
    /// Mean word length in characters, rounded to 2 decimal places.
    pub average_word_length: f64,
}

/// Vowel and consonant counts over the alphabetic characters of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LetterCounts {
    /// Occurrences of `a e i o u`, any case.
    pub vowels: usize,
    /// Every other alphabetic character.
    pub consonants: usize,
}

impl LetterCounts {
    /// Total alphabetic characters counted.
    pub fn letters(&self) -> usize {
        self.vowels + self.consonants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradebook_keeps_insertion_order() {
        let mut book = Gradebook::new();
        book.insert("Zoe".into(), vec![90.0]);
        book.insert("Adam".into(), vec![80.0]);
        let names: Vec<_> = book.keys().cloned().collect();
        assert_eq!(names, vec!["Zoe", "Adam"]);
    }

    #[test]
    fn empty_text_stats_default() {
        let stats = TextStats::default();
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.most_common_word, "");
        assert!(stats.word_frequency.is_empty());
        assert_eq!(stats.average_word_length, 0.0);
    }

    #[test]
    fn student_stats_serializes_field_names() {
        let stats = StudentStats {
            average: 87.75,
            highest: 96.0,
            lowest: 78.0,
            total_assignments: 4,
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["average"], 87.75);
        assert_eq!(json["total_assignments"], 4);
    }

    #[test]
    fn letter_counts_total() {
        let counts = LetterCounts {
            vowels: 3,
            consonants: 7,
        };
        assert_eq!(counts.letters(), 10);
    }
}
