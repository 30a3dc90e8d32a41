//! The curriculum catalogue.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DrillError;

/// One exercise topic in the curriculum.
///
/// Each topic maps to a single module in `drill-core` and to the tests
/// living in that module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    /// Duplicate detection, de-duplication, intersection.
    Lists,
    /// Per-student statistics and rankings.
    Grades,
    /// Word frequency and letter counting.
    Text,
    /// Quadratic comparison sorts.
    Sorting,
    /// Higher-order helpers: filter, group, pipeline, max-by.
    Processing,
    /// Fibonacci, primes, GCD and LCM.
    Numbers,
    /// Status codes, methods, URLs and headers.
    Http,
}

impl Topic {
    /// Every topic, in curriculum order.
    pub const ALL: [Topic; 7] = [
        Topic::Lists,
        Topic::Grades,
        Topic::Text,
        Topic::Sorting,
        Topic::Processing,
        Topic::Numbers,
        Topic::Http,
    ];

    /// Short identifier used on the command line.
    pub fn id(self) -> &'static str {
        match self {
            Topic::Lists => "lists",
            Topic::Grades => "grades",
            Topic::Text => "text",
            Topic::Sorting => "sorting",
            Topic::Processing => "processing",
            Topic::Numbers => "numbers",
            Topic::Http => "http",
        }
    }

    /// Human-readable title.
    pub fn title(self) -> &'static str {
        match self {
            Topic::Lists => "List Operations",
            Topic::Grades => "Student Grades",
            Topic::Text => "Text Analyzer",
            Topic::Sorting => "Sorting Algorithms",
            Topic::Processing => "Data Processor",
            Topic::Numbers => "Math Utils",
            Topic::Http => "HTTP Concepts",
        }
    }

    /// One-line description of what the topic practises.
    pub fn summary(self) -> &'static str {
        match self {
            Topic::Lists => "sets and sequences: duplicates, order-preserving dedup, intersection",
            Topic::Grades => "maps of grades: averages, top-N ranking, threshold filters",
            Topic::Text => "string processing: tokenizing, word frequency, vowels and consonants",
            Topic::Sorting => "bubble, selection and insertion sort plus a sortedness check",
            Topic::Processing => "higher-order functions: filter+map, group-by, pipelines, max-by-key",
            Topic::Numbers => "number theory: Fibonacci, primality, factorization, GCD and LCM",
            Topic::Http => "HTTP vocabulary: status codes, methods, URLs, headers, REST routes",
        }
    }

    /// Test-name prefix selecting this topic's tests in `drill-core`.
    pub fn module_path(self) -> String {
        format!("{}::", self.id())
    }

    /// The topic following this one in curriculum order.
    pub fn next(self) -> Option<Topic> {
        let idx = Self::ALL.iter().position(|t| *t == self)?;
        Self::ALL.get(idx + 1).copied()
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Topic {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.id() == wanted)
            .ok_or_else(|| DrillError::UnknownTopic(s.to_string()))
    }
}
