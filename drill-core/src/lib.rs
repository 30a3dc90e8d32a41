//! # drill-core
//!
//! Pure exercise functions for drill (no I/O, instant tests).
//!
//! Each module is one topic of the curriculum and is independent of the
//! others:
//! - [`lists`] - duplicates, order-preserving dedup, intersection
//! - [`grades`] - per-student statistics and rankings
//! - [`text`] - tokenizing, word frequency, letter counts
//! - [`sorting`] - bubble, selection and insertion sort
//! - [`processing`] - filter+map, group-by, pipelines, max-by-key
//! - [`numbers`] - Fibonacci, primes, GCD and LCM
//! - [`http`] - status codes, methods, URLs, headers, REST routes
//!
//! ## Design Philosophy
//!
//! Every function here is **pure**: inputs are borrowed and never mutated,
//! and results are freshly built containers. That keeps the tests
//! instant and deterministic, and lets the `drill` CLI filter them by
//! module name (`lists::`, `grades::`, ...).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod grades;
pub mod http;
pub mod lists;
pub mod numbers;
pub mod processing;
pub mod sorting;
pub mod text;

pub use grades::{calculate_student_stats, get_top_students, students_above_threshold};
pub use http::{
    build_query_string, build_request_headers, categorize_headers, categorize_status_code,
    create_rest_endpoints, determine_http_method, interpret_status_code, list_http_methods,
    parse_url_components, validate_http_method,
};
pub use lists::{find_common_elements, find_duplicates, remove_duplicates_preserve_order};
pub use numbers::{fibonacci_sequence, gcd, is_prime, lcm, prime_factors, Fibonacci};
pub use processing::{apply_operations, filter_and_transform, find_max_by_criteria, group_by_property};
pub use sorting::{bubble_sort, insertion_sort, is_sorted, selection_sort};
pub use text::{analyze_text, count_vowels_consonants, find_longest_words, normalize_words};

/// Round to 2 decimal places.
///
/// The value is scaled by 100 in floating point and then rounded half away
/// from zero. The halfway test applies to the scaled product, not to the
/// exact binary value, so `1.115` (stored just below 1.115) still becomes
/// `1.12` because `1.115 * 100.0 == 111.5`.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_halves_away_from_zero_after_scaling() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(1.115), 1.12);
    }

    #[test]
    fn round2_ordinary_values() {
        assert_eq!(round2(34.0 / 7.0), 4.86);
        assert_eq!(round2(85.0), 85.0);
        assert_eq!(round2(0.0), 0.0);
    }
}
