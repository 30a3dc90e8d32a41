//! Student grades: per-student statistics, top-N ranking, threshold filter.
//!
//! All functions take a [`Gradebook`], an insertion-ordered map from
//! student name to grades. Students without any grades have no average
//! and are left out of every result.

use drill_types::{Gradebook, StudentStats};
use indexmap::IndexMap;

use crate::round2;

/// Number of students returned by [`get_top_students`] when the caller
/// has no preference.
pub const DEFAULT_TOP_N: usize = 3;

/// Arithmetic mean, or `None` for an empty slice.
fn mean(grades: &[f64]) -> Option<f64> {
    if grades.is_empty() {
        return None;
    }
    Some(grades.iter().sum::<f64>() / grades.len() as f64)
}

/// Statistics for a single student's grades, or `None` if there are none.
pub fn student_stats(grades: &[f64]) -> Option<StudentStats> {
    let average = mean(grades)?;
    let highest = grades.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let lowest = grades.iter().copied().fold(f64::INFINITY, f64::min);

    Some(StudentStats {
        average: round2(average),
        highest,
        lowest,
        total_assignments: grades.len(),
    })
}

/// Statistics for every student, keyed by name in gradebook order.
///
/// Averages are rounded to 2 decimal places.
pub fn calculate_student_stats(gradebook: &Gradebook) -> IndexMap<String, StudentStats> {
    gradebook
        .iter()
        .filter_map(|(name, grades)| Some((name.clone(), student_stats(grades)?)))
        .collect()
}

/// The `n` students with the highest average, best first.
///
/// Averages are rounded to 2 decimal places. Students with equal averages
/// keep their gradebook order. Asking for more students than exist
/// returns all of them.
pub fn get_top_students(gradebook: &Gradebook, n: usize) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = gradebook
        .iter()
        .filter_map(|(name, grades)| Some((name.clone(), round2(mean(grades)?))))
        .collect();

    // Stable sort: ties stay in insertion order.
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(n);
    ranked
}

/// Names of students whose exact average is strictly above `threshold`,
/// sorted alphabetically.
pub fn students_above_threshold(gradebook: &Gradebook, threshold: f64) -> Vec<String> {
    let mut names: Vec<String> = gradebook
        .iter()
        .filter(|(_, grades)| mean(grades).is_some_and(|avg| avg > threshold))
        .map(|(name, _)| name.clone())
        .collect();
    names.sort();
    names
}
