//! Run a topic's functions on sample inputs.

use anyhow::Result;
use drill_core::{grades, http, lists, numbers, processing, sorting, text};
use drill_types::{Gradebook, Topic};

/// A call shown in a demo and what it returned.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// The call as written by a caller.
    pub call: String,
    /// Debug rendering of the result.
    pub result: String,
}

impl Sample {
    fn new(call: impl Into<String>, result: impl std::fmt::Debug) -> Self {
        Self {
            call: call.into(),
            result: format!("{result:?}"),
        }
    }
}

/// The sample calls for `topic`.
pub fn samples(topic: Topic) -> Vec<Sample> {
    match topic {
        Topic::Lists => {
            let items = [1, 2, 3, 2, 4, 3, 5];
            vec![
                Sample::new("find_duplicates(&[1, 2, 3, 2, 4, 3, 5])", lists::find_duplicates(&items)),
                Sample::new(
                    "remove_duplicates_preserve_order(&[1, 2, 3, 2, 4, 3, 5])",
                    lists::remove_duplicates_preserve_order(&items),
                ),
                Sample::new(
                    "find_common_elements(&[1, 2, 3, 4], &[3, 4, 5, 6])",
                    lists::find_common_elements(&[1, 2, 3, 4], &[3, 4, 5, 6]),
                ),
            ]
        }
        Topic::Grades => {
            let book: Gradebook = [
                ("Alice", vec![85.0, 92.0, 78.0]),
                ("Bob", vec![90.0, 88.0, 95.0]),
                ("Charlie", vec![75.0, 80.0, 85.0]),
            ]
            .into_iter()
            .map(|(name, grades)| (name.to_string(), grades))
            .collect();
            vec![
                Sample::new("calculate_student_stats(&book)", grades::calculate_student_stats(&book)),
                Sample::new("get_top_students(&book, 2)", grades::get_top_students(&book, 2)),
                Sample::new(
                    "students_above_threshold(&book, 85.0)",
                    grades::students_above_threshold(&book, 85.0),
                ),
            ]
        }
        Topic::Text => {
            let sentence = "Hello world! Hello Python. Python is great!";
            vec![
                Sample::new(format!("analyze_text({sentence:?})"), text::analyze_text(sentence)),
                Sample::new(
                    format!("find_longest_words({sentence:?}, 3)"),
                    text::find_longest_words(sentence, text::DEFAULT_LONGEST_N),
                ),
                Sample::new(
                    "count_vowels_consonants(\"Hello World!\")",
                    text::count_vowels_consonants("Hello World!"),
                ),
                Sample::new(
                    "count_vowels_consonants(\"Hello World!\").letters()",
                    text::count_vowels_consonants("Hello World!").letters(),
                ),
            ]
        }
        Topic::Sorting => {
            let items = [64, 34, 25, 12, 22, 11, 90];
            let sorted = sorting::bubble_sort(&items);
            vec![
                Sample::new("bubble_sort(&[64, 34, 25, 12, 22, 11, 90])", &sorted),
                Sample::new("selection_sort(&[64, 34, 25, 12, 22, 11, 90])", sorting::selection_sort(&items)),
                Sample::new("insertion_sort(&[64, 34, 25, 12, 22, 11, 90])", sorting::insertion_sort(&items)),
                Sample::new("is_sorted(&[64, 34, 25, 12, 22, 11, 90])", sorting::is_sorted(&items)),
                Sample::new("is_sorted(&bubble_sort(..))", sorting::is_sorted(&sorted)),
            ]
        }
        Topic::Processing => {
            let numbers: Vec<i64> = (1..=10).collect();
            let words = ["cat", "dog", "elephant", "ant", "butterfly"];
            let ops: Vec<Box<dyn Fn(i64) -> i64>> = vec![Box::new(|x| x * 2), Box::new(|x| x + 1)];
            vec![
                Sample::new(
                    "filter_and_transform(&(1..=10), |x| x % 2 == 0, |x| x * x)",
                    processing::filter_and_transform(&numbers, |x| x % 2 == 0, |x| x * x),
                ),
                Sample::new(
                    "group_by_property(&words, |w| w.len())",
                    processing::group_by_property(&words, |w| w.len()),
                ),
                Sample::new(
                    "apply_operations(&[1, 2, 3], &[x * 2, x + 1])",
                    processing::apply_operations(&[1, 2, 3], &ops),
                ),
                Sample::new(
                    "find_max_by_criteria(&words, |w| w.len())",
                    processing::find_max_by_criteria(&words, |w| w.len()),
                ),
            ]
        }
        Topic::Numbers => vec![
            Sample::new("fibonacci_sequence(10)", numbers::fibonacci_sequence(10)),
            Sample::new("is_prime(97)", numbers::is_prime(97)),
            Sample::new("prime_factors(60)", numbers::prime_factors(60)),
            Sample::new("gcd(48, 18)", numbers::gcd(48, 18)),
            Sample::new("lcm(12, 18)", numbers::lcm(12, 18)),
        ],
        Topic::Http => {
            let url = "https://api.example.com/v1/users?page=2&limit=10";
            vec![
                Sample::new("interpret_status_code(404)", http::interpret_status_code(404)),
                Sample::new("determine_http_method(\"remove user\")", http::determine_http_method("remove user")),
                Sample::new(
                    "idempotent methods in list_http_methods()",
                    http::list_http_methods()
                        .into_iter()
                        .filter(|(method, _)| method.is_idempotent())
                        .map(|(method, _)| method)
                        .collect::<Vec<_>>(),
                ),
                Sample::new(format!("parse_url_components({url:?})"), http::parse_url_components(url)),
                Sample::new(
                    "build_query_string([(\"page\", 2), (\"limit\", 10)])",
                    http::build_query_string([("page", 2), ("limit", 10)]),
                ),
                Sample::new(
                    "build_request_headers(Some(\"application/json\"), Some(\"abc123\"), None)",
                    http::build_request_headers(Some("application/json"), Some("abc123"), None),
                ),
                Sample::new("create_rest_endpoints(\"users\")", http::create_rest_endpoints("users")),
            ]
        }
    }
}

/// Run the demo command.
pub fn run(topic: &str) -> Result<()> {
    let topic: Topic = topic.parse()?;
    tracing::debug!(%topic, "running demo");

    println!("=== {} ({}) ===", topic.title(), topic.id());
    println!();
    for sample in samples(topic) {
        println!("{}", sample.call);
        println!("  => {}", sample.result);
    }
    println!();
    println!("Run its tests with 'drill test --topic {}'.", topic.id());
    if let Some(next) = topic.next() {
        println!("Next topic: {}", next.id());
    }

    Ok(())
}
