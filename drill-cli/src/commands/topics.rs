//! List the curriculum.

use drill_types::Topic;

/// One display line per topic, in curriculum order.
pub fn lines() -> Vec<String> {
    Topic::ALL
        .iter()
        .enumerate()
        .map(|(i, topic)| {
            format!(
                "{:>2}. {:<11} {:<19} {}",
                i + 1,
                topic.id(),
                topic.title(),
                topic.summary()
            )
        })
        .collect()
}

/// Run the topics command.
pub fn run() {
    println!("=== drill topics ===");
    println!();
    for line in lines() {
        println!("{line}");
    }
    println!();
    println!("Try 'drill demo <topic>' or 'drill test --topic <topic>'.");
}
