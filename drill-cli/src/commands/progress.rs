//! Show progress through the curriculum.

use anyhow::Result;
use drill_types::{TestTally, Topic};
use std::fmt;
use std::path::Path;

use crate::commands::test::format_rate;
use crate::config::{DrillConfig, ProgressRecord, TopicRecord};
use crate::runner::TestRunner;

/// Where a topic stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicStatus {
    /// Every test passes.
    Complete,
    /// Some tests pass, some fail.
    InProgress,
    /// No test passes yet.
    NotStarted,
}

impl TopicStatus {
    /// Classify a topic by its tally.
    pub fn of(tally: &TestTally) -> Self {
        if tally.is_green() {
            TopicStatus::Complete
        } else if tally.passed > 0 {
            TopicStatus::InProgress
        } else {
            TopicStatus::NotStarted
        }
    }
}

impl fmt::Display for TopicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TopicStatus::Complete => "complete",
            TopicStatus::InProgress => "in progress",
            TopicStatus::NotStarted => "not started",
        })
    }
}

/// How the passing count moved since the previous run.
pub fn describe_change(previous: &TestTally, current: &TestTally) -> String {
    let delta = i64::from(current.passed) - i64::from(previous.passed);
    match delta {
        0 => "no change in passing tests since last run".to_string(),
        d if d > 0 => format!("+{d} passing since last run"),
        d => format!("{d} passing since last run"),
    }
}

/// The first topic that is not complete yet.
pub fn next_topic(record: &ProgressRecord) -> Option<Topic> {
    record
        .topics
        .iter()
        .find(|r| TopicStatus::of(&r.tally) != TopicStatus::Complete)
        .map(|r| r.topic)
}

/// Run the progress command.
///
/// Runs every topic, compares with the saved history, then saves this run.
pub async fn run(config: &DrillConfig, data_dir: &Path) -> Result<ProgressRecord> {
    let history = data_dir.join(&config.progress.history_file);
    let previous = ProgressRecord::load(&history).await?;
    let runner = TestRunner::new(config.runner.clone());

    println!("=== drill progress ===");
    println!();

    let mut topics = Vec::with_capacity(Topic::ALL.len());
    for topic in Topic::ALL {
        let run = runner.run_topic(topic).await?;
        let tally = run.counts();
        let status = TopicStatus::of(&tally);

        let marker = match status {
            TopicStatus::Complete => "[x]",
            TopicStatus::InProgress => "[~]",
            TopicStatus::NotStarted => "[ ]",
        };
        let was = previous
            .as_ref()
            .and_then(|p| p.tally_for(topic))
            .map(|t| TopicStatus::of(&t));
        let newly = if status == TopicStatus::Complete && was.is_some_and(|w| w != status) {
            " (new!)"
        } else {
            ""
        };
        println!(
            "  {marker} {:<19} {:<11} {}/{} passing{newly}",
            topic.title(),
            status.to_string(),
            tally.passed,
            tally.total()
        );

        topics.push(TopicRecord { topic, tally });
    }

    let record = ProgressRecord::new(topics);
    let total = record.total();
    let complete = record
        .topics
        .iter()
        .filter(|r| TopicStatus::of(&r.tally) == TopicStatus::Complete)
        .count();

    println!();
    println!("Topics complete: {}/{}", complete, record.topics.len());
    println!("Success rate:    {}", format_rate(&total));
    match &previous {
        Some(previous) => println!("Since last run:  {}", describe_change(&previous.total(), &total)),
        None => println!("Since last run:  first recorded run"),
    }

    record.save(&history).await?;

    println!();
    match next_topic(&record) {
        Some(topic) => {
            println!("Next steps:");
            println!("  1. See it in action:  drill demo {}", topic.id());
            println!("  2. Work on its tests: drill test --topic {}", topic.id());
        }
        None => println!("Every topic is complete. Well done!"),
    }

    Ok(record)
}
