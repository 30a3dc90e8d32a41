//! Run the test suite and report pass/fail counts.

use anyhow::Result;
use drill_types::{TestTally, Topic};

use crate::config::DrillConfig;
use crate::runner::{TestRunner, TopicRun};

/// Overall outcome of a test run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Tests ran and none failed.
    AllPassed,
    /// This many tests failed.
    Failing(u32),
    /// Nothing ran (build failure or an empty filter).
    NothingRan,
}

impl Verdict {
    /// Judge a total tally.
    pub fn of(total: &TestTally) -> Self {
        if total.failed > 0 {
            Verdict::Failing(total.failed)
        } else if total.passed > 0 {
            Verdict::AllPassed
        } else {
            Verdict::NothingRan
        }
    }
}

/// Topics selected by `--topic`, or all of them.
pub fn select_topics(topic: Option<&str>) -> Result<Vec<Topic>> {
    match topic {
        Some(id) => Ok(vec![id.parse()?]),
        None => Ok(Topic::ALL.to_vec()),
    }
}

/// Percentage for display, or a dash when nothing ran.
pub fn format_rate(tally: &TestTally) -> String {
    match tally.success_rate() {
        Some(rate) => format!("{rate:.1}%"),
        None => "-".to_string(),
    }
}

/// One report line for a topic's run.
///
/// A runner that exits with an error is flagged even when its summary
/// lines look clean.
pub fn describe_run(run: &TopicRun) -> String {
    let id = run.topic.id();
    let line = match run.tally {
        Some(tally) if tally.is_green() => format!("  [PASS] {id:<11} {} passed", tally.passed),
        Some(tally) if tally.total() > 0 => {
            format!("  [FAIL] {id:<11} {} passed, {} failed", tally.passed, tally.failed)
        }
        Some(_) => format!("  [----] {id:<11} no tests ran"),
        None if run.success => format!("  [????] {id:<11} no results"),
        None => return format!("  [ERR ] {id:<11} runner failed before reporting (did it compile?)"),
    };
    if run.success {
        line
    } else {
        format!("{line} (runner exited with an error)")
    }
}

/// Run the test command.
///
/// Returns the summed tally. Failing tests are reported, not returned as
/// an error.
pub async fn run(config: &DrillConfig, topic: Option<&str>) -> Result<TestTally> {
    let topics = select_topics(topic)?;
    let runner = TestRunner::new(config.runner.clone());

    println!("=== drill test ===");
    println!();

    let mut total = TestTally::default();
    for topic in topics {
        let run = runner.run_topic(topic).await?;
        println!("{}", describe_run(&run));
        if run.tally.is_none() || run.counts().failed > 0 {
            tracing::info!(topic = %run.topic, "runner output:\n{}", run.output);
        }
        total += run.counts();
    }

    println!();
    println!("Passed:       {}", total.passed);
    println!("Failed:       {}", total.failed);
    println!("Success rate: {}", format_rate(&total));
    println!();

    match Verdict::of(&total) {
        Verdict::AllPassed => println!("All tests passed!"),
        Verdict::Failing(n) => {
            println!("{n} failing test(s) to fix. Re-run with -v to see the runner output.")
        }
        Verdict::NothingRan => println!("No tests ran. Check the runner configuration."),
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdicts() {
        assert_eq!(Verdict::of(&TestTally::new(5, 0)), Verdict::AllPassed);
        assert_eq!(Verdict::of(&TestTally::new(5, 2)), Verdict::Failing(2));
        assert_eq!(Verdict::of(&TestTally::new(0, 3)), Verdict::Failing(3));
        assert_eq!(Verdict::of(&TestTally::default()), Verdict::NothingRan);
    }

    fn finished(tally: Option<TestTally>, success: bool) -> TopicRun {
        TopicRun {
            topic: Topic::Text,
            tally,
            success,
            output: String::new(),
        }
    }

    #[test]
    fn run_descriptions() {
        assert_eq!(
            describe_run(&finished(Some(TestTally::new(4, 0)), true)),
            "  [PASS] text        4 passed"
        );
        assert!(describe_run(&finished(Some(TestTally::new(1, 2)), false))
            .starts_with("  [FAIL] text        1 passed, 2 failed"));
        assert!(describe_run(&finished(None, true)).contains("no results"));
    }

    #[test]
    fn failed_runner_is_flagged() {
        let crashed = describe_run(&finished(None, false));
        assert!(crashed.starts_with("  [ERR ]"));
        assert!(crashed.contains("did it compile?"));

        let green_but_failed = describe_run(&finished(Some(TestTally::new(3, 0)), false));
        assert!(green_but_failed.starts_with("  [PASS]"));
        assert!(green_but_failed.ends_with("(runner exited with an error)"));
    }

    #[test]
    fn select_one_or_all() {
        assert_eq!(select_topics(Some("grades")).unwrap(), vec![Topic::Grades]);
        assert_eq!(select_topics(None).unwrap().len(), Topic::ALL.len());
        assert!(select_topics(Some("geometry")).is_err());
    }

    #[test]
    fn rate_formatting() {
        assert_eq!(format_rate(&TestTally::new(3, 1)), "75.0%");
        assert_eq!(format_rate(&TestTally::new(2, 1)), "66.7%");
        assert_eq!(format_rate(&TestTally::default()), "-");
    }

    #[cfg(unix)]
    fn fake_config(script: &str) -> DrillConfig {
        let mut config = DrillConfig::default();
        config.runner.program = "sh".to_string();
        config.runner.args = vec!["-c".to_string(), script.to_string(), "drill".to_string()];
        config
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn run_single_topic() {
        let config = fake_config("echo 'test result: ok. 4 passed; 0 failed; 0 ignored'");
        let total = run(&config, Some("lists")).await.unwrap();
        assert_eq!(total, TestTally::new(4, 0));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn run_all_topics_sums_tallies() {
        let config = fake_config("echo 'test result: FAILED. 2 passed; 1 failed; 0 ignored'; exit 101");
        let total = run(&config, None).await.unwrap();
        assert_eq!(total, TestTally::new(14, 7));
    }

    #[tokio::test]
    async fn run_unknown_topic_is_error() {
        assert!(run(&DrillConfig::default(), Some("geometry")).await.is_err());
    }
}
