//! Running the test suite for one topic and tallying the results.

use anyhow::{Context, Result};
use drill_types::{TestTally, Topic};
use regex::Regex;
use std::process::Stdio;
use std::sync::OnceLock;
use tokio::process::Command;

use crate::config::RunnerConfig;

/// Output of one topic's test run.
#[derive(Debug, Clone)]
pub struct TopicRun {
    /// The topic that was run.
    pub topic: Topic,
    /// Summed counts, or `None` if no summary line was found
    /// (usually a compile error).
    pub tally: Option<TestTally>,
    /// Whether the runner exited successfully.
    pub success: bool,
    /// Combined stdout and stderr.
    pub output: String,
}

impl TopicRun {
    /// Counts, with a missing summary treated as nothing run.
    pub fn counts(&self) -> TestTally {
        self.tally.unwrap_or_default()
    }
}

/// Launches the configured test command.
#[derive(Debug, Clone)]
pub struct TestRunner {
    config: RunnerConfig,
}

impl TestRunner {
    /// Create a runner from configuration.
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Run `topic`'s tests, appending its module filter to the arguments.
    pub async fn run_topic(&self, topic: Topic) -> Result<TopicRun> {
        let filter = topic.module_path();
        let mut command = Command::new(&self.config.program);
        command
            .args(&self.config.args)
            .arg(&filter)
            .stdin(Stdio::null())
            .kill_on_drop(true);
        if let Some(dir) = &self.config.workdir {
            command.current_dir(dir);
        }

        tracing::debug!(
            program = %self.config.program,
            args = ?self.config.args,
            %filter,
            "spawning test run"
        );

        let output = command
            .output()
            .await
            .with_context(|| format!("Failed to run '{}'", self.config.program))?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        let tally = parse_tally(&text);

        tracing::debug!(%topic, status = %output.status, ?tally, "test run finished");

        Ok(TopicRun {
            topic,
            tally,
            success: output.status.success(),
            output: text,
        })
    }
}

fn summary_line() -> &'static Regex {
    static SUMMARY: OnceLock<Regex> = OnceLock::new();
    SUMMARY.get_or_init(|| {
        Regex::new(r"test result: \w+\. (\d+) passed; (\d+) failed")
            .unwrap_or_else(|e| unreachable!("summary pattern is valid: {e}"))
    })
}

/// Sum every `test result: ...` line in libtest output.
///
/// Returns `None` when no summary line is present. Counts too large for a
/// `u32` saturate.
pub fn parse_tally(output: &str) -> Option<TestTally> {
    let mut total: Option<TestTally> = None;
    for caps in summary_line().captures_iter(output) {
        let passed = caps[1].parse().unwrap_or(u32::MAX);
        let failed = caps[2].parse().unwrap_or(u32::MAX);
        *total.get_or_insert_with(TestTally::default) += TestTally::new(passed, failed);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_summary() {
        let output = "running 4 tests\n\
            test lists::tests::a ... ok\n\
            \n\
            test result: ok. 4 passed; 0 failed; 0 ignored; 0 measured; 120 filtered out; finished in 0.00s\n";
        assert_eq!(parse_tally(output), Some(TestTally::new(4, 0)));
    }

    #[test]
    fn parse_failed_summary() {
        let output = "test result: FAILED. 3 passed; 2 failed; 0 ignored; 0 measured; 0 filtered out";
        assert_eq!(parse_tally(output), Some(TestTally::new(3, 2)));
    }

    #[test]
    fn parse_sums_every_summary() {
        let output = "test result: ok. 3 passed; 0 failed; 0 ignored\n\
            test result: FAILED. 1 passed; 1 failed; 0 ignored\n\
            test result: ok. 0 passed; 0 failed; 0 ignored\n";
        assert_eq!(parse_tally(output), Some(TestTally::new(4, 1)));
    }

    #[test]
    fn parse_huge_counts_saturate() {
        let output = "test result: ok. 99999999999 passed; 0 failed;\n\
            test result: ok. 1 passed; 0 failed;\n";
        assert_eq!(parse_tally(output), Some(TestTally::new(u32::MAX, 0)));
    }

    #[test]
    fn parse_without_summary_is_none() {
        assert_eq!(parse_tally("error[E0308]: mismatched types"), None);
        assert_eq!(parse_tally(""), None);
    }

    #[test]
    fn counts_default_to_zero() {
        let run = TopicRun {
            topic: Topic::Lists,
            tally: None,
            success: false,
            output: String::new(),
        };
        assert_eq!(run.counts(), TestTally::default());
    }

    #[cfg(unix)]
    fn fake_runner(script: &str) -> TestRunner {
        TestRunner::new(RunnerConfig {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), script.to_string(), "drill".to_string()],
            workdir: None,
        })
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn run_topic_parses_runner_output() {
        let runner = fake_runner("echo \"test result: ok. 5 passed; 0 failed; filter $1\"");
        let run = runner.run_topic(Topic::Sorting).await.unwrap();

        assert!(run.success);
        assert_eq!(run.tally, Some(TestTally::new(5, 0)));
        assert!(run.output.contains("filter sorting::"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn run_topic_reports_failing_exit() {
        let runner = fake_runner("echo 'test result: FAILED. 1 passed; 2 failed;' >&2; exit 101");
        let run = runner.run_topic(Topic::Text).await.unwrap();

        assert!(!run.success);
        assert_eq!(run.counts(), TestTally::new(1, 2));
    }

    #[tokio::test]
    async fn run_topic_missing_program_is_error() {
        let runner = TestRunner::new(RunnerConfig {
            program: "drill-no-such-program".to_string(),
            args: vec![],
            workdir: None,
        });
        let err = runner.run_topic(Topic::Lists).await.unwrap_err();
        assert!(err.to_string().contains("drill-no-such-program"));
    }
}
