//! Pass/fail counts reported by a test run.

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Number of passed and failed tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TestTally {
    /// Tests that passed.
    pub passed: u32,
    /// Tests that failed.
    pub failed: u32,
}

impl TestTally {
    /// Create a tally.
    pub fn new(passed: u32, failed: u32) -> Self {
        Self { passed, failed }
    }

    /// Tests that ran, saturating at `u32::MAX`.
    pub fn total(&self) -> u32 {
        self.passed.saturating_add(self.failed)
    }

    /// Pass percentage, or `None` when nothing ran.
    pub fn success_rate(&self) -> Option<f64> {
        let ran = f64::from(self.passed) + f64::from(self.failed);
        (ran > 0.0).then(|| f64::from(self.passed) / ran * 100.0)
    }

    /// At least one test ran and none failed.
    pub fn is_green(&self) -> bool {
        self.failed == 0 && self.passed > 0
    }
}

/// Counts saturate instead of wrapping.
impl AddAssign for TestTally {
    fn add_assign(&mut self, rhs: Self) {
        self.passed = self.passed.saturating_add(rhs.passed);
        self.failed = self.failed.saturating_add(rhs.failed);
    }
}
