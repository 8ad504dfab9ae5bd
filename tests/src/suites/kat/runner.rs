//! Generic driver that executes a `TestSuite` using a pluggable engine.

use super::error::Result;
use super::model::{TestCase, TestGroup, TestSuite};

/// Trait every back-end must implement.
pub trait VectorEngine {
    /// Execute one test case and return `Ok(())` if it produced the
    /// expected output.
    fn run(&self, algorithm: &str, group: &TestGroup, case: &TestCase) -> Result<()>;
}

/// Tally of one suite run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
}

/// Thin wrapper that walks suites and tallies results.
pub struct Runner<'e, E: VectorEngine> {
    engine: &'e E,
}

impl<'e, E: VectorEngine> Runner<'e, E> {
    pub fn new(engine: &'e E) -> Self {
        Self { engine }
    }

    /// Run every case; a case expected to be invalid passes when the
    /// handler rejects it.
    pub fn run_suite(&self, suite: &TestSuite) -> Summary {
        let mut summary = Summary::default();

        for group in &suite.groups {
            log::info!(
                "running group {}: {} {} ({})",
                group.group_id,
                suite.algorithm,
                group.direction,
                group.test_type
            );

            for case in &group.tests {
                let res = self.engine.run(&suite.algorithm, group, case);
                match (res, case.expects_failure()) {
                    (Ok(()), false) | (Err(_), true) => summary.passed += 1,
                    (Ok(()), true) => {
                        summary.failed += 1;
                        log::error!(
                            "case {} ({}) succeeded but was expected to fail",
                            case.test_id,
                            case.description.as_deref().unwrap_or("-")
                        );
                    }
                    (Err(e), false) => {
                        summary.failed += 1;
                        log::error!("case {} failed: {}", case.test_id, e);
                    }
                }
            }
        }

        log::info!(
            "{}: {} passed, {} failed",
            suite.algorithm,
            summary.passed,
            summary.failed
        );
        summary
    }
}
