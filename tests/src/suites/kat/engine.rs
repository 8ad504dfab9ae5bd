//! Engine that routes each case to its registered handler

use super::dispatcher::{DispatchKey, REGISTRY};
use super::error::{EngineError, Result};
use super::model::{TestCase, TestGroup};
use super::runner::VectorEngine;

/// Concrete engine used by the tests: one instance suffices for all suites.
pub struct PwcryptEngine;

impl VectorEngine for PwcryptEngine {
    fn run(&self, algorithm: &str, group: &TestGroup, case: &TestCase) -> Result<()> {
        let key = DispatchKey {
            algo: algorithm.to_string(),
            dir: group.direction.clone(),
        };

        let handler = REGISTRY.get(&key).ok_or_else(|| EngineError::Unsupported {
            algo: key.algo.clone(),
            dir: key.dir.clone(),
        })?;
        handler(group, case)
    }
}
