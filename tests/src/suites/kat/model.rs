//! Pure data model for known-answer vector files.
//! No dependency on the rest of the framework.

use serde::Deserialize;
use std::collections::HashMap;

use super::error::{EngineError, Result};

/// One vector file: a named algorithm and its groups
#[derive(Debug, Deserialize)]
pub struct TestSuite {
    pub algorithm: String,
    pub revision: String,
    #[serde(rename = "testGroups")]
    pub groups: Vec<TestGroup>,
}

/// Cases that share a direction (encrypt / decrypt)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestGroup {
    #[serde(rename = "tgId")]
    pub group_id: u64,
    pub direction: String,
    pub test_type: String,
    pub tests: Vec<TestCase>,
}

/// Leaf-level test case
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    #[serde(rename = "tcId")]
    pub test_id: u64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_expected_result")]
    pub expected_result: String, // valid / invalid
    /// Every other field (key, iv, pt, ct, password, ...)
    #[serde(flatten)]
    pub inputs: HashMap<String, String>,
}

fn default_expected_result() -> String {
    "valid".into()
}

impl TestCase {
    /// A required text field
    pub fn field(&self, name: &'static str) -> Result<&str> {
        self.inputs
            .get(name)
            .map(String::as_str)
            .ok_or(EngineError::MissingField(name))
    }

    /// A text field that may be absent
    pub fn optional(&self, name: &str) -> Option<&str> {
        self.inputs.get(name).map(String::as_str)
    }

    /// A required hex field, decoded
    pub fn hex(&self, name: &'static str) -> Result<Vec<u8>> {
        Ok(hex::decode(self.field(name)?)?)
    }

    /// Whether the operation is supposed to be rejected
    pub fn expects_failure(&self) -> bool {
        self.expected_result == "invalid"
    }
}
