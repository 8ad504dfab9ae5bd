//! Loads known-answer vectors from JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::Result;
use super::model::TestSuite;

/// Directory holding the JSON vector files
fn kat_json_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
        .join("kat_json")
}

/// Load `<name>.json` from the vector directory
pub fn load_suite_by_name(suite_name: &str) -> Result<TestSuite> {
    let path = kat_json_dir().join(format!("{}.json", suite_name));
    let json = fs::read_to_string(&path)?;
    let mut suite: TestSuite = serde_json::from_str(&json)?;

    // Handlers match on canonical names
    suite.algorithm = suite.algorithm.trim().to_uppercase();
    for group in &mut suite.groups {
        group.direction = group.direction.trim().to_lowercase();
    }

    log::debug!(
        "loaded {} ({} groups) from {}",
        suite.algorithm,
        suite.groups.len(),
        path.display()
    );
    Ok(suite)
}

/// Every suite shipped with the crate
pub fn load_all_suites() -> Result<Vec<TestSuite>> {
    ["aes256_cbc", "envelope"]
        .into_iter()
        .map(load_suite_by_name)
        .collect()
}
