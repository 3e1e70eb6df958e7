//! Test fixture loader for SnapShelf golden prediction scenarios.
//!
//! Provides typed deserialization of the fixture JSON files and helpers for
//! loading them in tests across crates.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Directory holding `golden/`, found by searching upward from the
/// calling crate's manifest so every workspace member resolves the same files.
fn fixtures_root() -> PathBuf {
    let start = std::env::var("CARGO_MANIFEST_DIR")
        .map_or_else(|_| PathBuf::from("."), PathBuf::from);
    start
        .ancestors()
        .map(|dir| dir.join("test-fixtures"))
        .find(|candidate| candidate.join("golden").is_dir())
        .unwrap_or_else(|| panic!("no test-fixtures/golden above {}", start.display()))
}

/// Read a fixture relative to the fixtures root and parse it as JSON.
///
/// # Panics
/// On a missing file or a document that does not match `T`; a broken
/// fixture should fail the test that loads it.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let raw = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("reading {}: {e}", path.display()));
    serde_json::from_str(&raw).unwrap_or_else(|e| panic!("parsing {}: {e}", path.display()))
}

/// Whether `relative_path` names an existing fixture.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).is_file()
}

/// One golden prediction scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpiryScenario {
    pub description: String,
    pub input: ScenarioInput,
    pub expected: ScenarioExpected,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioInput {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub storage_location: Option<String>,
    pub purchase_date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioExpected {
    pub expiry_date: NaiveDate,
    pub confidence: f64,
    pub tier: String,
    /// Lower-case fragments the reasoning must contain.
    #[serde(default)]
    pub reasoning_contains: Vec<String>,
}

/// Load the golden expiry scenarios.
pub fn load_expiry_scenarios() -> Vec<ExpiryScenario> {
    load_fixture("golden/expiry_scenarios.json")
}
