//! Shared helpers for the elem-qa CLI
//!
//! Bridges registry snapshot files to the suite generator and flattens the
//! recorded harness state into serializable reports. The textual pipeline
//! form is produced here, at the output boundary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::doc_markdown)]
#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

use std::path::Path;

use serde::Serialize;

use elem_qa_gen::{
    element_test_cases, is_eligible, setup_tests, ElementRegistry, PipelineTestsGenerator,
    RecordingHarness, Result, SetupOptions, SnapshotRegistry, StaticScenarioCatalog,
};

/// One generated test in the flat name/description form the harness runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCase {
    /// Test name
    pub name: String,
    /// Rendered pipeline description
    pub pipeline: String,
}

/// Report form of one registered generator.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratorReport {
    /// Generator identifier
    pub name: String,
    /// Scenarios the generated pipelines are valid for
    pub valid_scenarios: Vec<String>,
    /// Generated tests, in generation order
    pub tests: Vec<RenderedCase>,
}

impl GeneratorReport {
    fn from_generator(generator: &PipelineTestsGenerator) -> Self {
        Self {
            name: generator.name.clone(),
            valid_scenarios: generator.valid_scenarios.clone(),
            tests: generator
                .test_cases
                .iter()
                .map(|case| RenderedCase {
                    name: case.name.clone(),
                    pipeline: case.pipeline_description(),
                })
                .collect(),
        }
    }
}

/// Everything setup hands to the harness, in report form.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    /// Known-failure suppression patterns
    pub blacklist: Vec<elem_qa_gen::BlacklistEntry>,
    /// Scenario names forwarded unfiltered
    pub scenarios: Vec<String>,
    /// Registered generators
    pub generators: Vec<GeneratorReport>,
}

impl SuiteReport {
    /// Flatten a recorded harness into a report.
    #[must_use]
    pub fn from_harness(harness: &RecordingHarness) -> Self {
        Self {
            blacklist: harness.blacklist().to_vec(),
            scenarios: harness.scenarios().to_vec(),
            generators: harness
                .generators()
                .iter()
                .map(GeneratorReport::from_generator)
                .collect(),
        }
    }

    /// Total generated tests across all generators.
    #[must_use]
    pub fn total_tests(&self) -> usize {
        self.generators
            .iter()
            .map(|generator| generator.tests.len())
            .sum()
    }

    /// Serialize the report as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Serialize the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Run setup against an in-memory registry and record what the harness
/// receives.
///
/// # Errors
///
/// Propagates registry introspection failures.
pub fn report_from_registry(
    registry: &dyn ElementRegistry,
    scenarios: Vec<String>,
    options: SetupOptions,
) -> Result<SuiteReport> {
    let catalog = StaticScenarioCatalog::new(scenarios);
    let mut harness = RecordingHarness::new();
    setup_tests(registry, &catalog, &mut harness, options)?;
    Ok(SuiteReport::from_harness(&harness))
}

/// Run setup against a snapshot file.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be read or parsed, or if
/// registry introspection fails.
pub fn build_report(
    snapshot: &Path,
    scenarios: Vec<String>,
    options: SetupOptions,
) -> Result<SuiteReport> {
    let registry = SnapshotRegistry::load(snapshot)?;
    report_from_registry(&registry, scenarios, options)
}

/// Eligibility summary for one snapshot element.
#[derive(Debug, Clone, Serialize)]
pub struct ElementStatus {
    /// Factory name
    pub name: String,
    /// Free-text class string
    pub media_class: String,
    /// Whether the capability filter admits the element
    pub eligible: bool,
    /// Test cases the element would contribute
    pub test_cases: usize,
}

/// Summarize every element in a snapshot file.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be read or parsed.
pub fn list_elements(snapshot: &Path) -> Result<Vec<ElementStatus>> {
    let registry = SnapshotRegistry::load(snapshot)?;
    let options = SetupOptions::default();
    Ok(registry
        .element_factories()?
        .iter()
        .map(|element| {
            let eligible = is_eligible(element);
            ElementStatus {
                name: element.name.clone(),
                media_class: element.media_class.clone(),
                eligible,
                test_cases: if eligible {
                    element_test_cases(element, options).len()
                } else {
                    0
                },
            }
        })
        .collect())
}
