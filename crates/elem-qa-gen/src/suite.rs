//! Suite assembly and harness registration
//!
//! Drives the whole generation pass: walk the registry snapshot, filter
//! eligible elements, sample every testable property, and hand the harness
//! one generator carrying the accumulated cases, the static blacklist, and
//! the full scenario list.

use serde::{Deserialize, Serialize};

use crate::blacklist::{default_blacklist, BlacklistEntry};
use crate::error::Result;
use crate::media::{self, MediaKind};
use crate::pipeline::{self, PipelineDescription};
use crate::property;
use crate::registry::{ElementDescriptor, ElementRegistry};

/// Fixed identifier under which the generator registers with the harness.
pub const GENERATOR_NAME: &str = "validate_elements";

/// Scenario the generated pipelines are known to combine with.
pub const DEFAULT_VALID_SCENARIOS: &[&str] = &["play_15s"];

/// Options recognized by [`setup_tests`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupOptions {
    /// Force a discard sink instead of a class-appropriate sink
    #[serde(default)]
    pub mute: bool,
}

impl SetupOptions {
    /// Options with muted output.
    #[must_use]
    pub const fn muted() -> Self {
        Self { mute: true }
    }
}

/// One generated smoke test: a unique name and the pipeline it launches.
///
/// Immutable once created; ownership moves to the harness on registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineTestCase {
    /// Test name, derived from `(element, property, value)`
    pub name: String,
    /// Structured pipeline; rendered to text at the harness boundary
    pub pipeline: PipelineDescription,
}

impl PipelineTestCase {
    /// Textual pipeline description handed to the harness.
    #[must_use]
    pub fn pipeline_description(&self) -> String {
        self.pipeline.render()
    }
}

/// Generator object registered with the harness under a fixed name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineTestsGenerator {
    /// Generator identifier
    pub name: String,
    /// Accumulated test cases, in generation order
    pub test_cases: Vec<PipelineTestCase>,
    /// Scenarios the generated pipelines are valid for
    pub valid_scenarios: Vec<String>,
}

impl PipelineTestsGenerator {
    /// Create a generator with no valid-scenario restriction.
    #[must_use]
    pub fn new(name: impl Into<String>, test_cases: Vec<PipelineTestCase>) -> Self {
        Self {
            name: name.into(),
            test_cases,
            valid_scenarios: Vec::new(),
        }
    }

    /// Restrict the generator to the given scenarios.
    #[must_use]
    pub fn with_valid_scenarios(mut self, valid_scenarios: Vec<String>) -> Self {
        self.valid_scenarios = valid_scenarios;
        self
    }
}

/// The validation harness's registration surface.
///
/// The harness owns everything passed through these methods; this crate
/// never reads any of it back.
pub trait ValidationHarness {
    /// Install the known-failure suppression list.
    fn set_default_blacklist(&mut self, entries: Vec<BlacklistEntry>);

    /// Forward scenario names the harness may overlay onto pipelines.
    fn add_scenarios(&mut self, scenarios: Vec<String>);

    /// Register a generator carrying the accumulated test cases.
    fn add_generator(&mut self, generator: PipelineTestsGenerator);
}

/// Source of scenario overlay names.
pub trait ScenarioCatalog {
    /// Scenario names matching `filter`; `None` lists every known scenario.
    fn list_scenarios(&self, filter: Option<&str>) -> Vec<String>;
}

/// In-memory catalog serving a fixed name list.
#[derive(Debug, Clone, Default)]
pub struct StaticScenarioCatalog {
    scenarios: Vec<String>,
}

impl StaticScenarioCatalog {
    /// Create a catalog from its scenario names.
    #[must_use]
    pub fn new(scenarios: Vec<String>) -> Self {
        Self { scenarios }
    }
}

impl ScenarioCatalog for StaticScenarioCatalog {
    fn list_scenarios(&self, filter: Option<&str>) -> Vec<String> {
        match filter {
            None => self.scenarios.clone(),
            Some(name) => self
                .scenarios
                .iter()
                .filter(|scenario| scenario.as_str() == name)
                .cloned()
                .collect(),
        }
    }
}

/// Harness stand-in that records everything registered with it.
///
/// Used by the CLI to materialize a suite and by tests to observe setup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingHarness {
    blacklist: Vec<BlacklistEntry>,
    scenarios: Vec<String>,
    generators: Vec<PipelineTestsGenerator>,
}

impl RecordingHarness {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded blacklist.
    #[must_use]
    pub fn blacklist(&self) -> &[BlacklistEntry] {
        &self.blacklist
    }

    /// The recorded scenario names.
    #[must_use]
    pub fn scenarios(&self) -> &[String] {
        &self.scenarios
    }

    /// The recorded generators.
    #[must_use]
    pub fn generators(&self) -> &[PipelineTestsGenerator] {
        &self.generators
    }
}

impl ValidationHarness for RecordingHarness {
    fn set_default_blacklist(&mut self, entries: Vec<BlacklistEntry>) {
        self.blacklist = entries;
    }

    fn add_scenarios(&mut self, scenarios: Vec<String>) {
        self.scenarios.extend(scenarios);
    }

    fn add_generator(&mut self, generator: PipelineTestsGenerator) {
        self.generators.push(generator);
    }
}

/// All test cases for one element, in property-descriptor order and, within
/// a property, descending sample-index order.
///
/// Elements whose class names neither raw-media kind contribute nothing;
/// untestable properties are skipped silently.
#[must_use]
pub fn element_test_cases(
    element: &ElementDescriptor,
    options: SetupOptions,
) -> Vec<PipelineTestCase> {
    let Some(lane) = MediaKind::from_class(&element.media_class).source_media() else {
        return Vec::new();
    };
    let mut cases = Vec::new();
    for prop in &element.properties {
        if !property::is_testable(prop) {
            continue;
        }
        for value in property::boundary_samples(prop) {
            cases.push(PipelineTestCase {
                name: pipeline::test_name(&element.name, &prop.name, &value),
                pipeline: PipelineDescription::for_sample(
                    &element.name,
                    lane,
                    &prop.name,
                    value,
                    options.mute,
                ),
            });
        }
    }
    cases
}

/// Generate the full suite from a registry snapshot, preserving registry
/// iteration order.
///
/// # Errors
///
/// Registry introspection failures propagate unchanged; there is no
/// partial-success mode.
pub fn generate_suite(
    registry: &dyn ElementRegistry,
    options: SetupOptions,
) -> Result<Vec<PipelineTestCase>> {
    let mut cases = Vec::new();
    for element in registry.element_factories()? {
        if !media::is_eligible(&element) {
            continue;
        }
        cases.extend(element_test_cases(&element, options));
    }
    Ok(cases)
}

/// Populate the harness: blacklist first, then the generated suite and the
/// full, unfiltered scenario list, registered as one generator.
///
/// # Errors
///
/// A registry failure aborts setup after the blacklist is installed but
/// before any scenario or generator reaches the harness; no partial suite
/// is ever handed over.
pub fn setup_tests(
    registry: &dyn ElementRegistry,
    catalog: &dyn ScenarioCatalog,
    harness: &mut dyn ValidationHarness,
    options: SetupOptions,
) -> Result<bool> {
    harness.set_default_blacklist(default_blacklist());
    let test_cases = generate_suite(registry, options)?;
    harness.add_scenarios(catalog.list_scenarios(None));
    harness.add_generator(
        PipelineTestsGenerator::new(GENERATOR_NAME, test_cases).with_valid_scenarios(
            DEFAULT_VALID_SCENARIOS
                .iter()
                .map(|scenario| (*scenario).to_string())
                .collect(),
        ),
    );
    Ok(true)
}
