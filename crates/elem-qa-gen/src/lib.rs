//! Element QA Suite Generator
//!
//! Derives a matrix of smoke-test pipelines for a media framework's plugin
//! elements without hand-authored cases: every writable + readable property
//! of every raw-media transform element is sampled at representative
//! boundary values, and each sample becomes a named, runnable pipeline
//! description.
//!
//! The crate produces data for a validation harness; it never builds or
//! runs a pipeline itself. The harness side of the contract — the element
//! registry, the scenario catalog, and test execution — is reached only
//! through the [`registry::ElementRegistry`], [`suite::ScenarioCatalog`],
//! and [`suite::ValidationHarness`] traits.
//!
//! # Flow
//!
//! [`suite::setup_tests`] installs the static [`blacklist`], walks the
//! registry snapshot through the [`media`] capability filter, samples each
//! eligible property via [`property`], synthesizes a [`pipeline`] per
//! sample, and registers one generator with the harness.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
// Allow common patterns
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::module_name_repetitions)]
// Allow common patterns in test code
#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::redundant_clone))]
#![cfg_attr(test, allow(clippy::float_cmp))]

pub mod blacklist;
pub mod error;
pub mod media;
pub mod pipeline;
pub mod property;
pub mod proptest_impl;
pub mod registry;
pub mod suite;

pub use blacklist::{default_blacklist, BlacklistEntry, LAUNCH_PIPELINE_PREFIX};
pub use error::{Error, Result};
pub use media::{is_eligible, MediaKind, RawCapsProfile, SourceMedia, RAW_AUDIO_CAPS, RAW_VIDEO_CAPS};
pub use pipeline::{test_name, PipelineDescription, Stage, NUM_BUFFERS};
pub use property::{
    boundary_samples, boundary_value, is_excluded_property, is_testable, PropertyKind,
    EXCLUDED_PROPERTY_NAMES,
};
pub use registry::{
    ElementDescriptor, ElementRegistry, NumericRange, PadDirection, PadTemplateDescriptor,
    PropertyDescriptor, PropertyValue, SnapshotRegistry, ValueType,
};
pub use suite::{
    element_test_cases, generate_suite, setup_tests, PipelineTestCase, PipelineTestsGenerator,
    RecordingHarness, ScenarioCatalog, SetupOptions, StaticScenarioCatalog, ValidationHarness,
    DEFAULT_VALID_SCENARIOS, GENERATOR_NAME,
};
