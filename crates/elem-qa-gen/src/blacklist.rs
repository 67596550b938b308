//! Static registry of known-failing generated tests
//!
//! Installed unconditionally at setup, independent of which elements the
//! current registry actually carries; patterns for absent elements are
//! harmless no-ops at match time. Pattern matching itself belongs to the
//! harness; this module only supplies the literal strings.

use serde::{Deserialize, Serialize};

/// Prefix the harness puts in front of every launch-pipeline test name.
pub const LAUNCH_PIPELINE_PREFIX: &str = "validate.launch_pipeline.";

/// A known-failing test-name pattern with its justification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlacklistEntry {
    /// Glob-like pattern matched against full test names by the harness
    pub pattern: String,
    /// Human-readable reason, usually a tracker link
    pub reason: String,
}

impl BlacklistEntry {
    /// Create an entry from a pattern and its reason.
    #[must_use]
    pub fn new(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Create an entry for every test generated from one element prefix.
    #[must_use]
    pub fn for_element_prefix(prefix: &str, reason: impl Into<String>) -> Self {
        Self::new(format!("{LAUNCH_PIPELINE_PREFIX}{prefix}*"), reason)
    }
}

/// Known-broken generated cases, suppressed by the harness.
#[must_use]
pub fn default_blacklist() -> Vec<BlacklistEntry> {
    [
        (
            "videocrop",
            "https://bugzilla.gnome.org/show_bug.cgi?id=743910",
        ),
        (
            "videobox",
            "https://bugzilla.gnome.org/show_bug.cgi?id=743909",
        ),
        (
            "simplevideomark",
            "https://bugzilla.gnome.org/show_bug.cgi?id=743908",
        ),
        (
            "exclusion",
            "https://bugzilla.gnome.org/show_bug.cgi?id=743907",
        ),
        (
            "quarktv",
            "https://bugzilla.gnome.org/show_bug.cgi?id=743906",
        ),
        ("frei0r", "video filter plugins"),
        (
            "fieldanalysis",
            "https://bugzilla.gnome.org/show_bug.cgi?id=744188",
        ),
        (
            "interleave",
            "https://bugzilla.gnome.org/show_bug.cgi?id=744211",
        ),
        (
            "spectrum",
            "https://bugzilla.gnome.org/show_bug.cgi?id=744213",
        ),
        ("level", "https://bugzilla.gnome.org/show_bug.cgi?id=745515"),
        (
            "smpte",
            "smpte cannot be tested with simple pipeline. Hence excluding",
        ),
    ]
    .into_iter()
    .map(|(prefix, reason)| BlacklistEntry::for_element_prefix(prefix, reason))
    .collect()
}
