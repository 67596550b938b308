//! Structured pipeline composition and test naming
//!
//! Generated pipelines are ordered lists of typed stages; the textual
//! launch description is produced only at the boundary, by [`PipelineDescription::render`].
//! Synthesis itself never touches string formatting beyond per-stage
//! rendering, which keeps the chain logic testable against the harness's
//! launch grammar.

use serde::{Deserialize, Serialize};

use crate::media::SourceMedia;
use crate::registry::PropertyValue;

/// Buffers requested from the synthetic source so every generated pipeline
/// terminates deterministically.
pub const NUM_BUFFERS: u32 = 20;

/// One stage of a generated pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Bounded synthetic source feeding the element under test
    TestSource {
        /// Raw-media lane to synthesize
        media: SourceMedia,
        /// Buffers requested before end-of-stream
        num_buffers: u32,
    },
    /// The element under test with one property assignment
    Element {
        /// Factory name of the element
        name: String,
        /// Property being boundary-tested
        property: String,
        /// Sampled value
        value: PropertyValue,
    },
    /// Format converter in front of the real sink
    Converter {
        /// Lane whose converter is used
        media: SourceMedia,
    },
    /// Placeholder the harness substitutes with its configured sink
    SinkPlaceholder {
        /// Lane whose sink placeholder is used
        media: SourceMedia,
    },
    /// Discard sink used when output is muted
    FakeSink,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TestSource { media, num_buffers } => {
                write!(f, "{} num-buffers={num_buffers}", media.test_source())
            }
            Self::Element {
                name,
                property,
                value,
            } => write!(f, "{name} {property}={value}"),
            Self::Converter { media } => write!(f, "{}", media.converter()),
            Self::SinkPlaceholder { media } => write!(f, "{}", media.sink_placeholder()),
            Self::FakeSink => write!(f, "fakesink"),
        }
    }
}

/// Ordered stage chain describing one runnable pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineDescription {
    stages: Vec<Stage>,
}

impl PipelineDescription {
    /// Pipeline for one `(element, property, value)` sample.
    ///
    /// The chain is: bounded test source, the element with the sampled
    /// assignment, then either a lane-matched converter and sink
    /// placeholder, or a discard sink when `mute` is set.
    #[must_use]
    pub fn for_sample(
        element: &str,
        media: SourceMedia,
        property: &str,
        value: PropertyValue,
        mute: bool,
    ) -> Self {
        let mut stages = vec![
            Stage::TestSource {
                media,
                num_buffers: NUM_BUFFERS,
            },
            Stage::Element {
                name: element.to_string(),
                property: property.to_string(),
                value,
            },
        ];
        if mute {
            stages.push(Stage::FakeSink);
        } else {
            stages.push(Stage::Converter { media });
            stages.push(Stage::SinkPlaceholder { media });
        }
        Self { stages }
    }

    /// The typed stages, in order.
    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Textual chain in the harness's launch grammar.
    #[must_use]
    pub fn render(&self) -> String {
        self.stages
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ! ")
    }
}

impl std::fmt::Display for PipelineDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Stable test name for one sample.
///
/// The element name and the `property=value` fragment are concatenated
/// without a separator to keep identifiers compact; distinct
/// `(element, property, value)` triples always produce distinct names.
#[must_use]
pub fn test_name(element: &str, property: &str, value: &PropertyValue) -> String {
    format!("{element}{property}={value}")
}
