//! Element metadata model and registry access
//!
//! Defines the read-only descriptor snapshot this crate consumes: elements,
//! their configurable properties, and their pad templates. The live registry
//! is an external collaborator reached through [`ElementRegistry`];
//! [`SnapshotRegistry`] is the serde-backed implementation used by tests and
//! the CLI.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Value type of a configurable element property.
///
/// Fixed enumeration; anything the framework reports outside it maps to
/// [`ValueType::Other`] and is still sampled once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Two-valued flag
    Boolean,
    /// 8-bit signed integer
    Int8,
    /// 8-bit unsigned integer
    UInt8,
    /// 16-bit signed integer
    Int16,
    /// 16-bit unsigned integer
    UInt16,
    /// 32-bit signed integer
    Int32,
    /// 32-bit unsigned integer
    UInt32,
    /// 64-bit signed integer
    Int64,
    /// 64-bit unsigned integer
    UInt64,
    /// Platform-width signed integer
    Long,
    /// Platform-width unsigned integer
    ULong,
    /// Single-precision floating point
    Float,
    /// Double-precision floating point
    Double,
    /// Anything else: strings, enums, objects, unrecognized kinds
    Other,
}

impl ValueType {
    /// All integer-like and floating-point kinds.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Int8
                | Self::UInt8
                | Self::Int16
                | Self::UInt16
                | Self::Int32
                | Self::UInt32
                | Self::Int64
                | Self::UInt64
                | Self::Long
                | Self::ULong
                | Self::Float
                | Self::Double
        )
    }

    /// Check for the boolean kind.
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean)
    }
}

/// A concrete property value as it appears in a pipeline description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyValue {
    /// Boolean value
    Bool(bool),
    /// Signed integer value
    Int(i64),
    /// Unsigned integer value
    UInt(u64),
    /// Floating-point value
    Float(f64),
    /// Textual representation of a non-numeric, non-boolean value
    Text(String),
}

impl std::fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Capitalized booleans per the harness launch grammar
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
        }
    }
}

/// Boundary values reported by a numeric property descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    /// Smallest accepted value
    pub minimum: PropertyValue,
    /// Largest accepted value
    pub maximum: PropertyValue,
    /// Value the property holds on a fresh instance
    pub default: PropertyValue,
}

impl NumericRange {
    /// Create a range from its three boundary values.
    #[must_use]
    pub const fn new(minimum: PropertyValue, maximum: PropertyValue, default: PropertyValue) -> Self {
        Self {
            minimum,
            maximum,
            default,
        }
    }
}

/// A named, typed, flag-gated configuration attribute of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Property name, unique within its element
    pub name: String,
    /// Reported value type
    pub value_type: ValueType,
    /// Whether the property can be read back
    pub readable: bool,
    /// Whether the property can be set
    pub writable: bool,
    /// Boundary values; only meaningful for numeric properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<NumericRange>,
    /// Representative current value read from a throwaway instance,
    /// populated by the registry for non-numeric, non-boolean properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<PropertyValue>,
}

impl PropertyDescriptor {
    /// Create a readable + writable property of the given type.
    #[must_use]
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            readable: true,
            writable: true,
            range: None,
            current: None,
        }
    }

    /// Shorthand for a boolean property.
    #[must_use]
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, ValueType::Boolean)
    }

    /// Shorthand for a numeric property with its reported boundaries.
    #[must_use]
    pub fn numeric(name: impl Into<String>, value_type: ValueType, range: NumericRange) -> Self {
        Self::new(name, value_type).with_range(range)
    }

    /// Attach a numeric range.
    #[must_use]
    pub fn with_range(mut self, range: NumericRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Attach a representative current value.
    #[must_use]
    pub fn with_current(mut self, current: PropertyValue) -> Self {
        self.current = Some(current);
        self
    }

    /// Override the readable/writable flags.
    #[must_use]
    pub const fn with_flags(mut self, readable: bool, writable: bool) -> Self {
        self.readable = readable;
        self.writable = writable;
        self
    }
}

/// Direction of a declared pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PadDirection {
    /// Output pad
    Src,
    /// Input pad
    Sink,
}

/// A declared input/output port on an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PadTemplateDescriptor {
    /// Pad direction
    pub direction: PadDirection,
    /// Media-type structure names the pad can carry. An empty list means
    /// the template declared no usable caps and is ignored.
    pub caps: Vec<String>,
}

impl PadTemplateDescriptor {
    /// Create a pad template from a direction and its structure names.
    #[must_use]
    pub fn new(direction: PadDirection, caps: Vec<String>) -> Self {
        Self { direction, caps }
    }
}

/// Read-only snapshot of one element factory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementDescriptor {
    /// Factory name, unique per registry
    pub name: String,
    /// Free-text classification string, e.g. `"Filter/Effect/Video"`
    pub media_class: String,
    /// Configurable properties, in descriptor order
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
    /// Declared pads
    #[serde(default)]
    pub pad_templates: Vec<PadTemplateDescriptor>,
}

impl ElementDescriptor {
    /// Create an element with no properties or pads.
    #[must_use]
    pub fn new(name: impl Into<String>, media_class: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            media_class: media_class.into(),
            properties: Vec::new(),
            pad_templates: Vec::new(),
        }
    }

    /// Append a property descriptor.
    #[must_use]
    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    /// Append a pad template.
    #[must_use]
    pub fn with_pad_template(mut self, template: PadTemplateDescriptor) -> Self {
        self.pad_templates.push(template);
        self
    }
}

/// Read-only source of element metadata.
///
/// Queried exactly once per setup. Implementations hand out a stable
/// snapshot; this crate never re-queries mid-run and never mutates
/// anything behind the trait.
pub trait ElementRegistry {
    /// All element factories, in registry iteration order.
    ///
    /// # Errors
    ///
    /// Any failure listing factories or instantiating an element to read
    /// its property metadata is returned as-is and aborts setup.
    fn element_factories(&self) -> Result<Vec<ElementDescriptor>>;
}

/// In-memory registry snapshot, loadable from YAML or JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRegistry {
    elements: Vec<ElementDescriptor>,
}

impl SnapshotRegistry {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element, preserving insertion order.
    pub fn add(&mut self, element: ElementDescriptor) {
        self.elements.push(element);
    }

    /// Number of elements in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Parse a snapshot from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid snapshot.
    pub fn from_yaml(input: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// Parse a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid snapshot.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a snapshot file, dispatching on the `.json` extension and
    /// treating everything else as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Err(Error::InvalidSnapshot(format!(
                "{} is empty",
                path.display()
            )));
        }
        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Serialize the snapshot to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl ElementRegistry for SnapshotRegistry {
    fn element_factories(&self) -> Result<Vec<ElementDescriptor>> {
        Ok(self.elements.clone())
    }
}
