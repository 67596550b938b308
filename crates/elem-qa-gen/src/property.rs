//! Property classification and boundary value selection
//!
//! Every writable + readable property of an eligible element is sampled at
//! representative boundary values. The classifier collapses the reported
//! value type into a three-way category; the selector is a fixed table from
//! sample index to value, so the sampling rules live in one place.

use serde::{Deserialize, Serialize};

use crate::registry::{PropertyDescriptor, PropertyValue};

/// Name fragments of structural properties that are never boundary-tested.
///
/// Identity, parentage, quality-of-service, latency and message-forwarding
/// attributes configure the element's relationship to the pipeline, not its
/// processing behavior. Matched by substring containment against the
/// property name.
pub const EXCLUDED_PROPERTY_NAMES: &[&str] = &["name", "parent", "qos", "latency", "message-forward"];

/// Check whether a property name falls in the structural exclusion set.
#[must_use]
pub fn is_excluded_property(name: &str) -> bool {
    EXCLUDED_PROPERTY_NAMES
        .iter()
        .any(|excluded| name.contains(excluded))
}

/// Whether a property takes part in boundary testing at all.
///
/// Requires both flags and a name outside the exclusion set. Failing this
/// is a silent skip, not an error.
#[must_use]
pub fn is_testable(property: &PropertyDescriptor) -> bool {
    property.readable && property.writable && !is_excluded_property(&property.name)
}

/// Sampling category of a property, derived from its value type.
///
/// Unrecognized types deliberately land in [`PropertyKind::Other`] and are
/// sampled once with the instance's current value; classification never
/// fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    /// Sampled at both truth values
    Boolean,
    /// Sampled at the reported boundaries and the default
    Numeric,
    /// Sampled once at the current representative value
    Other,
}

impl PropertyKind {
    /// Classify a reported value type.
    #[must_use]
    pub const fn classify(value_type: crate::registry::ValueType) -> Self {
        if value_type.is_boolean() {
            Self::Boolean
        } else if value_type.is_numeric() {
            Self::Numeric
        } else {
            Self::Other
        }
    }

    /// Number of boundary samples this category warrants.
    #[must_use]
    pub const fn sample_count(&self) -> u8 {
        match self {
            Self::Boolean => 2,
            Self::Numeric => 3,
            Self::Other => 1,
        }
    }
}

/// Boundary value for one sample index.
///
/// Indices count down from `sample_count - 1` to `0`:
/// boolean `1 → False`, `0 → True`; numeric `2 → default`, `1 → minimum`,
/// `0 → maximum`; other `0 → current value`. Values are taken exactly as
/// the descriptor reports them, with no rounding or clamping.
///
/// Returns `None` for an out-of-range index, a numeric property whose
/// descriptor carries no range, or an "other" property with no current
/// value.
#[must_use]
pub fn boundary_value(property: &PropertyDescriptor, index: u8) -> Option<PropertyValue> {
    match PropertyKind::classify(property.value_type) {
        PropertyKind::Boolean => match index {
            1 => Some(PropertyValue::Bool(false)),
            0 => Some(PropertyValue::Bool(true)),
            _ => None,
        },
        PropertyKind::Numeric => {
            let range = property.range.as_ref()?;
            match index {
                2 => Some(range.default.clone()),
                1 => Some(range.minimum.clone()),
                0 => Some(range.maximum.clone()),
                _ => None,
            }
        }
        PropertyKind::Other => match index {
            0 => property.current.clone(),
            _ => None,
        },
    }
}

/// All boundary samples for a property, in generation order
/// (descending sample index).
#[must_use]
pub fn boundary_samples(property: &PropertyDescriptor) -> Vec<PropertyValue> {
    let kind = PropertyKind::classify(property.value_type);
    let mut samples = Vec::with_capacity(kind.sample_count() as usize);
    for index in (0..kind.sample_count()).rev() {
        if let Some(value) = boundary_value(property, index) {
            samples.push(value);
        }
    }
    samples
}
