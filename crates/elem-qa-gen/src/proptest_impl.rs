//! Proptest strategies for suite-generation types
//!
//! Strategies build descriptor snapshots with realistic shapes so the
//! classifier, selector, and synthesizer invariants can be fuzzed.

use proptest::prelude::*;

use crate::media::SourceMedia;
use crate::registry::{
    ElementDescriptor, NumericRange, PadDirection, PadTemplateDescriptor, PropertyDescriptor,
    PropertyValue, ValueType,
};

/// Strategy for any reported value type.
pub fn value_type_strategy() -> impl Strategy<Value = ValueType> {
    prop::sample::select(vec![
        ValueType::Boolean,
        ValueType::Int8,
        ValueType::UInt8,
        ValueType::Int16,
        ValueType::UInt16,
        ValueType::Int32,
        ValueType::UInt32,
        ValueType::Int64,
        ValueType::UInt64,
        ValueType::Long,
        ValueType::ULong,
        ValueType::Float,
        ValueType::Double,
        ValueType::Other,
    ])
}

/// Strategy for numeric value types only.
pub fn numeric_value_type_strategy() -> impl Strategy<Value = ValueType> {
    prop::sample::select(vec![
        ValueType::Int8,
        ValueType::UInt8,
        ValueType::Int16,
        ValueType::UInt16,
        ValueType::Int32,
        ValueType::UInt32,
        ValueType::Int64,
        ValueType::UInt64,
        ValueType::Long,
        ValueType::ULong,
        ValueType::Float,
        ValueType::Double,
    ])
}

/// Strategy for property names outside the structural exclusion set.
pub fn property_name_strategy() -> impl Strategy<Value = String> {
    "[a-z]{3,10}(-[a-z]{3,8})?"
        .prop_filter("structural names are excluded from sampling", |name| {
            !crate::property::is_excluded_property(name)
        })
}

/// Strategy for well-ordered integer ranges (`minimum ≤ default ≤ maximum`).
pub fn numeric_range_strategy() -> impl Strategy<Value = NumericRange> {
    (any::<i16>(), 0u16..500, 0u8..=100).prop_map(|(base, width, percent)| {
        let minimum = i64::from(base);
        let maximum = minimum + i64::from(width);
        let default = minimum + i64::from(width) * i64::from(percent) / 100;
        NumericRange::new(
            PropertyValue::Int(minimum),
            PropertyValue::Int(maximum),
            PropertyValue::Int(default),
        )
    })
}

/// Strategy for boolean properties.
pub fn boolean_property_strategy() -> impl Strategy<Value = PropertyDescriptor> {
    property_name_strategy().prop_map(PropertyDescriptor::boolean)
}

/// Strategy for numeric properties with a reported range.
pub fn numeric_property_strategy() -> impl Strategy<Value = PropertyDescriptor> {
    (
        property_name_strategy(),
        numeric_value_type_strategy(),
        numeric_range_strategy(),
    )
        .prop_map(|(name, value_type, range)| {
            PropertyDescriptor::numeric(name, value_type, range)
        })
}

/// Strategy for "other" properties carrying a representative value.
pub fn other_property_strategy() -> impl Strategy<Value = PropertyDescriptor> {
    (property_name_strategy(), "[a-z0-9]{1,12}").prop_map(|(name, current)| {
        PropertyDescriptor::new(name, ValueType::Other).with_current(PropertyValue::Text(current))
    })
}

/// Strategy for any testable property.
pub fn testable_property_strategy() -> impl Strategy<Value = PropertyDescriptor> {
    prop_oneof![
        boolean_property_strategy(),
        numeric_property_strategy(),
        other_property_strategy(),
    ]
}

/// Strategy for audio- or video-classified class strings.
pub fn media_class_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Filter/Effect/Audio",
        "Filter/Effect/Video",
        "Filter/Converter/Audio",
        "Filter/Converter/Video",
        "Visualization/Audio/Video",
    ])
    .prop_map(str::to_string)
}

/// Strategy for elements that pass the capability filter.
pub fn eligible_element_strategy() -> impl Strategy<Value = ElementDescriptor> {
    (
        "[a-z]{4,12}",
        media_class_strategy(),
        prop::collection::vec(testable_property_strategy(), 1..4),
    )
        .prop_map(|(name, media_class, properties)| {
            let caps = if media_class.contains("Audio") {
                "audio/x-raw"
            } else {
                "video/x-raw"
            };
            let mut element = ElementDescriptor::new(name, media_class)
                .with_pad_template(PadTemplateDescriptor::new(
                    PadDirection::Sink,
                    vec![caps.to_string()],
                ))
                .with_pad_template(PadTemplateDescriptor::new(
                    PadDirection::Src,
                    vec![caps.to_string()],
                ));
            for property in properties {
                element = element.with_property(property);
            }
            element
        })
}

/// Strategy for either raw-media lane.
pub fn source_media_strategy() -> impl Strategy<Value = SourceMedia> {
    prop_oneof![Just(SourceMedia::Audio), Just(SourceMedia::Video)]
}
