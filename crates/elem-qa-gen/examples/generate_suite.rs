//! Example: Generating a smoke-test suite
//!
//! This example demonstrates how to build a registry snapshot, run suite
//! generation against it, and inspect what a harness would receive.
//!
//! Run with: `cargo run --example generate_suite -p elem-qa-gen`

#![allow(clippy::missing_panics_doc)]

use elem_qa_gen::{
    setup_tests, ElementDescriptor, NumericRange, PadDirection, PadTemplateDescriptor,
    PropertyDescriptor, PropertyValue, RecordingHarness, SetupOptions, SnapshotRegistry,
    StaticScenarioCatalog, ValueType,
};

fn main() {
    // Describe a couple of elements the way a registry snapshot would
    let mut registry = SnapshotRegistry::new();
    registry.add(
        ElementDescriptor::new("videoflip", "Filter/Effect/Video")
            .with_property(PropertyDescriptor::boolean("flip"))
            .with_property(PropertyDescriptor::numeric(
                "method",
                ValueType::Int32,
                NumericRange::new(
                    PropertyValue::Int(0),
                    PropertyValue::Int(7),
                    PropertyValue::Int(0),
                ),
            ))
            .with_pad_template(PadTemplateDescriptor::new(
                PadDirection::Sink,
                vec!["video/x-raw".to_string()],
            ))
            .with_pad_template(PadTemplateDescriptor::new(
                PadDirection::Src,
                vec!["video/x-raw".to_string()],
            )),
    );
    registry.add(
        ElementDescriptor::new("volume", "Filter/Effect/Audio")
            .with_property(PropertyDescriptor::numeric(
                "volume",
                ValueType::Double,
                NumericRange::new(
                    PropertyValue::Float(0.0),
                    PropertyValue::Float(10.0),
                    PropertyValue::Float(1.0),
                ),
            ))
            .with_pad_template(PadTemplateDescriptor::new(
                PadDirection::Sink,
                vec!["audio/x-raw".to_string()],
            ))
            .with_pad_template(PadTemplateDescriptor::new(
                PadDirection::Src,
                vec!["audio/x-raw".to_string()],
            )),
    );

    let catalog = StaticScenarioCatalog::new(vec![
        "play_15s".to_string(),
        "seek_forward".to_string(),
    ]);
    let mut harness = RecordingHarness::new();

    setup_tests(&registry, &catalog, &mut harness, SetupOptions::default())
        .expect("snapshot registries never fail introspection");

    let generator = &harness.generators()[0];
    println!(
        "Generator {} carries {} test cases:",
        generator.name,
        generator.test_cases.len()
    );
    println!();

    for case in &generator.test_cases {
        println!("  {}", case.name);
        println!("    {}", case.pipeline_description());
    }

    println!();
    println!("Blacklisted patterns: {}", harness.blacklist().len());
    println!("Scenarios forwarded:  {:?}", harness.scenarios());
}
