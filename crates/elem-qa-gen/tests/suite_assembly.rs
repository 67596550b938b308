//! Integration tests for elem-qa-gen
//!
//! Exercises the full path from a registry snapshot through suite assembly
//! to harness registration.

use elem_qa_gen::{
    generate_suite, setup_tests, ElementDescriptor, NumericRange, PadDirection,
    PadTemplateDescriptor, PropertyDescriptor, PropertyValue, RecordingHarness, SetupOptions,
    SnapshotRegistry, StaticScenarioCatalog, ValueType, GENERATOR_NAME,
};

fn raw_transform(name: &str, media_class: &str, caps: &str) -> ElementDescriptor {
    ElementDescriptor::new(name, media_class)
        .with_pad_template(PadTemplateDescriptor::new(
            PadDirection::Sink,
            vec![caps.to_string()],
        ))
        .with_pad_template(PadTemplateDescriptor::new(
            PadDirection::Src,
            vec![caps.to_string()],
        ))
}

fn demo_registry() -> SnapshotRegistry {
    let mut registry = SnapshotRegistry::new();

    // Eligible video filter: one boolean, one numeric property
    registry.add(
        raw_transform("videoflip", "Filter/Effect/Video", "video/x-raw")
            .with_property(PropertyDescriptor::boolean("flip"))
            .with_property(PropertyDescriptor::numeric(
                "angle",
                ValueType::Int32,
                NumericRange::new(
                    PropertyValue::Int(0),
                    PropertyValue::Int(360),
                    PropertyValue::Int(0),
                ),
            )),
    );

    // Eligible audio filter with a structural property that must be skipped
    registry.add(
        raw_transform("volume", "Filter/Effect/Audio", "audio/x-raw")
            .with_property(PropertyDescriptor::boolean("qos"))
            .with_property(PropertyDescriptor::boolean("mute")),
    );

    // Sink-only element: classified but not a transform
    registry.add(
        ElementDescriptor::new("autovideosink", "Sink/Video")
            .with_property(PropertyDescriptor::boolean("sync"))
            .with_pad_template(PadTemplateDescriptor::new(
                PadDirection::Sink,
                vec!["video/x-raw".to_string()],
            )),
    );

    // Unclassified element: raw pads both ways but no media class
    registry.add(
        raw_transform("identity", "Generic", "video/x-raw")
            .with_property(PropertyDescriptor::boolean("check-imperfect-timestamp")),
    );

    registry
}

#[test]
fn test_full_suite_contents() {
    let registry = demo_registry();
    let cases = generate_suite(&registry, SetupOptions::default()).expect("generate");

    // videoflip: 2 boolean + 3 numeric; volume: 2 boolean (qos skipped)
    assert_eq!(cases.len(), 7);

    let names: Vec<&str> = cases.iter().map(|case| case.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "videoflipflip=False",
            "videoflipflip=True",
            "videoflipangle=0",
            "videoflipangle=0",
            "videoflipangle=360",
            "volumemute=False",
            "volumemute=True",
        ]
    );
}

#[test]
fn test_boolean_example_pipelines() {
    let registry = demo_registry();
    let cases = generate_suite(&registry, SetupOptions::default()).expect("generate");

    assert_eq!(
        cases[0].pipeline_description(),
        "videotestsrc num-buffers=20 ! videoflip flip=False ! videoconvert ! %(videosink)s"
    );
    assert_eq!(
        cases[1].pipeline_description(),
        "videotestsrc num-buffers=20 ! videoflip flip=True ! videoconvert ! %(videosink)s"
    );
}

#[test]
fn test_numeric_example_samples_degenerate_default() {
    let registry = demo_registry();
    let cases = generate_suite(&registry, SetupOptions::default()).expect("generate");

    // angle: default 0, minimum 0, maximum 360, emitted in that order
    let angle_cases: Vec<_> = cases
        .iter()
        .filter(|case| case.name.starts_with("videoflipangle"))
        .collect();
    assert_eq!(angle_cases.len(), 3);
    assert!(angle_cases[0].pipeline_description().contains("angle=0"));
    assert!(angle_cases[1].pipeline_description().contains("angle=0"));
    assert!(angle_cases[2].pipeline_description().contains("angle=360"));
}

#[test]
fn test_sink_only_and_unclassified_elements_contribute_nothing() {
    let registry = demo_registry();
    let cases = generate_suite(&registry, SetupOptions::default()).expect("generate");
    assert!(!cases.iter().any(|case| case.name.starts_with("autovideosink")));
    assert!(!cases.iter().any(|case| case.name.starts_with("identity")));
}

#[test]
fn test_structural_property_never_tested() {
    let registry = demo_registry();
    let cases = generate_suite(&registry, SetupOptions::default()).expect("generate");
    assert!(!cases.iter().any(|case| case.name.contains("qos")));
}

#[test]
fn test_mute_option_affects_every_pipeline() {
    let registry = demo_registry();
    let cases = generate_suite(&registry, SetupOptions::muted()).expect("generate");
    assert_eq!(cases.len(), 7);
    for case in &cases {
        assert!(
            case.pipeline_description().ends_with("! fakesink"),
            "{} is not muted",
            case.name
        );
    }
}

#[test]
fn test_setup_registers_one_generator_with_fixed_name() {
    let registry = demo_registry();
    let catalog = StaticScenarioCatalog::new(vec![
        "play_15s".to_string(),
        "reverse_playback".to_string(),
    ]);
    let mut harness = RecordingHarness::new();

    let registered =
        setup_tests(&registry, &catalog, &mut harness, SetupOptions::default()).expect("setup");
    assert!(registered);

    assert_eq!(harness.generators().len(), 1);
    let generator = &harness.generators()[0];
    assert_eq!(generator.name, GENERATOR_NAME);
    assert_eq!(generator.test_cases.len(), 7);
    assert_eq!(generator.valid_scenarios, ["play_15s"]);

    // Full, unfiltered scenario list is forwarded separately
    assert_eq!(harness.scenarios(), ["play_15s", "reverse_playback"]);

    // Static blacklist installed regardless of snapshot contents
    assert_eq!(harness.blacklist().len(), 11);
    assert!(harness
        .blacklist()
        .iter()
        .any(|entry| entry.pattern == "validate.launch_pipeline.smpte*"));
}

#[test]
fn test_setup_is_order_stable_across_invocations() {
    let registry = demo_registry();
    let catalog = StaticScenarioCatalog::new(vec!["play_15s".to_string()]);

    let mut first = RecordingHarness::new();
    let mut second = RecordingHarness::new();
    setup_tests(&registry, &catalog, &mut first, SetupOptions::default()).expect("setup");
    setup_tests(&registry, &catalog, &mut second, SetupOptions::default()).expect("setup");

    assert_eq!(
        first.generators()[0].test_cases,
        second.generators()[0].test_cases
    );
}

#[test]
fn test_suite_survives_yaml_roundtrip() {
    let registry = demo_registry();
    let yaml = registry.to_yaml().expect("serialize snapshot");
    let reloaded = SnapshotRegistry::from_yaml(&yaml).expect("parse snapshot");

    let original = generate_suite(&registry, SetupOptions::default()).expect("generate");
    let roundtripped = generate_suite(&reloaded, SetupOptions::default()).expect("generate");
    assert_eq!(original, roundtripped);
}
