use rand::{SeedableRng, rngs::SmallRng};
use topicsim_core::{
    CorpusGeneratorBuilder, GeneratorError, LabelScheme, SeedPolicy, define_topics,
};
use topicsim_test_support::tracing::capture;
use tracing::Level;

#[test]
fn generate_records_configuration_on_its_span() {
    let generator = CorpusGeneratorBuilder::new()
        .with_documents(6)
        .with_topics(3)
        .with_tokens(4)
        .with_seed(21)
        .with_seed_policy(SeedPolicy::Derived)
        .build()
        .expect("valid configuration");

    let (corpus, layer) = capture(|| generator.generate());
    assert_eq!(corpus.expect("generation succeeds").len(), 6);

    let span = layer.span("core.generate").expect("core.generate span");
    assert_eq!(span.fields.get("documents").map(String::as_str), Some("6"));
    assert_eq!(span.fields.get("topics").map(String::as_str), Some("3"));
    assert_eq!(span.fields.get("seed").map(String::as_str), Some("21"));
    assert_eq!(span.fields.get("policy").map(String::as_str), Some("Derived"));

    assert!(layer.span("core.define_topics").is_some());
    assert!(layer.span("core.mix_documents").is_some());

    let completed = layer.events_with_message("corpus generated");
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].level, Level::INFO);
    assert_eq!(
        completed[0].fields.get("vocabulary").map(String::as_str),
        Some("12")
    );
}

#[test]
fn stage_failures_are_reported_as_error_events() {
    let mut rng = SmallRng::seed_from_u64(0);
    let (result, layer) = capture(|| define_topics(0, 4, LabelScheme::Letters, &mut rng));
    assert_eq!(result, Err(GeneratorError::ZeroTopics));
    let errors: Vec<_> = layer
        .events()
        .into_iter()
        .filter(|event| event.level == Level::ERROR)
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].fields.get("error").map(String::as_str),
        Some("topic count must be at least 1")
    );
}
