use rstest::rstest;
use topicsim_core::{GeneratorError, GeneratorErrorCode, simulate_corpus};

#[rstest]
#[case(GeneratorError::ZeroDocuments, GeneratorErrorCode::ZeroDocuments)]
#[case(GeneratorError::ZeroTopics, GeneratorErrorCode::ZeroTopics)]
#[case(
    GeneratorError::TopicLimitExceeded { requested: 30, limit: 26 },
    GeneratorErrorCode::TopicLimitExceeded,
)]
#[case(GeneratorError::ZeroTokens, GeneratorErrorCode::ZeroTokens)]
#[case(
    GeneratorError::MixtureLengthMismatch { expected: 3, actual: 2 },
    GeneratorErrorCode::MixtureLengthMismatch,
)]
#[case(
    GeneratorError::InvalidWeight { index: 0, value: -1.0 },
    GeneratorErrorCode::InvalidWeight,
)]
#[case(
    GeneratorError::DegenerateWeights { context: "document mixture" },
    GeneratorErrorCode::DegenerateWeights,
)]
fn returns_expected_generator_code(
    #[case] error: GeneratorError,
    #[case] expected: GeneratorErrorCode,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), expected.as_str());
    assert!(error.code().as_str().starts_with("INVALID_ARGUMENT_"));
}

#[rstest]
#[case(0, 4, 8, GeneratorErrorCode::ZeroDocuments)]
#[case(5, 0, 8, GeneratorErrorCode::ZeroTopics)]
#[case(5, 27, 8, GeneratorErrorCode::TopicLimitExceeded)]
#[case(5, 4, 0, GeneratorErrorCode::ZeroTokens)]
fn simulate_corpus_rejects_invalid_arguments(
    #[case] documents: usize,
    #[case] topics: usize,
    #[case] tokens: usize,
    #[case] expected: GeneratorErrorCode,
) {
    let err = simulate_corpus(documents, topics, tokens, 0).expect_err("arguments are invalid");
    assert_eq!(err.code(), expected);
}

#[test]
fn error_messages_name_the_offending_values() {
    let err = GeneratorError::TopicLimitExceeded {
        requested: 30,
        limit: 26,
    };
    assert_eq!(
        err.to_string(),
        "topic count 30 exceeds the label scheme limit of 26"
    );
    assert_eq!(
        GeneratorErrorCode::ZeroTokens.to_string(),
        "INVALID_ARGUMENT_ZERO_TOKENS"
    );
}
