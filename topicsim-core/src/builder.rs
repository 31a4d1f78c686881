//! Builder utilities for configuring corpus generation.
//!
//! Defaults reproduce the reference experiment: 500 documents drawn from four
//! topics of eight tokens each, seed 2.

use crate::{
    Result,
    error::GeneratorError,
    generator::CorpusGenerator,
    labels::LabelScheme,
    seeding::SeedPolicy,
};

/// Default number of generated documents.
pub const DEFAULT_DOCUMENTS: usize = 500;
/// Default number of latent topics.
pub const DEFAULT_TOPICS: usize = 4;
/// Default tokens per topic and per document.
pub const DEFAULT_TOKENS: usize = 8;
/// Default base seed.
pub const DEFAULT_SEED: u64 = 2;

/// Configures and constructs [`CorpusGenerator`] instances.
///
/// # Examples
/// ```
/// use topicsim_core::{CorpusGeneratorBuilder, LabelScheme, SeedPolicy};
///
/// let generator = CorpusGeneratorBuilder::new()
///     .with_documents(20)
///     .with_topics(3)
///     .with_tokens(5)
///     .with_seed(9)
///     .with_seed_policy(SeedPolicy::Derived)
///     .with_labels(LabelScheme::Numeric)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(generator.documents(), 20);
/// assert_eq!(generator.seed_policy(), SeedPolicy::Derived);
/// ```
#[derive(Debug, Clone)]
pub struct CorpusGeneratorBuilder {
    documents: usize,
    topics: usize,
    tokens: usize,
    seed: u64,
    seed_policy: SeedPolicy,
    labels: LabelScheme,
}

impl Default for CorpusGeneratorBuilder {
    fn default() -> Self {
        Self {
            documents: DEFAULT_DOCUMENTS,
            topics: DEFAULT_TOPICS,
            tokens: DEFAULT_TOKENS,
            seed: DEFAULT_SEED,
            seed_policy: SeedPolicy::default(),
            labels: LabelScheme::default(),
        }
    }
}

impl CorpusGeneratorBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use topicsim_core::CorpusGeneratorBuilder;
    ///
    /// let builder = CorpusGeneratorBuilder::new();
    /// assert_eq!(builder.documents(), 500);
    /// assert_eq!(builder.topics(), 4);
    /// assert_eq!(builder.tokens(), 8);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of documents.
    #[must_use]
    pub const fn with_documents(mut self, documents: usize) -> Self {
        self.documents = documents;
        self
    }

    /// Returns the configured number of documents.
    #[must_use]
    pub const fn documents(&self) -> usize {
        self.documents
    }

    /// Overrides the number of latent topics.
    #[must_use]
    pub const fn with_topics(mut self, topics: usize) -> Self {
        self.topics = topics;
        self
    }

    /// Returns the configured number of topics.
    #[must_use]
    pub const fn topics(&self) -> usize {
        self.topics
    }

    /// Overrides the token count, used both as the vocabulary size of each
    /// topic and as the length of each document.
    #[must_use]
    pub const fn with_tokens(mut self, tokens: usize) -> Self {
        self.tokens = tokens;
        self
    }

    /// Returns the configured token count.
    #[must_use]
    pub const fn tokens(&self) -> usize {
        self.tokens
    }

    /// Overrides the base seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the configured base seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Selects how the seed is spread across stages.
    #[must_use]
    pub const fn with_seed_policy(mut self, policy: SeedPolicy) -> Self {
        self.seed_policy = policy;
        self
    }

    /// Returns the configured seed policy.
    #[must_use]
    pub const fn seed_policy(&self) -> SeedPolicy {
        self.seed_policy
    }

    /// Selects the token identifier scheme.
    #[must_use]
    pub const fn with_labels(mut self, labels: LabelScheme) -> Self {
        self.labels = labels;
        self
    }

    /// Returns the configured label scheme.
    #[must_use]
    pub const fn labels(&self) -> LabelScheme {
        self.labels
    }

    /// Validates the configuration and constructs a [`CorpusGenerator`].
    ///
    /// # Errors
    /// Returns [`GeneratorError::ZeroDocuments`], [`GeneratorError::ZeroTopics`],
    /// [`GeneratorError::TopicLimitExceeded`], or [`GeneratorError::ZeroTokens`].
    ///
    /// # Examples
    /// ```
    /// use topicsim_core::{CorpusGeneratorBuilder, GeneratorError};
    ///
    /// let err = CorpusGeneratorBuilder::new().with_topics(27).build().unwrap_err();
    /// assert_eq!(err, GeneratorError::TopicLimitExceeded { requested: 27, limit: 26 });
    /// ```
    pub const fn build(self) -> Result<CorpusGenerator> {
        if self.documents == 0 {
            return Err(GeneratorError::ZeroDocuments);
        }
        if let Err(err) = self.labels.check_topic_count(self.topics) {
            return Err(err);
        }
        if self.tokens == 0 {
            return Err(GeneratorError::ZeroTokens);
        }

        Ok(CorpusGenerator::new(
            self.documents,
            self.topics,
            self.tokens,
            self.seed,
            self.seed_policy,
            self.labels,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn defaults_match_the_reference_experiment() {
        let generator = CorpusGeneratorBuilder::new().build().expect("defaults are valid");
        assert_eq!(generator.documents(), DEFAULT_DOCUMENTS);
        assert_eq!(generator.topics(), DEFAULT_TOPICS);
        assert_eq!(generator.tokens(), DEFAULT_TOKENS);
        assert_eq!(generator.seed(), DEFAULT_SEED);
        assert_eq!(generator.seed_policy(), SeedPolicy::Legacy);
        assert_eq!(generator.labels(), LabelScheme::Letters);
    }

    #[rstest]
    #[case(0, 4, 8, LabelScheme::Letters, GeneratorError::ZeroDocuments)]
    #[case(5, 0, 8, LabelScheme::Letters, GeneratorError::ZeroTopics)]
    #[case(5, 0, 8, LabelScheme::Numeric, GeneratorError::ZeroTopics)]
    #[case(
        5,
        40,
        8,
        LabelScheme::Letters,
        GeneratorError::TopicLimitExceeded { requested: 40, limit: 26 }
    )]
    #[case(5, 4, 0, LabelScheme::Letters, GeneratorError::ZeroTokens)]
    fn build_rejects_invalid_configuration(
        #[case] documents: usize,
        #[case] topics: usize,
        #[case] tokens: usize,
        #[case] labels: LabelScheme,
        #[case] expected: GeneratorError,
    ) {
        let err = CorpusGeneratorBuilder::new()
            .with_documents(documents)
            .with_topics(topics)
            .with_tokens(tokens)
            .with_labels(labels)
            .build()
            .expect_err("configuration is invalid");
        assert_eq!(err, expected);
    }

    #[test]
    fn numeric_labels_accept_many_topics() {
        let generator = CorpusGeneratorBuilder::new()
            .with_topics(64)
            .with_labels(LabelScheme::Numeric)
            .build()
            .expect("numeric labels are unbounded");
        assert_eq!(generator.topics(), 64);
    }
}
