//! Corpus assembly: topics, mixtures, then one sampled document per mixture.

use tracing::{info, instrument};

use crate::{
    Result,
    builder::CorpusGeneratorBuilder,
    corpus::{Corpus, Document},
    labels::LabelScheme,
    mixture::mix_documents,
    sampler::{Vocabulary, sample_document},
    seeding::{SeedPolicy, SeedSchedule, Stage},
    topics::define_topics,
};

/// Entry point for generating synthetic corpora.
///
/// Instances are produced by [`CorpusGeneratorBuilder::build`] and are always
/// valid. Generation is a pure function of the configuration.
///
/// # Examples
/// ```
/// use topicsim_core::CorpusGeneratorBuilder;
///
/// let generator = CorpusGeneratorBuilder::new()
///     .with_documents(1)
///     .with_topics(2)
///     .with_tokens(2)
///     .with_seed(0)
///     .build()
///     .expect("builder must succeed");
/// let corpus = generator.generate().expect("generation must succeed");
/// assert_eq!(corpus.len(), 1);
/// let allowed = ["a0", "a1", "b0", "b1"];
/// assert!(corpus.documents()[0].iter().all(|t| allowed.contains(&t.as_str())));
/// ```
#[derive(Debug, Clone)]
pub struct CorpusGenerator {
    documents: usize,
    topics: usize,
    tokens: usize,
    seed: u64,
    seed_policy: SeedPolicy,
    labels: LabelScheme,
}

impl CorpusGenerator {
    pub(crate) const fn new(
        documents: usize,
        topics: usize,
        tokens: usize,
        seed: u64,
        seed_policy: SeedPolicy,
        labels: LabelScheme,
    ) -> Self {
        Self {
            documents,
            topics,
            tokens,
            seed,
            seed_policy,
            labels,
        }
    }

    /// Number of documents each run produces.
    #[must_use]
    pub const fn documents(&self) -> usize {
        self.documents
    }

    /// Number of latent topics.
    #[must_use]
    pub const fn topics(&self) -> usize {
        self.topics
    }

    /// Tokens per topic and per document.
    #[must_use]
    pub const fn tokens(&self) -> usize {
        self.tokens
    }

    /// Base seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Seed policy applied across stages.
    #[must_use]
    pub const fn seed_policy(&self) -> SeedPolicy {
        self.seed_policy
    }

    /// Token identifier scheme.
    #[must_use]
    pub const fn labels(&self) -> LabelScheme {
        self.labels
    }

    /// Runs the full pipeline and returns the corpus with its ground truth.
    ///
    /// Topics are defined, one mixture is drawn per document, and each
    /// document is sampled from its mixture in order. Every stage draws from
    /// the generator its [`SeedPolicy`] assigns, so repeated calls return
    /// identical corpora.
    ///
    /// # Errors
    /// Propagates any [`crate::GeneratorError`] raised by a stage. No partial
    /// corpus is returned.
    #[instrument(
        name = "core.generate",
        err,
        skip(self),
        fields(
            documents = self.documents,
            topics = self.topics,
            tokens = self.tokens,
            seed = self.seed,
            policy = ?self.seed_policy,
            labels = ?self.labels,
        ),
    )]
    pub fn generate(&self) -> Result<Corpus> {
        let mut schedule = SeedSchedule::new(self.seed, self.seed_policy);
        let topics = schedule.with_stage(Stage::Topics, |rng| {
            define_topics(self.topics, self.tokens, self.labels, rng)
        })?;
        let mixtures = schedule.with_stage(Stage::Mixtures, |rng| {
            mix_documents(self.documents, self.topics, rng)
        })?;

        let vocabulary = Vocabulary::from_topics(&topics);
        let documents = mixtures
            .iter()
            .enumerate()
            .map(|(index, mixture)| {
                schedule.with_stage(Stage::Document(index), |rng| {
                    sample_document(self.tokens, &vocabulary, mixture, rng)
                })
            })
            .collect::<Result<Vec<Document>>>()?;

        info!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            "corpus generated"
        );
        Ok(Corpus::new(topics, mixtures, documents))
    }
}

/// Generates a corpus of `n_docs` documents from `n_topics` letter-labelled
/// topics of `n_tokens` tokens, using legacy seeding.
///
/// # Errors
/// Returns [`crate::GeneratorError`] when any count is zero or `n_topics`
/// exceeds 26.
///
/// # Examples
/// ```
/// use topicsim_core::simulate_corpus;
///
/// let corpus = simulate_corpus(3, 2, 4, 0)?;
/// assert_eq!(corpus.len(), 3);
/// assert!(corpus.documents().iter().all(|doc| doc.len() == 4));
/// assert_eq!(corpus.vocabulary().count(), 8);
/// # Ok::<(), topicsim_core::GeneratorError>(())
/// ```
pub fn simulate_corpus(
    n_docs: usize,
    n_topics: usize,
    n_tokens: usize,
    seed: u64,
) -> Result<Corpus> {
    CorpusGeneratorBuilder::new()
        .with_documents(n_docs)
        .with_topics(n_topics)
        .with_tokens(n_tokens)
        .with_seed(seed)
        .build()?
        .generate()
}
