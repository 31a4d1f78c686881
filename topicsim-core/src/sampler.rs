//! Token sampling for a single document.

use rand::{
    Rng,
    distributions::{Distribution, WeightedIndex},
};
use tracing::{instrument, trace};

use crate::{
    Result, corpus::Document, error::GeneratorError, mixture::DocumentMixture, topics::Topic,
};

/// The union of all topic vocabularies, flattened in topic order.
///
/// Each entry remembers its owning topic and within-topic frequency so that
/// per-document sampling weights can be derived from a [`DocumentMixture`].
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use topicsim_core::{LabelScheme, Vocabulary, define_topics};
///
/// let topics = define_topics(2, 2, LabelScheme::Letters, &mut SmallRng::seed_from_u64(0))?;
/// let vocabulary = Vocabulary::from_topics(&topics);
/// assert_eq!(vocabulary.tokens(), ["a0", "a1", "b0", "b1"]);
/// assert_eq!(vocabulary.owner(2), Some(1));
/// # Ok::<(), topicsim_core::GeneratorError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    tokens: Vec<String>,
    owners: Vec<usize>,
    frequencies: Vec<f64>,
    topic_count: usize,
}

impl Vocabulary {
    /// Flattens `topics` into a single vocabulary.
    #[must_use]
    pub fn from_topics(topics: &[Topic]) -> Self {
        let size = topics.iter().map(Topic::len).sum();
        let mut tokens = Vec::with_capacity(size);
        let mut owners = Vec::with_capacity(size);
        let mut frequencies = Vec::with_capacity(size);
        for topic in topics {
            for (token, frequency) in topic.entries() {
                tokens.push(token.to_owned());
                owners.push(topic.index());
                frequencies.push(frequency);
            }
        }
        Self {
            tokens,
            owners,
            frequencies,
            topic_count: topics.len(),
        }
    }

    /// Token identifiers in topic order.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Topic owning the token at `position`.
    #[must_use]
    pub fn owner(&self, position: usize) -> Option<usize> {
        self.owners.get(position).copied()
    }

    /// Number of topics the vocabulary was built from.
    #[must_use]
    pub const fn topic_count(&self) -> usize {
        self.topic_count
    }

    /// Number of distinct token identifiers.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` when no topics contributed tokens.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Computes `frequency × mixture weight of owner` for every token.
    ///
    /// # Errors
    /// Returns [`GeneratorError::MixtureLengthMismatch`] when the mixture does
    /// not cover exactly the vocabulary's topics.
    #[expect(
        clippy::float_arithmetic,
        reason = "token weights are products of two probabilities"
    )]
    pub fn sampling_weights(&self, mixture: &DocumentMixture) -> Result<Vec<f64>> {
        if mixture.len() != self.topic_count {
            return Err(GeneratorError::MixtureLengthMismatch {
                expected: self.topic_count,
                actual: mixture.len(),
            });
        }
        self.owners
            .iter()
            .zip(&self.frequencies)
            .map(|(owner, frequency)| {
                mixture
                    .weight(*owner)
                    .map(|weight| frequency * weight)
                    .ok_or(GeneratorError::MixtureLengthMismatch {
                        expected: self.topic_count,
                        actual: mixture.len(),
                    })
            })
            .collect()
    }
}

/// Draws `n_tokens` tokens with replacement from `vocabulary`, weighting each
/// token by its frequency times its topic's weight in `mixture`.
///
/// Repeated tokens are expected. Tokens of topics with zero weight are never
/// drawn.
///
/// # Errors
/// Returns [`GeneratorError::ZeroTokens`],
/// [`GeneratorError::MixtureLengthMismatch`], or
/// [`GeneratorError::DegenerateWeights`] when every token weight is zero.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use topicsim_core::{DocumentMixture, LabelScheme, Vocabulary, define_topics, sample_document};
///
/// let mut rng = SmallRng::seed_from_u64(0);
/// let topics = define_topics(2, 3, LabelScheme::Letters, &mut rng)?;
/// let vocabulary = Vocabulary::from_topics(&topics);
/// let only_b = DocumentMixture::from_weights(vec![0.0, 1.0])?;
/// let document = sample_document(5, &vocabulary, &only_b, &mut rng)?;
/// assert_eq!(document.len(), 5);
/// assert!(document.iter().all(|token| token.starts_with('b')));
/// # Ok::<(), topicsim_core::GeneratorError>(())
/// ```
#[instrument(
    name = "core.sample_document",
    level = "trace",
    err,
    skip(vocabulary, mixture, rng),
    fields(vocabulary = vocabulary.len()),
)]
pub fn sample_document<R: Rng>(
    n_tokens: usize,
    vocabulary: &Vocabulary,
    mixture: &DocumentMixture,
    rng: &mut R,
) -> Result<Document> {
    if n_tokens == 0 {
        return Err(GeneratorError::ZeroTokens);
    }
    let weights = vocabulary.sampling_weights(mixture)?;
    let distribution =
        WeightedIndex::new(&weights).map_err(|_| GeneratorError::DegenerateWeights {
            context: "token sampling",
        })?;

    #[expect(
        clippy::indexing_slicing,
        reason = "WeightedIndex only yields positions below the weight count"
    )]
    let tokens: Vec<String> = (0..n_tokens)
        .map(|_| vocabulary.tokens[distribution.sample(rng)].clone())
        .collect();
    trace!(tokens = tokens.len(), "document sampled");
    Ok(Document::new(tokens))
}
