//! Topic definitions: disjoint token vocabularies with frequency
//! distributions.

use rand::Rng;
use tracing::{debug, instrument};

use crate::{
    Result,
    error::GeneratorError,
    labels::{LabelScheme, topic_label},
    weights::normalize,
};

/// A latent topic: an ordered token vocabulary and a parallel frequency
/// distribution over it.
///
/// Frequencies are non-negative and sum to one.
#[derive(Debug, Clone, PartialEq)]
pub struct Topic {
    index: usize,
    tokens: Vec<String>,
    frequencies: Vec<f64>,
}

impl Topic {
    /// Position of the topic in its definition order.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Display label, e.g. `topic_0`.
    #[must_use]
    pub fn label(&self) -> String {
        topic_label(self.index)
    }

    /// Token identifiers owned by this topic.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Within-topic token frequencies, parallel to [`Self::tokens`].
    #[must_use]
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Number of tokens in the topic vocabulary.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always `false` for topics produced by [`define_topics`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates `(token, frequency)` pairs in vocabulary order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, f64)> {
        self.tokens
            .iter()
            .map(String::as_str)
            .zip(self.frequencies.iter().copied())
    }
}

/// Defines `n_topics` topics of `n_tokens` tokens each.
///
/// Topic `i` owns the identifiers `labels.token_id(i, 0..n_tokens)`. Its
/// frequencies are `n_tokens` uniform draws in `[0, 1)` scaled to sum to one.
/// Draws are consumed topic by topic, token by token.
///
/// # Errors
/// Returns [`GeneratorError::ZeroTopics`],
/// [`GeneratorError::TopicLimitExceeded`], or [`GeneratorError::ZeroTokens`]
/// before any draw is made.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use topicsim_core::{LabelScheme, define_topics};
///
/// let mut rng = SmallRng::seed_from_u64(0);
/// let topics = define_topics(2, 2, LabelScheme::Letters, &mut rng)?;
/// assert_eq!(topics[0].label(), "topic_0");
/// assert_eq!(topics[0].tokens(), ["a0", "a1"]);
/// assert_eq!(topics[1].tokens(), ["b0", "b1"]);
/// # Ok::<(), topicsim_core::GeneratorError>(())
/// ```
#[instrument(name = "core.define_topics", err, skip(rng))]
pub fn define_topics<R: Rng>(
    n_topics: usize,
    n_tokens: usize,
    labels: LabelScheme,
    rng: &mut R,
) -> Result<Vec<Topic>> {
    labels.check_topic_count(n_topics)?;
    if n_tokens == 0 {
        return Err(GeneratorError::ZeroTokens);
    }

    let topics = (0..n_topics)
        .map(|index| define_topic(index, n_tokens, labels, rng))
        .collect::<Result<Vec<_>>>()?;
    debug!(topics = topics.len(), "topics defined");
    Ok(topics)
}

fn define_topic<R: Rng>(
    index: usize,
    n_tokens: usize,
    labels: LabelScheme,
    rng: &mut R,
) -> Result<Topic> {
    let tokens = (0..n_tokens)
        .map(|token| {
            labels
                .token_id(index, token)
                .ok_or(GeneratorError::TopicLimitExceeded {
                    requested: index.saturating_add(1),
                    limit: labels.max_topics().unwrap_or(index),
                })
        })
        .collect::<Result<Vec<_>>>()?;
    let draws = (0..n_tokens)
        .map(|_| rng.gen_range(0.0_f64..1.0_f64))
        .collect();
    let frequencies = normalize(draws, "topic frequency")?;
    Ok(Topic {
        index,
        tokens,
        frequencies,
    })
}
