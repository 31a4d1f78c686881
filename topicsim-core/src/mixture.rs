//! Per-document topic mixtures.

use rand::Rng;
use tracing::{debug, instrument};

use crate::{
    Result,
    error::GeneratorError,
    weights::{normalize, validate_weights},
};

/// Normalized topic weights for one document.
///
/// # Examples
/// ```
/// use topicsim_core::DocumentMixture;
///
/// let mixture = DocumentMixture::from_weights(vec![0.0, 3.0, 1.0])?;
/// assert_eq!(mixture.weights(), [0.0, 0.75, 0.25]);
/// assert_eq!(mixture.dominant_topic(), Some(1));
/// # Ok::<(), topicsim_core::GeneratorError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentMixture {
    weights: Vec<f64>,
}

impl DocumentMixture {
    /// Builds a mixture from caller-supplied weights, scaling them to sum to
    /// one. Zero weights are allowed and exclude their topic from sampling.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidWeight`] for negative or non-finite
    /// weights and [`GeneratorError::DegenerateWeights`] when no weight is
    /// positive.
    pub fn from_weights(weights: Vec<f64>) -> Result<Self> {
        validate_weights(&weights)?;
        let weights = normalize(weights, "document mixture")?;
        Ok(Self { weights })
    }

    /// Weights in topic order.
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Weight of `topic`, if the mixture covers it.
    #[must_use]
    pub fn weight(&self, topic: usize) -> Option<f64> {
        self.weights.get(topic).copied()
    }

    /// Number of topics the mixture covers.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns `true` when the mixture covers no topics.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Topic with the largest weight; the lowest index wins ties.
    #[must_use]
    pub fn dominant_topic(&self) -> Option<usize> {
        self.weights
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (index, weight)| match best {
                Some((_, top)) if top >= *weight => best,
                _ => Some((index, *weight)),
            })
            .map(|(index, _)| index)
    }
}

/// Draws one mixture per document.
///
/// Each document receives `n_topics` exponential(rate 1) draws scaled to sum
/// to one, which skews typical documents towards one or two topics.
///
/// # Errors
/// Returns [`GeneratorError::ZeroDocuments`] or [`GeneratorError::ZeroTopics`]
/// before any draw is made.
#[instrument(name = "core.mix_documents", err, skip(rng))]
pub fn mix_documents<R: Rng>(
    n_docs: usize,
    n_topics: usize,
    rng: &mut R,
) -> Result<Vec<DocumentMixture>> {
    if n_docs == 0 {
        return Err(GeneratorError::ZeroDocuments);
    }
    if n_topics == 0 {
        return Err(GeneratorError::ZeroTopics);
    }

    let mixtures = (0..n_docs)
        .map(|_| {
            let draws = (0..n_topics).map(|_| exponential_sample(rng)).collect();
            normalize(draws, "document mixture").map(|weights| DocumentMixture { weights })
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(documents = mixtures.len(), "document mixtures drawn");
    Ok(mixtures)
}

#[expect(
    clippy::float_arithmetic,
    reason = "inverse-CDF sampling requires floating-point arithmetic"
)]
fn exponential_sample<R: Rng>(rng: &mut R) -> f64 {
    let uniform = rng.gen_range(0.0_f64..1.0_f64);
    -(1.0 - uniform).ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(3)
    }

    #[rstest]
    #[case(1, 1)]
    #[case(10, 4)]
    #[case(50, 26)]
    fn mixtures_are_normalized(#[case] n_docs: usize, #[case] n_topics: usize) {
        let mixtures = mix_documents(n_docs, n_topics, &mut rng()).expect("valid parameters");
        assert_eq!(mixtures.len(), n_docs);
        for mixture in &mixtures {
            assert_eq!(mixture.len(), n_topics);
            assert!(mixture.weights().iter().all(|w| *w >= 0.0));
            let total: f64 = mixture.weights().iter().sum();
            assert!((total - 1.0).abs() < 1e-9, "sum was {total}");
        }
    }

    #[test]
    fn documents_receive_distinct_mixtures() {
        let mixtures = mix_documents(2, 4, &mut rng()).expect("valid parameters");
        assert_ne!(mixtures[0], mixtures[1]);
    }

    #[rstest]
    #[case(0, 3, GeneratorError::ZeroDocuments)]
    #[case(3, 0, GeneratorError::ZeroTopics)]
    fn rejects_invalid_shapes(
        #[case] n_docs: usize,
        #[case] n_topics: usize,
        #[case] expected: GeneratorError,
    ) {
        let err = mix_documents(n_docs, n_topics, &mut rng()).expect_err("shape is invalid");
        assert_eq!(err, expected);
    }

    #[test]
    fn exponential_draws_are_non_negative_with_unit_mean() {
        let mut generator = rng();
        let draws: Vec<f64> = (0..20_000)
            .map(|_| exponential_sample(&mut generator))
            .collect();
        assert!(draws.iter().all(|d| d.is_finite() && *d >= 0.0));
        let mean = draws.iter().sum::<f64>() / 20_000.0;
        assert!((mean - 1.0).abs() < 0.05, "mean was {mean}");
    }

    #[rstest]
    #[case(vec![1.0, 1.0], Some(0))]
    #[case(vec![0.2, 0.5, 0.3], Some(1))]
    #[case(vec![0.0, 0.0, 1.0], Some(2))]
    fn dominant_topic_prefers_lowest_index_on_ties(
        #[case] weights: Vec<f64>,
        #[case] expected: Option<usize>,
    ) {
        let mixture = DocumentMixture::from_weights(weights).expect("valid weights");
        assert_eq!(mixture.dominant_topic(), expected);
    }

    #[test]
    fn from_weights_rejects_all_zero_mass() {
        let err = DocumentMixture::from_weights(vec![0.0, 0.0]).expect_err("no mass");
        assert_eq!(
            err,
            GeneratorError::DegenerateWeights {
                context: "document mixture"
            }
        );
    }
}
