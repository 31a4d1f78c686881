//! Token identifier schemes.
//!
//! Identifiers combine a per-topic prefix with a within-topic index so that
//! no identifier is shared by two topics.

use crate::{Result, error::GeneratorError};

/// Number of topics addressable by [`LabelScheme::Letters`].
pub const LETTER_TOPIC_LIMIT: usize = 26;

/// Selects how topic prefixes are rendered into token identifiers.
///
/// # Examples
/// ```
/// use topicsim_core::LabelScheme;
///
/// assert_eq!(LabelScheme::Letters.token_id(1, 3).as_deref(), Some("b3"));
/// assert_eq!(LabelScheme::Numeric.token_id(30, 0).as_deref(), Some("t30_0"));
/// assert_eq!(LabelScheme::Letters.token_id(26, 0), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelScheme {
    /// One lowercase letter per topic (`a0`, `b3`). Caps topics at 26.
    #[default]
    Letters,
    /// Numeric topic prefix (`t0_0`, `t41_3`). No topic cap.
    Numeric,
}

impl LabelScheme {
    /// Largest topic count this scheme can label, or `None` when unbounded.
    #[must_use]
    pub const fn max_topics(self) -> Option<usize> {
        match self {
            Self::Letters => Some(LETTER_TOPIC_LIMIT),
            Self::Numeric => None,
        }
    }

    /// Renders the identifier of token `token` in topic `topic`.
    ///
    /// Returns `None` when `topic` is outside the scheme's range.
    #[must_use]
    pub fn token_id(self, topic: usize, token: usize) -> Option<String> {
        match self {
            Self::Letters => ('a'..='z')
                .nth(topic)
                .map(|letter| format!("{letter}{token}")),
            Self::Numeric => Some(format!("t{topic}_{token}")),
        }
    }

    /// Validates that `n_topics` is positive and within this scheme's range.
    ///
    /// # Errors
    /// Returns [`GeneratorError::ZeroTopics`] or
    /// [`GeneratorError::TopicLimitExceeded`].
    pub const fn check_topic_count(self, n_topics: usize) -> Result<()> {
        if n_topics == 0 {
            return Err(GeneratorError::ZeroTopics);
        }
        if let Some(limit) = self.max_topics()
            && n_topics > limit
        {
            return Err(GeneratorError::TopicLimitExceeded {
                requested: n_topics,
                limit,
            });
        }
        Ok(())
    }
}

/// Returns the display label of the topic at `index` (`topic_0`, `topic_1`).
#[must_use]
pub fn topic_label(index: usize) -> String {
    format!("topic_{index}")
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(LabelScheme::Letters, 0, 0, "a0")]
    #[case(LabelScheme::Letters, 25, 11, "z11")]
    #[case(LabelScheme::Numeric, 0, 0, "t0_0")]
    #[case(LabelScheme::Numeric, 1, 11, "t1_11")]
    fn token_id_renders_prefix_and_index(
        #[case] scheme: LabelScheme,
        #[case] topic: usize,
        #[case] token: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(scheme.token_id(topic, token).as_deref(), Some(expected));
    }

    #[test]
    fn numeric_ids_do_not_collide_across_topics() {
        // `t1_11` and `t11_1` would both be `t111` without the separator.
        let left = LabelScheme::Numeric.token_id(1, 11);
        let right = LabelScheme::Numeric.token_id(11, 1);
        assert_ne!(left, right);
    }

    #[rstest]
    #[case(LabelScheme::Letters, 0, Err(GeneratorError::ZeroTopics))]
    #[case(LabelScheme::Letters, 26, Ok(()))]
    #[case(
        LabelScheme::Letters,
        27,
        Err(GeneratorError::TopicLimitExceeded { requested: 27, limit: 26 })
    )]
    #[case(LabelScheme::Numeric, 0, Err(GeneratorError::ZeroTopics))]
    #[case(LabelScheme::Numeric, 1_000, Ok(()))]
    fn check_topic_count_enforces_scheme_range(
        #[case] scheme: LabelScheme,
        #[case] n_topics: usize,
        #[case] expected: Result<()>,
    ) {
        assert_eq!(scheme.check_topic_count(n_topics), expected);
    }

    #[test]
    fn topic_label_uses_index() {
        assert_eq!(topic_label(3), "topic_3");
    }
}
