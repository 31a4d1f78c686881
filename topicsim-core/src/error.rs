//! Error types for the topicsim core library.
//!
//! Every failure raised by the generator is an invalid-argument failure: the
//! computation is pure, so retrying with the same inputs cannot succeed.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced when a generation parameter is invalid.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeneratorError {
    /// The requested document count was zero.
    #[error("document count must be at least 1")]
    ZeroDocuments,
    /// The requested topic count was zero.
    #[error("topic count must be at least 1")]
    ZeroTopics,
    /// The requested topic count cannot be labelled by the active scheme.
    #[error("topic count {requested} exceeds the label scheme limit of {limit}")]
    TopicLimitExceeded {
        /// Number of topics the caller asked for.
        requested: usize,
        /// Largest topic count the label scheme can name.
        limit: usize,
    },
    /// The requested token count was zero.
    #[error("token count must be at least 1")]
    ZeroTokens,
    /// A document mixture did not carry one weight per topic.
    #[error("mixture has {actual} weights but {expected} topics are defined")]
    MixtureLengthMismatch {
        /// Number of topics in the vocabulary.
        expected: usize,
        /// Number of weights supplied by the mixture.
        actual: usize,
    },
    /// A supplied weight was negative, NaN, or infinite.
    #[error("weight at index {index} must be finite and non-negative (got {value})")]
    InvalidWeight {
        /// Position of the offending weight.
        index: usize,
        /// The rejected value.
        value: f64,
    },
    /// Weights had no positive mass to normalize or sample from.
    #[error("{context} weights do not sum to a positive finite value")]
    DegenerateWeights {
        /// Which weight vector was degenerate.
        context: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// The requested document count was zero.
        ZeroDocuments => ZeroDocuments => "INVALID_ARGUMENT_ZERO_DOCUMENTS",
        /// The requested topic count was zero.
        ZeroTopics => ZeroTopics => "INVALID_ARGUMENT_ZERO_TOPICS",
        /// The requested topic count cannot be labelled by the active scheme.
        TopicLimitExceeded => TopicLimitExceeded { .. } => "INVALID_ARGUMENT_TOPIC_LIMIT_EXCEEDED",
        /// The requested token count was zero.
        ZeroTokens => ZeroTokens => "INVALID_ARGUMENT_ZERO_TOKENS",
        /// A document mixture did not carry one weight per topic.
        MixtureLengthMismatch => MixtureLengthMismatch { .. } => "INVALID_ARGUMENT_MIXTURE_LENGTH_MISMATCH",
        /// A supplied weight was negative, NaN, or infinite.
        InvalidWeight => InvalidWeight { .. } => "INVALID_ARGUMENT_INVALID_WEIGHT",
        /// Weights had no positive mass to normalize or sample from.
        DegenerateWeights => DegenerateWeights { .. } => "INVALID_ARGUMENT_DEGENERATE_WEIGHTS",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GeneratorError>;
