//! Synthetic topic-model corpora with known ground truth.
//!
//! The generator defines topics with disjoint token vocabularies, draws a
//! topic mixture per document, and samples each document's tokens from its
//! mixture. Corpora are seed-deterministic and carry the topics and mixtures
//! that produced them, so fitted topic models can be scored against a known
//! answer.
//!
//! # Seeding
//!
//! No global RNG state is used. [`SeedPolicy::Legacy`] restarts every stage
//! and every document from the base seed; [`SeedPolicy::Derived`] and
//! [`SeedPolicy::Threaded`] give stages independent streams.

mod builder;
mod corpus;
mod dictionary;
mod error;
mod generator;
mod labels;
mod mixture;
mod sampler;
mod seeding;
mod topics;
mod weights;

pub use crate::{
    builder::{
        CorpusGeneratorBuilder, DEFAULT_DOCUMENTS, DEFAULT_SEED, DEFAULT_TOKENS, DEFAULT_TOPICS,
    },
    corpus::{Corpus, Document},
    dictionary::{BowEntry, Dictionary},
    error::{GeneratorError, GeneratorErrorCode, Result},
    generator::{CorpusGenerator, simulate_corpus},
    labels::{LETTER_TOPIC_LIMIT, LabelScheme, topic_label},
    mixture::{DocumentMixture, mix_documents},
    sampler::{Vocabulary, sample_document},
    seeding::{SeedPolicy, SeedSchedule, Stage},
    topics::{Topic, define_topics},
};
