use std::collections::HashSet;

use topicsim_core::{Corpus, CorpusGenerator, CorpusGeneratorBuilder, LabelScheme, SeedPolicy};

#[must_use]
pub fn generator(
    documents: usize,
    topics: usize,
    tokens: usize,
    seed: u64,
    policy: SeedPolicy,
) -> CorpusGenerator {
    CorpusGeneratorBuilder::new()
        .with_documents(documents)
        .with_topics(topics)
        .with_tokens(tokens)
        .with_seed(seed)
        .with_seed_policy(policy)
        .with_labels(LabelScheme::Letters)
        .build()
        .expect("test configuration must be valid")
}

#[must_use]
pub fn vocabulary_set(corpus: &Corpus) -> HashSet<&str> {
    corpus.vocabulary().collect()
}
