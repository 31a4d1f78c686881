//! Generated documents and the corpus that carries them with their ground
//! truth.

use std::ops::Deref;

use crate::{mixture::DocumentMixture, topics::Topic};

/// An ordered sequence of token identifiers.
///
/// Dereferences to `[String]`, so slice methods such as `len` and `iter` are
/// available directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    tokens: Vec<String>,
}

impl Document {
    pub(crate) const fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Token identifiers in draw order.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Consumes the document, returning its tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }
}

impl Deref for Document {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

impl AsRef<[String]> for Document {
    fn as_ref(&self) -> &[String] {
        &self.tokens
    }
}

/// A generated corpus together with the topics and mixtures that produced it.
///
/// Documents, mixtures, and their indices correspond one to one.
#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    topics: Vec<Topic>,
    mixtures: Vec<DocumentMixture>,
    documents: Vec<Document>,
}

impl Corpus {
    pub(crate) const fn new(
        topics: Vec<Topic>,
        mixtures: Vec<DocumentMixture>,
        documents: Vec<Document>,
    ) -> Self {
        Self {
            topics,
            mixtures,
            documents,
        }
    }

    /// Topics that generated the corpus.
    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Per-document topic mixtures, parallel to [`Self::documents`].
    #[must_use]
    pub fn mixtures(&self) -> &[DocumentMixture] {
        &self.mixtures
    }

    /// Generated documents in order.
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Number of documents.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns `true` when the corpus holds no documents.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Every token identifier any topic can emit, in topic order.
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.topics
            .iter()
            .flat_map(|topic| topic.tokens().iter().map(String::as_str))
    }

    /// Topic with the largest mixture weight for document `index`.
    #[must_use]
    pub fn dominant_topic(&self, index: usize) -> Option<usize> {
        self.mixtures
            .get(index)
            .and_then(DocumentMixture::dominant_topic)
    }

    /// Drops the ground truth and returns the documents as token lists.
    #[must_use]
    pub fn into_token_lists(self) -> Vec<Vec<String>> {
        self.documents
            .into_iter()
            .map(Document::into_tokens)
            .collect()
    }
}
