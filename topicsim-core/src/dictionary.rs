//! Token dictionary and bag-of-words encoding for generated corpora.
//!
//! Identifiers are assigned as documents are added: the unseen tokens of each
//! document receive consecutive ids in lexicographic order. The same corpus
//! therefore always yields the same dictionary.

use std::collections::{BTreeMap, HashMap};

/// A bag-of-words entry: `(token id, occurrences)`.
pub type BowEntry = (usize, usize);

/// Bidirectional token ↔ id mapping with document frequencies.
///
/// # Examples
/// ```
/// use topicsim_core::Dictionary;
///
/// let docs = [vec!["b0", "a1", "b0"], vec!["a1", "c2"]];
/// let dictionary = Dictionary::from_documents(&docs);
/// assert_eq!(dictionary.token_id("a1"), Some(0));
/// assert_eq!(dictionary.token_id("b0"), Some(1));
/// assert_eq!(dictionary.token_id("c2"), Some(2));
/// assert_eq!(dictionary.doc2bow(&["b0", "a1", "b0", "zz"]), vec![(0, 1), (1, 2)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    token_to_id: HashMap<String, usize>,
    id_to_token: Vec<String>,
    document_frequencies: Vec<usize>,
    documents: usize,
}

impl Dictionary {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dictionary from `documents` in order.
    #[must_use]
    pub fn from_documents<D, S>(documents: impl IntoIterator<Item = D>) -> Self
    where
        D: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for document in documents {
            dictionary.add_document(document.as_ref());
        }
        dictionary
    }

    /// Registers the tokens of `document`, assigning ids to unseen tokens and
    /// updating document frequencies.
    pub fn add_document<S: AsRef<str>>(&mut self, document: &[S]) {
        let counts = count_tokens(document);
        for token in counts.keys() {
            let id = match self.token_to_id.get(*token) {
                Some(id) => *id,
                None => self.insert(token),
            };
            if let Some(frequency) = self.document_frequencies.get_mut(id) {
                *frequency = frequency.saturating_add(1);
            }
        }
        self.documents = self.documents.saturating_add(1);
    }

    /// Encodes `document` as `(id, count)` pairs sorted by id.
    ///
    /// Tokens missing from the dictionary are ignored.
    #[must_use]
    pub fn doc2bow<S: AsRef<str>>(&self, document: &[S]) -> Vec<BowEntry> {
        let mut bow: Vec<BowEntry> = count_tokens(document)
            .into_iter()
            .filter_map(|(token, count)| self.token_to_id.get(token).map(|id| (*id, count)))
            .collect();
        bow.sort_unstable_by_key(|(id, _)| *id);
        bow
    }

    /// Id assigned to `token`.
    #[must_use]
    pub fn token_id(&self, token: &str) -> Option<usize> {
        self.token_to_id.get(token).copied()
    }

    /// Token assigned to `id`.
    #[must_use]
    pub fn token(&self, id: usize) -> Option<&str> {
        self.id_to_token.get(id).map(String::as_str)
    }

    /// Number of documents containing the token with `id`.
    #[must_use]
    pub fn document_frequency(&self, id: usize) -> Option<usize> {
        self.document_frequencies.get(id).copied()
    }

    /// Number of documents added so far.
    #[must_use]
    pub const fn document_count(&self) -> usize {
        self.documents
    }

    /// Number of distinct tokens.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.id_to_token.len()
    }

    /// Returns `true` when no tokens have been registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.id_to_token.is_empty()
    }

    /// Iterates `(id, token)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.id_to_token
            .iter()
            .enumerate()
            .map(|(id, token)| (id, token.as_str()))
    }

    fn insert(&mut self, token: &str) -> usize {
        let id = self.id_to_token.len();
        self.token_to_id.insert(token.to_owned(), id);
        self.id_to_token.push(token.to_owned());
        self.document_frequencies.push(0);
        id
    }
}

fn count_tokens<S: AsRef<str>>(document: &[S]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for token in document {
        let count = counts.entry(token.as_ref()).or_insert(0_usize);
        *count = count.saturating_add(1);
    }
    counts
}
