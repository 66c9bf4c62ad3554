// Count vectorizer with document-frequency filtering.
//
// Vocabulary selection happens once, on the training documents only:
//
//   1. every document is expanded into lowercased 1- and 2-grams;
//   2. terms appearing in fewer than `min_df` or more than `max_df` of the
//      documents (as a fraction) are discarded — the low band removes noise
//      terms, the high band removes terms too common to discriminate;
//   3. the surviving terms are ranked by total corpus count (ties broken
//      alphabetically) and truncated to `max_features`;
//   4. final vocabulary indices are assigned in alphabetical order, so the
//      column layout is a pure function of the training corpus.
//
// Transform then counts vocabulary terms per document. Terms the training
// corpus never produced are skipped — the test set cannot grow the
// vocabulary, which keeps evaluation honest.

use std::collections::HashMap;

use anyhow::Result;
use tracing::info;

use super::tokenize::{ngrams, tokenize};
use super::traits::TextVectorizer;

/// N-gram count vectorizer, the default feature extractor.
pub struct CountVectorizer {
    /// Shortest n-gram length (inclusive)
    pub min_ngram: usize,
    /// Longest n-gram length (inclusive)
    pub max_ngram: usize,
    /// Lower document-frequency bound, as a fraction of training documents
    pub min_df: f64,
    /// Upper document-frequency bound, as a fraction of training documents
    pub max_df: f64,
    /// Vocabulary size cap
    pub max_features: usize,
    /// term → column index, empty until `fit`
    vocabulary: HashMap<String, usize>,
}

impl CountVectorizer {
    pub fn new(min_df: f64, max_df: f64, max_features: usize) -> Self {
        Self {
            min_ngram: 1,
            max_ngram: 2,
            min_df,
            max_df,
            max_features,
            vocabulary: HashMap::new(),
        }
    }

    /// The fitted terms in column order, mostly useful for inspection
    /// and tests.
    pub fn vocabulary_terms(&self) -> Vec<String> {
        let mut terms: Vec<(&String, usize)> =
            self.vocabulary.iter().map(|(t, &i)| (t, i)).collect();
        terms.sort_by_key(|(_, i)| *i);
        terms.into_iter().map(|(t, _)| t.clone()).collect()
    }

    fn document_terms(&self, text: &str) -> Vec<String> {
        let tokens = tokenize(text);
        ngrams(&tokens, self.min_ngram, self.max_ngram)
    }
}

impl TextVectorizer for CountVectorizer {
    fn fit(&mut self, documents: &[String]) -> Result<()> {
        if documents.is_empty() {
            anyhow::bail!("cannot fit a vocabulary on zero documents");
        }

        let n_docs = documents.len() as f64;
        let mut doc_frequency: HashMap<String, usize> = HashMap::new();
        let mut corpus_count: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let terms = self.document_terms(doc);
            for term in &terms {
                *corpus_count.entry(term.clone()).or_insert(0) += 1;
            }
            let unique: std::collections::HashSet<String> = terms.into_iter().collect();
            for term in unique {
                *doc_frequency.entry(term).or_insert(0) += 1;
            }
        }

        // Document-frequency band filter
        let mut qualified: Vec<(String, usize)> = doc_frequency
            .into_iter()
            .filter(|(_, df)| {
                let fraction = *df as f64 / n_docs;
                fraction >= self.min_df && fraction <= self.max_df
            })
            .map(|(term, _)| {
                let count = corpus_count[&term];
                (term, count)
            })
            .collect();

        if qualified.is_empty() {
            anyhow::bail!(
                "no terms survived the document-frequency band [{}, {}] — \
                 the corpus may be too small or too uniform",
                self.min_df,
                self.max_df
            );
        }

        // Most frequent first, alphabetical among equals
        qualified.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        qualified.truncate(self.max_features);

        // Alphabetical column order for a deterministic layout
        let mut terms: Vec<String> = qualified.into_iter().map(|(t, _)| t).collect();
        terms.sort();

        self.vocabulary = terms
            .into_iter()
            .enumerate()
            .map(|(i, t)| (t, i))
            .collect();

        info!(
            vocabulary = self.vocabulary.len(),
            documents = documents.len(),
            "Fitted vocabulary"
        );
        Ok(())
    }

    fn transform(&self, documents: &[String]) -> Result<Vec<Vec<f64>>> {
        if self.vocabulary.is_empty() {
            anyhow::bail!("vectorizer has not been fitted — call fit on the training set first");
        }

        let width = self.vocabulary.len();
        let matrix = documents
            .iter()
            .map(|doc| {
                let mut row = vec![0.0; width];
                for term in self.document_terms(doc) {
                    if let Some(&col) = self.vocabulary.get(&term) {
                        row[col] += 1.0;
                    }
                }
                row
            })
            .collect();

        Ok(matrix)
    }

    fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}
