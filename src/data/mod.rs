// Dataset input — CSV loading and the deterministic train/test split.

pub mod loader;
pub mod split;

use serde::Deserialize;

/// One labeled example from the corpus.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsRecord {
    /// Full article body
    pub text: String,
    /// Class label, e.g. "real" or "fake"
    pub label: String,
}

/// The four ordered sequences produced by the split: texts and labels for
/// each side, with train/test indices kept aligned pairwise.
#[derive(Debug, Clone)]
pub struct SplitCorpus {
    pub train_texts: Vec<String>,
    pub test_texts: Vec<String>,
    pub train_labels: Vec<String>,
    pub test_labels: Vec<String>,
}

impl SplitCorpus {
    pub fn train_len(&self) -> usize {
        self.train_texts.len()
    }

    pub fn test_len(&self) -> usize {
        self.test_texts.len()
    }
}
