// Vectorizer trait — swap-ready abstraction.
//
// The pipeline talks to this trait rather than a concrete vectorizer, so the
// count-based extractor can be replaced (TF-IDF weighting, hashing trick)
// without touching the classifier or the pipeline wiring.

use anyhow::Result;

/// Trait for turning raw text into fixed-width numeric feature vectors.
///
/// `fit` consumes only training documents; `transform` must reuse the fitted
/// vocabulary unchanged so test documents can never leak into it.
pub trait TextVectorizer {
    /// Build the vocabulary from training documents.
    fn fit(&mut self, documents: &[String]) -> Result<()>;

    /// Encode documents against the fitted vocabulary. Terms outside the
    /// vocabulary are ignored, not added.
    fn transform(&self, documents: &[String]) -> Result<Vec<Vec<f64>>>;

    /// Number of terms in the fitted vocabulary (0 before `fit`).
    fn vocabulary_size(&self) -> usize;
}
