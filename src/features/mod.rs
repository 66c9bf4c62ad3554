// Feature extraction — tokenization and n-gram count vectorization.

pub mod tokenize;
pub mod traits;
pub mod vectorizer;
