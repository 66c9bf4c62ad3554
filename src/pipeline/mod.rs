// The evaluation pipeline: load → split → vectorize → fit → predict → report.
//
// One linear pass per invocation. Every stage hands fresh data to the next
// and any failure propagates straight out — there are no retries and no
// partial results for a one-shot batch run.

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::data::{loader, split};
use crate::features::traits::TextVectorizer;
use crate::features::vectorizer::CountVectorizer;
use crate::model::logistic::{LogisticModel, TrainOptions};
use crate::report::ClassReport;

/// Run the full pipeline once and return the computed report.
///
/// The caller decides how to render it; see `report::terminal`.
pub fn evaluate(config: &Config) -> Result<ClassReport> {
    config.validate()?;

    let records = loader::load_records(&config.data_path)?;
    let corpus = split::train_test_split(records, config.test_fraction, config.seed)?;
    info!(
        train = corpus.train_len(),
        test = corpus.test_len(),
        "Split corpus"
    );

    // Vocabulary comes from the training texts only; the test matrix reuses
    // it unfitted so evaluation never leaks test-set terms.
    let mut vectorizer = CountVectorizer::new(config.min_df, config.max_df, config.max_features);
    vectorizer
        .fit(&corpus.train_texts)
        .context("fitting the vocabulary")?;
    let train_features = vectorizer.transform(&corpus.train_texts)?;
    let test_features = vectorizer.transform(&corpus.test_texts)?;

    let model = LogisticModel::fit(
        &train_features,
        &corpus.train_labels,
        TrainOptions {
            epochs: config.epochs,
            learning_rate: config.learning_rate,
            seed: config.seed,
        },
    )
    .context("fitting the classifier")?;

    let predicted = model.predict(&test_features)?;
    ClassReport::from_labels(&corpus.test_labels, &predicted)
}
