// Seeded train/test splitter.
//
// Shuffles the records with a seed-derived RNG and holds out the tail as the
// test set. The seed fully determines the partition, so repeated runs over
// the same file produce identical splits — predictions stay comparable
// across runs and the evaluation never sees a different holdout.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use super::{NewsRecord, SplitCorpus};

/// Shuffle `records` deterministically and split into train/test sequences.
///
/// `test_fraction` is the holdout proportion, e.g. 0.2 for an 80/20 split.
/// The two sides are disjoint and together contain every input record.
pub fn train_test_split(
    records: Vec<NewsRecord>,
    test_fraction: f64,
    seed: u64,
) -> Result<SplitCorpus> {
    if !(0.0 < test_fraction && test_fraction < 1.0) {
        anyhow::bail!(
            "test fraction must be strictly between 0 and 1, got {test_fraction}"
        );
    }

    let mut records = records;
    let mut rng = StdRng::seed_from_u64(seed);
    records.shuffle(&mut rng);

    let total = records.len();
    let test_size = ((total as f64) * test_fraction).round() as usize;
    // Clamp so tiny datasets still leave at least one record on each side
    let test_size = test_size.clamp(usize::from(total > 1), total.saturating_sub(1));

    let test = records.split_off(total - test_size);

    debug!(
        train = records.len(),
        test = test.len(),
        seed,
        "Dataset split"
    );

    let (train_texts, train_labels) = records.into_iter().map(|r| (r.text, r.label)).unzip();
    let (test_texts, test_labels) = test.into_iter().map(|r| (r.text, r.label)).unzip();

    Ok(SplitCorpus {
        train_texts,
        test_texts,
        train_labels,
        test_labels,
    })
}
