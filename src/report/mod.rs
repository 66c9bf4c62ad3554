// Evaluation report — per-class precision/recall/F1 and aggregates.

pub mod terminal;

use std::collections::BTreeMap;

use anyhow::Result;

/// Quality numbers for a single class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Number of true examples of this class
    pub support: usize,
}

/// A full classification report over one truth/prediction pair.
#[derive(Debug, Clone)]
pub struct ClassReport {
    /// Per-class metrics, in sorted class order
    pub classes: BTreeMap<String, ClassMetrics>,
    /// Fraction of predictions that match the truth
    pub accuracy: f64,
    /// Unweighted mean of the per-class metrics
    pub macro_avg: ClassMetrics,
    /// Support-weighted mean of the per-class metrics
    pub weighted_avg: ClassMetrics,
    /// Total number of evaluated examples
    pub total: usize,
}

impl ClassReport {
    /// Compute a report from equal-length, same-order label sequences.
    ///
    /// A class with no predicted examples gets precision 0.0 rather than a
    /// division error; likewise recall for a class with no true examples.
    pub fn from_labels(truth: &[String], predicted: &[String]) -> Result<Self> {
        if truth.len() != predicted.len() {
            anyhow::bail!(
                "truth ({}) and predictions ({}) have different lengths",
                truth.len(),
                predicted.len()
            );
        }
        if truth.is_empty() {
            anyhow::bail!("cannot report on zero examples");
        }

        // Rows for every class seen on either side, sorted by BTreeMap
        let mut tallies: BTreeMap<String, Tally> = BTreeMap::new();
        for label in truth.iter().chain(predicted) {
            tallies.entry(label.clone()).or_default();
        }

        let mut correct = 0usize;
        for (t, p) in truth.iter().zip(predicted) {
            if t == p {
                correct += 1;
                if let Some(c) = tallies.get_mut(t) {
                    c.true_positive += 1;
                }
            } else {
                if let Some(c) = tallies.get_mut(p) {
                    c.false_positive += 1;
                }
                if let Some(c) = tallies.get_mut(t) {
                    c.false_negative += 1;
                }
            }
        }

        let classes: BTreeMap<String, ClassMetrics> = tallies
            .into_iter()
            .map(|(class, tally)| (class, tally.metrics()))
            .collect();

        let total = truth.len();
        let n_classes = classes.len() as f64;
        let mut macro_avg = ClassMetrics {
            precision: 0.0,
            recall: 0.0,
            f1: 0.0,
            support: total,
        };
        let mut weighted_avg = macro_avg;
        for m in classes.values() {
            macro_avg.precision += m.precision / n_classes;
            macro_avg.recall += m.recall / n_classes;
            macro_avg.f1 += m.f1 / n_classes;

            let weight = m.support as f64 / total as f64;
            weighted_avg.precision += m.precision * weight;
            weighted_avg.recall += m.recall * weight;
            weighted_avg.f1 += m.f1 * weight;
        }

        Ok(Self {
            classes,
            accuracy: correct as f64 / total as f64,
            macro_avg,
            weighted_avg,
            total,
        })
    }
}

#[derive(Default)]
struct Tally {
    true_positive: usize,
    false_positive: usize,
    false_negative: usize,
}

impl Tally {
    fn metrics(&self) -> ClassMetrics {
        let tp = self.true_positive as f64;
        let precision = ratio(tp, tp + self.false_positive as f64);
        let recall = ratio(tp, tp + self.false_negative as f64);
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        ClassMetrics {
            precision,
            recall,
            f1,
            support: self.true_positive + self.false_negative,
        }
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
