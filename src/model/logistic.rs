// Binary logistic regression trained by seeded stochastic gradient descent.
//
// The model is the usual sigmoid over a weighted feature sum plus bias.
// Training runs a fixed number of epochs; each epoch visits every training
// row once in an order shuffled by a seed-derived RNG, so two runs with the
// same seed walk the same trajectory and land on identical weights. Weights
// start at zero and carry an L2 ridge term with strength 1/n.
//
// Class handling: the two distinct labels are sorted, the lexicographically
// greater one becomes the positive class. Probability >= 0.5 predicts
// positive. Anything other than exactly two classes is an error — the label
// domain here is assumed binary ("real"/"fake") and multiclass behavior is
// deliberately unsupported.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

/// Training knobs for the SGD solver.
#[derive(Debug, Clone, Copy)]
pub struct TrainOptions {
    /// Passes over the training set
    pub epochs: usize,
    /// Step size
    pub learning_rate: f64,
    /// Seed for the per-epoch row order
    pub seed: u64,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            epochs: 200,
            learning_rate: 0.05,
            seed: 42,
        }
    }
}

/// A fitted logistic regression model. Immutable after `fit` — there is no
/// incremental update path.
#[derive(Debug)]
pub struct LogisticModel {
    weights: Vec<f64>,
    bias: f64,
    /// [negative class, positive class], sorted
    classes: [String; 2],
}

impl LogisticModel {
    /// Fit a model on a dense feature matrix and its labels.
    ///
    /// Errors when the row and label counts differ, when rows are ragged,
    /// when the matrix is empty or zero-width, or when the label domain is
    /// not exactly two classes.
    pub fn fit(features: &[Vec<f64>], labels: &[String], options: TrainOptions) -> Result<Self> {
        if features.len() != labels.len() {
            anyhow::bail!(
                "feature rows ({}) and labels ({}) do not match",
                features.len(),
                labels.len()
            );
        }
        if features.is_empty() {
            anyhow::bail!("cannot fit on an empty training set");
        }
        let width = features[0].len();
        if width == 0 {
            anyhow::bail!("cannot fit on zero-width feature rows");
        }
        if let Some(bad) = features.iter().position(|row| row.len() != width) {
            anyhow::bail!(
                "feature row {bad} has width {} but row 0 has width {width}",
                features[bad].len()
            );
        }

        let classes = class_domain(labels)?;
        // 1 for the positive (greater) class, 0 for the negative
        let targets: Vec<f64> = labels
            .iter()
            .map(|l| if *l == classes[1] { 1.0 } else { 0.0 })
            .collect();

        let n = features.len();
        let ridge = 1.0 / n as f64;
        let mut weights = vec![0.0; width];
        let mut bias = 0.0;
        let mut rng = StdRng::seed_from_u64(options.seed);
        let mut order: Vec<usize> = (0..n).collect();

        for epoch in 0..options.epochs {
            order.shuffle(&mut rng);
            let mut epoch_loss = 0.0;

            for &i in &order {
                let row = &features[i];
                let p = sigmoid(dot(&weights, row) + bias);
                let error = p - targets[i];

                for (w, &x) in weights.iter_mut().zip(row) {
                    *w -= options.learning_rate * (error * x + ridge * *w);
                }
                bias -= options.learning_rate * error;

                epoch_loss += log_loss(p, targets[i]);
            }

            if epoch == 0 || (epoch + 1) % 50 == 0 {
                debug!(
                    epoch = epoch + 1,
                    loss = epoch_loss / n as f64,
                    "SGD epoch"
                );
            }
        }

        let final_loss: f64 = features
            .iter()
            .zip(&targets)
            .map(|(row, &t)| log_loss(sigmoid(dot(&weights, row) + bias), t))
            .sum::<f64>()
            / n as f64;
        info!(
            epochs = options.epochs,
            loss = final_loss,
            positive_class = %classes[1],
            "Fitted logistic regression"
        );

        Ok(Self {
            weights,
            bias,
            classes,
        })
    }

    /// Predicted probability of the positive class for one feature row.
    pub fn predict_proba(&self, row: &[f64]) -> Result<f64> {
        if row.len() != self.weights.len() {
            anyhow::bail!(
                "feature row has width {} but the model was fitted on width {}",
                row.len(),
                self.weights.len()
            );
        }
        Ok(sigmoid(dot(&self.weights, row) + self.bias))
    }

    /// Predict one label per feature row, in input order.
    pub fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<String>> {
        features
            .iter()
            .map(|row| {
                let p = self.predict_proba(row)?;
                let class = if p >= 0.5 { 1 } else { 0 };
                Ok(self.classes[class].clone())
            })
            .collect()
    }

    /// The sorted [negative, positive] class pair the model was fitted on.
    pub fn classes(&self) -> &[String; 2] {
        &self.classes
    }
}

/// Extract and sort the binary class domain, erroring otherwise.
fn class_domain(labels: &[String]) -> Result<[String; 2]> {
    let mut classes: Vec<String> = labels.to_vec();
    classes.sort();
    classes.dedup();
    match <[String; 2]>::try_from(classes) {
        Ok(pair) => Ok(pair),
        Err(classes) => anyhow::bail!(
            "expected exactly 2 label classes, found {}: {:?}",
            classes.len(),
            classes
        ),
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn sigmoid(z: f64) -> f64 {
    // Clamp to keep exp() finite on extreme logits
    let z = z.clamp(-500.0, 500.0);
    1.0 / (1.0 + (-z).exp())
}

fn log_loss(p: f64, target: f64) -> f64 {
    let p = p.clamp(1e-12, 1.0 - 1e-12);
    -(target * p.ln() + (1.0 - target) * (1.0 - p).ln())
}
