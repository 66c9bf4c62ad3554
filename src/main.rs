use anyhow::Result;
use clap::{Parser, Subcommand};

use veracity::config::{self, Config};
use veracity::features::tokenize;
use veracity::pipeline;
use veracity::report::terminal;

/// Veracity: fake-news text classification over CSV corpora.
///
/// Trains a logistic regression on n-gram count features and prints a
/// per-class quality report for a held-out test split.
#[derive(Parser)]
#[command(name = "veracity", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train on the configured dataset and print a classification report
    Evaluate {
        /// Path to the labeled CSV dataset
        #[arg(long)]
        data: Option<String>,

        /// Seed for the train/test shuffle and the solver
        #[arg(long)]
        seed: Option<u64>,

        /// Fraction of records held out for evaluation
        #[arg(long)]
        test_fraction: Option<f64>,

        /// Vocabulary size cap
        #[arg(long)]
        max_features: Option<usize>,

        /// Minimum document-frequency fraction for a term to qualify
        #[arg(long)]
        min_df: Option<f64>,

        /// Maximum document-frequency fraction for a term to qualify
        #[arg(long)]
        max_df: Option<f64>,

        /// SGD passes over the training set
        #[arg(long)]
        epochs: Option<usize>,

        /// SGD step size
        #[arg(long)]
        learning_rate: Option<f64>,
    },

    /// Print a two-line greeting
    Greet {
        /// Name to greet (default: "Kevin")
        #[arg(long, default_value = config::DEFAULT_GREET_NAME)]
        name: String,

        /// Age in years
        #[arg(long)]
        age: i64,
    },

    /// Tokenize a text and print one token per line
    Tokenize {
        /// Text to tokenize
        #[arg(default_value = "This is a string")]
        text: String,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("veracity=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate {
            data,
            seed,
            test_fraction,
            max_features,
            min_df,
            max_df,
            epochs,
            learning_rate,
        } => {
            let mut config = Config::load()?;
            // CLI flags override env-derived values
            if let Some(data) = data {
                config.data_path = data;
            }
            if let Some(seed) = seed {
                config.seed = seed;
            }
            if let Some(fraction) = test_fraction {
                config.test_fraction = fraction;
            }
            if let Some(cap) = max_features {
                config.max_features = cap;
            }
            if let Some(min_df) = min_df {
                config.min_df = min_df;
            }
            if let Some(max_df) = max_df {
                config.max_df = max_df;
            }
            if let Some(epochs) = epochs {
                config.epochs = epochs;
            }
            if let Some(lr) = learning_rate {
                config.learning_rate = lr;
            }

            println!("Evaluating classifier on '{}'...", config.data_path);
            let report = pipeline::evaluate(&config)?;
            terminal::display_report(&report);
        }

        Commands::Greet { name, age } => {
            println!("Hello, my name is {name}!");
            println!("I am {age} years old!");
        }

        Commands::Tokenize { text } => {
            for token in tokenize::tokenize(&text) {
                println!("{token}");
            }
        }
    }

    Ok(())
}
