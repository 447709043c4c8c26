//! Subcommand implementations. Each loads what it needs, does its work, and
//! propagates any failure to `main`.

use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};
use yelpsent_ai::{SentimentClassifier, SentimentModel, evaluate_with, score_texts};
use yelpsent_core::{Config, ReviewSet};
use yelpsent_store::{
    examples_from_reviews, examples_from_split_files, read_text_dir, split_reviews,
};

use crate::display;

/// Text analysed after training as a smoke test.
const DEMO_TEXT: &str = "I feel good!";

pub fn print(config: &Config, file: &Path) -> anyhow::Result<()> {
    let reviews = load_reviews(config, file)?;
    display::print_reviews(&reviews);
    display::print_summary(&reviews.summary());
    Ok(())
}

pub fn split(config: &Config, file: &Path, prefix: &str) -> anyhow::Result<()> {
    let reviews = load_reviews(config, file)?;
    let written = split_reviews(&reviews, &config.output_dir, prefix)
        .with_context(|| format!("splitting reviews into {}", config.output_dir.display()))?;
    for out in &written {
        println!("file: {} => bytes: {} ", out.path.display(), out.bytes);
    }
    Ok(())
}

/// Train on a reviews file (`.` for the configured default) or a directory of
/// split files, then persist the model.
pub fn train(config: &Config, source: &Path) -> anyhow::Result<()> {
    let source = config.resolve_input(source);
    let model = if source.is_dir() {
        train_from_split_dir(&source)?
    } else {
        let reviews = yelpsent_store::load(&source)
            .with_context(|| format!("loading reviews from {}", source.display()))?;
        SentimentModel::train(examples_from_reviews(&reviews)).context("training sentiment model")?
    };

    model
        .persist(&config.model_path)
        .context("persisting sentiment model")?;

    display::print_analysis(&model.analyze(DEMO_TEXT));
    Ok(())
}

fn train_from_split_dir(dir: &Path) -> anyhow::Result<SentimentModel> {
    let files = read_text_dir(dir)?;
    let split = examples_from_split_files(&files);
    if split.unrated > 0 {
        warn!(unrated = split.unrated, dir = %dir.display(), "skipped files without a rating in their name");
    }
    info!(examples = split.examples.len(), "training from split files");

    SentimentModel::train(split.examples).context("training sentiment model")
}

pub fn rate_dir(config: &Config, dir: &Path) -> anyhow::Result<()> {
    println!("Rating directory: {}", dir.display());
    let files = read_text_dir(dir)?;
    let model = restore_model(config)?;

    let counts = score_texts(
        &model,
        files.iter().map(|f| (f.name.as_str(), f.content.as_str())),
        |name, sentiment| println!("Processing: {name} => {}", sentiment.score()),
    );
    display::print_score_counts(&counts);
    Ok(())
}

pub fn old_sentiment(config: &Config, file: &Path) -> anyhow::Result<()> {
    let reviews = load_reviews(config, file)?;
    let model = restore_model(config)?;

    let tally = evaluate_with(&reviews, &model, display::print_review_analysis);
    display::print_tally(&tally);
    Ok(())
}

fn load_reviews(config: &Config, file: &Path) -> anyhow::Result<ReviewSet> {
    let path = config.resolve_input(file);
    yelpsent_store::load(&path).with_context(|| format!("loading reviews from {}", path.display()))
}

fn restore_model(config: &Config) -> anyhow::Result<SentimentModel> {
    SentimentModel::restore(&config.model_path).context("could not restore model")
}
