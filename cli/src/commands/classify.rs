//! # Moodbot Classify Command
//!
//! File: cli/src/commands/classify.rs
//!
//! `moodbot classify <UTTERANCE>...` runs one CLU call and prints the raw top
//! intent label, its confidence, and the mood the dialog would act on:
//!
//! ```text
//! $ moodbot classify I feel great
//! Happy (0.97) -> Happy
//! ```
//!
use crate::common::clu::{CluRecognizer, MoodClassifier};
use crate::core::config::Config;
use crate::core::error::{MoodbotError, Result};
use anyhow::anyhow;
use clap::Parser;

#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    /// Text to classify. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub utterance: Vec<String>,
}

pub async fn handle_classify(args: ClassifyArgs, config: Config) -> Result<()> {
    let recognizer = CluRecognizer::new(config.clu)?;
    if !recognizer.is_configured() {
        return Err(anyhow!(MoodbotError::Config(
            "CLU is not configured. Set project_name, deployment_name, api_key and api_host_name \
             under [clu] or pass the --clu-* flags."
                .to_string()
        )));
    }
    let recognition = recognizer.recognize(&args.utterance.join(" ")).await?;
    println!(
        "{} ({:.2}) -> {}",
        recognition.label, recognition.score, recognition.intent
    );
    Ok(())
}
