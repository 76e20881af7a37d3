//! # Moodbot Complete Command
//!
//! File: cli/src/commands/complete.rs
//!
//! `moodbot complete <PROMPT>...` sends one chat completion request with a
//! single user message and prints the first choice's content. Handy for
//! checking the text generation settings without starting a conversation.
//!
use crate::common::openai::{CompletionRequest, TextGenerationClient, TextGenerator};
use crate::core::config::Config;
use crate::core::error::{MoodbotError, Result};
use crate::dialog::flow::COMPLETION_TEMPERATURE;
use anyhow::anyhow;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
pub struct CompleteArgs {
    /// Instruction to send. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub prompt: Vec<String>,

    /// Model to use instead of `openai.model` from the configuration.
    #[arg(long, short)]
    pub model: Option<String>,

    /// Sampling temperature between 0 and 2.
    #[arg(long, short, default_value_t = COMPLETION_TEMPERATURE)]
    pub temperature: f64,
}

pub async fn handle_complete(args: CompleteArgs, config: Config) -> Result<()> {
    if !(0.0..=2.0).contains(&args.temperature) {
        return Err(anyhow!(MoodbotError::ArgumentParsing(format!(
            "temperature must be between 0 and 2, got {}",
            args.temperature
        ))));
    }

    let model = args.model.unwrap_or_else(|| config.openai.model.clone());
    let request = CompletionRequest::single_user_message(model, args.temperature, args.prompt.join(" "));
    info!("Requesting completion from {}", config.openai.host_name);

    let client = TextGenerationClient::new(config.openai.generation_settings())?;
    let response = client.get_text_completion(&request).await?;
    let text = response
        .first_content()
        .ok_or(MoodbotError::EmptyCompletion)?;
    println!("{}", text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rejects_out_of_range_temperature() {
        let args = CompleteArgs {
            prompt: vec!["hi".into()],
            model: None,
            temperature: 2.5,
        };
        let err = handle_complete(args, Config::default()).await.unwrap_err();
        assert!(err.to_string().contains("temperature must be between 0 and 2"));
    }
}
