//! # Moodbot Image Command
//!
//! File: cli/src/commands/image.rs
//!
//! `moodbot image <PROMPT>...` asks the configured OpenAI-compatible host for
//! one or more generated images and prints the returned URLs, one per line.
//!
//! ```bash
//! moodbot image a calm lake at sunrise -n 2 --size 1024x1024
//! ```
//!
use crate::common::openai::{ImageGenerationRequest, TextGenerationClient, TextGenerator};
use crate::core::config::Config;
use crate::core::error::Result;
use anyhow::bail;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
pub struct ImageArgs {
    /// Description of the image. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub prompt: Vec<String>,

    /// Number of images to generate (1-10).
    #[arg(short = 'n', long = "count", default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub count: u8,

    /// Image size.
    #[arg(long, default_value = "512x512", value_parser = ["256x256", "512x512", "1024x1024"])]
    pub size: String,
}

pub async fn handle_image(args: ImageArgs, config: Config) -> Result<()> {
    let request = ImageGenerationRequest {
        prompt: args.prompt.join(" "),
        n: args.count,
        size: args.size,
    };
    info!(
        "Requesting {} image(s) of size {} from {}",
        request.n, request.size, config.openai.host_name
    );

    let client = TextGenerationClient::new(config.openai.generation_settings())?;
    let response = client.generate_image(&request).await?;
    if response.data.is_empty() {
        bail!("The image service returned no images");
    }
    for image in &response.data {
        println!("{}", image.url);
    }
    Ok(())
}
