//! # Moodbot Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the moodbot CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading the layered configuration
//! - Routing execution to appropriate command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Start a conversation
//! moodbot chat
//!
//! # Check what CLU makes of an utterance, with request logging
//! moodbot -v classify I feel a bit low
//!
//! # Point at a different configuration file for one run
//! moodbot --config ./staging.toml complete Say hello
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Load configuration (files, then command-line overrides)
//! 4. Route to the command handler
//! 5. Format and display any errors that occur
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers (chat, classify, complete, image)
mod common; // Remote service clients (clu, openai)
mod core; // Configuration and errors
mod dialog; // The mood check-in conversation

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "moodbot",
    about = "Moodbot: a small mood check-in chat bot",
    long_about = "Asks how you feel, classifies the answer with CLU and replies with\n\
                  generated text: a kind word, a joke or a short meditation.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(flatten)]
    overrides: core::config::ConfigOverrides,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Start the mood check-in conversation.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Classify one utterance with CLU.
    Classify(commands::classify::ClassifyArgs),
    /// Send one prompt to the chat completions endpoint.
    Complete(commands::complete::CompleteArgs),
    /// Generate images from a prompt.
    Image(commands::image::ImageArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed command: {:?}", cli.command);

    let command_result = match core::config::load_config(&cli.overrides) {
        Ok(config) => match cli.command {
            Commands::Chat(args) => commands::chat::handle_chat(args, config).await,
            Commands::Classify(args) => commands::classify::handle_classify(args, config).await,
            Commands::Complete(args) => commands::complete::handle_complete(args, config).await,
            Commands::Image(args) => commands::image::handle_image(args, config).await,
        },
        Err(e) => Err(e),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
