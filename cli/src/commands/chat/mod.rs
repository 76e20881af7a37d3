//! # Moodbot Chat Command
//!
//! File: cli/src/commands/chat/mod.rs
//!
//! ## Overview
//!
//! `moodbot chat` runs the mood check-in dialog in the terminal. It wires the
//! configured CLU recognizer and text generation client into a `MoodDialog`
//! and hands stdin/stdout to the console host.
//!
//! ## Examples
//!
//! ```bash
//! # Default: generated replies for every mood
//! moodbot chat
//!
//! # Answer a happy mood with a plain "Thank you"
//! moodbot chat --static-replies
//! ```
//!
//! The session ends on end of input (Ctrl-D) or Ctrl-C. Ctrl-C drops any turn
//! that is still waiting on the network.
//!
use crate::common::clu::CluRecognizer;
use crate::common::openai::TextGenerationClient;
use crate::core::config::{Config, ReplyMode};
use crate::core::error::Result;
use crate::dialog::{ConsoleChannel, MoodDialog, ReplyStrategy};
use clap::Parser;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::info;

pub mod console;

/// # Chat Command Arguments (`ChatArgs`)
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Answer a happy mood with a fixed "Thank you" instead of generated text.
    #[arg(long)]
    pub static_replies: bool,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Builds the dialog from `config` and runs it until input closes or the
/// user presses Ctrl-C.
pub async fn handle_chat(args: ChatArgs, config: Config) -> Result<()> {
    let mode = if args.static_replies {
        ReplyMode::Static
    } else {
        config.dialog.reply_mode
    };
    info!("Starting chat (reply mode: {:?})", mode);

    let classifier = Arc::new(CluRecognizer::new(config.clu.clone())?);
    let generator = Arc::new(TextGenerationClient::new(
        config.openai.generation_settings(),
    )?);
    let dialog = MoodDialog::new(
        classifier,
        generator,
        ReplyStrategy::for_mode(mode),
        config.openai.model.clone(),
    );

    eprintln!("Chat with Moodbot! Say hello to begin. Press Ctrl-D or Ctrl-C to quit.");

    let input = BufReader::new(tokio::io::stdin());
    let mut channel = ConsoleChannel::stdout();

    tokio::select! {
        result = console::run_conversation(&dialog, input, &mut channel) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted; ending conversation.");
            Ok(())
        }
    }
}
