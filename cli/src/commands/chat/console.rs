//! # Console Host (`commands::chat::console`)
//!
//! File: cli/src/commands/chat/console.rs
//!
//! ## Overview
//!
//! Plays the role of the hosting bot framework for a terminal session:
//!
//! - Every non-empty input line is one turn.
//! - The conversation state lives here between turns.
//! - A failed turn is logged, the user gets a generic error message, and the
//!   conversation carries on from where it was before that turn.
//! - End of input ends the session.
//!
use crate::core::error::Result;
use crate::dialog::{Activity, Channel, ConversationState, MoodDialog};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, error, info};

/// Sent to the user when a turn fails.
pub const TURN_ERROR_MESSAGE: &str = "The bot encountered an error or bug.";

/// # Run Conversation (`run_conversation`)
///
/// Reads lines from `input` until it closes, feeding each one to `dialog`.
///
/// ## Errors
///
/// Only input errors and failures to deliver the generic error message end the
/// session with an error. Dialog faults are reported and the loop continues.
pub async fn run_conversation<R>(
    dialog: &MoodDialog,
    input: R,
    channel: &mut dyn Channel,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut state = ConversationState::default();
    let mut lines = input.lines();
    let mut turns = 0u64;

    while let Some(line) = lines.next_line().await? {
        let utterance = line.trim();
        if utterance.is_empty() {
            continue;
        }
        turns += 1;
        debug!("Turn {} at {:?}", turns, state.step);

        if let Err(e) = dialog.on_turn(&mut state, utterance, channel).await {
            error!("Turn {} failed: {:?}", turns, e);
            channel
                .send_activity(Activity::message(TURN_ERROR_MESSAGE))
                .await?;
        }
    }

    info!("Input closed after {} turn(s); ending conversation.", turns);
    Ok(())
}
