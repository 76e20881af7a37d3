//! # Mood Dialog (`dialog`)
//!
//! File: cli/src/dialog/mod.rs
//!
//! ## Overview
//!
//! The conversation logic of moodbot, independent of any terminal or network:
//!
//! - **`flow`**: `MoodDialog`, the AwaitMood → Classify → Acknowledge cycle.
//! - **`strategy`**: `ReplyStrategy`, the per-intent reply table. The generated
//!   and static reply variants are two tables for the same flow.
//! - **`channel`**: outbound `Activity` values, their `InputHint`, and the
//!   `Channel` trait with its console implementation.
//!
//! ## Usage
//!
//! ```rust
//! let dialog = MoodDialog::new(classifier, generator, ReplyStrategy::generated(), "gpt-3.5-turbo");
//! let mut state = ConversationState::default();
//! let mut channel = ConsoleChannel::stdout();
//! dialog.on_turn(&mut state, "I feel great", &mut channel).await?;
//! ```
//!
pub mod channel;
pub mod flow;
pub mod strategy;
#[cfg(test)]
pub mod testing;

pub use channel::{Activity, Channel, ConsoleChannel};
pub use flow::{ConversationState, MoodDialog};
pub use strategy::ReplyStrategy;
