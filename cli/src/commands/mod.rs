//! # Moodbot Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the moodbot CLI so that
//! `main.rs` can route parsed arguments to them.
//!
//! ## Commands
//!
//! - `chat`: The interactive mood check-in conversation
//! - `classify`: One CLU call for a single utterance
//! - `complete`: One chat completion call for a single prompt
//! - `image`: One image generation call
//!
//! Each command defines its own arguments structure and a `handle_*` function
//! that receives those arguments together with the loaded `Config`.
//!

/// Interactive mood check-in dialog on stdin/stdout.
pub mod chat;
/// Prints the CLU top intent for an utterance.
pub mod classify;
/// Prints a single text completion.
pub mod complete;
/// Prints generated image URLs.
pub mod image;
