//! # Moodbot Service Clients (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Clients for the two remote services moodbot depends on, plus the HTTP
//! plumbing they share. Nothing in here knows about the dialog; the `dialog`
//! module only sees the `MoodClassifier` and `TextGenerator` traits.
//!
//! - **`clu`**: Conversational Language Understanding requests and the
//!   `Intent` mapping.
//! - **`openai`**: OpenAI-compatible chat completion and image generation.
//! - **`http`**: Client construction, URL joining and JSON decoding.
//!

/// CLU mood classification.
pub mod clu;
/// Shared reqwest helpers.
pub mod http;
/// OpenAI-compatible text and image generation.
pub mod openai;
