//! # Text Generation (`common::openai`)
//!
//! File: cli/src/common/openai/mod.rs
//!
//! ## Overview
//!
//! Everything needed to talk to an OpenAI-compatible text generation API:
//!
//! - **`models`**: request/response shapes for `chat/completions` and `images/generations`.
//! - **`client`**: `TextGenerationClient`, the reqwest-backed implementation.
//!
//! The dialog depends only on the `TextGenerator` trait, so tests can swap in a
//! scripted generator without a network.
//!
use crate::core::error::Result;
use async_trait::async_trait;

pub mod client;
pub mod models;

pub use client::TextGenerationClient;
pub use models::{CompletionRequest, CompletionResponse, ImageGenerationRequest, ImageGenerationResponse};

/// A service that turns a seed instruction into generated text (or images).
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends one completion request and returns the parsed response.
    async fn get_text_completion(&self, request: &CompletionRequest) -> Result<CompletionResponse>;

    async fn generate_image(&self, request: &ImageGenerationRequest)
        -> Result<ImageGenerationResponse>;
}
