//! # Text Generation Client (`common::openai::client`)
//!
//! File: cli/src/common/openai/client.rs
//!
//! ## Overview
//!
//! `TextGenerationClient` is the production `TextGenerator`. It posts JSON to
//! `{host}/chat/completions` (and `{host}/images/generations`) with a bearer
//! token, waits for the whole body and deserializes it.
//!
//! The connection settings are injected at construction; nothing here reads
//! configuration files or the environment.
//!
//! ## Failure behaviour
//!
//! - One attempt per call, bounded by the configured timeout.
//! - The HTTP status is not checked before parsing (see `common::http`).
//! - An empty API key is sent as-is; the endpoint rejects it.
//!
use super::models::{
    CompletionRequest, CompletionResponse, ImageGenerationRequest, ImageGenerationResponse,
};
use super::TextGenerator;
use crate::common::http;
use crate::core::config::GenerationSettings;
use crate::core::error::{MoodbotError, Result};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

const COMPLETIONS_PATH: &str = "chat/completions";
const IMAGES_PATH: &str = "images/generations";

pub struct TextGenerationClient {
    client: reqwest::Client,
    settings: GenerationSettings,
}

impl TextGenerationClient {
    /// # New Client (`new`)
    ///
    /// Creates a client bound to one host and key.
    ///
    /// ## Errors
    ///
    /// Fails only if the underlying HTTP client cannot be built (e.g. the TLS
    /// backend fails to initialise).
    pub fn new(settings: GenerationSettings) -> Result<Self> {
        let client = http::build_client(settings.timeout)?;
        Ok(Self { client, settings })
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = http::join_url(&self.settings.host, path);
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.settings.api_key)
            .json(body)
            .send()
            .await
            .map_err(MoodbotError::from)?;
        http::read_json(response).await
    }
}

#[async_trait]
impl TextGenerator for TextGenerationClient {
    async fn get_text_completion(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        debug!(
            "Requesting completion from model '{}' ({} message(s))",
            request.model,
            request.messages.len()
        );
        let response: CompletionResponse = self.post(COMPLETIONS_PATH, request).await?;
        debug!(
            "Completion {} used {} token(s)",
            response.id, response.usage.total_tokens
        );
        Ok(response)
    }

    async fn generate_image(
        &self,
        request: &ImageGenerationRequest,
    ) -> Result<ImageGenerationResponse> {
        debug!("Requesting {} image(s) of size {}", request.n, request.size);
        self.post(IMAGES_PATH, request).await
    }
}
