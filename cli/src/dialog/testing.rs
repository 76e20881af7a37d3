//! Test doubles for the dialog's collaborators.
//!
//! File: cli/src/dialog/testing.rs
//!
use super::channel::{Activity, Channel};
use crate::common::clu::{Intent, MoodClassifier, Recognition};
use crate::common::openai::models::{Choice, Message, Usage};
use crate::common::openai::{
    CompletionRequest, CompletionResponse, ImageGenerationRequest, ImageGenerationResponse,
    TextGenerator,
};
use crate::core::error::{MoodbotError, Result};
use anyhow::anyhow;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Channel that keeps every activity it receives.
#[derive(Debug, Default)]
pub struct RecordingChannel {
    pub activities: Vec<Activity>,
}

impl RecordingChannel {
    pub fn texts(&self) -> Vec<&str> {
        self.activities.iter().map(|a| a.text.as_str()).collect()
    }
}

#[async_trait]
impl Channel for RecordingChannel {
    async fn send_activity(&mut self, activity: Activity) -> Result<()> {
        self.activities.push(activity);
        Ok(())
    }
}

/// Classifier returning a fixed label and recording what it was asked.
/// With no label, `recognize` fails the way an unconfigured CLU client does.
pub struct FixedClassifier {
    configured: bool,
    label: Option<&'static str>,
    pub seen: Mutex<Vec<String>>,
}

impl FixedClassifier {
    pub fn returning(label: &'static str) -> Arc<Self> {
        Arc::new(Self {
            configured: true,
            label: Some(label),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn unconfigured(label: Option<&'static str>) -> Arc<Self> {
        Arc::new(Self {
            configured: false,
            label,
            seen: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl MoodClassifier for FixedClassifier {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn recognize(&self, utterance: &str) -> Result<Recognition> {
        self.seen.lock().unwrap().push(utterance.to_string());
        match self.label {
            Some(label) => Ok(Recognition {
                intent: Intent::from_label(label),
                label: label.to_string(),
                score: 0.9,
            }),
            None => Err(MoodbotError::ClassifierUnconfigured.into()),
        }
    }
}

/// Generator answering every completion with `reply`, or failing when `None`.
pub struct ScriptedGenerator {
    reply: Option<&'static str>,
    pub requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedGenerator {
    pub fn replying(reply: &'static str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Content of the single user message of each request, in order.
    pub fn seeds(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.messages[0].content.clone())
            .collect()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn get_text_completion(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        self.requests.lock().unwrap().push(request.clone());
        let reply = self.reply.ok_or_else(|| anyhow!("generation endpoint down"))?;
        Ok(CompletionResponse {
            id: "c1".into(),
            object: "chat.completion".into(),
            created: 0,
            model: request.model.clone(),
            usage: Usage::default(),
            choices: vec![Choice {
                message: Message {
                    role: "assistant".into(),
                    content: reply.into(),
                },
                finish_reason: Some("stop".into()),
                index: 0,
            }],
        })
    }

    async fn generate_image(
        &self,
        _request: &ImageGenerationRequest,
    ) -> Result<ImageGenerationResponse> {
        Err(anyhow!("image generation is not scripted"))
    }
}
