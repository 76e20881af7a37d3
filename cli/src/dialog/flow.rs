//! # Mood Dialog Flow (`dialog::flow`)
//!
//! File: cli/src/dialog/flow.rs
//!
//! ## Overview
//!
//! `MoodDialog` is a three-step cycle that never ends on its own:
//!
//! ```text
//!  AwaitMood ──(user answers)──> Classify ──> Acknowledge ──┐
//!      ^                                                     │
//!      └──────────────── prompt "Tell me again" ─────────────┘
//! ```
//!
//! - **AwaitMood** sends the mood prompt and waits for the next user message.
//!   Without classifier credentials it sends a configuration notice instead and
//!   goes straight on to Classify with the current message.
//! - **Classify** asks the `MoodClassifier` for the top intent and carries out
//!   the `Reply` the `ReplyStrategy` maps it to, calling the `TextGenerator`
//!   when the reply is generated.
//! - **Acknowledge** restarts the cycle with the "Tell me again" prompt.
//!
//! ## Turns
//!
//! The host calls `on_turn` once per user message. A turn runs steps until one
//! waits for input. The new position is written back to `ConversationState`
//! only when the whole turn succeeds: a classifier or generation fault aborts
//! the turn and leaves the previous state in place.
//!
//! In degraded mode AwaitMood never waits, so a turn that has already
//! classified its message stops when it reaches AwaitMood again and the next
//! message picks up from there.
//!
use super::channel::{Activity, Channel};
use super::strategy::{not_understood_message, Reply, ReplyStrategy};
use crate::common::clu::MoodClassifier;
use crate::common::openai::{CompletionRequest, TextGenerator};
use crate::core::error::{MoodbotError, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const DEFAULT_PROMPT: &str = "How are you feeling today?\nSay something like Good, neutral or low";
pub const RESTART_PROMPT: &str = "Tell me again";
pub const TRY_AGAIN_MESSAGE: &str = "Please try again";
pub const CLU_NOT_CONFIGURED_NOTICE: &str = "NOTE: CLU is not configured. To enable all capabilities, add 'project_name', 'deployment_name', 'api_key' and 'api_host_name' to the [clu] section of .moodbot.toml.";

/// Sampling temperature for every completion the dialog requests.
pub const COMPLETION_TEMPERATURE: f64 = 0.7;

/// Position in the mood cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogStep {
    /// `prompt` replaces the default prompt text when set.
    AwaitMood { prompt: Option<String> },
    Classify,
    Acknowledge,
}

impl Default for DialogStep {
    fn default() -> Self {
        DialogStep::AwaitMood { prompt: None }
    }
}

/// Per-conversation state kept by the host between turns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationState {
    pub step: DialogStep,
}

/// Outcome of running one step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepResult {
    /// Go on to the given step within the same turn.
    Continue(DialogStep),
    /// Stop the turn; the given step runs when the next message arrives.
    Wait(DialogStep),
}

pub struct MoodDialog {
    classifier: Arc<dyn MoodClassifier>,
    generator: Arc<dyn TextGenerator>,
    strategy: ReplyStrategy,
    model: String,
    degraded_logged: AtomicBool,
}

impl MoodDialog {
    pub fn new(
        classifier: Arc<dyn MoodClassifier>,
        generator: Arc<dyn TextGenerator>,
        strategy: ReplyStrategy,
        model: impl Into<String>,
    ) -> Self {
        Self {
            classifier,
            generator,
            strategy,
            model: model.into(),
            degraded_logged: AtomicBool::new(false),
        }
    }

    /// # Handle One Turn (`on_turn`)
    ///
    /// Feeds one user message into the cycle and runs steps until the dialog
    /// waits again.
    ///
    /// ## Errors
    ///
    /// Any classifier, generation or channel failure. `state` is untouched in
    /// that case.
    pub async fn on_turn(
        &self,
        state: &mut ConversationState,
        utterance: &str,
        channel: &mut dyn Channel,
    ) -> Result<()> {
        let mut input = Some(utterance);
        let mut step = state.step.clone();

        loop {
            let result = match step {
                DialogStep::AwaitMood { ref prompt } => {
                    if input.is_none() && !self.classifier.is_configured() {
                        debug!("Message already handled this turn; waiting at AwaitMood");
                        StepResult::Wait(step.clone())
                    } else {
                        self.intro_step(prompt.as_deref(), channel).await?
                    }
                }
                DialogStep::Classify => {
                    let text = input.take().unwrap_or_default();
                    self.act_step(text, channel).await?
                }
                DialogStep::Acknowledge => self.final_step(),
            };

            match result {
                StepResult::Continue(next) => step = next,
                StepResult::Wait(next) => {
                    state.step = next;
                    return Ok(());
                }
            }
        }
    }

    /// # AwaitMood (`intro_step`)
    ///
    /// Sends `prompt` (or the default prompt) and waits. In degraded mode sends
    /// the configuration notice and continues to Classify without waiting.
    pub async fn intro_step(
        &self,
        prompt: Option<&str>,
        channel: &mut dyn Channel,
    ) -> Result<StepResult> {
        if !self.classifier.is_configured() {
            if !self.degraded_logged.swap(true, Ordering::Relaxed) {
                warn!("CLU credentials missing; running the mood dialog in degraded mode");
            }
            channel
                .send_activity(Activity::message(CLU_NOT_CONFIGURED_NOTICE))
                .await?;
            return Ok(StepResult::Continue(DialogStep::Classify));
        }

        let text = prompt.unwrap_or(DEFAULT_PROMPT);
        channel.send_activity(Activity::prompt(text)).await?;
        Ok(StepResult::Wait(DialogStep::Classify))
    }

    /// # Classify (`act_step`)
    ///
    /// Classifies `utterance` and sends the reply for the top intent. Always
    /// continues to Acknowledge when it succeeds.
    pub async fn act_step(&self, utterance: &str, channel: &mut dyn Channel) -> Result<StepResult> {
        if !self.classifier.is_configured() {
            channel
                .send_activity(Activity::message(TRY_AGAIN_MESSAGE))
                .await?;
        }

        let recognition = self.classifier.recognize(utterance).await?;
        info!(
            "Classified mood as {} (label '{}', score {:.2})",
            recognition.intent, recognition.label, recognition.score
        );

        match self.strategy.reply_for(recognition.intent) {
            Reply::Canned(text) => {
                channel.send_activity(Activity::message(text.as_str())).await?;
            }
            Reply::Generated { lead_in, seed } => {
                if let Some(lead_in) = lead_in {
                    channel.send_activity(Activity::message(lead_in.as_str())).await?;
                }
                let text = self.complete(seed).await?;
                channel.send_activity(Activity::message(text)).await?;
            }
            Reply::NotUnderstood => {
                channel
                    .send_activity(Activity::message(not_understood_message(&recognition.label)))
                    .await?;
            }
        }

        Ok(StepResult::Continue(DialogStep::Acknowledge))
    }

    /// # Acknowledge (`final_step`)
    ///
    /// Restarts the cycle with the "Tell me again" prompt.
    pub fn final_step(&self) -> StepResult {
        StepResult::Continue(DialogStep::AwaitMood {
            prompt: Some(RESTART_PROMPT.to_string()),
        })
    }

    async fn complete(&self, seed: &str) -> Result<String> {
        let request = CompletionRequest::single_user_message(&self.model, COMPLETION_TEMPERATURE, seed);
        let response = self.generator.get_text_completion(&request).await?;
        let text = response
            .first_content()
            .ok_or(MoodbotError::EmptyCompletion)?;
        Ok(text.to_string())
    }
}
