//! # Conversational Channel (`dialog::channel`)
//!
//! File: cli/src/dialog/channel.rs
//!
//! ## Overview
//!
//! The dialog never prints anything itself. Every outbound message is an
//! `Activity` handed to a `Channel`, annotated with an `InputHint` that tells
//! the channel whether the bot is now waiting for the user (`ExpectingInput`)
//! or just talking (`IgnoringInput`).
//!
//! `ConsoleChannel` is the terminal rendering used by `moodbot chat`: one
//! `Bot: ...` block per activity, continuation lines indented underneath.
//!
use crate::core::error::Result;
use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};

const BOT_PREFIX: &str = "Bot: ";

/// How the channel should treat user input after showing an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputHint {
    ExpectingInput,
    IgnoringInput,
}

/// One outbound bot message.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub text: String,
    /// Spoken form for voice channels. Mirrors `text`.
    pub speak: String,
    pub input_hint: InputHint,
}

impl Activity {
    /// A plain message that does not wait for an answer.
    pub fn message(text: impl Into<String>) -> Self {
        Self::with_hint(text, InputHint::IgnoringInput)
    }

    /// A prompt; the next user message answers it.
    pub fn prompt(text: impl Into<String>) -> Self {
        Self::with_hint(text, InputHint::ExpectingInput)
    }

    fn with_hint(text: impl Into<String>, input_hint: InputHint) -> Self {
        let text = text.into();
        Self {
            speak: text.clone(),
            text,
            input_hint,
        }
    }
}

/// Sink for outbound activities.
#[async_trait]
pub trait Channel: Send {
    async fn send_activity(&mut self, activity: Activity) -> Result<()>;
}

/// Renders activities as text lines on any async writer (stdout in production).
pub struct ConsoleChannel<W> {
    writer: W,
}

impl ConsoleChannel<tokio::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

impl<W> ConsoleChannel<W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Formats one activity for the terminal.
pub fn render(activity: &Activity) -> String {
    let indent = " ".repeat(BOT_PREFIX.len());
    let mut rendered = String::from(BOT_PREFIX);
    for (i, line) in activity.text.lines().enumerate() {
        if i > 0 {
            rendered.push('\n');
            rendered.push_str(&indent);
        }
        rendered.push_str(line);
    }
    rendered.push('\n');
    rendered
}

#[async_trait]
impl<W> Channel for ConsoleChannel<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn send_activity(&mut self, activity: Activity) -> Result<()> {
        self.writer.write_all(render(&activity).as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_hints() {
        let prompt = Activity::prompt("How are you?");
        assert_eq!(prompt.input_hint, InputHint::ExpectingInput);
        assert_eq!(prompt.speak, "How are you?");
        assert_eq!(Activity::message("ok").input_hint, InputHint::IgnoringInput);
    }

    #[test]
    fn test_render_indents_continuation_lines() {
        let activity = Activity::prompt("How are you feeling today?\nSay something like Good");
        assert_eq!(
            render(&activity),
            "Bot: How are you feeling today?\n     Say something like Good\n"
        );
        assert_eq!(render(&Activity::message("Thank you")), "Bot: Thank you\n");
    }

    #[tokio::test]
    async fn test_console_channel_writes_rendered_activities() {
        let mut channel = ConsoleChannel::new(Vec::new());
        channel
            .send_activity(Activity::message("Please try again"))
            .await
            .unwrap();
        channel.send_activity(Activity::prompt("Tell me again")).await.unwrap();
        let written = String::from_utf8(channel.into_inner()).unwrap();
        assert_eq!(written, "Bot: Please try again\nBot: Tell me again\n");
    }
}
