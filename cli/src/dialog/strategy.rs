//! # Reply Strategy (`dialog::strategy`)
//!
//! File: cli/src/dialog/strategy.rs
//!
//! ## Overview
//!
//! Decides what the bot says for each classified mood. A `ReplyStrategy` is a
//! table from `Intent` to `Reply`; the flow controller looks the intent up and
//! carries the reply out. Intents missing from the table, and
//! `Intent::Unrecognized`, get the "didn't get that" message.
//!
//! Two tables are built in:
//!
//! | Intent  | `generated()`                              | `static_acknowledgement()` |
//! |---------|--------------------------------------------|----------------------------|
//! | Happy   | completion seeded "Say glad to hear that"  | "Thank you"                |
//! | Sad     | joke lead-in + completion                  | same as generated          |
//! | Neutral | meditation lead-in + completion            | same as generated          |
//!
use crate::common::clu::Intent;
use crate::core::config::ReplyMode;
use std::collections::HashMap;

pub const HAPPY_SEED: &str = "Say glad to hear that";
pub const SAD_SEED: &str = "Tell me some joke";
pub const NEUTRAL_SEED: &str = "Give some a meditation exercise";
pub const SAD_LEAD_IN: &str = "I hope below jokes will make you feel good...";
pub const NEUTRAL_LEAD_IN: &str =
    "Please go through simple meditation to enhance your mood, please wait for a while..";
pub const THANK_YOU: &str = "Thank you";

static NOT_UNDERSTOOD: Reply = Reply::NotUnderstood;

/// What to do for one intent.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Send a fixed message.
    Canned(String),
    /// Optionally send `lead_in`, then send the completion generated from `seed`.
    Generated { lead_in: Option<String>, seed: String },
    /// Apologise and echo the classifier's raw label.
    NotUnderstood,
}

impl Reply {
    pub fn generated(seed: &str) -> Self {
        Reply::Generated {
            lead_in: None,
            seed: seed.to_string(),
        }
    }

    pub fn generated_after(lead_in: &str, seed: &str) -> Self {
        Reply::Generated {
            lead_in: Some(lead_in.to_string()),
            seed: seed.to_string(),
        }
    }
}

/// The "didn't get that" message for a label the dialog has no reply for.
pub fn not_understood_message(label: &str) -> String {
    format!(
        "Sorry, I didn't get that. Please try asking in a different way (intent was {})",
        label
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplyStrategy {
    replies: HashMap<Intent, Reply>,
}

impl ReplyStrategy {
    /// Every mood is answered with generated text.
    pub fn generated() -> Self {
        Self {
            replies: HashMap::new(),
        }
        .with_reply(Intent::Happy, Reply::generated(HAPPY_SEED))
        .with_reply(Intent::Sad, Reply::generated_after(SAD_LEAD_IN, SAD_SEED))
        .with_reply(
            Intent::Neutral,
            Reply::generated_after(NEUTRAL_LEAD_IN, NEUTRAL_SEED),
        )
    }

    /// A happy mood gets a plain "Thank you"; the others still use generated text.
    pub fn static_acknowledgement() -> Self {
        Self::generated().with_reply(Intent::Happy, Reply::Canned(THANK_YOU.to_string()))
    }

    pub fn for_mode(mode: ReplyMode) -> Self {
        match mode {
            ReplyMode::Generated => Self::generated(),
            ReplyMode::Static => Self::static_acknowledgement(),
        }
    }

    /// Replaces the reply for `intent`.
    pub fn with_reply(mut self, intent: Intent, reply: Reply) -> Self {
        self.replies.insert(intent, reply);
        self
    }

    pub fn reply_for(&self, intent: Intent) -> &Reply {
        if intent == Intent::Unrecognized {
            return &NOT_UNDERSTOOD;
        }
        self.replies.get(&intent).unwrap_or(&NOT_UNDERSTOOD)
    }
}

impl Default for ReplyStrategy {
    fn default() -> Self {
        Self::generated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_table() {
        let strategy = ReplyStrategy::generated();
        assert_eq!(strategy.reply_for(Intent::Happy), &Reply::generated(HAPPY_SEED));
        assert_eq!(
            strategy.reply_for(Intent::Sad),
            &Reply::generated_after(SAD_LEAD_IN, SAD_SEED)
        );
        assert_eq!(
            strategy.reply_for(Intent::Neutral),
            &Reply::generated_after(NEUTRAL_LEAD_IN, NEUTRAL_SEED)
        );
        assert_eq!(strategy.reply_for(Intent::Unrecognized), &Reply::NotUnderstood);
    }

    #[test]
    fn test_static_table_only_changes_happy() {
        let generated = ReplyStrategy::generated();
        let fixed = ReplyStrategy::for_mode(ReplyMode::Static);
        assert_eq!(
            fixed.reply_for(Intent::Happy),
            &Reply::Canned(THANK_YOU.to_string())
        );
        assert_eq!(fixed.reply_for(Intent::Sad), generated.reply_for(Intent::Sad));
        assert_eq!(
            fixed.reply_for(Intent::Neutral),
            generated.reply_for(Intent::Neutral)
        );
    }

    #[test]
    fn test_unrecognized_cannot_be_overridden() {
        let strategy = ReplyStrategy::generated()
            .with_reply(Intent::Unrecognized, Reply::Canned("hm".into()));
        assert_eq!(strategy.reply_for(Intent::Unrecognized), &Reply::NotUnderstood);
    }

    #[test]
    fn test_not_understood_message_includes_label() {
        assert_eq!(
            not_understood_message("None"),
            "Sorry, I didn't get that. Please try asking in a different way (intent was None)"
        );
    }
}
