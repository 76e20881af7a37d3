//! # Mood Classification (`common::clu`)
//!
//! File: cli/src/common/clu/mod.rs
//!
//! ## Overview
//!
//! The dialog treats mood classification as an external collaborator with a
//! narrow contract, `MoodClassifier`:
//!
//! - `is_configured()` tells whether the credentials needed to call out are present.
//! - `recognize(utterance)` returns the top-ranked `Intent` with its raw label and score.
//!
//! `CluRecognizer` (in `recognizer`) is the implementation backed by the CLU
//! runtime API; `models` holds its wire types.
//!
use crate::core::error::Result;
use async_trait::async_trait;
use std::fmt;

pub mod models;
pub mod recognizer;

pub use recognizer::CluRecognizer;

/// Mood categories the dialog knows how to answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Happy,
    Sad,
    Neutral,
    /// Anything the classifier returned that is not one of the above.
    Unrecognized,
}

impl Intent {
    /// Maps a classifier label onto an `Intent`, ignoring case and surrounding whitespace.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "happy" => Intent::Happy,
            "sad" => Intent::Sad,
            "neutral" => Intent::Neutral,
            _ => Intent::Unrecognized,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Intent::Happy => "Happy",
            Intent::Sad => "Sad",
            Intent::Neutral => "Neutral",
            Intent::Unrecognized => "Unrecognized",
        };
        f.write_str(name)
    }
}

/// Result of one classification call.
#[derive(Debug, Clone, PartialEq)]
pub struct Recognition {
    pub intent: Intent,
    /// The label exactly as the classifier returned it.
    pub label: String,
    pub score: f64,
}

#[async_trait]
pub trait MoodClassifier: Send + Sync {
    fn is_configured(&self) -> bool;

    async fn recognize(&self, utterance: &str) -> Result<Recognition>;
}
