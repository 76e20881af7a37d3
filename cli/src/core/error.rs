//! # Moodbot Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout moodbot. Every fallible
//! function returns `Result<T>` (an alias for `anyhow::Result<T>`), and the
//! specific failure kinds below are raised as `MoodbotError` values so callers
//! and tests can still tell them apart with `downcast_ref`.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `MoodbotError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover:
//! - Configuration errors
//! - Transport failures talking to the external services
//! - Response bodies that do not match the expected shape
//! - Calls made against an unconfigured classifier
//!
//! Classification and generation faults are never caught inside the dialog.
//! They abort the current turn and are reported by the console host.
//!
//! ## Examples
//!
//! ```rust
//! // Pattern matching on error types
//! match classifier.recognize(text).await {
//!     Ok(recognition) => println!("{}", recognition.label),
//!     Err(e) if matches!(e.downcast_ref::<MoodbotError>(), Some(MoodbotError::ClassifierUnconfigured)) => {
//!         println!("CLU credentials are missing");
//!     }
//!     Err(e) => return Err(e),
//! }
//! ```
//!
use thiserror::Error;

/// Number of body characters kept in a `Decode` error.
const MAX_BODY_EXCERPT: usize = 512;

/// Custom error type for the moodbot application.
#[derive(Error, Debug)]
pub enum MoodbotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },

    #[error("Could not decode response (HTTP {status}): {source}. Body: {body}")]
    Decode {
        status: u16,
        source: serde_json::Error,
        body: String,
    },

    #[error("Text generation returned no choices.")]
    EmptyCompletion,

    #[error("The mood classifier is not configured.")]
    ClassifierUnconfigured,

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

impl MoodbotError {
    /// Builds a `Decode` error, keeping only the start of a large body.
    pub fn decode(status: u16, source: serde_json::Error, body: &str) -> Self {
        let body = match body.char_indices().nth(MAX_BODY_EXCERPT) {
            Some((cut, _)) => format!("{}...", &body[..cut]),
            None => body.to_string(),
        };
        MoodbotError::Decode {
            status,
            source,
            body,
        }
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
