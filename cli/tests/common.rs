//! # Moodbot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` and runs the compiled `moodbot` binary through
//! `assert_cmd`, with remote services played by an `httpmock` server.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Environment variables that would otherwise leak a developer's own setup
/// into the tests.
const MOODBOT_ENV_VARS: [&str; 8] = [
    "MOODBOT_CONFIG",
    "MOODBOT_OPENAI_HOST",
    "MOODBOT_OPENAI_KEY",
    "MOODBOT_CLU_PROJECT",
    "MOODBOT_CLU_DEPLOYMENT",
    "MOODBOT_CLU_KEY",
    "MOODBOT_CLU_HOST",
    "RUST_LOG",
];

/// # Get Moodbot Command (`moodbot_cmd`)
///
/// Returns an `assert_cmd::Command` for the compiled `moodbot` binary with
/// every `MOODBOT_*` variable removed from its environment.
///
/// ## Panics
/// Panics if the `moodbot` binary cannot be found via `Command::cargo_bin`.
pub fn moodbot_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodbot").expect("Failed to find moodbot binary for testing");
    for var in MOODBOT_ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// Writes `contents` to `moodbot.toml` in a fresh temporary directory.
///
/// The returned `TempDir` must be kept alive for as long as the file is used.
pub fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("moodbot.toml");
    std::fs::write(&path, contents).expect("Failed to write config file");
    (dir, path)
}

/// Configuration pointing both services at `base_url` with the CLU keys set.
pub fn full_config(base_url: &str) -> String {
    format!(
        r#"
[openai]
host_name = "{base_url}"
api_key = "test-key"
model = "gpt-test"

[clu]
project_name = "MoodAnalyser"
deployment_name = "prod"
api_key = "clu-key"
api_host_name = "{base_url}"
"#
    )
}

/// Configuration with only the text generation settings; CLU stays unconfigured.
pub fn openai_only_config(base_url: &str) -> String {
    format!(
        r#"
[openai]
host_name = "{base_url}"
api_key = "test-key"
"#
    )
}

/// A chat completion body whose single choice carries `content`.
pub fn completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gpt-test",
        "usage": { "prompt_tokens": 5, "completion_tokens": 7, "total_tokens": 12 },
        "choices": [{
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop",
            "index": 0
        }]
    })
}

/// A CLU analyze-conversations body with `label` as the top intent.
pub fn clu_body(label: &str, score: f64) -> serde_json::Value {
    serde_json::json!({
        "kind": "ConversationResult",
        "result": {
            "query": "ignored",
            "prediction": {
                "topIntent": label,
                "projectKind": "Conversation",
                "intents": [{ "category": label, "confidenceScore": score }]
            }
        }
    })
}
