//! # Moodbot Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the settings moodbot needs to talk to
//! its two external collaborators: the text generation endpoint and the CLU
//! (Conversational Language Understanding) mood classifier.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags / environment variables (`ConfigOverrides`)
//! 2. An explicit file passed with `--config` (skips 3 and 4 entirely)
//! 3. Project-specific `.moodbot.toml` in current directory or ancestors
//! 4. User-specific `<config dir>/moodbot/config.toml`
//! 5. Default values defined in the code
//!
//! Missing CLU credentials are not an error: the classifier simply reports
//! itself unconfigured and the dialog runs in degraded mode. Missing text
//! generation credentials are not checked here either; the first call fails.
//!
//! ## Examples
//!
//! ```toml
//! [openai]
//! host_name = "https://api.openai.com/v1"
//! api_key = "sk-..."
//!
//! [clu]
//! project_name = "MoodAnalyser"
//! deployment_name = "production"
//! api_key = "..."
//! api_host_name = "https://my-language.cognitiveservices.azure.com"
//!
//! [dialog]
//! reply_mode = "generated"
//! ```
//!
use crate::core::error::{MoodbotError, Result};
use anyhow::{anyhow, Context};
use clap::Args;
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{debug, info};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub openai: OpenAiConfig,
    #[serde(default)]
    pub clu: CluConfig,
    #[serde(default)]
    pub dialog: DialogConfig,
}

/// Settings for the chat completion / image generation endpoint.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OpenAiConfig {
    /// Base URL; `chat/completions` and `images/generations` are appended to it.
    #[serde(default = "default_openai_host")]
    pub host_name: String,
    /// Bearer token. Not validated; an empty key fails on first use.
    #[serde(default)]
    pub api_key: String,
    /// Model identifier sent with every completion request.
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Credentials for the CLU mood classifier.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CluConfig {
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub deployment_name: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api_host_name: String,
    #[serde(default = "default_clu_api_version")]
    pub api_version: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Dialog behaviour.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DialogConfig {
    #[serde(default)]
    pub reply_mode: ReplyMode,
}

/// Which reply strategy the dialog uses for a happy mood.
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReplyMode {
    /// Ask the text generation endpoint for an affirming reply.
    #[default]
    Generated,
    /// Answer with a fixed "Thank you".
    Static,
}

/// Connection settings injected into the text generation client.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub host: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            host_name: default_openai_host(),
            api_key: String::new(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for CluConfig {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            deployment_name: String::new(),
            api_key: String::new(),
            api_host_name: String::new(),
            api_version: default_clu_api_version(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl OpenAiConfig {
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            host: self.host_name.clone(),
            api_key: self.api_key.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

impl CluConfig {
    /// True iff all four credential keys carry a value.
    pub fn is_configured(&self) -> bool {
        [
            &self.project_name,
            &self.deployment_name,
            &self.api_key,
            &self.api_host_name,
        ]
        .iter()
        .all(|value| !value.trim().is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_openai_host() -> String {
    "https://api.openai.com/v1".to_string()
}
fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}
fn default_clu_api_version() -> String {
    "2022-10-01-preview".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}

/// # Configuration Overrides (`ConfigOverrides`)
///
/// Global command-line flags that take precedence over every configuration
/// file. Each one can also be supplied through an environment variable so
/// credentials stay out of shell history.
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigOverrides {
    /// Read configuration from this file instead of the user/project files.
    #[arg(long = "config", env = "MOODBOT_CONFIG", global = true)]
    pub config_path: Option<String>,

    /// Base URL of the text generation API.
    #[arg(long, env = "MOODBOT_OPENAI_HOST", global = true)]
    pub openai_host: Option<String>,

    /// API key for the text generation API.
    #[arg(long, env = "MOODBOT_OPENAI_KEY", hide_env_values = true, global = true)]
    pub openai_key: Option<String>,

    /// CLU project name.
    #[arg(long, env = "MOODBOT_CLU_PROJECT", global = true)]
    pub clu_project: Option<String>,

    /// CLU deployment name.
    #[arg(long, env = "MOODBOT_CLU_DEPLOYMENT", global = true)]
    pub clu_deployment: Option<String>,

    /// CLU API key.
    #[arg(long, env = "MOODBOT_CLU_KEY", hide_env_values = true, global = true)]
    pub clu_key: Option<String>,

    /// CLU endpoint host.
    #[arg(long, env = "MOODBOT_CLU_HOST", global = true)]
    pub clu_host: Option<String>,
}

const PROJECT_CONFIG_FILENAME: &str = ".moodbot.toml";

/// # Load Configuration (`load_config`)
///
/// Builds the effective `Config` from files and overrides, then validates it.
///
/// ## Errors
///
/// Returns an error if a configuration file exists but cannot be read or
/// parsed, or if the merged configuration fails validation.
pub fn load_config(overrides: &ConfigOverrides) -> Result<Config> {
    let mut config = match &overrides.config_path {
        Some(path) => {
            let expanded = PathBuf::from(shellexpand::tilde(path).into_owned());
            info!("Loading configuration from: {}", expanded.display());
            load_config_from_path(&expanded)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    apply_overrides(&mut config, overrides);
    validate_config(&config).context("Configuration validation failed")?;
    debug!(
        "Loaded configuration (openai host: {}, model: {}, clu configured: {}, reply mode: {:?})",
        config.openai.host_name,
        config.openai.model,
        config.clu.is_configured(),
        config.dialog.reply_mode
    );
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    let Some(proj_dirs) = ProjectDirs::from("com", "Moodbot", "moodbot") else {
        debug!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join("config.toml");
    if config_path.exists() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    match find_project_config_path(&current_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            load_config_from_path(&path).map(Some)
        }
        None => {
            debug!("No project configuration file (.moodbot.toml) found.");
            Ok(None)
        }
    }
}

/// Walks up from `start` looking for `.moodbot.toml`, stopping at a git root.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let candidate = path.join(PROJECT_CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win whenever they differ from the built-in default.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project) = project else {
        return user;
    };
    let defaults = Config::default();

    fn pick<T: PartialEq>(project: T, user: T, default: &T) -> T {
        if project != *default {
            project
        } else {
            user
        }
    }

    Config {
        openai: OpenAiConfig {
            host_name: pick(
                project.openai.host_name,
                user.openai.host_name,
                &defaults.openai.host_name,
            ),
            api_key: pick(
                project.openai.api_key,
                user.openai.api_key,
                &defaults.openai.api_key,
            ),
            model: pick(project.openai.model, user.openai.model, &defaults.openai.model),
            timeout_secs: pick(
                project.openai.timeout_secs,
                user.openai.timeout_secs,
                &defaults.openai.timeout_secs,
            ),
        },
        clu: CluConfig {
            project_name: pick(
                project.clu.project_name,
                user.clu.project_name,
                &defaults.clu.project_name,
            ),
            deployment_name: pick(
                project.clu.deployment_name,
                user.clu.deployment_name,
                &defaults.clu.deployment_name,
            ),
            api_key: pick(project.clu.api_key, user.clu.api_key, &defaults.clu.api_key),
            api_host_name: pick(
                project.clu.api_host_name,
                user.clu.api_host_name,
                &defaults.clu.api_host_name,
            ),
            api_version: pick(
                project.clu.api_version,
                user.clu.api_version,
                &defaults.clu.api_version,
            ),
            timeout_secs: pick(
                project.clu.timeout_secs,
                user.clu.timeout_secs,
                &defaults.clu.timeout_secs,
            ),
        },
        dialog: DialogConfig {
            reply_mode: pick(
                project.dialog.reply_mode,
                user.dialog.reply_mode,
                &defaults.dialog.reply_mode,
            ),
        },
    }
}

fn apply_overrides(config: &mut Config, overrides: &ConfigOverrides) {
    let targets = [
        (&overrides.openai_host, &mut config.openai.host_name),
        (&overrides.openai_key, &mut config.openai.api_key),
        (&overrides.clu_project, &mut config.clu.project_name),
        (&overrides.clu_deployment, &mut config.clu.deployment_name),
        (&overrides.clu_key, &mut config.clu.api_key),
        (&overrides.clu_host, &mut config.clu.api_host_name),
    ];
    for (value, target) in targets {
        if let Some(value) = value {
            *target = value.clone();
        }
    }
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    if !is_http_url(&config.openai.host_name) {
        return Err(anyhow!(MoodbotError::Config(format!(
            "openai.host_name '{}' must start with http:// or https://",
            config.openai.host_name
        ))));
    }
    if !config.clu.api_host_name.trim().is_empty() && !is_http_url(&config.clu.api_host_name) {
        return Err(anyhow!(MoodbotError::Config(format!(
            "clu.api_host_name '{}' must start with http:// or https://",
            config.clu.api_host_name
        ))));
    }
    if config.openai.model.trim().is_empty() {
        return Err(anyhow!(MoodbotError::Config(
            "openai.model cannot be empty".to_string()
        )));
    }
    for (name, secs) in [
        ("openai.timeout_secs", config.openai.timeout_secs),
        ("clu.timeout_secs", config.clu.timeout_secs),
    ] {
        if secs == 0 {
            return Err(anyhow!(MoodbotError::Config(format!(
                "{name} must be greater than zero"
            ))));
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
