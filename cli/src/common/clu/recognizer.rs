//! # CLU Mood Recognizer (`common::clu::recognizer`)
//!
//! File: cli/src/common/clu/recognizer.rs
//!
//! `CluRecognizer` implements `MoodClassifier` against the CLU runtime:
//!
//! ```text
//! POST {api_host_name}/language/:analyze-conversations?api-version={api_version}
//! Ocp-Apim-Subscription-Key: {api_key}
//! ```
//!
//! When any of the four credential keys is missing the recognizer reports
//! itself unconfigured and `recognize` fails without touching the network.
//!
use super::models::AnalyzeConversationRequest;
use super::models::AnalyzeConversationResponse;
use super::{Intent, MoodClassifier, Recognition};
use crate::common::http;
use crate::core::config::CluConfig;
use crate::core::error::{MoodbotError, Result};
use async_trait::async_trait;
use tracing::debug;

const ANALYZE_PATH: &str = "language/:analyze-conversations";
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

pub struct CluRecognizer {
    client: reqwest::Client,
    config: CluConfig,
}

impl CluRecognizer {
    pub fn new(config: CluConfig) -> Result<Self> {
        let client = http::build_client(config.timeout())?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}?api-version={}",
            http::join_url(&self.config.api_host_name, ANALYZE_PATH),
            self.config.api_version
        )
    }
}

#[async_trait]
impl MoodClassifier for CluRecognizer {
    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    async fn recognize(&self, utterance: &str) -> Result<Recognition> {
        if !self.is_configured() {
            return Err(MoodbotError::ClassifierUnconfigured.into());
        }

        let url = self.endpoint();
        debug!("POST {} ({} char utterance)", url, utterance.chars().count());
        let body = AnalyzeConversationRequest::new(
            &self.config.project_name,
            &self.config.deployment_name,
            utterance,
        );
        let response = self
            .client
            .post(&url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(MoodbotError::from)?;
        let analysis: AnalyzeConversationResponse = http::read_json(response).await?;

        let prediction = analysis.result.prediction;
        let recognition = Recognition {
            intent: Intent::from_label(&prediction.top_intent),
            score: prediction.top_score(),
            label: prediction.top_intent,
        };
        debug!(
            "CLU top intent '{}' ({:.2}) -> {:?}",
            recognition.label, recognition.score, recognition.intent
        );
        Ok(recognition)
    }
}
