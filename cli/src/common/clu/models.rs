//! # CLU Wire Types (`common::clu::models`)
//!
//! File: cli/src/common/clu/models.rs
//!
//! Request/response bodies of the CLU `:analyze-conversations` runtime API.
//! Only the fields moodbot reads are modelled; everything else is ignored.
//!
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeConversationRequest {
    pub kind: &'static str,
    pub analysis_input: AnalysisInput,
    pub parameters: AnalysisParameters,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    pub conversation_item: ConversationItem,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationItem {
    pub id: String,
    pub participant_id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisParameters {
    pub project_name: String,
    pub deployment_name: String,
    pub string_index_type: &'static str,
}

impl AnalyzeConversationRequest {
    /// Request for a single-utterance conversation.
    pub fn new(project_name: &str, deployment_name: &str, text: &str) -> Self {
        Self {
            kind: "Conversation",
            analysis_input: AnalysisInput {
                conversation_item: ConversationItem {
                    id: "1".to_string(),
                    participant_id: "1".to_string(),
                    text: text.to_string(),
                },
            },
            parameters: AnalysisParameters {
                project_name: project_name.to_string(),
                deployment_name: deployment_name.to_string(),
                string_index_type: "TextElement_V8",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalyzeConversationResponse {
    #[serde(default)]
    pub kind: String,
    pub result: AnalysisResult,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub query: String,
    pub prediction: Prediction,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub top_intent: String,
    #[serde(default)]
    pub project_kind: String,
    #[serde(default)]
    pub intents: Vec<IntentScore>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentScore {
    pub category: String,
    pub confidence_score: f64,
}

impl Prediction {
    /// Confidence of the top intent, 0.0 when the service did not list it.
    pub fn top_score(&self) -> f64 {
        self.intents
            .iter()
            .find(|intent| intent.category == self.top_intent)
            .map(|intent| intent.confidence_score)
            .unwrap_or(0.0)
    }
}
