//! # Moodbot Classify Integration Tests
//!
//! File: cli/tests/classify.rs
//!

mod common;
use common::*;
use httpmock::prelude::*;
use predicates::prelude::*;

#[test]
fn test_classify_prints_label_score_and_intent() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/language/:analyze-conversations")
            .query_param("api-version", "2022-10-01-preview")
            .header("ocp-apim-subscription-key", "clu-key")
            .json_body_partial(
                r#"{"kind":"Conversation","analysisInput":{"conversationItem":{"text":"so so"}},"parameters":{"projectName":"MoodAnalyser","deploymentName":"prod"}}"#,
            );
        then.status(200).json_body(clu_body("Neutral", 0.81));
    });
    let (_dir, path) = write_config(&full_config(&server.base_url()));

    moodbot_cmd()
        .arg("--config")
        .arg(&path)
        .args(["classify", "so", "so"])
        .assert()
        .success()
        .stdout("Neutral (0.81) -> Neutral\n");
    mock.assert();
}

#[test]
fn test_classify_unknown_label_is_unrecognized() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/language/:analyze-conversations");
        then.status(200).json_body(clu_body("BookFlight", 0.4));
    });
    let (_dir, path) = write_config(&full_config(&server.base_url()));

    moodbot_cmd()
        .arg("--config")
        .arg(&path)
        .args(["classify", "fly me to Paris"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BookFlight (0.40) -> Unrecognized"));
}

#[test]
fn test_classify_without_clu_settings_fails() {
    let (_dir, path) = write_config(&openai_only_config("http://127.0.0.1:9"));

    moodbot_cmd()
        .arg("--config")
        .arg(&path)
        .args(["classify", "I feel great"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("CLU is not configured"));
}
