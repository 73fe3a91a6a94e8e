//! Client for the Gemini generateContent API.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("model returned no text")]
    EmptyResponse,
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    url: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .user_agent("ChessCoach/1.0")
            .timeout(Duration::from_secs(120))
            .build()
            .unwrap();

        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent?key={key}",
            model = config.gemini_model,
            key = config.gemini_api_key,
        );

        Self { client, url }
    }

    /// Send one prompt to the model and return its text response.
    /// Single attempt, no retries — a failed call is reported to the user,
    /// who may resubmit.
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let request = GenerateRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let resp = self.client.post(&self.url).json(&request).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(GeminiError::Status { status, body });
        }

        let parsed: GenerateResponse = resp.json().await?;
        extract_text(parsed).ok_or(GeminiError::EmptyResponse)
    }
}

/// Concatenate the text parts of the first candidate, if any.
fn extract_text(response: GenerateResponse) -> Option<String> {
    let candidate = response.candidates.into_iter().next()?;
    let text: String = candidate
        .content
        .parts
        .into_iter()
        .map(|p| p.text)
        .collect();
    if text.is_empty() { None } else { Some(text) }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct CandidateContent {
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_joins_parts() {
        let resp: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Good "},{"text":"opening."}],"role":"model"}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(resp), Some("Good opening.".to_string()));
    }

    #[test]
    fn test_extract_text_empty_candidates() {
        let resp: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert_eq!(extract_text(resp), None);

        let resp: GenerateResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(extract_text(resp), None);
    }
}
