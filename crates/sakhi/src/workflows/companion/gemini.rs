//! Google Gemini `generateContent` client.
//!
//! Requests carry the companion persona as a system instruction, a short slice
//! of the conversation and conservative safety settings. The API key travels in
//! the `x-goog-api-key` header so it never appears in a logged URL.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::domain::{ChatMessage, Sender};
use super::provider::{CompanionError, CompanionProvider};
use crate::config::CompanionConfig;

/// Prior messages forwarded to the model.
pub const CONTEXT_MESSAGES: usize = 6;

const SYSTEM_INSTRUCTION: &str = "You are Sakhi, a compassionate AI companion specializing in PCOS (Polycystic Ovary Syndrome) support for Indian women. Your role is to:

1. Provide evidence-based information about PCOS management
2. Offer emotional support and encouragement
3. Suggest lifestyle modifications including diet (considering Indian cuisine), exercise, and stress management
4. Help track symptoms and identify patterns
5. Encourage professional medical consultation when appropriate

Guidelines:
- Be warm, empathetic, and culturally sensitive to Indian context
- Use simple, clear language
- Include relevant emojis occasionally (🌸, 💪, 🥗, etc.)
- Never provide diagnosis or replace professional medical advice
- Suggest Indian-friendly foods when discussing diet
- Keep responses concise (2-4 sentences usually)
- Be encouraging and positive while being realistic";

const SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];
const SAFETY_THRESHOLD: &str = "BLOCK_MEDIUM_AND_ABOVE";

pub struct GeminiProvider {
    api_key: Secret<String>,
    model: String,
    base_url: String,
    timeout: Duration,
    client: Client,
}

impl GeminiProvider {
    /// Fails with [`CompanionError::NotConfigured`] when no API key is set.
    pub fn new(config: &CompanionConfig) -> Result<Self, CompanionError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(CompanionError::NotConfigured)?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| CompanionError::Network(err.to_string()))?;

        Ok(Self {
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
            client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl CompanionProvider for GeminiProvider {
    async fn reply(
        &self,
        message: &str,
        history: &[ChatMessage],
    ) -> Result<String, CompanionError> {
        let request = build_request(message, history);
        debug!(
            model = %self.model,
            context = request.contents.len() - 1,
            "sending companion request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    CompanionError::Timeout {
                        timeout_secs: self.timeout.as_secs(),
                    }
                } else {
                    CompanionError::Network(err.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| CompanionError::Network(err.to_string()))?;

        if !status.is_success() {
            return Err(CompanionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_reply(&body)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
    #[serde(rename = "safetySettings")]
    safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part<'a>>,
}

impl<'a> Content<'a> {
    fn text(role: Option<&'static str>, text: &'a str) -> Self {
        Self {
            role,
            parts: vec![Part { text }],
        }
    }
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

/// Drops the greeting, keeps the last few turns and appends `message`.
pub(crate) fn build_request<'a>(
    message: &'a str,
    history: &'a [ChatMessage],
) -> GenerateRequest<'a> {
    let relevant: Vec<&ChatMessage> = history.iter().filter(|msg| !msg.is_welcome()).collect();
    let skip = relevant.len().saturating_sub(CONTEXT_MESSAGES);

    let mut contents: Vec<Content<'a>> = relevant
        .into_iter()
        .skip(skip)
        .map(|msg| {
            let role = match msg.sender {
                Sender::User => "user",
                Sender::Ai => "model",
            };
            Content::text(Some(role), &msg.text)
        })
        .collect();
    contents.push(Content::text(Some("user"), message));

    GenerateRequest {
        system_instruction: Content::text(None, SYSTEM_INSTRUCTION),
        contents,
        generation_config: GenerationConfig {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 500,
        },
        safety_settings: SAFETY_CATEGORIES
            .iter()
            .map(|category| SafetySetting {
                category: *category,
                threshold: SAFETY_THRESHOLD,
            })
            .collect(),
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Text of the first candidate's first part.
pub(crate) fn parse_reply(body: &str) -> Result<String, CompanionError> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|err| CompanionError::Decode(err.to_string()))?;

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(CompanionError::EmptyResponse);
    };

    let text = candidate
        .content
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .filter(|text| !text.is_empty());

    match text {
        Some(text) => Ok(text),
        None if candidate.finish_reason.as_deref() == Some("SAFETY") => {
            Err(CompanionError::Filtered)
        }
        None => Err(CompanionError::EmptyResponse),
    }
}
