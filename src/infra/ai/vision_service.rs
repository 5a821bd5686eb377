use crate::domain::ports::{ImagePart, VisionService};
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{error, info, instrument, warn};

/// Tried in order until one answers; newer models first. There is no
/// per-model retry: a transient failure simply moves on to the next
/// candidate, and exhausting the list fails the request.
const MODEL_CANDIDATES: &[&str] = &["gemini-2.5-flash", "gemini-2.0-flash", "gemini-1.5-flash"];

pub struct GeminiVisionService {
    client: Client,
}

impl Default for GeminiVisionService {
    fn default() -> Self {
        Self::new()
    }
}

impl GeminiVisionService {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    async fn call_model(
        &self,
        model: &str,
        api_key: &str,
        payload: &Value,
    ) -> Result<String, AppError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("AI network error: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!("AI provider error: {} - {}", status, text)));
        }

        let body: Value = response.json().await.map_err(|e| {
            error!("Failed to parse model response JSON: {:?}", e);
            AppError::Upstream("AI response was not valid JSON".to_string())
        })?;
        extract_text(&body)
    }
}

fn extract_text(body: &Value) -> Result<String, AppError> {
    if let Some(candidates) = body.get("candidates").and_then(|c| c.as_array())
        && let Some(first) = candidates.first()
        && let Some(content) = first.get("content")
        && let Some(parts) = content.get("parts").and_then(|p| p.as_array())
        && let Some(text_part) = parts.first()
        && let Some(text) = text_part.get("text").and_then(|t| t.as_str())
    {
        return Ok(text.to_string());
    }
    error!("Unexpected response structure from model: {:?}", body);
    Err(AppError::Upstream("AI response missing content".to_string()))
}

/// Pulls the first balanced JSON object out of free-form model output. The
/// models wrap answers in prose or code fences more often than not.
pub fn first_json_object(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (offset, ch) in text[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    let candidate = &text[start..start + offset + ch.len_utf8()];
                    return serde_json::from_str(candidate).ok();
                }
            }
            _ => {}
        }
    }
    None
}

#[async_trait]
impl VisionService for GeminiVisionService {
    #[instrument(skip(self, api_key, prompt, image), fields(prompt_len = prompt.len()))]
    async fn extract_json(
        &self,
        api_key: &str,
        prompt: &str,
        image: Option<&ImagePart>,
    ) -> Result<Value, AppError> {
        let mut parts = vec![json!({ "text": prompt })];
        if let Some(img) = image {
            parts.push(json!({
                "inline_data": {
                    "mime_type": img.mime_type,
                    "data": img.data_base64
                }
            }));
        }

        let payload = json!({
            "contents": [{ "parts": parts }],
            "generationConfig": {
                "temperature": 0.1,
                "maxOutputTokens": 2048
            }
        });

        let mut last_error = AppError::Upstream("No AI model candidates configured".to_string());
        for model in MODEL_CANDIDATES {
            match self.call_model(model, api_key, &payload).await {
                Ok(text) => {
                    info!("Model {} answered, extracting JSON", model);
                    match first_json_object(&text) {
                        Some(value) => return Ok(value),
                        None => {
                            warn!("Model {} returned no JSON object, trying next", model);
                            last_error = AppError::Upstream("AI response contained no JSON object".to_string());
                        }
                    }
                }
                Err(e) => {
                    warn!("Model {} failed: {}, trying next", model, e);
                    last_error = e;
                }
            }
        }
        Err(last_error)
    }
}
