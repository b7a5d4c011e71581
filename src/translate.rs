//! Best-effort translation of the recommendation summary.
//!
//! Translation is an enhancement, never a hard dependency: any backend
//! failure degrades to the untranslated text. The backend sits behind the
//! [`Translator`] trait so the fallback policy is testable with fakes.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Language of the composite summary before localization; requests for it
/// skip the backend entirely.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Errors from the external translation backend.
#[derive(Error, Debug)]
pub enum TranslateError {
    /// Request could not be sent or timed out
    #[error("request failed: {0}")]
    Request(String),

    /// Backend answered with a non-success status
    #[error("backend returned status {0}")]
    Status(u16),

    /// Backend answered with an unreadable body
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// External translation capability.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into `target_lang`.
    async fn translate(&self, text: &str, target_lang: &str)
        -> Result<String, TranslateError>;
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Client for a LibreTranslate-compatible HTTP backend.
#[derive(Debug, Clone)]
pub struct HttpTranslator {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTranslator {
    /// Build a client with an explicit per-request timeout so a hung
    /// backend cannot stall a request indefinitely.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranslateError::Request(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
    ) -> Result<String, TranslateError> {
        let url = format!("{}/translate", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&TranslateRequest {
                q: text,
                source: "auto",
                target: target_lang,
            })
            .send()
            .await
            .map_err(|e| TranslateError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TranslateError::Status(response.status().as_u16()));
        }

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|e| TranslateError::Malformed(e.to_string()))?;

        Ok(body.translated_text)
    }
}

/// Localize `text` into `target_lang`, falling back to the original text
/// on any backend failure. A single attempt is made; no retries.
pub async fn localize(translator: &dyn Translator, text: &str, target_lang: &str) -> String {
    if target_lang == DEFAULT_LANGUAGE {
        return text.to_string();
    }

    match translator.translate(text, target_lang).await {
        Ok(translated) => translated,
        Err(err) => {
            warn!("translation to '{target_lang}' failed, keeping original text: {err}");
            text.to_string()
        }
    }
}
