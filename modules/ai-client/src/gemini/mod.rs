mod client;
pub(crate) mod types;

use async_trait::async_trait;

use crate::error::AiError;
use crate::traits::TextAgent;
use crate::util::strip_code_blocks;

use client::GeminiClient;
use types::GenerateContentRequest;

// =============================================================================
// Gemini Agent
// =============================================================================

#[derive(Clone)]
pub struct Gemini {
    api_key: String,
    model: String,
    base_url: Option<String>,
}

impl Gemini {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: None,
        }
    }

    pub fn from_env(model: impl Into<String>) -> Result<Self, AiError> {
        let api_key = std::env::var("GOOGLE_API_KEY")
            .map_err(|_| AiError::Auth("GOOGLE_API_KEY environment variable not set".to_string()))?;
        Ok(Self::new(api_key, model))
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn client(&self) -> GeminiClient {
        let client = GeminiClient::new(&self.api_key);
        if let Some(ref url) = self.base_url {
            client.with_base_url(url)
        } else {
            client
        }
    }
}

#[async_trait]
impl TextAgent for Gemini {
    async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        let request = GenerateContentRequest::from_prompt(prompt);
        let response = self.client().generate_content(&self.model, &request).await?;
        let text = response.text().ok_or(AiError::EmptyResponse)?;
        Ok(strip_code_blocks(&text).to_string())
    }
}
