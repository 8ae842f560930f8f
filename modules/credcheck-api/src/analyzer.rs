use std::sync::Arc;

use tracing::warn;

use ai_client::{AiError, Gemini, TextAgent};
use credcheck_common::{AnalysisResult, Config, CredCheckError};
use credcheck_core::{analysis_prompt, classify, normalize};

/// Chains the model call, the response normalizer, and the keyword fallback.
///
/// Holds the agent behind `dyn TextAgent` so tests can stub the provider.
/// The agent is absent when no credential is configured; that surfaces as a
/// configuration error at request time rather than a startup failure.
pub struct Analyzer {
    agent: Option<Arc<dyn TextAgent>>,
}

impl Analyzer {
    pub fn from_config(config: &Config) -> Self {
        let agent = config
            .google_api_key
            .as_ref()
            .map(|key| {
                Arc::new(Gemini::new(key.as_str(), config.gemini_model.as_str()))
                    as Arc<dyn TextAgent>
            });
        Self { agent }
    }

    pub fn with_agent(agent: Arc<dyn TextAgent>) -> Self {
        Self { agent: Some(agent) }
    }

    pub fn is_configured(&self) -> bool {
        self.agent.is_some()
    }

    fn agent(&self) -> Result<&Arc<dyn TextAgent>, CredCheckError> {
        self.agent
            .as_ref()
            .ok_or_else(|| CredCheckError::Config("GOOGLE_API_KEY is required".to_string()))
    }

    async fn model_analysis(&self, content: &str) -> Result<AnalysisResult, CredCheckError> {
        let agent = self.agent()?;
        let raw = agent
            .generate(&analysis_prompt(content))
            .await
            .map_err(map_ai_error)?;
        normalize(&raw)
    }

    /// Full analysis for the analyze endpoint. Quota and configuration
    /// problems surface to the caller; any other failure — transport, API,
    /// unparseable output — recovers to the keyword fallback.
    pub async fn analyze(&self, content: &str) -> Result<AnalysisResult, CredCheckError> {
        match self.model_analysis(content).await {
            Ok(analysis) => Ok(analysis),
            Err(e @ (CredCheckError::QuotaExceeded | CredCheckError::Config(_))) => Err(e),
            Err(e) => {
                warn!(error = %e, "model analysis failed, using keyword fallback");
                Ok(classify(content))
            }
        }
    }

    /// Per-post analysis for the trends batch. Every failure is substituted
    /// with the fallback so one post never aborts the batch.
    pub async fn analyze_isolated(&self, content: &str) -> AnalysisResult {
        match self.model_analysis(content).await {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!(error = %e, "post analysis failed, substituting keyword fallback");
                classify(content)
            }
        }
    }
}

fn map_ai_error(e: AiError) -> CredCheckError {
    match e {
        AiError::Quota => CredCheckError::QuotaExceeded,
        AiError::Auth(message) => CredCheckError::Config(message),
        other => CredCheckError::Anyhow(anyhow::Error::new(other)),
    }
}
