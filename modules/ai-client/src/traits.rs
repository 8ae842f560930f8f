use async_trait::async_trait;

use crate::error::AiError;

/// A text-generation agent. Object-safe so callers can hold `dyn TextAgent`
/// and substitute a stub in tests.
#[async_trait]
pub trait TextAgent: Send + Sync {
    /// Send a single prompt and return the model's text response.
    async fn generate(&self, prompt: &str) -> Result<String, AiError>;
}
