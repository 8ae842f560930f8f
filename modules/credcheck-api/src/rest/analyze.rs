use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use credcheck_common::{AnalysisResult, CredCheckError};

use crate::AppState;

use super::error_response;

pub const MAX_TEXT_LENGTH: usize = 10_000;

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Serialize)]
struct AnalyzeResponse {
    #[serde(flatten)]
    analysis: AnalysisResult,
    analyzed_content: String,
    timestamp: DateTime<Utc>,
}

/// Validate an analyze request and select the content to analyze.
/// Empty strings count as absent. Returns the content, or an
/// (error, message) pair for a 400 response.
pub fn validate_request(req: &AnalyzeRequest) -> Result<String, (&'static str, &'static str)> {
    let text = req.text.as_deref().filter(|t| !t.is_empty());
    let url = req.url.as_deref().filter(|u| !u.is_empty());

    if text.is_none() && url.is_none() {
        return Err((
            "Either text or URL is required",
            "Please provide either text content or a URL to analyze",
        ));
    }

    if let Some(t) = text {
        if t.chars().count() > MAX_TEXT_LENGTH {
            return Err((
                "Text too long",
                "Text content must be 10,000 characters or less",
            ));
        }
    }

    if let Some(u) = url {
        if url::Url::parse(u).is_err() {
            return Err((
                "Invalid URL",
                "Please provide a valid URL (e.g., https://example.com)",
            ));
        }
    }

    // Text wins when both are present; URL content is not fetched, the
    // reference itself is analyzed.
    match text {
        Some(t) => Ok(t.to_string()),
        None => Ok(format!("Content from URL: {}", url.unwrap_or_default())),
    }
}

pub async fn api_analyze_text(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AnalyzeRequest>,
) -> Response {
    let content = match validate_request(&body) {
        Ok(content) => content,
        Err((error, message)) => return error_response(StatusCode::BAD_REQUEST, error, message),
    };

    match state.analyzer.analyze(&content).await {
        Ok(analysis) => Json(AnalyzeResponse {
            analysis,
            analyzed_content: content,
            timestamp: Utc::now(),
        })
        .into_response(),
        Err(CredCheckError::QuotaExceeded) => error_response(
            StatusCode::TOO_MANY_REQUESTS,
            "API quota exceeded",
            "Analysis service is temporarily unavailable due to high demand. Please try again later.",
        ),
        Err(CredCheckError::Config(e)) => {
            warn!(error = %e, "analysis rejected: service not configured");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Configuration error",
                "Analysis service is temporarily unavailable. Please try again later.",
            )
        }
        Err(e) => {
            warn!(error = %e, "analysis failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to analyze content",
                "An unexpected error occurred. Please try again later.",
            )
        }
    }
}

pub async fn api_analyze_text_usage() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Use POST method to analyze text",
        "example": {
            "text": "Your text content here",
            "url": "Optional URL to analyze"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: Option<&str>, url: Option<&str>) -> AnalyzeRequest {
        AnalyzeRequest {
            text: text.map(str::to_string),
            url: url.map(str::to_string),
        }
    }

    #[test]
    fn empty_body_is_rejected() {
        let err = validate_request(&AnalyzeRequest::default()).unwrap_err();
        assert_eq!(err.0, "Either text or URL is required");
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let err = validate_request(&request(Some(""), Some(""))).unwrap_err();
        assert_eq!(err.0, "Either text or URL is required");
    }

    #[test]
    fn overlong_text_is_rejected() {
        let long = "a".repeat(MAX_TEXT_LENGTH + 1);
        let err = validate_request(&request(Some(&long), None)).unwrap_err();
        assert_eq!(err.0, "Text too long");
    }

    #[test]
    fn text_at_the_limit_is_accepted() {
        let text = "a".repeat(MAX_TEXT_LENGTH);
        assert!(validate_request(&request(Some(&text), None)).is_ok());
    }

    #[test]
    fn invalid_url_is_rejected() {
        let err = validate_request(&request(None, Some("not a url"))).unwrap_err();
        assert_eq!(err.0, "Invalid URL");
    }

    #[test]
    fn text_is_analyzed_verbatim() {
        let content = validate_request(&request(Some("check this claim"), None)).unwrap();
        assert_eq!(content, "check this claim");
    }

    #[test]
    fn url_only_becomes_a_reference_string() {
        let content = validate_request(&request(None, Some("https://example.com/post"))).unwrap();
        assert_eq!(content, "Content from URL: https://example.com/post");
    }

    #[test]
    fn text_wins_when_both_are_present() {
        let content =
            validate_request(&request(Some("the text"), Some("https://example.com"))).unwrap();
        assert_eq!(content, "the text");
    }
}
