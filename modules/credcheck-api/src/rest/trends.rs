use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use credcheck_common::{AnalyzedPost, Trend};
use credcheck_core::{aggregate, sample_posts};

use crate::AppState;

use super::error_response;

pub const TIME_RANGE: &str = "Last 48 hours";

#[derive(Serialize)]
struct TrendsResponse {
    trends: Vec<Trend>,
    total_posts_analyzed: usize,
    generated_at: DateTime<Utc>,
    time_range: &'static str,
}

pub async fn api_misinformation_trends(State(state): State<Arc<AppState>>) -> Response {
    if !state.analyzer.is_configured() {
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Configuration error",
            "Analysis service is temporarily unavailable. Please try again later.",
        );
    }

    let posts = sample_posts();
    let mut analyzed = Vec::with_capacity(posts.len());

    // One model call at a time; a failed post falls back inside the analyzer
    // and never aborts the rest of the batch.
    for post in posts {
        let analysis = state.analyzer.analyze_isolated(&post.text).await;
        analyzed.push(AnalyzedPost { post, analysis });
    }

    let total_posts_analyzed = analyzed.len();
    let trends = aggregate(&analyzed);

    info!(
        topics = trends.len(),
        posts = total_posts_analyzed,
        "generated misinformation trends"
    );

    Json(TrendsResponse {
        trends,
        total_posts_analyzed,
        generated_at: Utc::now(),
        time_range: TIME_RANGE,
    })
    .into_response()
}
