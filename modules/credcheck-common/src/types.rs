use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Risk classification ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Derive a tier from a continuous score in [0, 1]. Used for severity
    /// badges on aggregated trends, where only the mean score is available.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.7 {
            RiskTier::High
        } else if score >= 0.4 {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskTier::Low => write!(f, "Low"),
            RiskTier::Medium => write!(f, "Medium"),
            RiskTier::High => write!(f, "High"),
        }
    }
}

/// A single content analysis. Wire keys match what the model is prompted to
/// emit and what the frontend consumes: `risk_score` carries the tier label,
/// `score` the continuous value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "risk_score")]
    pub risk_tier: RiskTier,
    pub score: f64,
    #[serde(rename = "reason")]
    pub reasons: Vec<String>,
    pub educational_tip: String,
    pub sources: Vec<String>,
}

// --- Posts ---

/// A sample post from the fixed fixture set. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: u32,
    pub text: String,
    pub source: String,
    pub timestamp: DateTime<Utc>,
}

/// A post paired with its classification, ready for aggregation.
#[derive(Debug, Clone)]
pub struct AnalyzedPost {
    pub post: Post,
    pub analysis: AnalysisResult,
}

// --- Topics ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopicLabel {
    #[serde(rename = "Health Misinformation")]
    HealthMisinformation,
    #[serde(rename = "Election Misinformation")]
    ElectionMisinformation,
    #[serde(rename = "5G Conspiracy")]
    FiveGConspiracy,
    #[serde(rename = "Climate Denial")]
    ClimateDenial,
    #[serde(rename = "Space Conspiracy")]
    SpaceConspiracy,
    #[serde(rename = "Vaccine Conspiracy")]
    VaccineConspiracy,
    #[serde(rename = "General Misinformation")]
    GeneralMisinformation,
}

impl std::fmt::Display for TopicLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopicLabel::HealthMisinformation => write!(f, "Health Misinformation"),
            TopicLabel::ElectionMisinformation => write!(f, "Election Misinformation"),
            TopicLabel::FiveGConspiracy => write!(f, "5G Conspiracy"),
            TopicLabel::ClimateDenial => write!(f, "Climate Denial"),
            TopicLabel::SpaceConspiracy => write!(f, "Space Conspiracy"),
            TopicLabel::VaccineConspiracy => write!(f, "Vaccine Conspiracy"),
            TopicLabel::GeneralMisinformation => write!(f, "General Misinformation"),
        }
    }
}

// --- Trends ---

/// Per-post drill-down detail carried inside a trend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPost {
    pub text: String,
    pub source: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "risk_score")]
    pub risk_tier: RiskTier,
    pub score: f64,
}

/// An aggregated view of all posts sharing a topic. Rebuilt on every
/// aggregation call, never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trend {
    pub topic: TopicLabel,
    pub frequency: u32,
    pub average_risk_score: f64,
    pub posts: Vec<TrendPost>,
}
