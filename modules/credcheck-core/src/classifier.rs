use credcheck_common::{AnalysisResult, RiskTier};

/// Phrases strongly associated with misinformation framing.
const HIGH_RISK_KEYWORDS: &[&str] = &[
    "fake",
    "hoax",
    "conspiracy",
    "cover-up",
    "secret",
    "they don't want you to know",
];

/// Hedging language that signals unverified claims.
const MEDIUM_RISK_KEYWORDS: &[&str] = &[
    "allegedly",
    "rumors",
    "sources say",
    "unconfirmed",
];

const EDUCATIONAL_TIP: &str =
    "Always verify information from multiple credible sources before sharing";

const FACT_CHECK_SOURCES: &[&str] = &[
    "https://www.factcheck.org/",
    "https://www.snopes.com/",
    "https://www.politifact.com/",
];

/// Keyword-based risk classification. This is the guaranteed fallback when
/// the model call fails or the normalizer rejects its output; it never fails.
pub fn classify(text: &str) -> AnalysisResult {
    let lower = text.to_lowercase();

    let (risk_tier, score, reasons) = if matches_any(&lower, HIGH_RISK_KEYWORDS) {
        (
            RiskTier::High,
            0.8,
            vec![
                "Contains language commonly associated with misinformation".to_string(),
                "Uses sensational or conspiratorial language".to_string(),
            ],
        )
    } else if matches_any(&lower, MEDIUM_RISK_KEYWORDS) {
        (
            RiskTier::Medium,
            0.5,
            vec!["Contains unverified claims or speculative language".to_string()],
        )
    } else {
        (
            RiskTier::Low,
            0.2,
            vec![
                "Content appears to be factual and well-sourced".to_string(),
                "No obvious indicators of misinformation detected".to_string(),
            ],
        )
    };

    AnalysisResult {
        risk_tier,
        score,
        reasons,
        educational_tip: EDUCATIONAL_TIP.to_string(),
        sources: FACT_CHECK_SOURCES.iter().map(|s| s.to_string()).collect(),
    }
}

fn matches_any(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lower.contains(k))
}
