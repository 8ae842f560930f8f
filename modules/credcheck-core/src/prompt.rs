/// Fixed analysis prompt sent to the model. Requests strict JSON carrying
/// exactly the five fields the normalizer requires.
pub fn analysis_prompt(content: &str) -> String {
    format!(
        r#"You are an AI misinformation detection assistant.
Analyze the following content: "{content}"

Respond ONLY in JSON with these exact fields:
{{
  "risk_score": "Low" | "Medium" | "High",
  "score": 0.0-1.0,
  "reason": ["list of specific reasons why content may/may not be credible"],
  "educational_tip": "short actionable advice for the user",
  "sources": ["2-3 credible links related to the topic"]
}}

Be thorough in your analysis. Consider:
- Factual accuracy
- Source credibility
- Emotional manipulation
- Logical fallacies
- Bias indicators
- Recent developments

Provide specific, actionable reasons and educational tips."#
    )
}
