use credcheck_common::{AnalysisResult, CredCheckError};

/// Parse raw model output into an `AnalysisResult`.
///
/// The model is prompted for strict JSON but routinely wraps it in prose or
/// code fences, so the first balanced JSON object substring is extracted and
/// deserialized. Anything without one balanced object carrying all five
/// required fields is rejected with `MalformedResponse`; callers substitute
/// the keyword fallback. No partial-field repair is attempted.
pub fn normalize(raw: &str) -> Result<AnalysisResult, CredCheckError> {
    let json = extract_json_object(raw).ok_or_else(|| {
        CredCheckError::MalformedResponse("no JSON object found in model output".to_string())
    })?;
    serde_json::from_str(json).map_err(|e| CredCheckError::MalformedResponse(e.to_string()))
}

/// Extract the first balanced JSON object substring.
///
/// Explicit bracket-matching scan rather than a greedy regex: tracks string
/// literals and escapes so braces inside strings do not affect nesting depth.
/// The scanned delimiters are all ASCII, so byte iteration is safe and the
/// returned slice ends on a char boundary.
fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let mut depth: usize = 0;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in raw.as_bytes().iter().enumerate().skip(start) {
        if escaped {
            escaped = false;
            continue;
        }
        match b {
            b'\\' if in_string => escaped = true,
            b'"' => in_string = !in_string,
            b'{' if !in_string => depth += 1,
            b'}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&raw[start..=i]);
                }
            }
            _ => {}
        }
    }
    None
}
