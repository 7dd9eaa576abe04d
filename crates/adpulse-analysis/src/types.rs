use serde::{Deserialize, Serialize};

/// Result of auditing one piece of ad copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyAnalysisResult {
    /// Effectiveness score in [0, 100].
    pub score: f64,
    /// Strong opening lines found in the copy.
    pub hooks: Vec<String>,
    /// Calls to action found in the copy.
    pub ctas: Vec<String>,
    /// Specific improvement suggestions.
    pub improvements: Vec<String>,
    /// Abstract patterns found, e.g. "Scarcity", "Social Proof".
    pub winning_patterns: Vec<String>,
}

impl CopyAnalysisResult {
    /// Static result served when no LLM is configured or the call fails.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            score: 75.0,
            hooks: vec!["Detected Hook (Mock Mode)".to_string()],
            ctas: vec!["Detected CTA (Mock Mode)".to_string()],
            improvements: vec![
                "Add more urgency".to_string(),
                "Include social proof".to_string(),
            ],
            winning_patterns: vec![
                "Benefit-First".to_string(),
                "Problem-Solution".to_string(),
            ],
        }
    }
}
