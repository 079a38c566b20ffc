use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Score assigned when a provider omits `resumeScore` or sends something non-numeric.
pub const DEFAULT_RESUME_SCORE: i64 = 75;

/// The canonical, fully-defaulted resume analysis handed to the rest of the system.
///
/// Every list is de-duplicated with first-occurrence order, `resume_score` is
/// always in `0..=100`. Built by the normalizer, the merger or the fallback and
/// never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub summary: String,
    pub strengths: Vec<String>,
    pub areas_to_improve: Vec<String>,
    pub recommendations: Vec<String>,
    pub skills: Vec<String>,
    pub resume_score: i64,
    pub job_titles: Vec<String>,
    pub detailed_analysis: DetailedAnalysis,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedAnalysis {
    pub professional_profile: String,
    pub key_achievements: Vec<String>,
    pub industry_fit: Vec<String>,
    pub recommended_job_titles: Vec<String>,
    pub skill_gaps: Vec<String>,
}

/// Raw, untyped output of one provider call.
///
/// Nothing about its shape is trusted; it only exists until the normalizer
/// turns it into an [`AnalysisRecord`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResult(pub Value);

impl ProviderResult {
    pub fn payload(&self) -> &Value {
        &self.0
    }
}

/// Removes repeated entries by exact string equality, keeping the first occurrence.
pub fn dedup_preserving_order(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

pub fn clamp_score(score: i64) -> i64 {
    score.clamp(0, 100)
}
