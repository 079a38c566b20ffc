// Result normalizer: one provider payload in, one canonical analysis record out.
// Candidate keys are listed in priority order. Canonical key names are part of
// each table so a record that has already been normalized reads back unchanged.

use serde_json::Value;

use crate::analysis::extract::{
    extract_integer, extract_list, extract_list_or_wrap, extract_string, nested,
};
use crate::analysis::models::{
    clamp_score, dedup_preserving_order, AnalysisRecord, DetailedAnalysis, ProviderResult,
    DEFAULT_RESUME_SCORE,
};

const SUMMARY_KEYS: &[&str] = &["summary"];
const SKILL_KEYS: &[&str] = &["personalSkills", "skills", "keySkills"];
const STRENGTH_KEYS: &[&str] = &["strengths"];
const IMPROVEMENT_KEYS: &[&str] = &["areasToImprove", "weaknesses", "improvements"];
const RECOMMENDATION_KEYS: &[&str] = &["recommendations"];
const SCORE_KEYS: &[&str] = &["resumeScore"];
const JOB_TITLE_KEYS: &[&str] = &["recommendedJobTitles", "jobTitles"];

const DETAILED_KEY: &str = "detailedAnalysis";
const PROFILE_KEYS: &[&str] = &["professionalProfile"];
const ACHIEVEMENT_KEYS: &[&str] = &["keyAchievements"];
const INDUSTRY_KEYS: &[&str] = &["industryFit"];
const RECOMMENDED_TITLE_KEYS: &[&str] = &["recommendedJobTitles"];
const SKILL_GAP_KEYS: &[&str] = &["skillGaps"];

pub fn normalize(result: &ProviderResult) -> AnalysisRecord {
    let payload = result.payload();
    let detailed = nested(payload, DETAILED_KEY);

    // Schemas that only nest the titles still feed the job-search query. A
    // present but empty top-level list is kept as sent.
    let job_titles = if has_any_key(payload, JOB_TITLE_KEYS) {
        extract_list(payload, JOB_TITLE_KEYS)
    } else {
        extract_list(detailed, RECOMMENDED_TITLE_KEYS)
    };

    AnalysisRecord {
        summary: extract_string(payload, SUMMARY_KEYS, ""),
        strengths: dedup_preserving_order(extract_list(payload, STRENGTH_KEYS)),
        areas_to_improve: dedup_preserving_order(extract_list(payload, IMPROVEMENT_KEYS)),
        recommendations: dedup_preserving_order(extract_list(payload, RECOMMENDATION_KEYS)),
        skills: dedup_preserving_order(extract_list(payload, SKILL_KEYS)),
        resume_score: clamp_score(extract_integer(payload, SCORE_KEYS, DEFAULT_RESUME_SCORE)),
        job_titles: dedup_preserving_order(job_titles),
        detailed_analysis: normalize_detailed(payload, detailed),
    }
}

/// Each sub-field prefers the nested `detailedAnalysis` value and falls back to
/// the top-level key, which bridges the flat and nested response schemas.
fn normalize_detailed(payload: &Value, detailed: &Value) -> DetailedAnalysis {
    let profile = match extract_string(detailed, PROFILE_KEYS, "") {
        p if p.is_empty() => extract_string(payload, PROFILE_KEYS, ""),
        p => p,
    };

    DetailedAnalysis {
        professional_profile: profile,
        key_achievements: nested_or_top_level(payload, detailed, ACHIEVEMENT_KEYS),
        industry_fit: nested_or_top_level(payload, detailed, INDUSTRY_KEYS),
        recommended_job_titles: nested_or_top_level(payload, detailed, RECOMMENDED_TITLE_KEYS),
        skill_gaps: nested_or_top_level(payload, detailed, SKILL_GAP_KEYS),
    }
}

fn has_any_key(payload: &Value, keys: &[&str]) -> bool {
    keys.iter()
        .any(|key| payload.get(*key).is_some_and(|value| !value.is_null()))
}

fn nested_or_top_level(payload: &Value, detailed: &Value, keys: &[&str]) -> Vec<String> {
    let values = match extract_list_or_wrap(detailed, keys) {
        v if v.is_empty() => extract_list_or_wrap(payload, keys),
        v => v,
    };
    dedup_preserving_order(values)
}
