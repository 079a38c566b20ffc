// Result Merger: combines two normalized records, `primary` taking precedence.
// Scalars: the primary value unless it is empty (zero for the score).
// Lists: primary entries then secondary entries, exact-match de-duplicated.
// Near-duplicate wording from different providers is kept as-is.

use crate::analysis::models::{dedup_preserving_order, AnalysisRecord, DetailedAnalysis};

pub fn merge(primary: &AnalysisRecord, secondary: &AnalysisRecord) -> AnalysisRecord {
    AnalysisRecord {
        summary: prefer_text(&primary.summary, &secondary.summary),
        strengths: union(&primary.strengths, &secondary.strengths),
        areas_to_improve: union(&primary.areas_to_improve, &secondary.areas_to_improve),
        recommendations: union(&primary.recommendations, &secondary.recommendations),
        skills: union(&primary.skills, &secondary.skills),
        resume_score: if primary.resume_score != 0 {
            primary.resume_score
        } else {
            secondary.resume_score
        },
        job_titles: union(&primary.job_titles, &secondary.job_titles),
        detailed_analysis: merge_detailed(&primary.detailed_analysis, &secondary.detailed_analysis),
    }
}

fn merge_detailed(primary: &DetailedAnalysis, secondary: &DetailedAnalysis) -> DetailedAnalysis {
    DetailedAnalysis {
        professional_profile: prefer_text(
            &primary.professional_profile,
            &secondary.professional_profile,
        ),
        key_achievements: union(&primary.key_achievements, &secondary.key_achievements),
        industry_fit: union(&primary.industry_fit, &secondary.industry_fit),
        recommended_job_titles: union(
            &primary.recommended_job_titles,
            &secondary.recommended_job_titles,
        ),
        skill_gaps: union(&primary.skill_gaps, &secondary.skill_gaps),
    }
}

fn prefer_text(primary: &str, secondary: &str) -> String {
    if primary.trim().is_empty() {
        secondary.to_string()
    } else {
        primary.to_string()
    }
}

fn union(primary: &[String], secondary: &[String]) -> Vec<String> {
    dedup_preserving_order(primary.iter().chain(secondary).cloned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn record(summary: &str, skills: &[&str], score: i64) -> AnalysisRecord {
        AnalysisRecord {
            summary: summary.to_string(),
            skills: strings(skills),
            resume_score: score,
            ..Default::default()
        }
    }

    #[test]
    fn test_merge_with_overlap_keeps_first_occurrence_order() {
        let a = record("", &["Python", "SQL"], 75);
        let b = record("", &["SQL", "Java"], 75);
        assert_eq!(merge(&a, &b).skills, strings(&["Python", "SQL", "Java"]));
    }

    #[test]
    fn test_primary_summary_wins_when_present() {
        let a = record("Primary view", &[], 75);
        let b = record("Secondary view", &[], 75);
        assert_eq!(merge(&a, &b).summary, "Primary view");
    }

    #[test]
    fn test_empty_primary_summary_falls_back() {
        let a = record("  ", &[], 75);
        let b = record("Secondary view", &[], 75);
        assert_eq!(merge(&a, &b).summary, "Secondary view");
    }

    #[test]
    fn test_score_prefers_primary_unless_zero() {
        assert_eq!(merge(&record("", &[], 62), &record("", &[], 90)).resume_score, 62);
        assert_eq!(merge(&record("", &[], 0), &record("", &[], 90)).resume_score, 90);
    }

    #[test]
    fn test_detailed_analysis_is_merged_field_by_field() {
        let a = AnalysisRecord {
            detailed_analysis: DetailedAnalysis {
                professional_profile: String::new(),
                key_achievements: strings(&["Led migration"]),
                skill_gaps: strings(&["AWS"]),
                ..Default::default()
            },
            ..Default::default()
        };
        let b = AnalysisRecord {
            detailed_analysis: DetailedAnalysis {
                professional_profile: "From secondary".to_string(),
                key_achievements: strings(&["Led migration", "Mentored 4 juniors"]),
                industry_fit: strings(&["SaaS"]),
                ..Default::default()
            },
            ..Default::default()
        };
        let merged = merge(&a, &b).detailed_analysis;
        assert_eq!(merged.professional_profile, "From secondary");
        assert_eq!(
            merged.key_achievements,
            strings(&["Led migration", "Mentored 4 juniors"])
        );
        assert_eq!(merged.industry_fit, strings(&["SaaS"]));
        assert_eq!(merged.skill_gaps, strings(&["AWS"]));
    }

    #[test]
    fn test_merge_never_loses_list_entries() {
        let a = AnalysisRecord {
            strengths: strings(&["Grit", "Focus"]),
            recommendations: strings(&["Add metrics"]),
            job_titles: strings(&["SRE"]),
            ..Default::default()
        };
        let b = AnalysisRecord {
            strengths: strings(&["Focus", "Curiosity"]),
            areas_to_improve: strings(&["Networking"]),
            job_titles: strings(&["Platform Engineer", "SRE"]),
            ..Default::default()
        };
        let merged = merge(&a, &b);
        for (inputs, output) in [
            ((&a.strengths, &b.strengths), &merged.strengths),
            ((&a.areas_to_improve, &b.areas_to_improve), &merged.areas_to_improve),
            ((&a.recommendations, &b.recommendations), &merged.recommendations),
            ((&a.job_titles, &b.job_titles), &merged.job_titles),
        ] {
            for entry in inputs.0.iter().chain(inputs.1.iter()) {
                assert!(output.contains(entry), "{entry} missing from merge");
            }
        }
        assert_eq!(merged.job_titles, strings(&["SRE", "Platform Engineer"]));
    }
}
