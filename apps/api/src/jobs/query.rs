use serde_json::Value;

use crate::analysis::extract::extract_list;
use crate::analysis::models::AnalysisRecord;

const QUERY_SKILL_COUNT: usize = 3;
const LISTING_TITLE_COUNT: usize = 2;
pub const DEFAULT_LISTING_QUERY: &str = "software developer";

const LISTING_TITLE_KEYS: &[&str] = &["recommendedJobTitles", "jobTitles"];
const LISTING_SKILL_KEYS: &[&str] = &["keySkills", "skills", "personalSkills", "technicalSkills"];

/// Builds the job-search keywords for an analysis: the top job title followed
/// by the first three skills.
pub fn build_search_query(record: &AnalysisRecord) -> String {
    let role = record.job_titles.first().map(String::as_str).unwrap_or("");
    let skills = record
        .skills
        .iter()
        .take(QUERY_SKILL_COUNT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    format!("{role} {skills}").trim().to_string()
}

/// Keywords for the job listing page. An analysis passed as JSON text wins
/// when it names at least one job title: its first two titles followed by
/// its first three skills. Otherwise the explicit query, then a default.
pub fn listing_search_query(query: Option<&str>, analysis: Option<&str>) -> String {
    let fallback = query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .unwrap_or(DEFAULT_LISTING_QUERY);

    let Some(analysis) = analysis.and_then(|raw| serde_json::from_str::<Value>(raw).ok()) else {
        return fallback.to_string();
    };

    let titles = extract_list(&analysis, LISTING_TITLE_KEYS);
    if titles.is_empty() {
        return fallback.to_string();
    }
    let skills = extract_list(&analysis, LISTING_SKILL_KEYS);

    titles
        .iter()
        .take(LISTING_TITLE_COUNT)
        .chain(skills.iter().take(QUERY_SKILL_COUNT))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(titles: &[&str], skills: &[&str]) -> AnalysisRecord {
        AnalysisRecord {
            job_titles: titles.iter().map(|s| s.to_string()).collect(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_title_then_three_skills() {
        let r = record(
            &["Data Engineer", "Analyst"],
            &["Python", "SQL", "Spark", "Airflow"],
        );
        assert_eq!(build_search_query(&r), "Data Engineer Python SQL Spark");
    }

    #[test]
    fn test_missing_parts_are_trimmed() {
        assert_eq!(build_search_query(&record(&[], &["Go"])), "Go");
        assert_eq!(build_search_query(&record(&["SRE"], &[])), "SRE");
        assert_eq!(build_search_query(&record(&[], &[])), "");
    }

    #[test]
    fn test_listing_query_from_analysis() {
        let analysis = r#"{
            "recommendedJobTitles": ["Data Engineer", "ML Engineer", "Analyst"],
            "keySkills": ["Python", "Spark", "SQL", "Airflow"]
        }"#;
        assert_eq!(
            listing_search_query(Some("ignored"), Some(analysis)),
            "Data Engineer ML Engineer Python Spark SQL"
        );
    }

    #[test]
    fn test_listing_query_reads_canonical_record() {
        let analysis = serde_json::to_string(&record(&["SRE"], &["Go", "Linux"])).unwrap();
        assert_eq!(listing_search_query(None, Some(&analysis)), "SRE Go Linux");
    }

    #[test]
    fn test_listing_query_defaults() {
        assert_eq!(listing_search_query(None, None), DEFAULT_LISTING_QUERY);
        assert_eq!(listing_search_query(Some("  "), None), DEFAULT_LISTING_QUERY);
        assert_eq!(listing_search_query(Some("nurse"), None), "nurse");
        assert_eq!(listing_search_query(Some("nurse"), Some("not json")), "nurse");
        assert_eq!(
            listing_search_query(None, Some(r#"{"skills": ["Go"]}"#)),
            DEFAULT_LISTING_QUERY
        );
    }
}
