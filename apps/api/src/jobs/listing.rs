// Job listings: Jooble results mapped onto the shape the job board renders.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::analysis::extract::{extract_integer, extract_string};
use crate::jobs::jooble::JobSearchError;

pub const LISTING_SOURCE: &str = "Jooble";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JobListingQuery {
    pub query: Option<String>,
    /// Analysis record (or any provider-shaped JSON) serialized as text.
    pub analysis: Option<String>,
    pub page: Option<u32>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobHighlight {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub url: String,
    pub salary: Option<String>,
    pub employment_type: Option<String>,
    pub highlights: Vec<JobHighlight>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListingResponse {
    pub jobs: Vec<JobListing>,
    pub total_results: u64,
    pub current_page: u32,
    pub search_query: String,
    pub api_used: &'static str,
}

impl JobListing {
    pub fn from_jooble(job: &Value) -> Self {
        let snippet = extract_string(job, &["snippet"], "");
        let highlights = if snippet.is_empty() {
            Vec::new()
        } else {
            vec![JobHighlight {
                title: "Description".to_string(),
                items: vec![snippet.clone()],
            }]
        };
        let id = match extract_string(job, &["id"], "") {
            id if id.is_empty() => format!("jooble-{}", Uuid::new_v4().simple()),
            id => id,
        };

        Self {
            id,
            title: extract_string(job, &["title"], "No Title"),
            company: extract_string(job, &["company"], "Company not specified"),
            location: extract_string(job, &["location"], "Location not specified"),
            description: if snippet.is_empty() {
                extract_string(job, &["description"], "")
            } else {
                snippet
            },
            url: extract_string(job, &["link"], ""),
            salary: optional_text(job, "salary"),
            employment_type: optional_text(job, "type"),
            highlights,
        }
    }
}

fn optional_text(job: &Value, key: &str) -> Option<String> {
    Some(extract_string(job, &[key], "")).filter(|s| !s.is_empty())
}

/// Maps a Jooble response body. A body without a `jobs` array is an upstream fault.
pub fn listings_from_jooble(body: &Value) -> Result<(Vec<JobListing>, u64), JobSearchError> {
    let jobs: Vec<JobListing> = body
        .get("jobs")
        .and_then(Value::as_array)
        .ok_or(JobSearchError::InvalidResponse)?
        .iter()
        .map(JobListing::from_jooble)
        .collect();

    let total = match extract_integer(body, &["totalCount"], 0) {
        n if n > 0 => n as u64,
        _ => jobs.len() as u64,
    };
    Ok((jobs, total))
}
