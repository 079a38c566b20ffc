// Thin client for the Jooble job-search API. Results are passed through untouched.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

const JOOBLE_API_URL: &str = "https://jooble.org/api/";

#[derive(Debug, Error)]
pub enum JobSearchError {
    #[error("job search is not configured")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("job search API returned status {0}")]
    Api(u16),

    #[error("job search API response has no job list")]
    InvalidResponse,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobSearchRequest {
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Serialize)]
struct JoobleQuery<'a> {
    keywords: &'a str,
    location: &'a str,
    salary: &'a str,
    page: String,
}

#[derive(Clone)]
pub struct JoobleClient {
    client: Client,
    api_key: Option<String>,
}

impl JoobleClient {
    pub fn new(api_key: Option<String>) -> Result<Self, JobSearchError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            client,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// First page of results for a raw search request.
    pub async fn search(&self, request: &JobSearchRequest) -> Result<Value, JobSearchError> {
        self.search_page(&request.keywords, &request.location, 1).await
    }

    pub async fn search_page(
        &self,
        keywords: &str,
        location: &str,
        page: u32,
    ) -> Result<Value, JobSearchError> {
        let api_key = self.api_key.as_deref().ok_or(JobSearchError::NotConfigured)?;
        debug!("Searching jobs: keywords='{keywords}', location='{location}', page={page}");

        let response = self
            .client
            .post(format!("{JOOBLE_API_URL}{api_key}"))
            .json(&JoobleQuery {
                keywords,
                location,
                salary: "",
                page: page.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(JobSearchError::Api(status.as_u16()));
        }
        Ok(response.json().await?)
    }
}
