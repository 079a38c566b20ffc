// Analysis Orchestrator: one resume in, one `AnalysisRecord` out.
// Flow: precondition check → concurrent provider calls → normalize each
// success → merge (2+), use as-is (1), or synthesize locally (0).
// Provider failures are logged and absorbed; only missing resume text is
// reported to the caller.

use std::sync::Arc;

use futures::future::join_all;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::analysis::fallback::synthesize;
use crate::analysis::merge::merge;
use crate::analysis::models::AnalysisRecord;
use crate::analysis::normalize::normalize;
use crate::analysis::providers::{truncate_chars, AnalysisProvider, ProviderId};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no resume text available for analysis")]
    Precondition,
}

/// Which terminal path produced the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSource {
    Merged,
    Single,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptStatus {
    Succeeded,
    Skipped,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProviderAttempt {
    pub provider: ProviderId,
    pub status: AttemptStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    pub record: AnalysisRecord,
    pub source: AnalysisSource,
    pub attempts: Vec<ProviderAttempt>,
}

/// Providers are held in precedence order: the first successful provider's
/// scalars win every merge.
#[derive(Clone)]
pub struct AnalysisOrchestrator {
    providers: Vec<Arc<dyn AnalysisProvider>>,
}

impl AnalysisOrchestrator {
    pub fn new(providers: Vec<Arc<dyn AnalysisProvider>>) -> Self {
        Self { providers }
    }

    pub fn available_providers(&self) -> Vec<ProviderId> {
        self.providers
            .iter()
            .filter(|p| p.is_available())
            .map(|p| p.id())
            .collect()
    }

    pub async fn analyze(&self, resume_text: &str) -> Result<AnalysisOutcome, AnalysisError> {
        if resume_text.trim().is_empty() {
            return Err(AnalysisError::Precondition);
        }

        let available: Vec<&Arc<dyn AnalysisProvider>> =
            self.providers.iter().filter(|p| p.is_available()).collect();
        info!(
            "Analyzing resume ({} chars) with {} provider(s)",
            resume_text.chars().count(),
            available.len()
        );

        let calls = available.iter().map(|provider| async move {
            let input = truncate_chars(
                resume_text,
                provider.max_input_chars(),
                provider.truncation_marker(),
            );
            provider.analyze(&input).await
        });
        let mut results = join_all(calls).await.into_iter();

        let mut attempts = Vec::with_capacity(self.providers.len());
        let mut records = Vec::new();
        for provider in &self.providers {
            let id = provider.id();
            if !provider.is_available() {
                info!("Provider {id} not configured, skipping");
                attempts.push(ProviderAttempt {
                    provider: id,
                    status: AttemptStatus::Skipped,
                });
                continue;
            }
            let status = match results.next() {
                Some(Ok(result)) => {
                    info!("Provider {id} returned an analysis");
                    records.push(normalize(&result));
                    AttemptStatus::Succeeded
                }
                Some(Err(e)) => {
                    warn!("Provider {id} failed: {e}");
                    AttemptStatus::Failed
                }
                None => AttemptStatus::Failed,
            };
            attempts.push(ProviderAttempt { provider: id, status });
        }

        let (record, source) = match records.len() {
            0 => {
                warn!("No provider produced an analysis, using local fallback");
                (synthesize(resume_text), AnalysisSource::Fallback)
            }
            1 => (records.remove(0), AnalysisSource::Single),
            n => {
                info!("Merging {n} provider analyses");
                let merged = records
                    .into_iter()
                    .reduce(|primary, secondary| merge(&primary, &secondary))
                    .unwrap_or_default();
                (merged, AnalysisSource::Merged)
            }
        };

        Ok(AnalysisOutcome {
            record,
            source,
            attempts,
        })
    }
}
