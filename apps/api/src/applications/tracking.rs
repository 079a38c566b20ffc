// State transitions for tracked applications. No I/O here; the store
// persists whatever these functions produce.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::types::Json;
use uuid::Uuid;

use crate::models::application::{
    ApplicationNote, ApplicationRow, ApplicationStatus, JobDetails, NextAction, TimelineEntry,
};

/// Used when a create request names no user.
pub const DEFAULT_USER_ID: &str = "demoUserId123";

#[derive(Debug, Clone, Deserialize)]
pub struct NoteInput {
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateApplicationRequest {
    pub user: Option<String>,
    pub job: JobDetails,
    pub status: Option<ApplicationStatus>,
    pub notes: Vec<NoteInput>,
    pub next_action: Option<NextAction>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateApplicationRequest {
    pub status: Option<ApplicationStatus>,
    pub notes: Option<String>,
}

/// Builds a new application with its timeline seeded by the initial status.
pub fn new_application(req: CreateApplicationRequest, now: DateTime<Utc>) -> ApplicationRow {
    let status = req.status.unwrap_or_default();
    let user_id = req
        .user
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| DEFAULT_USER_ID.to_string());
    let notes: Vec<ApplicationNote> = req
        .notes
        .into_iter()
        .filter(|n| !n.content.trim().is_empty())
        .map(|n| ApplicationNote {
            content: n.content,
            created_at: now,
        })
        .collect();
    let first_note = notes
        .first()
        .map(|n| n.content.clone())
        .unwrap_or_default();

    ApplicationRow {
        id: Uuid::new_v4(),
        user_id,
        job: Json(req.job),
        status: status.as_str().to_string(),
        timeline: Json(vec![TimelineEntry {
            status: status.as_str().to_string(),
            notes: first_note,
            date: now,
        }]),
        next_action: req.next_action.map(Json),
        notes: Json(notes),
        applied_at: now,
        last_updated: now,
    }
}

/// Applies a status change and/or note. A status equal to the current one
/// leaves the timeline alone; `last_updated` always moves.
pub fn apply_update(row: &mut ApplicationRow, req: &UpdateApplicationRequest, now: DateTime<Utc>) {
    let note = req
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty());

    if let Some(status) = req.status {
        if status.as_str() != row.status {
            row.timeline.0.push(TimelineEntry {
                status: status.as_str().to_string(),
                notes: note.unwrap_or_default().to_string(),
                date: now,
            });
            row.status = status.as_str().to_string();
        }
    }

    if let Some(content) = note {
        row.notes.0.push(ApplicationNote {
            content: content.to_string(),
            created_at: now,
        });
    }

    row.last_updated = now;
}
