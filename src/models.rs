//! Typed API records
//!
//! Serde views over the JSON records the API returns. Responses are shaped
//! by `opt_fields`, so every field the server may omit is optional and
//! collections default to empty. Library callers can ignore these entirely
//! and work with raw values; the CLI decodes into them for display.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Decode a typed record (or a vector of them) from a raw response payload.
pub fn from_payload<T: serde::de::DeserializeOwned>(payload: &Value) -> Result<T> {
    serde_json::from_value(payload.clone()).context("Failed to decode API record")
}

/// Compact record: the id/name pair embedded inside other records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
}

/// A project record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub archived: Option<bool>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub workspace: Option<Resource>,
    #[serde(default)]
    pub team: Option<Resource>,
    #[serde(default)]
    pub members: Vec<Resource>,
    #[serde(default)]
    pub followers: Vec<Resource>,
}

/// A task record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub assignee: Option<Resource>,
    #[serde(default)]
    pub assignee_status: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub due_on: Option<NaiveDate>,
    #[serde(default)]
    pub parent: Option<Resource>,
    #[serde(default)]
    pub workspace: Option<Resource>,
    #[serde(default)]
    pub projects: Vec<Resource>,
    #[serde(default)]
    pub tags: Vec<Resource>,
    #[serde(default)]
    pub followers: Vec<Resource>,
}

/// A workspace record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_organization: Option<bool>,
}

/// A user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub workspaces: Vec<Resource>,
}

/// A tag record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub workspace: Option<Resource>,
    #[serde(default)]
    pub followers: Vec<Resource>,
}

/// A story record: one comment or system activity entry on a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub id: u64,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, rename = "type")]
    pub story_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<Resource>,
    #[serde(default)]
    pub target: Option<Resource>,
    #[serde(default)]
    pub source: Option<String>,
}
