//! Attachments

use super::identifier::ResourceId;
use crate::dispatcher::{Dispatcher, Params};
use anyhow::Result;
use serde_json::Value;

/// Accessor for attachment metadata. Uploading files is not supported;
/// these are read-only views onto what the web and mobile apps attach.
pub struct Attachments<'a, D: Dispatcher + ?Sized> {
    /// The transport this accessor forwards to.
    pub dispatcher: &'a D,
}

impl<'a, D: Dispatcher + ?Sized> Attachments<'a, D> {
    /// Create an accessor over `dispatcher`.
    pub fn new(dispatcher: &'a D) -> Self {
        Self { dispatcher }
    }

    /// Fetch a single attachment record.
    pub async fn find_by_id(
        &self,
        attachment_id: impl Into<ResourceId>,
        params: Option<&Params>,
    ) -> Result<Value> {
        let path = format!("/attachments/{}", attachment_id.into().path_segment());
        self.dispatcher.get(&path, params).await
    }

    /// List the attachments on a task.
    pub async fn find_by_task(
        &self,
        task_id: impl Into<ResourceId>,
        params: Option<&Params>,
    ) -> Result<Value> {
        let path = format!("/tasks/{}/attachments", task_id.into().path_segment());
        self.dispatcher.get(&path, params).await
    }
}
