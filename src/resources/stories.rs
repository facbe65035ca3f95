//! Stories
//!
//! Stories are the comment and activity entries attached to tasks. They are
//! created on a task and read either singly or per task.

use super::identifier::ResourceId;
use crate::dispatcher::{Dispatcher, Params};
use anyhow::Result;
use serde_json::Value;

/// Accessor for story resources.
pub struct Stories<'a, D: Dispatcher + ?Sized> {
    /// The transport this accessor forwards to.
    pub dispatcher: &'a D,
}

impl<'a, D: Dispatcher + ?Sized> Stories<'a, D> {
    /// Create an accessor over `dispatcher`.
    pub fn new(dispatcher: &'a D) -> Self {
        Self { dispatcher }
    }

    /// Fetch a single story.
    pub async fn find_by_id(
        &self,
        story_id: impl Into<ResourceId>,
        params: Option<&Params>,
    ) -> Result<Value> {
        let path = format!("/stories/{}", story_id.into().path_segment());
        self.dispatcher.get(&path, params).await
    }

    /// List the stories on a task, oldest first.
    pub async fn find_by_task(
        &self,
        task_id: impl Into<ResourceId>,
        params: Option<&Params>,
    ) -> Result<Value> {
        let path = format!("/tasks/{}/stories", task_id.into().path_segment());
        self.dispatcher.get(&path, params).await
    }

    /// Add a comment story to a task. `data` carries the `text`.
    pub async fn create_on_task(
        &self,
        task_id: impl Into<ResourceId>,
        data: &Value,
    ) -> Result<Value> {
        let path = format!("/tasks/{}/stories", task_id.into().path_segment());
        self.dispatcher.post(&path, data).await
    }
}
