//! Tags

use super::identifier::ResourceId;
use crate::dispatcher::{Dispatcher, Params};
use anyhow::Result;
use serde_json::Value;

/// Accessor for tag resources.
pub struct Tags<'a, D: Dispatcher + ?Sized> {
    /// The transport this accessor forwards to.
    pub dispatcher: &'a D,
}

impl<'a, D: Dispatcher + ?Sized> Tags<'a, D> {
    /// Create an accessor over `dispatcher`.
    pub fn new(dispatcher: &'a D) -> Self {
        Self { dispatcher }
    }

    /// Create a tag from `data`. The payload must name a workspace.
    pub async fn create(&self, data: &Value) -> Result<Value> {
        self.dispatcher.post("/tags", data).await
    }

    /// Create a tag in a specific workspace.
    pub async fn create_in_workspace(
        &self,
        workspace_id: impl Into<ResourceId>,
        data: &Value,
    ) -> Result<Value> {
        let path = format!("/workspaces/{}/tags", workspace_id.into().path_segment());
        self.dispatcher.post(&path, data).await
    }

    /// List all tags visible to the caller.
    pub async fn find_all(&self, params: Option<&Params>) -> Result<Value> {
        self.dispatcher.get("/tags", params).await
    }

    /// Fetch a single tag.
    pub async fn find_by_id(
        &self,
        tag_id: impl Into<ResourceId>,
        params: Option<&Params>,
    ) -> Result<Value> {
        let path = format!("/tags/{}", tag_id.into().path_segment());
        self.dispatcher.get(&path, params).await
    }

    /// List the tags in a workspace.
    pub async fn find_by_workspace(
        &self,
        workspace_id: impl Into<ResourceId>,
        params: Option<&Params>,
    ) -> Result<Value> {
        let path = format!("/workspaces/{}/tags", workspace_id.into().path_segment());
        self.dispatcher.get(&path, params).await
    }

    /// Apply `data` to an existing tag.
    pub async fn update(&self, tag_id: impl Into<ResourceId>, data: &Value) -> Result<Value> {
        let path = format!("/tags/{}", tag_id.into().path_segment());
        self.dispatcher.put(&path, data).await
    }

    /// Delete a tag.
    pub async fn delete(&self, tag_id: impl Into<ResourceId>) -> Result<Value> {
        let path = format!("/tags/{}", tag_id.into().path_segment());
        self.dispatcher.delete(&path).await
    }
}
