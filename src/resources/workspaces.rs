//! Workspaces
//!
//! Accessor for workspace records. Workspaces cannot be created or deleted
//! through the API; they can only be listed, fetched and renamed.

use super::identifier::ResourceId;
use crate::dispatcher::{Dispatcher, Params};
use anyhow::Result;
use serde_json::Value;

/// Accessor for workspace resources.
pub struct Workspaces<'a, D: Dispatcher + ?Sized> {
    /// The transport this accessor forwards to.
    pub dispatcher: &'a D,
}

impl<'a, D: Dispatcher + ?Sized> Workspaces<'a, D> {
    /// Create an accessor over `dispatcher`.
    pub fn new(dispatcher: &'a D) -> Self {
        Self { dispatcher }
    }

    /// List the workspaces visible to the caller.
    pub async fn find_all(&self, params: Option<&Params>) -> Result<Value> {
        self.dispatcher.get("/workspaces", params).await
    }

    /// Fetch a single workspace.
    pub async fn find_by_id(
        &self,
        workspace_id: impl Into<ResourceId>,
        params: Option<&Params>,
    ) -> Result<Value> {
        let path = format!("/workspaces/{}", workspace_id.into().path_segment());
        self.dispatcher.get(&path, params).await
    }

    /// Apply `data` to a workspace. Only the name is mutable.
    pub async fn update(
        &self,
        workspace_id: impl Into<ResourceId>,
        data: &Value,
    ) -> Result<Value> {
        let path = format!("/workspaces/{}", workspace_id.into().path_segment());
        self.dispatcher.put(&path, data).await
    }
}
