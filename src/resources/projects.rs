//! Projects
//!
//! Accessor for project resources: CRUD plus workspace-scoped creation and
//! listing.

use super::identifier::ResourceId;
use crate::dispatcher::{Dispatcher, Params};
use anyhow::Result;
use serde_json::Value;

/// Accessor for project resources.
///
/// Borrows its dispatcher for the whole lifetime of the accessor and
/// forwards every operation to it unchanged, payloads and errors alike.
/// Paths are built from identifiers via [`ResourceId::path_segment`], so a
/// non-numeric id goes out as a literal `NaN` segment rather than failing
/// locally.
pub struct Projects<'a, D: Dispatcher + ?Sized> {
    /// The transport this accessor forwards to.
    pub dispatcher: &'a D,
}

impl<'a, D: Dispatcher + ?Sized> Projects<'a, D> {
    /// Create an accessor over `dispatcher`.
    pub fn new(dispatcher: &'a D) -> Self {
        Self { dispatcher }
    }

    /// Create a project from `data`.
    ///
    /// `data` must name a workspace or team for the server to accept it;
    /// nothing is checked here.
    pub async fn create(&self, data: &Value) -> Result<Value> {
        self.dispatcher.post("/projects", data).await
    }

    /// Create a project in a specific workspace or organization.
    pub async fn create_in_workspace(
        &self,
        workspace_id: impl Into<ResourceId>,
        data: &Value,
    ) -> Result<Value> {
        let path = format!("/workspaces/{}/projects", workspace_id.into().path_segment());
        self.dispatcher.post(&path, data).await
    }

    /// List all projects visible to the caller.
    ///
    /// `params` is forwarded exactly as given: `None` sends no query at all.
    pub async fn find_all(&self, params: Option<&Params>) -> Result<Value> {
        self.dispatcher.get("/projects", params).await
    }

    /// Fetch a single project.
    pub async fn find_by_id(
        &self,
        project_id: impl Into<ResourceId>,
        params: Option<&Params>,
    ) -> Result<Value> {
        let path = format!("/projects/{}", project_id.into().path_segment());
        self.dispatcher.get(&path, params).await
    }

    /// List the projects in a workspace.
    pub async fn find_by_workspace(
        &self,
        workspace_id: impl Into<ResourceId>,
        params: Option<&Params>,
    ) -> Result<Value> {
        let path = format!("/workspaces/{}/projects", workspace_id.into().path_segment());
        self.dispatcher.get(&path, params).await
    }

    /// Apply `data` to an existing project.
    pub async fn update(&self, project_id: impl Into<ResourceId>, data: &Value) -> Result<Value> {
        let path = format!("/projects/{}", project_id.into().path_segment());
        self.dispatcher.put(&path, data).await
    }

    /// Delete a project.
    pub async fn delete(&self, project_id: impl Into<ResourceId>) -> Result<Value> {
        let path = format!("/projects/{}", project_id.into().path_segment());
        self.dispatcher.delete(&path).await
    }
}
