//! Tasks
//!
//! Accessor for task resources: CRUD, scoped listings, subtasks and the
//! membership operations (projects, tags, followers, parent).

use super::identifier::ResourceId;
use crate::dispatcher::{Dispatcher, Params};
use anyhow::Result;
use serde_json::Value;

/// Accessor for task resources.
pub struct Tasks<'a, D: Dispatcher + ?Sized> {
    /// The transport this accessor forwards to.
    pub dispatcher: &'a D,
}

impl<'a, D: Dispatcher + ?Sized> Tasks<'a, D> {
    /// Create an accessor over `dispatcher`.
    pub fn new(dispatcher: &'a D) -> Self {
        Self { dispatcher }
    }

    /// Create a task from `data`. The payload must name a workspace.
    pub async fn create(&self, data: &Value) -> Result<Value> {
        self.dispatcher.post("/tasks", data).await
    }

    /// Create a task in a specific workspace.
    pub async fn create_in_workspace(
        &self,
        workspace_id: impl Into<ResourceId>,
        data: &Value,
    ) -> Result<Value> {
        let path = format!("/workspaces/{}/tasks", workspace_id.into().path_segment());
        self.dispatcher.post(&path, data).await
    }

    /// List all tasks visible to the caller.
    pub async fn find_all(&self, params: Option<&Params>) -> Result<Value> {
        self.dispatcher.get("/tasks", params).await
    }

    /// Fetch a single task.
    pub async fn find_by_id(
        &self,
        task_id: impl Into<ResourceId>,
        params: Option<&Params>,
    ) -> Result<Value> {
        let path = format!("/tasks/{}", task_id.into().path_segment());
        self.dispatcher.get(&path, params).await
    }

    /// List the tasks in a project.
    pub async fn find_by_project(
        &self,
        project_id: impl Into<ResourceId>,
        params: Option<&Params>,
    ) -> Result<Value> {
        let path = format!("/projects/{}/tasks", project_id.into().path_segment());
        self.dispatcher.get(&path, params).await
    }

    /// List the tasks carrying a tag.
    pub async fn find_by_tag(
        &self,
        tag_id: impl Into<ResourceId>,
        params: Option<&Params>,
    ) -> Result<Value> {
        let path = format!("/tags/{}/tasks", tag_id.into().path_segment());
        self.dispatcher.get(&path, params).await
    }

    /// Apply `data` to an existing task.
    pub async fn update(&self, task_id: impl Into<ResourceId>, data: &Value) -> Result<Value> {
        let path = format!("/tasks/{}", task_id.into().path_segment());
        self.dispatcher.put(&path, data).await
    }

    /// Delete a task.
    pub async fn delete(&self, task_id: impl Into<ResourceId>) -> Result<Value> {
        let path = format!("/tasks/{}", task_id.into().path_segment());
        self.dispatcher.delete(&path).await
    }

    /// List the subtasks of a task.
    pub async fn subtasks(
        &self,
        task_id: impl Into<ResourceId>,
        params: Option<&Params>,
    ) -> Result<Value> {
        let path = format!("/tasks/{}/subtasks", task_id.into().path_segment());
        self.dispatcher.get(&path, params).await
    }

    /// List the projects a task belongs to.
    pub async fn projects(
        &self,
        task_id: impl Into<ResourceId>,
        params: Option<&Params>,
    ) -> Result<Value> {
        let path = format!("/tasks/{}/projects", task_id.into().path_segment());
        self.dispatcher.get(&path, params).await
    }

    /// Add a task to a project. `data` names the project and position.
    pub async fn add_project(
        &self,
        task_id: impl Into<ResourceId>,
        data: &Value,
    ) -> Result<Value> {
        let path = format!("/tasks/{}/addProject", task_id.into().path_segment());
        self.dispatcher.post(&path, data).await
    }

    /// Remove a task from a project.
    pub async fn remove_project(
        &self,
        task_id: impl Into<ResourceId>,
        data: &Value,
    ) -> Result<Value> {
        let path = format!("/tasks/{}/removeProject", task_id.into().path_segment());
        self.dispatcher.post(&path, data).await
    }

    /// List the tags on a task.
    pub async fn tags(
        &self,
        task_id: impl Into<ResourceId>,
        params: Option<&Params>,
    ) -> Result<Value> {
        let path = format!("/tasks/{}/tags", task_id.into().path_segment());
        self.dispatcher.get(&path, params).await
    }

    /// Add a tag to a task.
    pub async fn add_tag(&self, task_id: impl Into<ResourceId>, data: &Value) -> Result<Value> {
        let path = format!("/tasks/{}/addTag", task_id.into().path_segment());
        self.dispatcher.post(&path, data).await
    }

    /// Remove a tag from a task.
    pub async fn remove_tag(
        &self,
        task_id: impl Into<ResourceId>,
        data: &Value,
    ) -> Result<Value> {
        let path = format!("/tasks/{}/removeTag", task_id.into().path_segment());
        self.dispatcher.post(&path, data).await
    }

    /// Add followers to a task.
    pub async fn add_followers(
        &self,
        task_id: impl Into<ResourceId>,
        data: &Value,
    ) -> Result<Value> {
        let path = format!("/tasks/{}/addFollowers", task_id.into().path_segment());
        self.dispatcher.post(&path, data).await
    }

    /// Remove followers from a task.
    pub async fn remove_followers(
        &self,
        task_id: impl Into<ResourceId>,
        data: &Value,
    ) -> Result<Value> {
        let path = format!("/tasks/{}/removeFollowers", task_id.into().path_segment());
        self.dispatcher.post(&path, data).await
    }

    /// Reparent a task. `data` names the new parent, or null to detach.
    pub async fn set_parent(
        &self,
        task_id: impl Into<ResourceId>,
        data: &Value,
    ) -> Result<Value> {
        let path = format!("/tasks/{}/setParent", task_id.into().path_segment());
        self.dispatcher.post(&path, data).await
    }
}
