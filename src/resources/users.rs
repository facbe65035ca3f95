//! Users
//!
//! Accessor for user records. Users are read-only through the API.

use super::identifier::ResourceId;
use crate::dispatcher::{Dispatcher, Params};
use anyhow::Result;
use serde_json::Value;

/// Accessor for user resources.
pub struct Users<'a, D: Dispatcher + ?Sized> {
    /// The transport this accessor forwards to.
    pub dispatcher: &'a D,
}

impl<'a, D: Dispatcher + ?Sized> Users<'a, D> {
    /// Create an accessor over `dispatcher`.
    pub fn new(dispatcher: &'a D) -> Self {
        Self { dispatcher }
    }

    /// Fetch the authenticated user.
    pub async fn me(&self, params: Option<&Params>) -> Result<Value> {
        self.dispatcher.get("/users/me", params).await
    }

    /// Fetch a single user by numeric id. For the authenticated user, call
    /// [`me`](Users::me); the id goes through the usual numeric coercion.
    pub async fn find_by_id(
        &self,
        user_id: impl Into<ResourceId>,
        params: Option<&Params>,
    ) -> Result<Value> {
        let path = format!("/users/{}", user_id.into().path_segment());
        self.dispatcher.get(&path, params).await
    }

    /// List the users in a workspace.
    pub async fn find_by_workspace(
        &self,
        workspace_id: impl Into<ResourceId>,
        params: Option<&Params>,
    ) -> Result<Value> {
        let path = format!("/workspaces/{}/users", workspace_id.into().path_segment());
        self.dispatcher.get(&path, params).await
    }

    /// List all users visible to the caller.
    pub async fn find_all(&self, params: Option<&Params>) -> Result<Value> {
        self.dispatcher.get("/users", params).await
    }
}
