//! Teams

use super::identifier::ResourceId;
use crate::dispatcher::{Dispatcher, Params};
use anyhow::Result;
use serde_json::Value;

/// Accessor for team resources. Teams exist only inside organizations.
pub struct Teams<'a, D: Dispatcher + ?Sized> {
    /// The transport this accessor forwards to.
    pub dispatcher: &'a D,
}

impl<'a, D: Dispatcher + ?Sized> Teams<'a, D> {
    /// Create an accessor over `dispatcher`.
    pub fn new(dispatcher: &'a D) -> Self {
        Self { dispatcher }
    }

    /// Fetch a single team.
    pub async fn find_by_id(
        &self,
        team_id: impl Into<ResourceId>,
        params: Option<&Params>,
    ) -> Result<Value> {
        let path = format!("/teams/{}", team_id.into().path_segment());
        self.dispatcher.get(&path, params).await
    }

    /// List the teams in an organization workspace.
    pub async fn find_by_organization(
        &self,
        organization_id: impl Into<ResourceId>,
        params: Option<&Params>,
    ) -> Result<Value> {
        let path = format!("/organizations/{}/teams", organization_id.into().path_segment());
        self.dispatcher.get(&path, params).await
    }
}
