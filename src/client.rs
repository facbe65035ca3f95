//! Client
//!
//! Ties an [`HttpDispatcher`] to the resource accessors: one client, one
//! set of credentials. Accessors borrow the client's dispatcher, so they
//! are cheap to create on demand and never outlive it.

use crate::auth::Credentials;
use crate::dispatcher::HttpDispatcher;
use crate::resources::{
    Attachments, Projects, Stories, Tags, Tasks, Teams, Users, Workspaces,
};
use anyhow::Result;

/// Entry point for talking to the API.
///
/// ```ignore
/// let client = asana::Client::from_env()?;
/// let me = client.users().me(None).await?;
/// ```
#[derive(Clone)]
pub struct Client {
    /// The dispatcher all accessors from this client forward to.
    pub dispatcher: HttpDispatcher,
}

impl Client {
    /// Wrap an existing dispatcher.
    pub fn new(dispatcher: HttpDispatcher) -> Self {
        Self { dispatcher }
    }

    /// Client authenticated with a personal access token or OAuth bearer
    /// token.
    pub fn oauth(token: &str) -> Result<Self> {
        Ok(Self::new(HttpDispatcher::new(Credentials::access_token(token)?)?))
    }

    /// Client authenticated with a legacy API key.
    pub fn basic_auth(api_key: &str) -> Result<Self> {
        Ok(Self::new(HttpDispatcher::new(Credentials::api_key(api_key)?)?))
    }

    /// Client with credentials resolved from the environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(HttpDispatcher::new(Credentials::from_env()?)?))
    }

    /// Projects accessor.
    pub fn projects(&self) -> Projects<'_, HttpDispatcher> {
        Projects::new(&self.dispatcher)
    }

    /// Tasks accessor.
    pub fn tasks(&self) -> Tasks<'_, HttpDispatcher> {
        Tasks::new(&self.dispatcher)
    }

    /// Users accessor.
    pub fn users(&self) -> Users<'_, HttpDispatcher> {
        Users::new(&self.dispatcher)
    }

    /// Workspaces accessor.
    pub fn workspaces(&self) -> Workspaces<'_, HttpDispatcher> {
        Workspaces::new(&self.dispatcher)
    }

    /// Tags accessor.
    pub fn tags(&self) -> Tags<'_, HttpDispatcher> {
        Tags::new(&self.dispatcher)
    }

    /// Stories accessor.
    pub fn stories(&self) -> Stories<'_, HttpDispatcher> {
        Stories::new(&self.dispatcher)
    }

    /// Teams accessor.
    pub fn teams(&self) -> Teams<'_, HttpDispatcher> {
        Teams::new(&self.dispatcher)
    }

    /// Attachments accessor.
    pub fn attachments(&self) -> Attachments<'_, HttpDispatcher> {
        Attachments::new(&self.dispatcher)
    }
}
