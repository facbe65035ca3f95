//! Resource accessors
//!
//! Thin, transport-agnostic accessors over the REST resources. Each one
//! borrows a [`Dispatcher`](crate::dispatcher::Dispatcher), builds the
//! resource path and forwards the call. No validation, no retries, no state
//! beyond the dispatcher reference; whatever the dispatcher returns, the
//! caller gets.
//!
//! # Module Structure
//!
//! - [`identifier`] - Identifier-to-path-segment coercion
//! - [`projects`] - Projects CRUD and workspace-scoped listing
//! - [`tasks`] - Tasks CRUD plus membership operations
//! - [`users`] - User lookup
//! - [`workspaces`] - Workspace listing and update
//! - [`tags`] - Tags CRUD
//! - [`stories`] - Task comment and activity feeds
//! - [`teams`] - Team lookup
//! - [`attachments`] - Attachment lookup

pub mod attachments;
pub mod identifier;
pub mod projects;
pub mod stories;
pub mod tags;
pub mod tasks;
pub mod teams;
pub mod users;
pub mod workspaces;

pub use attachments::Attachments;
pub use identifier::ResourceId;
pub use projects::Projects;
pub use stories::Stories;
pub use tags::Tags;
pub use tasks::Tasks;
pub use teams::Teams;
pub use users::Users;
pub use workspaces::Workspaces;
