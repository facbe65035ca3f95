//! Asana API client
//!
//! A client library for the Asana REST API, plus the `asana` command line
//! tool built on top of it.
//!
//! # Architecture
//!
//! - [`client`] - [`Client`]: credentials plus accessor constructors
//! - [`dispatcher`] - The [`Dispatcher`] transport contract and its HTTP
//!   implementation
//! - [`resources`] - Per-resource accessors (projects, tasks, users, ...)
//! - [`pagination`] - Cursor walking over collection endpoints
//! - [`models`] - Typed views over API records
//! - [`auth`] - Token and API-key credentials
//!
//! Accessors are deliberately thin: they build paths and forward to the
//! dispatcher, which makes every one of them testable against a recorded
//! fake without a network.
//!
//! # Example
//!
//! ```ignore
//! use asana::Client;
//! use serde_json::json;
//!
//! async fn demo() -> anyhow::Result<()> {
//!     let client = Client::from_env()?;
//!     let project = client
//!         .projects()
//!         .create_in_workspace(1337, &json!({ "name": "Roadmap" }))
//!         .await?;
//!     println!("created {}", project["id"]);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod dispatcher;
pub mod models;
pub mod pagination;
pub mod resources;

pub use auth::Credentials;
pub use client::Client;
pub use dispatcher::{format_api_error, Dispatcher, HttpDispatcher, Params, DEFAULT_BASE_URL};
pub use resources::ResourceId;
