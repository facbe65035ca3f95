//! Shared test support: dispatcher fakes that record or fail calls instead
//! of performing HTTP.

#![allow(dead_code)]

use asana::{Dispatcher, Params};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;

/// One recorded dispatcher call, verb by verb.
///
/// `Get` keeps the params exactly as received: `None` when the caller sent
/// none, so forwarding tests can tell "absent" from "empty".
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Get { path: String, params: Option<Params> },
    Post { path: String, data: Value },
    Put { path: String, data: Value },
    Delete { path: String },
}

/// Dispatcher stand-in that records every call and replies with a canned
/// payload.
pub struct RecordingDispatcher {
    calls: Mutex<Vec<Call>>,
    response: Value,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::with_response(Value::Null)
    }

    /// Record calls and answer each one with `response`.
    pub fn with_response(response: Value) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            response,
        }
    }

    /// Every call recorded so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> anyhow::Result<Value> {
        self.calls.lock().unwrap().push(call);
        Ok(self.response.clone())
    }
}

impl Default for RecordingDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Dispatcher for RecordingDispatcher {
    async fn get(&self, path: &str, params: Option<&Params>) -> anyhow::Result<Value> {
        self.record(Call::Get {
            path: path.to_string(),
            params: params.cloned(),
        })
    }

    async fn post(&self, path: &str, data: &Value) -> anyhow::Result<Value> {
        self.record(Call::Post {
            path: path.to_string(),
            data: data.clone(),
        })
    }

    async fn put(&self, path: &str, data: &Value) -> anyhow::Result<Value> {
        self.record(Call::Put {
            path: path.to_string(),
            data: data.clone(),
        })
    }

    async fn delete(&self, path: &str) -> anyhow::Result<Value> {
        self.record(Call::Delete {
            path: path.to_string(),
        })
    }
}

/// Dispatcher stand-in that fails every call with the same message.
pub struct FailingDispatcher {
    pub message: &'static str,
}

#[async_trait]
impl Dispatcher for FailingDispatcher {
    async fn get(&self, _path: &str, _params: Option<&Params>) -> anyhow::Result<Value> {
        anyhow::bail!("{}", self.message)
    }

    async fn post(&self, _path: &str, _data: &Value) -> anyhow::Result<Value> {
        anyhow::bail!("{}", self.message)
    }

    async fn put(&self, _path: &str, _data: &Value) -> anyhow::Result<Value> {
        anyhow::bail!("{}", self.message)
    }

    async fn delete(&self, _path: &str) -> anyhow::Result<Value> {
        anyhow::bail!("{}", self.message)
    }
}
