//! Scripted [`Platform`] for unit tests.

use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::platform::{ApiResponse, Platform};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub endpoint: String,
    pub params: Vec<(String, String)>,
    pub accept: Option<String>,
}

impl RecordedCall {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

enum Reply {
    Response(ApiResponse),
    Undecodable,
}

/// Replies are queued per endpoint and consumed in order; the last one
/// repeats. Unscripted endpoints answer 404.
#[derive(Default)]
pub struct FakePlatform {
    replies: Mutex<HashMap<String, VecDeque<Reply>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, endpoint: &str, status: u16, body: Value) -> Self {
        self.push(endpoint, Reply::Response(ApiResponse::new(status, body)))
    }

    /// Simulate a body that cannot be decoded, surfaced as `Err`.
    pub fn undecodable(self, endpoint: &str) -> Self {
        self.push(endpoint, Reply::Undecodable)
    }

    fn push(self, endpoint: &str, reply: Reply) -> Self {
        self.replies
            .lock()
            .unwrap()
            .entry(endpoint.to_string())
            .or_default()
            .push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, endpoint: &str) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.endpoint == endpoint)
            .collect()
    }
}

impl Platform for FakePlatform {
    async fn get(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
        accept: Option<&str>,
    ) -> Result<ApiResponse> {
        self.calls.lock().unwrap().push(RecordedCall {
            endpoint: endpoint.to_string(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            accept: accept.map(str::to_string),
        });

        let mut replies = self.replies.lock().unwrap();
        let Some(queue) = replies.get_mut(endpoint) else {
            return Ok(ApiResponse::new(404, Value::Null));
        };
        let reply = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().map(|r| match r {
                Reply::Response(resp) => Reply::Response(resp.clone()),
                Reply::Undecodable => Reply::Undecodable,
            })
        };

        match reply {
            Some(Reply::Response(resp)) => Ok(resp),
            Some(Reply::Undecodable) => Err(Error::Decode {
                context: format!("response from {endpoint}"),
                source: serde_json::from_str::<Value>("{").unwrap_err(),
            }),
            None => Ok(ApiResponse::new(404, Value::Null)),
        }
    }
}
