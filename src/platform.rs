//! The seam between the aggregation pipeline and the hosting platform.
//!
//! Everything downstream talks to a [`Platform`], so tests can swap the real
//! HTTP client for a scripted one.

use serde_json::Value;
use std::future::Future;

use crate::error::Result;

pub const ACCEPT_JSON: &str = "application/vnd.github+json";
pub const ACCEPT_COMMIT_SEARCH: &str = "application/vnd.github.cloak-preview";

/// Status and decoded body of one API call.
///
/// Non-success statuses are returned, not raised; the caller decides whether
/// the failure is fatal.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait Platform {
    /// `GET` `endpoint` (a path such as `/users/octocat`) with query `params`.
    ///
    /// `accept` overrides the default `Accept` header. `Err` is reserved for
    /// transport failures and undecodable success bodies.
    fn get(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
        accept: Option<&str>,
    ) -> impl Future<Output = Result<ApiResponse>>;
}
