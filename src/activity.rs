//! Commit and pull-request counts for one calendar year.
//!
//! Both counts come from the search API, which may be rate-limited or not
//! available to the credential. Any failure yields `None` so that a missing
//! count never masquerades as zero.

use serde_json::Value;
use tracing::{info, warn};

use crate::platform::{ACCEPT_COMMIT_SEARCH, Platform};
use crate::year::Year;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityCounts {
    pub commits: Option<u64>,
    pub pull_requests: Option<u64>,
}

/// Commits authored by `username` with a committer date inside `year`.
pub async fn count_commits<P: Platform>(client: &P, username: &str, year: Year) -> Option<u64> {
    let query = format!("author:{username} committer-date:{}", year.search_range());
    search_total(client, "/search/commits", query, Some(ACCEPT_COMMIT_SEARCH)).await
}

/// Pull requests opened by `username` during `year`.
pub async fn count_pull_requests<P: Platform>(
    client: &P,
    username: &str,
    year: Year,
) -> Option<u64> {
    let query = format!("author:{username} type:pr created:{}", year.search_range());
    search_total(client, "/search/issues", query, None).await
}

pub async fn fetch_activity<P: Platform>(client: &P, username: &str, year: Year) -> ActivityCounts {
    let counts = ActivityCounts {
        commits: count_commits(client, username, year).await,
        pull_requests: count_pull_requests(client, username, year).await,
    };
    info!(?counts, "activity collected");
    counts
}

async fn search_total<P: Platform>(
    client: &P,
    endpoint: &str,
    query: String,
    accept: Option<&str>,
) -> Option<u64> {
    let params = [("q", query), ("per_page", "1".to_string())];
    match client.get(endpoint, &params, accept).await {
        Ok(resp) if resp.is_success() => Some(
            resp.body
                .get("total_count")
                .and_then(Value::as_u64)
                .unwrap_or(0),
        ),
        Ok(resp) => {
            warn!(endpoint, status = resp.status, "search unavailable");
            None
        }
        Err(e) => {
            warn!(endpoint, "search failed: {e}");
            None
        }
    }
}
