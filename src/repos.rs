use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::platform::Platform;

/// An owned repository as listed by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(rename = "fork", default)]
    pub is_fork: bool,
    #[serde(rename = "stargazers_count", default)]
    pub star_count: u64,
    #[serde(default)]
    pub description: Option<String>,
}

/// Fetch every repository owned by `username`, one page at a time, until the
/// platform returns an empty page.
///
/// Pages are trusted as-is; duplicates across pages are kept.
pub async fn collect_all<P: Platform>(
    client: &P,
    username: &str,
    page_size: u32,
) -> Result<Vec<Repository>> {
    let endpoint = format!("/users/{username}/repos");
    let mut repos = Vec::new();
    let mut page = 1u32;

    loop {
        let params = [
            ("per_page", page_size.to_string()),
            ("page", page.to_string()),
            ("type", "owner".to_string()),
        ];
        let resp = client.get(&endpoint, &params, None).await?;
        if !resp.is_success() {
            return Err(Error::Api {
                endpoint,
                status: resp.status,
            });
        }

        let batch: Vec<Repository> =
            serde_json::from_value(resp.body).map_err(|source| Error::Decode {
                context: format!("repository page {page} for {username}"),
                source,
            })?;
        debug!(page, count = batch.len(), "repository page");

        if batch.is_empty() {
            break;
        }
        repos.extend(batch);
        page += 1;
    }

    Ok(repos)
}
