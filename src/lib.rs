//! Year-in-review summaries for GitHub accounts.
//!
//! The pipeline runs one way: identity, then repositories, activity and
//! languages, then a [`Summary`] for the renderer. Only the identity lookup
//! and the repository listing can abort a run; every other query degrades.

pub mod activity;
pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod identity;
pub mod languages;
pub mod platform;
pub mod render;
pub mod repos;
pub mod summary;
pub mod year;

#[cfg(test)]
mod testing;

use tracing::info;

pub use config::{Context, Settings};
pub use error::{Error, Result};
pub use github::GithubClient;
pub use platform::{ApiResponse, Platform};
pub use summary::Summary;
pub use year::Year;

/// Collect everything for `ctx` and build its summary.
pub async fn wrapped<P: Platform>(
    client: &P,
    ctx: &Context,
    settings: &Settings,
) -> Result<Summary> {
    info!(username = %ctx.username, year = %ctx.year, "connecting to GitHub");
    let user = identity::fetch_profile(client, &ctx.username).await?;

    info!("fetching repos, commits & PRs");
    let repositories = repos::collect_all(client, &ctx.username, settings.page_size).await?;
    let activity = activity::fetch_activity(client, &ctx.username, ctx.year).await;

    let languages =
        languages::aggregate_languages(client, &ctx.username, &repositories, settings.pacing)
            .await;

    Ok(summary::build(user, ctx.year, activity, &repositories, languages))
}
