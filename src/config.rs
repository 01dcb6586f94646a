use std::time::Duration;

use crate::year::Year;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_PAGE_SIZE: u32 = 100;
/// Pause between per-repository language requests.
pub const DEFAULT_PACING: Duration = Duration::from_millis(50);

/// Who and what a run reports on.
#[derive(Clone)]
pub struct Context {
    pub username: String,
    pub token: String,
    pub year: Year,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .field("year", &self.year)
            .finish()
    }
}

/// Transport and pacing knobs. `pacing` of zero disables the delay.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_base: String,
    pub page_size: u32,
    pub pacing: Duration,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            pacing: DEFAULT_PACING,
            user_agent: concat!("github-wrapped/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
