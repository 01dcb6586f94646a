//! Per-language byte totals across a user's own repositories.

use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::platform::Platform;
use crate::repos::Repository;

/// Cumulative bytes per language.
///
/// Entries keep the order in which languages were first seen until
/// [`LanguageTally::sorted`] ranks them; ties keep that first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageTally {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

/// One language's slice of the total.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageShare {
    pub language: String,
    pub bytes: u64,
    pub percent: f64,
}

impl LanguageTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `bytes` to `language`, creating the entry at zero first.
    pub fn add(&mut self, language: &str, bytes: u64) {
        match self.index.get(language) {
            Some(&i) => {
                let total = &mut self.entries[i].1;
                *total = total.saturating_add(bytes);
            }
            None => {
                self.index.insert(language.to_string(), self.entries.len());
                self.entries.push((language.to_string(), bytes));
            }
        }
    }

    /// Rank by bytes, descending. The sort is stable.
    pub fn sorted(mut self) -> Self {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, (lang, _))| (lang.clone(), i))
            .collect();
        self
    }

    pub fn get(&self, language: &str) -> Option<u64> {
        self.index.get(language).map(|&i| self.entries[i].1)
    }

    /// First entry; the largest once sorted.
    pub fn top(&self) -> Option<&str> {
        self.entries.first().map(|(lang, _)| lang.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(lang, bytes)| (lang.as_str(), *bytes))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_bytes(&self) -> u64 {
        self.entries.iter().map(|(_, b)| *b).fold(0, u64::saturating_add)
    }

    /// The first `limit` entries with their share of the total.
    pub fn shares(&self, limit: usize) -> Vec<LanguageShare> {
        let total = self.total_bytes();
        self.iter()
            .take(limit)
            .map(|(language, bytes)| LanguageShare {
                language: language.to_string(),
                bytes,
                percent: if total == 0 {
                    0.0
                } else {
                    bytes as f64 / total as f64 * 100.0
                },
            })
            .collect()
    }
}

impl<S: AsRef<str>> FromIterator<(S, u64)> for LanguageTally {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut tally = Self::new();
        for (lang, bytes) in iter {
            tally.add(lang.as_ref(), bytes);
        }
        tally
    }
}

/// Sum language bytes over every non-fork repository, then rank.
///
/// Requests run one after another with `pacing` between them. A repository
/// whose languages cannot be fetched is skipped.
pub async fn aggregate_languages<P: Platform>(
    client: &P,
    username: &str,
    repositories: &[Repository],
    pacing: Duration,
) -> LanguageTally {
    let own: Vec<&Repository> = repositories.iter().filter(|r| !r.is_fork).collect();
    info!(repos = own.len(), "crunching language stats");

    let mut tally = LanguageTally::new();
    for (i, repo) in own.iter().enumerate() {
        if i > 0 && !pacing.is_zero() {
            sleep(pacing).await;
        }

        let endpoint = format!("/repos/{username}/{}/languages", repo.name);
        let resp = match client.get(&endpoint, &[], None).await {
            Ok(resp) if resp.is_success() => resp,
            Ok(resp) => {
                warn!(repo = %repo.name, status = resp.status, "skipping languages");
                continue;
            }
            Err(e) => {
                warn!(repo = %repo.name, "skipping languages: {e}");
                continue;
            }
        };

        let Value::Object(map) = resp.body else {
            warn!(repo = %repo.name, "languages response is not an object");
            continue;
        };
        for (lang, bytes) in &map {
            match bytes.as_u64() {
                Some(bytes) => tally.add(lang, bytes),
                None => debug!(repo = %repo.name, lang = %lang, "ignoring non-integer byte count"),
            }
        }
    }

    tally.sorted()
}
