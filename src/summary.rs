use crate::activity::ActivityCounts;
use crate::identity::Profile;
use crate::languages::LanguageTally;
use crate::repos::Repository;
use crate::year::Year;

pub const TOP_REPOSITORIES: usize = 5;

/// Everything the report shows, built once per run.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub user: Profile,
    pub year: Year,
    pub activity: ActivityCounts,
    /// Highest-starred repositories, best first.
    pub top_repositories: Vec<Repository>,
    pub repository_count: usize,
    /// Lifetime stars across every repository, forks included.
    pub total_stars: u64,
    pub languages: LanguageTally,
    pub top_language: Option<String>,
}

impl Summary {
    pub fn display_name(&self) -> &str {
        self.user.display_name()
    }

    pub fn commit_tier(&self) -> Option<CommitTier> {
        self.activity.commits.map(CommitTier::for_count)
    }

    pub fn pull_request_tier(&self) -> Option<PullRequestTier> {
        self.activity.pull_requests.map(PullRequestTier::for_count)
    }

    pub fn star_tier(&self) -> StarTier {
        StarTier::for_total(self.total_stars)
    }
}

/// Assemble the report. Pure: identical inputs give equal summaries.
///
/// `languages` is expected to be ranked already.
pub fn build(
    user: Profile,
    year: Year,
    activity: ActivityCounts,
    repositories: &[Repository],
    languages: LanguageTally,
) -> Summary {
    Summary {
        user,
        year,
        activity,
        top_repositories: top_repositories(repositories, TOP_REPOSITORIES),
        repository_count: repositories.len(),
        total_stars: total_stars(repositories),
        top_language: languages.top().map(str::to_string),
        languages,
    }
}

pub fn total_stars(repositories: &[Repository]) -> u64 {
    repositories
        .iter()
        .map(|r| r.star_count)
        .fold(0, u64::saturating_add)
}

/// The `limit` most-starred repositories; equal counts keep collection order.
pub fn top_repositories(repositories: &[Repository], limit: usize) -> Vec<Repository> {
    let mut ranked = repositories.to_vec();
    ranked.sort_by(|a, b| b.star_count.cmp(&a.star_count));
    ranked.truncate(limit);
    ranked
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitTier {
    LivedInTheTerminal,
    SolidYear,
    QualityOverQuantity,
}

impl CommitTier {
    pub fn for_count(commits: u64) -> Self {
        match commits {
            n if n > 1000 => Self::LivedInTheTerminal,
            n if n > 300 => Self::SolidYear,
            _ => Self::QualityOverQuantity,
        }
    }

    pub fn flavor(self) -> &'static str {
        match self {
            Self::LivedInTheTerminal => "You basically lived in the terminal. 🏠",
            Self::SolidYear => "Solid year of shipping. 💪",
            Self::QualityOverQuantity => "Quality over quantity. 🎯",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullRequestTier {
    ReviewingMachine,
    GreatCollaborator,
    ThoughtfulContributor,
}

impl PullRequestTier {
    pub fn for_count(pull_requests: u64) -> Self {
        match pull_requests {
            n if n > 200 => Self::ReviewingMachine,
            n if n > 50 => Self::GreatCollaborator,
            _ => Self::ThoughtfulContributor,
        }
    }

    pub fn flavor(self) -> &'static str {
        match self {
            Self::ReviewingMachine => "Reviewing machine. 🤖",
            Self::GreatCollaborator => "Great collaborator. 🤝",
            Self::ThoughtfulContributor => "Thoughtful contributor. 🧠",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarTier {
    Celebrity,
    Noticed,
    Starter,
    Unstarred,
}

impl StarTier {
    pub fn for_total(stars: u64) -> Self {
        match stars {
            0 => Self::Unstarred,
            1..=99 => Self::Starter,
            100..=999 => Self::Noticed,
            _ => Self::Celebrity,
        }
    }

    pub fn flavor(self) -> &'static str {
        match self {
            Self::Celebrity => "Open-source celebrity. 🌟",
            Self::Noticed => "People are noticing. 👀",
            Self::Starter => "Every star counts. ✨",
            Self::Unstarred => "Your first star is out there. 🔭",
        }
    }
}
