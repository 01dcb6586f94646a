//! Terminal rendering of a [`Summary`].
//!
//! Pure string building; the caller decides where the report goes. Sections
//! whose data was unavailable are left out rather than shown as zero.

use colored::Colorize;
use std::fmt::Write;

use crate::summary::Summary;

const ALIGN_WIDTH: usize = 48;
const DESCRIPTION_CHARS: usize = 55;
const TOP_LANGUAGES: usize = 6;
const NAME_COLUMN: usize = 22;
/// Percentage points per bar block.
const BAR_STEP: f64 = 2.5;

/// `key ....... value`, padded with dots to `align_width` characters.
pub fn build_stat_row(key: &str, value: &str, align_width: usize) -> (String, String, String) {
    let key_part = format!("{key} ");
    let base_len = key_part.chars().count() + value.chars().count();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        n => format!("{} ", ".".repeat(n - 1)),
    };

    (key_part, dots, value.to_string())
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("── {label} ");
    let dash_count = align_width.saturating_sub(base.chars().count());
    format!("{base}{}", "─".repeat(dash_count))
}

/// `1234567` -> `"1,234,567"`.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn bar(percent: f64) -> String {
    "█".repeat((percent / BAR_STEP).floor().max(0.0) as usize)
}

pub fn render(summary: &Summary) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, summary);
    out
}

fn write_report(out: &mut String, summary: &Summary) -> std::fmt::Result {
    let title = format!("✦  GitHub Wrapped {}  ✦", summary.year);
    let rule = "═".repeat(ALIGN_WIDTH);
    writeln!(out)?;
    writeln!(out, "{}", rule.magenta())?;
    writeln!(out, "{:^width$}", title.bold().magenta(), width = ALIGN_WIDTH)?;
    writeln!(out, "{}", rule.magenta())?;
    writeln!(out)?;
    writeln!(
        out,
        "  Hey {} 👋  Here's your year in code.",
        summary.display_name().bold().cyan()
    )?;
    writeln!(out)?;

    if let (Some(commits), Some(tier)) = (summary.activity.commits, summary.commit_tier()) {
        writeln!(out, "{}", build_header_line("Commits", ALIGN_WIDTH).yellow())?;
        let line = format!("🔥  {} commits", thousands(commits));
        writeln!(out, "  {}", line.bold().yellow())?;
        writeln!(out, "  {}", tier.flavor().dimmed())?;
        writeln!(out)?;
    }

    if let (Some(prs), Some(tier)) = (summary.activity.pull_requests, summary.pull_request_tier()) {
        writeln!(out, "{}", build_header_line("Pull Requests", ALIGN_WIDTH).green())?;
        let line = format!("🔀  {} pull requests", thousands(prs));
        writeln!(out, "  {}", line.bold().green())?;
        writeln!(out, "  {}", tier.flavor().dimmed())?;
        writeln!(out)?;
    }

    let stars_label = format!("⭐  Stars (lifetime total: {})", thousands(summary.total_stars));
    writeln!(out, "{}", build_header_line(&stars_label, ALIGN_WIDTH).blue())?;
    writeln!(out, "  {}", summary.star_tier().flavor().dimmed())?;
    for repo in &summary.top_repositories {
        let (key, dots, value) =
            build_stat_row(&repo.name, &repo.star_count.to_string(), ALIGN_WIDTH - 2);
        writeln!(out, "  {}{}{}", key.cyan(), dots.dimmed(), value.yellow())?;
        if let Some(desc) = repo.description.as_deref().filter(|d| !d.trim().is_empty()) {
            writeln!(out, "    {}", truncate_chars(desc, DESCRIPTION_CHARS).dimmed())?;
        }
    }
    writeln!(out)?;

    if !summary.languages.is_empty() {
        writeln!(out, "{}", build_header_line("💻  Languages", ALIGN_WIDTH).cyan())?;
        for share in summary.languages.shares(TOP_LANGUAGES) {
            let name = format!("{:<width$}", share.language, width = NAME_COLUMN);
            writeln!(
                out,
                "  {}{}  {}",
                name.bold().cyan(),
                bar(share.percent).magenta(),
                format!("{:.1}%", share.percent).dimmed()
            )?;
        }
        writeln!(out)?;
    }

    let top_language = summary.top_language.as_deref().unwrap_or("code");
    writeln!(
        out,
        "  {} {}{} {}",
        "Your go-to language was".dimmed(),
        top_language.bold().white(),
        ".".dimmed(),
        format!("Keep shipping in {}! 🚀", summary.year.next()).dimmed()
    )?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityCounts;
    use crate::identity::Profile;
    use crate::languages::LanguageTally;
    use crate::repos::Repository;
    use crate::summary::build;
    use crate::year::Year;

    fn summary(activity: ActivityCounts, languages: LanguageTally) -> Summary {
        let repos = vec![
            Repository {
                name: "wrapped".into(),
                is_fork: false,
                star_count: 1234,
                description: Some("x".repeat(80)),
            },
            Repository {
                name: "dotfiles".into(),
                is_fork: false,
                star_count: 3,
                description: None,
            },
        ];
        build(
            Profile {
                login: "octocat".into(),
                name: None,
            },
            Year::parse("2024").unwrap(),
            activity,
            &repos,
            languages.sorted(),
        )
    }

    fn plain(summary: &Summary) -> String {
        colored::control::set_override(false);
        render(summary)
    }

    #[test]
    fn absent_counts_are_omitted_not_zero() {
        let report = plain(&summary(ActivityCounts::default(), LanguageTally::new()));
        assert!(!report.contains("commits"));
        assert!(!report.contains("pull requests"));
        assert!(!report.contains("Languages"));
        assert!(report.contains("Your go-to language was code."));
    }

    #[test]
    fn renders_every_section() {
        let activity = ActivityCounts {
            commits: Some(1500),
            pull_requests: Some(0),
        };
        let tally: LanguageTally = [("Rust", 750), ("Go", 250)].into_iter().collect();
        let report = plain(&summary(activity, tally));

        assert!(report.contains("GitHub Wrapped 2024"));
        assert!(report.contains("Hey octocat"));
        assert!(report.contains("1,500 commits"));
        assert!(report.contains("You basically lived in the terminal."));
        assert!(report.contains("0 pull requests"));
        assert!(report.contains("lifetime total: 1,237"));
        assert!(report.contains(&format!("    {}\n", "x".repeat(55))));
        assert!(!report.contains(&"x".repeat(56)));
        assert!(report.contains(&format!("{}  75.0%", "█".repeat(30))));
        assert!(report.contains("25.0%"));
        assert!(report.contains("Your go-to language was Rust. Keep shipping in 2025!"));
    }

    #[test]
    fn stat_rows_align_to_width() {
        let (key, dots, value) = build_stat_row("repo", "42", 20);
        let row = format!("{key}{dots}{value}");
        assert_eq!(row.chars().count(), 20);
        assert!(row.starts_with("repo ..."));
        assert!(row.ends_with(" 42"));
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("hi", 5), "hi");
    }
}
