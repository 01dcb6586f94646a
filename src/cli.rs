//! Command-line surface: flags first, then interactive prompts for anything
//! still missing.

use clap::Parser;
use std::io::{BufRead, Write};
use std::time::Duration;

use crate::config::{Context, DEFAULT_API_BASE, DEFAULT_PACING, Settings};
use crate::error::{Error, Result};
use crate::year::Year;

#[derive(Debug, Parser)]
#[command(name = "github-wrapped", version, about = "Your year on GitHub, wrapped.")]
pub struct Cli {
    /// GitHub username
    #[arg(short, long)]
    pub username: Option<String>,

    /// Personal access token
    #[arg(short, long, env = "ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Four-digit year to summarize (defaults to the current year when prompted)
    #[arg(short, long)]
    pub year: Option<String>,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_BASE)]
    pub api_url: String,

    /// Pause between per-repository language requests, in milliseconds
    #[arg(long, default_value_t = DEFAULT_PACING.as_millis() as u64)]
    pub pacing_ms: u64,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            api_base: self.api_url.clone(),
            pacing: Duration::from_millis(self.pacing_ms),
            ..Settings::default()
        }
    }

    /// Build the run context, prompting on `output` and reading from `input`
    /// for every value not given on the command line.
    pub fn resolve<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<Context> {
        let username = match non_empty(self.username.as_deref()) {
            Some(u) => u,
            None => prompt(input, output, "GitHub username: ")?,
        };
        if username.is_empty() {
            return Err(Error::Missing("username"));
        }

        let token = match non_empty(self.token.as_deref()) {
            Some(t) => t,
            None => prompt(input, output, "Personal access token: ")?,
        };
        if token.is_empty() {
            return Err(Error::Missing("token"));
        }

        let year = match self.year.as_deref() {
            Some(y) => Year::parse(y)?,
            None => {
                let current = Year::current();
                let answer = prompt(input, output, &format!("Year (e.g. {current}): "))?;
                if answer.is_empty() {
                    current
                } else {
                    Year::parse(&answer)?
                }
            }
        };

        Ok(Context {
            username,
            token,
            year,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<String> {
    write!(output, "{label}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
