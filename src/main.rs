use anyhow::Context as _;
use clap::Parser;
use github_wrapped::cli::Cli;
use github_wrapped::{GithubClient, render};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("github_wrapped=warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌  {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    println!("\n🐙 GitHub Wrapped: let's see what you built!\n");
    let ctx = cli.resolve(&mut io::stdin().lock(), &mut io::stdout())?;
    let settings = cli.settings();

    let client =
        GithubClient::new(ctx.token.clone(), &settings).context("Failed to build HTTP client")?;
    let summary = github_wrapped::wrapped(&client, &ctx, &settings).await?;

    print!("{}", render::render(&summary));
    Ok(())
}
