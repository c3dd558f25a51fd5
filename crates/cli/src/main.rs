//! OctoVitals CLI
//!
//! Analyze and compare GitHub profiles from the terminal.

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use octovitals_engine::{AnalysisResult, Analyzer, Comparison, MetricWinner};
use octovitals_github::{GithubConfig, GithubProvider};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "ov")]
#[command(about = "OctoVitals - GitHub profile health analyzer")]
#[command(version)]
struct Cli {
    /// GitHub API token (defaults to the GITHUB_TOKEN environment variable)
    #[arg(long)]
    token: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a profile and print its health score
    Analyze {
        /// GitHub username
        username: String,
    },

    /// Compare two profiles metric by metric
    Compare {
        /// First GitHub username
        first: String,

        /// Second GitHub username
        second: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    // GithubConfig::default() picks up GITHUB_TOKEN; an explicit flag wins.
    let mut config = GithubConfig::default();
    if cli.token.is_some() {
        config.token = cli.token;
    }
    if config.token.is_none() {
        eprintln!("Warning: GITHUB_TOKEN not set. API rate limits will be restricted.");
    }

    let provider = GithubProvider::new(config)?;
    let analyzer = Analyzer::new(provider);
    let now = Utc::now();

    match cli.command {
        Commands::Analyze { username } => {
            let result = analyzer.analyze(&username, now).await?;
            print_analysis(&result);
        }
        Commands::Compare { first, second } => {
            let comparison = analyzer.compare(&first, &second, now).await?;
            print_comparison(&comparison);
        }
    }

    Ok(())
}

fn print_analysis(result: &AnalysisResult) {
    let user = &result.user;
    match user.display_name {
        Some(ref name) => println!("{} ({})", name, user.username),
        None => println!("{}", user.username),
    }
    println!(
        "Health Score: {} ({})",
        result.health.overall,
        result.health.rating()
    );
    println!();

    println!("{:<14} {:<7} {:<8} DETAIL", "CATEGORY", "SCORE", "WEIGHT");
    println!("{}", "-".repeat(70));
    for category in &result.health.breakdown {
        println!(
            "{:<14} {:<7} {:<8.2} {}",
            category.name, category.score, category.weight, category.detail
        );
    }

    if !result.repositories.top_repos.is_empty() {
        println!("\nTop Repositories:");
        for repo in &result.repositories.top_repos {
            println!(
                "  {:<30} ⭐{:<6} {}",
                repo.name,
                repo.stars,
                repo.language.as_deref().unwrap_or("-")
            );
        }
    }

    if !result.languages.top_languages.is_empty() {
        let shares: Vec<String> = result
            .languages
            .top_languages
            .iter()
            .map(|s| format!("{} {:.1}%", s.name, s.percentage))
            .collect();
        println!("\nLanguages: {}", shares.join(", "));
    }
}

fn print_comparison(comparison: &Comparison) {
    let first = &comparison.first.user.username;
    let second = &comparison.second.user.username;

    println!("{} vs {}", first, second);
    println!();
    println!("{:<16} {:<12} {:<12} WINNER", "METRIC", first, second);
    println!("{}", "-".repeat(56));

    let rows: [(&str, u64, u64, MetricWinner); 5] = [
        (
            "Followers",
            u64::from(comparison.first.user.followers),
            u64::from(comparison.second.user.followers),
            comparison.followers,
        ),
        (
            "Public repos",
            u64::from(comparison.first.user.public_repos),
            u64::from(comparison.second.user.public_repos),
            comparison.public_repos,
        ),
        (
            "Total stars",
            comparison.first.repositories.total_stars,
            comparison.second.repositories.total_stars,
            comparison.total_stars,
        ),
        (
            "Total forks",
            comparison.first.repositories.total_forks,
            comparison.second.repositories.total_forks,
            comparison.total_forks,
        ),
        (
            "Health score",
            u64::from(comparison.first.health.overall),
            u64::from(comparison.second.health.overall),
            comparison.health,
        ),
    ];

    for (metric, a, b, winner) in rows {
        let label = match winner {
            MetricWinner::First => first.as_str(),
            MetricWinner::Second => second.as_str(),
            MetricWinner::Tie => "tie",
        };
        println!("{:<16} {:<12} {:<12} {}", metric, a, b, label);
    }
}
