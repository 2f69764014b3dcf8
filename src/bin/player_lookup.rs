//! Player Lookup CLI
//!
//! Resolves a free-text question into one aggregated player report.
//!
//! Usage:
//!   cargo run --bin player_lookup -- who is bo nix from oregon
//!   cargo run --bin player_lookup -- caleb downs --team "Ohio State"
//!   cargo run --bin player_lookup -- --roster oregon --year 2024
//!
//! Requires CFB_DATA_API_KEY (free key from collegefootballdata.com),
//! read from the environment or a .env file.

use anyhow::{bail, Result};
use clap::Parser;

use cfb_data::{
    format_report, not_found_reason, parse_player_query, LookupError, PlayerLookupService,
};

#[derive(Parser, Debug)]
#[command(name = "player_lookup")]
#[command(about = "Look up a college football player via the CFBD API")]
struct Args {
    /// Free-text query, e.g. "who is bo nix from oregon"
    #[arg(required = true)]
    query: Vec<String>,

    /// Team filter, overriding any team parsed from the query
    #[arg(long, short = 't')]
    team: Option<String>,

    /// Pin the search to one season instead of walking recent ones
    #[arg(long, short = 'y')]
    year: Option<i32>,

    /// Treat the query as a team name and print its roster
    #[arg(long)]
    roster: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();
    let text = args.query.join(" ");
    let service = PlayerLookupService::from_env();

    if args.roster {
        let team = args.team.as_deref().unwrap_or(&text);
        return print_roster(&service, team, args.year).await;
    }

    let query = parse_player_query(&text);
    if query.name.is_empty() {
        bail!("empty query - give me a player name");
    }
    let team = args.team.as_deref().or(query.team.as_deref());

    match service.lookup_player(&query.name, team, args.year).await {
        Ok(report) => {
            println!("{}", format_report(&report));
            Ok(())
        }
        Err(LookupError::NotFound { .. }) => {
            println!("❌ No players found matching '{}'", query.name);
            println!("{}", not_found_reason(team));

            let suggestions = service.find_similar(&query.name).await;
            if !suggestions.is_empty() {
                let rendered: Vec<String> = suggestions
                    .iter()
                    .map(|s| {
                        format!(
                            "{} ({}, {})",
                            s.name,
                            s.team.as_deref().unwrap_or("?"),
                            s.position.as_deref().unwrap_or("?"),
                        )
                    })
                    .collect();
                println!("💡 Did you mean: {}", rendered.join(", "));
            }
            Ok(())
        }
        Err(e @ LookupError::Unavailable) => {
            bail!("{e} - get a free key at collegefootballdata.com")
        }
    }
}

async fn print_roster(
    service: &PlayerLookupService,
    team: &str,
    year: Option<i32>,
) -> Result<()> {
    let roster = service.team_roster(team, year).await?;
    if roster.is_empty() {
        println!("❌ No roster found for '{team}'");
        return Ok(());
    }

    println!("🏈 **{team} Roster** ({} players)", roster.len());
    for player in &roster {
        let jersey = player
            .jersey
            .as_ref()
            .map(|j| format!("#{j} "))
            .unwrap_or_default();
        let position = player.position.as_deref().unwrap_or("?");
        println!("  {jersey}{} - {position}", player.name);
    }
    Ok(())
}
