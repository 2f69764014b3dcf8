//! Player identity resolution
//!
//! Resolution is a two-pass, year-cascading search:
//!
//! 1. Search the requested year (or the three most recent seasons, newest
//!    first) with the caller's team filter applied.
//! 2. If nothing hit and a team filter was set, repeat the cascade without
//!    the filter - players move, and stale team knowledge should not hide
//!    them.
//!
//! Each pass stops at the first season returning candidates. A rejected
//! credential aborts everything immediately: no later year and no relaxed
//! retry can succeed with the same key.

use crate::model::{PlayerCandidate, ResolvedPlayer};
use crate::provider::types::PlayerSearchResult;
use crate::provider::PlayerDataProvider;
use crate::season;

/// Seasons walked per pass when the caller gave no year.
const SEARCH_SEASON_DEPTH: usize = 3;

/// Outcome of one cascade pass.
pub(crate) enum PassOutcome {
    /// Non-empty candidate list plus the season that produced it.
    Hits(Vec<PlayerSearchResult>, i32),
    /// Every season came back empty (or failed retryably).
    Exhausted,
    /// Credential rejected; abandon all searching.
    Aborted,
}

/// Resolve a name (plus optional team and year) to a single player.
pub(crate) async fn resolve_identity(
    provider: &dyn PlayerDataProvider,
    latest_season: i32,
    name: &str,
    team: Option<&str>,
    year: Option<i32>,
) -> Option<ResolvedPlayer> {
    let seasons = match year {
        Some(y) => vec![y],
        None => season::recent_seasons(latest_season, SEARCH_SEASON_DEPTH),
    };

    let mut team_in_force = team;
    let (hits, hit_season) = match search_pass(provider, name, team, &seasons).await {
        PassOutcome::Hits(hits, season) => (hits, season),
        PassOutcome::Aborted => return None,
        PassOutcome::Exhausted => {
            let team_filter = team?;
            tracing::debug!(name, team = team_filter, "no hits with team filter, retrying without");
            team_in_force = None;
            match search_pass(provider, name, None, &seasons).await {
                PassOutcome::Hits(hits, season) => (hits, season),
                PassOutcome::Aborted | PassOutcome::Exhausted => return None,
            }
        }
    };

    // Selection still prefers the queried team even when the relaxed pass
    // produced the hits.
    let mut candidate = select_candidate(&hits, team)?;
    if candidate.name.trim().is_empty() {
        candidate.name = name.to_string();
    }
    tracing::info!(
        player = %candidate.name,
        team = ?candidate.team,
        season = hit_season,
        "resolved player"
    );

    Some(ResolvedPlayer {
        candidate,
        team: team_in_force.map(str::to_string),
        season: Some(hit_season),
    })
}

/// Walk the season list with one filter configuration, stopping at the
/// first season that returns candidates.
pub(crate) async fn search_pass(
    provider: &dyn PlayerDataProvider,
    name: &str,
    team: Option<&str>,
    seasons: &[i32],
) -> PassOutcome {
    for &season in seasons {
        match provider.search_players(name, team, season).await {
            Ok(hits) if !hits.is_empty() => {
                tracing::debug!(name, season, count = hits.len(), "search hit");
                return PassOutcome::Hits(hits, season);
            }
            Ok(_) => {
                tracing::debug!(name, season, "no players found, trying earlier season");
            }
            Err(e) if e.is_fatal() => {
                tracing::warn!(name, season, "aborting search: {e}");
                return PassOutcome::Aborted;
            }
            Err(e) => {
                tracing::warn!(name, season, "search failed: {e}");
            }
        }
    }
    PassOutcome::Exhausted
}

/// Pick the best candidate: first one whose team contains the requested
/// team (case-insensitive), otherwise the first hit.
fn select_candidate(hits: &[PlayerSearchResult], team: Option<&str>) -> Option<PlayerCandidate> {
    if let Some(team) = team {
        let team_lower = team.to_lowercase();
        if let Some(hit) = hits.iter().find(|h| {
            h.team
                .as_deref()
                .map(|t| t.to_lowercase().contains(&team_lower))
                .unwrap_or(false)
        }) {
            return Some(PlayerCandidate::from_search(hit));
        }
    }
    hits.first().map(PlayerCandidate::from_search)
}
