//! Concurrent player enrichment
//!
//! Once an identity is resolved, three independent fetches run at the same
//! time: season stats, recruiting profile, transfer portal. The slots are
//! named and isolated - a failure or miss in one is logged and leaves
//! `None` in that slot without disturbing the others.

use crate::model::{join_name, EnrichmentBundle, RecruitingProfile, ResolvedPlayer, TransferRecord};
use crate::provider::PlayerDataProvider;
use crate::season;
use crate::stats::{normalize_stats, SeasonStats};

/// Seasons walked looking for a stat line.
const STATS_SEASON_DEPTH: usize = 3;
/// Recruiting classes walked looking for a profile.
const RECRUITING_CLASS_DEPTH: usize = 4;

/// Fetch all enrichment data for a resolved player concurrently.
///
/// `class_anchor` pins the recruiting cascade to a caller-supplied year;
/// without one the cascade counts down from the current season.
pub(crate) async fn enrich_player(
    provider: &dyn PlayerDataProvider,
    latest_season: i32,
    class_anchor: Option<i32>,
    player: &ResolvedPlayer,
) -> EnrichmentBundle {
    let name = player.candidate.name.as_str();
    let team = player.candidate.team.as_deref();

    let (stats, recruiting, transfer) = tokio::join!(
        fetch_stats(provider, latest_season, name, team),
        fetch_recruiting(provider, class_anchor.unwrap_or(latest_season), name),
        fetch_transfer(provider, latest_season, name),
    );

    EnrichmentBundle {
        stats,
        recruiting,
        transfer,
    }
}

/// Walk recent seasons for the player's team and stop at the first season
/// whose normalized stats carry any non-zero value. Without a team on
/// record there is nothing to query - the stats endpoint is team-scoped.
async fn fetch_stats(
    provider: &dyn PlayerDataProvider,
    latest_season: i32,
    name: &str,
    team: Option<&str>,
) -> Option<SeasonStats> {
    let Some(team) = team else {
        tracing::debug!(name, "no team on record, skipping stats");
        return None;
    };

    let name_lower = name.to_lowercase();
    for stat_season in season::recent_seasons(latest_season, STATS_SEASON_DEPTH) {
        let rows = match provider.get_season_stats(team, stat_season).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!(name, team, season = stat_season, "stats fetch failed: {e}");
                continue;
            }
        };

        let player_rows: Vec<_> = rows
            .into_iter()
            .filter(|row| {
                row.player
                    .as_deref()
                    .unwrap_or("")
                    .to_lowercase()
                    .contains(&name_lower)
            })
            .collect();
        if player_rows.is_empty() {
            continue;
        }

        let stats = normalize_stats(stat_season, &player_rows);
        if stats.has_nonzero() {
            tracing::debug!(name, season = stat_season, "found stat line");
            return Some(stats);
        }
    }
    None
}

/// Walk recent recruiting classes and stop at the first class containing a
/// case-insensitive substring match on the player's name.
async fn fetch_recruiting(
    provider: &dyn PlayerDataProvider,
    anchor_year: i32,
    name: &str,
) -> Option<RecruitingProfile> {
    let name_lower = name.to_lowercase();
    for class_year in season::recent_seasons(anchor_year, RECRUITING_CLASS_DEPTH) {
        let recruits = match provider.get_recruits(class_year).await {
            Ok(recruits) => recruits,
            Err(e) => {
                tracing::warn!(name, class_year, "recruiting fetch failed: {e}");
                continue;
            }
        };

        if let Some(hit) = recruits.iter().find(|r| {
            r.name
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(&name_lower)
        }) {
            tracing::debug!(name, class_year, "found recruiting profile");
            return Some(RecruitingProfile::from_recruit(hit, class_year));
        }
    }
    None
}

/// Scan the current portal year, then the prior one.
async fn fetch_transfer(
    provider: &dyn PlayerDataProvider,
    latest_season: i32,
    name: &str,
) -> Option<TransferRecord> {
    let name_lower = name.to_lowercase();
    for portal_year in [latest_season, latest_season - 1] {
        let transfers = match provider.get_transfer_portal(portal_year).await {
            Ok(transfers) => transfers,
            Err(e) => {
                tracing::warn!(name, portal_year, "transfer fetch failed: {e}");
                continue;
            }
        };

        if let Some(hit) = transfers.iter().find(|t| {
            join_name(t.first_name.as_deref(), t.last_name.as_deref())
                .to_lowercase()
                .contains(&name_lower)
        }) {
            tracing::debug!(name, portal_year, "found transfer entry");
            return Some(TransferRecord::from_portal(hit));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::model::PlayerCandidate;
    use crate::provider::types::{
        PlayerSearchResult, PlayerSeasonStat, PortalTransfer, Recruit, RosterPlayer,
    };
    use std::sync::Mutex;

    /// Scripted provider: each endpoint serves per-year canned data and
    /// records the years it was asked for.
    #[derive(Default)]
    struct StubProvider {
        stats: Vec<(i32, Vec<PlayerSeasonStat>)>,
        recruits: Vec<(i32, Vec<Recruit>)>,
        transfers: Vec<(i32, Vec<PortalTransfer>)>,
        fail_recruiting: bool,
        stats_calls: Mutex<Vec<i32>>,
        recruit_calls: Mutex<Vec<i32>>,
        transfer_calls: Mutex<Vec<i32>>,
    }

    impl StubProvider {
        fn for_year<T: Clone>(data: &[(i32, Vec<T>)], year: i32) -> Vec<T> {
            data.iter()
                .find(|(y, _)| *y == year)
                .map(|(_, rows)| rows.clone())
                .unwrap_or_default()
        }
    }

    #[async_trait::async_trait]
    impl PlayerDataProvider for StubProvider {
        async fn search_players(
            &self,
            _name: &str,
            _team: Option<&str>,
            _year: i32,
        ) -> Result<Vec<PlayerSearchResult>, ProviderError> {
            Ok(Vec::new())
        }

        async fn get_roster(
            &self,
            _team: &str,
            _year: i32,
        ) -> Result<Vec<RosterPlayer>, ProviderError> {
            Ok(Vec::new())
        }

        async fn get_season_stats(
            &self,
            _team: &str,
            year: i32,
        ) -> Result<Vec<PlayerSeasonStat>, ProviderError> {
            self.stats_calls.lock().unwrap().push(year);
            Ok(Self::for_year(&self.stats, year))
        }

        async fn get_recruits(&self, year: i32) -> Result<Vec<Recruit>, ProviderError> {
            self.recruit_calls.lock().unwrap().push(year);
            if self.fail_recruiting {
                return Err(ProviderError::Status {
                    status: 500,
                    body: "server error".to_string(),
                });
            }
            Ok(Self::for_year(&self.recruits, year))
        }

        async fn get_transfer_portal(
            &self,
            year: i32,
        ) -> Result<Vec<PortalTransfer>, ProviderError> {
            self.transfer_calls.lock().unwrap().push(year);
            Ok(Self::for_year(&self.transfers, year))
        }
    }

    fn resolved(name: &str, team: Option<&str>) -> ResolvedPlayer {
        ResolvedPlayer {
            candidate: PlayerCandidate {
                name: name.to_string(),
                team: team.map(str::to_string),
                ..Default::default()
            },
            team: team.map(str::to_string),
            season: Some(2025),
        }
    }

    fn stat_row(player: &str, category: &str, stat_type: &str, value: f64) -> PlayerSeasonStat {
        PlayerSeasonStat {
            player: Some(player.to_string()),
            category: Some(category.to_string()),
            stat_type: Some(stat_type.to_string()),
            stat: Some(value.into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_stats_are_skipped_without_a_team() {
        let provider = StubProvider::default();
        let bundle = enrich_player(&provider, 2025, None, &resolved("Bo Nix", None)).await;
        assert!(bundle.stats.is_none());
        assert!(provider.stats_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_stats_cascade_stops_at_first_season_with_real_values() {
        let provider = StubProvider {
            stats: vec![
                (2025, vec![stat_row("Bo Nix", "passing", "YDS", 0.0)]),
                (2024, vec![stat_row("Bo Nix", "passing", "YDS", 4508.0)]),
                (2023, vec![stat_row("Bo Nix", "passing", "YDS", 3593.0)]),
            ],
            ..Default::default()
        };
        let bundle = enrich_player(&provider, 2025, None, &resolved("Bo Nix", Some("Oregon"))).await;

        let stats = bundle.stats.expect("expected a stat line");
        assert_eq!(stats.season, 2024);
        assert_eq!(stats.passing.get("YDS"), Some(&4508.0));
        // The all-zero 2025 season kept the cascade going; 2023 was never hit.
        assert_eq!(*provider.stats_calls.lock().unwrap(), vec![2025, 2024]);
    }

    #[tokio::test]
    async fn test_stats_ignore_rows_for_other_players() {
        let provider = StubProvider {
            stats: vec![(2025, vec![stat_row("Jalen Milroe", "passing", "YDS", 2844.0)])],
            ..Default::default()
        };
        let bundle = enrich_player(&provider, 2025, None, &resolved("Bo Nix", Some("Oregon"))).await;
        assert!(bundle.stats.is_none());
    }

    #[tokio::test]
    async fn test_recruiting_failure_leaves_other_slots_alone() {
        let provider = StubProvider {
            fail_recruiting: true,
            transfers: vec![(
                2025,
                vec![PortalTransfer {
                    first_name: Some("Bo".to_string()),
                    last_name: Some("Nix".to_string()),
                    origin: Some("Auburn".to_string()),
                    destination: Some("Oregon".to_string()),
                    ..Default::default()
                }],
            )],
            ..Default::default()
        };
        let bundle = enrich_player(&provider, 2025, None, &resolved("Bo Nix", None)).await;

        assert!(bundle.recruiting.is_none());
        let transfer = bundle.transfer.expect("expected transfer entry");
        assert_eq!(transfer.destination.as_deref(), Some("Oregon"));
        // Errors keep the class cascade walking to its full depth.
        assert_eq!(
            *provider.recruit_calls.lock().unwrap(),
            vec![2025, 2024, 2023, 2022]
        );
    }

    #[tokio::test]
    async fn test_recruiting_stops_at_first_matching_class() {
        let someone_else = Recruit {
            name: Some("Arch Manning".to_string()),
            ..Default::default()
        };
        let the_match = Recruit {
            name: Some("Bo Nix".to_string()),
            committed_to: Some("Auburn".to_string()),
            stars: Some(4),
            ..Default::default()
        };
        let provider = StubProvider {
            recruits: vec![(2024, vec![someone_else]), (2023, vec![the_match])],
            ..Default::default()
        };
        let bundle = enrich_player(&provider, 2025, None, &resolved("Bo Nix", None)).await;

        let profile = bundle.recruiting.expect("expected recruiting profile");
        assert_eq!(profile.class_year, 2023);
        assert_eq!(profile.stars, 4);
        assert_eq!(*provider.recruit_calls.lock().unwrap(), vec![2025, 2024, 2023]);
    }

    #[tokio::test]
    async fn test_recruiting_cascade_anchors_at_supplied_year() {
        let provider = StubProvider {
            recruits: vec![(
                2019,
                vec![Recruit {
                    name: Some("Bo Nix".to_string()),
                    committed_to: Some("Auburn".to_string()),
                    stars: Some(4),
                    ..Default::default()
                }],
            )],
            ..Default::default()
        };
        let bundle = enrich_player(&provider, 2025, Some(2019), &resolved("Bo Nix", None)).await;

        let profile = bundle.recruiting.expect("expected recruiting profile");
        assert_eq!(profile.class_year, 2019);
        // The caller's year anchors the class cascade; recent classes are
        // never scanned.
        assert_eq!(*provider.recruit_calls.lock().unwrap(), vec![2019]);
    }

    #[tokio::test]
    async fn test_transfer_retries_prior_year_once() {
        let provider = StubProvider {
            transfers: vec![(
                2024,
                vec![PortalTransfer {
                    first_name: Some("Dillon".to_string()),
                    last_name: Some("Gabriel".to_string()),
                    origin: Some("Oklahoma".to_string()),
                    destination: Some("Oregon".to_string()),
                    ..Default::default()
                }],
            )],
            ..Default::default()
        };
        let bundle = enrich_player(&provider, 2025, None, &resolved("Dillon Gabriel", None)).await;

        assert!(bundle.transfer.is_some());
        assert_eq!(*provider.transfer_calls.lock().unwrap(), vec![2025, 2024]);
    }
}
