//! Player lookup service - the composition root
//!
//! Owns the optional provider handle and the season anchor, and wires the
//! resolver and enrichment layers into the public operations. A service
//! built without a provider (no API key) answers every call with
//! [`LookupError::Unavailable`] before any network activity.

use std::sync::Arc;

use crate::error::LookupError;
use crate::lookup::enrich::enrich_player;
use crate::lookup::resolver::resolve_identity;
use crate::lookup::suggest::rank_suggestions;
use crate::model::{join_name, PlayerCandidate, PlayerReport, PlayerSuggestion};
use crate::provider::{client, CfbdClient, PlayerDataProvider, PlayerSearchResult};
use crate::season;

/// Seasons walked when a roster query omits the year.
const ROSTER_SEASON_DEPTH: usize = 3;
/// Suggestions returned to the caller.
const MAX_SUGGESTIONS: usize = 3;
/// Search hits considered per suggestion pass.
const SUGGESTIONS_PER_SEARCH: usize = 5;
/// Name tokens shorter than this are too ambiguous to search on.
const MIN_SUGGESTION_TOKEN: usize = 3;

/// High-level lookup API over a [`PlayerDataProvider`].
pub struct PlayerLookupService {
    provider: Option<Arc<dyn PlayerDataProvider>>,
    current_season: i32,
}

impl PlayerLookupService {
    /// Create a service around an injected provider, anchored to the
    /// season in progress today.
    pub fn new(provider: Arc<dyn PlayerDataProvider>) -> Self {
        Self::with_season(provider, season::current_season())
    }

    /// Create a service anchored to a fixed season. Cascades count down
    /// from this year, so tests can pin it.
    pub fn with_season(provider: Arc<dyn PlayerDataProvider>, current_season: i32) -> Self {
        Self {
            provider: Some(provider),
            current_season,
        }
    }

    /// A service with no provider; every operation reports
    /// [`LookupError::Unavailable`].
    pub fn disabled() -> Self {
        Self {
            provider: None,
            current_season: season::current_season(),
        }
    }

    /// Build from the `CFB_DATA_API_KEY` environment variable. A missing
    /// key or a client that fails to construct yields a disabled service
    /// rather than an error, so callers can still surface a clean
    /// "unavailable" message.
    pub fn from_env() -> Self {
        let api_key = match std::env::var(client::API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => key,
            _ => {
                tracing::warn!("{} not set - player lookup disabled", client::API_KEY_ENV);
                return Self::disabled();
            }
        };

        match CfbdClient::new(api_key) {
            Ok(cfbd) => Self::new(Arc::new(cfbd)),
            Err(e) => {
                tracing::warn!("failed to build CFBD client: {e} - player lookup disabled");
                Self::disabled()
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.provider.is_some()
    }

    /// The season cascades count down from.
    pub fn current_season(&self) -> i32 {
        self.current_season
    }

    /// Resolve a player by name and enrich the hit with stats, recruiting
    /// and transfer data.
    ///
    /// `team` narrows the search (relaxed automatically if it yields
    /// nothing); `year` pins the search to one season instead of walking
    /// recent ones.
    pub async fn lookup_player(
        &self,
        name: &str,
        team: Option<&str>,
        year: Option<i32>,
    ) -> Result<PlayerReport, LookupError> {
        let provider = self.provider.as_deref().ok_or(LookupError::Unavailable)?;

        let name = name.trim();
        if name.is_empty() {
            return Err(LookupError::not_found(name));
        }

        let player = resolve_identity(provider, self.current_season, name, team, year)
            .await
            .ok_or_else(|| LookupError::not_found(name))?;

        let enrichment = enrich_player(provider, self.current_season, year, &player).await;

        Ok(PlayerReport { player, enrichment })
    }

    /// Full roster for a team. Without a year the recent seasons are
    /// walked until one returns players; an exhausted walk is an empty
    /// roster, not an error.
    pub async fn team_roster(
        &self,
        team: &str,
        year: Option<i32>,
    ) -> Result<Vec<PlayerCandidate>, LookupError> {
        let provider = self.provider.as_deref().ok_or(LookupError::Unavailable)?;

        let seasons = match year {
            Some(y) => vec![y],
            None => season::recent_seasons(self.current_season, ROSTER_SEASON_DEPTH),
        };

        for roster_season in seasons {
            match provider.get_roster(team, roster_season).await {
                Ok(players) if !players.is_empty() => {
                    tracing::debug!(team, season = roster_season, count = players.len(), "roster found");
                    return Ok(players.iter().map(PlayerCandidate::from_roster).collect());
                }
                Ok(_) => {
                    tracing::debug!(team, season = roster_season, "empty roster, trying next season");
                }
                Err(e) if e.is_fatal() => {
                    tracing::warn!(team, "roster fetch aborted: {e}");
                    return Ok(Vec::new());
                }
                Err(e) => {
                    tracing::warn!(team, season = roster_season, "roster fetch failed: {e}");
                }
            }
        }
        Ok(Vec::new())
    }

    /// "Did you mean?" candidates for a name that failed to resolve.
    ///
    /// Searches by last name (usually the more selective token), then by
    /// first name if more hits are needed, de-duplicates by provider id
    /// and ranks by similarity to the queried name. Provider errors
    /// degrade to whatever was collected before the failure.
    pub async fn find_similar(&self, name: &str) -> Vec<PlayerSuggestion> {
        let Some(provider) = self.provider.as_deref() else {
            return Vec::new();
        };

        let parts: Vec<&str> = name.split_whitespace().collect();
        let first_name = parts.first().copied().unwrap_or(name);
        let last_name = if parts.len() > 1 { parts[parts.len() - 1] } else { name };

        let mut suggestions: Vec<PlayerSuggestion> = Vec::new();
        let mut seen_ids: Vec<String> = Vec::new();
        let mut failed = false;

        // Last name first: it narrows the field better than a first name.
        if last_name.len() >= MIN_SUGGESTION_TOKEN {
            match provider.search_players(last_name, None, self.current_season).await {
                Ok(hits) => collect_suggestions(hits, &mut suggestions, &mut seen_ids),
                Err(e) => {
                    tracing::debug!("similar-player search failed: {e}");
                    failed = true;
                }
            }
        }

        if !failed && suggestions.len() < MAX_SUGGESTIONS && first_name.len() >= MIN_SUGGESTION_TOKEN
        {
            match provider.search_players(first_name, None, self.current_season).await {
                Ok(hits) => collect_suggestions(hits, &mut suggestions, &mut seen_ids),
                Err(e) => tracing::debug!("similar-player search failed: {e}"),
            }
        }

        rank_suggestions(name, &mut suggestions);
        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }
}

/// Fold one search's hits into the suggestion list, skipping hits with no
/// id and ids already collected.
fn collect_suggestions(
    hits: Vec<PlayerSearchResult>,
    suggestions: &mut Vec<PlayerSuggestion>,
    seen_ids: &mut Vec<String>,
) {
    for hit in hits.into_iter().take(SUGGESTIONS_PER_SEARCH) {
        let Some(id) = hit.id.as_ref().map(ToString::to_string) else {
            continue;
        };
        if seen_ids.contains(&id) {
            continue;
        }
        seen_ids.push(id.clone());
        suggestions.push(PlayerSuggestion {
            id,
            name: join_name(hit.first_name.as_deref(), hit.last_name.as_deref()),
            team: hit.team,
            position: hit.position,
            similarity_score: 0.0,
        });
    }
}

impl std::fmt::Debug for PlayerLookupService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerLookupService")
            .field("available", &self.is_available())
            .field("current_season", &self.current_season)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::provider::types::{PlayerSeasonStat, PortalTransfer, Recruit, RosterPlayer};
    use std::sync::Mutex;

    #[derive(Default)]
    struct StubProvider {
        search_hits: Vec<PlayerSearchResult>,
        roster_by_year: Vec<(i32, Vec<RosterPlayer>)>,
        search_terms: Mutex<Vec<String>>,
        roster_years: Mutex<Vec<i32>>,
    }

    #[async_trait::async_trait]
    impl PlayerDataProvider for StubProvider {
        async fn search_players(
            &self,
            name: &str,
            _team: Option<&str>,
            _year: i32,
        ) -> Result<Vec<PlayerSearchResult>, ProviderError> {
            self.search_terms.lock().unwrap().push(name.to_string());
            Ok(self.search_hits.clone())
        }

        async fn get_roster(
            &self,
            _team: &str,
            year: i32,
        ) -> Result<Vec<RosterPlayer>, ProviderError> {
            self.roster_years.lock().unwrap().push(year);
            Ok(self
                .roster_by_year
                .iter()
                .find(|(y, _)| *y == year)
                .map(|(_, roster)| roster.clone())
                .unwrap_or_default())
        }

        async fn get_season_stats(
            &self,
            _team: &str,
            _year: i32,
        ) -> Result<Vec<PlayerSeasonStat>, ProviderError> {
            Ok(Vec::new())
        }

        async fn get_recruits(&self, _year: i32) -> Result<Vec<Recruit>, ProviderError> {
            Ok(Vec::new())
        }

        async fn get_transfer_portal(
            &self,
            _year: i32,
        ) -> Result<Vec<PortalTransfer>, ProviderError> {
            Ok(Vec::new())
        }
    }

    fn search_hit(id: i32, first: &str, last: &str, team: &str) -> PlayerSearchResult {
        PlayerSearchResult {
            id: Some(id.into()),
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            team: Some(team.to_string()),
            position: Some("QB".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_disabled_service_short_circuits() {
        let service = PlayerLookupService::disabled();
        assert!(!service.is_available());

        let err = service.lookup_player("Bo Nix", None, None).await.unwrap_err();
        assert!(matches!(err, LookupError::Unavailable));

        let err = service.team_roster("Oregon", None).await.unwrap_err();
        assert!(matches!(err, LookupError::Unavailable));

        assert!(service.find_similar("Bo Nix").await.is_empty());
    }

    #[tokio::test]
    async fn test_blank_name_is_not_found_without_a_search() {
        let provider = Arc::new(StubProvider::default());
        let service = PlayerLookupService::with_season(provider.clone(), 2025);

        let err = service.lookup_player("   ", None, None).await.unwrap_err();
        assert!(matches!(err, LookupError::NotFound { .. }));
        assert!(provider.search_terms.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_roster_walks_seasons_until_one_has_players() {
        let provider = Arc::new(StubProvider {
            roster_by_year: vec![(
                2023,
                vec![RosterPlayer {
                    first_name: Some("Bo".to_string()),
                    last_name: Some("Nix".to_string()),
                    team: Some("Oregon".to_string()),
                    ..Default::default()
                }],
            )],
            ..Default::default()
        });
        let service = PlayerLookupService::with_season(provider.clone(), 2025);

        let roster = service.team_roster("Oregon", None).await.unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].name, "Bo Nix");
        assert_eq!(*provider.roster_years.lock().unwrap(), vec![2025, 2024, 2023]);
    }

    #[tokio::test]
    async fn test_roster_with_explicit_year_does_not_cascade() {
        let provider = Arc::new(StubProvider::default());
        let service = PlayerLookupService::with_season(provider.clone(), 2025);

        let roster = service.team_roster("Oregon", Some(2022)).await.unwrap();
        assert!(roster.is_empty());
        assert_eq!(*provider.roster_years.lock().unwrap(), vec![2022]);
    }

    #[tokio::test]
    async fn test_find_similar_searches_last_name_then_first_name() {
        let provider = Arc::new(StubProvider {
            // Two hits, one missing its id: only the real one survives.
            search_hits: vec![
                search_hit(1, "Beau", "Nix", "Oregon"),
                PlayerSearchResult {
                    first_name: Some("Jackson".to_string()),
                    last_name: Some("Nixon".to_string()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        });
        let service = PlayerLookupService::with_season(provider.clone(), 2025);

        let suggestions = service.find_similar("Beau Nix").await;
        // Both passes run (one hit < 3 wanted), both return the same id.
        assert_eq!(*provider.search_terms.lock().unwrap(), vec!["Nix", "Beau"]);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].name, "Beau Nix");
        assert_eq!(suggestions[0].id, "1");
        assert!(suggestions[0].similarity_score > 0.9);
    }

    #[tokio::test]
    async fn test_find_similar_skips_short_first_name() {
        let provider = Arc::new(StubProvider {
            search_hits: vec![search_hit(1, "Bo", "Nix", "Oregon")],
            ..Default::default()
        });
        let service = PlayerLookupService::with_season(provider.clone(), 2025);

        // "Bo" is below the token floor, so only the last name is searched.
        let suggestions = service.find_similar("Bo Nix").await;
        assert_eq!(*provider.search_terms.lock().unwrap(), vec!["Nix"]);
        assert_eq!(suggestions.len(), 1);
    }

    #[tokio::test]
    async fn test_find_similar_skips_short_tokens() {
        let provider = Arc::new(StubProvider::default());
        let service = PlayerLookupService::with_season(provider.clone(), 2025);

        // "Bo" is below the token floor on both passes.
        let suggestions = service.find_similar("Bo").await;
        assert!(suggestions.is_empty());
        assert!(provider.search_terms.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_similar_caps_and_ranks_results() {
        let provider = Arc::new(StubProvider {
            search_hits: vec![
                search_hit(1, "Jaxson", "Dart", "Ole Miss"),
                search_hit(2, "Bo", "Nix", "Oregon"),
                search_hit(3, "Beau", "Nixon", "Tulsa"),
                search_hit(4, "Boone", "Nixdorf", "Akron"),
                search_hit(5, "Bob", "Nixel", "Rice"),
            ],
            ..Default::default()
        });
        let service = PlayerLookupService::with_season(provider, 2025);

        let suggestions = service.find_similar("Bo Nix").await;
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        assert_eq!(suggestions[0].name, "Bo Nix");
    }
}
