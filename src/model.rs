//! Normalized domain records
//!
//! Wire records from [`crate::provider::types`] are converted here, one
//! explicit conversion per endpoint shape. Conversions fill defaults rather
//! than guessing: a missing name becomes an empty string to be backfilled by
//! the resolver, a missing team stays `None` and downstream code decides
//! what that means.

use crate::provider::types::{NumOrString, PlayerSearchResult, PortalTransfer, Recruit, RosterPlayer};
use crate::stats::SeasonStats;
use serde::Serialize;

// =============================================================================
// CANDIDATE / RESOLVED PLAYER
// =============================================================================

/// One player as returned by search or roster endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerCandidate {
    pub id: Option<String>,
    /// Full display name. Empty when the provider sent nothing usable.
    pub name: String,
    pub team: Option<String>,
    pub position: Option<String>,
    /// Kept number-or-string: numeric heights are total inches, string
    /// heights ("6-2") pass through formatting verbatim.
    pub height: Option<NumOrString>,
    pub weight: Option<f64>,
    /// Class year. Arrives as a label or a number depending on endpoint.
    pub year: Option<NumOrString>,
    pub jersey: Option<NumOrString>,
    pub home_city: Option<String>,
    pub home_state: Option<String>,
    pub home_country: Option<String>,
}

impl PlayerCandidate {
    pub fn from_search(raw: &PlayerSearchResult) -> Self {
        let name = match raw.name.as_deref() {
            Some(n) if !n.trim().is_empty() => n.trim().to_string(),
            _ => join_name(raw.first_name.as_deref(), raw.last_name.as_deref()),
        };
        Self {
            id: raw.id.as_ref().map(ToString::to_string),
            name,
            team: raw.team.clone(),
            position: raw.position.clone(),
            height: raw.height.clone(),
            weight: raw.weight,
            year: raw.year.clone(),
            jersey: raw.jersey.clone(),
            home_city: raw.home_city.clone(),
            home_state: raw.home_state.clone(),
            home_country: raw.home_country.clone(),
        }
    }

    pub fn from_roster(raw: &RosterPlayer) -> Self {
        Self {
            id: raw.id.as_ref().map(ToString::to_string),
            name: join_name(raw.first_name.as_deref(), raw.last_name.as_deref()),
            team: raw.team.clone(),
            position: raw.position.clone(),
            height: raw.height.clone(),
            weight: raw.weight,
            year: raw.year.clone(),
            jersey: raw.jersey.clone(),
            home_city: raw.home_city.clone(),
            home_state: raw.home_state.clone(),
            home_country: raw.home_country.clone(),
        }
    }
}

/// The candidate the resolver settled on, plus the search context that
/// produced the hit. `team` is the filter that was in force (absent when the
/// query named no team or the relaxed retry found the player), `season` is
/// the year of the successful search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedPlayer {
    pub candidate: PlayerCandidate,
    pub team: Option<String>,
    pub season: Option<i32>,
}

// =============================================================================
// ENRICHMENT RECORDS
// =============================================================================

/// Recruiting profile from the class-year scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecruitingProfile {
    pub name: String,
    /// Program the prospect committed to.
    pub school: Option<String>,
    pub position: Option<String>,
    /// Star rating; zero means unrated.
    pub stars: i32,
    pub rating: Option<f64>,
    /// National composite rank.
    pub ranking: Option<i32>,
    pub state_rank: Option<i32>,
    pub position_rank: Option<i32>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub height: Option<NumOrString>,
    pub weight: Option<f64>,
    /// Recruiting class year the profile was found under.
    pub class_year: i32,
}

impl RecruitingProfile {
    pub fn from_recruit(raw: &Recruit, class_year: i32) -> Self {
        Self {
            name: raw.name.clone().unwrap_or_default(),
            school: raw.committed_to.clone(),
            position: raw.position.clone(),
            stars: raw.stars.unwrap_or(0),
            rating: raw.rating,
            ranking: raw.ranking,
            state_rank: raw.state_rank,
            position_rank: raw.position_rank,
            city: raw.city.clone(),
            state: raw.state_province.clone(),
            height: raw.height.clone(),
            weight: raw.weight,
            class_year,
        }
    }
}

/// Transfer portal entry for a player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferRecord {
    pub name: String,
    pub position: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub transfer_date: Option<String>,
    pub rating: Option<f64>,
    pub stars: Option<i32>,
    pub eligibility: Option<String>,
}

impl TransferRecord {
    pub fn from_portal(raw: &PortalTransfer) -> Self {
        Self {
            name: join_name(raw.first_name.as_deref(), raw.last_name.as_deref()),
            position: raw.position.clone(),
            origin: raw.origin.clone(),
            destination: raw.destination.clone(),
            transfer_date: raw.transfer_date.clone(),
            rating: raw.rating,
            stars: raw.stars,
            eligibility: raw.eligibility.clone(),
        }
    }
}

// =============================================================================
// AGGREGATE REPORT
// =============================================================================

/// What the concurrent enrichment pass produced. Each field is independent:
/// a failed or empty fetch leaves `None` without disturbing the others.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichmentBundle {
    pub stats: Option<SeasonStats>,
    pub recruiting: Option<RecruitingProfile>,
    pub transfer: Option<TransferRecord>,
}

/// The full answer to a player question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerReport {
    pub player: ResolvedPlayer,
    pub enrichment: EnrichmentBundle,
}

/// A did-you-mean candidate for a failed lookup. Search hits without an
/// id are never turned into suggestions, so `id` is always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSuggestion {
    pub id: String,
    pub name: String,
    pub team: Option<String>,
    pub position: Option<String>,
    /// Jaro-Winkler similarity against the queried name, 0.0..=1.0.
    pub similarity_score: f32,
}

/// First + last name, trimmed so a missing half leaves no stray space.
pub(crate) fn join_name(first: Option<&str>, last: Option<&str>) -> String {
    format!("{} {}", first.unwrap_or(""), last.unwrap_or(""))
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_conversion_prefers_combined_name() {
        let raw = PlayerSearchResult {
            id: Some(4430832.into()),
            name: Some("Bo Nix".to_string()),
            first_name: Some("Bo".to_string()),
            last_name: Some("Nix".to_string()),
            team: Some("Oregon".to_string()),
            ..Default::default()
        };
        let candidate = PlayerCandidate::from_search(&raw);
        assert_eq!(candidate.name, "Bo Nix");
        assert_eq!(candidate.id.as_deref(), Some("4430832"));
    }

    #[test]
    fn test_search_conversion_falls_back_to_name_parts() {
        let raw = PlayerSearchResult {
            first_name: Some("Dillon".to_string()),
            last_name: Some("Gabriel".to_string()),
            ..Default::default()
        };
        assert_eq!(PlayerCandidate::from_search(&raw).name, "Dillon Gabriel");

        let empty = PlayerSearchResult::default();
        assert_eq!(PlayerCandidate::from_search(&empty).name, "");
    }

    #[test]
    fn test_roster_conversion_assembles_name() {
        let raw = RosterPlayer {
            first_name: Some("Jalen".to_string()),
            last_name: None,
            team: Some("Alabama".to_string()),
            ..Default::default()
        };
        let candidate = PlayerCandidate::from_roster(&raw);
        assert_eq!(candidate.name, "Jalen");
        assert_eq!(candidate.team.as_deref(), Some("Alabama"));
    }

    #[test]
    fn test_recruit_conversion_defaults_stars_to_unrated() {
        let raw = Recruit {
            name: Some("Bryce Underwood".to_string()),
            committed_to: Some("Michigan".to_string()),
            stars: None,
            ..Default::default()
        };
        let profile = RecruitingProfile::from_recruit(&raw, 2025);
        assert_eq!(profile.stars, 0);
        assert_eq!(profile.school.as_deref(), Some("Michigan"));
        assert_eq!(profile.class_year, 2025);
    }

    #[test]
    fn test_transfer_conversion_joins_and_trims_name() {
        let raw = PortalTransfer {
            first_name: Some("Dillon".to_string()),
            last_name: None,
            origin: Some("Oklahoma".to_string()),
            ..Default::default()
        };
        assert_eq!(TransferRecord::from_portal(&raw).name, "Dillon");
    }
}
