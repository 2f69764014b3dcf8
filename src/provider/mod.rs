//! Upstream player data access
//!
//! This module provides:
//! - Raw wire record types for each CollegeFootballData endpoint
//! - `PlayerDataProvider`, the seam the lookup pipeline is written against
//! - `CfbdClient`, the production HTTP implementation

pub mod client;
pub mod types;

pub use client::{CfbdClient, API_KEY_ENV};
pub use types::*;

use crate::error::ProviderError;
use async_trait::async_trait;

/// Read access to the upstream college football data source.
///
/// Year parameters are explicit on every call. Cascade policy - which years
/// to try and in what order - belongs to the lookup layer, not the provider.
#[async_trait]
pub trait PlayerDataProvider: Send + Sync {
    /// Search players by name, optionally filtered to one team.
    async fn search_players(
        &self,
        name: &str,
        team: Option<&str>,
        year: i32,
    ) -> Result<Vec<PlayerSearchResult>, ProviderError>;

    /// Full roster for a team season.
    async fn get_roster(&self, team: &str, year: i32) -> Result<Vec<RosterPlayer>, ProviderError>;

    /// Every per-player stat row for a team season.
    async fn get_season_stats(
        &self,
        team: &str,
        year: i32,
    ) -> Result<Vec<PlayerSeasonStat>, ProviderError>;

    /// National recruiting class for a year.
    async fn get_recruits(&self, year: i32) -> Result<Vec<Recruit>, ProviderError>;

    /// Transfer portal entries for a year.
    async fn get_transfer_portal(&self, year: i32) -> Result<Vec<PortalTransfer>, ProviderError>;
}
