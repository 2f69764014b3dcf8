//! cfb-data - College football player lookup over the CFBD API
//!
//! This crate resolves a free-text question like "who is Bo Nix from
//! Oregon" into one aggregated player report. The pipeline:
//! Query Parser -> Identity Resolver -> Enrichment Fan-out -> Formatter
//!
//! Identity resolution walks recent seasons until a search hits (relaxing
//! the team filter if needed); enrichment then fetches season stats,
//! recruiting profile and transfer-portal status concurrently, with each
//! slot failing independently.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cfb_data::{format_report, parse_player_query, PlayerLookupService};
//!
//! # async fn run() -> Result<(), cfb_data::LookupError> {
//! let service = PlayerLookupService::from_env();
//! let query = parse_player_query("who is bo nix from oregon");
//! let report = service
//!     .lookup_player(&query.name, query.team.as_deref(), None)
//!     .await?;
//! println!("{}", format_report(&report));
//! # Ok(())
//! # }
//! ```

// Core error handling
pub mod error;

// Season arithmetic shared by every cascade
pub mod season;

// Free-text query parsing
pub mod query;

// CFBD HTTP client and raw wire records
pub mod provider;

// Clean domain records built from wire records
pub mod model;

// Stat-category normalization
pub mod stats;

// Identity resolution, enrichment and suggestions
pub mod lookup;

// Report rendering
pub mod format;

// Public re-exports for the lookup pipeline
pub use error::{LookupError, ProviderError};
pub use format::format_report;
pub use lookup::suggest::{is_fcs_school, not_found_reason};
pub use lookup::PlayerLookupService;
pub use model::{
    EnrichmentBundle, PlayerCandidate, PlayerReport, PlayerSuggestion, RecruitingProfile,
    ResolvedPlayer, TransferRecord,
};
pub use provider::{CfbdClient, PlayerDataProvider, API_KEY_ENV};
pub use query::{parse_player_query, PlayerQuery};
pub use season::{current_season, recent_seasons};
pub use stats::{normalize_stats, SeasonStats, StatCategory, StatMap};
