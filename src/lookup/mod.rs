//! Player Lookup Pipeline
//!
//! Turns a resolved query into a full report in two stages: a sequential
//! identity cascade, then a concurrent enrichment fan-out.
//!
//! ## Architecture
//!
//! ```text
//! Query: name="Bo Nix", team=Some("Oregon"), year=None
//!         │
//!         ▼
//! PlayerLookupService.lookup_player()
//!         │
//!         ├─► 1. Identity cascade (resolver)
//!         │       └─► search 2025, 2024, 2023 with team,
//!         │           then once more without it; stop at first hit
//!         │
//!         ├─► 2. Enrichment fan-out (enrich), three futures joined:
//!         │       ├─► season stats   (3 recent seasons, team-scoped)
//!         │       ├─► recruiting     (4 recent classes)
//!         │       └─► transfer portal (current + prior year)
//!         │
//!         └─► PlayerReport { player, enrichment }
//! ```
//!
//! Enrichment slots fail independently; a miss or error in one is logged
//! and leaves `None` without touching the others. Only identity resolution
//! can fail the whole lookup.

mod enrich;
mod resolver;
pub mod service;
pub mod suggest;

pub use service::PlayerLookupService;
pub use suggest::{is_fcs_school, not_found_reason};
