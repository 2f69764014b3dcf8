//! Season stat normalization
//!
//! The upstream season-stat endpoint returns a flat list of rows with
//! free-form category labels ("passing", "kickReturns", "interceptions",
//! ...). This module folds the rows for one player into a record with a
//! fixed seven-category shape so downstream formatting never has to guess
//! which keys exist.

use crate::provider::types::PlayerSeasonStat;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Values within one category, keyed by the provider's verbatim stat label
/// ("YDS", "completions", "TD", ...).
pub type StatMap = BTreeMap<String, f64>;

// =============================================================================
// CATEGORY TAXONOMY
// =============================================================================

/// The fixed stat category set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StatCategory {
    Passing,
    Rushing,
    Receiving,
    Defense,
    Kicking,
    Punting,
    Returns,
}

impl StatCategory {
    pub const ALL: [StatCategory; 7] = [
        StatCategory::Passing,
        StatCategory::Rushing,
        StatCategory::Receiving,
        StatCategory::Defense,
        StatCategory::Kicking,
        StatCategory::Punting,
        StatCategory::Returns,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Passing => "passing",
            Self::Rushing => "rushing",
            Self::Receiving => "receiving",
            Self::Defense => "defense",
            Self::Kicking => "kicking",
            Self::Punting => "punting",
            Self::Returns => "returns",
        }
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Category labels that mean defense but share no common substring.
const DEFENSIVE_LABELS: &[&str] = &["defense", "defensive", "tackles", "interceptions", "fumbles"];

/// Classify a raw category label. Rules are ordered and the first match
/// wins: "Kickoff Returns" contains both "kick" and "return" and lands in
/// `Returns` because the kicking and punting rules exclude return labels.
/// Labels matching no rule are dropped by the normalizer.
pub fn classify_category(label: &str) -> Option<StatCategory> {
    let category = label.to_lowercase();
    if category.contains("pass") {
        Some(StatCategory::Passing)
    } else if category.contains("rush") {
        Some(StatCategory::Rushing)
    } else if category.contains("receiv") {
        Some(StatCategory::Receiving)
    } else if DEFENSIVE_LABELS.contains(&category.as_str()) {
        Some(StatCategory::Defense)
    } else if category.contains("kick") && !category.contains("return") {
        Some(StatCategory::Kicking)
    } else if category.contains("punt") && !category.contains("return") {
        Some(StatCategory::Punting)
    } else if category.contains("return") {
        Some(StatCategory::Returns)
    } else {
        None
    }
}

// =============================================================================
// NORMALIZED RECORD
// =============================================================================

/// One player's normalized stats for one season. Every category is always
/// present; categories the player did not play are simply empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonStats {
    pub season: i32,
    pub passing: StatMap,
    pub rushing: StatMap,
    pub receiving: StatMap,
    pub defense: StatMap,
    pub kicking: StatMap,
    pub punting: StatMap,
    pub returns: StatMap,
}

impl SeasonStats {
    pub fn new(season: i32) -> Self {
        Self {
            season,
            passing: StatMap::new(),
            rushing: StatMap::new(),
            receiving: StatMap::new(),
            defense: StatMap::new(),
            kicking: StatMap::new(),
            punting: StatMap::new(),
            returns: StatMap::new(),
        }
    }

    pub fn category(&self, category: StatCategory) -> &StatMap {
        match category {
            StatCategory::Passing => &self.passing,
            StatCategory::Rushing => &self.rushing,
            StatCategory::Receiving => &self.receiving,
            StatCategory::Defense => &self.defense,
            StatCategory::Kicking => &self.kicking,
            StatCategory::Punting => &self.punting,
            StatCategory::Returns => &self.returns,
        }
    }

    fn category_mut(&mut self, category: StatCategory) -> &mut StatMap {
        match category {
            StatCategory::Passing => &mut self.passing,
            StatCategory::Rushing => &mut self.rushing,
            StatCategory::Receiving => &mut self.receiving,
            StatCategory::Defense => &mut self.defense,
            StatCategory::Kicking => &mut self.kicking,
            StatCategory::Punting => &mut self.punting,
            StatCategory::Returns => &mut self.returns,
        }
    }

    /// True when any category recorded a non-zero value. Year-fallback
    /// cascades use this to tell a real season from an empty placeholder.
    pub fn has_nonzero(&self) -> bool {
        StatCategory::ALL
            .iter()
            .any(|c| self.category(*c).values().any(|v| *v != 0.0))
    }
}

/// Fold raw stat rows (already filtered to one player) into the fixed
/// category record. Stat labels are kept verbatim as keys; string values
/// are parsed, with garbage counting as zero.
pub fn normalize_stats(season: i32, rows: &[PlayerSeasonStat]) -> SeasonStats {
    let mut stats = SeasonStats::new(season);
    for row in rows {
        let label = row.category.as_deref().unwrap_or("");
        let Some(category) = classify_category(label) else {
            continue;
        };
        let stat_type = row.stat_type.clone().unwrap_or_default();
        stats.category_mut(category).insert(stat_type, row.stat_value());
    }
    stats
}

// =============================================================================
// TESTS
// =============================================================================
