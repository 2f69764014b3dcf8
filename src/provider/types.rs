//! Raw wire records from the CollegeFootballData API
//!
//! Every field is optional. The API omits fields freely, sends `null` for
//! others, and is inconsistent about whether ids, heights, jerseys and stat
//! values arrive as JSON numbers or strings. Decoding is lenient here;
//! [`crate::model`] owns the conversion to clean domain records.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// LENIENT SCALAR
// =============================================================================

/// A value the API emits inconsistently as number or string.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum NumOrString {
    Num(f64),
    Str(String),
}

impl NumOrString {
    /// The numeric value, only when the wire actually carried a JSON number.
    /// String payloads like `"6-2"` stay non-numeric even if digits appear.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Num(n) => Some(*n),
            Self::Str(_) => None,
        }
    }

    /// The numeric value, parsing strings that should have been numbers.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Num(n) => Some(*n),
            Self::Str(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for NumOrString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole numbers render without a trailing ".0" so ids and
            // jersey numbers read naturally.
            Self::Num(n) if n.fract() == 0.0 && n.abs() < 9e15 => write!(f, "{}", *n as i64),
            Self::Num(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for NumOrString {
    fn from(n: f64) -> Self {
        Self::Num(n)
    }
}

impl From<i32> for NumOrString {
    fn from(n: i32) -> Self {
        Self::Num(n as f64)
    }
}

impl From<&str> for NumOrString {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

// =============================================================================
// PLAYER SEARCH
// =============================================================================

/// One hit from `GET /player/search`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlayerSearchResult {
    pub id: Option<NumOrString>,
    pub name: Option<String>,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    pub team: Option<String>,
    pub position: Option<String>,
    pub height: Option<NumOrString>,
    pub weight: Option<f64>,
    pub year: Option<NumOrString>,
    pub jersey: Option<NumOrString>,
    #[serde(rename = "homeCity")]
    pub home_city: Option<String>,
    #[serde(rename = "homeState")]
    pub home_state: Option<String>,
    #[serde(rename = "homeCountry")]
    pub home_country: Option<String>,
}

// =============================================================================
// ROSTER
// =============================================================================

/// One player from `GET /roster`. Unlike search hits there is no combined
/// `name` field; callers assemble it from the parts.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RosterPlayer {
    pub id: Option<NumOrString>,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    pub team: Option<String>,
    pub position: Option<String>,
    pub height: Option<NumOrString>,
    pub weight: Option<f64>,
    pub year: Option<NumOrString>,
    pub jersey: Option<NumOrString>,
    #[serde(rename = "homeCity")]
    pub home_city: Option<String>,
    #[serde(rename = "homeState")]
    pub home_state: Option<String>,
    #[serde(rename = "homeCountry")]
    pub home_country: Option<String>,
}

// =============================================================================
// SEASON STATS
// =============================================================================

/// One stat row from `GET /stats/player/season`. The endpoint returns the
/// whole team-season: one row per player per category per stat label.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlayerSeasonStat {
    #[serde(rename = "playerId")]
    pub player_id: Option<NumOrString>,
    pub player: Option<String>,
    pub team: Option<String>,
    pub conference: Option<String>,
    /// Raw category label, e.g. "passing" or "kickReturns".
    pub category: Option<String>,
    /// Raw stat label, e.g. "YDS" or "completions". Kept verbatim.
    #[serde(rename = "statType")]
    pub stat_type: Option<String>,
    pub stat: Option<NumOrString>,
}

impl PlayerSeasonStat {
    /// Stat value as a number; strings are parsed, garbage counts as zero.
    pub fn stat_value(&self) -> f64 {
        self.stat.as_ref().and_then(NumOrString::to_f64).unwrap_or(0.0)
    }
}

// =============================================================================
// RECRUITING
// =============================================================================

/// One prospect from `GET /recruiting/players`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Recruit {
    pub id: Option<NumOrString>,
    #[serde(rename = "athleteId")]
    pub athlete_id: Option<NumOrString>,
    #[serde(rename = "recruitType")]
    pub recruit_type: Option<String>,
    pub year: Option<i32>,
    /// National composite ranking.
    pub ranking: Option<i32>,
    pub name: Option<String>,
    /// High school or academy the prospect came from.
    pub school: Option<String>,
    #[serde(rename = "committedTo")]
    pub committed_to: Option<String>,
    pub position: Option<String>,
    pub height: Option<NumOrString>,
    pub weight: Option<f64>,
    pub stars: Option<i32>,
    pub rating: Option<f64>,
    pub city: Option<String>,
    #[serde(rename = "stateProvince")]
    pub state_province: Option<String>,
    pub country: Option<String>,
    #[serde(rename = "stateRank")]
    pub state_rank: Option<i32>,
    #[serde(rename = "positionRank")]
    pub position_rank: Option<i32>,
}

// =============================================================================
// TRANSFER PORTAL
// =============================================================================

/// One entry from `GET /player/portal`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PortalTransfer {
    pub season: Option<i32>,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    #[serde(rename = "transferDate")]
    pub transfer_date: Option<String>,
    pub rating: Option<f64>,
    pub stars: Option<i32>,
    pub eligibility: Option<String>,
}

// =============================================================================
// TESTS
// =============================================================================
