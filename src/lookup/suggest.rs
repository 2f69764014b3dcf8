//! "Did you mean?" support for failed lookups
//!
//! This module provides:
//! - Jaro-Winkler ranking of candidate suggestions against the query
//! - A static list of FCS schools, whose players the provider covers
//!   poorly, used to explain a miss instead of blaming the spelling

use crate::model::PlayerSuggestion;

/// Schools competing at the FCS level (partial list of common ones).
/// The provider's coverage below FBS is thin, so a miss on one of these
/// teams usually means missing data rather than a bad query.
const FCS_SCHOOLS: &[&str] = &[
    // Big Sky
    "montana",
    "montana state",
    "eastern washington",
    "weber state",
    "sacramento state",
    "uc davis",
    "northern arizona",
    "idaho state",
    "portland state",
    "cal poly",
    // CAA
    "delaware",
    "villanova",
    "james madison",
    "richmond",
    "william & mary",
    "towson",
    "elon",
    "rhode island",
    "maine",
    "new hampshire",
    "stony brook",
    // Ivy League
    "harvard",
    "yale",
    "princeton",
    "penn",
    "columbia",
    "brown",
    "dartmouth",
    "cornell",
    // MEAC
    "north carolina a&t",
    "nc a&t",
    "howard",
    "morgan state",
    "norfolk state",
    "south carolina state",
    "delaware state",
    "bethune-cookman",
    // Missouri Valley
    "north dakota state",
    "ndsu",
    "south dakota state",
    "sdsu",
    "northern iowa",
    "illinois state",
    "indiana state",
    "missouri state",
    "southern illinois",
    "youngstown state",
    "south dakota",
    "north dakota",
    // Ohio Valley
    "southeast missouri",
    "semo",
    "ut martin",
    "tennessee state",
    "tennessee tech",
    "eastern illinois",
    "murray state",
    "austin peay",
    "lindenwood",
    // Patriot League
    "lehigh",
    "lafayette",
    "bucknell",
    "colgate",
    "fordham",
    "georgetown",
    "holy cross",
    // SoCon
    "furman",
    "chattanooga",
    "etsu",
    "east tennessee",
    "east tennessee state",
    "mercer",
    "wofford",
    "the citadel",
    "citadel",
    "western carolina",
    "samford",
    "vmi",
    // Southland
    "mcneese",
    "nicholls",
    "nicholls state",
    "southeastern louisiana",
    "houston christian",
    "incarnate word",
    "lamar",
    // SWAC
    "jackson state",
    "southern",
    "grambling",
    "alcorn state",
    "alabama a&m",
    "alabama state",
    "prairie view",
    "arkansas pine bluff",
    "texas southern",
    // Big South / OVC / others
    "gardner-webb",
    "charleston southern",
    "presbyterian",
    "campbell",
    "north alabama",
    "kennesaw state",
    "monmouth",
    "sacred heart",
    "central connecticut",
    "duquesne",
    "long island",
    "liu",
    "wagner",
    "robert morris",
    "bryant",
    "merrimack",
    "st. francis",
    "stonehill",
    // Independent FCS
    "tarleton",
    "tarleton state",
    "dixie state",
    "utah tech",
];

/// Whether a team plays in the FCS, where provider coverage is limited.
pub fn is_fcs_school(team: &str) -> bool {
    if team.is_empty() {
        return false;
    }
    let team_lower = team.to_lowercase();
    FCS_SCHOOLS.contains(&team_lower.trim())
}

/// Human-readable explanation for a lookup miss.
pub fn not_found_reason(team: Option<&str>) -> String {
    if let Some(team) = team {
        if is_fcs_school(team) {
            return format!("⚠️ {team} is an FCS school - CFBD has limited FCS data");
        }
    }
    "❓ Player not in database - check spelling or try without team".to_string()
}

/// Order suggestions by Jaro-Winkler similarity to the query, best first.
/// Scores are written back onto each suggestion for display.
pub(crate) fn rank_suggestions(query: &str, suggestions: &mut [PlayerSuggestion]) {
    let query_lower = query.to_lowercase();
    for suggestion in suggestions.iter_mut() {
        suggestion.similarity_score =
            strsim::jaro_winkler(&query_lower, &suggestion.name.to_lowercase()) as f32;
    }
    suggestions.sort_by(|a, b| {
        b.similarity_score
            .partial_cmp(&a.similarity_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
