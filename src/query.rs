//! Free-text player query parsing
//!
//! Turns chat-style questions ("what do you know about James Smith from
//! Alabama?") into a structured name + optional team. The parser is
//! deliberately shallow: strip mentions, strip one conversational prefix,
//! split name from team at the first recognized separator, title-case both.

use regex::Regex;
use std::sync::LazyLock;

// =============================================================================
// PATTERNS
// =============================================================================

/// Chat mention in angle-bracket form: `<@123456789>` or `<@!123456789>`
static BRACKET_MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<@!?\d+>").unwrap());

/// Bare `@name` mention
static BARE_MENTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@\w+").unwrap());

/// Conversational prefixes stripped from the front of a query. Order
/// matters: longer, more specific phrasings come before their shorter
/// substrings, and only the first match is removed.
const QUERY_PREFIXES: &[&str] = &[
    // Question formats
    "what do you know about",
    "what can you tell me about",
    "what are the stats for",
    "what are the stats on",
    "do you have info on",
    "do you have any info on",
    "can you tell me about",
    "can you look up",
    "can you find",
    "could you look up",
    "any info on",
    "got any info on",
    // Command formats
    "tell me about",
    "give me info on",
    "give me stats for",
    "give me stats on",
    "get me stats for",
    "get me stats on",
    "get me info on",
    "pull up",
    "pull stats for",
    "show me stats for",
    "show me stats on",
    "show me info on",
    "show me",
    "look up",
    "lookup",
    "find me",
    "find",
    // Simple formats
    "information on",
    "info on",
    "stats for",
    "stats on",
    "player info for",
    "player stats for",
    "player info",
    "player stats",
    "who is",
    "who's",
    "player",
];

/// Name/team separators, most specific first. The first separator found
/// anywhere in the query wins, and the query is split at that separator's
/// first occurrence.
const TEAM_SEPARATORS: &[&str] = &[
    " who plays for ",
    " that plays for ",
    " playing for ",
    " plays for ",
    " from ",
    " at ",
    " on ",
    ", ",
];

/// Leading articles dropped from a team name. Checked in order, each at
/// most once, so "the team tide" reduces to "tide".
const TEAM_ARTICLES: &[&str] = &["the ", "team "];

// =============================================================================
// PARSER
// =============================================================================

/// A parsed player question: who, and optionally where they play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerQuery {
    /// Title-cased player name. Empty when the input had no usable text.
    pub name: String,
    /// Title-cased team name, when the query named one.
    pub team: Option<String>,
}

/// Parse a free-text player question into a name and optional team.
///
/// ```
/// use cfb_data::query::parse_player_query;
///
/// let q = parse_player_query("what do you know about James Smith from Alabama");
/// assert_eq!(q.name, "James Smith");
/// assert_eq!(q.team.as_deref(), Some("Alabama"));
/// ```
pub fn parse_player_query(message: &str) -> PlayerQuery {
    let stripped = BRACKET_MENTION_RE.replace_all(message.trim(), "");
    let stripped = BARE_MENTION_RE.replace_all(&stripped, "");
    let mut query = stripped.to_lowercase().trim().to_string();

    // Only one prefix is removed; the list is ordered so the most specific
    // phrasing wins.
    for prefix in QUERY_PREFIXES {
        if let Some(rest) = query.strip_prefix(prefix) {
            query = rest.trim().to_string();
            break;
        }
    }

    let mut team: Option<String> = None;
    for separator in TEAM_SEPARATORS {
        if let Some(idx) = query.find(separator) {
            let after = query[idx + separator.len()..].trim().to_string();
            let before = query[..idx].trim().to_string();
            query = before;
            team = clean_team(&after);
            break;
        }
    }

    let parsed = PlayerQuery {
        name: title_case(&query),
        team: team.map(|t| title_case(&t)),
    };
    tracing::debug!(name = %parsed.name, team = ?parsed.team, "parsed player query");
    parsed
}

/// Drop leading articles and trailing punctuation from a raw team segment.
/// Returns `None` when nothing usable remains.
fn clean_team(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    let mut team = raw;
    for article in TEAM_ARTICLES {
        if let Some(rest) = team.strip_prefix(article) {
            team = rest;
        }
    }
    let team = team.trim_end_matches(['?', '.', '!']).trim();
    (!team.is_empty()).then(|| team.to_string())
}

/// Title-case in the classic "start of every letter run" sense: a letter
/// following a non-letter is uppercased, every other letter lowercased.
/// "ja'marr" becomes "Ja'Marr".
fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_was_letter = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if prev_was_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_was_letter = true;
        } else {
            out.push(c);
            prev_was_letter = false;
        }
    }
    out
}

// =============================================================================
// TESTS
// =============================================================================
