//! College football season arithmetic
//!
//! A season is named for the calendar year it kicks off in. Games run
//! August through early January, so dates from January through July still
//! belong to the season that started the previous year.

use chrono::{Datelike, Local, NaiveDate};

/// Season currently in progress (or most recently completed).
pub fn current_season() -> i32 {
    season_for(Local::now().date_naive())
}

/// Season a given calendar date falls in.
pub fn season_for(date: NaiveDate) -> i32 {
    if date.month() < 8 {
        date.year() - 1
    } else {
        date.year()
    }
}

/// The `count` most recent seasons, newest first, starting at `latest`.
///
/// Fallback cascades iterate this: try the current season, then walk
/// backwards until something hits.
pub fn recent_seasons(latest: i32, count: usize) -> Vec<i32> {
    (0..count as i32).map(|offset| latest - offset).collect()
}
