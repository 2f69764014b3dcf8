//! Report rendering
//!
//! Turns a [`PlayerReport`] into the display string callers show verbatim:
//! identity header, vitals, hometown, transfer banner, per-category stat
//! lines and the recruiting block, in that order. Pure and deterministic.
//!
//! Stat maps keep the provider's raw labels, and the provider is not
//! consistent about them, so every value here is probed under each known
//! spelling (abbreviated first, long form second).

use crate::model::PlayerReport;
use crate::provider::types::NumOrString;
use crate::stats::{SeasonStats, StatMap};

/// Render a full report. Missing fields are skipped or replaced with the
/// same placeholders the provider-facing layers use ("Unknown", "N/R").
pub fn format_report(report: &PlayerReport) -> String {
    let player = &report.player.candidate;
    let mut lines: Vec<String> = Vec::new();

    let team = player.team.as_deref().unwrap_or("Unknown");
    lines.push(format!("🏈 **{}** - {team}", player.name));

    let mut vitals: Vec<String> = Vec::new();
    if let Some(position) = &player.position {
        vitals.push(format!("**Position:** {position}"));
    }
    if let Some(jersey) = &player.jersey {
        vitals.push(format!("**#**{jersey}"));
    }
    if let Some(year) = &player.year {
        let year = year.to_string();
        if !year.is_empty() {
            vitals.push(format!("**Year:** {year}"));
        }
    }
    if let Some(height) = &player.height {
        vitals.push(format!("**{}**", format_height(height)));
    }
    if let Some(weight) = player.weight {
        vitals.push(format!("**{}lbs**", format_number(weight)));
    }
    if !vitals.is_empty() {
        lines.push(vitals.join(" | "));
    }

    let hometown: Vec<&str> = [player.home_city.as_deref(), player.home_state.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();
    if !hometown.is_empty() {
        lines.push(format!("📍 {}", hometown.join(", ")));
    }

    lines.push(String::new());

    if let Some(transfer) = &report.enrichment.transfer {
        let origin = transfer.origin.as_deref().unwrap_or("Unknown");
        let destination = transfer.destination.as_deref().unwrap_or("Unknown");
        lines.push(format!("🔄 **Transfer:** {origin} → {destination}"));
        if let Some(eligibility) = &transfer.eligibility {
            lines.push(format!("   Eligibility: {eligibility}"));
        }
        lines.push(String::new());
    }

    match &report.enrichment.stats {
        Some(stats) => {
            let stat_lines = category_lines(stats);
            if stat_lines.is_empty() {
                lines.push("📊 *No stats recorded*".to_string());
            } else {
                lines.push(format!("📊 **{} Season:**", stats.season));
                for line in stat_lines {
                    lines.push(format!("   {line}"));
                }
            }
        }
        None => lines.push("📊 *No stats available*".to_string()),
    }

    if let Some(recruiting) = &report.enrichment.recruiting {
        lines.push(String::new());

        let stars = if recruiting.stars > 0 {
            "⭐".repeat(recruiting.stars as usize)
        } else {
            "N/R".to_string()
        };
        match recruiting.rating {
            Some(rating) if rating != 0.0 => {
                lines.push(format!("🎯 **Recruiting:** {stars} ({rating:.4})"));
            }
            _ => lines.push(format!("🎯 **Recruiting:** {stars}")),
        }

        let mut ranks: Vec<String> = Vec::new();
        if let Some(ranking) = recruiting.ranking {
            ranks.push(format!("#{ranking} National"));
        }
        if let Some(position_rank) = recruiting.position_rank {
            let position = recruiting.position.as_deref().unwrap_or("Pos");
            ranks.push(format!("#{position_rank} {position}"));
        }
        if let Some(state_rank) = recruiting.state_rank {
            let state = recruiting.state.as_deref().unwrap_or("State");
            ranks.push(format!("#{state_rank} {state}"));
        }
        if !ranks.is_empty() {
            lines.push(format!("   {}", ranks.join(" | ")));
        }
    }

    lines.join("\n")
}

/// One display line per stat category that has anything worth showing.
fn category_lines(stats: &SeasonStats) -> Vec<String> {
    let mut lines = Vec::new();

    let completions = probe(&stats.passing, &["COMPLETIONS", "completions"]);
    let attempts = probe(&stats.passing, &["ATT", "attempts"]);
    let pass_yards = probe(&stats.passing, &["YDS", "yards"]);
    let pass_tds = probe(&stats.passing, &["TD", "touchdowns"]);
    let pass_ints = probe(&stats.passing, &["INT", "interceptions"]);
    if completions != 0.0 || pass_yards != 0.0 || pass_tds != 0.0 {
        lines.push(format!(
            "🏈 {}/{} | {} YDS | {} TD | {} INT",
            format_number(completions),
            format_number(attempts),
            format_number(pass_yards),
            format_number(pass_tds),
            format_number(pass_ints),
        ));
    }

    let carries = probe(&stats.rushing, &["CAR", "carries"]);
    let rush_yards = probe(&stats.rushing, &["YDS", "yards"]);
    let rush_tds = probe(&stats.rushing, &["TD", "touchdowns"]);
    if carries != 0.0 || rush_yards != 0.0 || rush_tds != 0.0 {
        lines.push(format!(
            "🏃 {} CAR | {} YDS | {} TD",
            format_number(carries),
            format_number(rush_yards),
            format_number(rush_tds),
        ));
    }

    let receptions = probe(&stats.receiving, &["REC", "receptions"]);
    let recv_yards = probe(&stats.receiving, &["YDS", "yards"]);
    let recv_tds = probe(&stats.receiving, &["TD", "touchdowns"]);
    if receptions != 0.0 || recv_yards != 0.0 || recv_tds != 0.0 {
        lines.push(format!(
            "🎯 {} REC | {} YDS | {} TD",
            format_number(receptions),
            format_number(recv_yards),
            format_number(recv_tds),
        ));
    }

    let tackles = probe(&stats.defense, &["TOT", "SOLO", "tackles"]);
    let solo = probe(&stats.defense, &["SOLO"]);
    let tfl = probe(&stats.defense, &["TFL"]);
    let sacks = probe(&stats.defense, &["SACKS", "SK"]);
    let def_ints = probe(&stats.defense, &["INT"]);
    if tackles != 0.0 || solo != 0.0 || tfl != 0.0 || sacks != 0.0 || def_ints != 0.0 {
        let mut parts: Vec<String> = Vec::new();
        if solo != 0.0 {
            parts.push(format!("{} Solo", format_number(solo)));
        }
        if tfl != 0.0 {
            parts.push(format!("{} TFL", format_number(tfl)));
        }
        if sacks != 0.0 {
            parts.push(format!("{} Sacks", format_number(sacks)));
        }
        if def_ints != 0.0 {
            parts.push(format!("{} INT", format_number(def_ints)));
        }
        lines.push(format!("🛡️ {}", parts.join(" | ")));
    }

    let fg_made = probe(&stats.kicking, &["FGM"]);
    let fg_att = probe(&stats.kicking, &["FGA"]);
    let xp_made = probe(&stats.kicking, &["XPM"]);
    if fg_made != 0.0 || fg_att != 0.0 || xp_made != 0.0 {
        lines.push(format!(
            "🦵 {}/{} FG | {} XP",
            format_number(fg_made),
            format_number(fg_att),
            format_number(xp_made),
        ));
    }

    lines
}

/// First value filed under any of the given label spellings, else zero.
fn probe(map: &StatMap, keys: &[&str]) -> f64 {
    keys.iter()
        .find_map(|key| map.get(*key))
        .copied()
        .unwrap_or(0.0)
}

/// Total inches become feet'inches" when the value is numeric and larger
/// than a foot; anything else (like a pre-formatted "6-2") passes through.
fn format_height(height: &NumOrString) -> String {
    match height.as_number() {
        Some(total) if total > 12.0 => {
            let total = total as i64;
            format!("{}'{}\"", total / 12, total % 12)
        }
        _ => height.to_string(),
    }
}

/// Counts render without a trailing ".0"; real fractions keep it.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 9e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
