//! Human-readable rank, win-rate and rank-window strings.

use riftteam_api::types::{Division, Tier};

use crate::labels::{tier_label, tier_short_label};

/// Tier name, or an empty string when unranked.
pub fn format_tier(tier: Option<Tier>) -> String {
    tier.map(|t| tier_label(t).to_string()).unwrap_or_default()
}

/// Full rank, e.g. `Emerald II (45 LP)`, `Master (120 LP)` or `Unranked`.
///
/// Apex tiers never show a division, even when the API reports one.
pub fn format_rank(tier: Option<Tier>, division: Option<Division>, lp: Option<i64>) -> String {
    let Some(tier) = tier else {
        return "Unranked".to_string();
    };
    let mut label = tier_label(tier).to_string();
    if let Some(division) = division {
        if !tier.is_apex() {
            label.push_str(&format!(" {}", division));
        }
    }
    if let Some(lp) = lp {
        label.push_str(&format!(" ({} LP)", lp));
    }
    label
}

/// Win rate like `56% WR`, or `56% WR (39G)` with `include_games`.
/// Empty when no games were played. Percentages round half to even.
pub fn format_win_rate(wins: Option<i64>, losses: Option<i64>, include_games: bool) -> String {
    let wins = wins.unwrap_or(0);
    let total = wins + losses.unwrap_or(0);
    if total <= 0 {
        return String::new();
    }
    let pct = (wins as f64 / total as f64 * 100.0).round_ties_even() as i64;
    if include_games {
        format!("{}% WR ({}G)", pct, total)
    } else {
        format!("{}% WR", pct)
    }
}

/// Rank window of a team or scrim, e.g. `Gold → Diamond`.
///
/// A single bound is shown alone, equal bounds collapse to one label, and
/// no bounds at all read `Tous elos`.
pub fn format_rank_range(min: Option<Tier>, max: Option<Tier>, abbreviated: bool) -> String {
    let label = |tier: Tier| {
        if abbreviated {
            tier_short_label(tier)
        } else {
            tier_label(tier)
        }
    };
    match (min, max) {
        (Some(lo), Some(hi)) if lo == hi => label(lo).to_string(),
        (Some(lo), Some(hi)) => format!("{} → {}", label(lo), label(hi)),
        (Some(bound), None) | (None, Some(bound)) => label(bound).to_string(),
        (None, None) => "Tous elos".to_string(),
    }
}

/// Play frequency as sessions per week, e.g. `2-3x/sem`.
pub fn format_frequency(min: Option<i64>, max: Option<i64>) -> String {
    match (min, max) {
        (Some(lo), Some(hi)) if lo == hi => format!("{}x/sem", lo),
        (Some(lo), Some(hi)) => format!("{}-{}x/sem", lo, hi),
        (Some(bound), None) | (None, Some(bound)) => format!("{}x/sem", bound),
        (None, None) => String::new(),
    }
}
