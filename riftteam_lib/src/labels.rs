//! Display labels and colours for game vocabulary.

use riftteam_api::types::{Activity, Ambiance, Role, Tier};

/// Colour used for unranked players and unknown tiers.
pub const UNRANKED_COLOR: &str = "#6B6B6B";

/// Rank filter choices offered when browsing, as `(minimum tier, label)`.
/// `None` means no lower bound.
pub const RANK_TIER_FILTERS: &[(Option<Tier>, &str)] = &[
    (None, "Tous les rangs"),
    (Some(Tier::Iron), "Iron+"),
    (Some(Tier::Bronze), "Bronze+"),
    (Some(Tier::Silver), "Silver+"),
    (Some(Tier::Gold), "Gold+"),
    (Some(Tier::Platinum), "Platinum+"),
    (Some(Tier::Emerald), "Emerald+"),
    (Some(Tier::Diamond), "Diamond+"),
    (Some(Tier::Master), "Master+"),
];

/// Short role name (e.g. `Mid`, `ADC`).
pub fn role_label(role: Role) -> &'static str {
    match role {
        Role::Top => "Top",
        Role::Jungle => "Jungle",
        Role::Middle => "Mid",
        Role::Bottom => "ADC",
        Role::Utility => "Support",
    }
}

/// Player-noun role name (e.g. `Midlaner`).
pub fn role_label_long(role: Role) -> &'static str {
    match role {
        Role::Top => "Toplaner",
        Role::Jungle => "Jungler",
        Role::Middle => "Midlaner",
        Role::Bottom => "ADC",
        Role::Utility => "Support",
    }
}

pub fn activity_label(activity: Activity) -> &'static str {
    match activity {
        Activity::Scrims => "Scrims",
        Activity::Tournois => "Tournois",
        Activity::Lan => "LAN",
        Activity::Flex => "Flex",
        Activity::Clash => "Clash",
    }
}

pub fn ambiance_label(ambiance: Ambiance) -> &'static str {
    match ambiance {
        Ambiance::Fun => "For fun",
        Ambiance::Tryhard => "Tryhard",
    }
}

/// Tier name with only the first letter capitalized (e.g. `Grandmaster`).
pub fn tier_label(tier: Tier) -> &'static str {
    match tier {
        Tier::Iron => "Iron",
        Tier::Bronze => "Bronze",
        Tier::Silver => "Silver",
        Tier::Gold => "Gold",
        Tier::Platinum => "Platinum",
        Tier::Emerald => "Emerald",
        Tier::Diamond => "Diamond",
        Tier::Master => "Master",
        Tier::Grandmaster => "Grandmaster",
        Tier::Challenger => "Challenger",
    }
}

/// Abbreviated tier name for compact ranges (e.g. `Plat`, `GM`).
pub fn tier_short_label(tier: Tier) -> &'static str {
    match tier {
        Tier::Platinum => "Plat",
        Tier::Diamond => "Diam",
        Tier::Grandmaster => "GM",
        Tier::Challenger => "Chall",
        other => tier_label(other),
    }
}

/// Hex colour of a tier's crest; [`UNRANKED_COLOR`] when there is no tier.
pub fn rank_color(tier: Option<Tier>) -> &'static str {
    match tier {
        None => UNRANKED_COLOR,
        Some(Tier::Iron) => "#6B6B6B",
        Some(Tier::Bronze) => "#8B4513",
        Some(Tier::Silver) => "#C0C0C0",
        Some(Tier::Gold) => "#FFD700",
        Some(Tier::Platinum) => "#00CED1",
        Some(Tier::Emerald) => "#50C878",
        Some(Tier::Diamond) => "#4169E1",
        Some(Tier::Master) => "#9B30FF",
        Some(Tier::Grandmaster) => "#DC143C",
        Some(Tier::Challenger) => "#F0E68C",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_labels() {
        for role in Role::ALL {
            assert!(!role_label(role).is_empty());
            assert!(!role_label_long(role).is_empty());
        }
        assert_eq!(role_label(Role::Middle), "Mid");
        assert_eq!(role_label_long(Role::Jungle), "Jungler");
    }

    #[test]
    fn rank_colors() {
        assert_eq!(rank_color(Some(Tier::Gold)), "#FFD700");
        assert_eq!(rank_color(None), UNRANKED_COLOR);
    }

    #[test]
    fn short_labels_fall_back_to_full_name() {
        assert_eq!(tier_short_label(Tier::Platinum), "Plat");
        assert_eq!(tier_short_label(Tier::Gold), "Gold");
    }

    #[test]
    fn tier_filters_are_ascending() {
        let tiers: Vec<Tier> = RANK_TIER_FILTERS.iter().filter_map(|(t, _)| *t).collect();
        assert!(tiers.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(RANK_TIER_FILTERS[0].1, "Tous les rangs");
    }
}
