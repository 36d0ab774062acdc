//! Game vocabulary shared by players, teams and scrims: roles, ranks, activities.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// In-game position, as reported by Riot's match data.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Top,
    Jungle,
    Middle,
    Bottom,
    Utility,
}

impl Role {
    /// All roles in lane order.
    pub const ALL: [Role; 5] = [
        Role::Top,
        Role::Jungle,
        Role::Middle,
        Role::Bottom,
        Role::Utility,
    ];

    /// API representation (e.g. `MIDDLE`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Top => "TOP",
            Role::Jungle => "JUNGLE",
            Role::Middle => "MIDDLE",
            Role::Bottom => "BOTTOM",
            Role::Utility => "UTILITY",
        }
    }
}
impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
impl FromStr for Role {
    type Err = ();

    /// Case-insensitive; also accepts the common aliases `mid`, `adc`, `support`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TOP" => Ok(Role::Top),
            "JUNGLE" | "JGL" => Ok(Role::Jungle),
            "MIDDLE" | "MID" => Ok(Role::Middle),
            "BOTTOM" | "ADC" | "BOT" => Ok(Role::Bottom),
            "UTILITY" | "SUPPORT" | "SUP" => Ok(Role::Utility),
            _ => Err(()),
        }
    }
}

/// Ranked tier, ordered from lowest to highest.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
}

impl Tier {
    pub const ALL: [Tier; 10] = [
        Tier::Iron,
        Tier::Bronze,
        Tier::Silver,
        Tier::Gold,
        Tier::Platinum,
        Tier::Emerald,
        Tier::Diamond,
        Tier::Master,
        Tier::Grandmaster,
        Tier::Challenger,
    ];

    /// API representation (e.g. `EMERALD`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Iron => "IRON",
            Tier::Bronze => "BRONZE",
            Tier::Silver => "SILVER",
            Tier::Gold => "GOLD",
            Tier::Platinum => "PLATINUM",
            Tier::Emerald => "EMERALD",
            Tier::Diamond => "DIAMOND",
            Tier::Master => "MASTER",
            Tier::Grandmaster => "GRANDMASTER",
            Tier::Challenger => "CHALLENGER",
        }
    }

    /// Master and above have no divisions.
    pub fn is_apex(&self) -> bool {
        *self >= Tier::Master
    }
}
impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
impl FromStr for Tier {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Tier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == upper)
            .ok_or(())
    }
}

/// Division inside a non-apex tier. `I` is the highest.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Division {
    #[serde(rename = "I")]
    One,
    #[serde(rename = "II")]
    Two,
    #[serde(rename = "III")]
    Three,
    #[serde(rename = "IV")]
    Four,
}
impl std::fmt::Display for Division {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Division::One => "I",
                Division::Two => "II",
                Division::Three => "III",
                Division::Four => "IV",
            }
        )
    }
}

/// What a player or team wants to play.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Activity {
    Scrims,
    Tournois,
    Lan,
    Flex,
    Clash,
}

impl Activity {
    pub const ALL: [Activity; 5] = [
        Activity::Scrims,
        Activity::Tournois,
        Activity::Lan,
        Activity::Flex,
        Activity::Clash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Activity::Scrims => "SCRIMS",
            Activity::Tournois => "TOURNOIS",
            Activity::Lan => "LAN",
            Activity::Flex => "FLEX",
            Activity::Clash => "CLASH",
        }
    }
}
impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
impl FromStr for Activity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Activity::ALL
            .into_iter()
            .find(|activity| activity.as_str() == upper)
            .ok_or(())
    }
}

/// Competitive mindset of a player or team.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Ambiance {
    Fun,
    Tryhard,
}
impl std::fmt::Display for Ambiance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Ambiance::Fun => "FUN",
                Ambiance::Tryhard => "TRYHARD",
            }
        )
    }
}
impl FromStr for Ambiance {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "FUN" => Ok(Ambiance::Fun),
            "TRYHARD" => Ok(Ambiance::Tryhard),
            _ => Err(()),
        }
    }
}
