use chrono::NaiveDate;
use riftteam_api::types::{Activity, Ambiance, Role, ScrimFormat, Tier};
use riftteam_api::ScrimFormatFilter;

use crate::error::RiftTeamError;

pub const MAX_DESCRIPTION_LENGTH: usize = 500;
pub const MIN_TEAM_NAME_LENGTH: usize = 2;
pub const MAX_TEAM_NAME_LENGTH: usize = 50;
pub const MIN_GAME_NAME_LENGTH: usize = 3;
pub const MAX_GAME_NAME_LENGTH: usize = 16;
pub const MIN_TAG_LINE_LENGTH: usize = 3;
pub const MAX_TAG_LINE_LENGTH: usize = 5;
pub const MAX_FREQUENCY: i64 = 7;
pub const MAX_LIMIT: u32 = 100;
pub const MAX_GAME_COUNT: u8 = 20;

fn invalid(msg: impl Into<String>) -> RiftTeamError {
    RiftTeamError::InvalidInput(msg.into())
}

/// Strip ASCII control characters other than `\n`, trim whitespace,
/// and enforce a character-count limit. Empty results are rejected.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, RiftTeamError> {
    let sanitized = strip_controls(input, max_len)?;
    if sanitized.is_empty() {
        return Err(invalid("input is empty after sanitization"));
    }
    Ok(sanitized)
}

fn strip_controls(input: &str, max_len: usize) -> Result<String, RiftTeamError> {
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == '\n')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.chars().count() > max_len {
        return Err(invalid(format!(
            "input exceeds maximum length of {} characters",
            max_len
        )));
    }
    Ok(sanitized)
}

/// Profile or team description. Line breaks are kept, and an empty result
/// is allowed so an update can clear the text.
pub fn validate_description(input: &str) -> Result<String, RiftTeamError> {
    strip_controls(input, MAX_DESCRIPTION_LENGTH)
}

/// Split a Riot ID `Name#TAG` into game name and tag line.
pub fn parse_riot_id(input: &str) -> Result<(String, String), RiftTeamError> {
    let trimmed = input.trim();
    let Some((name, tag)) = trimmed.rsplit_once('#') else {
        return Err(invalid(format!(
            "invalid Riot ID '{}'. Expected format: Name#TAG (e.g., Faker#KR1)",
            trimmed
        )));
    };
    let name = name.trim();
    let tag = tag.trim();
    let name_len = name.chars().count();
    if !(MIN_GAME_NAME_LENGTH..=MAX_GAME_NAME_LENGTH).contains(&name_len) {
        return Err(invalid(format!(
            "game name must be {} to {} characters, got {}",
            MIN_GAME_NAME_LENGTH, MAX_GAME_NAME_LENGTH, name_len
        )));
    }
    if name.chars().any(|c| c.is_control()) {
        return Err(invalid("game name contains control characters"));
    }
    let tag_len = tag.chars().count();
    if !(MIN_TAG_LINE_LENGTH..=MAX_TAG_LINE_LENGTH).contains(&tag_len)
        || !tag.chars().all(|c| c.is_alphanumeric())
    {
        return Err(invalid(format!(
            "invalid tag line '{}'. Expected {} to {} letters or digits",
            tag, MIN_TAG_LINE_LENGTH, MAX_TAG_LINE_LENGTH
        )));
    }
    Ok((name.to_string(), tag.to_string()))
}

/// Validate a team name: 2 to 50 characters after trimming.
pub fn validate_team_name(input: &str) -> Result<String, RiftTeamError> {
    let trimmed = input.trim();
    let len = trimmed.chars().count();
    if !(MIN_TEAM_NAME_LENGTH..=MAX_TEAM_NAME_LENGTH).contains(&len) {
        return Err(invalid(format!(
            "team name must be {} to {} characters, got {}",
            MIN_TEAM_NAME_LENGTH, MAX_TEAM_NAME_LENGTH, len
        )));
    }
    if trimmed.chars().any(|c| c.is_control()) {
        return Err(invalid("team name contains control characters"));
    }
    Ok(trimmed.to_string())
}

/// Validate a role: case-insensitive, supports mid/adc/support shorthands.
pub fn validate_role(input: &str) -> Result<Role, RiftTeamError> {
    input.parse::<Role>().map_err(|_| {
        invalid(format!(
            "unknown role '{}'. Valid values: top, jungle, middle (mid), bottom (adc), utility (support)",
            input
        ))
    })
}

pub fn validate_tier(input: &str) -> Result<Tier, RiftTeamError> {
    input.parse::<Tier>().map_err(|_| {
        let valid: Vec<String> = Tier::ALL.iter().map(|t| t.as_str().to_lowercase()).collect();
        invalid(format!(
            "unknown tier '{}'. Valid values: {}",
            input,
            valid.join(", ")
        ))
    })
}

pub fn validate_activity(input: &str) -> Result<Activity, RiftTeamError> {
    input.parse::<Activity>().map_err(|_| {
        invalid(format!(
            "unknown activity '{}'. Valid values: scrims, tournois, lan, flex, clash",
            input
        ))
    })
}

/// Comma-separated activity list, duplicates removed, order kept.
pub fn validate_activities(input: &str) -> Result<Vec<Activity>, RiftTeamError> {
    let mut activities = Vec::new();
    for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let activity = validate_activity(part)?;
        if !activities.contains(&activity) {
            activities.push(activity);
        }
    }
    if activities.is_empty() {
        return Err(invalid("activity list is empty"));
    }
    Ok(activities)
}

pub fn validate_ambiance(input: &str) -> Result<Ambiance, RiftTeamError> {
    input.parse::<Ambiance>().map_err(|_| {
        invalid(format!(
            "unknown ambiance '{}'. Valid values: fun, tryhard",
            input
        ))
    })
}

/// Sessions per week. Each bound must be 1..=7 and `min <= max`.
pub fn validate_frequency(
    min: Option<i64>,
    max: Option<i64>,
) -> Result<(Option<i64>, Option<i64>), RiftTeamError> {
    for value in [min, max].into_iter().flatten() {
        if !(1..=MAX_FREQUENCY).contains(&value) {
            return Err(invalid(format!(
                "frequency must be between 1 and {}, got {}",
                MAX_FREQUENCY, value
            )));
        }
    }
    if let (Some(lo), Some(hi)) = (min, max) {
        if lo > hi {
            return Err(invalid(format!(
                "minimum frequency {} is above maximum {}",
                lo, hi
            )));
        }
    }
    Ok((min, max))
}

pub fn validate_rank_range(min: Option<Tier>, max: Option<Tier>) -> Result<(), RiftTeamError> {
    if let (Some(lo), Some(hi)) = (min, max) {
        if lo > hi {
            return Err(invalid(format!(
                "minimum rank {} is above maximum rank {}",
                lo, hi
            )));
        }
    }
    Ok(())
}

/// Validate page size (must be 1..=100).
pub fn validate_limit(limit: u32) -> Result<u32, RiftTeamError> {
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(invalid(format!(
            "limit must be between 1 and {}",
            MAX_LIMIT
        )));
    }
    Ok(limit)
}

/// Action tokens are opaque; only reject blanks and embedded whitespace.
pub fn validate_token(input: &str) -> Result<String, RiftTeamError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid("token is empty"));
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(invalid("token must not contain whitespace"));
    }
    Ok(trimmed.to_string())
}

pub fn validate_hour(hour: u8) -> Result<u8, RiftTeamError> {
    if hour > 23 {
        return Err(invalid(format!(
            "hour must be between 0 and 23, got {}",
            hour
        )));
    }
    Ok(hour)
}

/// Validate a YYYY-MM-DD date string.
pub fn validate_scrim_date(input: &str) -> Result<NaiveDate, RiftTeamError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        invalid(format!(
            "invalid date '{}'. Expected format: YYYY-MM-DD (e.g., 2025-03-14)",
            trimmed
        ))
    })
}

/// `BO1`, `BO3`, `BO5`, or a fixed game count `G1`..`G20`.
pub fn validate_scrim_format(input: &str) -> Result<ScrimFormatFilter, RiftTeamError> {
    let upper = input.trim().to_uppercase();
    if let Ok(format) = upper.parse::<ScrimFormat>() {
        return Ok(ScrimFormatFilter::BestOf(format));
    }
    if let Some(count) = upper.strip_prefix('G').and_then(|n| n.parse::<u8>().ok()) {
        if (1..=MAX_GAME_COUNT).contains(&count) {
            return Ok(ScrimFormatFilter::Games(count));
        }
    }
    Err(invalid(format!(
        "unknown scrim format '{}'. Valid values: BO1, BO3, BO5, G1..G{}",
        input, MAX_GAME_COUNT
    )))
}
