use std::io::Write;

use anyhow::Result;
use riftteam_lib::assets::AssetUrls;
use riftteam_lib::format::{format_frequency, format_rank, format_rank_range, format_win_rate};
use riftteam_lib::labels::{activity_label, ambiance_label, role_label, role_label_long};
use riftteam_lib::types::{
    Activity, ChampionResponse, PlayerResponse, RiotCheckResponse, Role, ScrimResponse,
    TeamResponse, TokenInfo,
};
use riftteam_lib::Route;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled)]
struct PlayerRow {
    #[tabled(rename = "Riot ID")]
    riot_id: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Rank")]
    rank: String,
    #[tabled(rename = "Win Rate")]
    win_rate: String,
    #[tabled(rename = "LFT")]
    lft: String,
    #[tabled(rename = "Profile")]
    profile: String,
}

#[derive(Tabled)]
struct TeamRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Ranks")]
    ranks: String,
    #[tabled(rename = "Looking For")]
    looking_for: String,
    #[tabled(rename = "Members")]
    members: usize,
    #[tabled(rename = "LFP")]
    lfp: String,
    #[tabled(rename = "Page")]
    page: String,
}

#[derive(Tabled)]
struct ScrimRow {
    #[tabled(rename = "Date")]
    scheduled_at: String,
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "Format")]
    format: String,
    #[tabled(rename = "Ranks")]
    ranks: String,
    #[tabled(rename = "Fearless")]
    fearless: String,
}

#[derive(Tabled)]
struct ChampionRow {
    #[tabled(rename = "Champion")]
    name: String,
    #[tabled(rename = "Games")]
    games: i64,
    #[tabled(rename = "Win Rate")]
    win_rate: String,
    #[tabled(rename = "KDA")]
    kda: String,
}

#[derive(Tabled)]
struct DetailRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

fn detail(field: &str, value: impl Into<String>) -> DetailRow {
    DetailRow {
        field: field.to_string(),
        value: value.into(),
    }
}

fn yes_no(flag: bool) -> String {
    let label = if flag { "yes" } else { "no" };
    label.to_string()
}

/// Absolute frontend link, or an empty cell when it cannot be built.
fn link(route: Route, app_url: &str) -> String {
    route
        .url(app_url)
        .map(|u| u.to_string())
        .unwrap_or_default()
}

fn join_roles(roles: &[Role]) -> String {
    roles
        .iter()
        .map(|r| role_label(*r))
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_activities(activities: Option<&[Activity]>) -> String {
    activities
        .unwrap_or_default()
        .iter()
        .map(|a| activity_label(*a))
        .collect::<Vec<_>>()
        .join(", ")
}

// -- Row builders --

fn build_player_rows(players: &[PlayerResponse], app_url: &str) -> Vec<PlayerRow> {
    players
        .iter()
        .map(|p| PlayerRow {
            riot_id: p.riot_id(),
            role: p.primary_role.map(role_label).unwrap_or("-").to_string(),
            rank: format_rank(p.rank_solo_tier, p.rank_solo_division, p.rank_solo_lp),
            win_rate: format_win_rate(p.rank_solo_wins, p.rank_solo_losses, true),
            lft: yes_no(p.is_lft),
            profile: link(Route::Profile(p.slug.clone()), app_url),
        })
        .collect()
}

fn build_team_rows(teams: &[TeamResponse], app_url: &str) -> Vec<TeamRow> {
    teams
        .iter()
        .map(|t| TeamRow {
            name: t.name.clone(),
            ranks: format_rank_range(t.min_rank, t.max_rank, true),
            looking_for: join_roles(&t.open_roles()),
            members: t.members.len(),
            lfp: yes_no(t.is_lfp),
            page: link(Route::Team(t.slug.clone()), app_url),
        })
        .collect()
}

fn build_scrim_rows(scrims: &[ScrimResponse]) -> Vec<ScrimRow> {
    scrims
        .iter()
        .map(|s| ScrimRow {
            scheduled_at: s.scheduled_at.format("%Y-%m-%d %H:%M UTC").to_string(),
            team: s.team.name.clone(),
            format: match (s.format, s.game_count) {
                (Some(format), _) => format.to_string(),
                (None, Some(games)) => format!("{} games", games),
                (None, None) => "-".to_string(),
            },
            ranks: format_rank_range(s.min_rank, s.max_rank, true),
            fearless: yes_no(s.fearless),
        })
        .collect()
}

fn build_champion_rows(champions: &[ChampionResponse]) -> Vec<ChampionRow> {
    champions
        .iter()
        .map(|c| ChampionRow {
            name: c.champion_name.clone(),
            games: c.games_played,
            win_rate: format_win_rate(Some(c.wins), Some(c.losses), false),
            kda: match (c.avg_kills, c.avg_deaths, c.avg_assists) {
                (Some(k), Some(d), Some(a)) => format!("{:.1}/{:.1}/{:.1}", k, d, a),
                _ => String::new(),
            },
        })
        .collect()
}

fn build_player_details(p: &PlayerResponse, app_url: &str, assets: &AssetUrls) -> Vec<DetailRow> {
    let roles = [p.primary_role, p.secondary_role]
        .into_iter()
        .flatten()
        .map(role_label_long)
        .collect::<Vec<_>>()
        .join(" / ");
    let mut rows = vec![
        detail("Riot ID", p.riot_id()),
        detail("Region", p.region.to_uppercase()),
        detail(
            "Solo/Duo",
            format_rank(p.rank_solo_tier, p.rank_solo_division, p.rank_solo_lp),
        ),
        detail(
            "Solo/Duo WR",
            format_win_rate(p.rank_solo_wins, p.rank_solo_losses, true),
        ),
        detail(
            "Flex",
            format_rank(p.rank_flex_tier, p.rank_flex_division, p.rank_flex_lp),
        ),
    ];
    if p.peak_solo_tier.is_some() {
        rows.push(detail(
            "Peak",
            format_rank(p.peak_solo_tier, p.peak_solo_division, p.peak_solo_lp),
        ));
    }
    rows.extend([
        detail("Roles", roles),
        detail("Activities", join_activities(p.activities.as_deref())),
        detail(
            "Ambiance",
            p.ambiance.map(ambiance_label).unwrap_or_default(),
        ),
        detail(
            "Frequency",
            format_frequency(p.frequency_min, p.frequency_max),
        ),
        detail("LFT", yes_no(p.is_lft)),
        detail("Discord", p.discord_username.clone().unwrap_or_default()),
        detail("Description", p.description.clone().unwrap_or_default()),
        detail("Icon", assets.profile_icon_url(p.profile_icon_id).unwrap_or_default()),
        detail("Profile", link(Route::Profile(p.slug.clone()), app_url)),
    ]);
    rows
}

fn build_team_details(t: &TeamResponse, app_url: &str) -> Vec<DetailRow> {
    let mut rows = vec![
        detail("Name", t.name.clone()),
        detail(
            "Captain",
            t.captain_discord_name.clone().unwrap_or_default(),
        ),
        detail("Ranks", format_rank_range(t.min_rank, t.max_rank, false)),
        detail("Looking For", join_roles(&t.open_roles())),
        detail("Activities", join_activities(t.activities.as_deref())),
        detail(
            "Ambiance",
            t.ambiance.map(ambiance_label).unwrap_or_default(),
        ),
        detail(
            "Frequency",
            format_frequency(t.frequency_min, t.frequency_max),
        ),
        detail("LFP", yes_no(t.is_lfp)),
        detail("Description", t.description.clone().unwrap_or_default()),
    ];
    for member in &t.members {
        let player = &member.player;
        rows.push(detail(
            role_label(member.role),
            format!(
                "{}#{} ({})",
                player.riot_game_name,
                player.riot_tag_line,
                format_rank(
                    player.rank_solo_tier,
                    player.rank_solo_division,
                    player.rank_solo_lp
                )
            ),
        ));
    }
    rows.push(detail("Page", link(Route::Team(t.slug.clone()), app_url)));
    rows
}

fn build_riot_details(account: &RiotCheckResponse, assets: &AssetUrls) -> Vec<DetailRow> {
    vec![
        detail(
            "Riot ID",
            format!("{}#{}", account.game_name, account.tag_line),
        ),
        detail("PUUID", account.puuid.clone()),
        detail(
            "Level",
            account
                .summoner_level
                .map(|l| l.to_string())
                .unwrap_or_default(),
        ),
        detail(
            "Icon",
            assets
                .profile_icon_url(account.profile_icon_id)
                .unwrap_or_default(),
        ),
    ]
}

fn build_token_details(info: &TokenInfo, token: &str, app_url: &str) -> Vec<DetailRow> {
    let mut rows = vec![
        detail("Action", info.action.to_string()),
        detail("Discord", info.discord_username.clone()),
    ];
    if let (Some(name), Some(tag)) = (&info.game_name, &info.tag_line) {
        rows.push(detail("Riot ID", format!("{}#{}", name, tag)));
    }
    if let Some(team) = &info.team_name {
        rows.push(detail("Team", team.clone()));
    }
    if let Some(slug) = &info.slug {
        rows.push(detail("Slug", slug.clone()));
    }
    let page = Route::for_token_action(info.action)
        .with_token(app_url, token)
        .map(|u| u.to_string())
        .unwrap_or_default();
    rows.push(detail("Link", page));
    rows
}

// -- Rendering --

fn render<T: Tabled>(rows: Vec<T>, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => write_csv(std::io::stdout(), &rows)?,
        OutputFormat::Table | OutputFormat::Json => println!("{}", Table::new(rows)),
    }
    Ok(())
}

/// Writes rows as CSV using the table headers. Cells are passed through
/// [`sanitize_csv_field`] since descriptions are user-written.
fn write_csv<W: Write, T: Tabled>(writer: W, rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    let headers = T::headers();
    wtr.write_record(headers.iter().map(|h| h.as_bytes()))?;
    for row in rows {
        let fields: Vec<String> = row
            .fields()
            .iter()
            .map(|f| sanitize_csv_field(f))
            .collect();
        wtr.write_record(&fields)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prefix cells that a spreadsheet would evaluate as a formula with a tab.
pub fn sanitize_csv_field(value: &str) -> String {
    match value.chars().next() {
        Some('=' | '+' | '-' | '@') => format!("\t{}", value),
        _ => value.to_string(),
    }
}

pub fn print_players(players: &[PlayerResponse], app_url: &str, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(players)?,
        _ => render(build_player_rows(players, app_url), format)?,
    }
    Ok(())
}

pub fn print_player(
    player: &PlayerResponse,
    app_url: &str,
    assets: &AssetUrls,
    format: &OutputFormat,
) -> Result<()> {
    if *format == OutputFormat::Json {
        return print_json(player);
    }
    render(build_player_details(player, app_url, assets), format)?;
    if !player.champions.is_empty() {
        render(build_champion_rows(&player.champions), format)?;
    }
    Ok(())
}

pub fn print_teams(teams: &[TeamResponse], app_url: &str, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(teams)?,
        _ => render(build_team_rows(teams, app_url), format)?,
    }
    Ok(())
}

pub fn print_team(team: &TeamResponse, app_url: &str, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(team)?,
        _ => render(build_team_details(team, app_url), format)?,
    }
    Ok(())
}

pub fn print_scrims(scrims: &[ScrimResponse], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(scrims)?,
        _ => render(build_scrim_rows(scrims), format)?,
    }
    Ok(())
}

pub fn print_riot_account(
    account: &RiotCheckResponse,
    assets: &AssetUrls,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(account)?,
        _ => render(build_riot_details(account, assets), format)?,
    }
    Ok(())
}

pub fn print_token(
    info: &TokenInfo,
    token: &str,
    app_url: &str,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(info)?,
        _ => render(build_token_details(info, token, app_url), format)?,
    }
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize + ?Sized>(data: &T) -> Result<()> {
    write_json(std::io::stdout().lock(), data)
}

fn write_json<W: Write, T: serde::Serialize + ?Sized>(mut writer: W, data: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| anyhow::anyhow!("failed to serialize to JSON: {}", e))?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
