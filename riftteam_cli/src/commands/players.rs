use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use riftteam_lib::types::PlayerUpdateRequest;
use riftteam_lib::validation;
use riftteam_lib::{Client, Config, PlayerQuery, Query};

use crate::output::{print_json, print_player, print_players, OutputFormat};

#[derive(Args)]
pub struct PlayersArgs {
    #[command(subcommand)]
    pub command: PlayersCommand,
}

#[derive(Subcommand)]
pub enum PlayersCommand {
    /// Browse player profiles
    List(ListArgs),
    /// Show one player profile
    Get {
        slug: String,
        /// Edit token, to see the profile as its owner
        #[arg(long)]
        token: Option<String>,
    },
    /// Update declarative profile fields
    Update(UpdateArgs),
    /// Delete a profile permanently
    Delete {
        slug: String,
        #[arg(long)]
        token: String,
    },
    /// Re-sync rank and champion data from Riot
    Refresh { slug: String },
    /// Print the data export download link
    ExportUrl {
        slug: String,
        #[arg(long)]
        token: String,
    },
}

#[derive(Args)]
pub struct ListArgs {
    /// Only players looking for a team (true) or not (false)
    #[arg(long)]
    pub lft: Option<bool>,

    /// Filter by role: top, jungle, mid, adc, support
    #[arg(long)]
    pub role: Option<String>,

    /// Minimum solo queue tier (e.g. gold)
    #[arg(long)]
    pub min_rank: Option<String>,

    /// Maximum solo queue tier (e.g. diamond)
    #[arg(long)]
    pub max_rank: Option<String>,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub limit: u32,

    /// Results to skip
    #[arg(long, default_value = "0")]
    pub offset: u32,
}

#[derive(Args)]
pub struct UpdateArgs {
    pub slug: String,

    #[arg(long)]
    pub token: String,

    #[arg(long)]
    pub description: Option<String>,

    /// Comma-separated: scrims, tournois, lan, flex, clash
    #[arg(long)]
    pub activities: Option<String>,

    /// fun or tryhard
    #[arg(long)]
    pub ambiance: Option<String>,

    /// Minimum sessions per week (1-7)
    #[arg(long)]
    pub frequency_min: Option<i64>,

    /// Maximum sessions per week (1-7)
    #[arg(long)]
    pub frequency_max: Option<i64>,

    /// Looking for a team
    #[arg(long)]
    pub lft: Option<bool>,
}

pub async fn run(
    args: &PlayersArgs,
    client: &Client,
    config: &Config,
    format: &OutputFormat,
) -> Result<()> {
    match &args.command {
        PlayersCommand::List(list) => run_list(list, client, config, format).await,
        PlayersCommand::Get { slug, token } => {
            let token = token.as_deref().map(validation::validate_token).transpose()?;
            let player = client.get_player(slug, token.as_deref()).await?;
            let assets = super::asset_urls(config, format).await;
            print_player(&player, &config.app_url, &assets, format)
        }
        PlayersCommand::Update(update) => run_update(update, client, config, format).await,
        PlayersCommand::Delete { slug, token } => {
            let token = validation::validate_token(token)?;
            client.delete_player(slug, &token).await?;
            eprintln!("Deleted player {}", slug);
            Ok(())
        }
        PlayersCommand::Refresh { slug } => {
            let player = client.refresh_player(slug).await?;
            eprintln!("Refreshed {} from Riot", player.riot_id());
            let assets = super::asset_urls(config, format).await;
            print_player(&player, &config.app_url, &assets, format)
        }
        PlayersCommand::ExportUrl { slug, token } => {
            let token = validation::validate_token(token)?;
            println!("{}", client.export_player_url(slug, &token)?);
            Ok(())
        }
    }
}

async fn run_list(
    args: &ListArgs,
    client: &Client,
    config: &Config,
    format: &OutputFormat,
) -> Result<()> {
    let limit = validation::validate_limit(args.limit)?;
    let mut query = PlayerQuery::default().with_limit(limit).with_offset(args.offset);

    if let Some(lft) = args.lft {
        query = query.with_lft(lft);
    }
    if let Some(ref role) = args.role {
        query = query.with_role(validation::validate_role(role)?);
    }

    let min_rank = args
        .min_rank
        .as_deref()
        .map(validation::validate_tier)
        .transpose()?;
    let max_rank = args
        .max_rank
        .as_deref()
        .map(validation::validate_tier)
        .transpose()?;
    validation::validate_rank_range(min_rank, max_rank)?;
    if let Some(tier) = min_rank {
        query = query.with_min_rank(tier);
    }
    if let Some(tier) = max_rank {
        query = query.with_max_rank(tier);
    }

    let resp = client.list_players(&query).await?;

    eprintln!(
        "{} of {} players (offset {})",
        resp.players.len(),
        resp.total,
        args.offset
    );

    print_players(&resp.players, &config.app_url, format)
}

async fn run_update(
    args: &UpdateArgs,
    client: &Client,
    config: &Config,
    format: &OutputFormat,
) -> Result<()> {
    let token = validation::validate_token(&args.token)?;
    let (frequency_min, frequency_max) =
        validation::validate_frequency(args.frequency_min, args.frequency_max)?;

    let data = PlayerUpdateRequest {
        description: args
            .description
            .as_deref()
            .map(validation::validate_description)
            .transpose()?,
        activities: args
            .activities
            .as_deref()
            .map(validation::validate_activities)
            .transpose()?,
        ambiance: args
            .ambiance
            .as_deref()
            .map(validation::validate_ambiance)
            .transpose()?,
        frequency_min,
        frequency_max,
        is_lft: args.lft,
    };
    if data.is_empty() {
        bail!("nothing to update: pass at least one field flag");
    }

    let player = client.update_player(&args.slug, &data, &token).await?;
    eprintln!("Updated {}", player.riot_id());
    match format {
        OutputFormat::Json => print_json(&player)?,
        _ => print_players(std::slice::from_ref(&player), &config.app_url, format)?,
    }
    Ok(())
}
