use anyhow::Result;
use clap::{Args, Subcommand};
use riftteam_lib::validation;
use riftteam_lib::{Client, Config, Query, TeamQuery};

use crate::output::{print_json, print_team, print_teams, OutputFormat};

#[derive(Args)]
pub struct TeamsArgs {
    #[command(subcommand)]
    pub command: TeamsCommand,
}

#[derive(Subcommand)]
pub enum TeamsCommand {
    /// Browse teams
    List(ListArgs),
    /// Show one team with its roster
    Get {
        slug: String,
        /// Edit token, to see the team as its captain
        #[arg(long)]
        token: Option<String>,
    },
    /// Delete a team permanently
    Delete {
        slug: String,
        #[arg(long)]
        token: String,
    },
    /// Check whether a team name is still free
    CheckName {
        name: String,
        /// Ignore this team (when renaming it)
        #[arg(long)]
        exclude: Option<String>,
    },
    /// Print the data export download link
    ExportUrl {
        slug: String,
        #[arg(long)]
        token: String,
    },
}

#[derive(Args)]
pub struct ListArgs {
    /// Only teams looking for players (true) or not (false)
    #[arg(long)]
    pub lfp: Option<bool>,

    /// Teams recruiting this role: top, jungle, mid, adc, support
    #[arg(long)]
    pub role: Option<String>,

    /// Minimum tier of the team's rank window
    #[arg(long)]
    pub min_rank: Option<String>,

    /// Maximum tier of the team's rank window
    #[arg(long)]
    pub max_rank: Option<String>,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub limit: u32,

    /// Results to skip
    #[arg(long, default_value = "0")]
    pub offset: u32,
}

pub async fn run(
    args: &TeamsArgs,
    client: &Client,
    config: &Config,
    format: &OutputFormat,
) -> Result<()> {
    match &args.command {
        TeamsCommand::List(list) => run_list(list, client, config, format).await,
        TeamsCommand::Get { slug, token } => {
            let token = token.as_deref().map(validation::validate_token).transpose()?;
            let team = client.get_team(slug, token.as_deref()).await?;
            print_team(&team, &config.app_url, format)
        }
        TeamsCommand::Delete { slug, token } => {
            let token = validation::validate_token(token)?;
            client.delete_team(slug, &token).await?;
            eprintln!("Deleted team {}", slug);
            Ok(())
        }
        TeamsCommand::CheckName { name, exclude } => {
            let name = validation::validate_team_name(name)?;
            let resp = client.check_team_name(&name, exclude.as_deref()).await?;
            match format {
                OutputFormat::Json => print_json(&resp)?,
                _ if resp.available => println!("'{}' is available", name),
                _ => println!("'{}' is already taken", name),
            }
            Ok(())
        }
        TeamsCommand::ExportUrl { slug, token } => {
            let token = validation::validate_token(token)?;
            println!("{}", client.export_team_url(slug, &token)?);
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
    let mut query = TeamQuery::default().with_limit(limit).with_offset(args.offset);

    if let Some(lfp) = args.lfp {
        query = query.with_lfp(lfp);
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

    let resp = client.list_teams(&query).await?;

    eprintln!(
        "{} of {} teams (offset {})",
        resp.teams.len(),
        resp.total,
        args.offset
    );

    print_teams(&resp.teams, &config.app_url, format)
}
