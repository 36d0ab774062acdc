use anyhow::Result;
use clap::{Args, Subcommand};
use riftteam_lib::validation;
use riftteam_lib::{Client, Query, ScrimQuery};

use crate::output::{print_scrims, OutputFormat};

#[derive(Args)]
pub struct ScrimsArgs {
    #[command(subcommand)]
    pub command: ScrimsCommand,
}

#[derive(Subcommand)]
pub enum ScrimsCommand {
    /// List upcoming scrims
    List(ListArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Minimum tier of the scrim's rank window
    #[arg(long)]
    pub min_rank: Option<String>,

    /// Maximum tier of the scrim's rank window
    #[arg(long)]
    pub max_rank: Option<String>,

    /// Day of the scrim (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// BO1, BO3, BO5, or a game count like G4
    #[arg(long)]
    pub format: Option<String>,

    /// Earliest start hour (0-23)
    #[arg(long)]
    pub hour_min: Option<u8>,

    /// Latest start hour (0-23)
    #[arg(long)]
    pub hour_max: Option<u8>,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub limit: u32,

    /// Results to skip
    #[arg(long, default_value = "0")]
    pub offset: u32,
}

pub async fn run(args: &ScrimsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        ScrimsCommand::List(list) => run_list(list, client, format).await,
    }
}

async fn run_list(args: &ListArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let limit = validation::validate_limit(args.limit)?;
    let mut query = ScrimQuery::default().with_limit(limit).with_offset(args.offset);

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

    if let Some(ref date) = args.date {
        query = query.with_scheduled_date(validation::validate_scrim_date(date)?);
    }
    if let Some(ref scrim_format) = args.format {
        query = query.with_format(validation::validate_scrim_format(scrim_format)?);
    }

    let hour_min = args.hour_min.map(validation::validate_hour).transpose()?;
    let hour_max = args.hour_max.map(validation::validate_hour).transpose()?;
    query = query.with_hours(hour_min, hour_max);

    let resp = client.list_scrims(&query).await?;

    eprintln!(
        "{} of {} upcoming scrims (offset {})",
        resp.scrims.len(),
        resp.total,
        args.offset
    );

    print_scrims(&resp.scrims, format)
}
