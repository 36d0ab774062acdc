use anyhow::Result;
use clap::{Args, Subcommand};
use riftteam_lib::validation;
use riftteam_lib::{Client, Config};

use crate::output::{print_riot_account, OutputFormat};

#[derive(Args)]
pub struct RiotArgs {
    #[command(subcommand)]
    pub command: RiotCommand,
}

#[derive(Subcommand)]
pub enum RiotCommand {
    /// Check that a Riot ID exists (e.g. "Faker#KR1")
    Check { riot_id: String },
}

pub async fn run(
    args: &RiotArgs,
    client: &Client,
    config: &Config,
    format: &OutputFormat,
) -> Result<()> {
    match &args.command {
        RiotCommand::Check { riot_id } => {
            let (name, tag) = validation::parse_riot_id(riot_id)?;
            let account = client.check_riot_id(&name, &tag).await?;
            let assets = super::asset_urls(config, format).await;
            print_riot_account(&account, &assets, format)
        }
    }
}
