use anyhow::Result;
use clap::{Args, Subcommand};
use riftteam_lib::validation;
use riftteam_lib::{Client, Config};

use crate::output::{print_token, OutputFormat};

#[derive(Args)]
pub struct TokenArgs {
    #[command(subcommand)]
    pub command: TokenCommand,
}

#[derive(Subcommand)]
pub enum TokenCommand {
    /// Show what an action token allows and where to use it
    Validate { token: String },
}

pub async fn run(
    args: &TokenArgs,
    client: &Client,
    config: &Config,
    format: &OutputFormat,
) -> Result<()> {
    match &args.command {
        TokenCommand::Validate { token } => {
            let token = validation::validate_token(token)?;
            let info = client.validate_token(&token).await?;
            print_token(&info, &token, &config.app_url, format)
        }
    }
}
