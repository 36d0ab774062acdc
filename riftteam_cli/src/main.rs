mod commands;
mod output;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use riftteam_lib::{Client, Config};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "riftteam")]
#[command(about = "Browse League of Legends players, teams and scrims on RiftTeam")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Backend base URL (overrides RIFTTEAM_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Frontend URL used for printed links (overrides RIFTTEAM_APP_URL)
    #[arg(long, global = true)]
    app_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Player profiles
    Players(commands::players::PlayersArgs),
    /// Teams and rosters
    Teams(commands::teams::TeamsArgs),
    /// Riot account lookups
    Riot(commands::riot::RiotArgs),
    /// Action tokens issued by the Discord bot
    Token(commands::tokens::TokenArgs),
    /// Scrim listings
    Scrims(commands::scrims::ScrimsArgs),
}

fn parse_format(value: &str) -> Result<OutputFormat> {
    match value.to_lowercase().as_str() {
        "table" => Ok(OutputFormat::Table),
        "json" => Ok(OutputFormat::Json),
        "csv" => Ok(OutputFormat::Csv),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        other => bail!(
            "unknown output format '{}'. Valid values: table, json, csv, markdown",
            other
        ),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("riftteam=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = parse_format(&cli.output)?;

    let mut config = Config::from_env();
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    if let Some(app_url) = cli.app_url {
        config.app_url = app_url.trim_end_matches('/').to_string();
    }
    tracing::debug!(api_url = %config.api_url, app_url = %config.app_url, "configuration loaded");

    let client = Client::with_base_url(&config.api_url);

    match &cli.command {
        Commands::Players(args) => commands::players::run(args, &client, &config, &format).await?,
        Commands::Teams(args) => commands::teams::run(args, &client, &config, &format).await?,
        Commands::Riot(args) => commands::riot::run(args, &client, &config, &format).await?,
        Commands::Token(args) => commands::tokens::run(args, &client, &config, &format).await?,
        Commands::Scrims(args) => commands::scrims::run(args, &client, &format).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn output_formats() {
        assert_eq!(parse_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_format("md").unwrap(), OutputFormat::Markdown);
        assert!(parse_format("xml").is_err());
    }

    #[test]
    fn parses_nested_subcommands() {
        let cli = Cli::try_parse_from([
            "riftteam",
            "--output",
            "csv",
            "players",
            "list",
            "--role",
            "mid",
            "--limit",
            "50",
        ])
        .unwrap();
        assert_eq!(cli.output, "csv");
        match cli.command {
            Commands::Players(args) => match args.command {
                commands::players::PlayersCommand::List(list) => {
                    assert_eq!(list.role.as_deref(), Some("mid"));
                    assert_eq!(list.limit, 50);
                    assert_eq!(list.offset, 0);
                }
                _ => panic!("expected players list"),
            },
            _ => panic!("expected players command"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "riftteam",
            "riot",
            "check",
            "Faker#KR1",
            "--api-url",
            "http://127.0.0.1:9000/api",
        ])
        .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://127.0.0.1:9000/api"));
    }
}
