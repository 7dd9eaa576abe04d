mod analyze;
mod trends;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "adpulse-cli")]
#[command(about = "Ad trend intelligence command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Trend aggregation and inspection.
    Trends {
        #[command(subcommand)]
        command: TrendsCommands,
    },
    /// Audit a piece of ad copy.
    Analyze {
        /// Ad copy to audit.
        #[arg(long)]
        text: String,
        /// Campaign objective: conversion, traffic, or awareness.
        #[arg(long, default_value = "conversion")]
        objective: String,
    },
}

#[derive(Debug, Subcommand)]
enum TrendsCommands {
    /// Run one aggregation pass for an industry and store new trends.
    Fetch {
        #[arg(long)]
        industry: String,
    },
    /// List captured trends.
    List {
        #[arg(long)]
        industry: Option<String>,
        #[arg(long)]
        platform: Option<String>,
        #[arg(long, default_value_t = 50)]
        limit: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Trends { command } => {
            let config = adpulse_core::load_app_config_from_env()?;
            let pool = adpulse_db::connect_pool(
                &config.database_url,
                adpulse_db::PoolConfig::from_app_config(&config),
            )
            .await?;
            adpulse_db::run_migrations(&pool).await?;

            match command {
                TrendsCommands::Fetch { industry } => {
                    trends::run_trends_fetch(&pool, &config, &industry).await?;
                }
                TrendsCommands::List {
                    industry,
                    platform,
                    limit,
                } => {
                    trends::run_trends_list(&pool, industry.as_deref(), platform.as_deref(), limit)
                        .await?;
                }
            }
        }
        Commands::Analyze { text, objective } => {
            let config = adpulse_core::load_app_config_from_env()?;
            analyze::run_analyze(&config, &text, &objective).await?;
        }
    }

    Ok(())
}
