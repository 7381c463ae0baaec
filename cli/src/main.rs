//! TGStat command-line client
//!
//! Thin wrapper over `tgstat-core`: each subcommand maps to one client call
//! and prints the decoded response as pretty JSON.

mod commands;

use std::time::Duration;

use clap::Parser;
use serde::Serialize;
use tgstat_core::api::{PostsRequest, SearchRequest};
use tgstat_core::{ApiError, ClientConfig, TgStatClient};

use crate::commands::{CallbackCommand, ChannelCommand, Cli, Commands, Dictionary, PostCommand};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ApiError> {
    let mut config = ClientConfig::new(cli.token).with_endpoint(&cli.endpoint);
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    let client = TgStatClient::new(config)?;

    match cli.command {
        Commands::Channel(ChannelCommand::Get { id }) => print(&client.channel_get(&id)?),
        Commands::Channel(ChannelCommand::Stat { id }) => print(&client.channel_stat(&id)?),
        Commands::Channel(ChannelCommand::Search {
            country,
            q,
            category,
            limit,
        }) => {
            let request = SearchRequest {
                q: q.unwrap_or_default(),
                country,
                category,
                limit,
                ..SearchRequest::default()
            };
            print(&client.channel_search(&request)?)
        }
        Commands::Channel(ChannelCommand::Posts { id, limit, offset }) => {
            let request = PostsRequest {
                limit,
                offset,
                ..PostsRequest::new(id)
            };
            print(&client.channel_posts(&request)?)
        }
        Commands::Post(PostCommand::Get { id }) => print(&client.post_get(&id)?),
        Commands::Usage => print(&client.usage_stat()?),
        Commands::Database { dictionary, lang } => {
            let lang = lang.as_deref();
            match dictionary {
                Dictionary::Countries => print(&client.database_countries(lang)?),
                Dictionary::Categories => print(&client.database_categories(lang)?),
                Dictionary::Languages => print(&client.database_languages(lang)?),
            }
        }
        Commands::Callback(CallbackCommand::Info) => print(&client.get_callback_info()?),
    }
}

fn print<T: Serialize>(value: &T) -> Result<(), ApiError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
