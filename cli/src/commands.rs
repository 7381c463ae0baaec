//! Command-line arguments.

use clap::{Parser, Subcommand, ValueEnum};
use tgstat_core::DEFAULT_ENDPOINT;

/// Query the TGStat statistics API and print the JSON result
#[derive(Parser, Debug)]
#[command(name = "tgstat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API token
    #[arg(long, env = "TGSTAT_TOKEN", hide_env_values = true)]
    pub token: String,

    /// API host
    #[arg(long, env = "TGSTAT_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Request timeout in seconds
    #[arg(long, env = "TGSTAT_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Channel cards and statistics
    #[command(subcommand)]
    Channel(ChannelCommand),

    /// Single posts
    #[command(subcommand)]
    Post(PostCommand),

    /// Quota usage of the token
    Usage,

    /// Dictionaries of countries, categories and languages
    Database {
        #[arg(value_enum)]
        dictionary: Dictionary,

        /// Localize names (ru or en)
        #[arg(long)]
        lang: Option<String>,
    },

    /// Webhook settings
    #[command(subcommand)]
    Callback(CallbackCommand),
}

#[derive(Subcommand, Debug)]
pub enum ChannelCommand {
    /// Channel card
    Get {
        /// @username, t.me link or numeric id
        id: String,
    },

    /// Channel statistics summary
    Stat { id: String },

    /// Search the channel catalogue
    Search {
        #[arg(long)]
        country: String,

        #[arg(long)]
        q: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        limit: Option<u32>,
    },

    /// Recent posts of a channel
    Posts {
        id: String,

        #[arg(long)]
        limit: Option<u32>,

        #[arg(long)]
        offset: Option<u32>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PostCommand {
    /// Post by t.me link or TGStat id
    Get { id: String },
}

#[derive(Subcommand, Debug)]
pub enum CallbackCommand {
    /// Registered webhook and its delivery state
    Info,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dictionary {
    Countries,
    Categories,
    Languages,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_and_subcommand() {
        let cli = Cli::try_parse_from([
            "tgstat",
            "--token",
            "t",
            "--endpoint",
            "http://localhost:3000",
            "channel",
            "get",
            "@varlamov",
        ])
        .unwrap();
        assert_eq!(cli.token, "t");
        assert_eq!(cli.endpoint, "http://localhost:3000");
        assert!(matches!(cli.command, Commands::Channel(ChannelCommand::Get { ref id }) if id == "@varlamov"));
    }

    #[test]
    fn database_takes_dictionary_and_lang() {
        let cli = Cli::try_parse_from(["tgstat", "--token", "t", "database", "categories", "--lang", "en"]).unwrap();
        match cli.command {
            Commands::Database { dictionary, lang } => {
                assert_eq!(dictionary, Dictionary::Categories);
                assert_eq!(lang.as_deref(), Some("en"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn search_requires_country() {
        assert!(Cli::try_parse_from(["tgstat", "--token", "t", "channel", "search", "--q", "news"]).is_err());
    }
}
