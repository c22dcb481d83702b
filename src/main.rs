use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use ticketboard::Config;
use ticketboard::commands::{LsOptions, cmd_browse, cmd_columns, cmd_ls, cmd_show};

#[derive(Parser)]
#[command(name = "ticketboard")]
#[command(about = "Sortable, filterable ticket table")]
#[command(version)]
struct Cli {
    /// Base URL of the ticket API (overrides config and TICKETBOARD_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Read tickets from a JSON file instead of the API
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Configuration file to use instead of the default locations
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List tickets as a table
    #[command(visible_alias = "l")]
    Ls {
        /// Column filter as COLUMN=VALUE (repeatable, all must match)
        #[arg(short, long = "filter", value_name = "COLUMN=VALUE")]
        filters: Vec<String>,

        /// Column to sort by
        #[arg(short, long)]
        sort: Option<String>,

        /// Sort descending instead of ascending
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the details of one ticket
    #[command(visible_alias = "s")]
    Show {
        /// Ticket ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the table columns
    Columns {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive table session (commands on stdin)
    #[command(visible_alias = "b")]
    Browse,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("TICKETBOARD_LOG")
        .unwrap_or_else(|_| EnvFilter::new("ticketboard=warn"));

    let format = env::var("TICKETBOARD_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config.with_overrides(cli.url, cli.file),
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Ls {
            filters,
            sort,
            desc,
            json,
        } => {
            cmd_ls(
                &config,
                LsOptions {
                    filters,
                    sort,
                    descending: desc,
                    json,
                },
            )
            .await
        }
        Commands::Show { id, json } => cmd_show(&config, &id, json).await,
        Commands::Columns { json } => cmd_columns(&config, json),
        Commands::Browse => cmd_browse(&config).await,
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
