//! Jeen CLI - drive the ordering site from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Add a menu item to the cart
//! jeen menu add --name "Green Bowl" --price 12.50
//!
//! # Preview a configured meal, then add it
//! jeen customize --protein eggs --veggies tomato --sauce mustard
//! jeen customize --protein eggs --add
//!
//! # Inspect and edit the cart
//! jeen cart show
//! jeen cart inc 1
//!
//! # Place the order
//! jeen checkout --country US --city "New York" --postal 10001 --street "Main St" --payment card
//!
//! # Accounts
//! jeen account signup --name "Ann Lee" --email ann@example.com --password secret
//! jeen account whoami
//! ```
//!
//! State lives in `JEEN_DATA_DIR` (default `.jeen`), one JSON file per
//! storage key, in the same shapes the site's pages keep in local storage.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jeen_storefront::{AppError, Storefront, StorefrontConfig};

mod commands;

#[derive(Parser)]
#[command(name = "jeen")]
#[command(author, version, about = "Jeen ordering site from the command line")]
struct Cli {
    /// Directory holding the store (overrides `JEEN_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Render HTML fragments instead of plain text
    #[arg(long, global = true, conflicts_with = "json")]
    html: bool,

    /// Print machine-readable JSON where available
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Menu page actions
    Menu {
        #[command(subcommand)]
        action: commands::menu::MenuAction,
    },
    /// Configure a meal and optionally add it to the cart
    Customize(commands::customize::CustomizeArgs),
    /// Show or edit the cart
    Cart {
        #[command(subcommand)]
        action: commands::cart::CartCommand,
    },
    /// Run the checkout wizard and place the order
    Checkout(commands::checkout::CheckoutArgs),
    /// Sign up, log in and edit the profile
    Account {
        #[command(subcommand)]
        action: commands::account::AccountAction,
    },
    /// Show the header badge and profile button
    Header,
}

/// Output format chosen on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Html,
    Json,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            if writeln!(stdout, "{output}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            if e.is_user_error() {
                tracing::debug!(error = %e, "Command refused");
            } else {
                tracing::error!(error = %e, "Command failed");
            }
            let _ = writeln!(std::io::stderr().lock(), "{}", e.user_message());
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "jeen_storefront=info,jeen_cli=info".into());

    // JEEN_LOG_FORMAT=json switches to structured logs for piping
    let is_json = std::env::var("JEEN_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let json_layer = is_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!is_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn run(cli: Cli) -> Result<String, AppError> {
    let mut config = StorefrontConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    let format = if cli.html {
        Format::Html
    } else if cli.json {
        Format::Json
    } else {
        Format::Text
    };

    let site = Storefront::open(config)?;
    tracing::debug!(data_dir = %site.config().data_dir.display(), "Store opened");

    match cli.command {
        Commands::Menu { action } => commands::menu::run(&site, action, format),
        Commands::Customize(args) => commands::customize::run(&site, &args, format),
        Commands::Cart { action } => commands::cart::run(&site, action, format),
        Commands::Checkout(args) => commands::checkout::run(&site, args, format),
        Commands::Account { action } => commands::account::run(&site, action, format),
        Commands::Header => commands::header::run(&site, format),
    }
}
