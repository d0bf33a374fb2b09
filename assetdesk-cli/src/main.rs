// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! AssetDesk CLI
//!
//! Command-line interface for AssetDesk - manage images, module content
//! and markdown files on a remote asset store.

mod commands;
mod config;
mod display;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use assetdesk_core::config::DEFAULT_BASE_URL;
use assetdesk_core::{AdminError, Category, Module};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::EnvFilter;

use config::{resolve_scope, CliConfig};

#[derive(Parser)]
#[command(name = "assetdesk")]
#[command(version, about = "Manage images, content documents and markdown files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Store API address
    #[arg(
        long,
        global = true,
        env = "ASSETDESK_BASE_URL",
        default_value = DEFAULT_BASE_URL
    )]
    base_url: String,

    /// Address raw resources are served from (default: the API address)
    #[arg(long, global = true, env = "ASSETDESK_RESOURCE_URL")]
    resource_url: Option<String>,

    /// Request timeout in seconds
    #[arg(
        long,
        global = true,
        env = "ASSETDESK_TIMEOUT_SECS",
        default_value_t = 30
    )]
    timeout_secs: u64,

    /// Proxy URL
    #[arg(long, global = true, env = "ASSETDESK_PROXY")]
    proxy: Option<String>,

    /// More log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Args)]
struct ScopeArgs {
    /// Resource category (image, content, markdown)
    category: Category,

    /// Content module (home, products, solutions, about); default home
    #[arg(long, short)]
    module: Option<Module>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the resources of a category
    List {
        #[command(flatten)]
        scope: ScopeArgs,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Upload a file
    Upload {
        #[command(flatten)]
        scope: ScopeArgs,

        /// File to upload
        file: PathBuf,
    },

    /// Mark a content resource as the module's in-use resource
    Use {
        /// Resource ID
        id: String,

        /// Content module
        #[arg(long, short, default_value = "home")]
        module: Module,
    },

    /// Delete a resource
    Delete {
        #[command(flatten)]
        scope: ScopeArgs,

        /// Resource ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Download a resource under its original filename
    Download {
        #[command(flatten)]
        scope: ScopeArgs,

        /// Resource ID
        id: String,

        /// Target directory
        #[arg(long, short, default_value = ".")]
        out: PathBuf,
    },

    /// Print the URL of a resource
    Url {
        #[command(flatten)]
        scope: ScopeArgs,

        /// Resource ID
        id: String,

        /// Open the URL in the system browser
        #[arg(long)]
        open: bool,
    },

    /// Show a markdown file
    Preview {
        /// Resource ID
        id: String,
    },

    /// List the content modules
    Modules {
        /// Show record counts and the in-use resource per module
        #[arg(long)]
        counts: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli).await {
        if !already_notified(&err) {
            display::error(&format!("{:#}", err));
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("assetdesk={level},assetdesk_core={level}"))
    });

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

/// Whether the panel already printed this failure as a notification.
fn already_notified(err: &anyhow::Error) -> bool {
    match err.downcast_ref::<AdminError>() {
        None
        | Some(AdminError::Configuration(_))
        | Some(AdminError::NoPendingDelete)
        | Some(AdminError::DeleteInFlight(_)) => false,
        Some(_) => true,
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = CliConfig {
        base_url: cli.base_url,
        resource_url: cli.resource_url,
        timeout_secs: cli.timeout_secs,
        proxy_url: cli.proxy,
    };

    match cli.command {
        Commands::List { scope, json } => {
            let scope = resolve_scope(scope.category, scope.module)?;
            commands::resources::list(&config, scope, json).await?;
        }
        Commands::Upload { scope, file } => {
            let scope = resolve_scope(scope.category, scope.module)?;
            commands::resources::upload(&config, scope, &file).await?;
        }
        Commands::Use { id, module } => {
            commands::resources::mark_used(&config, module, &id).await?;
        }
        Commands::Delete { scope, id, yes } => {
            let scope = resolve_scope(scope.category, scope.module)?;
            commands::resources::delete(&config, scope, &id, yes).await?;
        }
        Commands::Download { scope, id, out } => {
            let scope = resolve_scope(scope.category, scope.module)?;
            commands::resources::download(&config, scope, &id, &out).await?;
        }
        Commands::Url { scope, id, open } => {
            let scope = resolve_scope(scope.category, scope.module)?;
            commands::resources::url(&config, scope, &id, open).await?;
        }
        Commands::Preview { id } => {
            commands::resources::preview(&config, &id).await?;
        }
        Commands::Modules { counts } => {
            commands::modules::list(&config, counts).await?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "assetdesk", &mut io::stdout());
        }
    }

    Ok(())
}
