//! `websets` command-line tool.
//!
//! Creates Exa WebSets, waits for them, and inspects existing ones. Every
//! command prints one JSON outcome on stdout; failures carry `"isError": true`
//! and exit non-zero.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use exa_websets::{Client, ExaConfig};
use websets_tool_core::{ErasedTool, ToolContext};
use websets_tools::{PollOptions, WebsetTools, build_registry};

mod args;

use args::{CreateArgs, ItemsArgs};

#[derive(Parser)]
#[command(name = "websets")]
#[command(about = "Create and inspect Exa WebSets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Exa API key
    #[arg(long, env = "EXA_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Maximum number of status checks while waiting
    #[arg(long, global = true)]
    poll_attempts: Option<u32>,

    /// Seconds between status checks while waiting
    #[arg(long, global = true)]
    poll_interval_secs: Option<u64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a webset and, unless --no-wait is given, wait for its items
    Create(CreateArgs),
    /// Show the status of a webset
    Status {
        /// Webset identifier
        webset_id: String,
    },
    /// List items found by a webset
    Items(ItemsArgs),
    /// Cancel a running webset
    Cancel {
        /// Webset identifier
        webset_id: String,
    },
    /// List the available tools
    Tools,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();
}

fn build_tools(cli: &Cli) -> WebsetTools {
    let mut poll = PollOptions::from_env();
    if let Some(n) = cli.poll_attempts {
        poll = poll.with_max_attempts(n);
    }
    if let Some(secs) = cli.poll_interval_secs {
        poll = poll.with_interval(Duration::from_secs(secs));
    }

    let mut config = ExaConfig::new();
    if let Some(key) = &cli.api_key {
        config = config.with_api_key(key.clone());
    }

    WebsetTools::new()
        .with_client(Client::with_config(config))
        .with_poll(poll)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let registry = build_registry(Arc::new(build_tools(&cli)));

    let (tool, args) = match cli.command {
        Commands::Create(args) => ("create_webset", args.into_json()),
        Commands::Status { webset_id } => {
            ("get_webset_status", serde_json::json!({ "websetId": webset_id }))
        }
        Commands::Items(args) => ("list_webset_items", args.into_json()),
        Commands::Cancel { webset_id } => {
            ("cancel_webset", serde_json::json!({ "websetId": webset_id }))
        }
        Commands::Tools => {
            for name in registry.list_names() {
                let description = registry
                    .get(&name)
                    .map(|t| t.description())
                    .unwrap_or_default();
                println!("{name}\t{description}");
            }
            return Ok(ExitCode::SUCCESS);
        }
    };

    let outcome = registry
        .dispatch_outcome(tool, args, &ToolContext::for_caller("cli"))
        .await;
    let failed = outcome.is_error();
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
