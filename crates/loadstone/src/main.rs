// SPDX-FileCopyrightText: 2026 Loadstone Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loadstone - an extensible load benchmarking framework.
//!
//! This is the binary entry point for the plugin inspection CLI.

use std::io::IsTerminal;

use clap::{Args, Parser, Subcommand};
use loadstone::plugin;
use loadstone_config::LoadstoneConfig;

/// Loadstone - an extensible load benchmarking framework.
#[derive(Parser, Debug)]
#[command(name = "loadstone", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Inspect the plugins registered with this binary.
    Plugin {
        #[command(subcommand)]
        command: PluginCommands,
    },
}

#[derive(Subcommand, Debug)]
enum PluginCommands {
    /// Show detailed information about one plugin.
    Show(ShowArgs),
    /// List plugins matching name, namespace, and base filters.
    List(ListArgs),
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Plugin name, matched as a case-insensitive substring.
    #[arg(long, value_parser = non_empty)]
    name: String,

    /// Restrict the lookup to one plugin namespace.
    #[arg(long)]
    namespace: Option<String>,

    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// List only plugins whose name contains this substring.
    #[arg(long)]
    name: Option<String>,

    /// List only plugins in this namespace.
    #[arg(long)]
    namespace: Option<String>,

    /// List only plugins with exactly this base tag (e.g. Scenario).
    #[arg(long = "plugin-base")]
    plugin_base: Option<String>,

    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn non_empty(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("plugin name must not be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Install the tracing subscriber, writing to stderr.
///
/// The `LOADSTONE_LOG` env var overrides the configured level and accepts
/// full `EnvFilter` directives.
fn init_tracing(config: &LoadstoneConfig) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("LOADSTONE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match loadstone_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            loadstone_config::render_errors(&errors);
            std::process::exit(1);
        }
    };
    init_tracing(&config);

    let use_color = config.output.color && std::io::stdout().is_terminal();

    // The registry must be populated before any inspection query runs.
    let registry = loadstone_plugin::builtin_registry();

    match cli.command {
        Commands::Plugin { command } => match command {
            PluginCommands::Show(args) => plugin::run_show(
                &registry,
                &args.name,
                args.namespace.as_deref(),
                args.json,
                use_color,
            ),
            PluginCommands::List(args) => plugin::run_list(
                &registry,
                args.name.as_deref(),
                args.namespace.as_deref(),
                args.plugin_base.as_deref(),
                args.json,
                use_color,
            ),
        },
    }
}
