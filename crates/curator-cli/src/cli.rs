use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};

use curator_core::CuratorConfig;

use crate::commands;

#[derive(Debug, Parser)]
#[command(name = "curator", author, version, about = "Topic classifier for saved blog posts", long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, env = "CURATOR_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Emit JSON log lines
    #[arg(long, global = true)]
    pub json_logs: bool,
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify one saved post and print its report line
    Classify {
        /// Saved post HTML
        file: PathBuf,
        /// Current topic (default: inferred from the file name)
        #[arg(long, value_name = "KEY")]
        topic: Option<String>,
        /// Also list every matcher that fired
        #[arg(long)]
        explain: bool,
    },
    /// Classify every post in a directory and write the report
    Scan {
        /// Post directory (default: archive.posts_dir)
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Report file (default: archive.report_path)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Classify one post at a time
        #[arg(long)]
        sequential: bool,
    },
    /// Print the move plan for a report
    Plan {
        /// Report file (default: archive.report_path)
        report: Option<PathBuf>,
    },
    /// List topics, display names and matcher counts
    Topics,
    /// Load and validate the configuration and every pattern
    CheckConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    curator_observability::init_tracing(&config.observability);
    tracing::debug!(command = ?cli.command, "starting");

    let mut out = io::stdout().lock();
    commands::dispatch(cli.command, &config, &mut out)
}

/// Configuration from `--config` (or defaults), with CLI flags applied on top.
pub fn load_config(cli: &Cli) -> Result<CuratorConfig> {
    let mut config = match &cli.config {
        Some(path) => CuratorConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => CuratorConfig::default(),
    };
    if cli.json_logs {
        config.observability.json = true;
    }
    match cli.verbose {
        0 => {}
        1 => config.observability.log_level = "debug".to_string(),
        _ => config.observability.log_level = "trace".to_string(),
    }
    Ok(config)
}
