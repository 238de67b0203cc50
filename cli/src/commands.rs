pub mod generate;
pub mod show;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use crtgen_common::config::{Config, DEFAULT_INPUT, DEFAULT_PORT};
use crtgen_common::session::Group;
use crtgen_core::parser;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "crtgen", version)]
#[command(about = "Generate SecureCRT session files for large numbers of hosts.")]
#[command(
    long_about = "Generate SecureCRT session files for large numbers of hosts.\n\n\
    Hosts are listed one per line as [username@]host[:port] and can be grouped,\n\
    to any depth, with `name:[` ... `]`."
)]
pub struct CommandLine {
    /// Hierarchy description to read
    #[arg(short, long, default_value = DEFAULT_INPUT, global = true)]
    pub file: String,

    /// Username for hosts that do not name one
    #[arg(short, long, default_value = "", global = true)]
    pub username: String,

    /// Port for hosts that do not name one (0 keeps the default)
    #[arg(short, long, default_value_t = DEFAULT_PORT, global = true)]
    pub port: u16,

    /// Output file [default: <FILE>.xml]
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Print less; repeat for errors only
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy, Default)]
pub enum Commands {
    /// Write the SecureCRT session XML (default)
    #[default]
    #[command(alias = "g")]
    Generate,
    /// Print the parsed host hierarchy
    #[command(alias = "s")]
    Show,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config::resolve(
            &self.file,
            &self.username,
            self.port,
            self.output.clone(),
            self.quiet,
        )
    }
}

/// Reads and parses the configured input file.
pub fn load_hierarchy(cfg: &Config) -> anyhow::Result<Group> {
    let path: String = cfg.input.display().to_string();
    let text: String =
        fs::read_to_string(&cfg.input).with_context(|| format!("failed to read {path}"))?;

    info!("Parsing {path}");
    debug!(
        username = %cfg.defaults.username,
        port = cfg.defaults.port,
        "Host defaults"
    );

    parser::parse(&text, &cfg.defaults).with_context(|| format!("failed to parse {path}"))
}
