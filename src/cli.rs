use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "netpipe")]
#[command(version)]
#[command(about = "Pipe terminal output to the browser, or watch a channel from the terminal")]
pub struct Args {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Watch a channel, printing incoming messages to stdout
    View {
        /// Channel URL (https://host/netpipe/abc) or bare channel id
        target: String,

        /// Server host, e.g. gillchristian.xyz or localhost:8080
        #[arg(long)]
        host: Option<String>,

        /// Use the insecure socket scheme even for deployed hosts
        #[arg(long)]
        insecure: bool,

        /// Pass payloads through without stripping control sequences
        #[arg(long)]
        raw: bool,
    },

    /// Run a command and stream its output to a fresh channel
    Run {
        /// Server host, e.g. gillchristian.xyz or localhost:8080
        #[arg(long)]
        host: Option<String>,

        /// Use the insecure scheme even for deployed hosts
        #[arg(long)]
        insecure: bool,

        /// The command to run, with its arguments
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        command: Vec<String>,
    },
}
