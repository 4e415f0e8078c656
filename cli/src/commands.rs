pub mod check;
pub mod lookup;

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "iplist")]
#[command(about = "Classify addresses against PeerGuardian-style IP range lists.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reject lists that are unsorted or contain overlapping ranges
    #[arg(long, global = true)]
    pub strict: bool,

    /// Skip lines with a missing ':' or '-' instead of aborting
    #[arg(long, global = true)]
    pub skip_errors: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the range each address falls into
    #[command(alias = "l")]
    Lookup {
        /// Path to the range list
        #[arg(short, long)]
        list: PathBuf,
        /// Addresses to look up (IPv4 or IPv6)
        #[arg(required = true)]
        addrs: Vec<IpAddr>,
    },
    /// Load a list and report how many ranges it holds
    #[command(alias = "c")]
    Check {
        /// Path to the range list
        #[arg(short, long)]
        list: PathBuf,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
