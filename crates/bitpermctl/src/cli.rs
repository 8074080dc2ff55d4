use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

use crate::mask::parse_mask;

#[derive(Debug, Subcommand, PartialEq)]
pub(crate) enum Command {
    /// List every permission in the table.
    List,
    /// Check whether a mask holds a permission.
    Check {
        /// Permission mask (decimal, 0x hex or 0b binary)
        #[arg(value_parser = parse_mask)]
        mask: u64,
        /// Permission name
        name: String,
    },
    /// Add permissions to a mask.
    Assign {
        /// Permission mask (decimal, 0x hex or 0b binary)
        #[arg(value_parser = parse_mask)]
        mask: u64,
        /// Permission names
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Remove permissions from a mask.
    Remove {
        /// Permission mask (decimal, 0x hex or 0b binary)
        #[arg(value_parser = parse_mask)]
        mask: u64,
        /// Permission names
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Show the permissions held by a mask.
    Decode {
        /// Permission mask (decimal, 0x hex or 0b binary)
        #[arg(value_parser = parse_mask)]
        mask: u64,
    },
    /// Build a mask from permission names.
    Encode {
        /// Permission names
        names: Vec<String>,
    },
    /// Report suspicious entries in the table.
    Lint,
}

/// Inspect and edit bitmask permission values.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Turn debugging information on
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Yaml permission table to use instead of the built-in one
    #[arg(short, long)]
    pub table: Option<PathBuf>,

    /// The command to run
    #[clap(subcommand)]
    pub command: Command,
}
