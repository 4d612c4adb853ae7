//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

/// Hanging mobiles as binary trees: weight, height, balance, mirroring
#[derive(Parser, Debug)]
#[command(name = "mobile")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the demonstration on the built-in sample mobile (default)
    Demo,

    /// Print mass, height, leaves, notation and balance of a mobile
    Show {
        /// Mobile in bracket notation, e.g. "[[(3),4,(2),6],2,(1),10]"
        mobile: String,
        /// Also print the mobile as a tree
        #[arg(short, long)]
        tree: bool,
    },

    /// Print the mirror image of a mobile
    Mirror {
        /// Mobile in bracket notation
        mobile: String,
    },

    /// Compare two mobiles structurally
    Compare {
        /// First mobile
        first: String,
        /// Second mobile
        second: String,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config path
    Path,
}
