//! CLI module - command-line interface for Watchlist
//!
//! This module provides a structured CLI using clap for argument parsing.

pub mod commands;

use clap::{Parser, Subcommand};

/// Watchlist - single-user movie list manager
#[derive(Parser)]
#[command(name = "watchlist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the web server (default)
    Serve,

    /// Apply database migrations
    Initdb {
        /// Recreate the schema from scratch, dropping existing data
        #[arg(long)]
        drop: bool,
    },

    /// Seed the owner name and a set of sample movies
    Forge,

    /// Create or update the sole account (interactive)
    Admin,

    /// Create a default config file
    Init,
}
