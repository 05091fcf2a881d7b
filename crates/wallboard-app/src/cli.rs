//! Command line interface definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Wallboard console client
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Configuration file path (can also be set via WALLBOARD_CONFIG env var)
    #[arg(short, long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all dashboards
    List,

    /// Show one dashboard with its widgets and users
    Show {
        /// Project identifier
        id: i64,
    },

    /// Watch the dashboard list and re-render on every change
    Watch,

    /// Create or replace a dashboard from a JSON file
    Create {
        /// Path to a project JSON file
        #[arg(long)]
        file: PathBuf,
    },

    /// Add a user to a dashboard
    AddUser {
        /// Project identifier
        project: i64,
        /// Username to authorize
        username: String,
    },

    /// Remove a user from a dashboard
    RemoveUser {
        /// Project identifier
        project: i64,
        /// User identifier
        user: i64,
    },

    /// Attach a widget to a dashboard from a JSON file
    AttachWidget {
        /// Path to a widget placement JSON file
        #[arg(long)]
        file: PathBuf,
    },
}
