//! CLI module for the student performance gateway
//!
//! Provides subcommands for running the gateway in different modes:
//! - `serve`: API + UI combined (default)
//! - `api`: API server only

pub mod api;
pub mod serve;

use clap::{Parser, Subcommand};

/// Student Performance Gateway - entry form and proxy for a grade predictor
#[derive(Parser)]
#[command(name = "student-performance-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run API + UI server combined (default mode)
    Serve,

    /// Run API server only
    Api,
}
