use clap::{Parser, Subcommand};

/// Job listing management backend
#[derive(Parser, Debug)]
#[command(name = "job-board")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server (default when no subcommand is given)
    Serve,

    /// Replace the jobs table contents with sample job listings
    Seed,
}
