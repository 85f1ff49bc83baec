//! Command-line interface for scoring CareLink requests offline.
//!
//! Each subcommand reads a JSON request, runs the matching engine and prints
//! a pretty-printed JSON report. Options can come from CLI flags,
//! configuration files, or `CARELINK_CMDS_*` environment variables.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod error;
mod homes;
mod rank;
mod report;
mod score;

pub use error::CliError;

use homes::HomesArgs;
use rank::RankArgs;
use score::ScoreArgs;

pub(crate) const ARG_REQUEST: &str = "request";
pub(crate) const ENV_SCORE_REQUEST: &str = "CARELINK_CMDS_SCORE_REQUEST_PATH";
pub(crate) const ENV_RANK_REQUEST: &str = "CARELINK_CMDS_RANK_REQUEST_PATH";
pub(crate) const ENV_HOMES_REQUEST: &str = "CARELINK_CMDS_HOMES_REQUEST_PATH";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ARG_LIMIT: &str = "limit";

/// Run the CareLink CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, the request file or
/// scoring fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, stdout: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Score(args) => score::run_score(args, stdout),
        Command::Rank(args) => rank::run_rank(args, stdout),
        Command::Homes(args) => homes::run_homes(args, stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "carelink",
    about = "Score caregivers, listings and homes from JSON requests",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score one caregiver against one listing.
    Score(ScoreArgs),
    /// Rank caregivers for a listing, or listings for a caregiver.
    Rank(RankArgs),
    /// Rank assisted-living homes for a family.
    Homes(HomesArgs),
}

#[cfg(test)]
mod tests;
