//! `homes` command: assisted-living homes for a family.

use std::io::Write;

use camino::Utf8PathBuf;
use carelink_core::{FamilyPreferences, HomeListing, HomeScore};
use carelink_scorer::{DEFAULT_HOME_LIMIT, find_matching_homes};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::report::ReportPaths;
use crate::{ARG_LIMIT, ARG_OUTPUT, CliError, ENV_HOMES_REQUEST};

/// CLI arguments for the `homes` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank assisted-living homes for a family. The request is a \
                 JSON object with `preferences` and `homes` fields.",
    about = "Rank homes by fit"
)]
#[ortho_config(prefix = "CARELINK")]
pub(crate) struct HomesArgs {
    /// Path to a JSON file containing a homes request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Keep at most this many homes (default 5).
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Write the report to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl HomesArgs {
    pub(crate) fn into_config(self) -> Result<HomesConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        HomesConfig::try_from(merged)
    }
}

/// Resolved `homes` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HomesConfig {
    pub(crate) paths: ReportPaths,
    pub(crate) limit: usize,
}

impl TryFrom<HomesArgs> for HomesConfig {
    type Error = CliError;

    fn try_from(args: HomesArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            paths: ReportPaths::new(args.request_path, args.output, ENV_HOMES_REQUEST)?,
            limit: args.limit.unwrap_or(DEFAULT_HOME_LIMIT),
        })
    }
}

/// JSON payload accepted by `homes`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct HomesRequest {
    pub(crate) preferences: FamilyPreferences,
    #[serde(default)]
    pub(crate) homes: Vec<HomeListing>,
}

pub(crate) fn run_homes(args: HomesArgs, stdout: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let request: HomesRequest = config.paths.load()?;
    let matches = execute_homes(&request, config.limit);
    config.paths.emit(&matches, stdout)
}

pub(crate) fn execute_homes(request: &HomesRequest, limit: usize) -> Vec<HomeScore> {
    find_matching_homes(&request.preferences, &request.homes, limit)
}
