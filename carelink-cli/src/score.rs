//! `score` command: one caregiver against one listing.

use std::io::Write;

use camino::Utf8PathBuf;
use carelink_core::{Caregiver, Listing, MatchScore, ScoringOptions};
use carelink_scorer::{score_caregiver_for_listing, score_listing_for_caregiver};
use clap::{Parser, ValueEnum};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::report::ReportPaths;
use crate::{ARG_OUTPUT, CliError, ENV_SCORE_REQUEST};

/// Whose point of view the reasons are written from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Perspective {
    /// Reasons describe the caregiver to the family that posted the listing.
    #[default]
    Listing,
    /// Reasons address the caregiver directly.
    Caregiver,
}

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score a caregiver against a listing. The request is a JSON \
                 object with `caregiver`, `listing` and optional `options` \
                 fields.",
    about = "Score one caregiver/listing pair"
)]
#[ortho_config(prefix = "CARELINK")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file containing a score request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Whose point of view the reasons are written from.
    #[arg(long, value_enum, value_name = "side")]
    #[serde(default)]
    pub(crate) perspective: Option<Perspective>,
    /// Write the report to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    pub(crate) paths: ReportPaths,
    pub(crate) perspective: Perspective,
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            paths: ReportPaths::new(args.request_path, args.output, ENV_SCORE_REQUEST)?,
            perspective: args.perspective.unwrap_or_default(),
        })
    }
}

/// JSON payload accepted by `score`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) caregiver: Caregiver,
    pub(crate) listing: Listing,
    #[serde(default)]
    pub(crate) options: ScoringOptions,
}

pub(crate) fn run_score(args: ScoreArgs, stdout: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let request: ScoreRequest = config.paths.load()?;
    let score = execute_score(&request, config.perspective)?;
    config.paths.emit(&score, stdout)
}

pub(crate) fn execute_score(
    request: &ScoreRequest,
    perspective: Perspective,
) -> Result<MatchScore, CliError> {
    let score = match perspective {
        Perspective::Listing => {
            score_caregiver_for_listing(&request.caregiver, &request.listing, &request.options)?
        }
        Perspective::Caregiver => {
            score_listing_for_caregiver(&request.listing, &request.caregiver, &request.options)?
        }
    };
    Ok(score)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}
