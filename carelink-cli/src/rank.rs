//! `rank` command: caregivers for a listing, or listings for a caregiver.

use std::io::Write;

use camino::Utf8PathBuf;
use carelink_core::{CaregiverCandidate, Coordinate, Listing, MatchScore, WeightOverrides};
use carelink_scorer::{
    RankOptions, RankedMatch, rank_caregivers_for_listing, rank_listings_for_caregiver,
};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::report::ReportPaths;
use crate::{ARG_LIMIT, ARG_OUTPUT, CliError, ENV_RANK_REQUEST};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank candidates from a JSON request. Supply `listing` and \
                 `candidates` to rank caregivers for a listing, or \
                 `caregiver` and `listings` to rank listings for a caregiver. \
                 Optional `weights`, `max_distance` and `listing_location` \
                 apply to every pair.",
    about = "Rank caregivers or listings"
)]
#[ortho_config(prefix = "CARELINK")]
pub(crate) struct RankArgs {
    /// Path to a JSON file containing a rank request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Keep at most this many results.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Keep matches that cannot cover any of the care window.
    #[arg(long)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) include_unavailable: bool,
    /// Write the report to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    pub(crate) paths: ReportPaths,
    pub(crate) limit: Option<usize>,
    pub(crate) include_unavailable: bool,
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            paths: ReportPaths::new(args.request_path, args.output, ENV_RANK_REQUEST)?,
            limit: args.limit,
            include_unavailable: args.include_unavailable,
        })
    }
}

/// Which side of the marketplace is being ranked.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum RankSubject {
    /// Caregivers competing for one listing.
    Caregivers {
        listing: Listing,
        candidates: Vec<CaregiverCandidate>,
    },
    /// Listings offered to one caregiver.
    Listings {
        caregiver: CaregiverCandidate,
        listings: Vec<Listing>,
    },
}

/// JSON payload accepted by `rank`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct RankRequest {
    #[serde(flatten)]
    pub(crate) subject: RankSubject,
    #[serde(default)]
    pub(crate) weights: WeightOverrides,
    #[serde(default)]
    pub(crate) max_distance: Option<f64>,
    #[serde(default)]
    pub(crate) listing_location: Option<Coordinate>,
}

/// One line of the ranking report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct RankedEntry {
    pub(crate) rank: usize,
    pub(crate) id: String,
    #[serde(flatten)]
    pub(crate) score: MatchScore,
}

pub(crate) fn run_rank(args: RankArgs, stdout: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let request: RankRequest = config.paths.load()?;
    let report = execute_rank(&request, &config)?;
    config.paths.emit(&report, stdout)
}

pub(crate) fn execute_rank(
    request: &RankRequest,
    config: &RankConfig,
) -> Result<Vec<RankedEntry>, CliError> {
    let options = RankOptions {
        weights: request.weights,
        max_distance: request.max_distance,
        listing_location: request.listing_location,
        include_unavailable: config.include_unavailable,
    };
    let ranked = match &request.subject {
        RankSubject::Caregivers {
            listing,
            candidates,
        } => rank_caregivers_for_listing(listing, candidates, &options, config.limit)?,
        RankSubject::Listings {
            caregiver,
            listings,
        } => rank_listings_for_caregiver(caregiver, listings, &options, config.limit)?,
    };
    Ok(ranked
        .into_iter()
        .enumerate()
        .map(|(index, RankedMatch { id, score })| RankedEntry {
            rank: index + 1,
            id,
            score,
        })
        .collect())
}
