//! Shared test harness modules for the CareLink CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod helpers;
mod score_steps;
mod score_unit;
