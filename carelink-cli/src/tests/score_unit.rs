//! Focused unit tests covering score CLI configuration and execution.

use super::helpers::{Workspace, score_request_json};
use super::*;
use crate::report::load_request;
use crate::score::{
    Perspective, ScoreArgs, ScoreConfig, ScoreRequest, config_from_layers_for_test,
    execute_score, run_score,
};
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
fn converting_score_without_request_errors() {
    let args = ScoreArgs::default();

    let err = ScoreConfig::try_from(args).expect_err("missing request should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_REQUEST);
            assert_eq!(env, ENV_SCORE_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn perspective_defaults_to_the_listing_side() {
    let args = ScoreArgs {
        request_path: Some("request.json".into()),
        ..ScoreArgs::default()
    };

    let config = ScoreConfig::try_from(args).expect("config should build");
    assert_eq!(config.perspective, Perspective::Listing);
    assert_eq!(config.paths.output, None);
}

#[rstest]
fn execute_score_blends_all_factors() {
    let workspace = Workspace::new();
    let path = workspace.write_json("request.json", &score_request_json());
    let request: ScoreRequest = load_request(&path).expect("request should decode");

    let score = execute_score(&request, Perspective::Listing).expect("scoring should succeed");
    assert_eq!(score.score, 76);
    assert!(
        score
            .reasons
            .iter()
            .any(|reason| reason.starts_with("Caregiver's rate ($25/hr)"))
    );
}

#[rstest]
fn caregiver_perspective_rewrites_reasons() {
    let workspace = Workspace::new();
    let path = workspace.write_json("request.json", &score_request_json());
    let request: ScoreRequest = load_request(&path).expect("request should decode");

    let family = execute_score(&request, Perspective::Listing).expect("family view");
    let own = execute_score(&request, Perspective::Caregiver).expect("caregiver view");
    assert_eq!(family.score, own.score);
    assert!(own.reasons.iter().any(|reason| reason.starts_with("Your rate ($25/hr)")));
}

#[rstest]
fn invalid_weights_surface_as_scoring_errors() {
    let workspace = Workspace::new();
    let mut payload = score_request_json();
    payload["options"] = json!({ "weights": { "distance": -1.0 } });
    let path = workspace.write_json("request.json", &payload);
    let request: ScoreRequest = load_request(&path).expect("request should decode");

    let err = execute_score(&request, Perspective::Listing).expect_err("weights are invalid");
    match err {
        CliError::Scoring(_) => {}
        other => panic!("expected Scoring, found {other:?}"),
    }
}

#[rstest]
fn run_score_prints_json_report() {
    let workspace = Workspace::new();
    let path = workspace.write_json("request.json", &score_request_json());
    let args = ScoreArgs {
        request_path: Some(path),
        ..ScoreArgs::default()
    };

    let mut stdout = Vec::new();
    run_score(args, &mut stdout).expect("score should succeed");

    let report: Value = serde_json::from_slice(&stdout).expect("stdout should be JSON");
    assert_eq!(report["score"], json!(76));
    assert_eq!(report["factors"]["rate_fit"]["score"], json!(100.0));
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "request_path": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;

    let workspace = Workspace::new();
    let env_request = workspace.path("from-env-request.json");
    let cli_output = workspace.path("from-cli-report.json");

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "perspective": "listing",
            "output": workspace.path("from-file-report.json").as_str(),
        }),
        None,
    );
    composer.push_environment(json!({
        "request_path": env_request.as_str(),
        "perspective": "caregiver",
    }));
    composer.push_cli(json!({
        "output": cli_output.as_str(),
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.paths.request_path, env_request);
    assert_eq!(config.paths.output, Some(cli_output));
    assert_eq!(config.perspective, Perspective::Caregiver);
}
