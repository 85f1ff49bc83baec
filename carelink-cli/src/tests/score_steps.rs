//! Behaviour-driven step definitions driving the score CLI scenarios.

use super::helpers::{Workspace, score_request_json, write_utf8};
use super::*;
use camino::Utf8PathBuf;
use carelink_core::MatchScore;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

struct ScoreWorld {
    workspace: Workspace,
    request_path: Utf8PathBuf,
    include_request: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl ScoreWorld {
    fn new() -> Self {
        let workspace = Workspace::new();
        let request_path = workspace.path("request.json");
        Self {
            workspace,
            request_path,
            include_request: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["carelink".to_string(), "score".to_string()];
        if *self.include_request.borrow() {
            argv.push(self.request_path.as_str().to_string());
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn report(&self) -> MatchScore {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        result.as_ref().expect("expected success");
        serde_json::from_slice(&self.stdout.borrow()).expect("output should be a JSON match score")
    }
}

#[fixture]
fn world() -> ScoreWorld {
    ScoreWorld::new()
}

#[given("a valid score request exists on disk")]
fn valid_score_request_exists(#[from(world)] world: &ScoreWorld) {
    world
        .workspace
        .write_json("request.json", &score_request_json());
}

#[given("I ask for the caregiver perspective")]
fn ask_for_caregiver_perspective(#[from(world)] world: &ScoreWorld) {
    world
        .cli_args
        .borrow_mut()
        .extend(["--perspective".to_string(), "caregiver".to_string()]);
}

#[given("the score request contains invalid JSON")]
fn score_request_contains_invalid_json(#[from(world)] world: &ScoreWorld) {
    write_utf8(&world.request_path, b"{ not valid json");
}

#[given("I omit the score request path")]
fn omit_score_request_path(#[from(world)] world: &ScoreWorld) {
    *world.include_request.borrow_mut() = false;
}

#[when("I run the score command")]
fn run_score_command(#[from(world)] world: &ScoreWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| {
        let mut buffer = world.stdout.borrow_mut();
        dispatch(cli.command, &mut *buffer)
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds and prints a score of 76")]
fn command_succeeds_with_score(#[from(world)] world: &ScoreWorld) {
    assert_eq!(world.report().score, 76);
}

#[then("the reasons address the caregiver")]
fn reasons_address_caregiver(#[from(world)] world: &ScoreWorld) {
    let report = world.report();
    assert!(
        report
            .reasons
            .iter()
            .any(|reason| reason.starts_with("Your rate"))
    );
}

#[then("the command fails because the request JSON is invalid")]
fn command_fails_invalid_json(#[from(world)] world: &ScoreWorld) {
    let borrowed = world.result.borrow();
    match borrowed.as_ref().expect("result recorded") {
        Err(CliError::ParseRequest { .. }) => {}
        other => panic!("expected ParseRequest, found {other:?}"),
    }
}

#[then("the command fails because the request path is missing")]
fn command_fails_missing_request_path(#[from(world)] world: &ScoreWorld) {
    let borrowed = world.result.borrow();
    match borrowed.as_ref().expect("result recorded") {
        Err(CliError::MissingArgument { field, env }) => {
            assert_eq!(*field, ARG_REQUEST);
            assert_eq!(*env, ENV_SCORE_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

macro_rules! register_score_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/score_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: ScoreWorld) {
            let _ = world;
        }
    };
}

register_score_scenario!(score_happy_path, "scoring a caregiver against a listing");
register_score_scenario!(score_caregiver_perspective, "addressing the caregiver directly");
register_score_scenario!(score_invalid_json, "rejecting invalid JSON input");
register_score_scenario!(score_missing_request, "rejecting missing request paths");
