//! Behaviour-driven step definitions driving the `uhi` command scenarios.

use super::helpers::{INDUSTRIAL_HOTSPOT_JSON, parse_output, workspace, write_utf8};
use super::*;
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use tempfile::TempDir;
use uhi_recommender::SimulationError;

#[derive(Debug)]
struct CommandWorld {
    _tmp: TempDir,
    root: Utf8PathBuf,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl CommandWorld {
    fn new() -> Self {
        let (tmp, root) = workspace();
        Self {
            _tmp: tmp,
            root,
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn push_args<const N: usize>(&self, args: [&str; N]) {
        self.cli_args
            .borrow_mut()
            .extend(args.iter().map(|arg| (*arg).to_owned()));
    }

    fn run(&self, subcommand: &str) {
        let mut argv = vec!["uhi".to_owned(), subcommand.to_owned()];
        argv.extend(self.cli_args.borrow().iter().cloned());
        let parsed = Cli::try_parse_from(argv).map_err(CliError::from);
        let mut buffer = self.stdout.borrow_mut();
        let outcome = parsed.and_then(|cli| dispatch(cli.command, &mut *buffer));
        self.result.replace(Some(outcome));
    }

    fn output(&self) -> serde_json::Value {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        if let Err(err) = result {
            panic!("expected success, found {err:?}");
        }
        parse_output(&self.stdout.borrow())
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            match result.as_ref().expect("result recorded") {
                Ok(()) => panic!("expected failure"),
                Err(err) => err,
            }
        })
    }
}

#[fixture]
fn world() -> CommandWorld {
    CommandWorld::new()
}

#[given("I select reference hotspot 1")]
fn select_reference_hotspot(#[from(world)] world: &CommandWorld) {
    world.push_args([format!("--{ARG_HOTSPOT_ID}").as_str(), "1"]);
}

#[given("I cap the budget at 250000")]
fn cap_budget(#[from(world)] world: &CommandWorld) {
    world.push_args([format!("--{ARG_BUDGET}").as_str(), "250000"]);
}

#[given("a hotspot file describing 2.5 hectares and 1500 residents")]
fn hotspot_file(#[from(world)] world: &CommandWorld) {
    let path = world.root.join("hotspot.json");
    write_utf8(&path, INDUSTRIAL_HOTSPOT_JSON);
    world.push_args([format!("--{ARG_HOTSPOT_FILE}").as_str(), path.as_str()]);
}

#[given("I choose Cool Roof at 50 percent coverage")]
fn choose_cool_roof(#[from(world)] world: &CommandWorld) {
    world.push_args(["--kind", "Cool Roof", "--coverage", "50"]);
}

#[given("I choose Misting Fans at 50 percent coverage")]
fn choose_misting_fans(#[from(world)] world: &CommandWorld) {
    world.push_args(["--kind", "Misting Fans", "--coverage", "50"]);
}

#[given("I filter hotspots to the extreme band")]
fn filter_extreme(#[from(world)] world: &CommandWorld) {
    world.push_args([format!("--{ARG_CATEGORY}").as_str(), "extreme"]);
}

#[when("I run the recommend command")]
fn run_recommend(#[from(world)] world: &CommandWorld) {
    world.run("recommend");
}

#[when("I run the simulate command")]
fn run_simulate(#[from(world)] world: &CommandWorld) {
    world.run("simulate");
}

#[when("I run the hotspots command")]
fn run_hotspots(#[from(world)] world: &CommandWorld) {
    world.run("hotspots");
}

#[then("the command succeeds and recommends only Street Trees")]
fn recommends_only_trees(#[from(world)] world: &CommandWorld) {
    let output = world.output();
    let kinds: Vec<&str> = output["recommendations"]
        .as_array()
        .expect("recommendations array")
        .iter()
        .filter_map(|entry| entry["kind"].as_str())
        .collect();
    assert_eq!(kinds, ["Street Trees"]);
    assert_eq!(output["budget"], 250_000);
}

#[then("the command succeeds and Street Trees ranks first")]
fn trees_rank_first(#[from(world)] world: &CommandWorld) {
    let output = world.output();
    assert_eq!(output["recommendations"][0]["kind"], "Street Trees");
    assert_eq!(output["hotspot"]["pop_exposed"], 1_500);
}

#[then("the command fails because the hotspot is missing")]
fn fails_missing_hotspot(#[from(world)] world: &CommandWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_HOTSPOT_ID),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the simulation treats 12500 square metres for 4375000")]
fn simulation_totals(#[from(world)] world: &CommandWorld) {
    let output = world.output();
    assert_eq!(output["units_required"], 12_500);
    assert_eq!(output["estimated_cost"], 4_375_000);
    assert_eq!(output["timeline"], "6-10 weeks (weather dependent)");
}

#[then("the command fails because the intervention is unknown")]
fn fails_unknown_intervention(#[from(world)] world: &CommandWorld) {
    match &*world.error() {
        CliError::Simulation(SimulationError::UnknownIntervention { kind }) => {
            assert_eq!(kind, "Misting Fans");
        }
        other => panic!("expected Simulation, found {other:?}"),
    }
}

#[then("three hotspots are printed")]
fn three_hotspots(#[from(world)] world: &CommandWorld) {
    let output = world.output();
    assert_eq!(output.as_array().map(Vec::len), Some(3));
}

macro_rules! register_command_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/uhi_commands.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: CommandWorld) {
            let _ = world;
        }
    };
}

register_command_scenario!(
    recommend_within_budget,
    "recommending within a budget for a reference hotspot"
);
register_command_scenario!(
    recommend_from_file,
    "recommending for a hotspot described in a file"
);
register_command_scenario!(
    recommend_missing_hotspot,
    "rejecting a recommend request without a hotspot"
);
register_command_scenario!(simulate_cool_roofs, "simulating half coverage of cool roofs");
register_command_scenario!(
    simulate_unknown_kind,
    "rejecting a simulation of an unknown intervention"
);
register_command_scenario!(list_extreme_hotspots, "listing extreme hotspots");
