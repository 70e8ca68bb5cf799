//! Focused unit tests covering argument parsing, input loading and the
//! filesystem helpers.

use super::helpers::{INDUSTRIAL_HOTSPOT_JSON, workspace, write_utf8};
use super::*;
use crate::fs::require_file;
use crate::inputs::{HotspotSource, load_catalog};
use camino::Utf8PathBuf;
use rstest::rstest;
use uhi_core::HeatCategory;

#[rstest]
fn parses_category_filter() {
    let cli = Cli::try_parse_from(["uhi", "hotspots", "--category", "Extreme"])
        .expect("category should parse");
    match cli.command {
        Command::Hotspots(args) => assert_eq!(args.category, Some(HeatCategory::Extreme)),
        other => panic!("expected hotspots command, found {other:?}"),
    }
}

#[rstest]
fn rejects_unknown_category() {
    let err = Cli::try_parse_from(["uhi", "hotspots", "--category", "scorching"])
        .expect_err("unknown band should fail");
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
}

#[rstest]
fn rejects_negative_budget() {
    let err = Cli::try_parse_from(["uhi", "recommend", "--hotspot-id", "1", "--budget", "-5"])
        .expect_err("negative budget should fail");
    assert!(matches!(CliError::from(err), CliError::ArgumentParsing(_)));
}

#[rstest]
#[case(Some(3), None, Ok(HotspotSource::Sample(3)))]
#[case(None, Some("site.json"), Ok(HotspotSource::File(Utf8PathBuf::from("site.json"))))]
#[case(Some(3), Some("site.json"), Err("conflict"))]
#[case(None, None, Err("missing"))]
fn resolves_hotspot_source(
    #[case] id: Option<u32>,
    #[case] file: Option<&str>,
    #[case] expected: Result<HotspotSource, &str>,
) {
    let resolved = HotspotSource::resolve(id, file.map(Utf8PathBuf::from), "UHI_TEST_HOTSPOT_ID");
    match (resolved, expected) {
        (Ok(source), Ok(wanted)) => assert_eq!(source, wanted),
        (Err(CliError::ConflictingHotspotSources { .. }), Err("conflict")) => {}
        (Err(CliError::MissingArgument { field, env }), Err("missing")) => {
            assert_eq!(field, ARG_HOTSPOT_ID);
            assert_eq!(env, "UHI_TEST_HOTSPOT_ID");
        }
        (other, wanted) => panic!("expected {wanted:?}, found {other:?}"),
    }
}

#[rstest]
fn loads_reference_hotspot_by_id() {
    let hotspot = HotspotSource::Sample(3).load().expect("reference hotspot");
    assert_eq!(hotspot.location(), "Market Area");
}

#[rstest]
fn unknown_reference_hotspot_errors() {
    let err = HotspotSource::Sample(42)
        .load()
        .expect_err("no hotspot 42");
    match err {
        CliError::UnknownHotspot { id } => assert_eq!(id, 42),
        other => panic!("expected UnknownHotspot, found {other:?}"),
    }
}

#[rstest]
fn loads_hotspot_from_file() {
    let (_tmp, root) = workspace();
    let path = root.join("hotspot.json");
    write_utf8(&path, INDUSTRIAL_HOTSPOT_JSON);

    let hotspot = HotspotSource::File(path).load().expect("hotspot file");
    assert_eq!(hotspot.pop_exposed(), 1_500);
    assert_eq!(hotspot.category(), Some(HeatCategory::Extreme));
}

#[rstest]
fn hotspot_file_with_zero_area_is_rejected() {
    let (_tmp, root) = workspace();
    let path = root.join("hotspot.json");
    write_utf8(&path, br#"{ "area_ha": 0.0, "pop_exposed": 10 }"#);

    let err = HotspotSource::File(path.clone())
        .load()
        .expect_err("zero area should fail");
    match err {
        CliError::ParseInput { field, path: failed, source } => {
            assert_eq!(field, ARG_HOTSPOT_FILE);
            assert_eq!(failed, path);
            assert!(source.to_string().contains("positive number of hectares"));
        }
        other => panic!("expected ParseInput, found {other:?}"),
    }
}

#[rstest]
fn default_catalogue_is_used_without_a_path() {
    let catalog = load_catalog(None).expect("reference catalogue");
    assert_eq!(catalog.len(), 5);
}

#[rstest]
fn loads_catalogue_with_legacy_field_names() {
    let (_tmp, root) = workspace();
    let path = root.join("catalog.json");
    write_utf8(
        &path,
        br#"[
            { "type": "Shade Sail", "unit": "m2", "cost_per_unit": 150, "cooling_per_unit": 0.4 },
            { "kind": "Street Trees", "unit": "tree", "unit_cost": 400, "unit_cooling": 0.5 }
        ]"#,
    );

    let catalog = load_catalog(Some(&path)).expect("catalogue file");
    let kinds: Vec<&str> = catalog.kinds().collect();
    assert_eq!(kinds, ["Shade Sail", "Street Trees"]);
}

#[rstest]
fn catalogue_with_duplicate_kinds_is_rejected() {
    let (_tmp, root) = workspace();
    let path = root.join("catalog.json");
    write_utf8(
        &path,
        br#"[
            { "kind": "Cool Roof", "unit": "area", "unit_cost": 350, "unit_cooling": 1.2 },
            { "kind": "Cool Roof", "unit": "area", "unit_cost": 300, "unit_cooling": 1.0 }
        ]"#,
    );

    let err = load_catalog(Some(&path)).expect_err("duplicate kinds should fail");
    match err {
        CliError::ParseInput { field, .. } => assert_eq!(field, ARG_CATALOG),
        other => panic!("expected ParseInput, found {other:?}"),
    }
}

#[rstest]
fn require_file_reports_missing_paths() {
    let (_tmp, root) = workspace();
    let path = root.join("absent.json");

    let err = require_file(&path, ARG_CATALOG).expect_err("missing file");
    match err {
        CliError::MissingSourceFile { field, path: missing } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(missing, path);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn require_file_rejects_directories() {
    let (_tmp, root) = workspace();
    let path = root.join("catalog.json");
    std::fs::create_dir(path.as_std_path()).expect("catalogue directory");

    let err = require_file(&path, ARG_CATALOG).expect_err("directory is not a file");
    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_CATALOG),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}
