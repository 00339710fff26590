use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use drawflow::DiagramKind;
use drawflow_cli::{Args, run};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Collects fixture files with the given extension
fn collect_fixtures(extension: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(fixtures_dir())
        .map(|entries| {
            entries
                .flatten()
                .map(|entry| entry.path())
                .filter(|path| {
                    path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(extension)
                })
                .collect()
        })
        .unwrap_or_default();

    // Sort for consistent test output
    files.sort();
    files
}

/// The diagram kind is the fixture name's prefix
fn kind_of(path: &Path) -> DiagramKind {
    let stem = path.file_stem().unwrap().to_string_lossy();
    let prefix = stem.split('_').next().unwrap();
    prefix
        .parse()
        .unwrap_or_else(|err| panic!("{}: {err}", path.display()))
}

fn args_for(input: &Path, output: &Path, graph: bool) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: Some(output.to_string_lossy().to_string()),
        kind: kind_of(input),
        config: None,
        log_level: "off".to_string(),
        title: None,
        graph,
    }
}

fn run_fixture(name: &str, graph: bool) -> String {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = fixtures_dir().join(name);
    let output = temp_dir.path().join("out.drawio");

    run(&args_for(&input, &output, graph)).expect("run should succeed");
    fs::read_to_string(output).expect("output should exist")
}

/// Parses the output and checks the draw.io model structure: reserved cells
/// first, unique ids, and every edge joining two vertices.
fn assert_well_formed(xml: &str) {
    assert!(xml.starts_with("<?xml version=\"1.0\" ?>\n<mxfile "));
    assert!(xml.ends_with("</mxfile>\n"));

    let doc = roxmltree::Document::parse(xml).expect("output should be well-formed XML");
    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "mxfile");

    let cells: Vec<_> = doc
        .descendants()
        .filter(|n| n.has_tag_name("mxCell"))
        .collect();
    assert!(cells.len() >= 2);
    assert_eq!(cells[0].attribute("id"), Some("0"));
    assert_eq!(cells[1].attribute("id"), Some("1"));
    assert_eq!(cells[1].attribute("parent"), Some("0"));

    let mut ids: Vec<_> = cells.iter().filter_map(|c| c.attribute("id")).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total, "duplicate cell ids");

    let vertices: Vec<_> = cells
        .iter()
        .filter(|c| c.attribute("vertex") == Some("1"))
        .filter_map(|c| c.attribute("id"))
        .collect();
    for edge in cells.iter().filter(|c| c.attribute("edge") == Some("1")) {
        for end in ["source", "target"] {
            let id = edge.attribute(end).expect("edge endpoint");
            assert!(vertices.contains(&id), "edge {end} {id} is not a vertex");
        }
    }
}

#[test]
fn e2e_smoke_test_text_fixtures() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let fixtures = collect_fixtures("txt");

    assert!(!fixtures.is_empty(), "No text fixtures found");

    let mut failed = Vec::new();
    for fixture in &fixtures {
        let output = temp_dir.path().join(format!(
            "{}.drawio",
            fixture.file_stem().unwrap().to_string_lossy()
        ));

        match run(&args_for(fixture, &output, false)) {
            Ok(()) => assert_well_formed(&fs::read_to_string(&output).unwrap()),
            Err(e) => failed.push((fixture.clone(), e)),
        }
    }

    if !failed.is_empty() {
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} fixture(s) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_smoke_test_graph_fixtures() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let fixtures = collect_fixtures("toml");

    assert!(!fixtures.is_empty(), "No graph fixtures found");

    for fixture in &fixtures {
        let output = temp_dir.path().join("graph.drawio");
        run(&args_for(fixture, &output, true))
            .unwrap_or_else(|e| panic!("{}: {e}", fixture.display()));
        assert_well_formed(&fs::read_to_string(&output).unwrap());
    }
}

#[test]
fn e2e_business_flow_content() {
    let xml = run_fixture("business_en.txt", false);

    for label in [
        "Start",
        "Receive Order",
        "Validate Payment",
        "Reserve Stock",
        "Payment Approved",
        "Ship Order",
        "Notify Customer",
        "Stock Available",
        "Backorder",
        "End",
    ] {
        assert!(
            xml.contains(&format!("value=\"{label}\"")),
            "missing {label}"
        );
    }
    assert!(xml.contains("value=\"Yes\""));
    assert!(xml.contains("value=\"No\""));
}

#[test]
fn e2e_chinese_business_flow() {
    let xml = run_fixture("business_zh.txt", false);

    assert!(xml.contains("value=\"开始\""));
    assert!(xml.contains("value=\"主管审核\""));
    assert!(xml.contains("value=\"是\""));
    assert!(xml.contains("value=\"否\""));
}

#[test]
fn e2e_unstructured_text_falls_back() {
    let xml = run_fixture("business_unstructured.txt", false);

    assert!(xml.contains("value=\"Process Request\""));
    assert_eq!(xml.matches("vertex=\"1\"").count(), 5);
}

#[test]
fn e2e_ui_flow_drops_dangling_edge() {
    let xml = run_fixture("ui_checkout.txt", false);

    assert_eq!(xml.matches("vertex=\"1\"").count(), 7);
    assert_eq!(xml.matches("edge=\"1\"").count(), 7);
    assert!(!xml.contains("Receipt Email"));
}

#[test]
fn e2e_prototype_screens() {
    let xml = run_fixture("prototype_shop.txt", false);

    // swimlane plus four screens
    assert_eq!(xml.matches("vertex=\"1\"").count(), 5);
    assert_eq!(xml.matches("dashed=1;").count(), 3);
}

#[test]
fn e2e_title_sets_diagram_name() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = fixtures_dir().join("business_en.txt");
    let output = temp_dir.path().join("custom.drawio");

    let mut args = args_for(&input, &output, false);
    args.title = Some("Order Fulfilment".to_string());
    run(&args).expect("run should succeed");

    let xml = fs::read_to_string(&output).unwrap();
    assert!(xml.contains("name=\"Order Fulfilment\""));
}

#[test]
fn e2e_explicit_config_applies() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, "[document]\ndiagram_name = \"From Config\"\n").unwrap();

    let input = fixtures_dir().join("ui_checkout.txt");
    let output = temp_dir.path().join("ui.drawio");
    let mut args = args_for(&input, &output, false);
    args.config = Some(config.to_string_lossy().to_string());
    run(&args).expect("run should succeed");

    assert!(
        fs::read_to_string(&output)
            .unwrap()
            .contains("name=\"From Config\"")
    );
}

#[test]
fn e2e_missing_input_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("business_missing.txt");
    let output = temp_dir.path().join("out.drawio");

    assert!(run(&args_for(&input, &output, false)).is_err());
}

#[test]
fn e2e_text_as_graph_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = fixtures_dir().join("ui_checkout.txt");
    let output = temp_dir.path().join("out.drawio");

    assert!(run(&args_for(&input, &output, true)).is_err());
}
