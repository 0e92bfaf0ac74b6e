//! Integration tests for loading ontology and annotation files from disk.

use std::fs;

use graphmaster_go::{load, Error, LoadWarning, LoaderConfig};
use rstest::{fixture, rstest};
use tempfile::TempDir;

mod common;
use common::write_fixtures;

#[fixture]
fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

fn config_for(dir: &TempDir) -> LoaderConfig {
    let (obo, gaf) = write_fixtures(dir.path());
    LoaderConfig {
        ontology: Some(obo),
        annotations: vec![gaf],
        ..LoaderConfig::default()
    }
}

#[rstest]
fn loads_ontology_and_annotations(temp_dir: TempDir) {
    let (go, warnings) = load(&config_for(&temp_dir)).unwrap();

    let summary = go.summary();
    assert_eq!(summary.terms, 4);
    assert_eq!(summary.gene_products, 2);
    assert_eq!(summary.annotations, 2);
    assert_eq!(summary.alt_ids, 1);

    assert_eq!(warnings.len(), 1);
    assert!(matches!(
        &warnings[0],
        LoadWarning::UnknownTerm { line_number: 5, term, .. } if term == "GO:7777777"
    ));
}

#[rstest]
fn loaded_graph_supports_every_query(temp_dir: TempDir) {
    let (go, _) = load(&config_for(&temp_dir)).unwrap();
    let graph = go.graph();

    assert!(graph.is_acyclic());
    assert_eq!(graph.max_depth(None).unwrap(), 3);
    assert_eq!(graph.leaves(), vec!["GO:0000001"]);

    let order = graph.topological_order().unwrap();
    let position = |id: &str| order.iter().position(|n| *n == id).unwrap();
    assert!(position("P1") < position("GO:0000004"));
    assert!(position("GO:0000004") < position("GO:0000002"));
    assert!(position("GO:0000002") < position("GO:0000001"));
}

#[rstest]
fn recursive_queries_cross_relation_kinds(temp_dir: TempDir) {
    let (go, _) = load(&config_for(&temp_dir)).unwrap();

    let terms: Vec<_> = go
        .go_terms("P1", true)
        .unwrap()
        .into_iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(terms, vec!["GO:0000004", "GO:0000002", "GO:0000001"]);

    let mut products: Vec<_> = go
        .gene_products("GO:0000001", true)
        .unwrap()
        .into_iter()
        .map(|p| p.id.as_str())
        .collect();
    products.sort_unstable();
    assert_eq!(products, vec!["P1", "P2"]);

    assert_eq!(go.evidence("P1", "GO:0000004"), ["IDA", "IEA"]);
}

#[rstest]
fn relation_filter_drops_part_of(temp_dir: TempDir) {
    let config = LoaderConfig {
        relations: vec!["is_a".to_string()],
        ..config_for(&temp_dir)
    };
    let (go, _) = load(&config).unwrap();

    let products = go.gene_products("GO:0000001", true).unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, "P1");
}

#[rstest]
fn config_file_drives_the_load(temp_dir: TempDir) {
    let (obo, gaf) = write_fixtures(temp_dir.path());
    let path = temp_dir.path().join("graphmaster.yaml");
    fs::write(
        &path,
        format!(
            "ontology: {}\nannotations: [{}]\nwarn-unknown-terms: false\n",
            obo.display(),
            gaf.display()
        ),
    )
    .unwrap();

    let config = LoaderConfig::load(&path).unwrap();
    assert!(!config.warn_unknown_terms);

    let (go, warnings) = load(&config).unwrap();
    assert_eq!(go.summary().gene_products, 2);
    // Still reported, only the log line is suppressed.
    assert_eq!(warnings.len(), 1);
}

#[test]
fn missing_ontology_is_a_config_error() {
    assert!(matches!(
        load(&LoaderConfig::default()),
        Err(Error::Config(_))
    ));
}

#[rstest]
fn missing_annotation_file_is_an_open_error(temp_dir: TempDir) {
    let config = LoaderConfig {
        annotations: vec![temp_dir.path().join("absent.goa")],
        ..config_for(&temp_dir)
    };
    assert!(matches!(load(&config), Err(Error::Open { .. })));
}
