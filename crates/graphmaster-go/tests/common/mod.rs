//! Shared fixtures for graphmaster-go integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Small ontology fragment:
///
/// ```text
/// GO:0000001 (root)
///   ▲ is_a          ▲ part_of
/// GO:0000002      GO:0000003 (alt id GO:0000033)
///   ▲ is_a
/// GO:0000004
/// ```
pub const OBO: &str = "\
format-version: 1.2
ontology: go

[Term]
id: GO:0000004
name: leaf process
namespace: biological_process
is_a: GO:0000002 ! middle process

[Term]
id: GO:0000001
name: root process
namespace: biological_process

[Term]
id: GO:0000002
name: middle process
namespace: biological_process
is_a: GO:0000001 ! root process

[Term]
id: GO:0000003
name: component part
namespace: cellular_component
alt_id: GO:0000033
relationship: part_of GO:0000001 ! root process

[Term]
id: GO:0000099
name: obsolete thing
is_obsolete: true

[Typedef]
id: part_of
name: part of
";

/// Annotations: P1 on the leaf, P2 on the part (through its alt id), and one
/// line pointing at an unknown term.
pub const GAF: &str = "\
!gaf-version: 2.1
UniProtKB\tP1\tgeneA\t\tGO:0000004\tPMID:1\tIDA\t\tP\tProtein A\tgeneA|A1\tprotein\ttaxon:10116\t20201128\tUniProt
UniProtKB\tP1\tgeneA\t\tGO:0000004\tPMID:2\tIEA\t\tP\tProtein A\tgeneA|A1\tprotein\ttaxon:10116\t20201128\tUniProt
UniProtKB\tP2\tgeneB\t\tGO:0000033\tPMID:3\tTAS\t\tC\tProtein B\t\tprotein\ttaxon:10116\t20201128\tUniProt
UniProtKB\tP3\tgeneC\t\tGO:7777777\tPMID:4\tIEA\t\tF\tProtein C\t\tprotein\ttaxon:10116\t20201128\tUniProt
";

/// Write the fixture files into `dir`, returning `(obo, gaf)` paths.
pub fn write_fixtures(dir: &Path) -> (PathBuf, PathBuf) {
    let obo = dir.join("go-basic.obo");
    let gaf = dir.join("annotations.goa");
    fs::write(&obo, OBO).expect("Failed to write OBO fixture");
    fs::write(&gaf, GAF).expect("Failed to write GAF fixture");
    (obo, gaf)
}

/// Run the graphmaster binary with colors disabled.
pub fn run_graphmaster(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_graphmaster"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute graphmaster")
}
