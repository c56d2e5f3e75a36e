// tests/cli_args.rs
//
// Flag handling for the `cli` binary.
//
#![cfg(feature = "cli")]

use std::path::PathBuf;

use clap::Parser;

use timetable_grid::cli::Args;
use timetable_grid::config::options::Source;
use timetable_grid::Error;

#[test]
fn missing_named_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.cfg");
    let args = Args::parse_from(["cli", "--config", missing.to_str().unwrap()]);
    assert!(matches!(args.into_options(), Err(Error::Config(_))));
}

#[test]
fn flags_override_the_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("t.cfg");
    std::fs::write(&cfg, "group=1\nfaculty=2\nout_path=from/cfg.xlsx\n").unwrap();

    let args = Args::parse_from([
        "cli",
        "--config",
        cfg.to_str().unwrap(),
        "--group",
        "9",
        "--input",
        "page.html",
    ]);
    let opts = args.into_options().unwrap();
    assert_eq!(opts.fetch.group, 9);
    assert_eq!(opts.fetch.faculty, 2);
    assert_eq!(opts.export.out_path, PathBuf::from("from/cfg.xlsx"));
    assert_eq!(opts.source, Source::File(PathBuf::from("page.html")));
}
