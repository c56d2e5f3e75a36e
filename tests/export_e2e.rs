// tests/export_e2e.rs
//
// Whole pipeline from a saved page to files on disk.
//
use std::fs;
use std::path::PathBuf;

use timetable_grid::config::options::{AppOptions, Source};
use timetable_grid::file::{render_workbook, resolve_out_path, write_workbook};
use timetable_grid::gui::table_model::{column_letter, GridModel};
use timetable_grid::layout::StyleTag;
use timetable_grid::progress::{Progress, Stage};
use timetable_grid::{runner, Error};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

#[derive(Default)]
struct Recorder {
    stages: Vec<Stage>,
    finished: bool,
}

impl Progress for Recorder {
    fn stage_done(&mut self, stage: Stage) { self.stages.push(stage); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn file_source_writes_workbook_and_json() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = AppOptions::default();
    opts.source = Source::File(fixture("timetable.html"));
    opts.export.out_path = dir.path().join("nested/");
    opts.export.json_path = Some(dir.path().join("schedule.json"));

    let mut rec = Recorder::default();
    let summary = runner::run(&opts, Some(&mut rec)).unwrap();

    assert_eq!(summary.rows, 5);
    assert_eq!(summary.weeks, 2);
    // Saturday pair 5 of week 1: 27 + 1 + 4*5 + 4
    assert_eq!(summary.final_row, 52);

    assert_eq!(summary.files_written.len(), 2);
    let xlsx = &summary.files_written[0];
    assert_eq!(xlsx, &dir.path().join("nested").join("schedule.xlsx"));
    let bytes = fs::read(xlsx).unwrap();
    assert_eq!(&bytes[..2], b"PK");

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("schedule.json")).unwrap()).unwrap();
    assert_eq!(json["weeks"][0]["days"][0]["dates"][0]["date"], "2020-02-03");
    assert_eq!(json["weeks"][1]["days"][1]["weekday"], "Saturday");
    assert_eq!(json["weeks"][1]["days"][1]["dates"][0]["sessions"][0]["pair_number"], 5);

    assert_eq!(rec.stages, [Stage::Load, Stage::Extract, Stage::Group, Stage::Layout, Stage::Write]);
    assert!(rec.finished);
}

#[test]
fn build_is_repeatable() {
    let html = fs::read_to_string(fixture("timetable.html")).unwrap();
    let a = runner::build(&html).unwrap();
    let b = runner::build(&html).unwrap();
    assert_eq!(a, b);
}

#[test]
fn invalid_row_aborts_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("bad.html");
    fs::write(
        &page,
        r#"<table class="simple-little-table">
        <tr class="pair" weekday="9" pair="1 (9:00)"><td>2020-02-04</td>
          <td><span class="type">t</span><span class="subect">s</span><span class="teacher">p</span><span class="aud">a</span></td></tr>
        </table>"#,
    )
    .unwrap();

    let mut opts = AppOptions::default();
    opts.source = Source::File(page);
    opts.export.out_path = dir.path().join("out.xlsx");

    let err = runner::run(&opts, None).unwrap_err();
    match err {
        Error::InvalidRow(e) => assert_eq!(e.index, 0),
        other => panic!("expected invalid row, got {other:?}"),
    }
    assert!(!dir.path().join("out.xlsx").exists());
}

#[test]
fn missing_source_file_propagates_io_error() {
    let mut opts = AppOptions::default();
    opts.source = Source::File(PathBuf::from("definitely/not/here.html"));

    let mut rec = Recorder::default();
    let err = runner::run(&opts, Some(&mut rec)).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(rec.stages.is_empty());
    assert!(rec.finished);
}

#[test]
fn empty_layout_still_renders_a_workbook() {
    let built = runner::build(r#"<table class="simple-little-table"></table>"#).unwrap();
    assert_eq!(built.layout.final_row, 0);
    let bytes = render_workbook(&built.layout).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn explicit_file_path_is_kept_and_parents_created() {
    let dir = tempfile::tempdir().unwrap();
    let html = fs::read_to_string(fixture("timetable.html")).unwrap();
    let built = runner::build(&html).unwrap();

    let target = dir.path().join("a").join("b").join("grid.xlsx");
    let written = write_workbook(&built.layout, &target).unwrap();
    assert_eq!(written, target);
    assert!(target.is_file());
}

#[test]
fn existing_directory_gets_default_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let resolved = resolve_out_path(dir.path()).unwrap();
    assert_eq!(resolved, dir.path().join("schedule.xlsx"));
}

#[test]
fn preview_grid_matches_layout() {
    let html = fs::read_to_string(fixture("timetable.html")).unwrap();
    let built = runner::build(&html).unwrap();
    let grid = GridModel::from_layout(&built.layout);

    assert_eq!(grid.nrows(), 52);
    assert_eq!(grid.ncols(), 6);
    let header = grid.cell(0, 0).unwrap();
    assert_eq!(header.value, "Понедельник, 2020-02-03");
    assert_eq!(header.style, StyleTag::WeekdayHeader);
    // Wednesday pair 3: row 2 + 10 → index 11, column 3 → index 2
    assert_eq!(grid.cell(11, 2).unwrap().value, "3 13:00-14:35");
    assert!(grid.cell(0, 1).is_none());

    assert_eq!(grid.column_label(0), "A");
    assert_eq!(column_letter(6), "F");
    assert_eq!(column_letter(27), "AA");
}
