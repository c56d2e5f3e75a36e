// src/runner.rs
//
// One run, start to finish:
//   source → html → rows → Schedule → LayoutResult → files
// `build` is pure; only `load_html` and `export` touch the network or disk.

use std::path::PathBuf;

use crate::{
    config::options::{AppOptions, ExportOptions, Source},
    core::net::HttpSession,
    error::Result,
    file,
    layout::{self, LayoutResult},
    progress::{Progress, Stage},
    schedule::{self, RawSessionRow, Schedule},
    specs::timetable,
    store,
};

/// Everything derived from one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Built {
    pub rows: Vec<RawSessionRow>,
    pub schedule: Schedule,
    pub layout: LayoutResult,
}

/// Summary of what was produced.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub rows: usize,
    pub weeks: usize,
    pub final_row: u32,
    pub files_written: Vec<PathBuf>,
}

const STAGES: usize = 5;

/// Top-level runner. `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(opts: &AppOptions, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(STAGES);
    }

    let result = run_stages(opts, reborrow(&mut progress));

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}

fn run_stages(opts: &AppOptions, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let html = load_html(opts, reborrow(&mut progress))?;
    let built = build_with(&html, reborrow(&mut progress))?;
    let files_written = export(&built, &opts.export)?;
    if let Some(p) = progress.as_deref_mut() {
        p.stage_done(Stage::Write);
    }

    Ok(RunSummary {
        rows: built.rows.len(),
        weeks: built.schedule.weeks().len(),
        final_row: built.layout.final_row,
        files_written,
    })
}

/// Short-lived `&mut dyn Progress` for handing the sink to one stage.
fn reborrow<'a>(progress: &'a mut Option<&mut dyn Progress>) -> Option<&'a mut dyn Progress> {
    progress.as_mut().map(|p| &mut **p as &mut dyn Progress)
}

/// Fetch or read the timetable page. Remote pages are cached best-effort.
pub fn load_html(opts: &AppOptions, mut progress: Option<&mut dyn Progress>) -> Result<String> {
    let html = match &opts.source {
        Source::Remote => {
            if let Some(p) = progress.as_deref_mut() {
                p.log("Fetching timetable…");
            }
            let session = HttpSession::new()?;
            let html = timetable::fetch_page(&session, &opts.fetch)?;
            match store::save_page(&html) {
                Ok(p) => logf!("Cache: Saved page → {}", p.display()),
                Err(e) => logw!("Cache: Save failed: {}", e),
            }
            html
        }
        Source::File(path) => {
            logf!("Source: {}", path.display());
            store::load_page_from(path)?
        }
        Source::Cache => {
            logf!("Source: cache {}", store::page_path().display());
            store::load_page()?
        }
    };

    if let Some(p) = progress.as_deref_mut() {
        p.stage_done(Stage::Load);
    }
    Ok(html)
}

/// Extract, group and lay out one page.
pub fn build(html: &str) -> Result<Built> {
    build_with(html, None)
}

pub fn build_with(html: &str, mut progress: Option<&mut dyn Progress>) -> Result<Built> {
    let mut done = |stage: Stage| {
        if let Some(p) = progress.as_deref_mut() {
            p.stage_done(stage);
        }
    };

    let rows = timetable::extract_rows(html)?;
    done(Stage::Extract);

    let schedule = schedule::group(&rows)?;
    done(Stage::Group);

    let layout = layout::layout(&schedule);
    done(Stage::Layout);

    Ok(Built { rows, schedule, layout })
}

/// Write the workbook, plus the JSON dump when configured.
pub fn export(built: &Built, opts: &ExportOptions) -> Result<Vec<PathBuf>> {
    let mut written = vec![file::write_workbook(&built.layout, &opts.out_path)?];
    if let Some(json) = &opts.json_path {
        written.push(file::write_schedule_json(&built.schedule, json)?);
    }
    Ok(written)
}
