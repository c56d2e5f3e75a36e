// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::{
    config::{consts::CONFIG_FILE, file as config_file, options::{AppOptions, Source}},
    error::Result,
    progress::{Progress, Stage},
    runner,
};

/// Fetch the group timetable and lay it out as a spreadsheet grid.
/// With no arguments: fetch with the defaults and write out/schedule.xlsx.
#[derive(Parser, Debug, Default)]
#[command(name = "timetable_grid", version)]
pub struct Args {
    /// key=value settings file; must exist when given (./timetable.cfg is read when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Faculty id posted to the timetable form
    #[arg(long)]
    pub faculty: Option<u32>,

    /// Group id posted to the timetable form
    #[arg(long)]
    pub group: Option<u32>,

    /// Course (`kurs`) posted to the timetable form
    #[arg(long)]
    pub course: Option<u32>,

    /// Term value (`schet`); overrides the one preselected on the page
    #[arg(long)]
    pub term: Option<String>,

    /// Read a saved timetable page instead of fetching
    #[arg(long, conflicts_with = "offline")]
    pub input: Option<PathBuf>,

    /// Rebuild from the last fetched page in the local cache
    #[arg(long)]
    pub offline: bool,

    /// Output .xlsx file or directory
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Also write the grouped schedule as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Defaults, then the config file, then flags.
    pub fn into_options(self) -> Result<AppOptions> {
        let mut opts = AppOptions::default();
        match &self.config {
            Some(path) => config_file::apply_required(path, &mut opts)?,
            None => config_file::apply(&PathBuf::from(CONFIG_FILE), &mut opts)?,
        }

        if let Some(v) = self.faculty { opts.fetch.faculty = v; }
        if let Some(v) = self.group { opts.fetch.group = v; }
        if let Some(v) = self.course { opts.fetch.course = v; }
        if self.term.is_some() { opts.fetch.term = self.term; }
        if let Some(v) = self.out { opts.export.out_path = v; }
        if self.json.is_some() { opts.export.json_path = self.json; }

        opts.source = match (self.input, self.offline) {
            (Some(path), _) => Source::File(path),
            (None, true) => Source::Cache,
            (None, false) => Source::Remote,
        };
        Ok(opts)
    }
}

/// Progress lines on the log.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        logf!("{msg}");
    }
    fn stage_done(&mut self, stage: Stage) {
        logd!("{}", stage.label());
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    crate::log::init_stderr(if args.verbose { "debug" } else { "info" });

    let opts = args.into_options()?;
    let summary = runner::run(&opts, Some(&mut CliProgress))?;

    logf!(
        "Done: rows={} weeks={} final_row={}",
        summary.rows, summary.weeks, summary.final_row
    );
    for path in &summary.files_written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
