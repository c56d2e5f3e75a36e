// src/file.rs

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};

use crate::config::consts::{
    COLOR_PAIR_HEADER, COLOR_WEEKDAY, DEFAULT_FILE, FONT_NAME, FONT_SIZE, SHEET_NAME,
};
use crate::error::Result;
use crate::layout::{LayoutResult, StyleTag};
use crate::schedule::Schedule;

/// Cell formats: one shared base (border, font, centring) plus the two header fills.
struct SheetFormats {
    base: Format,
    weekday: Format,
    pair: Format,
}

impl SheetFormats {
    fn new() -> Self {
        let base = Format::new()
            .set_border(FormatBorder::Thin)
            .set_border_color(Color::Black)
            .set_font_name(FONT_NAME)
            .set_font_size(FONT_SIZE)
            .set_align(FormatAlign::Center);
        let weekday = base
            .clone()
            .set_background_color(Color::RGB(COLOR_WEEKDAY))
            .set_pattern(FormatPattern::Solid);
        let pair = base
            .clone()
            .set_background_color(Color::RGB(COLOR_PAIR_HEADER))
            .set_pattern(FormatPattern::Solid);
        Self { base, weekday, pair }
    }

    fn for_style(&self, style: StyleTag) -> &Format {
        match style {
            StyleTag::None => &self.base,
            StyleTag::WeekdayHeader => &self.weekday,
            StyleTag::PairHeader => &self.pair,
        }
    }
}

/// Render the layout into a single-sheet workbook.
///
/// The whole `first_column..=last_column × 1..=final_row` box is written so
/// empty cells still get borders; grid coordinates are 1-based, the sheet's 0-based.
pub fn build_workbook(layout: &LayoutResult) -> Result<Workbook> {
    let formats = SheetFormats::new();
    let cells = layout.resolved();

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for row in 1..=layout.final_row {
        for col in layout.first_column..=layout.last_column {
            let (r, c) = (row - 1, col - 1);
            match cells.get(&(row, col)) {
                Some(p) => {
                    sheet.write_string_with_format(r, c, p.value.as_str(), formats.for_style(p.style))?;
                }
                None => {
                    sheet.write_blank(r, c, &formats.base)?;
                }
            }
        }
    }
    sheet.autofit();

    Ok(workbook)
}

/// Workbook bytes, for callers that persist elsewhere.
pub fn render_workbook(layout: &LayoutResult) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(layout)?;
    Ok(workbook.save_to_buffer()?)
}

/// Write the layout as `.xlsx`. `out` may be a file or a directory hint.
/// Returns the final path written to.
pub fn write_workbook(layout: &LayoutResult, out: &Path) -> Result<PathBuf> {
    let path = resolve_out_path(out)?;
    let mut workbook = build_workbook(layout)?;
    workbook.save(&path)?;
    logf!("Export: {} (rows={}, cells={})", path.display(), layout.final_row, layout.placements.len());
    Ok(path)
}

/// Pretty JSON dump of the grouped schedule.
pub fn write_schedule_json(schedule: &Schedule, out: &Path) -> Result<PathBuf> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(schedule)?;
    fs::write(out, json)?;
    logf!("Export: {}", out.display());
    Ok(out.to_path_buf())
}

/// Directory hints get `DEFAULT_FILE`; parent directories are created.
pub fn resolve_out_path(hint: &Path) -> Result<PathBuf> {
    if hint.as_os_str().is_empty() {
        return Ok(PathBuf::from(DEFAULT_FILE));
    }
    let p = PathBuf::from(normalize_separators(&hint.to_string_lossy()));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?;
        return Ok(p.join(DEFAULT_FILE));
    }
    if let Some(parent) = p.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(p)
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
