// src/layout.rs
//! Grid layout: maps a [`Schedule`] onto absolute sheet coordinates.
//!
//! Every week owns a fixed band of `CELLS_PER_WEEK_BLOCK` rows and every
//! weekday owns one column, so a cell's address depends only on its week,
//! weekday, date position and pair number:
//!
//! ```text
//! week base   = week * 26 + 1
//! day header  = base + date_ix            (one row per date seen that weekday)
//! pair header = (pair - 1) * 5 + base + date_ix + 1
//! details     = pair header + 1 ..= + 4   (type, subject, teacher, address)
//! ```
//!
//! Rows and columns are 1-based; the sheet writer converts.
//! Two sessions with the same pair number on one date land on the same five
//! rows and the later one wins.
use std::collections::BTreeMap;

use crate::config::consts::{
    CELLS_PER_SESSION_BLOCK, CELLS_PER_WEEK_BLOCK, FIRST_COLUMN, WEEKDAY_COLUMNS,
};
use crate::schedule::{DateBlock, Schedule, Session, Weekday};

/// Presentation hint for the sheet writer. Carries no meaning beyond fill colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum StyleTag {
    #[default]
    None,
    WeekdayHeader,
    PairHeader,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellPlacement {
    pub row: u32,
    pub column: u16,
    pub value: String,
    pub style: StyleTag,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutResult {
    /// Emission order; later entries overwrite earlier ones at the same cell.
    pub placements: Vec<CellPlacement>,
    /// Largest row touched, 0 when nothing was placed.
    pub final_row: u32,
    pub first_column: u16,
    pub last_column: u16,
}

impl LayoutResult {
    fn new(last_column: u16) -> Self {
        Self {
            placements: Vec::new(),
            final_row: 0,
            first_column: FIRST_COLUMN,
            last_column,
        }
    }

    fn place(&mut self, row: u32, column: u16, value: String, style: StyleTag) {
        self.final_row = self.final_row.max(row);
        self.placements.push(CellPlacement { row, column, value, style });
    }

    pub fn is_empty(&self) -> bool { self.placements.is_empty() }

    /// Final content of each cell after overwrites, keyed by `(row, column)`.
    pub fn resolved(&self) -> BTreeMap<(u32, u16), &CellPlacement> {
        let mut cells = BTreeMap::new();
        for p in &self.placements {
            cells.insert((p.row, p.column), p);
        }
        cells
    }

    /// Final content of one cell.
    pub fn cell(&self, row: u32, column: u16) -> Option<&CellPlacement> {
        self.placements.iter().rev().find(|p| p.row == row && p.column == column)
    }
}

#[inline]
pub fn week_base_row(week: usize) -> u32 {
    week as u32 * CELLS_PER_WEEK_BLOCK + 1
}

#[inline]
pub fn pair_row(pair_number: u8, cursor: u32) -> u32 {
    (u32::from(pair_number) - 1) * CELLS_PER_SESSION_BLOCK + cursor
}

#[inline]
pub fn column_of(weekday: Weekday) -> u16 {
    u16::from(weekday.number())
}

pub fn layout(schedule: &Schedule) -> LayoutResult {
    let last_column = schedule
        .max_weekday()
        .map(column_of)
        .unwrap_or(0)
        .max(WEEKDAY_COLUMNS);
    let mut out = LayoutResult::new(last_column);

    for week in schedule.weeks() {
        let base = week_base_row(week.number);
        for day in &week.days {
            place_dates(&mut out, base, day.weekday, &day.dates);
        }
    }

    logd!(
        "Layout: weeks={} cells={} final_row={}",
        schedule.weeks().len(),
        out.placements.len(),
        out.final_row
    );
    out
}

fn place_dates(out: &mut LayoutResult, base: u32, weekday: Weekday, dates: &[DateBlock]) {
    let column = column_of(weekday);
    let mut cursor = base;

    for block in dates {
        out.place(
            cursor,
            column,
            format!("{}, {}", weekday.name(), block.date),
            StyleTag::WeekdayHeader,
        );
        cursor += 1;
        place_sessions(out, column, cursor, &block.date, &block.sessions);
    }
}

fn place_sessions(out: &mut LayoutResult, column: u16, cursor: u32, date: &str, sessions: &[Session]) {
    let mut seen: Vec<u8> = Vec::with_capacity(sessions.len());

    for session in sessions {
        if seen.contains(&session.pair_number) {
            logd!("Layout: {date} pair {} repeats; later session wins", session.pair_number);
        } else {
            seen.push(session.pair_number);
        }

        let row = pair_row(session.pair_number, cursor);
        out.place(
            row,
            column,
            format!("{} {}", session.pair_number, session.pair_time),
            StyleTag::PairHeader,
        );
        let details = [
            &session.lesson_type,
            &session.subject,
            &session.teacher,
            &session.address,
        ];
        for (offset, value) in (1..).zip(details) {
            out.place(row + offset, column, value.clone(), StyleTag::None);
        }
    }
}
