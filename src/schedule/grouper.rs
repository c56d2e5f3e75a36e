// src/schedule/grouper.rs
use crate::config::consts::MAX_PAIRS_PER_DAY;
use crate::error::{InvalidRowError, InvalidRowReason};

use super::types::{RawSessionRow, Schedule, Session, Weekday};

/// Week bookkeeping carried through the fold.
/// `last_weekday == 0` means no row has been seen yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WeekCursor {
    pub week: usize,
    pub last_weekday: u8,
}

impl WeekCursor {
    /// A step back to Monday from any later weekday opens a new week.
    /// The first row never does, even when it is a Monday.
    pub fn advance(self, weekday: Weekday) -> Self {
        let week = if self.last_weekday > 1 && weekday == Weekday::Monday {
            self.week + 1
        } else {
            self.week
        };
        Self { week, last_weekday: weekday.number() }
    }
}

/// Build the nested schedule from rows in document order.
///
/// Rows are not sorted; week boundaries come only from weekday transitions.
/// The first structurally invalid row aborts the whole pass.
pub fn group(rows: &[RawSessionRow]) -> Result<Schedule, InvalidRowError> {
    let (schedule, cursor) = rows.iter().enumerate().try_fold(
        (Schedule::default(), WeekCursor::default()),
        |(mut schedule, cursor), (index, row)| {
            let weekday = validate(index, row)?;
            let cursor = cursor.advance(weekday);
            schedule.file(cursor.week, weekday, &row.date, Session::from(row));
            Ok::<_, InvalidRowError>((schedule, cursor))
        },
    )?;

    if !rows.is_empty() {
        logd!("Group: rows={} weeks={}", rows.len(), cursor.week + 1);
    }
    Ok(schedule)
}

fn validate(index: usize, row: &RawSessionRow) -> Result<Weekday, InvalidRowError> {
    let weekday = Weekday::from_number(row.weekday).ok_or_else(|| {
        InvalidRowError::new(index, InvalidRowReason::WeekdayOutOfRange(row.weekday))
    })?;
    if !(1..=MAX_PAIRS_PER_DAY).contains(&row.pair_number) {
        return Err(InvalidRowError::new(index, InvalidRowReason::PairOutOfRange(row.pair_number)));
    }
    Ok(weekday)
}
