// src/schedule/mod.rs
//! Nested timetable model and the pass that builds it from table rows.
//!
//! ```text
//! [RawSessionRow] ──group──▶ Schedule
//!                            └─ Week (0-based, chronological)
//!                               └─ Day (Weekday 1..=7)
//!                                  └─ DateBlock ("YYYY-MM-DD")
//!                                     └─ [Session] (table order)
//! ```
pub mod grouper;
pub mod types;

pub use grouper::{group, WeekCursor};
pub use types::{DateBlock, Day, RawSessionRow, Schedule, Session, Week, Weekday};
