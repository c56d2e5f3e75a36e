// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific knowledge of where the ground truth lives in the HTML and how
//! to pull it out robustly.
//!
//! ## What lives here
//! - **Request shape** for the timetable page: term discovery on the first GET,
//!   then the form POST that returns the table.
//! - **Pure HTML extraction** of `tr.pair` rows into [`RawSessionRow`]s using
//!   `core::html` helpers (case-insensitive tag blocks, attribute reading,
//!   tag stripping, whitespace/entity normalization).
//!
//! ## What does **not** live here
//! - Grouping rows into weeks (`schedule::group`) or laying out the grid (`layout`).
//! - Caching (`store`) and file output (`file`).
//!
//! ## Typical call chain
//! ```text
//! runner::load_html → specs::timetable::fetch_page   (network)
//! runner::build     → specs::timetable::extract_rows (pure)
//!                   → schedule::group → layout::layout
//! ```
//!
//! Specs are testable **offline** against saved pages.
//!
//! [`RawSessionRow`]: crate::schedule::RawSessionRow
pub mod timetable;
