// src/gui/table_model.rs
//! GridModel: dense, display-ready copy of a `LayoutResult`.
//!
//! The layout is a list of placements where later writes win; the preview
//! needs "what is in cell (r, c)" every frame, so resolve it once here.

use crate::layout::{LayoutResult, StyleTag};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellView {
    pub value: String,
    pub style: StyleTag,
}

#[derive(Clone, Debug, Default)]
pub struct GridModel {
    /// `cells[row - 1][col - first_column]`
    pub cells: Vec<Vec<Option<CellView>>>,
    pub first_column: u16,
    pub last_column: u16,
}

impl GridModel {
    pub fn from_layout(layout: &LayoutResult) -> Self {
        let ncols = usize::from(layout.last_column + 1 - layout.first_column);
        let mut cells = vec![vec![None; ncols]; layout.final_row as usize];

        for ((row, col), p) in layout.resolved() {
            let r = row as usize - 1;
            let c = usize::from(col - layout.first_column);
            if let Some(slot) = cells.get_mut(r).and_then(|line| line.get_mut(c)) {
                *slot = Some(CellView { value: p.value.clone(), style: p.style });
            }
        }

        Self { cells, first_column: layout.first_column, last_column: layout.last_column }
    }

    pub fn nrows(&self) -> usize { self.cells.len() }

    pub fn ncols(&self) -> usize { usize::from(self.last_column + 1 - self.first_column) }

    pub fn is_empty(&self) -> bool { self.cells.is_empty() }

    pub fn cell(&self, row_ix: usize, col_ix: usize) -> Option<&CellView> {
        self.cells.get(row_ix)?.get(col_ix)?.as_ref()
    }

    /// Sheet-style column letter for a display column index.
    pub fn column_label(&self, col_ix: usize) -> String {
        let n = usize::from(self.first_column) + col_ix;
        column_letter(n)
    }
}

/// 1 → "A", 26 → "Z", 27 → "AA"
pub fn column_letter(mut n: usize) -> String {
    let mut out = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        out.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}
