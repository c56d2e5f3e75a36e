// src/gui/components/mod.rs
pub mod grid_view;
pub mod options_panel;
