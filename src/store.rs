// src/store.rs
//
// Last fetched timetable page, so the grid can be rebuilt offline.

use std::{fs, io, path::{Path, PathBuf}};

use crate::config::consts::{STORE_DIR, STORE_PAGE_FILE};

pub fn page_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(STORE_PAGE_FILE)
}

pub fn save_page(html: &str) -> io::Result<PathBuf> {
    save_page_to(&page_path(), html)
}

pub fn save_page_to(path: &Path, html: &str) -> io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, html)?;
    Ok(path.to_path_buf())
}

pub fn load_page() -> io::Result<String> {
    load_page_from(&page_path())
}

pub fn load_page_from(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}
