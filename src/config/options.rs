// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub source: Source,
    pub fetch: FetchOptions,
    pub export: ExportOptions,
}

/// Where the timetable page comes from.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Source {
    #[default]
    Remote,
    File(PathBuf),
    Cache,
}

/// Form fields posted to the timetable page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub url: String,
    pub faculty: u32,
    pub group: u32,
    pub course: u32,
    /// Overrides the term preselected on the page (`schet`).
    pub term: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            url: s!(TIMETABLE_URL),
            faculty: FORM_FACULTY,
            group: FORM_GROUP,
            course: FORM_COURSE,
            term: None,
        }
    }
}

impl FetchOptions {
    /// Form body in the order the site's own form submits it.
    pub fn form(&self, term: &str) -> Vec<(&'static str, String)> {
        vec![
            ("schet", s!(term)),
            ("type_z", FORM_TYPE_Z.to_string()),
            ("faculty", self.faculty.to_string()),
            ("kurs", self.course.to_string()),
            ("group", self.group.to_string()),
            ("ok", s!(FORM_SUBMIT)),
            ("group_el", FORM_GROUP_EL.to_string()),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    /// File or directory hint; directories get `DEFAULT_FILE` appended.
    pub out_path: PathBuf,
    /// Optional JSON dump of the grouped schedule.
    pub json_path: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_FILE),
            json_path: None,
        }
    }
}
