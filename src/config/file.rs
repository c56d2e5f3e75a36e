// src/config/file.rs
//
// Plain `key=value` settings file. Blank lines and `#` comments are skipped,
// unknown keys are ignored so older files keep loading.

use std::{fs, io, path::{Path, PathBuf}};

use crate::error::{Error, Result};
use super::options::AppOptions;

/// Load `path` over the defaults. A missing file is not an error.
pub fn load(path: &Path) -> Result<AppOptions> {
    let mut opts = AppOptions::default();
    apply(path, &mut opts)?;
    Ok(opts)
}

/// Apply the settings in `path` on top of `opts`.
pub fn apply(path: &Path, opts: &mut AppOptions) -> Result<()> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            logd!("Config: {} not found, using defaults", path.display());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    parse_into(&text, opts)?;
    logf!("Config: loaded {}", path.display());
    Ok(())
}

/// Like [`apply`], but the file must exist. For paths the user named explicitly.
pub fn apply_required(path: &Path, opts: &mut AppOptions) -> Result<()> {
    if !path.is_file() {
        return Err(Error::Config(format!("{} not found", path.display())));
    }
    apply(path, opts)
}

pub fn parse_into(text: &str, opts: &mut AppOptions) -> Result<()> {
    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some((key, val)) = line.split_once('=') else {
            return Err(Error::Config(format!("line {}: expected key=value", n + 1)));
        };
        let (key, val) = (key.trim(), val.trim());
        match key {
            "faculty" => opts.fetch.faculty = parse_num(key, val)?,
            "group" => opts.fetch.group = parse_num(key, val)?,
            "course" => opts.fetch.course = parse_num(key, val)?,
            "term" => opts.fetch.term = (!val.is_empty()).then(|| s!(val)),
            "out_path" => opts.export.out_path = PathBuf::from(val),
            "json_path" => opts.export.json_path = (!val.is_empty()).then(|| PathBuf::from(val)),
            other => logd!("Config: ignoring unknown key `{other}`"),
        }
    }
    Ok(())
}

fn parse_num(key: &str, val: &str) -> Result<u32> {
    val.parse()
        .map_err(|_| Error::Config(format!("`{key}` must be a number, got `{val}`")))
}

pub fn to_string(opts: &AppOptions) -> String {
    let mut s = s!();
    s.push_str(&format!("faculty={}\n", opts.fetch.faculty));
    s.push_str(&format!("group={}\n", opts.fetch.group));
    s.push_str(&format!("course={}\n", opts.fetch.course));
    if let Some(term) = &opts.fetch.term {
        s.push_str(&format!("term={}\n", term));
    }
    s.push_str(&format!("out_path={}\n", opts.export.out_path.display()));
    if let Some(json) = &opts.export.json_path {
        s.push_str(&format!("json_path={}\n", json.display()));
    }
    s
}

pub fn save(path: &Path, opts: &AppOptions) -> Result<()> {
    fs::write(path, to_string(opts))?;
    Ok(())
}
