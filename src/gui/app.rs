// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{consts::CONFIG_FILE, file as config_file, options::AppOptions},
    runner::Built,
};

use super::table_model::GridModel;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let config_path = PathBuf::from(CONFIG_FILE);
    let opts = match config_file::load(&config_path) {
        Ok(o) => o,
        Err(e) => {
            loge!("Config: {} unreadable, using defaults: {}", config_path.display(), e);
            AppOptions::default()
        }
    };

    eframe::run_native(
        "Timetable Grid",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(opts, config_path)))),
    )?;
    Ok(())
}

/// Text-box mirrors of the numeric options; parsed when an action runs.
#[derive(Clone, Debug, Default)]
pub struct FormText {
    pub faculty: String,
    pub group: String,
    pub course: String,
    pub term: String,
    pub out_path: String,
}

impl FormText {
    pub fn from_options(opts: &AppOptions) -> Self {
        Self {
            faculty: opts.fetch.faculty.to_string(),
            group: opts.fetch.group.to_string(),
            course: opts.fetch.course.to_string(),
            term: opts.fetch.term.clone().unwrap_or_default(),
            out_path: opts.export.out_path.to_string_lossy().into_owned(),
        }
    }
}

pub struct App {
    // single source of truth (UI thread only)
    pub options: AppOptions,
    pub config_path: PathBuf,
    pub form: FormText,

    // last built page + its preview grid
    pub built: Option<Built>,
    pub grid: GridModel,

    // status/progress
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(options: AppOptions, config_path: PathBuf) -> Self {
        let form = FormText::from_options(&options);
        logf!("Init: faculty={} group={}", options.fetch.faculty, options.fetch.group);

        Self {
            options,
            config_path,
            form,
            built: None,
            grid: GridModel::default(),
            status: Arc::new(Mutex::new(s!("Idle"))),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Replace the current page data and rebuild the preview.
    pub fn set_built(&mut self, built: Built) {
        self.grid = GridModel::from_layout(&built.layout);
        self.built = Some(built);
    }

    /// Text boxes → options. Returns a message naming the first bad field.
    pub fn sync_form_into_options(&mut self) -> Result<(), String> {
        let parse = |name: &str, text: &str| -> Result<u32, String> {
            text.trim().parse().map_err(|_| format!("{name} must be a number"))
        };
        self.options.fetch.faculty = parse("Faculty", &self.form.faculty)?;
        self.options.fetch.group = parse("Group", &self.form.group)?;
        self.options.fetch.course = parse("Course", &self.form.course)?;

        let term = self.form.term.trim();
        self.options.fetch.term = (!term.is_empty()).then(|| s!(term));
        self.options.export.out_path = PathBuf::from(self.form.out_path.trim());
        Ok(())
    }

    pub fn save_config(&self) {
        match config_file::save(&self.config_path, &self.options) {
            Ok(()) => logd!("Config: saved {}", self.config_path.display()),
            Err(e) => loge!("Config: save failed: {}", e),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("options")
            .resizable(false)
            .show(ctx, |ui| {
                crate::gui::components::options_panel::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::grid_view::draw(ui, self);
        });
    }
}
