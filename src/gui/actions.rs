// src/gui/actions.rs
//
// Button handlers. They run on the UI thread; a fetch is one GET + one POST.

use crate::{
    config::options::Source,
    gui::{app::App, progress::GuiProgress},
    progress::Progress,
    runner,
};

/// Load the page from `source`, then rebuild schedule, layout and preview.
pub fn load(app: &mut App, source: Source) {
    if let Err(msg) = app.sync_form_into_options() {
        app.status(msg);
        return;
    }
    app.options.source = source;
    app.save_config();

    logf!("Load: Begin source={:?}", app.options.source);
    let mut prog = GuiProgress::new(app.status.clone());
    prog.begin(4);

    let built = runner::load_html(&app.options, Some(&mut prog))
        .and_then(|html| runner::build_with(&html, Some(&mut prog)));

    match built {
        Ok(built) => {
            logf!(
                "Load: OK rows={} weeks={} final_row={}",
                built.rows.len(),
                built.schedule.weeks().len(),
                built.layout.final_row
            );
            let msg = format!(
                "Loaded {} lessons in {} week(s)",
                built.schedule.session_count(),
                built.schedule.weeks().len()
            );
            app.set_built(built);
            app.status(msg);
        }
        Err(e) => {
            loge!("Load: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}

pub fn export(app: &mut App) {
    if let Err(msg) = app.sync_form_into_options() {
        app.status(msg);
        return;
    }
    app.save_config();

    let Some(built) = app.built.as_ref() else {
        app.status("Nothing to export yet. Fetch or load a timetable first.");
        return;
    };

    match runner::export(built, &app.options.export) {
        Ok(paths) => {
            let names: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
            app.status(format!("Wrote {}", names.join(", ")));
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
