// src/progress.rs
/// Lightweight progress reporting for a run (fetch → group → layout → write).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of stages (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one stage completes.
    fn stage_done(&mut self, _stage: Stage) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Load,
    Extract,
    Group,
    Layout,
    Write,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::Load => "Page loaded",
            Stage::Extract => "Rows extracted",
            Stage::Group => "Schedule grouped",
            Stage::Layout => "Grid laid out",
            Stage::Write => "Files written",
        }
    }
}

