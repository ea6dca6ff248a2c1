//! Project-generation progress shared between the creation page, the poller,
//! and the progress indicator.
//!
//! DESIGN
//! ======
//! In-memory only; a page reload forgets any running generation. The poller
//! is the single writer; everything else only reads.

#[cfg(test)]
#[path = "generation_test.rs"]
mod generation_test;

use crate::net::types::GenerationStatus;

/// Context value for the generation indicator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenerationState {
    /// A generation is running or finished but not yet dismissed.
    pub active: bool,
    /// Percent complete, clamped to 0–100.
    pub progress: f64,
    pub progress_message: String,
    /// Known once the backend has created the project.
    pub project_id: Option<String>,
    pub error: Option<String>,
    pub finished: bool,
    /// Bumped on every `start`; a poller stops once it no longer matches.
    pub run: u64,
}

impl GenerationState {
    /// Begin tracking a new generation, discarding any previous one.
    pub fn start(&mut self, message: impl Into<String>) {
        *self = Self {
            active: true,
            progress_message: message.into(),
            run: self.run + 1,
            ..Self::default()
        };
    }

    pub fn set_progress(&mut self, progress: f64, message: impl Into<String>) {
        self.progress = clamp_progress(progress);
        self.progress_message = message.into();
    }

    /// Fold a poll response into the state.
    pub fn apply_status(&mut self, status: &GenerationStatus) {
        if !self.active {
            return;
        }
        self.set_progress(status.progress, status.message.clone());
        if status.project_id.is_some() {
            self.project_id.clone_from(&status.project_id);
        }
        if let Some(error) = &status.error {
            self.fail(error.clone());
        } else if status.done {
            self.progress = 100.0;
            self.finished = true;
        }
    }

    /// [`apply_status`](Self::apply_status) for generation `run` only.
    ///
    /// Returns false when `run` was dismissed or replaced.
    pub fn apply_status_for(&mut self, run: u64, status: &GenerationStatus) -> bool {
        if !self.is_current(run) {
            return false;
        }
        self.apply_status(status);
        true
    }

    /// [`fail`](Self::fail) for generation `run` only.
    pub fn fail_for(&mut self, run: u64, error: impl Into<String>) -> bool {
        if !self.is_current(run) {
            return false;
        }
        self.fail(error);
        true
    }

    pub fn fail(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
        self.finished = true;
    }

    /// Dismiss the indicator.
    pub fn reset(&mut self) {
        *self = Self { run: self.run, ..Self::default() };
    }

    /// CSS width of the progress bar, or `None` when nothing should render.
    pub fn progress_width(&self) -> Option<String> {
        self.active.then(|| format!("{}%", self.progress))
    }

    /// True while `run` is the generation being shown.
    pub fn is_current(&self, run: u64) -> bool {
        self.active && self.run == run
    }

    pub fn can_view_project(&self) -> bool {
        self.active && self.project_id.is_some()
    }

    /// Detail route of the generated project, once known.
    pub fn project_href(&self) -> Option<String> {
        self.project_id.as_ref().map(|id| format!("/projects/{id}"))
    }
}

fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 100.0) }
}
