use tracing::{debug, warn};

use crate::form::{self, FormError, RawForm};
use crate::models::{CycleInput, TrackerView};
use crate::prediction;
use crate::render;
use crate::storage::{KeyValueStore, TRACKER_KEY};
use crate::theme::{Theme, THEME_KEY};

/// The tracker controller: one method per user action, each producing
/// one state transition against the injected store.
pub struct App<S: KeyValueStore> {
    store: S,
    input: Option<CycleInput>,
    theme: Theme,
}

impl<S: KeyValueStore> App<S> {
    /// Restore the last session at startup. Storage failures degrade
    /// to an empty session rather than failing.
    pub fn restore(store: S) -> Self {
        let theme = match store.load::<Theme>(THEME_KEY) {
            Ok(Some(theme)) => theme,
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!(error = %e, "could not load theme preference");
                Theme::default()
            }
        };

        let input = match store.load::<CycleInput>(TRACKER_KEY) {
            Ok(saved) => saved,
            Err(e) => {
                warn!(error = %e, "could not load saved tracker data");
                None
            }
        };

        Self {
            store,
            input,
            theme,
        }
    }

    /// The last submitted input, for restoring form fields.
    pub fn input(&self) -> Option<&CycleInput> {
        self.input.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Recompute the full view from the stored input, if a session
    /// exists.
    pub fn view(&self) -> Option<TrackerView> {
        self.input.as_ref().map(compute_view)
    }

    /// Handle one form submission. An invalid start date leaves state
    /// and storage untouched; a failed save is non-fatal and the view
    /// is still produced in memory.
    pub fn submit(&mut self, raw: &RawForm) -> Result<TrackerView, FormError> {
        let input = form::parse(raw)?;

        if let Err(e) = self.store.save(TRACKER_KEY, &input) {
            warn!(error = %e, "could not persist tracker data");
        }

        let view = compute_view(&input);
        debug!(start = %input.start_date, "computed cycle forecast");
        self.input = Some(input);
        Ok(view)
    }

    /// Clear the saved session. The theme preference is untouched.
    pub fn reset(&mut self) {
        if let Err(e) = self.store.remove(TRACKER_KEY) {
            warn!(error = %e, "could not clear tracker data");
        }
        self.input = None;
    }

    /// Flip the theme and persist the new preference.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = self.store.save(THEME_KEY, &self.theme) {
            warn!(error = %e, "could not persist theme preference");
        }
        self.theme
    }
}

fn compute_view(input: &CycleInput) -> TrackerView {
    let prediction =
        prediction::predict(input.start_date, input.cycle_length, input.period_length);
    let projected = prediction::project(
        input.start_date,
        input.cycle_length,
        input.period_length,
        prediction::PROJECTION_COUNT,
    );
    let summary_html = render::render_summary(input, &prediction);
    let months_html = render::render_months(&projected);

    TrackerView {
        input: input.clone(),
        prediction,
        projected,
        summary_html,
        months_html,
    }
}
