/// Holds the active mode for the lifetime of a mounted widget.
///
/// Only [`ModeController::toggle`] writes to the store; a mode restored from
/// an empty or broken store is never written back.
pub struct ModeController<S> {
    store: S,
    mode: Mode,
}

impl<S: PreferenceStore> ModeController<S> {
    /// Reads the saved mode, falling back to the default one.
    ///
    /// The returned error, if any, is informational: the controller is
    /// always usable.
    pub fn restore(store: S) -> (Self, Option<PreferenceError>) {
        let (mode, error) = match store.get_mode() {
            Ok(mode) => (mode.unwrap_or_default(), None),
            Err(error) => (Mode::default(), Some(error)),
        };

        (Self { store, mode }, error)
    }

    /// Switches to the opposite mode and saves it.
    ///
    /// The mode changes even if saving fails.
    pub fn toggle(&mut self) -> PreferenceResult<Mode> {
        let mode = self.mode.toggled();
        let saved = self.store.set_mode(mode);
        self.mode = mode;
        saved.map(|()| mode)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn theme(&self) -> &'static Theme {
        resolve(self.mode)
    }

    // Names the mode a click would switch to
    pub fn toggle_label(&self) -> String {
        format!("Toggle {} Mode", self.mode.toggled().name())
    }
}


use super::modes::Mode;
use super::storage::{PreferenceError, PreferenceResult, PreferenceStore};
use super::themes::{resolve, Theme};
