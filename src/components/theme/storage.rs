// Persisted mode preference
//
// A single string value under a fixed key. Every failure is recoverable,
// callers fall back to the default mode and keep going.

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("Local storage is unavailable")]
    Unavailable,

    #[error("Local storage rejected the operation: {0}")]
    Rejected(String),

    #[error("Stored mode {0:?} is not recognized")]
    Malformed(String),
}

pub type PreferenceResult<T> = Result<T, PreferenceError>;

pub trait PreferenceStore {
    /// Raw stored value, `None` if it was never set
    fn load(&self) -> PreferenceResult<Option<String>>;

    fn save(&self, value: &str) -> PreferenceResult<()>;

    fn get_mode(&self) -> PreferenceResult<Option<Mode>> {
        self.load()?
            .map(|value| Mode::try_from(value.as_str()))
            .transpose()
    }

    fn set_mode(&self, mode: Mode) -> PreferenceResult<()> {
        self.save(mode.as_ref())
    }
}

/// `window.localStorage` backed store.
///
/// Values are stored as plain strings, not JSON.
pub struct LocalPreferenceStore {
    key: &'static str,
}

impl LocalPreferenceStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage(&self) -> PreferenceResult<web_sys::Storage> {
        web_sys::window()
            .ok_or(PreferenceError::Unavailable)?
            .local_storage()
            // throws when storage is disabled by the browser
            .ok()
            .flatten()
            .ok_or(PreferenceError::Unavailable)
    }
}

impl PreferenceStore for LocalPreferenceStore {
    fn load(&self) -> PreferenceResult<Option<String>> {
        self.storage()?.get_item(self.key).map_err(rejected)
    }

    fn save(&self, value: &str) -> PreferenceResult<()> {
        self.storage()?.set_item(self.key, value).map_err(rejected)
    }
}

fn rejected(err: JsValue) -> PreferenceError {
    PreferenceError::Rejected(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

#[cfg(test)]
pub mod memory {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Clones share the same value, so a test can keep a handle
    /// after moving the store into a controller.
    #[derive(Clone, Default)]
    pub struct MemoryPreferenceStore {
        value: Rc<RefCell<Option<String>>>,
        unavailable: bool,
    }

    impl MemoryPreferenceStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_value(value: &str) -> Self {
            let store = Self::new();
            *store.value.borrow_mut() = Some(value.to_owned());
            store
        }

        pub fn unavailable() -> Self {
            Self {
                unavailable: true,
                ..Self::default()
            }
        }

        pub fn value(&self) -> Option<String> {
            self.value.borrow().clone()
        }
    }

    impl PreferenceStore for MemoryPreferenceStore {
        fn load(&self) -> PreferenceResult<Option<String>> {
            if self.unavailable {
                return Err(PreferenceError::Unavailable);
            }
            Ok(self.value())
        }

        fn save(&self, value: &str) -> PreferenceResult<()> {
            if self.unavailable {
                return Err(PreferenceError::Unavailable);
            }
            *self.value.borrow_mut() = Some(value.to_owned());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryPreferenceStore;
    use super::*;
    use claim::{assert_err, assert_none, assert_ok};

    #[test]
    fn set_then_get_returns_the_same_mode() {
        let store = MemoryPreferenceStore::new();
        for mode in [Mode::Dark, Mode::Light] {
            assert_ok!(store.set_mode(mode));
            assert_eq!(assert_ok!(store.get_mode()), Some(mode));
        }
    }

    #[test]
    fn modes_are_stored_as_plain_strings() {
        let store = MemoryPreferenceStore::new();
        assert_ok!(store.set_mode(Mode::Dark));
        assert_eq!(store.value().as_deref(), Some("dark"));
    }

    #[test]
    fn absent_value_is_none() {
        let store = MemoryPreferenceStore::new();
        assert_none!(assert_ok!(store.get_mode()));
    }

    #[test]
    fn unrecognized_value_is_malformed() {
        let store = MemoryPreferenceStore::with_value("sepia");
        assert_eq!(
            assert_err!(store.get_mode()),
            PreferenceError::Malformed("sepia".into())
        );
    }

    #[test]
    fn unavailable_store_reports_on_both_paths() {
        let store = MemoryPreferenceStore::unavailable();
        assert_eq!(assert_err!(store.get_mode()), PreferenceError::Unavailable);
        assert_eq!(
            assert_err!(store.set_mode(Mode::Dark)),
            PreferenceError::Unavailable
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            PreferenceError::Malformed("x".into()).to_string(),
            "Stored mode \"x\" is not recognized"
        );
        assert_eq!(
            PreferenceError::Unavailable.to_string(),
            "Local storage is unavailable"
        );
    }
}

use super::modes::Mode;
use wasm_bindgen::JsValue;
