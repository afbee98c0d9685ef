#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Human readable name, used in the toggle button label
    pub fn name(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

// Stored representation
impl AsRef<str> for Mode {
    fn as_ref(&self) -> &str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl TryFrom<&str> for Mode {
    type Error = PreferenceError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mode = match value {
            "light" => Self::Light,
            "dark" => Self::Dark,
            other => return Err(PreferenceError::Malformed(other.to_owned())),
        };
        debug_assert_eq!(
            mode.as_ref(),
            value,
            "parsed mode must be stored under the same value"
        );
        Ok(mode)
    }
}


use super::storage::PreferenceError;
use std::fmt;
