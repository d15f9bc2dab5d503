//! Light/dark visual mode.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Key of the persisted preference slot.
pub const STORAGE_KEY: &str = "theme";

/// Active visual mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a persisted slot value.
    ///
    /// Only the literal `"dark"` selects dark mode. Absent, `"light"`, and
    /// anything unrecognized all fall back to light.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Value written to the persisted slot.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}
