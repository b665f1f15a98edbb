use serde::{Deserialize, Serialize};

/// Storage key for the theme preference, independent of tracker data.
pub const THEME_KEY: &str = "theme";

/// Two-valued presentation preference, applied by the frontend as a
/// document-wide `data-theme` attribute.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value for the `data-theme` attribute.
    pub fn attr(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}
