//! Theme preference.
//!
//! Light is the absence of a preference: the stored value is an empty string
//! for light and `"dark"` for dark, so a never-initialized store and an
//! explicitly-light store are indistinguishable.

/// Process-wide visual theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parses the persisted representation. Unknown values degrade to light.
    pub fn from_stored(value: &str) -> Self {
        match value {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    /// The persisted representation: `""` for light, `"dark"` for dark.
    pub fn to_stored(self) -> &'static str {
        match self {
            Self::Light => "",
            Self::Dark => "dark",
        }
    }

    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}
