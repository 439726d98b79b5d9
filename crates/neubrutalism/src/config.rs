//! Style sheets loaded from TOML.
//!
//! Every section and every key is optional; anything left out keeps its
//! default. Unknown keys are rejected so typos fail loudly.
//!
//! ```toml
//! [theme]
//! accent = "#FF5C00"
//!
//! [button]
//! background = "yellow"
//! corner_radius = 8
//!
//! [text_field]
//! border_width = 3
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::decorator::{BaseDecorator, ButtonDecorator, TextFieldDecorator, ToggleDecorator};
use crate::error::StyleError;
use crate::style::{StyleConfig, Theme};

/// Theme plus one style section per decorator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleSheet {
    /// Accent and neutral tokens.
    pub theme: Theme,
    /// Style for generic decorated views.
    pub base: StyleConfig,
    /// Style for buttons.
    pub button: StyleConfig,
    /// Style for text fields (`border_color` is the unfocused color).
    pub text_field: StyleConfig,
}

impl StyleSheet {
    /// Parses a style sheet from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Parse`] for malformed TOML, unknown keys or bad
    /// color literals.
    pub fn from_toml_str(source: &str) -> Result<Self, StyleError> {
        let sheet: Self = toml::from_str(source)?;
        tracing::info!(accent = ?sheet.theme.accent, "style sheet loaded");
        Ok(sheet)
    }

    /// Reads and parses a style sheet file.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Io`] if the file cannot be read, otherwise the
    /// errors of [`StyleSheet::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Decorator for generic views.
    #[must_use]
    pub fn base_decorator(&self) -> BaseDecorator {
        BaseDecorator::new(self.base)
    }

    /// Decorator for buttons.
    #[must_use]
    pub fn button_decorator(&self) -> ButtonDecorator {
        ButtonDecorator::new(self.button)
    }

    /// Decorator for toggles.
    #[must_use]
    pub const fn toggle_decorator(&self) -> ToggleDecorator {
        ToggleDecorator::new(self.theme)
    }

    /// Unfocused text field decorator without icons.
    #[must_use]
    pub fn text_field_decorator(&self) -> TextFieldDecorator {
        TextFieldDecorator::new()
            .style(self.text_field)
            .theme(self.theme)
    }
}
