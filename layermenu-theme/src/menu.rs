// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Menu Styles
//!
//! [MenuStyles] holds the caller's overrides for every part of a context menu
//! and composes them with the [built-in defaults](crate::defaults).
//!
//! ## Configuration File Format
//!
//! ```toml
//! [menu]
//! background = "#202020"
//! border_radius = 2.0
//!
//! [button_hover]
//! background = "#3050a0"
//!
//! [label]
//! color = "#ffffff99"
//! padding = { top = 4.0, right = 8.0, bottom = 4.0, left = 8.0 }
//! ```
//!
//! Every table is optional. Unknown tables are rejected.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::{ThemeError, ThemeResult};
use crate::style::BoxStyle;

/// Environment variable naming a TOML file with menu styles.
pub const THEME_CONFIG_ENV: &str = "LAYERMENU_THEME_CONFIG";

/// Caller-supplied style overrides for menu panels and their entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MenuStyles {
    /// Menu panel.
    pub menu: BoxStyle,
    /// Menu panel while the pointer is over it.
    pub menu_hover: BoxStyle,
    /// Button rows.
    pub button: BoxStyle,
    /// Button rows while hovered.
    pub button_hover: BoxStyle,
    /// Label rows.
    pub label: BoxStyle,
    /// Submenu rows.
    pub submenu: BoxStyle,
    /// Submenu rows while hovered.
    pub submenu_hover: BoxStyle,
}

impl MenuStyles {
    /// Base style of a menu panel.
    pub fn panel_style(&self) -> BoxStyle {
        defaults::panel().merged(&self.menu)
    }

    /// Hover layer of a menu panel. There is no built-in panel hover style.
    pub fn panel_hover_style(&self) -> BoxStyle {
        self.menu_hover.clone()
    }

    /// Style of a label row.
    pub fn label_style(&self) -> BoxStyle {
        defaults::label().merged(&self.label)
    }

    /// Base style of a button row.
    pub fn button_style(&self) -> BoxStyle {
        defaults::entry().merged(&self.button)
    }

    /// Hover layer of a button row.
    pub fn button_hover_style(&self) -> BoxStyle {
        defaults::hover().merged(&self.button_hover)
    }

    /// Base style of a submenu row.
    pub fn submenu_style(&self) -> BoxStyle {
        defaults::entry().merged(&self.submenu)
    }

    /// Hover layer of a submenu row.
    pub fn submenu_hover_style(&self) -> BoxStyle {
        defaults::hover().merged(&self.submenu_hover)
    }

    /// Parse styles from a TOML string.
    pub fn from_toml_str(source: &str) -> ThemeResult<Self> {
        toml::from_str(source).map_err(|e| ThemeError::parse_error("<inline>", e.to_string()))
    }

    /// Load styles from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ThemeError::ThemeFileNotFound {
                path: path.to_path_buf(),
            });
        }

        let source = fs::read_to_string(path).map_err(|source| ThemeError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&source)
            .map_err(|e| ThemeError::parse_error(path.display().to_string(), e.to_string()))
    }

    /// Load styles from the file named by `LAYERMENU_THEME_CONFIG`.
    ///
    /// Falls back to the defaults (with a warning) if the variable is unset or
    /// the file cannot be loaded.
    pub fn from_env_or_default() -> Self {
        let Ok(path) = env::var(THEME_CONFIG_ENV) else {
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(styles) => {
                log::debug!("Loaded menu styles from {}", path);
                styles
            },
            Err(err) => {
                log::warn!("{}; using default menu styles", err);
                Self::default()
            },
        }
    }

    /// Serialize the overrides back to TOML.
    pub fn to_toml_string(&self) -> ThemeResult<String> {
        toml::to_string(self).map_err(|e| ThemeError::parse_error("<serialize>", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Edges;
    use std::io::Write;
    use vello::peniko::Color;

    #[test]
    fn test_defaults_compose() {
        let styles = MenuStyles::default();

        let panel = styles.panel_style().resolve();
        assert_eq!(panel.background, defaults::panel_background());
        assert_eq!(panel.padding, Edges::symmetric(3.0, 0.0));
        assert_eq!(panel.min_width, 10.0);

        let hovered = styles.button_style().merged(&styles.button_hover_style()).resolve();
        assert_eq!(hovered.background, Color::from_rgba8(0, 0, 0, 51));
        assert_eq!(hovered.padding, Edges::uniform(5.0));
    }

    #[test]
    fn test_overrides_win_over_defaults() {
        let styles = MenuStyles {
            label: BoxStyle::default().with_color(Color::from_rgb8(255, 0, 0)),
            ..Default::default()
        };

        let label = styles.label_style().resolve();
        assert_eq!(label.color, Color::from_rgb8(255, 0, 0));
        assert_eq!(label.padding, Edges::uniform(5.0));
    }

    #[test]
    fn test_parse_toml() {
        let styles = MenuStyles::from_toml_str(
            r##"
            [menu]
            background = "#202020"

            [submenu_hover]
            background = "#3050a0"
            padding = { left = 8.0, right = 8.0 }
            "##,
        )
        .unwrap();

        assert_eq!(styles.menu.background, Some(Color::from_rgb8(0x20, 0x20, 0x20)));
        let padding = styles.submenu_hover.padding.unwrap();
        assert_eq!(padding.left, 8.0);
        assert_eq!(padding.top, 0.0);
    }

    #[test]
    fn test_parse_rejects_unknown_part() {
        let err = MenuStyles::from_toml_str("[toolbar]\nbackground = \"#000000\"\n").unwrap_err();
        assert!(matches!(err, ThemeError::ThemeParseError { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[button]\ncolor = \"#00ff00\"").unwrap();

        let styles = MenuStyles::from_file(file.path()).unwrap();
        assert_eq!(styles.button.color, Some(Color::from_rgb8(0, 255, 0)));
    }

    #[test]
    fn test_missing_file() {
        let err = MenuStyles::from_file("/nonexistent/layermenu/theme.toml").unwrap_err();
        assert!(matches!(err, ThemeError::ThemeFileNotFound { .. }));
    }

    #[test]
    fn test_toml_roundtrip_keeps_overrides() {
        let styles = MenuStyles {
            menu: BoxStyle::default().with_border_radius(2.0),
            ..Default::default()
        };
        let text = styles.to_toml_string().unwrap();
        assert_eq!(MenuStyles::from_toml_str(&text).unwrap(), styles);
    }
}
