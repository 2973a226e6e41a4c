// SPDX-License-Identifier: MIT OR Apache-2.0

use std::env;

use vello::kurbo::Size;

use layermenu_theme::menu::MenuStyles;

/// Environment variable that keeps empty menus open when set to a true value.
pub const SHOW_EMPTY_ENV: &str = "LAYERMENU_SHOW_EMPTY";

/// Environment variable with the initial viewport size as `WIDTHxHEIGHT`.
pub const VIEWPORT_ENV: &str = "LAYERMENU_VIEWPORT";

/// Viewport used when [VIEWPORT_ENV] is unset or invalid.
pub const DEFAULT_VIEWPORT: Size = Size::new(800.0, 600.0);

/// Configuration of a context menu host.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuConfig {
    /// Size of the area menus are placed in.
    pub viewport: Size,
    /// Whether a right-click that collected no entries closes the menu
    /// instead of showing an empty panel.
    ///
    /// **Default**: `true`, unless `LAYERMENU_SHOW_EMPTY` is set.
    pub suppress_empty: bool,
    /// Style overrides for menu panels and entries.
    ///
    /// **Default**: read from the file named by `LAYERMENU_THEME_CONFIG`, if any.
    pub styles: MenuStyles,
}

impl MenuConfig {
    /// Set the viewport size.
    pub fn with_viewport(mut self, viewport: Size) -> Self {
        self.viewport = viewport;
        self
    }

    /// Set the menu styles.
    pub fn with_styles(mut self, styles: MenuStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Set whether empty menus are suppressed.
    pub fn with_suppress_empty(mut self, suppress_empty: bool) -> Self {
        self.suppress_empty = suppress_empty;
        self
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        let show_empty = env::var(SHOW_EMPTY_ENV)
            .map(|value| parse_flag(&value))
            .unwrap_or(false);

        let viewport = match env::var(VIEWPORT_ENV) {
            Ok(value) => parse_viewport(&value).unwrap_or_else(|| {
                log::warn!(
                    "Ignoring invalid {}={:?}, expected WIDTHxHEIGHT",
                    VIEWPORT_ENV,
                    value
                );
                DEFAULT_VIEWPORT
            }),
            Err(_) => DEFAULT_VIEWPORT,
        };

        Self {
            viewport,
            suppress_empty: !show_empty,
            styles: MenuStyles::from_env_or_default(),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "1" | "yes" | "on" | "enable"
    )
}

fn parse_viewport(value: &str) -> Option<Size> {
    let (width, height) = value.trim().split_once(['x', 'X'])?;
    let width: f64 = width.trim().parse().ok()?;
    let height: f64 = height.trim().parse().ok()?;

    if width > 0.0 && height > 0.0 {
        Some(Size::new(width, height))
    } else {
        None
    }
}
