// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! # layermenu Theming
//!
//! Styling for context menu panels and their entries.
//!
//! ## Overview
//!
//! - **[BoxStyle](style::BoxStyle)**: a partial style where unset fields fall through
//! - **[MenuStyles](menu::MenuStyles)**: the caller overrides for every menu part,
//!   composed with the built-in defaults
//! - **[ThemeError](error::ThemeError)**: errors raised while loading styles from TOML
//!
//! ## Quick Start
//!
//! ```rust
//! use layermenu_theme::menu::MenuStyles;
//! use layermenu_theme::style::BoxStyle;
//! use vello::peniko::Color;
//!
//! let styles = MenuStyles {
//!     button_hover: BoxStyle::default().with_background(Color::from_rgb8(40, 80, 160)),
//!     ..Default::default()
//! };
//!
//! let hovered = styles.button_style().merged(&styles.button_hover_style()).resolve();
//! assert_eq!(hovered.background, Color::from_rgb8(40, 80, 160));
//! ```
//!
//! ## Environment Variables
//!
//! - `LAYERMENU_THEME_CONFIG`: path to a TOML file read by
//!   [MenuStyles::from_env_or_default](menu::MenuStyles::from_env_or_default)

/// Contains the built-in default styles.
pub mod defaults;
/// Contains the [error::ThemeError] type.
pub mod error;
/// Contains the [menu::MenuStyles] struct.
pub mod menu;
/// Hex string (de)serialization for colors.
pub mod serde_color;
/// Contains the [style::BoxStyle] struct and its building blocks.
pub mod style;
