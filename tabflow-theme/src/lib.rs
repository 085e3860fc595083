#![warn(missing_docs)]

//! Themes and styling for tabflow => See the `tabflow` crate.
//!
//! Provides widget identity ([id::WidgetId]), typed theme properties
//! ([properties::ThemeProperty]), the [theme::Theme] trait with built-in
//! light and dark themes, and file/environment based theme configuration
//! ([config::ThemeConfig]).

/// Contains the [WidgetId](id::WidgetId) used to look up widget styling.
pub mod id;

/// Contains the typed theme property keys.
pub mod properties;

/// Contains the [Theme](theme::Theme) trait and the built-in themes.
pub mod theme;

/// Contains theme configuration loading from files and the environment.
pub mod config;
