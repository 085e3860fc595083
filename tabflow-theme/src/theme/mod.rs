//! The core theme trait and the built-in themes.
//!
//! A [Theme] resolves `(widget id, property)` pairs to colors. Widgets ask
//! for every color they draw with, falling back to sensible defaults when a
//! theme does not style them.

use crate::id::WidgetId;
use crate::properties::ThemeProperty;
use vello::peniko::Color;

pub mod dark;
pub mod light;

pub use dark::DarkTheme;
pub use light::LightTheme;

/// The base trait for all themes.
pub trait Theme {
    /// Get the color of the given property for the given widget, if this
    /// theme styles it.
    fn get_property(&self, id: WidgetId, property: &ThemeProperty) -> Option<Color>;

    /// The background color of the host window.
    fn window_background(&self) -> Color;
}
