use vello::peniko::Color;

use crate::id::WidgetId;
use crate::properties::ThemeProperty;
use crate::theme::Theme;

/// A light theme with a near-black primary accent.
#[derive(Debug, Clone)]
pub struct LightTheme {
    primary: Color,
    background: Color,
    background_muted: Color,
    border: Color,
    text: Color,
}

impl LightTheme {
    /// Create a new light theme.
    pub fn new() -> Self {
        Self {
            primary: Color::from_rgb8(15, 23, 42),
            background: Color::WHITE,
            background_muted: Color::from_rgb8(248, 250, 252),
            border: Color::from_rgb8(226, 232, 240),
            text: Color::from_rgb8(15, 23, 42),
        }
    }
}

impl Default for LightTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for LightTheme {
    fn get_property(&self, id: WidgetId, property: &ThemeProperty) -> Option<Color> {
        match id.namespace() {
            "tabflow-widgets" => match id.id() {
                "Tabs" => match property {
                    ThemeProperty::TabBarBackground => Some(self.background),
                    ThemeProperty::ContentBackground => Some(self.background),
                    ThemeProperty::Border => Some(self.border),
                    ThemeProperty::HoverHighlight => Some(self.primary.with_alpha(0.1)),
                    ThemeProperty::SelectionIndicator => Some(self.primary),
                    _ => None,
                },
                "Button" => match property {
                    ThemeProperty::ColorIdle => Some(self.primary),
                    ThemeProperty::ColorHovered => Some(self.primary.with_alpha(0.9)),
                    ThemeProperty::ColorPressed => Some(self.primary.with_alpha(0.8)),
                    ThemeProperty::Color => Some(self.text),
                    _ => None,
                },
                "Pane" => match property {
                    ThemeProperty::Background => Some(self.background_muted),
                    ThemeProperty::Border => Some(self.border),
                    _ => None,
                },
                _ => None,
            },
            _ => None,
        }
    }

    fn window_background(&self) -> Color {
        self.background
    }
}
