/// Type-safe theme property keys for widgets.
///
/// Using an enum instead of string keys gives compile-time safety and keeps
/// theme lookups cheap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeProperty {
    // Common properties
    /// The primary foreground color of a widget.
    Color,
    /// The background color of a widget.
    Background,
    /// The border color of a widget.
    Border,

    // Button-specific properties
    /// The fill color of a button when idle.
    ColorIdle,
    /// The fill color of a button when hovered.
    ColorHovered,
    /// The fill color of a button when pressed.
    ColorPressed,

    // Tabs-specific properties
    /// The background color of the tab strip.
    TabBarBackground,
    /// The background color of the content area.
    ContentBackground,
    /// The tint of the animated hover highlight (alpha included).
    HoverHighlight,
    /// The color of the selection indicator bar.
    SelectionIndicator,
}
