#![warn(missing_docs)]

//! Animated tab-switching widgets with measured geometry and smooth
//! hover/selection transitions.

pub use nalgebra as math;
pub use vello::peniko as color;

pub use tabflow_core as core;
pub use tabflow_theme as theme;
pub use tabflow_widgets as widgets;

/// A "prelude" for users of the tabflow widget family.
///
/// Importing this module brings into scope the most common types needed to
/// embed a tab switcher in a host application.
///
/// ```rust
/// use tabflow::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::input::{ElementState, FocusChange, FrameInfo, MouseButton};
    pub use crate::core::layout::*;
    pub use crate::core::signal::{MaybeSignal, Ref, Signal, StateSignal};
    pub use crate::core::update::Update;
    pub use crate::core::vgi::{shape_to_path, vello_vg::VelloGraphics, Graphics};
    pub use crate::core::widget::{
        BoxedWidget, Widget, WidgetChildExt, WidgetChildrenExt, WidgetLayoutExt,
    };

    // Theming
    pub use crate::theme::config::{ThemeConfig, ThemeVariant};
    pub use crate::theme::id::WidgetId;
    pub use crate::theme::properties::ThemeProperty;
    pub use crate::theme::theme::{DarkTheme, LightTheme, Theme};

    // Math
    pub use nalgebra::Vector2;

    // Widgets
    pub use crate::widgets::button::{Button, ButtonVariant};
    pub use crate::widgets::motion::{Animated, Easing, Lerp, Transition};
    pub use crate::widgets::pane::Pane;
    pub use crate::widgets::tabs::{Orientation, TabItem, Tabs};
}
