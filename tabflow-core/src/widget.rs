use crate::input::FrameInfo;
use crate::layout::{LayoutNode, LayoutStyle, StyleNode};
use crate::signal::MaybeSignal;
use crate::update::Update;
use crate::vgi::Graphics;
use tabflow_theme::id::WidgetId;
use tabflow_theme::theme::Theme;

/// A boxed widget.
pub type BoxedWidget = Box<dyn Widget>;

/// The base trait for all widgets.
///
/// The embedding host drives widgets in a fixed cycle per frame:
///
/// 1. [`layout_style()`](Widget::layout_style) declares the style tree, which
///    the host solves into a [LayoutNode] tree via
///    [compute_layout](crate::layout::compute_layout).
/// 2. [`update()`](Widget::update) processes input against the computed
///    layout and returns [Update] flags telling the host what to do next.
/// 3. [`render()`](Widget::render) draws the widget through the
///    [Graphics] abstraction.
///
/// Widgets never cache derived geometry across frames: everything positional
/// is recomputed from the layout node tree handed in, so a stale frame can at
/// worst show a stale animation target until the next event corrects it.
pub trait Widget {
    /// Render the widget to the given graphics backend.
    fn render(
        &mut self,
        graphics: &mut dyn Graphics,
        theme: &dyn Theme,
        layout_node: &LayoutNode,
        info: &mut FrameInfo,
    );

    /// Return the layout style node for layout computation.
    fn layout_style(&self) -> StyleNode;

    /// Update the widget state with the given info and layout. Returns what
    /// the host should refresh before the next frame.
    fn update(&mut self, layout: &LayoutNode, info: &mut FrameInfo) -> Update;

    /// Return the widget id.
    fn widget_id(&self) -> WidgetId;
}

impl Widget for Box<dyn Widget> {
    fn render(
        &mut self,
        graphics: &mut dyn Graphics,
        theme: &dyn Theme,
        layout_node: &LayoutNode,
        info: &mut FrameInfo,
    ) {
        (**self).render(graphics, theme, layout_node, info)
    }

    fn layout_style(&self) -> StyleNode {
        (**self).layout_style()
    }

    fn update(&mut self, layout: &LayoutNode, info: &mut FrameInfo) -> Update {
        (**self).update(layout, info)
    }

    fn widget_id(&self) -> WidgetId {
        (**self).widget_id()
    }
}

/// An extension trait for widgets with a single child widget.
pub trait WidgetChildExt {
    /// Sets the child widget of the widget.
    fn set_child(&mut self, child: impl Widget + 'static);

    /// Sets the child widget of the widget and returns self.
    fn with_child(mut self, child: impl Widget + 'static) -> Self
    where
        Self: Sized,
    {
        self.set_child(child);
        self
    }
}

/// An extension trait for widgets with multiple child widgets.
pub trait WidgetChildrenExt {
    /// Sets the child widgets of the widget.
    fn set_children(&mut self, children: Vec<BoxedWidget>);

    /// Sets the child widgets of the widget and returns self.
    fn with_children(mut self, children: Vec<BoxedWidget>) -> Self
    where
        Self: Sized,
    {
        self.set_children(children);
        self
    }

    /// Adds a child widget to the widget.
    fn add_child(&mut self, child: impl Widget + 'static);

    /// Adds a child widget to the widget and returns self.
    fn with_child(mut self, child: impl Widget + 'static) -> Self
    where
        Self: Sized,
    {
        self.add_child(child);
        self
    }
}

/// An extension trait for widgets with a layout style.
pub trait WidgetLayoutExt {
    /// Sets the layout style of the widget.
    fn set_layout_style(&mut self, layout_style: impl Into<MaybeSignal<LayoutStyle>>);

    /// Sets the layout style of the widget and returns self.
    fn with_layout_style(mut self, layout_style: impl Into<MaybeSignal<LayoutStyle>>) -> Self
    where
        Self: Sized,
    {
        self.set_layout_style(layout_style);
        self
    }
}
