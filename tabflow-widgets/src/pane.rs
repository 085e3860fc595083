use tabflow_core::input::FrameInfo;
use tabflow_core::layout::{LayoutNode, LayoutStyle, StyleNode};
use tabflow_core::signal::MaybeSignal;
use tabflow_core::update::Update;
use tabflow_core::vgi::{shape_to_path, Graphics};
use tabflow_core::widget::{BoxedWidget, Widget, WidgetChildExt, WidgetLayoutExt};
use tabflow_theme::id::WidgetId;
use tabflow_theme::properties::ThemeProperty;
use tabflow_theme::theme::Theme;
use vello::kurbo::{Affine, Rect};
use vello::peniko::{Brush, Color, Fill};

/// A plain rectangular surface, optionally wrapping a child widget.
///
/// Fills its layout rectangle with either an explicit color or the theme's
/// muted background. Mostly used as panel bodies and placeholders.
pub struct Pane {
    child: Option<BoxedWidget>,
    color: Option<Color>,
    layout_style: MaybeSignal<LayoutStyle>,
}

impl Pane {
    /// Create an empty pane.
    pub fn new() -> Self {
        Self {
            child: None,
            color: None,
            layout_style: LayoutStyle::default().into(),
        }
    }

    /// Set an explicit fill color, bypassing the theme, and return self.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

impl Default for Pane {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Pane {
    fn render(
        &mut self,
        graphics: &mut dyn Graphics,
        theme: &dyn Theme,
        layout_node: &LayoutNode,
        info: &mut FrameInfo,
    ) {
        let color = self
            .color
            .or_else(|| theme.get_property(self.widget_id(), &ThemeProperty::Background))
            .unwrap_or(Color::from_rgb8(248, 250, 252));

        let layout = &layout_node.layout;
        let shape = Rect::new(
            layout.location.x as f64,
            layout.location.y as f64,
            (layout.location.x + layout.size.width) as f64,
            (layout.location.y + layout.size.height) as f64,
        );
        graphics.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            &Brush::Solid(color),
            None,
            &shape_to_path(&shape),
        );

        if let Some(child) = &mut self.child {
            if let Some(child_node) = layout_node.children.first() {
                child.render(graphics, theme, child_node, info);
            }
        }
    }

    fn layout_style(&self) -> StyleNode {
        StyleNode {
            style: self.layout_style.get().clone(),
            children: match &self.child {
                Some(child) => vec![child.layout_style()],
                None => vec![],
            },
        }
    }

    fn update(&mut self, layout: &LayoutNode, info: &mut FrameInfo) -> Update {
        match (&mut self.child, layout.children.first()) {
            (Some(child), Some(child_node)) => child.update(child_node, info),
            _ => Update::empty(),
        }
    }

    fn widget_id(&self) -> WidgetId {
        WidgetId::new("tabflow-widgets", "Pane")
    }
}

impl WidgetChildExt for Pane {
    fn set_child(&mut self, child: impl Widget + 'static) {
        self.child = Some(Box::new(child));
    }
}

impl WidgetLayoutExt for Pane {
    fn set_layout_style(&mut self, layout_style: impl Into<MaybeSignal<LayoutStyle>>) {
        self.layout_style = layout_style.into();
    }
}
