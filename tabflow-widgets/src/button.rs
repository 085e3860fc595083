use std::rc::Rc;
use std::time::{Duration, Instant};

use tabflow_core::input::{ElementState, FrameInfo, MouseButton};
use tabflow_core::layout::{LayoutNode, LayoutStyle, LengthPercentage, Rect as StyleRect, StyleNode};
use tabflow_core::signal::MaybeSignal;
use tabflow_core::update::Update;
use tabflow_core::vgi::{shape_to_path, vello_vg::VelloGraphics, Graphics};
use tabflow_core::widget::{BoxedWidget, Widget, WidgetChildExt, WidgetLayoutExt};
use tabflow_theme::id::WidgetId;
use tabflow_theme::properties::ThemeProperty;
use tabflow_theme::theme::Theme;
use vello::kurbo::{Affine, Point, RoundedRect};
use vello::peniko::{Brush, Color, Fill};
use vello::Scene;

use crate::motion::{Animated, Easing, Transition};

/// The interaction state of a [Button].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// The cursor is outside the button.
    Idle,
    /// The cursor is over the button.
    Hovered,
    /// The primary button is held down over the button.
    Pressed,
    /// The primary button was released over the button this frame.
    Released,
}

/// The visual treatment of a [Button].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    /// A solid background in the theme's accent color.
    Filled,
    /// No background of its own. Hover feedback, if any, is drawn by the
    /// containing widget.
    Ghost,
}

/// A clickable region wrapping an arbitrary child widget.
///
/// Reports interaction through three callbacks: `on_pressed` fires on a
/// completed click (press and release inside the button), `on_pointer_enter`
/// fires once when the cursor moves onto the button, and `on_focus` fires
/// when the button gains keyboard focus via [set_focused](Button::set_focused).
///
/// The child can carry an animated emphasis scale
/// ([set_emphasis](Button::set_emphasis)), used by containers to accent one
/// button among siblings.
pub struct Button {
    child: BoxedWidget,
    state: ButtonState,
    variant: ButtonVariant,
    focused: bool,
    emphasis: Animated<f32>,
    on_pressed: Option<Rc<dyn Fn() -> Update>>,
    on_pointer_enter: Option<Rc<dyn Fn() -> Update>>,
    on_focus: Option<Rc<dyn Fn() -> Update>>,
    layout_style: MaybeSignal<LayoutStyle>,
    disabled: bool,
}

impl Button {
    const CORNER_RADIUS: f64 = 6.0;
    const EMPHASIS_TRANSITION: Transition =
        Transition::new(Duration::from_millis(200), Easing::EaseOut);

    /// Create a button around the given child.
    pub fn new(child: impl Widget + 'static) -> Self {
        Self {
            child: Box::new(child),
            state: ButtonState::Idle,
            variant: ButtonVariant::Filled,
            focused: false,
            emphasis: Animated::new(1.0, Self::EMPHASIS_TRANSITION),
            on_pressed: None,
            on_pointer_enter: None,
            on_focus: None,
            layout_style: LayoutStyle {
                padding: StyleRect {
                    left: LengthPercentage::length(12.0),
                    right: LengthPercentage::length(12.0),
                    top: LengthPercentage::length(6.0),
                    bottom: LengthPercentage::length(6.0),
                },
                ..Default::default()
            }
            .into(),
            disabled: false,
        }
    }

    /// Set the visual variant and return self.
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the visual variant.
    pub fn set_variant(&mut self, variant: ButtonVariant) {
        self.variant = variant;
    }

    /// Set the callback fired on a completed click and return self.
    pub fn with_on_pressed(mut self, on_pressed: impl Fn() -> Update + 'static) -> Self {
        self.on_pressed = Some(Rc::new(on_pressed));
        self
    }

    /// Set the callback fired when the cursor enters the button and return
    /// self.
    pub fn with_on_pointer_enter(mut self, on_pointer_enter: impl Fn() -> Update + 'static) -> Self {
        self.on_pointer_enter = Some(Rc::new(on_pointer_enter));
        self
    }

    /// Set the callback fired when the button gains keyboard focus and
    /// return self.
    pub fn with_on_focus(mut self, on_focus: impl Fn() -> Update + 'static) -> Self {
        self.on_focus = Some(Rc::new(on_focus));
        self
    }

    /// Disable or enable interaction and return self.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The current interaction state.
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Whether the button holds keyboard focus.
    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Set keyboard focus state. Gaining focus fires the focus callback.
    pub fn set_focused(&mut self, focused: bool) -> Update {
        if self.focused == focused {
            return Update::empty();
        }
        self.focused = focused;
        let mut update = Update::DRAW;
        if focused {
            if let Some(on_focus) = &self.on_focus {
                update |= on_focus();
            }
        }
        update
    }

    /// Animate the child widget's scale towards `scale` (1.0 is unscaled).
    pub fn set_emphasis(&mut self, scale: f32) -> Update {
        if *self.emphasis.target() == scale {
            return Update::empty();
        }
        self.emphasis.retarget(scale, Instant::now());
        Update::DRAW
    }

    /// The child scale the button is animating towards.
    pub fn emphasis_target(&self) -> f32 {
        *self.emphasis.target()
    }

    /// Replace the timing of the emphasis animation.
    pub fn set_emphasis_transition(&mut self, transition: Transition) {
        self.emphasis.set_transition(transition);
    }

    fn background(&self, theme: &dyn Theme) -> Option<Color> {
        let property = match (self.variant, self.state) {
            (ButtonVariant::Ghost, _) => return None,
            (ButtonVariant::Filled, ButtonState::Pressed) => ThemeProperty::ColorPressed,
            (ButtonVariant::Filled, ButtonState::Hovered) => ThemeProperty::ColorHovered,
            (ButtonVariant::Filled, _) => ThemeProperty::ColorIdle,
        };
        Some(
            theme
                .get_property(self.widget_id(), &property)
                .unwrap_or(Color::from_rgb8(15, 23, 42)),
        )
    }
}

impl Widget for Button {
    fn render(
        &mut self,
        graphics: &mut dyn Graphics,
        theme: &dyn Theme,
        layout_node: &LayoutNode,
        info: &mut FrameInfo,
    ) {
        if let Some(color) = self.background(theme) {
            let layout = &layout_node.layout;
            let shape = RoundedRect::new(
                layout.location.x as f64,
                layout.location.y as f64,
                (layout.location.x + layout.size.width) as f64,
                (layout.location.y + layout.size.height) as f64,
                Self::CORNER_RADIUS,
            );
            graphics.fill(
                Fill::NonZero,
                Affine::IDENTITY,
                &Brush::Solid(color),
                None,
                &shape_to_path(&shape),
            );
        }

        if let Some(child_node) = layout_node.children.first() {
            let scale = self.emphasis.sample(Instant::now());
            if (scale - 1.0).abs() < 1e-4 {
                self.child.render(graphics, theme, child_node, info);
            } else {
                // Compose the child in a scratch scene so it can be scaled
                // about the button center without the child knowing.
                let layout = &layout_node.layout;
                let center = Point::new(
                    (layout.location.x + layout.size.width / 2.0) as f64,
                    (layout.location.y + layout.size.height / 2.0) as f64,
                );
                let mut scene = Scene::new();
                let mut child_graphics = VelloGraphics::new(&mut scene);
                self.child.render(&mut child_graphics, theme, child_node, info);
                graphics.append(&scene, Some(Affine::scale_about(scale as f64, center)));
            }
        }
    }

    fn layout_style(&self) -> StyleNode {
        StyleNode {
            style: self.layout_style.get().clone(),
            children: vec![self.child.layout_style()],
        }
    }

    fn update(&mut self, layout: &LayoutNode, info: &mut FrameInfo) -> Update {
        let mut update = Update::empty();

        if let Some(child_node) = layout.children.first() {
            update |= self.child.update(child_node, info);
        }

        if !self.emphasis.is_settled(Instant::now()) {
            update |= Update::DRAW;
        }

        if self.disabled {
            if self.state != ButtonState::Idle {
                self.state = ButtonState::Idle;
                update |= Update::DRAW;
            }
            return update;
        }

        let old_state = self.state;

        let inside = info.cursor_pos.is_some_and(|cursor| {
            cursor.x as f32 >= layout.layout.location.x
                && cursor.x as f32 <= layout.layout.location.x + layout.layout.size.width
                && cursor.y as f32 >= layout.layout.location.y
                && cursor.y as f32 <= layout.layout.location.y + layout.layout.size.height
        });

        if inside {
            if self.state == ButtonState::Idle || self.state == ButtonState::Released {
                self.state = ButtonState::Hovered;
            }
            for (button, state) in &info.buttons {
                if *button != MouseButton::Left {
                    continue;
                }
                match state {
                    ElementState::Pressed => self.state = ButtonState::Pressed,
                    ElementState::Released if self.state == ButtonState::Pressed => {
                        self.state = ButtonState::Released;
                    }
                    ElementState::Released => (),
                }
            }
        } else {
            self.state = ButtonState::Idle;
        }

        if old_state == ButtonState::Idle && self.state != ButtonState::Idle {
            if let Some(on_pointer_enter) = &self.on_pointer_enter {
                update |= on_pointer_enter();
            }
        }
        if self.state == ButtonState::Released && old_state != ButtonState::Released {
            if let Some(on_pressed) = &self.on_pressed {
                update |= on_pressed();
            }
        }
        if self.state != old_state {
            update |= Update::DRAW;
        }

        update
    }

    fn widget_id(&self) -> WidgetId {
        WidgetId::new("tabflow-widgets", "Button")
    }
}

impl WidgetChildExt for Button {
    fn set_child(&mut self, child: impl Widget + 'static) {
        self.child = Box::new(child);
    }
}

impl WidgetLayoutExt for Button {
    fn set_layout_style(&mut self, layout_style: impl Into<MaybeSignal<LayoutStyle>>) {
        self.layout_style = layout_style.into();
    }
}
