use std::time::{Duration, Instant};

use nalgebra::Vector2;
use tabflow_core::input::{FocusChange, FrameInfo};
use tabflow_core::layout::{
    AlignItems, Dimension, FlexDirection, JustifyContent, LayoutNode, LayoutStyle,
    LengthPercentage, Rect as StyleRect, StyleNode,
};
use tabflow_core::signal::{MaybeSignal, Signal, StateSignal};
use tabflow_core::update::Update;
use tabflow_core::vgi::{shape_to_path, Graphics};
use tabflow_core::widget::{BoxedWidget, Widget, WidgetLayoutExt};
use tabflow_theme::config::ThemeConfig;
use tabflow_theme::id::WidgetId;
use tabflow_theme::properties::ThemeProperty;
use tabflow_theme::theme::Theme;
use vello::kurbo::{Affine, Line, Point, Rect, RoundedRect, Stroke};
use vello::peniko::{Brush, Color, Fill, Mix};

use crate::button::{Button, ButtonVariant};
use crate::motion::{Animated, Easing, Transition};

/// The direction a [Tabs] widget lays out its tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Tab strip on top, panels below. The selection indicator sits on the
    /// strip's bottom edge and panels slide vertically.
    Horizontal,
    /// Tab strip on the left, panels to the right. The selection indicator
    /// sits on the strip's trailing edge and panels slide horizontally.
    Vertical,
}

/// One tab: a stable value, a label widget shown in the strip and a content
/// widget shown in the panel area while the tab is selected.
pub struct TabItem {
    value: String,
    label: BoxedWidget,
    content: BoxedWidget,
}

impl TabItem {
    /// Create a tab descriptor.
    pub fn new(
        value: impl Into<String>,
        label: impl Widget + 'static,
        content: impl Widget + 'static,
    ) -> Self {
        Self {
            value: value.into(),
            label: Box::new(label),
            content: Box::new(content),
        }
    }
}

struct TabEntry {
    value: String,
    button: Button,
    content: BoxedWidget,
}

struct HoverOverlay {
    rect: Animated<Rect>,
    opacity: Animated<f32>,
    exiting: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelPhase {
    /// The previous panel fades and slides out. It stays mounted until the
    /// phase completes.
    Exit,
    /// The next panel fades and slides in.
    Enter,
}

#[derive(Debug, Clone, Copy)]
struct PanelTransition {
    outgoing: usize,
    incoming: usize,
    phase: PanelPhase,
    started: Instant,
}

/// An animated tab switcher.
///
/// Composes one [Button] per tab into a strip, tracks which tab is selected
/// (persistent) and which is hovered (transient), and animates three pieces
/// of chrome from measured tab geometry: a hover highlight that fades and
/// glides between tabs, a selection indicator pinned to the strip edge, and
/// a content area that swaps panels with an exit-then-enter fade and slide.
///
/// Exactly one panel is mounted at any time. During a swap the outgoing
/// panel stays mounted until its exit finishes, then the incoming panel is
/// mounted and enters; selecting another tab mid-swap redirects the
/// transition to the latest selection instead of queueing.
pub struct Tabs {
    layout_style: MaybeSignal<LayoutStyle>,
    orientation: Orientation,
    entries: Vec<TabEntry>,
    selected: StateSignal<usize>,
    hovered: StateSignal<Option<usize>>,
    focused_tab: Option<usize>,
    pointer_in_strip: bool,
    shown_panel: usize,
    panel_transition: Option<PanelTransition>,
    hover_overlay: Option<HoverOverlay>,
    indicator: Option<Animated<Rect>>,
    scroll_offset: f32,
    overlay_transition: Transition,
    panel_motion: Transition,
}

impl Tabs {
    /// Timing of the hover highlight and selection indicator.
    pub const OVERLAY_TRANSITION: Transition =
        Transition::new(Duration::from_millis(150), Easing::EaseOut);
    /// Timing of each panel swap phase (exit and enter run this long each).
    pub const PANEL_TRANSITION: Transition =
        Transition::new(Duration::from_millis(300), Easing::EaseInOut);

    const INDICATOR_THICKNESS: f64 = 3.0;
    const ACTIVE_LABEL_SCALE: f32 = 1.1;
    const PANEL_SLIDE: f64 = 10.0;
    const HIGHLIGHT_RADIUS: f64 = 6.0;
    const VERTICAL_STRIP_WIDTH: f32 = 192.0;
    const VERTICAL_STRIP_PADDING: f32 = 16.0;

    /// Create a tab switcher with the strip on top.
    pub fn horizontal(items: Vec<TabItem>) -> Self {
        Self::new(Orientation::Horizontal, items)
    }

    /// Create a tab switcher with the strip on the left.
    pub fn vertical(items: Vec<TabItem>) -> Self {
        Self::new(Orientation::Vertical, items)
    }

    /// Create a tab switcher with the given orientation. The first tab is
    /// selected initially.
    pub fn new(orientation: Orientation, items: Vec<TabItem>) -> Self {
        debug_assert!(!items.is_empty(), "a tab switcher needs at least one tab");

        let selected = StateSignal::new(0usize);
        let hovered: StateSignal<Option<usize>> = StateSignal::new(None);

        let entries = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let select = selected.clone();
                let hover = hovered.clone();
                let hover_focus = hovered.clone();
                let button = Button::new(item.label)
                    .with_variant(ButtonVariant::Ghost)
                    .with_on_pressed(move || {
                        select.set(index);
                        Update::DRAW
                    })
                    .with_on_pointer_enter(move || {
                        hover.set(Some(index));
                        Update::DRAW
                    })
                    .with_on_focus(move || {
                        hover_focus.set(Some(index));
                        Update::DRAW
                    })
                    .with_layout_style(Self::button_style(orientation));
                TabEntry {
                    value: item.value,
                    button,
                    content: item.content,
                }
            })
            .collect();

        Self {
            layout_style: Self::root_style(orientation).into(),
            orientation,
            entries,
            selected,
            hovered,
            focused_tab: None,
            pointer_in_strip: false,
            shown_panel: 0,
            panel_transition: None,
            hover_overlay: None,
            indicator: None,
            scroll_offset: 0.0,
            overlay_transition: Self::OVERLAY_TRANSITION,
            panel_motion: Self::PANEL_TRANSITION,
        }
    }

    /// Select the given tab initially, without animating, and return self.
    pub fn with_default_index(self, index: usize) -> Self {
        debug_assert!(index < self.entries.len(), "default index out of range");
        self.selected.set(index);
        Self {
            shown_panel: index,
            ..self
        }
    }

    /// Override the hover/indicator transition and return self.
    pub fn with_overlay_transition(mut self, transition: Transition) -> Self {
        self.overlay_transition = transition;
        self
    }

    /// Override the panel swap transition and return self.
    pub fn with_panel_transition(mut self, transition: Transition) -> Self {
        self.panel_motion = transition;
        self
    }

    /// Override the active-label emphasis transition of every tab button and
    /// return self.
    pub fn with_emphasis_transition(mut self, transition: Transition) -> Self {
        for entry in &mut self.entries {
            entry.button.set_emphasis_transition(transition);
        }
        self
    }

    /// Apply the transition duration overrides of a theme configuration and
    /// return self. Easing curves keep their defaults.
    pub fn with_config(mut self, config: &ThemeConfig) -> Self {
        if let Some(ms) = config.overlay_transition_ms {
            self.overlay_transition.duration = Duration::from_millis(ms);
        }
        if let Some(ms) = config.panel_transition_ms {
            self.panel_motion.duration = Duration::from_millis(ms);
        }
        self
    }

    /// The index of the selected tab.
    pub fn selected(&self) -> usize {
        *self.selected.get()
    }

    /// The index of the hovered tab, if the cursor is over the strip.
    pub fn hovered(&self) -> Option<usize> {
        *self.hovered.get()
    }

    /// The index of the tab holding keyboard focus, if any.
    pub fn focused_tab(&self) -> Option<usize> {
        self.focused_tab
    }

    /// The signal holding the selected index, for external observation or
    /// programmatic selection.
    pub fn selected_signal(&self) -> StateSignal<usize> {
        self.selected.clone()
    }

    /// The stable value of the tab at `index`.
    pub fn tab_value(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|entry| entry.value.as_str())
    }

    /// The current scroll offset of the strip, in pixels. Always zero for
    /// horizontal tabs.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// The on-screen rectangle of the tab strip.
    pub fn strip_rect(&self, layout: &LayoutNode) -> Option<Rect> {
        layout.children.first().map(node_rect)
    }

    /// The on-screen rectangle of the content area.
    pub fn content_rect(&self, layout: &LayoutNode) -> Option<Rect> {
        layout.children.get(1).map(node_rect)
    }

    /// The on-screen rectangle of the tab button at `index`, adjusted for
    /// strip scrolling.
    pub fn tab_rect(&self, layout: &LayoutNode, index: usize) -> Option<Rect> {
        let strip = layout.children.first()?;
        let rect = node_rect(strip.children.get(index)?);
        Some(match self.orientation {
            Orientation::Horizontal => rect,
            Orientation::Vertical => Rect::new(
                rect.x0,
                rect.y0 - self.scroll_offset as f64,
                rect.x1,
                rect.y1 - self.scroll_offset as f64,
            ),
        })
    }

    fn root_style(orientation: Orientation) -> LayoutStyle {
        match orientation {
            Orientation::Horizontal => LayoutStyle {
                flex_direction: FlexDirection::Column,
                size: Vector2::new(Dimension::percent(1.0), Dimension::auto()),
                ..Default::default()
            },
            Orientation::Vertical => LayoutStyle {
                flex_direction: FlexDirection::Row,
                size: Vector2::new(Dimension::percent(1.0), Dimension::percent(1.0)),
                ..Default::default()
            },
        }
    }

    fn button_style(orientation: Orientation) -> LayoutStyle {
        match orientation {
            Orientation::Horizontal => LayoutStyle {
                flex_grow: 1.0,
                padding: uniform_padding(6.0),
                justify_content: Some(JustifyContent::Center),
                align_items: Some(AlignItems::Center),
                ..Default::default()
            },
            Orientation::Vertical => LayoutStyle {
                size: Vector2::new(Dimension::percent(1.0), Dimension::length(40.0)),
                flex_shrink: 0.0,
                padding: uniform_padding(6.0),
                justify_content: Some(JustifyContent::Start),
                align_items: Some(AlignItems::Center),
                ..Default::default()
            },
        }
    }

    fn strip_style(&self) -> StyleNode {
        let style = match self.orientation {
            Orientation::Horizontal => LayoutStyle {
                flex_direction: FlexDirection::Row,
                size: Vector2::new(Dimension::percent(1.0), Dimension::auto()),
                padding: uniform_padding(4.0),
                ..Default::default()
            },
            Orientation::Vertical => LayoutStyle {
                flex_direction: FlexDirection::Column,
                size: Vector2::new(
                    Dimension::length(Self::VERTICAL_STRIP_WIDTH),
                    Dimension::percent(1.0),
                ),
                flex_shrink: 0.0,
                padding: uniform_padding(Self::VERTICAL_STRIP_PADDING),
                gap: Vector2::new(
                    LengthPercentage::length(0.0),
                    LengthPercentage::length(8.0),
                ),
                ..Default::default()
            },
        };
        StyleNode {
            style,
            children: self
                .entries
                .iter()
                .map(|entry| entry.button.layout_style())
                .collect(),
        }
    }

    fn content_style(&self) -> StyleNode {
        StyleNode {
            style: LayoutStyle {
                flex_grow: 1.0,
                padding: uniform_padding(24.0),
                ..Default::default()
            },
            children: vec![self.entries[self.shown_panel].content.layout_style()],
        }
    }

    fn indicator_target(&self, strip: Rect, tab: Rect) -> Rect {
        match self.orientation {
            Orientation::Horizontal => Rect::new(
                tab.x0,
                strip.y1 - Self::INDICATOR_THICKNESS,
                tab.x1,
                strip.y1,
            ),
            Orientation::Vertical => Rect::new(
                strip.x1 - Self::INDICATOR_THICKNESS,
                tab.y0,
                strip.x1,
                tab.y1,
            ),
        }
    }

    fn max_scroll(&self, layout: &LayoutNode) -> f32 {
        let Some(strip_node) = layout.children.first() else {
            return 0.0;
        };
        let strip = node_rect(strip_node);
        let Some(last) = strip_node.children.last() else {
            return 0.0;
        };
        let content_bottom = node_rect(last).y1 + Self::VERTICAL_STRIP_PADDING as f64;
        (content_bottom - strip.y1).max(0.0) as f32
    }

    fn handle_scroll(&mut self, layout: &LayoutNode, info: &FrameInfo) -> (Update, bool) {
        if self.orientation != Orientation::Vertical {
            return (Update::empty(), false);
        }
        let (Some(strip), Some(delta), Some(cursor)) =
            (self.strip_rect(layout), info.scroll_delta, info.cursor_pos)
        else {
            return (Update::empty(), false);
        };
        if !strip.contains(Point::new(cursor.x, cursor.y)) {
            return (Update::empty(), false);
        }

        let next = (self.scroll_offset - delta.y as f32).clamp(0.0, self.max_scroll(layout));
        if next == self.scroll_offset {
            return (Update::empty(), false);
        }
        self.scroll_offset = next;
        (Update::DRAW, true)
    }

    /// Delegate input to the tab buttons, with the cursor translated into
    /// the strip's unscrolled coordinate space and suppressed entirely while
    /// it is outside the strip.
    fn update_buttons(&mut self, layout: &LayoutNode, info: &FrameInfo) -> Update {
        let mut update = Update::empty();
        let Some(strip_node) = layout.children.first() else {
            return update;
        };
        let strip = node_rect(strip_node);

        let mut strip_info = info.clone();
        strip_info.cursor_pos = info.cursor_pos.and_then(|cursor| {
            if !strip.contains(Point::new(cursor.x, cursor.y)) {
                return None;
            }
            Some(match self.orientation {
                Orientation::Horizontal => cursor,
                Orientation::Vertical => {
                    Vector2::new(cursor.x, cursor.y + self.scroll_offset as f64)
                }
            })
        });

        for (index, entry) in self.entries.iter_mut().enumerate() {
            if let Some(node) = strip_node.children.get(index) {
                update |= entry.button.update(node, &mut strip_info);
            }
        }
        update
    }

    /// Move keyboard focus through the tab buttons. Focusing a tab highlights
    /// it like a hover; traversal past either end, or losing focus, leaves
    /// the strip and clears the highlight.
    fn handle_focus(&mut self, info: &FrameInfo) -> Update {
        let Some(change) = info.focus else {
            return Update::empty();
        };
        let count = self.entries.len();
        let next = match change {
            FocusChange::Lost => None,
            FocusChange::Next => match self.focused_tab {
                None => Some(0),
                Some(index) if index + 1 < count => Some(index + 1),
                Some(_) => None,
            },
            FocusChange::Prev => match self.focused_tab {
                None => Some(count.saturating_sub(1)),
                Some(0) => None,
                Some(index) => Some(index - 1),
            },
        };
        if next == self.focused_tab {
            return Update::empty();
        }

        let mut update = Update::DRAW;
        self.focused_tab = next;
        for (index, entry) in self.entries.iter_mut().enumerate() {
            update |= entry.button.set_focused(next == Some(index));
        }
        if next.is_none() && self.hovered().is_some() {
            self.hovered.set(None);
        }
        update
    }

    fn advance_panel(&mut self, selected: usize, now: Instant) -> Update {
        let mut update = Update::empty();

        match &mut self.panel_transition {
            None => {
                if selected != self.shown_panel {
                    log::debug!(
                        "tabs: panel switch {:?} -> {:?}",
                        self.entries[self.shown_panel].value,
                        self.entries[selected].value,
                    );
                    self.panel_transition = Some(PanelTransition {
                        outgoing: self.shown_panel,
                        incoming: selected,
                        phase: PanelPhase::Exit,
                        started: now,
                    });
                    update |= Update::DRAW;
                }
            }
            Some(transition) => match transition.phase {
                // Mid-exit the destination simply changes; the exit itself
                // keeps its progress.
                PanelPhase::Exit => transition.incoming = selected,
                PanelPhase::Enter => {
                    if transition.incoming != selected {
                        *transition = PanelTransition {
                            outgoing: transition.incoming,
                            incoming: selected,
                            phase: PanelPhase::Exit,
                            started: now,
                        };
                        update |= Update::DRAW;
                    }
                }
            },
        }

        // Advance completed phases. A zero-duration transition passes through
        // both phases and settles within a single update.
        while let Some(transition) = self.panel_transition {
            if now.saturating_duration_since(transition.started) < self.panel_motion.duration {
                break;
            }
            match transition.phase {
                PanelPhase::Exit => {
                    self.shown_panel = transition.incoming;
                    self.panel_transition = Some(PanelTransition {
                        phase: PanelPhase::Enter,
                        started: transition.started + self.panel_motion.duration,
                        ..transition
                    });
                    // The mounted panel changed, so the layout tree did too.
                    update |= Update::FORCE;
                }
                PanelPhase::Enter => {
                    self.panel_transition = None;
                    update |= Update::DRAW;
                }
            }
        }

        update
    }

    fn update_overlays(&mut self, layout: &LayoutNode, now: Instant, scrolled: bool) -> Update {
        let mut update = Update::empty();
        let strip = self.strip_rect(layout);

        let indicator_target = strip.and_then(|strip| {
            self.tab_rect(layout, self.selected())
                .map(|tab| self.indicator_target(strip, tab))
        });
        match (&mut self.indicator, indicator_target) {
            (None, Some(rect)) => {
                // First placement is not animated.
                self.indicator = Some(Animated::new(rect, self.overlay_transition));
                update |= Update::DRAW;
            }
            (Some(anim), Some(rect)) => {
                if *anim.target() != rect {
                    if scrolled {
                        // Scrolling moves the indicator rigidly with its tab.
                        anim.jump(rect);
                    } else {
                        anim.retarget(rect, now);
                    }
                    update |= Update::DRAW;
                }
            }
            (Some(_), None) => {
                self.indicator = None;
                update |= Update::DRAW;
            }
            (None, None) => (),
        }

        let hover_target = self
            .hovered()
            .and_then(|index| self.tab_rect(layout, index));
        match (&mut self.hover_overlay, hover_target) {
            (None, Some(rect)) => {
                let mut opacity = Animated::new(0.0f32, self.overlay_transition);
                opacity.retarget(1.0, now);
                self.hover_overlay = Some(HoverOverlay {
                    rect: Animated::new(rect, self.overlay_transition),
                    opacity,
                    exiting: false,
                });
                update |= Update::DRAW;
            }
            (Some(overlay), Some(rect)) => {
                if overlay.exiting {
                    overlay.exiting = false;
                    overlay.opacity.retarget(1.0, now);
                    update |= Update::DRAW;
                }
                if *overlay.rect.target() != rect {
                    if scrolled {
                        overlay.rect.jump(rect);
                    } else {
                        overlay.rect.retarget(rect, now);
                    }
                    update |= Update::DRAW;
                }
            }
            (Some(overlay), None) => {
                if !overlay.exiting {
                    overlay.exiting = true;
                    overlay.opacity.retarget(0.0, now);
                    update |= Update::DRAW;
                }
                if overlay.opacity.is_settled(now) {
                    self.hover_overlay = None;
                }
            }
            (None, None) => (),
        }

        update
    }

    fn is_animating(&self, now: Instant) -> bool {
        self.panel_transition.is_some()
            || self
                .indicator
                .as_ref()
                .is_some_and(|anim| !anim.is_settled(now))
            || self.hover_overlay.as_ref().is_some_and(|overlay| {
                overlay.exiting
                    || !overlay.rect.is_settled(now)
                    || !overlay.opacity.is_settled(now)
            })
    }

    /// Panel opacity and slide offset for the current transition phase.
    fn panel_pose(&self, now: Instant) -> (f32, f64) {
        let Some(transition) = &self.panel_transition else {
            return (1.0, 0.0);
        };
        let progress = if self.panel_motion.duration.is_zero() {
            1.0
        } else {
            (now.saturating_duration_since(transition.started).as_secs_f32()
                / self.panel_motion.duration.as_secs_f32())
            .clamp(0.0, 1.0)
        };
        let eased = self.panel_motion.easing.apply(progress) as f64;
        match transition.phase {
            PanelPhase::Exit => (1.0 - eased as f32, -Self::PANEL_SLIDE * eased),
            PanelPhase::Enter => (eased as f32, Self::PANEL_SLIDE * (1.0 - eased)),
        }
    }

    fn theme_color(&self, theme: &dyn Theme, property: ThemeProperty, fallback: Color) -> Color {
        theme
            .get_property(self.widget_id(), &property)
            .unwrap_or(fallback)
    }

    fn render_strip(
        &mut self,
        graphics: &mut dyn Graphics,
        theme: &dyn Theme,
        layout_node: &LayoutNode,
        info: &mut FrameInfo,
        now: Instant,
    ) {
        let Some(strip_node) = layout_node.children.first() else {
            return;
        };
        let strip = node_rect(strip_node);
        let strip_path = shape_to_path(&strip);

        let background =
            self.theme_color(theme, ThemeProperty::TabBarBackground, Color::WHITE);
        graphics.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            &Brush::Solid(background),
            None,
            &strip_path,
        );

        // Scrolled tab buttons and the overlays are clipped to the strip.
        graphics.push_layer(Mix::Normal, 1.0, Affine::IDENTITY, &strip_path);

        if let Some(overlay) = &self.hover_overlay {
            let base = self.theme_color(
                theme,
                ThemeProperty::HoverHighlight,
                Color::from_rgb8(15, 23, 42).with_alpha(0.1),
            );
            let fade = overlay.opacity.sample(now).clamp(0.0, 1.0);
            let color = base.with_alpha(base.components[3] * fade);
            let shape = RoundedRect::from_rect(overlay.rect.sample(now), Self::HIGHLIGHT_RADIUS);
            graphics.fill(
                Fill::NonZero,
                Affine::IDENTITY,
                &Brush::Solid(color),
                None,
                &shape_to_path(&shape),
            );
        }

        for (index, entry) in self.entries.iter_mut().enumerate() {
            if let Some(node) = strip_node.children.get(index) {
                let node = match self.orientation {
                    Orientation::Horizontal => node.clone(),
                    Orientation::Vertical => shift_layout(node, 0.0, -self.scroll_offset),
                };
                entry.button.render(graphics, theme, &node, info);
            }
        }

        if let Some(indicator) = &self.indicator {
            let color = self.theme_color(
                theme,
                ThemeProperty::SelectionIndicator,
                Color::from_rgb8(15, 23, 42),
            );
            graphics.fill(
                Fill::NonZero,
                Affine::IDENTITY,
                &Brush::Solid(color),
                None,
                &shape_to_path(&indicator.sample(now)),
            );
        }

        graphics.pop_layer();

        let border = self.theme_color(
            theme,
            ThemeProperty::Border,
            Color::from_rgb8(226, 232, 240),
        );
        let edge = match self.orientation {
            Orientation::Horizontal => Line::new((strip.x0, strip.y1), (strip.x1, strip.y1)),
            Orientation::Vertical => Line::new((strip.x1, strip.y0), (strip.x1, strip.y1)),
        };
        graphics.stroke(
            &Stroke::new(1.0),
            Affine::IDENTITY,
            &Brush::Solid(border),
            None,
            &shape_to_path(&edge),
        );
    }

    fn render_content(
        &mut self,
        graphics: &mut dyn Graphics,
        theme: &dyn Theme,
        layout_node: &LayoutNode,
        info: &mut FrameInfo,
        now: Instant,
    ) {
        let Some(content_node) = layout_node.children.get(1) else {
            return;
        };
        let content = node_rect(content_node);
        let content_path = shape_to_path(&content);

        let background =
            self.theme_color(theme, ThemeProperty::ContentBackground, Color::WHITE);
        graphics.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            &Brush::Solid(background),
            None,
            &content_path,
        );

        let (opacity, offset) = self.panel_pose(now);
        let slide = match self.orientation {
            Orientation::Horizontal => (0.0f32, offset as f32),
            Orientation::Vertical => (offset as f32, 0.0f32),
        };

        graphics.push_layer(Mix::Normal, opacity, Affine::IDENTITY, &content_path);
        if let Some(panel_node) = content_node.children.first() {
            let panel_node = shift_layout(panel_node, slide.0, slide.1);
            let shown = self.shown_panel;
            self.entries[shown]
                .content
                .render(graphics, theme, &panel_node, info);
        }
        graphics.pop_layer();
    }
}

impl Widget for Tabs {
    fn render(
        &mut self,
        graphics: &mut dyn Graphics,
        theme: &dyn Theme,
        layout_node: &LayoutNode,
        info: &mut FrameInfo,
    ) {
        let now = Instant::now();
        self.render_strip(graphics, theme, layout_node, info, now);
        self.render_content(graphics, theme, layout_node, info, now);
    }

    fn layout_style(&self) -> StyleNode {
        StyleNode {
            style: self.layout_style.get().clone(),
            children: vec![self.strip_style(), self.content_style()],
        }
    }

    fn update(&mut self, layout: &LayoutNode, info: &mut FrameInfo) -> Update {
        let now = Instant::now();
        let mut update = Update::empty();

        let (scroll_update, scrolled) = self.handle_scroll(layout, info);
        update |= scroll_update;

        update |= self.update_buttons(layout, info);
        update |= self.handle_focus(info);

        // The pointer leaving the strip clears the transient hover state.
        // Edge-triggered, so a focus-driven highlight survives a cursor that
        // was already parked outside the strip.
        let in_strip = match (self.strip_rect(layout), info.cursor_pos) {
            (Some(strip), Some(cursor)) => strip.contains(Point::new(cursor.x, cursor.y)),
            _ => false,
        };
        if self.pointer_in_strip && !in_strip && self.hovered().is_some() {
            self.hovered.set(None);
            update |= Update::DRAW;
        }
        self.pointer_in_strip = in_strip;

        let selected = self.selected();
        debug_assert!(selected < self.entries.len(), "selected index out of range");
        let selected = selected.min(self.entries.len() - 1);

        for (index, entry) in self.entries.iter_mut().enumerate() {
            let active = index == selected;
            entry.button.set_variant(if active {
                ButtonVariant::Filled
            } else {
                ButtonVariant::Ghost
            });
            update |= entry.button.set_emphasis(if active {
                Self::ACTIVE_LABEL_SCALE
            } else {
                1.0
            });
        }

        update |= self.advance_panel(selected, now);
        update |= self.update_overlays(layout, now, scrolled);

        let shown = self.shown_panel;
        if let Some(panel_node) = layout
            .children
            .get(1)
            .and_then(|content| content.children.first())
        {
            update |= self.entries[shown].content.update(panel_node, info);
        }

        if self.is_animating(now) {
            update |= Update::DRAW;
        }

        update
    }

    fn widget_id(&self) -> WidgetId {
        WidgetId::new("tabflow-widgets", "Tabs")
    }
}

impl WidgetLayoutExt for Tabs {
    fn set_layout_style(&mut self, layout_style: impl Into<MaybeSignal<LayoutStyle>>) {
        self.layout_style = layout_style.into();
    }
}

fn node_rect(node: &LayoutNode) -> Rect {
    Rect::new(
        node.layout.location.x as f64,
        node.layout.location.y as f64,
        (node.layout.location.x + node.layout.size.width) as f64,
        (node.layout.location.y + node.layout.size.height) as f64,
    )
}

/// Clone a layout subtree with every location shifted by the given offset.
/// Locations are absolute, so the shift applies recursively.
fn shift_layout(node: &LayoutNode, dx: f32, dy: f32) -> LayoutNode {
    LayoutNode {
        layout: tabflow_core::layout::Layout {
            location: tabflow_core::layout::Point {
                x: node.layout.location.x + dx,
                y: node.layout.location.y + dy,
            },
            size: node.layout.size,
        },
        children: node
            .children
            .iter()
            .map(|child| shift_layout(child, dx, dy))
            .collect(),
    }
}

fn uniform_padding(value: f32) -> StyleRect<LengthPercentage> {
    StyleRect {
        left: LengthPercentage::length(value),
        right: LengthPercentage::length(value),
        top: LengthPercentage::length(value),
        bottom: LengthPercentage::length(value),
    }
}
