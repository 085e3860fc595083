//! End-to-end tests driving [Tabs] through layout, update and render with a
//! recording graphics backend, the way an embedding host would.

use nalgebra::Vector2;
use std::time::Duration;
use tabflow_core::input::{ElementState, FocusChange, FrameInfo, MouseButton};
use tabflow_core::layout::{compute_layout, Dimension, LayoutNode, LayoutStyle};
use tabflow_core::update::Update;
use tabflow_core::vgi::Graphics;
use tabflow_core::widget::{Widget, WidgetLayoutExt};
use tabflow_theme::theme::LightTheme;
use tabflow_widgets::motion::{Easing, Transition};
use tabflow_widgets::pane::Pane;
use tabflow_widgets::tabs::{TabItem, Tabs};
use vello::kurbo::{Affine, BezPath, Rect, Shape, Stroke};
use vello::peniko::{Brush, Color, Fill, Mix};

const HOME: Color = Color::from_rgb8(200, 30, 30);
const ABOUT: Color = Color::from_rgb8(30, 200, 30);
const CONTACT: Color = Color::from_rgb8(30, 30, 200);
const DANGER: Color = Color::from_rgb8(200, 200, 30);
const LABEL: Color = Color::from_rgb8(100, 100, 100);
const PRIMARY: Color = Color::from_rgb8(15, 23, 42);

#[derive(Debug)]
enum Op {
    Fill { color: Option<Color>, bbox: Rect },
    Stroke { color: Option<Color>, bbox: Rect },
    PushLayer { alpha: f32, bbox: Rect },
    PopLayer,
    Append,
}

#[derive(Default)]
struct RecordingGraphics {
    ops: Vec<Op>,
}

fn brush_color(brush: &Brush) -> Option<Color> {
    match brush {
        Brush::Solid(color) => Some(*color),
        _ => None,
    }
}

impl Graphics for RecordingGraphics {
    fn fill(
        &mut self,
        _fill_rule: Fill,
        _transform: Affine,
        brush: &Brush,
        _brush_transform: Option<Affine>,
        shape: &BezPath,
    ) {
        self.ops.push(Op::Fill {
            color: brush_color(brush),
            bbox: shape.bounding_box(),
        });
    }

    fn stroke(
        &mut self,
        _style: &Stroke,
        _transform: Affine,
        brush: &Brush,
        _brush_transform: Option<Affine>,
        shape: &BezPath,
    ) {
        self.ops.push(Op::Stroke {
            color: brush_color(brush),
            bbox: shape.bounding_box(),
        });
    }

    fn push_layer(&mut self, _mix: Mix, alpha: f32, _transform: Affine, shape: &BezPath) {
        self.ops.push(Op::PushLayer {
            alpha,
            bbox: shape.bounding_box(),
        });
    }

    fn pop_layer(&mut self) {
        self.ops.push(Op::PopLayer);
    }

    fn append(&mut self, _other: &vello::Scene, _transform: Option<Affine>) {
        self.ops.push(Op::Append);
    }
}

fn sized_pane(color: Color, width: f32, height: f32) -> Pane {
    Pane::new().with_color(color).with_layout_style(LayoutStyle {
        size: Vector2::new(Dimension::length(width), Dimension::length(height)),
        ..Default::default()
    })
}

fn tab_items() -> Vec<TabItem> {
    [("home", HOME), ("about", ABOUT), ("contact", CONTACT), ("danger", DANGER)]
        .into_iter()
        .map(|(value, color)| {
            TabItem::new(
                value,
                sized_pane(LABEL, 60.0, 20.0),
                sized_pane(color, 300.0, 120.0),
            )
        })
        .collect()
}

fn instant_tabs(tabs: Tabs) -> Tabs {
    tabs.with_overlay_transition(Transition::instant())
        .with_panel_transition(Transition::instant())
        .with_emphasis_transition(Transition::instant())
}

fn layout_of(tabs: &Tabs, width: f32, height: f32) -> LayoutNode {
    compute_layout(&tabs.layout_style(), Vector2::new(width, height)).unwrap()
}

/// One host frame: update, recompute layout while the widget asks for it,
/// and clear transient events the way a host does between frames.
fn drive(tabs: &mut Tabs, info: &mut FrameInfo, width: f32, height: f32) -> LayoutNode {
    let mut layout = layout_of(tabs, width, height);
    for _ in 0..4 {
        let update = tabs.update(&layout, info);
        if !update.contains(Update::LAYOUT) {
            break;
        }
        layout = layout_of(tabs, width, height);
        info.reset();
    }
    info.reset();
    layout
}

fn render_ops(tabs: &mut Tabs, layout: &LayoutNode) -> Vec<Op> {
    let mut graphics = RecordingGraphics::default();
    let mut info = FrameInfo::default();
    tabs.render(&mut graphics, &LightTheme::new(), layout, &mut info);
    graphics.ops
}

fn colors_match(a: Color, b: Color) -> bool {
    a.components
        .iter()
        .zip(b.components.iter())
        .all(|(x, y)| (x - y).abs() < 1e-3)
}

fn rects_match(a: Rect, b: Rect) -> bool {
    (a.x0 - b.x0).abs() < 0.6
        && (a.y0 - b.y0).abs() < 0.6
        && (a.x1 - b.x1).abs() < 0.6
        && (a.y1 - b.y1).abs() < 0.6
}

fn has_fill(ops: &[Op], color: Color) -> bool {
    ops.iter().any(|op| {
        matches!(op, Op::Fill { color: Some(c), .. } if colors_match(*c, color))
    })
}

fn has_fill_at(ops: &[Op], color: Color, bbox: Rect) -> bool {
    ops.iter().any(|op| {
        matches!(op, Op::Fill { color: Some(c), bbox: b }
            if colors_match(*c, color) && rects_match(*b, bbox))
    })
}

/// The translucent hover highlight, identified by its sub-opaque alpha.
fn hover_fill(ops: &[Op]) -> Option<Rect> {
    ops.iter().find_map(|op| match op {
        Op::Fill {
            color: Some(c),
            bbox,
        } if c.components[3] > 0.01 && c.components[3] < 0.5 => Some(*bbox),
        _ => None,
    })
}

fn center(rect: Rect) -> Vector2<f64> {
    Vector2::new((rect.x0 + rect.x1) / 2.0, (rect.y0 + rect.y1) / 2.0)
}

fn click(info: &mut FrameInfo) {
    info.buttons.push((MouseButton::Left, ElementState::Pressed));
    info.buttons
        .push((MouseButton::Left, ElementState::Released));
}

fn expected_indicator(tabs: &Tabs, layout: &LayoutNode, index: usize) -> Rect {
    let strip = tabs.strip_rect(layout).unwrap();
    let tab = tabs.tab_rect(layout, index).unwrap();
    Rect::new(tab.x0, strip.y1 - 3.0, tab.x1, strip.y1)
}

#[test]
fn test_mounts_default_panel_with_indicator_and_no_hover() {
    let mut tabs = instant_tabs(Tabs::horizontal(tab_items()));
    let mut info = FrameInfo::default();
    let layout = drive(&mut tabs, &mut info, 640.0, 480.0);

    assert_eq!(tabs.selected(), 0);
    assert_eq!(tabs.hovered(), None);

    let ops = render_ops(&mut tabs, &layout);
    assert!(has_fill(&ops, HOME));
    assert!(!has_fill(&ops, ABOUT));
    assert!(!has_fill(&ops, CONTACT));
    assert!(hover_fill(&ops).is_none());
    assert!(has_fill_at(
        &ops,
        PRIMARY,
        expected_indicator(&tabs, &layout, 0)
    ));
}

#[test]
fn test_click_switches_panel_and_moves_indicator() {
    let mut tabs = instant_tabs(Tabs::horizontal(tab_items()).with_default_index(1));
    let mut info = FrameInfo::default();
    let mut layout = drive(&mut tabs, &mut info, 640.0, 480.0);

    info.cursor_pos = Some(center(tabs.tab_rect(&layout, 3).unwrap()));
    layout = drive(&mut tabs, &mut info, 640.0, 480.0);
    assert_eq!(tabs.hovered(), Some(3));
    assert_eq!(tabs.selected(), 1);

    click(&mut info);
    layout = drive(&mut tabs, &mut info, 640.0, 480.0);

    assert_eq!(tabs.selected(), 3);
    // Selecting must not disturb the transient hover state.
    assert_eq!(tabs.hovered(), Some(3));

    let ops = render_ops(&mut tabs, &layout);
    assert!(has_fill(&ops, DANGER));
    assert!(!has_fill(&ops, ABOUT));
    assert!(has_fill_at(
        &ops,
        PRIMARY,
        expected_indicator(&tabs, &layout, 3)
    ));
}

#[test]
fn test_repeated_activation_is_a_noop() {
    let mut tabs = instant_tabs(Tabs::horizontal(tab_items()).with_default_index(2));
    let mut info = FrameInfo::default();
    let mut layout = drive(&mut tabs, &mut info, 640.0, 480.0);

    info.cursor_pos = Some(center(tabs.tab_rect(&layout, 2).unwrap()));
    layout = drive(&mut tabs, &mut info, 640.0, 480.0);

    click(&mut info);
    let update = tabs.update(&layout, &mut info);
    info.reset();

    assert!(!update.contains(Update::LAYOUT));
    assert_eq!(tabs.selected(), 2);

    let ops = render_ops(&mut tabs, &layout);
    assert!(has_fill(&ops, CONTACT));
    assert!(has_fill_at(
        &ops,
        PRIMARY,
        expected_indicator(&tabs, &layout, 2)
    ));
}

#[test]
fn test_hover_highlight_follows_pointer_and_clears_on_strip_leave() {
    let mut tabs = instant_tabs(Tabs::horizontal(tab_items()));
    let mut info = FrameInfo::default();
    let mut layout = drive(&mut tabs, &mut info, 640.0, 480.0);

    info.cursor_pos = Some(center(tabs.tab_rect(&layout, 2).unwrap()));
    layout = drive(&mut tabs, &mut info, 640.0, 480.0);
    let ops = render_ops(&mut tabs, &layout);
    let highlight = hover_fill(&ops).expect("highlight under hovered tab");
    assert!(rects_match(highlight, tabs.tab_rect(&layout, 2).unwrap()));

    info.cursor_pos = Some(center(tabs.tab_rect(&layout, 0).unwrap()));
    layout = drive(&mut tabs, &mut info, 640.0, 480.0);
    let ops = render_ops(&mut tabs, &layout);
    let highlight = hover_fill(&ops).expect("highlight glides to new tab");
    assert!(rects_match(highlight, tabs.tab_rect(&layout, 0).unwrap()));

    // Into the content area: the highlight fades away entirely.
    info.cursor_pos = Some(center(tabs.content_rect(&layout).unwrap()));
    layout = drive(&mut tabs, &mut info, 640.0, 480.0);
    assert_eq!(tabs.hovered(), None);
    let ops = render_ops(&mut tabs, &layout);
    assert!(hover_fill(&ops).is_none());
}

#[test]
fn test_focus_traversal_drives_hover_highlight() {
    let mut tabs = instant_tabs(Tabs::horizontal(tab_items()));
    let mut info = FrameInfo::default();
    drive(&mut tabs, &mut info, 640.0, 480.0);

    // Tab into the strip: the first tab gains focus and lights up like a
    // hover, with the cursor nowhere near the strip.
    info.focus = Some(FocusChange::Next);
    let mut layout = drive(&mut tabs, &mut info, 640.0, 480.0);
    assert_eq!(tabs.focused_tab(), Some(0));
    assert_eq!(tabs.hovered(), Some(0));
    let ops = render_ops(&mut tabs, &layout);
    let highlight = hover_fill(&ops).expect("highlight under focused tab");
    assert!(rects_match(highlight, tabs.tab_rect(&layout, 0).unwrap()));

    info.focus = Some(FocusChange::Next);
    drive(&mut tabs, &mut info, 640.0, 480.0);
    assert_eq!(tabs.focused_tab(), Some(1));
    assert_eq!(tabs.hovered(), Some(1));

    // Window blur drops both the focus and the highlight.
    info.focus = Some(FocusChange::Lost);
    layout = drive(&mut tabs, &mut info, 640.0, 480.0);
    assert_eq!(tabs.focused_tab(), None);
    assert_eq!(tabs.hovered(), None);
    let ops = render_ops(&mut tabs, &layout);
    assert!(hover_fill(&ops).is_none());

    // Shift-tab enters from the back; tabbing past the last leaves again.
    info.focus = Some(FocusChange::Prev);
    drive(&mut tabs, &mut info, 640.0, 480.0);
    assert_eq!(tabs.focused_tab(), Some(3));
    assert_eq!(tabs.hovered(), Some(3));

    info.focus = Some(FocusChange::Next);
    drive(&mut tabs, &mut info, 640.0, 480.0);
    assert_eq!(tabs.focused_tab(), None);
    assert_eq!(tabs.hovered(), None);
}

#[test]
fn test_active_label_renders_scaled() {
    let mut tabs = instant_tabs(Tabs::horizontal(tab_items()).with_default_index(2));
    let mut info = FrameInfo::default();
    let mut layout = drive(&mut tabs, &mut info, 640.0, 480.0);

    // The active label is composed through a scaled sub-scene; the other
    // three labels render directly.
    let ops = render_ops(&mut tabs, &layout);
    assert_eq!(
        ops.iter().filter(|op| matches!(op, Op::Append)).count(),
        1
    );
    assert_eq!(
        ops.iter()
            .filter(|op| matches!(op, Op::Fill { color: Some(c), .. }
                if colors_match(*c, LABEL)))
            .count(),
        3
    );

    // The accent follows the selection.
    info.cursor_pos = Some(center(tabs.tab_rect(&layout, 0).unwrap()));
    drive(&mut tabs, &mut info, 640.0, 480.0);
    click(&mut info);
    layout = drive(&mut tabs, &mut info, 640.0, 480.0);
    assert_eq!(tabs.selected(), 0);

    let ops = render_ops(&mut tabs, &layout);
    assert_eq!(
        ops.iter().filter(|op| matches!(op, Op::Append)).count(),
        1
    );
}

#[test]
fn test_resize_repositions_indicator() {
    let mut tabs = instant_tabs(Tabs::horizontal(tab_items()).with_default_index(3));
    let mut info = FrameInfo::default();
    let layout = drive(&mut tabs, &mut info, 500.0, 400.0);
    let before = expected_indicator(&tabs, &layout, 3);

    let layout = drive(&mut tabs, &mut info, 800.0, 400.0);
    let after = expected_indicator(&tabs, &layout, 3);
    assert!(after.x1 > before.x1);

    let ops = render_ops(&mut tabs, &layout);
    assert!(has_fill_at(&ops, PRIMARY, after));
}

#[test]
fn test_measurements_tile_the_strip() {
    let mut tabs = instant_tabs(Tabs::horizontal(tab_items()));
    let mut info = FrameInfo::default();
    let layout = drive(&mut tabs, &mut info, 640.0, 480.0);

    let strip = tabs.strip_rect(&layout).unwrap();
    let mut previous_right = f64::MIN;
    for index in 0..4 {
        let tab = tabs.tab_rect(&layout, index).unwrap();
        assert!(tab.x0 >= strip.x0 && tab.x1 <= strip.x1);
        assert!(tab.y0 >= strip.y0 && tab.y1 <= strip.y1);
        assert!(tab.x0 >= previous_right);
        previous_right = tab.x1;
    }
    assert!(tabs.tab_rect(&layout, 4).is_none());

    // Recomputing an unchanged tree yields identical measurements.
    let again = layout_of(&tabs, 640.0, 480.0);
    assert_eq!(layout, again);
}

#[test]
fn test_panel_swap_runs_exit_before_enter() {
    let mut tabs = Tabs::horizontal(tab_items())
        .with_overlay_transition(Transition::instant())
        .with_panel_transition(Transition::new(Duration::from_millis(30), Easing::EaseInOut));
    let mut info = FrameInfo::default();
    let mut layout = drive(&mut tabs, &mut info, 640.0, 480.0);

    info.cursor_pos = Some(center(tabs.tab_rect(&layout, 2).unwrap()));
    layout = drive(&mut tabs, &mut info, 640.0, 480.0);
    click(&mut info);
    layout = drive(&mut tabs, &mut info, 640.0, 480.0);

    // Mid-exit: the selection already changed but the outgoing panel is the
    // only one mounted.
    assert_eq!(tabs.selected(), 2);
    let ops = render_ops(&mut tabs, &layout);
    assert!(has_fill(&ops, HOME));
    assert!(!has_fill(&ops, CONTACT));

    // After both phases the incoming panel is the only one mounted.
    std::thread::sleep(Duration::from_millis(40));
    drive(&mut tabs, &mut info, 640.0, 480.0);
    std::thread::sleep(Duration::from_millis(40));
    layout = drive(&mut tabs, &mut info, 640.0, 480.0);
    let ops = render_ops(&mut tabs, &layout);
    assert!(has_fill(&ops, CONTACT));
    assert!(!has_fill(&ops, HOME));
}

#[test]
fn test_vertical_scroll_shifts_tabs_and_indicator() {
    let items: Vec<TabItem> = (0..6)
        .map(|i| {
            TabItem::new(
                format!("tab-{i}"),
                sized_pane(LABEL, 60.0, 20.0),
                sized_pane(HOME, 200.0, 100.0),
            )
        })
        .collect();
    let mut tabs = instant_tabs(Tabs::vertical(items));
    let mut info = FrameInfo::default();
    let mut layout = drive(&mut tabs, &mut info, 640.0, 200.0);

    let strip = tabs.strip_rect(&layout).unwrap();
    let before = tabs.tab_rect(&layout, 0).unwrap();

    info.cursor_pos = Some(center(strip));
    info.scroll_delta = Some(Vector2::new(0.0, -40.0));
    layout = drive(&mut tabs, &mut info, 640.0, 200.0);

    assert_eq!(tabs.scroll_offset(), 40.0);
    assert_eq!(tabs.selected(), 0);

    let after = tabs.tab_rect(&layout, 0).unwrap();
    assert!(rects_match(
        after,
        Rect::new(before.x0, before.y0 - 40.0, before.x1, before.y1 - 40.0)
    ));

    // The indicator rides the trailing edge, tracking the scrolled tab.
    let expected = Rect::new(strip.x1 - 3.0, after.y0, strip.x1, after.y1);
    let ops = render_ops(&mut tabs, &layout);
    assert!(has_fill_at(&ops, PRIMARY, expected));
}

#[test]
fn test_vertical_scroll_clamps_to_overflow() {
    let items: Vec<TabItem> = (0..6)
        .map(|i| {
            TabItem::new(
                format!("tab-{i}"),
                sized_pane(LABEL, 60.0, 20.0),
                sized_pane(HOME, 200.0, 100.0),
            )
        })
        .collect();
    let mut tabs = instant_tabs(Tabs::vertical(items));
    let mut info = FrameInfo::default();
    let layout = drive(&mut tabs, &mut info, 640.0, 200.0);
    let strip = tabs.strip_rect(&layout).unwrap();

    info.cursor_pos = Some(center(strip));
    info.scroll_delta = Some(Vector2::new(0.0, -10_000.0));
    drive(&mut tabs, &mut info, 640.0, 200.0);
    let max = tabs.scroll_offset();
    assert!(max > 0.0);

    // Scrolling back beyond the top pins the offset at zero.
    info.scroll_delta = Some(Vector2::new(0.0, 10_000.0));
    drive(&mut tabs, &mut info, 640.0, 200.0);
    assert_eq!(tabs.scroll_offset(), 0.0);
}
