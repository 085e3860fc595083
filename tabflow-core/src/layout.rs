//! Layout computation for widget trees.
//!
//! Widgets declare a [StyleNode] tree; the host hands it to [compute_layout]
//! together with the available space and gets back a [LayoutNode] tree with
//! absolute pixel positions. The computation is a pure function of the style
//! tree and the available space: recomputing without an underlying change
//! yields identical rectangles, which is what keeps overlay geometry free of
//! drift. Flexbox solving is delegated to [taffy].

use nalgebra::Vector2;
use taffy::{AvailableSpace, TaffyTree};
use thiserror::Error;

pub use taffy::{
    AlignItems, Dimension, FlexDirection, JustifyContent, LengthPercentage, LengthPercentageAuto,
    Point, Rect, Size,
};

/// The layout style of a single widget node.
///
/// A trimmed-down flexbox style: the subset of properties the widget family
/// actually drives, converted into a full [taffy::Style] for solving.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutStyle {
    /// The preferred size of the node.
    pub size: Vector2<Dimension>,
    /// The minimum size of the node.
    pub min_size: Vector2<Dimension>,
    /// The flex main axis direction for child placement.
    pub flex_direction: FlexDirection,
    /// How much the node grows relative to its siblings.
    pub flex_grow: f32,
    /// How much the node shrinks relative to its siblings.
    pub flex_shrink: f32,
    /// The padding around the node's content.
    pub padding: Rect<LengthPercentage>,
    /// The margin around the node.
    pub margin: Rect<LengthPercentageAuto>,
    /// The gap between child nodes, per axis.
    pub gap: Vector2<LengthPercentage>,
    /// Main axis distribution of children.
    pub justify_content: Option<JustifyContent>,
    /// Cross axis alignment of children.
    pub align_items: Option<AlignItems>,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            size: Vector2::new(Dimension::auto(), Dimension::auto()),
            min_size: Vector2::new(Dimension::auto(), Dimension::auto()),
            flex_direction: FlexDirection::Row,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            padding: Rect {
                left: LengthPercentage::length(0.0),
                right: LengthPercentage::length(0.0),
                top: LengthPercentage::length(0.0),
                bottom: LengthPercentage::length(0.0),
            },
            margin: Rect {
                left: LengthPercentageAuto::length(0.0),
                right: LengthPercentageAuto::length(0.0),
                top: LengthPercentageAuto::length(0.0),
                bottom: LengthPercentageAuto::length(0.0),
            },
            gap: Vector2::new(LengthPercentage::length(0.0), LengthPercentage::length(0.0)),
            justify_content: None,
            align_items: None,
        }
    }
}

impl LayoutStyle {
    fn to_taffy(&self) -> taffy::Style {
        taffy::Style {
            size: Size {
                width: self.size.x,
                height: self.size.y,
            },
            min_size: Size {
                width: self.min_size.x,
                height: self.min_size.y,
            },
            flex_direction: self.flex_direction,
            flex_grow: self.flex_grow,
            flex_shrink: self.flex_shrink,
            padding: self.padding,
            margin: self.margin,
            gap: Size {
                width: self.gap.x,
                height: self.gap.y,
            },
            justify_content: self.justify_content,
            align_items: self.align_items,
            ..Default::default()
        }
    }
}

/// A node in the style tree a widget declares via
/// [Widget::layout_style](crate::widget::Widget::layout_style).
#[derive(Debug, Clone, PartialEq)]
pub struct StyleNode {
    /// The style of this node.
    pub style: LayoutStyle,
    /// The styles of the child nodes.
    pub children: Vec<StyleNode>,
}

/// The computed placement of a single node, in absolute pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// The top-left corner of the node, relative to the layout root.
    pub location: Point<f32>,
    /// The size of the node.
    pub size: Size<f32>,
}

/// A node in the computed layout tree. Children mirror the style tree
/// structure one-to-one.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    /// The computed placement of this node.
    pub layout: Layout,
    /// The computed layouts of the child nodes.
    pub children: Vec<LayoutNode>,
}

/// Errors arising while computing a layout tree.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The underlying flexbox solver rejected the tree.
    #[error("layout computation failed: {0}")]
    Solver(#[from] taffy::TaffyError),
}

/// Compute the absolute layout of a style tree within the available space.
pub fn compute_layout(
    root: &StyleNode,
    available: Vector2<f32>,
) -> Result<LayoutNode, LayoutError> {
    let mut tree: TaffyTree<()> = TaffyTree::new();
    let root_id = build_node(&mut tree, root)?;

    tree.compute_layout(
        root_id,
        Size {
            width: AvailableSpace::Definite(available.x),
            height: AvailableSpace::Definite(available.y),
        },
    )?;

    collect_node(&tree, root_id, Point { x: 0.0, y: 0.0 })
}

fn build_node(tree: &mut TaffyTree<()>, node: &StyleNode) -> Result<taffy::NodeId, LayoutError> {
    let mut children = Vec::with_capacity(node.children.len());
    for child in &node.children {
        children.push(build_node(tree, child)?);
    }
    Ok(tree.new_with_children(node.style.to_taffy(), &children)?)
}

fn collect_node(
    tree: &TaffyTree<()>,
    node: taffy::NodeId,
    origin: Point<f32>,
) -> Result<LayoutNode, LayoutError> {
    let layout = tree.layout(node)?;
    let location = Point {
        x: origin.x + layout.location.x,
        y: origin.y + layout.location.y,
    };

    let child_ids = tree.children(node)?;
    let mut children = Vec::with_capacity(child_ids.len());
    for child in child_ids {
        children.push(collect_node(tree, child, location)?);
    }

    Ok(LayoutNode {
        layout: Layout {
            location,
            size: layout.size,
        },
        children,
    })
}
