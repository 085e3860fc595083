//! Vector Graphics Interface abstraction.
//!
//! This module provides an abstraction over rendering backends, allowing
//! widgets to be decoupled from the specific rendering implementation. The
//! production backend is Vello ([vello_vg]); tests typically substitute a
//! recording backend to assert on emitted geometry.

use vello::kurbo::{Affine, BezPath, Shape, Stroke};
use vello::peniko::{Brush, Fill, Mix};

/// A trait for rendering vector graphics.
///
/// Note: methods use `&BezPath` for object-safety. To use concrete shape
/// types (Rect, RoundedRect, Line, etc.), convert them to a path using
/// [shape_to_path].
pub trait Graphics {
    /// Fill a shape with the given brush.
    fn fill(
        &mut self,
        fill_rule: Fill,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    );

    /// Stroke a shape with the given brush.
    fn stroke(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    );

    /// Push a new layer clipped to the given shape, blended with the given
    /// mix and alpha. Used for clipping overflowing content and for fading
    /// whole subtrees.
    fn push_layer(&mut self, mix: Mix, alpha: f32, transform: Affine, shape: &BezPath);

    /// Pop the most recent layer.
    fn pop_layer(&mut self);

    /// Append a prebuilt Vello scene to this one.
    ///
    /// This keeps compatibility with widgets that compose child content in a
    /// scratch scene before placing it (e.g. translated child rendering).
    fn append(&mut self, other: &vello::Scene, transform: Option<Affine>);
}

/// Helper function to convert a shape to a [BezPath] for use with the
/// [Graphics] trait.
pub fn shape_to_path(shape: &impl Shape) -> BezPath {
    shape.to_path(0.1)
}

/// A default graphics implementation using Vello.
pub mod vello_vg;
