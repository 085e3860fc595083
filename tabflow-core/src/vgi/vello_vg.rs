use crate::vgi::Graphics;
use vello::kurbo::{Affine, BezPath, Stroke};
use vello::peniko::{Brush, Fill, Mix};
use vello::Scene;

/// A Vello-based implementation of the [Graphics] trait.
pub struct VelloGraphics<'a> {
    scene: &'a mut Scene,
}

impl<'a> VelloGraphics<'a> {
    /// Create a new VelloGraphics from a Scene reference.
    pub fn new(scene: &'a mut Scene) -> Self {
        Self { scene }
    }

    /// Get a mutable reference to the underlying Scene.
    pub fn scene_mut(&mut self) -> &mut Scene {
        self.scene
    }
}

impl<'a> Graphics for VelloGraphics<'a> {
    fn fill(
        &mut self,
        fill_rule: Fill,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    ) {
        self.scene
            .fill(fill_rule, transform, brush, brush_transform, shape);
    }

    fn stroke(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: &Brush,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    ) {
        self.scene
            .stroke(style, transform, brush, brush_transform, shape);
    }

    fn push_layer(&mut self, mix: Mix, alpha: f32, transform: Affine, shape: &BezPath) {
        self.scene.push_layer(mix, alpha, transform, shape);
    }

    fn pop_layer(&mut self) {
        self.scene.pop_layer();
    }

    fn append(&mut self, other: &Scene, transform: Option<Affine>) {
        self.scene.append(other, transform);
    }
}
