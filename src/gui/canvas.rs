use nalgebra::{Point2, Point3, Vector2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Status,
    Label,
}

/// The drawing primitives a frame needs.
///
/// Coordinates are screen pixels: origin at the top-left corner, y pointing down.
/// Colors are RGB in [0, 1].
pub trait Canvas {
    /// Handle to a texture the canvas already knows about
    type Texture: Copy;

    fn clear(&mut self, color: &Point3<f32>);

    fn fill_circle(&mut self, center: &Point2<f64>, radius: f64, color: &Point3<f32>);

    /// One-pixel circle outline
    fn stroke_circle(&mut self, center: &Point2<f64>, radius: f64, color: &Point3<f32>);

    fn fill_rect(&mut self, top_left: &Point2<f64>, size: &Vector2<f64>, color: &Point3<f32>);

    /// Draws the texture scaled to a `size` x `size` square centered on `center`.
    fn blit(&mut self, texture: Self::Texture, center: &Point2<f64>, size: f64);

    fn draw_text(
        &mut self,
        text: &str,
        top_left: &Point2<f64>,
        style: TextStyle,
        color: &Point3<f32>,
    );
}
