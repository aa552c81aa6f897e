use nalgebra::{point, Point3};

pub const WINDOW_TITLE: &str = "Realistic 2D Solar System Simulation with Moons";
pub const WINDOW_WIDTH: u32 = 1000;
pub const WINDOW_HEIGHT: u32 = 800;
pub const FRAMERATE: u64 = 60;

pub const DEFAULT_TEXTURE_DIR: &str = "textures";

// Zoom view
pub const ZOOM_REFERENCE_RADIUS: f64 = 150.0;
pub const ZOOM_SCALE: f64 = 3.0;

// Every moon moves at this many degrees per tick at 1x speed, whatever its catalog entry says
pub const MOON_SPEED_FACTOR: f64 = 5.0;

pub const MIN_SPEED: f64 = 0.1;
pub const MAX_SPEED: f64 = 100.0;

// Sun, in pixels
pub const SUN_SPRITE_SIZE: f64 = 100.0;
pub const SUN_SPRITE_SIZE_ZOOMED: f64 = 60.0;
pub const SUN_FALLBACK_RADIUS: f64 = 50.0;
pub const SUN_FALLBACK_RADIUS_ZOOMED: f64 = 25.0;
pub const SUN_TEXTURE: &str = "sun.png";

// Speed slider, anchored to the bottom-left corner
pub const SLIDER_X: f64 = 20.0;
pub const SLIDER_BOTTOM_OFFSET: f64 = 60.0;
pub const SLIDER_WIDTH: f64 = 200.0;
pub const SLIDER_HEIGHT: f64 = 8.0;
pub const SLIDER_KNOB_RADIUS: f64 = 10.0;
pub const SLIDER_GRAB_ABOVE: f64 = 10.0;
pub const SLIDER_GRAB_BELOW: f64 = 20.0;

// Text
pub const STATUS_TEXT_SIZE: f32 = 20.0;
pub const LABEL_TEXT_SIZE: f32 = 30.0;
pub const LABEL_OFFSET: (f64, f64) = (12.0, 10.0);
pub const FOOTER_BOTTOM_OFFSET: f64 = 20.0;

// Colors
pub const BACKGROUND_COLOR: Point3<f32> = point![10.0 / 255.0, 10.0 / 255.0, 30.0 / 255.0];
pub const WHITE: Point3<f32> = point![1.0, 1.0, 1.0];
pub const GRAY: Point3<f32> = point![180.0 / 255.0, 180.0 / 255.0, 180.0 / 255.0];
pub const SUN_COLOR: Point3<f32> = point![1.0, 1.0, 0.0];
pub const SLIDER_COLOR: Point3<f32> = point![100.0 / 255.0, 100.0 / 255.0, 1.0];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors() {
        assert_eq!(WHITE, Point3::new(1.0, 1.0, 1.0));
        assert_eq!(SUN_COLOR, Point3::new(1.0, 1.0, 0.0));
        assert_eq!(SLIDER_COLOR.z, 1.0);
        assert!(BACKGROUND_COLOR.z > BACKGROUND_COLOR.x);
        assert!(GRAY.coords.iter().all(|c| *c > 0.0 && *c < 1.0));
    }
}
