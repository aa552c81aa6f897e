use nalgebra::{Point2, Vector2};

/// Returns the point at `angle_deg` around a circle of the given radius.
///
/// Angles are measured from the positive x-axis towards the positive y-axis. Since
/// screen space has y pointing down, increasing angles turn clockwise on screen.
pub fn orbit_position(center: &Point2<f64>, radius: f64, angle_deg: f64) -> Point2<f64> {
    let theta = angle_deg.to_radians();
    center + radius * Vector2::new(theta.cos(), theta.sin())
}

/// Moves an angle forward by `speed * multiplier` degrees, wrapped into [0, 360).
pub fn advance_angle(angle_deg: f64, speed: f64, multiplier: f64) -> f64 {
    let angle = (angle_deg + speed * multiplier).rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if angle >= 360.0 {
        0.0
    } else {
        angle
    }
}

/// Whether `point` lies on a disc of diameter `draw_size` centered at `center`.
pub fn within_radius(point: &Point2<f64>, center: &Point2<f64>, draw_size: f64) -> bool {
    nalgebra::distance(point, center) <= draw_size / 2.0
}
