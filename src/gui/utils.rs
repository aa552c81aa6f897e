use kiss3d::window::Window;

use nalgebra::{Point2, Point3};

pub fn path_iter_parametric<F, S>(
    f: F,
    t_start: S,
    t_end: S,
    num_segments: usize,
) -> impl Iterator<Item = Point2<f32>>
where
    F: Fn(S) -> Point2<f32>,
    S: nalgebra::RealField + simba::scalar::SupersetOf<usize> + Copy,
{
    assert!(
        num_segments >= 1,
        "Must have at least one segment, num_segments was {}",
        num_segments
    );
    let convert = nalgebra::convert::<usize, S>;
    (0..=num_segments)
        .map(move |i| convert(i) / convert(num_segments))
        // u ranges from 0 to 1 (inclusive)
        .map(move |u| t_start + u * (t_end - t_start))
        .map(f)
}

pub fn draw_planar_path<I: Iterator<Item = Point2<f32>>>(
    window: &mut Window,
    points: I,
    color: &Point3<f32>,
) {
    let mut prev_pt = None;
    for pt in points {
        if let Some(prev_pt) = prev_pt {
            window.draw_planar_line(&prev_pt, &pt, color);
        }
        prev_pt = Some(pt);
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    #[test]
    fn test_closed_circle() {
        let points: Vec<_> = path_iter_parametric(
            |t: f32| Point2::new(10.0 * t.cos(), 10.0 * t.sin()),
            0.0,
            2.0 * PI,
            4,
        )
        .collect();

        assert_eq!(points.len(), 5);
        approx::assert_relative_eq!(points[0], Point2::new(10.0, 0.0));
        approx::assert_abs_diff_eq!(points[1], Point2::new(0.0, 10.0), epsilon = 1e-5);
        approx::assert_abs_diff_eq!(points[4], points[0], epsilon = 1e-5);
    }
}
