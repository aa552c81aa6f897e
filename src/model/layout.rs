use nalgebra::Point2;

use crate::consts::{ZOOM_REFERENCE_RADIUS, ZOOM_SCALE};
use crate::math::geometry::orbit_position;

use super::catalog::{self, MoonID, PlanetID};
use super::interaction::Mode;
use super::orrery::Orrery;

/// Where a body ends up on screen this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub center: Point2<f64>,
    /// Center of the circle the body travels on (the sun, or the parent planet)
    pub orbit_center: Point2<f64>,
    pub orbit_radius: f64,
    /// Sprite diameter, including any zoom magnification
    pub draw_size: f64,
}

/// Screen positions of everything visible, for one mode and one set of angles.
///
/// In zoomed mode every orbit radius is multiplied by `scale_factor`, which puts
/// the target planet at ZOOM_REFERENCE_RADIUS from the sun. The target and its
/// moons are drawn ZOOM_SCALE times larger. Orbits stay circles around the sun.
#[derive(Debug, Clone)]
pub struct Layout {
    pub sun_center: Point2<f64>,
    pub mode: Mode,
    pub scale_factor: f64,
    /// One per planet, in catalog order
    pub planets: Vec<Placement>,
    /// Only the moons of the zoom target; empty in normal mode
    pub moons: Vec<(MoonID, Placement)>,
}

pub fn scale_factor(mode: Mode) -> f64 {
    match mode {
        Mode::Normal => 1.0,
        Mode::Zoomed(id) => ZOOM_REFERENCE_RADIUS / catalog::planet_info(id).info.orbit_radius,
    }
}

impl Layout {
    pub fn compute(orrery: &Orrery, mode: Mode, sun_center: Point2<f64>) -> Self {
        let scale = scale_factor(mode);
        let target = mode.zoom_target();

        let planets: Vec<_> = catalog::planets()
            .map(|(id, planet)| {
                let orbit_radius = planet.info.orbit_radius * scale;
                let magnification = if target == Some(id) { ZOOM_SCALE } else { 1.0 };
                Placement {
                    center: orbit_position(&sun_center, orbit_radius, orrery.planet_angle(id)),
                    orbit_center: sun_center,
                    orbit_radius,
                    draw_size: planet.info.display_size * magnification,
                }
            })
            .collect();

        let moons = match target {
            None => vec![],
            Some(parent) => {
                let parent_center = planets[parent.0].center;
                catalog::moons_of(parent)
                    .map(|(id, moon)| {
                        let orbit_radius = moon.info.orbit_radius * scale;
                        let placement = Placement {
                            center: orbit_position(
                                &parent_center,
                                orbit_radius,
                                orrery.moon_angle(id),
                            ),
                            orbit_center: parent_center,
                            orbit_radius,
                            draw_size: moon.info.display_size * ZOOM_SCALE,
                        };
                        (id, placement)
                    })
                    .collect()
            }
        };

        Layout {
            sun_center,
            mode,
            scale_factor: scale,
            planets,
            moons,
        }
    }

    pub fn planet(&self, id: PlanetID) -> &Placement {
        &self.planets[id.0]
    }

    #[cfg(test)]
    pub fn moon(&self, id: MoonID) -> Option<&Placement> {
        self.moons
            .iter()
            .find(|(moon_id, _)| *moon_id == id)
            .map(|(_, placement)| placement)
    }
}
