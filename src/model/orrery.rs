use crate::consts::MOON_SPEED_FACTOR;
use crate::math::geometry::advance_angle;

use super::catalog::{MoonID, PlanetID, MOONS, PLANETS};

/// Current angle of every body in the catalog, in degrees.
///
/// Planet angles are measured around the sun, moon angles around their parent.
/// Everything starts at 0.
#[derive(Debug, Clone)]
pub struct Orrery {
    planet_angles: Vec<f64>,
    moon_angles: Vec<f64>,
}

impl Orrery {
    pub fn new() -> Self {
        Orrery {
            planet_angles: vec![0.0; PLANETS.len()],
            moon_angles: vec![0.0; MOONS.len()],
        }
    }

    /// Advances every body by one frame.
    ///
    /// There's no timestep here: a tick is a rendered frame, so the apparent
    /// speed follows the frame rate.
    pub fn tick(&mut self, multiplier: f64) {
        for (angle, planet) in self.planet_angles.iter_mut().zip(PLANETS.iter()) {
            *angle = advance_angle(*angle, planet.angular_speed, multiplier);
        }
        for angle in self.moon_angles.iter_mut() {
            *angle = advance_angle(*angle, MOON_SPEED_FACTOR, multiplier);
        }
    }

    pub fn planet_angle(&self, id: PlanetID) -> f64 {
        self.planet_angles[id.0]
    }

    pub fn moon_angle(&self, id: MoonID) -> f64 {
        self.moon_angles[id.0]
    }
}

impl Default for Orrery {
    fn default() -> Self {
        Self::new()
    }
}
