#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlanetID(pub usize);

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct MoonID(pub usize);

// All the immutable info about a body, shared by planets and moons.
// Lengths are in pixels at 1x zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyInfo {
    pub name: &'static str,
    pub orbit_radius: f64,
    pub display_size: f64,
    pub texture: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Planet {
    pub info: BodyInfo,
    /// Degrees per tick at 1x speed
    pub angular_speed: f64,
}

/// Moons have no speed of their own; see `consts::MOON_SPEED_FACTOR`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moon {
    pub info: BodyInfo,
    pub parent: PlanetID,
}

const fn planet(
    name: &'static str,
    orbit_radius: f64,
    display_size: f64,
    angular_speed: f64,
    texture: &'static str,
) -> Planet {
    Planet {
        info: BodyInfo {
            name,
            orbit_radius,
            display_size,
            texture,
        },
        angular_speed,
    }
}

const fn moon(
    parent: usize,
    name: &'static str,
    orbit_radius: f64,
    display_size: f64,
    texture: &'static str,
) -> Moon {
    Moon {
        info: BodyInfo {
            name,
            orbit_radius,
            display_size,
            texture,
        },
        parent: PlanetID(parent),
    }
}

pub const MERCURY: PlanetID = PlanetID(0);
pub const VENUS: PlanetID = PlanetID(1);
pub const EARTH: PlanetID = PlanetID(2);
pub const MARS: PlanetID = PlanetID(3);
pub const JUPITER: PlanetID = PlanetID(4);
pub const SATURN: PlanetID = PlanetID(5);
pub const URANUS: PlanetID = PlanetID(6);
pub const NEPTUNE: PlanetID = PlanetID(7);

/// Catalog order matters: hit-testing picks the earliest match.
pub const PLANETS: [Planet; 8] = [
    planet("Mercury", 60.0, 12.0, 4.15, "mercury.png"),
    planet("Venus", 90.0, 18.0, 1.62, "venus.png"),
    planet("Earth", 130.0, 20.0, 1.0, "earth.png"),
    planet("Mars", 170.0, 16.0, 0.53, "mars.png"),
    planet("Jupiter", 230.0, 38.0, 0.08, "jupiter.png"),
    planet("Saturn", 290.0, 34.0, 0.03, "saturn.png"),
    planet("Uranus", 350.0, 28.0, 0.011, "uranus.png"),
    planet("Neptune", 410.0, 27.0, 0.006, "neptune.png"),
];

pub const MOONS: [Moon; 3] = [
    moon(EARTH.0, "Moon", 25.0, 8.0, "moon.png"),
    moon(MARS.0, "Phobos", 12.0, 6.0, "phobos.png"),
    moon(MARS.0, "Deimos", 20.0, 5.0, "deimos.png"),
];

pub fn planets() -> impl Iterator<Item = (PlanetID, &'static Planet)> {
    PLANETS.iter().enumerate().map(|(i, p)| (PlanetID(i), p))
}

pub fn moons() -> impl Iterator<Item = (MoonID, &'static Moon)> {
    MOONS.iter().enumerate().map(|(i, m)| (MoonID(i), m))
}

/// Moons orbiting the given planet, in catalog order.
pub fn moons_of(parent: PlanetID) -> impl Iterator<Item = (MoonID, &'static Moon)> {
    moons().filter(move |(_, m)| m.parent == parent)
}

pub fn planet_info(id: PlanetID) -> &'static Planet {
    &PLANETS[id.0]
}

pub fn moon_info(id: MoonID) -> &'static Moon {
    &MOONS[id.0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let names: Vec<_> = planets().map(|(_, p)| p.info.name).collect();
        assert_eq!(
            names,
            vec!["Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
        );
        assert_eq!(planet_info(EARTH).info.orbit_radius, 130.0);
        assert_eq!(planet_info(NEPTUNE).info.name, "Neptune");
    }

    #[test]
    fn test_moon_parents() {
        let earth_moons: Vec<_> = moons_of(EARTH).map(|(_, m)| m.info.name).collect();
        assert_eq!(earth_moons, vec!["Moon"]);

        let mars_moons: Vec<_> = moons_of(MARS).map(|(id, _)| id).collect();
        assert_eq!(mars_moons, vec![MoonID(1), MoonID(2)]);

        assert_eq!(moons_of(JUPITER).count(), 0);
        for (_, m) in moons() {
            assert!(m.parent.0 < PLANETS.len());
        }
    }
}
