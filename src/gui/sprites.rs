use crate::consts::SUN_TEXTURE;
use crate::model::catalog::{self, MoonID, PlanetID};

/// One optional texture per body. `None` means the body is drawn as a plain disc.
#[derive(Debug, Clone)]
pub struct Sprites<T> {
    pub sun: Option<T>,
    pub planets: Vec<Option<T>>,
    pub moons: Vec<Option<T>>,
}

impl<T: Copy> Sprites<T> {
    /// Looks up every texture in the catalog through `load`, by file name.
    pub fn load<F>(mut load: F) -> Self
    where
        F: FnMut(&str) -> Option<T>,
    {
        Sprites {
            sun: load(SUN_TEXTURE),
            planets: catalog::planets().map(|(_, p)| load(p.info.texture)).collect(),
            moons: catalog::moons().map(|(_, m)| load(m.info.texture)).collect(),
        }
    }

    /// No textures at all; everything falls back to discs.
    pub fn none() -> Self {
        Self::load(|_| None)
    }

    pub fn planet(&self, id: PlanetID) -> Option<T> {
        self.planets.get(id.0).copied().flatten()
    }

    pub fn moon(&self, id: MoonID) -> Option<T> {
        self.moons.get(id.0).copied().flatten()
    }

    pub fn loaded_count(&self) -> usize {
        self.planets
            .iter()
            .chain(self.moons.iter())
            .chain(std::iter::once(&self.sun))
            .filter(|t| t.is_some())
            .count()
    }
}
