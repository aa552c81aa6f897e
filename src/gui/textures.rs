use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use kiss3d::resource::{Texture, TextureManager};
use log::{debug, warn};

use super::sprites::Sprites;

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Index into a `TextureRegistry`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct TextureID(pub usize);

/// Textures uploaded to kiss3d at startup.
pub struct TextureRegistry {
    textures: Vec<Rc<Texture>>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        TextureRegistry { textures: vec![] }
    }

    /// Loads the texture for every body from `dir`. Anything that fails to load is
    /// logged and left out, so that body gets drawn as a disc instead.
    pub fn load_sprites(&mut self, dir: &Path) -> Sprites<TextureID> {
        let sprites = Sprites::load(|file| match self.load(dir, file) {
            Ok(id) => Some(id),
            Err(err) => {
                warn!("{}; drawing a plain disc instead", err);
                None
            }
        });
        debug!(
            "Loaded {} textures from {}",
            sprites.loaded_count(),
            dir.display()
        );
        sprites
    }

    pub fn load(&mut self, dir: &Path, file: &str) -> Result<TextureID, AssetError> {
        let path = dir.join(file);
        let bytes = fs::read(&path).map_err(|source| AssetError::Io {
            path: path.clone(),
            source,
        })?;
        let image = image::load_from_memory(&bytes)
            .map_err(|source| AssetError::Decode { path, source })?;

        let texture = TextureManager::get_global_manager(|tm| tm.add_image(image.clone(), file));
        self.textures.push(texture);
        Ok(TextureID(self.textures.len() - 1))
    }

    pub fn get(&self, id: TextureID) -> Option<&Rc<Texture>> {
        self.textures.get(id.0)
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("rust-orrery-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    // Neither failure reaches the GPU, so these run without a window.

    #[test]
    fn test_missing_file() {
        let dir = scratch_dir("missing");
        let mut registry = TextureRegistry::new();

        let err = registry.load(&dir, "no-such-planet.png").unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
        assert!(err.to_string().contains("no-such-planet.png"));
        assert!(registry.get(TextureID(0)).is_none());
    }

    #[test]
    fn test_undecodable_file() {
        let dir = scratch_dir("garbage");
        fs::write(dir.join("mars.png"), b"definitely not a png").unwrap();
        let mut registry = TextureRegistry::new();

        let err = registry.load(&dir, "mars.png").unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }

    #[test]
    fn test_empty_directory_gives_no_sprites() {
        let dir = scratch_dir("empty");
        let mut registry = TextureRegistry::new();

        let sprites = registry.load_sprites(&dir);
        assert_eq!(sprites.loaded_count(), 0);
        assert!(sprites.sun.is_none());
    }
}
