//! Texture assets: content-addressed registry with image decoding.
//!
//! Textures are identified by a hash of their pixel content. The renderer
//! consumes textures by id, never by raw file paths. Missing or broken
//! files resolve to a generated placeholder so the demo runs without the
//! art drop.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::Path;

/// Content-addressed texture id computed from the pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TextureId(pub u64);

/// A decoded RGBA8 texture.
#[derive(Debug, Clone)]
pub struct Texture {
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

impl Texture {
    /// Magenta/black checkerboard shown in place of missing art.
    pub fn placeholder(name: &str) -> Self {
        const SIZE: u32 = 64;
        const CELL: u32 = 8;
        let mut pixels = Vec::with_capacity((SIZE * SIZE * 4) as usize);
        for y in 0..SIZE {
            for x in 0..SIZE {
                let magenta = ((x / CELL) + (y / CELL)) % 2 == 0;
                if magenta {
                    pixels.extend_from_slice(&[255, 0, 255, 255]);
                } else {
                    pixels.extend_from_slice(&[0, 0, 0, 255]);
                }
            }
        }
        Self {
            name: name.to_string(),
            width: SIZE,
            height: SIZE,
            pixels,
        }
    }
}

/// Errors from texture operations.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode {name}: {reason}")]
    Decode { name: String, reason: String },
    #[error("texture not found: {0:?}")]
    NotFound(TextureId),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One manifest line: enough to audit the registry without pixel data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    pub id: TextureId,
    pub width: u32,
    pub height: u32,
}

/// Content-addressed texture registry.
///
/// Identical pixel content deduplicates to a single entry regardless of
/// how many names point at it.
#[derive(Debug, Default)]
pub struct TextureStore {
    textures: BTreeMap<TextureId, Texture>,
    by_name: BTreeMap<String, TextureId>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a decoded texture and return its content id.
    pub fn register(&mut self, texture: Texture) -> TextureId {
        let id = content_hash(&texture);
        self.by_name.insert(texture.name.clone(), id);
        self.textures.entry(id).or_insert(texture);
        id
    }

    /// Load and decode an image file (PNG or JPEG).
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<TextureId, AssetError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let decoded = image::open(path).map_err(|e| AssetError::Decode {
            name: name.clone(),
            reason: e.to_string(),
        })?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        let id = self.register(Texture {
            name,
            width,
            height,
            pixels: rgba.into_raw(),
        });
        Ok(id)
    }

    /// Load `name` from `dir`, falling back to the placeholder when the
    /// file is absent or undecodable.
    pub fn load_or_placeholder(&mut self, dir: &Path, name: &str) -> TextureId {
        match self.load_file(dir.join(name)) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(name, error = %e, "texture unavailable, using placeholder");
                self.register(Texture::placeholder(name))
            }
        }
    }

    pub fn get(&self, id: TextureId) -> Result<&Texture, AssetError> {
        self.textures.get(&id).ok_or(AssetError::NotFound(id))
    }

    /// Resolve a texture by the name it was registered under.
    pub fn id_for(&self, name: &str) -> Option<TextureId> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Produce the manifest in name order.
    pub fn manifest(&self) -> Vec<ManifestEntry> {
        self.by_name
            .iter()
            .filter_map(|(name, id)| {
                self.textures.get(id).map(|t| ManifestEntry {
                    name: name.clone(),
                    id: *id,
                    width: t.width,
                    height: t.height,
                })
            })
            .collect()
    }

    /// Save the manifest (not the pixels) to a JSON file for inspection.
    pub fn save_manifest(&self, path: impl AsRef<Path>) -> Result<(), AssetError> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, &self.manifest())?;
        Ok(())
    }
}

fn content_hash(texture: &Texture) -> TextureId {
    let mut hasher = Sha256::new();
    hasher.update(texture.width.to_le_bytes());
    hasher.update(texture.height.to_le_bytes());
    hasher.update(&texture.pixels);
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    TextureId(u64::from_le_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_has_expected_shape() {
        let t = Texture::placeholder("missing.png");
        assert_eq!(t.width, 64);
        assert_eq!(t.height, 64);
        assert_eq!(t.pixels.len(), 64 * 64 * 4);
        // Top-left cell is magenta.
        assert_eq!(&t.pixels[..4], &[255, 0, 255, 255]);
    }

    #[test]
    fn identical_content_deduplicates() {
        let mut store = TextureStore::new();
        let a = store.register(Texture::placeholder("a.png"));
        let b = store.register(Texture::placeholder("b.png"));
        assert_eq!(a, b);
        assert_eq!(store.len(), 1);
        assert_eq!(store.id_for("a.png"), Some(a));
        assert_eq!(store.id_for("b.png"), Some(a));
    }

    #[test]
    fn load_file_decodes_a_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("red.png");
        let img = image::RgbaImage::from_pixel(4, 2, image::Rgba([255, 0, 0, 255]));
        img.save(&path).unwrap();

        let mut store = TextureStore::new();
        let id = store.load_file(&path).unwrap();
        let t = store.get(id).unwrap();
        assert_eq!((t.width, t.height), (4, 2));
        assert_eq!(&t.pixels[..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn missing_file_falls_back_to_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TextureStore::new();
        let id = store.load_or_placeholder(dir.path(), "nope.png");
        let t = store.get(id).unwrap();
        assert_eq!(t.width, 64);
        assert_eq!(store.id_for("nope.png"), Some(id));
    }

    #[test]
    fn manifest_round_trips_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TextureStore::new();
        store.register(Texture::placeholder("a.png"));
        let path = dir.path().join("manifest.json");
        store.save_manifest(&path).unwrap();

        let loaded: Vec<ManifestEntry> =
            serde_json::from_reader(std::fs::File::open(&path).unwrap()).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "a.png");
        assert_eq!(loaded[0].width, 64);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let store = TextureStore::new();
        assert!(matches!(
            store.get(TextureId(0xdead_beef)),
            Err(AssetError::NotFound(_))
        ));
    }
}

pub fn crate_info() -> &'static str {
    "promenade-assets v0.1.0"
}
