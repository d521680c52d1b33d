//! The image-resolution capability used by commands and initial objects.

use std::path::PathBuf;

use crate::assets::decode::{decode_image, load_image};
use crate::discord::cache::AvatarCache;
use crate::foundation::error::BoardcastResult;
use crate::render::composite::ImageRgba;

/// Path prefix that routes a reference to the Discord avatar collaborator
/// instead of the local filesystem.
pub const DISCORD_PREFIX: &str = "discord:";

/// Pixel size requested for Discord avatars.
pub const DISCORD_AVATAR_SIZE: u32 = 32;

/// Turns a script path string into decoded pixels. The core treats this as
/// an opaque capability; tests substitute their own implementation.
pub trait ResolveImage {
    /// Resolve `path` to a decoded image.
    fn resolve(&mut self, path: &str) -> BoardcastResult<ImageRgba>;
}

/// The production resolver: local files relative to the script's directory,
/// or `discord:<user-id>` via the avatar fetch-and-cache collaborator.
#[derive(Debug)]
pub struct FsImageResolver {
    root: PathBuf,
    avatars: AvatarCache,
}

impl FsImageResolver {
    /// A resolver rooted at the script's directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            avatars: AvatarCache::new(),
        }
    }
}

impl ResolveImage for FsImageResolver {
    fn resolve(&mut self, path: &str) -> BoardcastResult<ImageRgba> {
        if let Some(user_id) = path.strip_prefix(DISCORD_PREFIX) {
            let bytes = self.avatars.get(user_id, DISCORD_AVATAR_SIZE)?;
            decode_image(&bytes)
        } else {
            load_image(&self.root.join(path))
        }
    }
}
