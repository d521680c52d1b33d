//! On-disk caching for user avatars, so repeated renders don't ping
//! Discord's CDN.

use std::path::PathBuf;

use sha2::{Digest, Sha256};

use crate::discord::user::User;
use crate::foundation::error::BoardcastResult;

/// Fetches avatars through a per-user disk cache under the platform cache
/// directory. If no cache directory is available, every request goes to the
/// network.
#[derive(Clone, Debug)]
pub struct AvatarCache {
    dir: Option<PathBuf>,
}

impl Default for AvatarCache {
    fn default() -> Self {
        Self::new()
    }
}

impl AvatarCache {
    /// A cache rooted at `<platform cache dir>/boardcast/avatars`.
    pub fn new() -> Self {
        Self {
            dir: dirs::cache_dir().map(|d| d.join("boardcast").join("avatars")),
        }
    }

    /// A cache rooted at an explicit directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// The avatar for `user_id` at the requested pixel size, from cache if
    /// possible.
    pub fn get(&self, user_id: &str, size: u32) -> BoardcastResult<Vec<u8>> {
        let path = self.entry_path(user_id, size);

        if let Some(path) = &path
            && let Ok(bytes) = std::fs::read(path)
        {
            tracing::debug!(user_id, size, "avatar cache hit");
            return Ok(bytes);
        }

        tracing::debug!(user_id, size, "avatar cache miss");
        let bytes = User::get(user_id)?.fetch_avatar(Some(size))?;

        if let Some(path) = &path {
            // Failing to persist the cache entry is not worth failing the
            // render over.
            let write = path
                .parent()
                .map(std::fs::create_dir_all)
                .transpose()
                .and_then(|_| std::fs::write(path, &bytes));
            if let Err(e) = write {
                tracing::warn!(user_id, error = %e, "could not write avatar cache entry");
            }
        }
        Ok(bytes)
    }

    fn entry_path(&self, user_id: &str, size: u32) -> Option<PathBuf> {
        let dir = self.dir.as_ref()?;
        let digest = Sha256::digest(format!("avatar:{user_id}?size={size}"));
        Some(dir.join(format!("{digest:x}.png")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/discord/cache.rs"]
mod tests;
