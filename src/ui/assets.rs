//! Filesystem asset source for the piece SVGs.

use gpui::{AssetSource, SharedString};
use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

/// Looks up assets next to the executable, then relative to the working directory
pub struct FileAssets {
    roots: Vec<PathBuf>,
}

impl FileAssets {
    pub fn new() -> Self {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()));
        let cwd = std::env::current_dir().ok();
        let roots = exe_dir.into_iter().chain(cwd).collect();
        Self { roots }
    }

    fn candidates<'a>(&'a self, path: &'a str) -> impl Iterator<Item = PathBuf> + 'a {
        self.roots
            .iter()
            .map(move |root| root.join(path))
            .chain(std::iter::once(PathBuf::from(path)))
    }
}

impl Default for FileAssets {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetSource for FileAssets {
    fn load(&self, path: &str) -> gpui::Result<Option<Cow<'static, [u8]>>> {
        let found = self.candidates(path).find_map(|p| fs::read(p).ok());
        if found.is_none() {
            tracing::debug!(path, "asset not found");
        }
        Ok(found.map(Cow::Owned))
    }

    fn list(&self, path: &str) -> gpui::Result<Vec<SharedString>> {
        let Some(entries) = self.candidates(path).find_map(|p| fs::read_dir(p).ok()) else {
            return Ok(Vec::new());
        };
        Ok(entries
            .flatten()
            .filter_map(|entry| entry.file_name().to_str().map(|n| SharedString::from(n.to_string())))
            .collect())
    }
}
