//! Filesystem-backed asset lookup.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use crate::ports::AssetProbe;

/// Looks up image files under a fixed directory.
#[derive(Debug, Clone)]
pub struct FsAssetProbe {
    root: PathBuf,
}

impl FsAssetProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl AssetProbe for FsAssetProbe {
    async fn exists(&self, name: &str) -> bool {
        // Only plain file names; no traversal out of the root.
        let relative = Path::new(name);
        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            return false;
        }
        match tokio::fs::metadata(self.root.join(relative)).await {
            Ok(meta) => meta.is_file(),
            Err(_) => false,
        }
    }
}
