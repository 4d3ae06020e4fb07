use async_trait::async_trait;

/// Checks whether a static asset is present
#[async_trait]
pub trait AssetProbe: Send + Sync {
    async fn exists(&self, name: &str) -> bool;
}
