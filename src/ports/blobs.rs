//! Blob Store Port - Uploaded Image Interface
//!
//! Avatars, logos, and job photos are saved by the embedding
//! application; the core only ever persists the resulting URL strings.
//! No validation happens on this side of the boundary.

use async_trait::async_trait;

/// Trait for upload storage providers.
///
/// `save` accepts raw bytes plus a content type and returns the public
/// URL under which the blob is reachable.
#[async_trait]
pub trait BlobStore: Send + Sync + 'static {
    /// Store a blob and return its URL.
    async fn save(&self, bytes: &[u8], content_type: &str) -> anyhow::Result<String>;
}
