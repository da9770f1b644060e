// src/artifact.rs
//! Transient handles over enhanced documents, the blob-URL analog.
//! Bytes live in the `ArtifactStore` until released; handles are cheap
//! tokens that dangle harmlessly once their backing entry is gone.

use std::collections::HashMap;
use uuid::Uuid;

/// Reference to one enhanced document held by an `ArtifactStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhancementArtifact {
    id: Uuid,
    pub file_name: String,
    pub len: usize,
}

impl EnhancementArtifact {
    pub fn id(&self) -> Uuid {
        self.id
    }
}

/// Owns the bytes behind every live artifact handle.
#[derive(Debug, Default)]
pub struct ArtifactStore {
    entries: HashMap<Uuid, Vec<u8>>,
}

impl ArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `bytes` and hand back a dereferenceable handle.
    pub fn acquire(&mut self, bytes: Vec<u8>, file_name: impl Into<String>) -> EnhancementArtifact {
        let id = Uuid::new_v4();
        let len = bytes.len();
        self.entries.insert(id, bytes);
        EnhancementArtifact {
            id,
            file_name: file_name.into(),
            len,
        }
    }

    /// Drop the bytes behind a handle. Idempotent: releasing a handle that is
    /// already released, or was never issued by this store, is a no-op,
    /// because teardown and replacement paths may both attempt it.
    pub fn release(&mut self, artifact: &EnhancementArtifact) {
        self.entries.remove(&artifact.id);
    }

    /// Dereference a handle. `None` once released.
    pub fn read(&self, artifact: &EnhancementArtifact) -> Option<&[u8]> {
        self.entries.get(&artifact.id).map(|b| b.as_slice())
    }

    /// Number of artifacts currently backed by bytes.
    pub fn live_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_and_read() {
        let mut store = ArtifactStore::new();
        let handle = store.acquire(vec![1, 2, 3], "enhanced_resume.pdf");
        assert_eq!(handle.len, 3);
        assert_eq!(store.read(&handle), Some(&[1u8, 2, 3][..]));
        assert_eq!(store.live_count(), 1);
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut store = ArtifactStore::new();
        let handle = store.acquire(vec![0xFF], "a.pdf");
        store.release(&handle);
        assert_eq!(store.read(&handle), None);
        assert_eq!(store.live_count(), 0);
        // second release of the same handle is a no-op
        store.release(&handle);
        assert_eq!(store.live_count(), 0);
    }

    #[test]
    fn test_release_foreign_handle_is_noop() {
        let mut other = ArtifactStore::new();
        let foreign = other.acquire(vec![1], "b.pdf");

        let mut store = ArtifactStore::new();
        let own = store.acquire(vec![2], "c.pdf");
        store.release(&foreign);
        assert_eq!(store.live_count(), 1);
        assert_eq!(store.read(&own), Some(&[2u8][..]));
    }
}
