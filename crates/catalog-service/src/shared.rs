//! Lock-guarded repository handle shared between use cases.

use std::sync::Arc;

use tokio::sync::RwLock;

/// A repository behind one lock guarding the whole store.
///
/// Reads take the read lock; every write takes the write lock for its full
/// read-modify-write sequence.
pub type SharedRepository<R> = Arc<RwLock<R>>;

/// Wrap a repository for sharing.
pub fn share<R>(repository: R) -> SharedRepository<R> {
    Arc::new(RwLock::new(repository))
}
