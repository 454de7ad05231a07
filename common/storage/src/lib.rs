pub mod backend;
pub mod error;
pub mod keys;
pub mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use error::{StorageError, StorageResult};
pub use store::{KvStore, NAMESPACE};
