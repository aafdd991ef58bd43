//! Persistent store adapter: the key-value contract and its file-backed and
//! in-memory implementations.

pub mod file;
pub mod kv;
pub mod memory;

pub use file::FileKeyValueStore;
pub use kv::{keys, KeyValueStore};
pub use memory::MemoryKeyValueStore;
