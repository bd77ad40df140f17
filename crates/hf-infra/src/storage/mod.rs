mod file_store;
mod memory_store;

pub use file_store::{FileKeyValueStore, DEFAULT_LOCAL_STORE_FILE};
pub use memory_store::InMemoryKeyValueStore;
