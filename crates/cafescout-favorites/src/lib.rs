pub mod kv;
pub mod store;

pub use kv::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use store::{FavoritesStore, FAVORITES_KEY};
