pub mod json_file;
pub mod memory;
pub mod traits;

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;
pub use traits::{CollectionSource, CollectionStore};
