pub mod index;
pub mod index_entry;

pub use index::Index;
pub use index_entry::IndexEntry;
