pub mod entities;
pub mod value_objects;

pub use entities::{Index, IndexEntry};
pub use value_objects::IndexSummary;
