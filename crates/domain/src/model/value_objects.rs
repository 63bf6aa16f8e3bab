pub mod summary;

pub use summary::IndexSummary;
