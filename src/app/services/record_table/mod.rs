//! Record table loading for logger exports
//!
//! - [`table`] - the in-memory `SourceRecordTable` and its column operations
//! - [`loader`] - delimited-text reading with header handling

pub mod loader;
pub mod table;

pub use loader::RecordTableLoader;
pub use table::SourceRecordTable;
