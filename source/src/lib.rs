pub mod properties;

mod error;
mod table;

pub use error::SourceError;

pub use table::CharacterTable;
pub use table::UNICODE_DATA_FIELDS;
