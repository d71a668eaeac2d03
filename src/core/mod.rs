pub mod document;
pub mod line;
pub mod update;

pub use document::{Entry, EnvDocument};
pub use line::{is_valid_key, parse_line, serialize_value, ParsedLine, QuoteStyle};
pub use update::{EditBatch, EntryEdit, Upsert};
