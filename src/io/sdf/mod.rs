//! Multi-record SD file (MDL SDfile) reading and writing.
//!
//! Only the record framing and the `>  <NAME>` data items are interpreted;
//! the connection table is carried through untouched.

pub mod reader;
pub mod writer;

pub use reader::{RecordBlocks, TERMINATOR, parse_record, parse_str, read, split_records};
pub use writer::{to_string, write, write_record};
