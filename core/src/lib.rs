pub mod parser;
pub mod table;

pub use parser::{FormatError, parse_line};
pub use table::{RangeTable, TableError};
