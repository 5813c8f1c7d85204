//! Input handling module

pub mod file_reader;
pub mod source_resolver;

pub use file_reader::FileReader;
pub use source_resolver::{resolve_sources, InputSource};
