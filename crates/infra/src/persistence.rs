// crates/infra/src/persistence.rs
pub mod file_reader;
pub mod file_writer;
pub mod table_file;

pub use file_reader::FileReader;
pub use file_writer::FileWriter;
pub use table_file::{FileTableSource, TableFormat};
