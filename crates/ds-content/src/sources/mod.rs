pub mod csv_source;
pub mod memory_source;

pub use csv_source::CsvContentSource;
pub use memory_source::MemoryContentSource;
