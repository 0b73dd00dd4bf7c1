/// Filesystem adapters for file I/O operations
mod database_store;
mod file_reader;
mod file_writer;

pub use database_store::FileSystemDatabaseStore;
pub use file_reader::FileSystemReader;
pub use file_writer::FileSystemWriter;
