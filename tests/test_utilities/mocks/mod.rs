/// Mock implementations for testing
mod mock_bom_reader;
mod mock_bom_writer;
mod mock_database_store;
mod mock_progress_reporter;
mod mock_remote_database;

pub use mock_bom_reader::MockBomReader;
pub use mock_bom_writer::MockBomWriter;
pub use mock_database_store::MockDatabaseStore;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_remote_database::MockRemoteDatabase;
