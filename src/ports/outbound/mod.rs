/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console).
pub mod bom_reader;
pub mod bom_writer;
pub mod database_store;
pub mod progress_reporter;
pub mod remote_database;

pub use bom_reader::BomReader;
pub use bom_writer::BomWriter;
pub use database_store::DatabaseStore;
pub use progress_reporter::ProgressReporter;
pub use remote_database::RemoteDatabase;
