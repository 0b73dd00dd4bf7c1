mod database_sync;
mod ecosystem_parser;
mod parser_manager;

pub use database_sync::{DatabaseFingerprint, DatabaseSync, Freshness};
pub use ecosystem_parser::{EcosystemParser, Resolution, ResolutionSummary, ResolveOptions};
pub use parser_manager::ParserManager;
