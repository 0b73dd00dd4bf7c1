/// Network adapters for external API calls
mod http_database_client;

pub use http_database_client::HttpDatabaseClient;
