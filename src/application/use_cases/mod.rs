/// Use cases module containing application business logic orchestration
mod apply_mappings;
mod update_database;

#[cfg(test)]
mod test_doubles;

pub use apply_mappings::ApplyMappingsUseCase;
pub use update_database::UpdateDatabaseUseCase;
