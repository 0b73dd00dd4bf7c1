/// CPE mapping domain: BOM and database models, and the resolution services
pub mod domain;
pub mod services;
