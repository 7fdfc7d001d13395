//! Persistence layer: connection pool, migrations, and repositories.

pub mod connection;
pub mod repositories;
