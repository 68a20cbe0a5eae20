//! SQLite-Backend-Implementierung des IdentitaetRepository

pub mod identitaeten;
pub mod pool;

pub use pool::SqliteDb;
