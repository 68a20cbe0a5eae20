//! knock-db – Identitaets-Speicher
//!
//! Dieses Crate stellt das Repository-Pattern fuer Identitaeten bereit.
//! Der `IdentitaetRepository`-Trait ist die einzige Schnittstelle, ueber die
//! der Aussteller Identitaeten findet, anlegt und ihre Einmal-Zugangsdaten
//! schreibt. Mitgeliefert werden ein SQLite-Backend und ein In-Memory-Backend.

pub mod error;
pub mod models;
pub mod repository;
pub mod speicher;
pub mod sqlite;

pub use error::DbError;
pub use models::{IdentitaetRecord, Zugangsdaten};
pub use repository::{DatabaseConfig, DbResult, IdentitaetRepository};
pub use speicher::SpeicherRepository;
pub use sqlite::SqliteDb;
