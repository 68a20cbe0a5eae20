//! knock-core – Gemeinsame Typen und Zeitquelle
//!
//! Dieses Crate stellt die Bausteine bereit, die von allen anderen
//! Knock-Crates gemeinsam genutzt werden: die Identitaets-ID und die
//! austauschbare Uhr, gegen die das Drosselfenster gemessen wird.

pub mod types;
pub mod uhr;

// Re-Exporte fuer bequemen Zugriff
pub use types::IdentitaetId;
pub use uhr::{FesteUhr, SystemUhr, Uhr};
