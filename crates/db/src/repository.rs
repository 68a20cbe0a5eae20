//! Repository-Trait-Definitionen
//!
//! Das Repository-Pattern entkoppelt den Aussteller vom konkreten Speicher.
//! Ein Speicher muss das Lesen-dann-Schreiben des Zugangs einer Identitaet
//! serialisieren: `save_credentials` ist ein bedingtes Schreiben auf den
//! zuvor gelesenen `password_created_at`.

use knock_core::IdentitaetId;

use crate::error::DbError;
use crate::models::{IdentitaetRecord, Zugangsdaten};

/// Result-Alias fuer Datenbankoperationen
pub type DbResult<T> = Result<T, DbError>;

/// Konfiguration fuer die Datenbankverbindung
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Verbindungs-URL (z.B. "sqlite://knock.db")
    pub url: String,
    /// Maximale Anzahl gleichzeitiger Verbindungen im Pool
    pub max_verbindungen: u32,
    /// Ob WAL-Modus bei SQLite aktiviert werden soll
    pub sqlite_wal: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://knock.db".into(),
            max_verbindungen: 5,
            sqlite_wal: true,
        }
    }
}

/// Repository fuer Identitaeten und ihre Einmal-Zugaenge
#[allow(async_fn_in_trait)]
pub trait IdentitaetRepository: Send + Sync {
    /// Eine Identitaet anhand ihrer E-Mail laden
    async fn find_by_email(&self, email: &str) -> DbResult<Option<IdentitaetRecord>>;

    /// Eine neue Identitaet ohne Zugang anlegen
    async fn create(&self, email: &str) -> DbResult<IdentitaetRecord>;

    /// Einen neuen Zugang speichern
    ///
    /// `identitaet` ist der Stand, auf dem die Entscheidung getroffen wurde.
    /// Hat sich `password_created_at` seitdem geaendert, wird nichts
    /// geschrieben und `DbError::Konflikt` zurueckgegeben.
    async fn save_credentials(
        &self,
        identitaet: &IdentitaetRecord,
        zugang: &Zugangsdaten,
    ) -> DbResult<()>;

    /// Den Zugang einer Identitaet loeschen
    ///
    /// Optional: Speicher ohne Unterstuetzung behalten diese Standard-Implementierung.
    async fn destroy_credentials(&self, id: IdentitaetId) -> DbResult<bool> {
        Err(DbError::intern(format!(
            "Zugang von {id} kann in diesem Speicher nicht geloescht werden"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_config_standard() {
        let cfg = DatabaseConfig::default();
        assert!(cfg.sqlite_wal);
        assert_eq!(cfg.max_verbindungen, 5);
        assert!(cfg.url.starts_with("sqlite://"));
    }
}
