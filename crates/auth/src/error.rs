//! Fehlertypen fuer die Zugangs-Ausstellung

use knock_db::DbError;
use thiserror::Error;

/// Alle moeglichen Fehler bei der Ausstellung eines Einmal-Zugangs
#[derive(Debug, Error)]
pub enum AuthError {
    // --- Aufrufer ---
    #[error("Keine Identitaet zur E-Mail gefunden: {0}")]
    IdentitaetNichtGefunden(String),

    // --- Kodierer ---
    #[error("Kodierung des Einmal-Codes fehlgeschlagen: {0}")]
    Kodierung(String),

    // --- Speicher ---
    #[error("Speicherfehler: {0}")]
    Persistenz(#[from] DbError),

    // --- Zustellung ---
    #[error("Zustellung des Einmal-Codes fehlgeschlagen: {0}")]
    Benachrichtigung(String),

    // --- Intern ---
    #[error("Interner Fehler: {0}")]
    Intern(String),
}

impl AuthError {
    pub fn intern(msg: impl Into<String>) -> Self {
        Self::Intern(msg.into())
    }

    /// Gibt true zurueck wenn ein erneuter Aufruf sinnvoll sein kann
    pub fn ist_wiederholbar(&self) -> bool {
        matches!(self, Self::Persistenz(_) | Self::Benachrichtigung(_))
    }
}

/// Result-Alias fuer die Zugangs-Ausstellung
pub type AuthResult<T> = Result<T, AuthError>;
