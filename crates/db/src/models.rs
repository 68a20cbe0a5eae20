//! Datenbankmodelle fuer Knock
//!
//! Diese Typen repraesentieren Datensaetze aus dem Identitaets-Speicher.
//! Sie dienen als reine Datenuebertragungsobjekte zwischen Speicher und
//! Aussteller.

use chrono::{DateTime, Utc};
use knock_core::IdentitaetId;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identitaeten
// ---------------------------------------------------------------------------

/// Identitaets-Datensatz aus dem Speicher
///
/// `password_hash`, `password_salt` und `password_created_at` bilden den
/// aktuellen Einmal-Zugang. Vor der ersten Ausstellung sind alle drei `None`.
/// Nach einem Widerruf fehlen Hash und Salt, `password_created_at` bleibt
/// stehen und waechst nur mit jeder Ausstellung.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentitaetRecord {
    pub id: IdentitaetId,
    pub email: String,
    pub password_hash: Option<String>,
    pub password_salt: Option<String>,
    pub password_created_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl IdentitaetRecord {
    /// Erstellt eine neue Identitaet ohne Zugang
    pub fn neu(email: impl Into<String>, jetzt: DateTime<Utc>) -> Self {
        Self {
            id: IdentitaetId::new(),
            email: email.into(),
            password_hash: None,
            password_salt: None,
            password_created_at: None,
            created_at: jetzt,
        }
    }

    /// Gibt `true` zurueck wenn ein Einmal-Zugang hinterlegt ist
    pub fn hat_zugang(&self) -> bool {
        self.password_hash.is_some()
    }

    /// Uebernimmt einen neuen Zugang (Hash, Salt und Zeitpunkt zusammen)
    pub fn zugang_setzen(&mut self, zugang: &Zugangsdaten) {
        self.password_hash = Some(zugang.password_hash.clone());
        self.password_salt = Some(zugang.password_salt.clone());
        self.password_created_at = Some(zugang.erstellt_am);
    }

    /// Entfernt Hash und Salt; der Ausstellungszeitpunkt bleibt erhalten
    pub fn zugang_entfernen(&mut self) {
        self.password_hash = None;
        self.password_salt = None;
    }
}

/// Ein neu ausgestellter Einmal-Zugang
///
/// Hash und Salt existieren nur gemeinsam und werden als Einheit gespeichert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zugangsdaten {
    pub password_hash: String,
    pub password_salt: String,
    pub erstellt_am: DateTime<Utc>,
}
