//! Gemeinsame Identifikationstypen fuer Knock
//!
//! IDs verwenden das Newtype-Pattern, damit eine Identitaets-ID nicht mit
//! einer beliebigen anderen UUID verwechselt werden kann.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Eindeutige ID einer Identitaet (eines anmeldbaren Benutzers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentitaetId(pub Uuid);

impl IdentitaetId {
    /// Erstellt eine neue zufaellige IdentitaetId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Gibt die innere UUID zurueck
    pub fn inner(&self) -> Uuid {
        self.0
    }
}

impl Default for IdentitaetId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for IdentitaetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "identitaet:{}", self.0)
    }
}
