//! Einstellungen des Ausstellers

use chrono::Duration;

use crate::drossel::DROSSEL_FENSTER_SEKUNDEN;
use crate::error::{AuthError, AuthResult};

/// Einstellungen fuer den `ZugangsAussteller`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AusstellerConfig {
    /// Mindestabstand zwischen zwei Ausstellungen in Sekunden
    pub drossel_sekunden: i64,
}

impl AusstellerConfig {
    /// Das Drosselfenster als `Duration`
    ///
    /// Werte ausserhalb des Bereichs von `Duration` ergeben einen Fehler.
    pub fn fenster(&self) -> AuthResult<Duration> {
        Duration::try_seconds(self.drossel_sekunden).ok_or_else(|| {
            AuthError::intern(format!(
                "Drosselfenster von {} Sekunden nicht darstellbar",
                self.drossel_sekunden
            ))
        })
    }
}

impl Default for AusstellerConfig {
    fn default() -> Self {
        Self {
            drossel_sekunden: DROSSEL_FENSTER_SEKUNDEN,
        }
    }
}
