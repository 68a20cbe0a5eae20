//! Zustellung des Einmal-Codes
//!
//! Wie der Code den Benutzer erreicht (E-Mail, SMS, Konsole), entscheidet die
//! einbettende Anwendung. Der Aussteller uebergibt den Klartext-Code genau
//! einmal an `senden` und behaelt ihn danach nicht.

/// Stellt einen Einmal-Code an eine E-Mail-Adresse zu
#[allow(async_fn_in_trait)]
pub trait BenachrichtigungsSender: Send + Sync {
    /// Sendet `code` an `email`
    ///
    /// `korrelations_id` ist kein Geheimnis und darf in Betreffzeilen oder
    /// Logs auftauchen, um Zustellung und Ausstellung zuzuordnen.
    async fn senden(&self, email: &str, code: &str, korrelations_id: &str) -> anyhow::Result<()>;
}
