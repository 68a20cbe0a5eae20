//! Konsolen-Zustellung fuer Entwicklung und Betrieb ohne Mailserver

use knock_auth::BenachrichtigungsSender;

/// Schreibt den Einmal-Code auf stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct KonsolenSender;

impl KonsolenSender {
    /// Text, der fuer eine Zustellung ausgegeben wird
    pub fn nachricht(email: &str, code: &str, korrelations_id: &str) -> String {
        format!("[{korrelations_id}] Einmal-Code fuer {email}: {code}")
    }
}

impl BenachrichtigungsSender for KonsolenSender {
    async fn senden(&self, email: &str, code: &str, korrelations_id: &str) -> anyhow::Result<()> {
        println!("{}", Self::nachricht(email, code, korrelations_id));
        Ok(())
    }
}
