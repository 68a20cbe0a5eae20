//! Zugangs-Aussteller fuer Knock
//!
//! Zentraler Einstiegspunkt fuer den Magic-Link-Login: loest die Identitaet
//! zu einer E-Mail auf, prueft das Drosselfenster, erzeugt einen neuen
//! Einmal-Code, speichert dessen Hash und uebergibt den Klartext an den Sender.
//!
//! Der Aussteller haelt keinen eigenen veraenderlichen Zustand. Die
//! Serialisierung pro Identitaet leistet der Speicher ueber das bedingte
//! Schreiben in `save_credentials`.

use std::sync::Arc;

use knock_core::Uhr;
use knock_db::{DbError, IdentitaetRecord, IdentitaetRepository, Zugangsdaten};

use crate::{
    config::AusstellerConfig,
    drossel::kuerzlich_ausgestellt,
    error::{AuthError, AuthResult},
    kodierer::GeheimnisKodierer,
    sender::BenachrichtigungsSender,
    zufall,
};

/// Zugangs-Aussteller – stellt Einmal-Codes aus und stellt sie zu
pub struct ZugangsAussteller<S, K, B, U>
where
    S: IdentitaetRepository,
    K: GeheimnisKodierer,
    B: BenachrichtigungsSender,
    U: Uhr,
{
    speicher: Arc<S>,
    kodierer: Arc<K>,
    sender: Arc<B>,
    uhr: Arc<U>,
    config: AusstellerConfig,
}

impl<S, K, B, U> ZugangsAussteller<S, K, B, U>
where
    S: IdentitaetRepository,
    K: GeheimnisKodierer,
    B: BenachrichtigungsSender,
    U: Uhr,
{
    /// Erstellt einen neuen ZugangsAussteller
    pub fn neu(
        speicher: Arc<S>,
        kodierer: Arc<K>,
        sender: Arc<B>,
        uhr: Arc<U>,
        config: AusstellerConfig,
    ) -> Self {
        Self {
            speicher,
            kodierer,
            sender,
            uhr,
            config,
        }
    }

    /// Stellt einen neuen Einmal-Zugang fuer `email` aus
    ///
    /// Ist die Identitaet unbekannt, wird sie nur bei `erstellen_erlaubt`
    /// angelegt, sonst `AuthError::IdentitaetNichtGefunden`. Liegt die letzte
    /// Ausstellung noch im Drosselfenster, endet der Aufruf ohne Fehler und
    /// ohne Wirkung. Schlaegt ein Schritt fehl, laeuft kein spaeterer Schritt:
    /// ohne Hash kein Speichern, ohne Speichern kein Versand.
    pub async fn ausstellen(&self, email: &str, erstellen_erlaubt: bool) -> AuthResult<()> {
        let identitaet = self.identitaet_aufloesen(email, erstellen_erlaubt).await?;

        let fenster = self.config.fenster()?;
        let jetzt = self.uhr.jetzt();
        if kuerzlich_ausgestellt(identitaet.password_created_at, jetzt, fenster) {
            tracing::debug!(
                identitaet_id = %identitaet.id,
                "Zugang kuerzlich ausgestellt, keine neue Ausstellung"
            );
            return Ok(());
        }

        let code = zufall::code_generieren()?;
        let salt = zufall::salt_generieren()?;
        let korrelations_id = zufall::korrelations_id_generieren()?;

        let password_hash = self
            .kodierer
            .kodieren(&identitaet, &code, &salt)
            .map_err(|e| AuthError::Kodierung(format!("{e:#}")))?;

        let zugang = Zugangsdaten {
            password_hash,
            password_salt: salt,
            erstellt_am: jetzt,
        };

        match self.speicher.save_credentials(&identitaet, &zugang).await {
            Ok(()) => {}
            Err(e) if e.ist_konflikt() => {
                // Ein paralleler Aufruf hat gerade ausgestellt und versendet
                tracing::debug!(
                    identitaet_id = %identitaet.id,
                    "Gleichzeitige Ausstellung erkannt, keine neue Ausstellung"
                );
                return Ok(());
            }
            Err(e) => {
                tracing::warn!(
                    identitaet_id = %identitaet.id,
                    fehler = %e,
                    "Speichern des Einmal-Zugangs fehlgeschlagen"
                );
                return Err(AuthError::Persistenz(e));
            }
        }

        tracing::info!(
            identitaet_id = %identitaet.id,
            korrelations_id = %korrelations_id,
            "Einmal-Zugang ausgestellt"
        );

        self.sender
            .senden(email, &code, &korrelations_id)
            .await
            .map_err(|e| {
                tracing::warn!(
                    identitaet_id = %identitaet.id,
                    korrelations_id = %korrelations_id,
                    fehler = %e,
                    "Zustellung des Einmal-Codes fehlgeschlagen"
                );
                AuthError::Benachrichtigung(format!("{e:#}"))
            })?;

        Ok(())
    }

    /// Entfernt den aktuellen Einmal-Zugang einer Identitaet
    ///
    /// Hash und Salt werden geloescht, der Ausstellungszeitpunkt bleibt.
    /// Ein Widerruf setzt das Drosselfenster also nicht zurueck.
    pub async fn widerrufen(&self, email: &str) -> AuthResult<()> {
        let identitaet = self
            .speicher
            .find_by_email(email)
            .await?
            .ok_or_else(|| AuthError::IdentitaetNichtGefunden(email.to_string()))?;

        let entfernt = self.speicher.destroy_credentials(identitaet.id).await?;
        tracing::info!(
            identitaet_id = %identitaet.id,
            entfernt = entfernt,
            "Einmal-Zugang widerrufen"
        );
        Ok(())
    }

    async fn identitaet_aufloesen(
        &self,
        email: &str,
        erstellen_erlaubt: bool,
    ) -> AuthResult<IdentitaetRecord> {
        if let Some(identitaet) = self.speicher.find_by_email(email).await? {
            return Ok(identitaet);
        }

        if !erstellen_erlaubt {
            return Err(AuthError::IdentitaetNichtGefunden(email.to_string()));
        }

        match self.speicher.create(email).await {
            Ok(identitaet) => {
                tracing::info!(identitaet_id = %identitaet.id, "Neue Identitaet angelegt");
                Ok(identitaet)
            }
            // Parallel angelegt: den Datensatz des anderen Aufrufs verwenden
            Err(e) if e.ist_eindeutigkeit() => self
                .speicher
                .find_by_email(email)
                .await?
                .ok_or_else(|| AuthError::Persistenz(e)),
            Err(e) => Err(e.into()),
        }
    }
}
