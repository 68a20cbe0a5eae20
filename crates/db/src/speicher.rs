//! In-Memory-Implementierung des IdentitaetRepository
//!
//! Haelt alle Identitaeten in einer HashMap (E-Mail -> Record). Ein einziger
//! `tokio::sync::Mutex` serialisiert alle Zugriffe, damit das bedingte
//! Schreiben von `save_credentials` atomar ist.

use std::collections::HashMap;

use chrono::Utc;
use knock_core::IdentitaetId;
use tokio::sync::Mutex;

use crate::error::DbError;
use crate::models::{IdentitaetRecord, Zugangsdaten};
use crate::repository::{DbResult, IdentitaetRepository};

/// In-Memory Identitaets-Speicher
#[derive(Debug, Default)]
pub struct SpeicherRepository {
    /// email -> Identitaet
    identitaeten: Mutex<HashMap<String, IdentitaetRecord>>,
}

impl SpeicherRepository {
    /// Erstellt einen leeren Speicher
    pub fn neu() -> Self {
        Self::default()
    }

    /// Legt eine vorbereitete Identitaet direkt ab (z.B. beim Import)
    pub async fn einfuegen(&self, record: IdentitaetRecord) {
        self.identitaeten
            .lock()
            .await
            .insert(record.email.clone(), record);
    }

    /// Anzahl der gespeicherten Identitaeten
    pub async fn anzahl(&self) -> usize {
        self.identitaeten.lock().await.len()
    }
}

impl IdentitaetRepository for SpeicherRepository {
    async fn find_by_email(&self, email: &str) -> DbResult<Option<IdentitaetRecord>> {
        Ok(self.identitaeten.lock().await.get(email).cloned())
    }

    async fn create(&self, email: &str) -> DbResult<IdentitaetRecord> {
        let mut identitaeten = self.identitaeten.lock().await;
        if identitaeten.contains_key(email) {
            return Err(DbError::Eindeutigkeit(format!(
                "E-Mail '{email}' bereits registriert"
            )));
        }

        let record = IdentitaetRecord::neu(email, Utc::now());
        identitaeten.insert(email.to_string(), record.clone());
        Ok(record)
    }

    async fn save_credentials(
        &self,
        identitaet: &IdentitaetRecord,
        zugang: &Zugangsdaten,
    ) -> DbResult<()> {
        let mut identitaeten = self.identitaeten.lock().await;
        let gespeichert = identitaeten
            .values_mut()
            .find(|r| r.id == identitaet.id)
            .ok_or_else(|| DbError::nicht_gefunden(identitaet.id.to_string()))?;

        if gespeichert.password_created_at != identitaet.password_created_at {
            return Err(DbError::konflikt(format!(
                "Zugang von {} wurde zwischenzeitlich neu ausgestellt",
                identitaet.id
            )));
        }

        gespeichert.zugang_setzen(zugang);
        Ok(())
    }

    async fn destroy_credentials(&self, id: IdentitaetId) -> DbResult<bool> {
        let mut identitaeten = self.identitaeten.lock().await;
        match identitaeten.values_mut().find(|r| r.id == id) {
            Some(record) if record.hat_zugang() => {
                record.zugang_entfernen();
                Ok(true)
            }
            Some(_) => Ok(false),
            None => Err(DbError::nicht_gefunden(id.to_string())),
        }
    }
}
