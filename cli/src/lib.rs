//! knock-cli – Bibliotheks-Root
//!
//! Deklariert die Module des `knock`-Programms und stellt den
//! Einstiegspunkt fuer Tests bereit.

pub mod aufruf;
pub mod config;
pub mod sender;

use std::sync::Arc;

use anyhow::Result;
use aufruf::Befehl;
use config::KnockConfig;
use knock_auth::{Argon2Kodierer, ZugangsAussteller};
use knock_core::SystemUhr;
use knock_db::SqliteDb;
use sender::KonsolenSender;

/// Haelt die geladene Konfiguration zusammen
pub struct Knock {
    pub config: KnockConfig,
}

impl Knock {
    /// Erstellt eine neue Knock-Instanz aus der gegebenen Konfiguration
    pub fn neu(config: KnockConfig) -> Self {
        Self { config }
    }

    /// Fuehrt einen Befehl aus
    ///
    /// Reihenfolge:
    /// 1. Datenbank oeffnen (inkl. Migrationen)
    /// 2. Argon2id-Kodierer mit den konfigurierten Kosten erstellen
    /// 3. Aussteller zusammensetzen und Befehl ausfuehren
    pub async fn ausfuehren(&self, befehl: Befehl) -> Result<()> {
        let db = SqliteDb::oeffnen(&self.config.datenbank_config()).await?;

        let k = &self.config.kodierer;
        let kodierer = Argon2Kodierer::neu(k.speicher_kib, k.iterationen, k.parallelitaet)?;

        let aussteller = ZugangsAussteller::neu(
            Arc::new(db),
            Arc::new(kodierer),
            Arc::new(KonsolenSender),
            Arc::new(SystemUhr),
            self.config.aussteller_config(),
        );

        match befehl {
            Befehl::Ausstellen { email, erstellen } => {
                let erstellen = erstellen || self.config.aussteller.erstellen_erlaubt;
                aussteller.ausstellen(&email, erstellen).await?;
            }
            Befehl::Widerrufen { email } => {
                aussteller.widerrufen(&email).await?;
            }
        }

        Ok(())
    }
}
