//! Knock-Konfiguration
//!
//! Wird beim Start aus einer TOML-Datei geladen. Alle Felder haben
//! sinnvolle Standardwerte, sodass `knock` ohne Konfigurationsdatei
//! lauffaehig ist.

use serde::{Deserialize, Serialize};

use knock_auth::{AusstellerConfig, DROSSEL_FENSTER_MAX_SEKUNDEN};
use knock_db::DatabaseConfig;
use knock_observability::{log_format_gueltig, log_level_gueltig};

/// Vollstaendige Knock-Konfiguration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KnockConfig {
    /// Einstellungen des Ausstellers
    pub aussteller: AusstellerEinstellungen,
    /// Argon2id-Kosten
    pub kodierer: KodiererEinstellungen,
    /// Datenbank-Einstellungen
    pub datenbank: DatenbankEinstellungen,
    /// Logging-Einstellungen
    pub logging: LoggingEinstellungen,
}

/// Einstellungen des Ausstellers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AusstellerEinstellungen {
    /// Mindestabstand zwischen zwei Ausstellungen in Sekunden
    pub drossel_sekunden: i64,
    /// Unbekannte E-Mails ohne `--erstellen` anlegen
    pub erstellen_erlaubt: bool,
}

impl Default for AusstellerEinstellungen {
    fn default() -> Self {
        Self {
            drossel_sekunden: knock_auth::DROSSEL_FENSTER_SEKUNDEN,
            erstellen_erlaubt: false,
        }
    }
}

/// Argon2id-Kosten (Standard gemaess OWASP)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KodiererEinstellungen {
    /// Speicherbedarf in KiB
    pub speicher_kib: u32,
    /// Anzahl Durchlaeufe
    pub iterationen: u32,
    /// Anzahl Lanes
    pub parallelitaet: u32,
}

impl Default for KodiererEinstellungen {
    fn default() -> Self {
        Self {
            speicher_kib: 64 * 1024,
            iterationen: 3,
            parallelitaet: 1,
        }
    }
}

/// Datenbank-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatenbankEinstellungen {
    /// Verbindungs-URL
    pub url: String,
    /// Maximale Verbindungspool-Groesse
    pub max_verbindungen: u32,
    /// WAL-Modus fuer SQLite
    pub wal: bool,
}

impl Default for DatenbankEinstellungen {
    fn default() -> Self {
        Self {
            url: "sqlite://knock.db".into(),
            max_verbindungen: 5,
            wal: true,
        }
    }
}

/// Logging-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingEinstellungen {
    /// Log-Level: "trace", "debug", "info", "warn", "error"
    pub level: String,
    /// Format: "json" oder "text"
    pub format: String,
}

impl Default for LoggingEinstellungen {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "text".into(),
        }
    }
}

/// Herkunft der geladenen Konfiguration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigQuelle {
    /// Aus der angegebenen TOML-Datei gelesen
    Datei,
    /// Datei fehlt, Standardwerte
    Standard,
}

impl KnockConfig {
    /// Laedt die Konfiguration aus einer TOML-Datei.
    /// Gibt die Standardkonfiguration zurueck wenn die Datei nicht existiert.
    ///
    /// Geloggt wird hier nichts, das Logging ist zu diesem Zeitpunkt noch
    /// nicht eingerichtet. Der Aufrufer meldet eine fehlende Datei anhand
    /// der `ConfigQuelle`.
    pub fn laden(pfad: &str) -> anyhow::Result<(Self, ConfigQuelle)> {
        let (config, quelle) = match std::fs::read_to_string(pfad) {
            Ok(inhalt) => {
                let config = toml::from_str::<Self>(&inhalt)
                    .map_err(|e| anyhow::anyhow!("Konfigurationsfehler in '{pfad}': {e}"))?;
                (config, ConfigQuelle::Datei)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                (Self::default(), ConfigQuelle::Standard)
            }
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Konfigurationsdatei '{pfad}' nicht lesbar: {e}"
                ))
            }
        };

        config.pruefen()?;
        Ok((config, quelle))
    }

    /// Prueft Werte, die TOML allein nicht ausschliesst
    pub fn pruefen(&self) -> anyhow::Result<()> {
        let drossel = self.aussteller.drossel_sekunden;
        if !(0..=DROSSEL_FENSTER_MAX_SEKUNDEN).contains(&drossel) {
            anyhow::bail!(
                "aussteller.drossel_sekunden muss zwischen 0 und {DROSSEL_FENSTER_MAX_SEKUNDEN} liegen: {drossel}"
            );
        }
        if self.datenbank.max_verbindungen == 0 {
            anyhow::bail!("datenbank.max_verbindungen muss mindestens 1 sein");
        }
        if !log_level_gueltig(&self.logging.level) {
            anyhow::bail!(
                "logging.level '{}' ist ungueltig (trace, debug, info, warn, error)",
                self.logging.level
            );
        }
        if !log_format_gueltig(&self.logging.format) {
            anyhow::bail!(
                "logging.format '{}' ist ungueltig (text, json)",
                self.logging.format
            );
        }
        Ok(())
    }

    /// Einstellungen fuer den ZugangsAussteller
    pub fn aussteller_config(&self) -> AusstellerConfig {
        AusstellerConfig {
            drossel_sekunden: self.aussteller.drossel_sekunden,
        }
    }

    /// Einstellungen fuer die Datenbankverbindung
    pub fn datenbank_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.datenbank.url.clone(),
            max_verbindungen: self.datenbank.max_verbindungen,
            sqlite_wal: self.datenbank.wal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_config_ist_valide() {
        let cfg = KnockConfig::default();
        assert_eq!(cfg.aussteller.drossel_sekunden, 60);
        assert!(!cfg.aussteller.erstellen_erlaubt);
        assert_eq!(cfg.kodierer.speicher_kib, 65536);
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.pruefen().is_ok());
    }

    #[test]
    fn config_aus_toml_string() {
        let toml = r#"
            [aussteller]
            erstellen_erlaubt = true

            [datenbank]
            url = "sqlite://test.db"
        "#;
        let cfg: KnockConfig = toml::from_str(toml).unwrap();
        assert!(cfg.aussteller.erstellen_erlaubt);
        assert_eq!(cfg.datenbank.url, "sqlite://test.db");
        // Nicht angegebene Felder behalten Standardwerte
        assert_eq!(cfg.aussteller.drossel_sekunden, 60);
        assert_eq!(cfg.datenbank.max_verbindungen, 5);
    }

    #[test]
    fn umwandlung_in_crate_configs() {
        let mut cfg = KnockConfig::default();
        cfg.aussteller.drossel_sekunden = 120;
        cfg.datenbank.wal = false;

        assert_eq!(cfg.aussteller_config().drossel_sekunden, 120);
        let db = cfg.datenbank_config();
        assert!(!db.sqlite_wal);
        assert_eq!(db.url, "sqlite://knock.db");
    }

    #[test]
    fn negatives_fenster_abgelehnt() {
        let mut cfg = KnockConfig::default();
        cfg.aussteller.drossel_sekunden = -1;
        assert!(cfg.pruefen().is_err());
    }

    #[test]
    fn zu_grosses_fenster_abgelehnt() {
        let mut cfg = KnockConfig::default();
        cfg.aussteller.drossel_sekunden = DROSSEL_FENSTER_MAX_SEKUNDEN;
        assert!(cfg.pruefen().is_ok());

        cfg.aussteller.drossel_sekunden = DROSSEL_FENSTER_MAX_SEKUNDEN + 1;
        assert!(cfg.pruefen().is_err());

        cfg.aussteller.drossel_sekunden = i64::MAX;
        assert!(cfg.pruefen().is_err());
    }

    #[test]
    fn ungueltiges_logging_abgelehnt() {
        let mut cfg = KnockConfig::default();
        cfg.logging.level = "verbose".into();
        assert!(cfg.pruefen().is_err());

        let mut cfg = KnockConfig::default();
        cfg.logging.format = "xml".into();
        assert!(cfg.pruefen().is_err());
    }

    #[test]
    fn fehlende_datei_ergibt_standardwerte() {
        let (cfg, quelle) = KnockConfig::laden("/nicht/vorhanden/knock.toml").unwrap();
        assert_eq!(quelle, ConfigQuelle::Standard);
        assert_eq!(cfg.logging.format, "text");
    }

    #[test]
    fn datei_wird_gelesen_und_geprueft() {
        let verzeichnis = std::env::temp_dir().join(format!("knock-config-{}", std::process::id()));
        std::fs::create_dir_all(&verzeichnis).unwrap();

        let gueltig = verzeichnis.join("gueltig.toml");
        std::fs::write(&gueltig, "[aussteller]\ndrossel_sekunden = 90\n").unwrap();
        let (cfg, quelle) = KnockConfig::laden(gueltig.to_str().unwrap()).unwrap();
        assert_eq!(quelle, ConfigQuelle::Datei);
        assert_eq!(cfg.aussteller.drossel_sekunden, 90);

        let zu_gross = verzeichnis.join("zu_gross.toml");
        std::fs::write(&zu_gross, format!("[aussteller]\ndrossel_sekunden = {}\n", i64::MAX)).unwrap();
        assert!(KnockConfig::laden(zu_gross.to_str().unwrap()).is_err());

        std::fs::remove_dir_all(&verzeichnis).unwrap();
    }
}
