//! knock – Einstiegspunkt
//!
//! Liest die Argumente, laedt die Konfiguration, initialisiert das Logging
//! und stellt einen Einmal-Zugang aus (oder widerruft ihn).

use anyhow::Result;
use knock_cli::{
    aufruf::Befehl,
    config::{ConfigQuelle, KnockConfig},
    Knock,
};
use knock_observability::logging_initialisieren;

#[tokio::main]
async fn main() -> Result<()> {
    let befehl = Befehl::aus_umgebung();

    // Konfigurationsdatei-Pfad aus Umgebungsvariable oder Standard
    let config_pfad = std::env::var("KNOCK_CONFIG").unwrap_or_else(|_| "knock.toml".into());

    // Konfiguration laden (Standardwerte falls Datei fehlt)
    let (config, quelle) = KnockConfig::laden(&config_pfad)?;

    logging_initialisieren(&config.logging.level, &config.logging.format);

    if quelle == ConfigQuelle::Standard {
        tracing::warn!(
            pfad = %config_pfad,
            "Konfigurationsdatei nicht gefunden, verwende Standardwerte"
        );
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_pfad,
        "knock gestartet"
    );

    Knock::neu(config).ausfuehren(befehl).await
}
