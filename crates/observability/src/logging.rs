//! Structured Logging Setup via tracing-subscriber
//!
//! Konfigurierbar per Umgebungsvariable:
//! - `KNOCK_LOG_LEVEL`: Log-Level oder EnvFilter-Ausdruck, Standard: info
//! - `KNOCK_LOG_FORMAT`: Format (text/json), Standard: text
//!
//! Einmal-Codes, Salts und Hashes werden nie geloggt; Ausstellungen sind
//! ueber `identitaet_id` und `korrelations_id` nachvollziehbar.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialisiert das Logging-System.
///
/// Umgebungsvariablen haben Vorrang vor den uebergebenen Werten.
/// Faellt auf `info` / `text` zurueck wenn beides ungueltig ist.
/// Ein zweiter Aufruf (z.B. in Tests) wird ignoriert.
pub fn logging_initialisieren(level: &str, format: &str) {
    let filter = log_level_aus_env()
        .and_then(|env| EnvFilter::try_new(env).ok())
        .or_else(|| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    let format_env = log_format_aus_env().unwrap_or_else(|| format.to_string());

    let ergebnis = match format_env.as_str() {
        "json" => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_current_span(true)
            .try_init(),
        _ => fmt().with_env_filter(filter).with_target(true).try_init(),
    };

    if ergebnis.is_err() {
        tracing::debug!("Logging war bereits initialisiert");
    }
}

/// Gibt den Log-Level aus der Umgebung zurueck, falls gesetzt
pub fn log_level_aus_env() -> Option<String> {
    std::env::var("KNOCK_LOG_LEVEL").ok()
}

/// Gibt das Log-Format aus der Umgebung zurueck, falls gesetzt
pub fn log_format_aus_env() -> Option<String> {
    std::env::var("KNOCK_LOG_FORMAT").ok()
}

/// Validiert ob ein Log-Level-String gueltig ist.
pub fn log_level_gueltig(level: &str) -> bool {
    matches!(level, "trace" | "debug" | "info" | "warn" | "error")
}

/// Validiert ob ein Log-Format-String gueltig ist.
pub fn log_format_gueltig(format: &str) -> bool {
    matches!(format, "text" | "json")
}
