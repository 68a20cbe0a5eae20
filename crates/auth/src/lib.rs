//! knock-auth – Ausstellung von Einmal-Zugaengen
//!
//! Dieses Crate implementiert:
//! - Den `ZugangsAussteller` (Identitaet aufloesen, drosseln, Code erzeugen,
//!   hashen, speichern, versenden)
//! - Die Drossel-Pruefung fuer das 60-Sekunden-Fenster
//! - Kryptografisch sichere Erzeugung von Code, Salt und Korrelations-ID
//! - Die Kodierer-Schnittstelle samt Argon2id-Implementierung
//! - Die Sender-Schnittstelle fuer die Zustellung des Codes

pub mod config;
pub mod drossel;
pub mod error;
pub mod kodierer;
pub mod sender;
pub mod service;
pub mod zufall;

// Bequeme Re-Exporte
pub use config::AusstellerConfig;
pub use drossel::{
    drossel_fenster, kuerzlich_ausgestellt, DROSSEL_FENSTER_MAX_SEKUNDEN, DROSSEL_FENSTER_SEKUNDEN,
};
pub use error::{AuthError, AuthResult};
pub use kodierer::{Argon2Kodierer, GeheimnisKodierer};
pub use sender::BenachrichtigungsSender;
pub use service::ZugangsAussteller;
