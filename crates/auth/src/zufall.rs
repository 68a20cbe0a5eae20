//! Zufallswerte fuer die Zugangs-Ausstellung
//!
//! Code, Salt und die Saat der Korrelations-ID stammen ausschliesslich aus
//! dem Betriebssystem-CSPRNG (`OsRng`). Jeder Wert wird aus eigenen Bytes
//! erzeugt, es gibt keine Ableitung untereinander.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};

use crate::error::{AuthError, AuthResult};

/// Laenge des Einmal-Codes in Bytes (256 Bit, 44 Zeichen Base64)
pub const CODE_BYTES: usize = 32;

/// Laenge des Salts in Bytes (24 Zeichen Base64)
pub const SALT_BYTES: usize = 16;

/// Laenge der Saat fuer die Korrelations-ID in Bytes
const KORRELATION_SAAT_BYTES: usize = 16;

/// Laenge der Korrelations-ID (Hex-Zeichen)
pub const KORRELATIONS_ID_LAENGE: usize = 8;

fn zufallsbytes<const N: usize>() -> AuthResult<[u8; N]> {
    let mut bytes = [0u8; N];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| AuthError::intern(format!("Zufallsquelle nicht verfuegbar: {e}")))?;
    Ok(bytes)
}

/// Erzeugt einen neuen Einmal-Code (Base64 mit Padding)
pub fn code_generieren() -> AuthResult<String> {
    Ok(STANDARD.encode(zufallsbytes::<CODE_BYTES>()?))
}

/// Erzeugt ein neues Salt (Base64 mit Padding)
pub fn salt_generieren() -> AuthResult<String> {
    Ok(STANDARD.encode(zufallsbytes::<SALT_BYTES>()?))
}

/// Erzeugt eine Korrelations-ID fuer die Zustellung
///
/// Kein Geheimnis: sie dient nur der Zuordnung von Zustellung und Logs.
pub fn korrelations_id_generieren() -> AuthResult<String> {
    let saat = zufallsbytes::<KORRELATION_SAAT_BYTES>()?;
    let digest = Sha256::digest(saat);
    Ok(digest
        .iter()
        .take(KORRELATIONS_ID_LAENGE / 2)
        .map(|b| format!("{b:02x}"))
        .collect())
}
