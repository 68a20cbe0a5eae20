//! Kodierung des Einmal-Codes
//!
//! Der Aussteller speichert nie den Klartext-Code, sondern nur das Ergebnis
//! eines `GeheimnisKodierer`. Mitgeliefert wird ein Argon2id-Kodierer, der
//! das pro Ausstellung erzeugte Salt verwendet und einen PHC-String liefert.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use knock_db::IdentitaetRecord;

use crate::error::{AuthError, AuthResult};

/// Wandelt einen Klartext-Code in einen speicherbaren Hash um
pub trait GeheimnisKodierer: Send + Sync {
    /// Kodiert `code` fuer `identitaet` mit dem Salt dieser Ausstellung
    fn kodieren(
        &self,
        identitaet: &IdentitaetRecord,
        code: &str,
        salt: &str,
    ) -> anyhow::Result<String>;
}

/// Argon2id-Kodierer
pub struct Argon2Kodierer {
    argon2: Argon2<'static>,
}

impl Argon2Kodierer {
    /// Erstellt einen Kodierer mit eigenen Kosten-Parametern
    ///
    /// - `speicher_kib`: Speicherbedarf in KiB
    /// - `iterationen`: Anzahl Durchlaeufe
    /// - `parallelitaet`: Anzahl Lanes
    pub fn neu(speicher_kib: u32, iterationen: u32, parallelitaet: u32) -> AuthResult<Self> {
        let params = Params::new(speicher_kib, iterationen, parallelitaet, None)
            .map_err(|e| AuthError::Kodierung(format!("Argon2-Parameter ungueltig: {e}")))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Kodierer mit Parametern gemaess OWASP-Empfehlungen
    ///
    /// - Speicher: 64 MiB
    /// - Iterationen: 3
    /// - Parallelismus: 1
    pub fn standard() -> AuthResult<Self> {
        Self::neu(64 * 1024, 3, 1)
    }

    /// Prueft einen Klartext-Code gegen einen gespeicherten PHC-Hash
    ///
    /// Wird vom Aussteller nicht benutzt; fuer die Anmeldung in der
    /// einbettenden Anwendung.
    pub fn verifizieren(&self, code: &str, hash: &str) -> AuthResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AuthError::Kodierung(format!("Ungueltiges Hash-Format: {e}")))?;

        match self.argon2.verify_password(code.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::Kodierung(e.to_string())),
        }
    }
}

impl GeheimnisKodierer for Argon2Kodierer {
    fn kodieren(
        &self,
        identitaet: &IdentitaetRecord,
        code: &str,
        salt: &str,
    ) -> anyhow::Result<String> {
        // PHC-Salts sind Base64 ohne Padding
        let salt = SaltString::from_b64(salt.trim_end_matches('='))
            .map_err(|e| anyhow::anyhow!("Salt fuer {} ungueltig: {e}", identitaet.id))?;

        self.argon2
            .hash_password(code.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| anyhow::anyhow!("Argon2-Hashing fuer {} fehlgeschlagen: {e}", identitaet.id))
    }
}
