//! Zeitquelle fuer Knock
//!
//! Alle Zeitvergleiche (insbesondere das Drosselfenster) laufen ueber den
//! `Uhr`-Trait statt ueber `Utc::now()` direkt. In Tests wird eine
//! `FesteUhr` eingesetzt, die nur auf Anweisung weiterlaeuft.

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

/// Liefert den aktuellen Zeitpunkt
pub trait Uhr: Send + Sync {
    fn jetzt(&self) -> DateTime<Utc>;
}

/// Echte Systemuhr
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUhr;

impl Uhr for SystemUhr {
    fn jetzt(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manuell gesteuerte Uhr fuer deterministische Tests
#[derive(Debug)]
pub struct FesteUhr {
    zeitpunkt: Mutex<DateTime<Utc>>,
}

impl FesteUhr {
    /// Erstellt eine Uhr, die auf `zeitpunkt` steht
    pub fn neu(zeitpunkt: DateTime<Utc>) -> Self {
        Self {
            zeitpunkt: Mutex::new(zeitpunkt),
        }
    }

    /// Stellt die Uhr um `dauer` vor
    pub fn vorstellen(&self, dauer: Duration) {
        *self.zeitpunkt.lock() += dauer;
    }

    /// Setzt die Uhr auf einen festen Zeitpunkt
    pub fn setzen(&self, zeitpunkt: DateTime<Utc>) {
        *self.zeitpunkt.lock() = zeitpunkt;
    }
}

impl Default for FesteUhr {
    fn default() -> Self {
        Self::neu(Utc::now())
    }
}

impl Uhr for FesteUhr {
    fn jetzt(&self) -> DateTime<Utc> {
        *self.zeitpunkt.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feste_uhr_steht_still() {
        let start = Utc::now();
        let uhr = FesteUhr::neu(start);
        assert_eq!(uhr.jetzt(), start);
        assert_eq!(uhr.jetzt(), start);
    }

    #[test]
    fn feste_uhr_vorstellen() {
        let start = Utc::now();
        let uhr = FesteUhr::neu(start);
        uhr.vorstellen(Duration::seconds(61));
        assert_eq!(uhr.jetzt() - start, Duration::seconds(61));
    }

    #[test]
    fn feste_uhr_setzen() {
        let uhr = FesteUhr::default();
        let ziel = DateTime::<Utc>::UNIX_EPOCH;
        uhr.setzen(ziel);
        assert_eq!(uhr.jetzt(), ziel);
    }

    #[test]
    fn system_uhr_laeuft_vorwaerts() {
        let uhr = SystemUhr;
        let a = uhr.jetzt();
        let b = uhr.jetzt();
        assert!(b >= a);
    }
}
