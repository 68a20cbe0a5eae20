//! Drossel-Pruefung fuer die Zugangs-Ausstellung
//!
//! Innerhalb des Fensters nach einer Ausstellung wird kein neuer Code
//! erzeugt. Das verhindert E-Mail-Fluten und verraet nicht ueber die
//! Antwortzeit, ob gerade ein Code erzeugt wurde.

use chrono::{DateTime, Duration, Utc};

/// Mindestabstand in Sekunden zwischen zwei Ausstellungen fuer dieselbe Identitaet
pub const DROSSEL_FENSTER_SEKUNDEN: i64 = 60;

/// Groesstes einstellbares Fenster (ein Tag)
pub const DROSSEL_FENSTER_MAX_SEKUNDEN: i64 = 24 * 60 * 60;

/// Das Standard-Drosselfenster als `Duration`
pub fn drossel_fenster() -> Duration {
    Duration::seconds(DROSSEL_FENSTER_SEKUNDEN)
}

/// Prueft ob der letzte Zugang noch innerhalb des Fensters liegt
///
/// Ohne vorherige Ausstellung ist das Ergebnis `false`. Genau `fenster`
/// nach der Ausstellung gilt bereits als nicht mehr aktuell. Ein Zeitpunkt
/// in der Zukunft (Uhrversatz) zaehlt als aktuell.
pub fn kuerzlich_ausgestellt(
    erstellt_am: Option<DateTime<Utc>>,
    jetzt: DateTime<Utc>,
    fenster: Duration,
) -> bool {
    match erstellt_am {
        None => false,
        Some(erstellt_am) => jetzt - erstellt_am < fenster,
    }
}
