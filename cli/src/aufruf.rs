//! Kommandozeilen-Argumente von `knock`
//!
//! ```text
//! knock [--erstellen] <email>
//! knock --widerrufen <email>
//! ```

use clap::Parser;

/// Argumente wie sie clap liest
#[derive(Debug, Parser)]
#[command(name = "knock", about = "Einmal-Zugang per E-Mail ausstellen")]
#[command(version)]
pub struct Argumente {
    /// E-Mail der Identitaet
    pub email: String,

    /// Unbekannte E-Mail als neue Identitaet anlegen
    #[arg(long, conflicts_with = "widerrufen")]
    pub erstellen: bool,

    /// Aktuellen Einmal-Zugang loeschen statt einen neuen auszustellen
    #[arg(long)]
    pub widerrufen: bool,
}

/// Ein auszufuehrender Befehl
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Befehl {
    /// Einmal-Zugang ausstellen und zustellen
    Ausstellen { email: String, erstellen: bool },
    /// Aktuellen Einmal-Zugang loeschen
    Widerrufen { email: String },
}

impl From<Argumente> for Befehl {
    fn from(a: Argumente) -> Self {
        if a.widerrufen {
            Self::Widerrufen { email: a.email }
        } else {
            Self::Ausstellen {
                email: a.email,
                erstellen: a.erstellen,
            }
        }
    }
}

impl Befehl {
    /// Liest den Befehl aus den Prozess-Argumenten; beendet bei Fehlern mit Hilfetext
    pub fn aus_umgebung() -> Self {
        Argumente::parse().into()
    }

    /// Liest den Befehl aus einer Argumentliste (erster Eintrag ist der Programmname)
    pub fn parsen<I, S>(argumente: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<std::ffi::OsString> + Clone,
    {
        Argumente::try_parse_from(argumente).map(Into::into)
    }
}
