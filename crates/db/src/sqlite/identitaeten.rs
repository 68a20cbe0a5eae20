//! SQLite-Implementierung des IdentitaetRepository

use chrono::{DateTime, SecondsFormat, Utc};
use knock_core::IdentitaetId;
use uuid::Uuid;

use crate::error::DbError;
use crate::models::{IdentitaetRecord, Zugangsdaten};
use crate::repository::{DbResult, IdentitaetRepository};
use crate::sqlite::pool::SqliteDb;

const SPALTEN: &str =
    "id, email, password_hash, password_salt, password_created_at, created_at";

impl IdentitaetRepository for SqliteDb {
    async fn find_by_email(&self, email: &str) -> DbResult<Option<IdentitaetRecord>> {
        let row = sqlx::query(&format!(
            "SELECT {SPALTEN} FROM identitaeten WHERE email = ?"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_identitaet(&r)).transpose()
    }

    async fn create(&self, email: &str) -> DbResult<IdentitaetRecord> {
        let record = IdentitaetRecord::neu(email, Utc::now());

        sqlx::query("INSERT INTO identitaeten (id, email, created_at) VALUES (?, ?, ?)")
            .bind(record.id.inner().to_string())
            .bind(email)
            .bind(zeit_formatieren(record.created_at))
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if ist_unique_verletzung(&e) {
                    DbError::Eindeutigkeit(format!("E-Mail '{email}' bereits registriert"))
                } else {
                    DbError::Sqlx(e)
                }
            })?;

        Ok(record)
    }

    async fn save_credentials(
        &self,
        identitaet: &IdentitaetRecord,
        zugang: &Zugangsdaten,
    ) -> DbResult<()> {
        // Ein einzelnes UPDATE: Hash, Salt und Zeitpunkt werden gemeinsam
        // geschrieben, und nur wenn der gelesene Zeitpunkt noch aktuell ist.
        let affected = sqlx::query(
            "UPDATE identitaeten
             SET password_hash = ?, password_salt = ?, password_created_at = ?
             WHERE id = ? AND password_created_at IS ?",
        )
        .bind(&zugang.password_hash)
        .bind(&zugang.password_salt)
        .bind(zeit_formatieren(zugang.erstellt_am))
        .bind(identitaet.id.inner().to_string())
        .bind(identitaet.password_created_at.map(zeit_formatieren))
        .execute(&self.pool)
        .await?
        .rows_affected();

        if affected > 0 {
            return Ok(());
        }

        if self.existiert(identitaet.id).await? {
            Err(DbError::konflikt(format!(
                "Zugang von {} wurde zwischenzeitlich neu ausgestellt",
                identitaet.id
            )))
        } else {
            Err(DbError::nicht_gefunden(identitaet.id.to_string()))
        }
    }

    async fn destroy_credentials(&self, id: IdentitaetId) -> DbResult<bool> {
        // password_created_at bleibt stehen, sonst wuerde ein Widerruf die Drossel aufheben
        let affected = sqlx::query(
            "UPDATE identitaeten
             SET password_hash = NULL, password_salt = NULL
             WHERE id = ? AND password_hash IS NOT NULL",
        )
        .bind(id.inner().to_string())
        .execute(&self.pool)
        .await?
        .rows_affected();

        if affected > 0 {
            return Ok(true);
        }
        if self.existiert(id).await? {
            Ok(false)
        } else {
            Err(DbError::nicht_gefunden(id.to_string()))
        }
    }
}

impl SqliteDb {
    async fn existiert(&self, id: IdentitaetId) -> DbResult<bool> {
        Ok(sqlx::query("SELECT 1 FROM identitaeten WHERE id = ?")
            .bind(id.inner().to_string())
            .fetch_optional(&self.pool)
            .await?
            .is_some())
    }
}

/// Prueft ueber den Datenbankfehler selbst, ob ein UNIQUE-Constraint verletzt wurde
fn ist_unique_verletzung(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}

/// Feste Darstellung mit Nanosekunden, damit der gelesene Zeitpunkt beim
/// bedingten Schreiben byte-genau wieder getroffen wird
fn zeit_formatieren(zeit: DateTime<Utc>) -> String {
    zeit.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn zeit_parsen(spalte: &str, wert: &str) -> DbResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(wert)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DbError::intern(format!("Ungueltige {spalte} '{wert}': {e}")))
}

fn row_to_identitaet(row: &sqlx::sqlite::SqliteRow) -> DbResult<IdentitaetRecord> {
    use sqlx::Row as _;

    let id_str: String = row.try_get("id")?;
    let id = Uuid::parse_str(&id_str)
        .map_err(|e| DbError::intern(format!("Ungueltige UUID '{id_str}': {e}")))?;

    let created_at: String = row.try_get("created_at")?;
    let created_at = zeit_parsen("created_at", &created_at)?;

    let password_created_at: Option<String> = row.try_get("password_created_at")?;
    let password_created_at = password_created_at
        .as_deref()
        .map(|s| zeit_parsen("password_created_at", s))
        .transpose()?;

    Ok(IdentitaetRecord {
        id: IdentitaetId(id),
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        password_salt: row.try_get("password_salt")?,
        password_created_at,
        created_at,
    })
}
