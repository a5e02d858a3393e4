//! SQLite persistence for submitted applications.
//!
//! A connection is opened per operation, matching the request-scoped access
//! pattern of the handlers. Each insert batch runs in one transaction, so a
//! request either stores all of its records or none.

use super::StoreError;
use common::model::application::{ApplicationRecord, APPLICATIONS_TABLE};
use rusqlite::{params, Connection};
use std::path::PathBuf;
use uuid::Uuid;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS scholarship_applications (
    id                TEXT PRIMARY KEY,
    organization_name TEXT NOT NULL,
    contact_person    TEXT NOT NULL,
    email             TEXT NOT NULL,
    phone             TEXT NOT NULL,
    num_students      INTEGER,
    grade_level       TEXT NOT NULL,
    reason            TEXT NOT NULL,
    document_url      TEXT,
    confirmed         INTEGER NOT NULL,
    created_at        TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);";

#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open(&self) -> Result<Connection, StoreError> {
        Ok(Connection::open(&self.path)?)
    }

    pub fn init(&self) -> Result<(), StoreError> {
        self.open()?.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Whether `table` is one this store accepts inserts for.
    pub fn has_table(&self, table: &str) -> bool {
        table == APPLICATIONS_TABLE
    }

    /// Inserts every record and returns the generated row ids in order.
    pub fn insert_applications(
        &self,
        records: &[ApplicationRecord],
    ) -> Result<Vec<String>, StoreError> {
        let mut conn = self.open()?;
        let tx = conn.transaction()?;
        let mut ids = Vec::with_capacity(records.len());
        {
            let mut stmt = tx.prepare(
                "INSERT INTO scholarship_applications (
                    id, organization_name, contact_person, email, phone,
                    num_students, grade_level, reason, document_url, confirmed
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            )?;
            for record in records {
                let id = Uuid::new_v4().to_string();
                stmt.execute(params![
                    &id,
                    &record.organization_name,
                    &record.contact_person,
                    &record.email,
                    &record.phone,
                    record.num_students,
                    &record.grade_level,
                    &record.reason,
                    &record.document_url,
                    record.confirmed,
                ])?;
                ids.push(id);
            }
        }
        tx.commit()?;
        Ok(ids)
    }
}

#[cfg(test)]
impl Database {
    /// Reads back a stored application by id.
    pub fn get_application(&self, id: &str) -> Result<Option<ApplicationRecord>, StoreError> {
        let conn = self.open()?;
        let result = conn.query_row(
            "SELECT organization_name, contact_person, email, phone, num_students,
                    grade_level, reason, document_url, confirmed
             FROM scholarship_applications WHERE id = ?1",
            params![id],
            |row| {
                Ok(ApplicationRecord {
                    organization_name: row.get(0)?,
                    contact_person: row.get(1)?,
                    email: row.get(2)?,
                    phone: row.get(3)?,
                    num_students: row.get(4)?,
                    grade_level: row.get(5)?,
                    reason: row.get(6)?,
                    document_url: row.get(7)?,
                    confirmed: row.get(8)?,
                })
            },
        );

        match result {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::Database(e)),
        }
    }

    pub fn count_applications(&self) -> Result<usize, StoreError> {
        let conn = self.open()?;
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM scholarship_applications", [], |row| {
                row.get(0)
            })?;
        Ok(count as usize)
    }
}
