//! Diary repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide the persistence boundary (`insert`, `update`, `fetch_all`, `get`,
//!   `delete`) over the `diaries` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `insert_entry` never overwrites; `update_entry` never inserts, so a
//!   deleted ID cannot come back through an update.
//! - `created_at`/`updated_at` are epoch milliseconds from `now_epoch_ms`.
//! - `fetch_all` is ordered by `date DESC, uuid ASC`.
//! - `delete_entry` is a hard delete and reports unknown IDs as `NotFound`.
//! - Read paths reject malformed persisted IDs instead of masking them.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::diary::{now_epoch_ms, DiaryEntry, DiaryId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const DIARY_SELECT_SQL: &str = "SELECT
    uuid,
    title,
    body,
    date
FROM diaries";

const REQUIRED_DIARY_COLUMNS: &[&str] = &["uuid", "title", "body", "date", "created_at", "updated_at"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for diary persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(DiaryId),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "diary entry not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted diary data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection is not migrated: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{table}.{column}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence boundary for diary entries.
pub trait DiaryRepository {
    /// Inserts a new entry; an already stored ID is a constraint failure.
    fn insert_entry(&self, entry: &DiaryEntry) -> RepoResult<()>;
    /// Replaces `title`/`body`/`date` of a stored entry.
    fn update_entry(&self, entry: &DiaryEntry) -> RepoResult<()>;
    /// Returns every stored entry, newest `date` first.
    fn fetch_all(&self) -> RepoResult<Vec<DiaryEntry>>;
    /// Gets one entry by ID.
    fn get_entry(&self, id: DiaryId) -> RepoResult<Option<DiaryEntry>>;
    /// Permanently removes one entry.
    fn delete_entry(&self, id: DiaryId) -> RepoResult<()>;
}

/// SQLite-backed diary repository.
pub struct SqliteDiaryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDiaryRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` does not match
    ///   the latest migration.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema
    ///   does not have the expected shape.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl DiaryRepository for SqliteDiaryRepository<'_> {
    fn insert_entry(&self, entry: &DiaryEntry) -> RepoResult<()> {
        let now = now_epoch_ms();
        self.conn.execute(
            "INSERT INTO diaries (uuid, title, body, date, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5);",
            params![
                entry.id.to_string(),
                entry.title.as_str(),
                entry.body.as_str(),
                entry.date,
                now,
            ],
        )?;
        Ok(())
    }

    fn update_entry(&self, entry: &DiaryEntry) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE diaries
             SET
                title = ?2,
                body = ?3,
                date = ?4,
                updated_at = ?5
             WHERE uuid = ?1;",
            params![
                entry.id.to_string(),
                entry.title.as_str(),
                entry.body.as_str(),
                entry.date,
                now_epoch_ms(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(entry.id));
        }

        Ok(())
    }

    fn fetch_all(&self) -> RepoResult<Vec<DiaryEntry>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DIARY_SELECT_SQL} ORDER BY date DESC, uuid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut entries = Vec::new();

        while let Some(row) = rows.next()? {
            entries.push(parse_diary_row(row)?);
        }

        Ok(entries)
    }

    fn get_entry(&self, id: DiaryId) -> RepoResult<Option<DiaryEntry>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DIARY_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_diary_row(row)?));
        }

        Ok(None)
    }

    fn delete_entry(&self, id: DiaryId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM diaries WHERE uuid = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_diary_row(row: &Row<'_>) -> RepoResult<DiaryEntry> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in diaries.uuid"))
    })?;

    Ok(DiaryEntry {
        id,
        title: row.get("title")?,
        body: row.get("body")?,
        date: row.get("date")?,
    })
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = current_user_version(conn)?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "diaries")? {
        return Err(RepoError::MissingRequiredTable("diaries"));
    }

    for &column in REQUIRED_DIARY_COLUMNS {
        if !table_has_column(conn, "diaries", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "diaries",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
