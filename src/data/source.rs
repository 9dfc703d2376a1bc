use std::path::{Path, PathBuf};

use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};
use thiserror::Error;

use super::model::{CellValue, Column, Dataset};
use super::queries::QuerySpec;

// ---------------------------------------------------------------------------
// QueryError – load-time failures
// ---------------------------------------------------------------------------

/// Failure while opening the store or executing a dataset query.  All loads
/// happen once at startup, so these are surfaced to the caller unretried.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("failed to open database {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("query '{name}' failed: {source}")]
    Execute {
        name: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("query '{name}' returned {actual} columns, expected {expected}")]
    ColumnCount {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
}

// ---------------------------------------------------------------------------
// DataSource – read-only SQLite connection
// ---------------------------------------------------------------------------

/// Wraps the SQLite connection the dashboard reads from.  Opened once at
/// startup; only ever used for SELECTs.
pub struct DataSource {
    conn: Connection,
}

impl DataSource {
    /// Open the database read-only.
    pub fn open(path: &Path) -> Result<Self, QueryError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|source| QueryError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { conn })
    }

    /// Wrap an already-open connection.  Used by tests with in-memory
    /// databases.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Execute one dataset query and materialize the result.
    ///
    /// SQLite NULLs become [`CellValue::Blank`] so missing metrics render as
    /// empty cells downstream.  Text trimming happens in the SQL itself.
    pub fn load(&self, spec: &QuerySpec) -> Result<Dataset, QueryError> {
        let mut stmt = self
            .conn
            .prepare(spec.sql)
            .map_err(|source| QueryError::Execute {
                name: spec.name,
                source,
            })?;

        let actual = stmt.column_count();
        if actual != spec.columns.len() {
            return Err(QueryError::ColumnCount {
                name: spec.name,
                expected: spec.columns.len(),
                actual,
            });
        }

        let n_cols = spec.columns.len();
        let mapped = stmt
            .query_map([], |row| {
                let mut cells = Vec::with_capacity(n_cols);
                for i in 0..n_cols {
                    cells.push(cell_from_sql(row.get_ref(i)?));
                }
                Ok(cells)
            })
            .map_err(|source| QueryError::Execute {
                name: spec.name,
                source,
            })?;

        let mut rows = Vec::new();
        for row in mapped {
            rows.push(row.map_err(|source| QueryError::Execute {
                name: spec.name,
                source,
            })?);
        }

        log::debug!("loaded dataset '{}': {} rows", spec.name, rows.len());

        Ok(Dataset {
            name: spec.name.to_string(),
            columns: spec
                .columns
                .iter()
                .map(|&(name, kind)| Column {
                    name: name.to_string(),
                    kind,
                })
                .collect(),
            rows,
        })
    }
}

fn cell_from_sql(value: ValueRef<'_>) -> CellValue {
    match value {
        ValueRef::Null => CellValue::Blank,
        ValueRef::Integer(i) => CellValue::Int(i),
        ValueRef::Real(f) => CellValue::Float(f),
        ValueRef::Text(t) => CellValue::Text(String::from_utf8_lossy(t).into_owned()),
        // Blobs never appear in the source tables; show them as blank
        // rather than a debug dump.
        ValueRef::Blob(_) => CellValue::Blank,
    }
}
