// ABOUTME: SQLite-backed hierarchical document store addressed by collection path and document ID
// ABOUTME: Provides get, set, add, list, delete, and recursive collection copy over JSON documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 VitalMotion Contributors

//! # Document Store
//!
//! Documents live at `collection/id`, where a collection path alternates
//! collection and document segments (`users/{uid}/exercises`). Every document
//! is a JSON object stored as text in one `documents` table keyed by
//! `(collection, id)`. Sub-collections of a document are simply collections
//! whose path starts with that document's path.

use std::path::Path;
use std::str::FromStr;

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use tracing::{debug, info};
use uuid::Uuid;

use crate::constants::database::MAX_CONNECTIONS;
use crate::errors::{AppError, AppResult};

const CREATE_DOCUMENTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS documents (
    collection TEXT NOT NULL,
    id TEXT NOT NULL,
    data TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    PRIMARY KEY (collection, id)
)";

/// A stored document with its ID
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredDocument {
    /// Document ID within its collection
    pub id: String,
    /// JSON body
    pub data: Value,
}

impl StoredDocument {
    /// JSON body with the document ID added as `id`
    #[must_use]
    pub fn into_value(self) -> Value {
        with_id(self.data, &self.id)
    }
}

/// Add `id` to an object document; other JSON values are returned unchanged
#[must_use]
pub fn with_id(mut document: Value, id: &str) -> Value {
    if let Value::Object(map) = &mut document {
        map.insert("id".to_owned(), Value::String(id.to_owned()));
    }
    document
}

/// SQLite document store
#[derive(Debug, Clone)]
pub struct DocumentStore {
    pool: SqlitePool,
}

impl DocumentStore {
    /// Connect to `database_url` and create the schema if needed
    ///
    /// `sqlite::memory:` URLs get a single long-lived connection so the
    /// database survives for the lifetime of the store.
    ///
    /// # Errors
    ///
    /// Returns a database error if the URL is invalid, the database file's
    /// directory cannot be created, or the connection or schema setup fails
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let in_memory = database_url.contains(":memory:");

        if !in_memory {
            ensure_parent_dir(options.get_filename())?;
        }

        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS)
        };

        let pool = pool_options.connect_with(options).await?;
        let store = Self { pool };
        store.migrate().await?;

        info!(in_memory, "Document store ready");
        Ok(store)
    }

    /// Create the documents table if it does not exist
    ///
    /// # Errors
    ///
    /// Returns a database error if the statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(CREATE_DOCUMENTS_TABLE)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Check the connection is usable
    ///
    /// # Errors
    ///
    /// Returns a database error if a trivial query fails
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Fetch one document
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid path, a failed query, or a stored body
    /// that is not valid JSON
    pub async fn get(&self, collection: &str, id: &str) -> AppResult<Option<Value>> {
        validate_collection_path(collection)?;
        validate_document_id(id)?;

        let row = sqlx::query("SELECT data FROM documents WHERE collection = ?1 AND id = ?2")
            .bind(collection)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| parse_body(&row.try_get::<String, _>("data")?))
            .transpose()
    }

    /// Create or replace a document
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid path or a failed write
    pub async fn set(&self, collection: &str, id: &str, data: &Value) -> AppResult<()> {
        validate_collection_path(collection)?;
        validate_document_id(id)?;
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO documents (collection, id, data, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?4)
             ON CONFLICT (collection, id)
             DO UPDATE SET data = excluded.data, updated_at = excluded.updated_at",
        )
        .bind(collection)
        .bind(id)
        .bind(serde_json::to_string(data)?)
        .bind(now)
        .execute(&self.pool)
        .await?;

        debug!(collection, id, "Document written");
        Ok(())
    }

    /// Store a document under a freshly generated ID and return the ID
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid path or a failed write
    pub async fn add(&self, collection: &str, data: &Value) -> AppResult<String> {
        let id = Uuid::new_v4().to_string();
        self.set(collection, &id, data).await?;
        Ok(id)
    }

    /// All documents directly in `collection`, in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid path, a failed query, or a stored body
    /// that is not valid JSON
    pub async fn list(&self, collection: &str) -> AppResult<Vec<StoredDocument>> {
        validate_collection_path(collection)?;

        let rows = sqlx::query("SELECT id, data FROM documents WHERE collection = ?1 ORDER BY rowid")
            .bind(collection)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| -> AppResult<StoredDocument> {
                Ok(StoredDocument {
                    id: row.try_get("id")?,
                    data: parse_body(&row.try_get::<String, _>("data")?)?,
                })
            })
            .collect()
    }

    /// Remove one document; sub-collections are left in place
    ///
    /// Returns whether a document was removed.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid path or a failed write
    pub async fn delete(&self, collection: &str, id: &str) -> AppResult<bool> {
        validate_collection_path(collection)?;
        validate_document_id(id)?;

        let result = sqlx::query("DELETE FROM documents WHERE collection = ?1 AND id = ?2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Copy every document of `source` and of all its descendant collections
    /// into `destination`, preserving IDs and relative paths
    ///
    /// Existing destination documents with the same path are overwritten. The
    /// copy runs in one transaction and returns the number of documents copied.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid path or a failed query; nothing is
    /// written on failure
    pub async fn copy_collection_recursive(
        &self,
        source: &str,
        destination: &str,
    ) -> AppResult<u64> {
        validate_collection_path(source)?;
        validate_collection_path(destination)?;
        if destination == source || destination.starts_with(&format!("{source}/")) {
            return Err(AppError::invalid_input(format!(
                "Cannot copy collection {source} into its own subtree {destination}"
            )));
        }

        let mut tx = self.pool.begin().await?;

        let rows = sqlx::query(
            "SELECT collection, id, data FROM documents
             WHERE collection = ?1 OR substr(collection, 1, length(?1) + 1) = ?1 || '/'
             ORDER BY rowid",
        )
        .bind(source)
        .fetch_all(&mut *tx)
        .await?;

        let now = Utc::now().to_rfc3339();
        let mut copied = 0_u64;
        for row in &rows {
            let collection: String = row.try_get("collection")?;
            let id: String = row.try_get("id")?;
            let data: String = row.try_get("data")?;
            let target = format!("{destination}{}", &collection[source.len()..]);

            sqlx::query(
                "INSERT INTO documents (collection, id, data, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?4)
                 ON CONFLICT (collection, id)
                 DO UPDATE SET data = excluded.data, updated_at = excluded.updated_at",
            )
            .bind(&target)
            .bind(&id)
            .bind(&data)
            .bind(&now)
            .execute(&mut *tx)
            .await?;
            copied += 1;
        }

        tx.commit().await?;
        info!(source, destination, copied, "Collection copied");
        Ok(copied)
    }
}

/// Create the directory holding a database file
fn ensure_parent_dir(filename: &Path) -> AppResult<()> {
    match filename.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::database(format!(
                    "Failed to create database directory {}: {e}",
                    parent.display()
                ))
            })
        }
        _ => Ok(()),
    }
}

fn parse_body(raw: &str) -> AppResult<Value> {
    Ok(serde_json::from_str(raw)?)
}

/// Collection paths have an odd number of non-empty segments
fn validate_collection_path(path: &str) -> AppResult<()> {
    let segments: Vec<&str> = path.split('/').collect();
    if segments.iter().any(|segment| segment.is_empty()) || segments.len() % 2 == 0 {
        return Err(AppError::invalid_input(format!(
            "Invalid collection path: {path}"
        )));
    }
    Ok(())
}

fn validate_document_id(id: &str) -> AppResult<()> {
    if id.is_empty() || id.contains('/') {
        return Err(AppError::invalid_input(format!("Invalid document id: {id}")));
    }
    Ok(())
}
