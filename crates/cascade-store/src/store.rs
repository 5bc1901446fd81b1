//! Main store implementation for database operations.
//!
//! The `Store` type provides all CRUD operations for events and notes.

use std::str::FromStr;

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use cascade_core::{NewEvent, NewNote};

use crate::error::{StoreError, StoreResult};
use crate::models::{EventRow, NoteRow};
use crate::schema;

/// Configuration for opening the embedded database.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Database URL, e.g. `sqlite:cascade.db`.
    pub database_url: String,
    /// Maximum number of connections in the pool.
    pub max_connections: u32,
    /// Apply the embedded schema on connect.
    pub ensure_schema: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:cascade.db".to_string(),
            max_connections: 5,
            ensure_schema: true,
        }
    }
}

impl StoreConfig {
    /// Create configuration from environment variables.
    ///
    /// Reads:
    /// - `DATABASE_URL` - Optional, defaults to `sqlite:cascade.db`
    /// - `DATABASE_MAX_CONNECTIONS` - Optional, defaults to 5
    pub fn from_env() -> StoreResult<Self> {
        let defaults = Self::default();

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or(defaults.database_url);

        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.max_connections);

        Ok(Self {
            database_url,
            max_connections,
            ensure_schema: true,
        })
    }
}

/// Embedded database store for events and notes.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open the database with the given configuration.
    ///
    /// Creates the database file if missing and applies the embedded schema
    /// when `config.ensure_schema` is true.
    pub async fn connect(config: StoreConfig) -> StoreResult<Self> {
        tracing::info!(database_url = %config.database_url, "Opening database");

        let options = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(|e| StoreError::Config(format!("invalid database URL: {}", e)))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        if config.ensure_schema {
            schema::ensure_schema(&pool).await?;
        }

        Ok(Self { pool })
    }

    /// Create a store from an existing connection pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // ==================== Event Operations ====================

    /// List events, most-recent-id-first, capped by `limit`.
    pub async fn list_events(&self, limit: i64) -> StoreResult<Vec<EventRow>> {
        Ok(sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, source, method, route, status, message, created_at
            FROM events
            ORDER BY id DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?)
    }

    /// Get an event by id.
    pub async fn get_event(&self, id: i64) -> StoreResult<EventRow> {
        sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, source, method, route, status, message, created_at
            FROM events
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::EventNotFound(id))
    }

    /// Insert a new event. The id and createdAt are assigned here.
    pub async fn insert_event(&self, event: &NewEvent) -> StoreResult<EventRow> {
        let now = Utc::now();

        let row = sqlx::query_as::<_, EventRow>(
            r#"
            INSERT INTO events (source, method, route, status, message, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, source, method, route, status, message, created_at
            "#,
        )
        .bind(&event.source)
        .bind(&event.method)
        .bind(&event.route)
        .bind(event.status)
        .bind(&event.message)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Delete an event by id. Deleting an absent id succeeds.
    pub async fn delete_event(&self, id: i64) -> StoreResult<()> {
        sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    // ==================== Note Operations ====================

    /// List all notes, most-recent-id-first.
    pub async fn list_notes(&self) -> StoreResult<Vec<NoteRow>> {
        Ok(sqlx::query_as::<_, NoteRow>(
            r#"
            SELECT id, title, content, created_at, updated_at
            FROM notes
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }

    /// List all notes oldest-first, the order used by the document export.
    pub async fn list_notes_oldest_first(&self) -> StoreResult<Vec<NoteRow>> {
        Ok(sqlx::query_as::<_, NoteRow>(
            r#"
            SELECT id, title, content, created_at, updated_at
            FROM notes
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }

    /// Get a note by id.
    pub async fn get_note(&self, id: i64) -> StoreResult<NoteRow> {
        sqlx::query_as::<_, NoteRow>(
            r#"
            SELECT id, title, content, created_at, updated_at
            FROM notes
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NoteNotFound(id))
    }

    /// Insert a new note. createdAt and updatedAt start equal.
    pub async fn insert_note(&self, note: &NewNote) -> StoreResult<NoteRow> {
        let now = Utc::now();

        let row = sqlx::query_as::<_, NoteRow>(
            r#"
            INSERT INTO notes (title, content, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, title, content, created_at, updated_at
            "#,
        )
        .bind(&note.title)
        .bind(&note.content)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Overwrite a note's title and content and refresh updatedAt, then
    /// return the refreshed row via the get path.
    ///
    /// The UPDATE itself is a no-op for an absent id; the subsequent read
    /// reports `NoteNotFound`.
    pub async fn update_note(&self, id: i64, note: &NewNote) -> StoreResult<NoteRow> {
        let now = Utc::now();

        sqlx::query("UPDATE notes SET title = ?, content = ?, updated_at = ? WHERE id = ?")
            .bind(&note.title)
            .bind(&note.content)
            .bind(now)
            .bind(id)
            .execute(&self.pool)
            .await?;

        self.get_note(id).await
    }

    /// Delete a note by id. Deleting an absent id succeeds.
    pub async fn delete_note(&self, id: i64) -> StoreResult<()> {
        sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_core::{CreateEventRequest, NotePayload};

    async fn temp_store(dir: &tempfile::TempDir) -> Store {
        let path = dir.path().join("test.db");
        let config = StoreConfig {
            database_url: format!("sqlite:{}", path.display()),
            max_connections: 5,
            ensure_schema: true,
        };
        Store::connect(config).await.unwrap()
    }

    fn new_event(message: &str) -> NewEvent {
        NewEvent::from(CreateEventRequest {
            message: message.to_string(),
            ..Default::default()
        })
    }

    fn new_note(title: &str, content: &str) -> NewNote {
        NewNote::from(NotePayload {
            title: title.to_string(),
            content: content.to_string(),
        })
    }

    #[test]
    fn config_default() {
        let config = StoreConfig::default();
        assert_eq!(config.database_url, "sqlite:cascade.db");
        assert!(config.ensure_schema);
    }

    #[tokio::test]
    async fn ids_start_at_one_and_increase() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;

        let first = store.insert_event(&new_event("a")).await.unwrap();
        let second = store.insert_event(&new_event("b")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn next_id_is_max_plus_one_after_deleting_the_max() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;

        for message in ["a", "b", "c"] {
            store.insert_event(&new_event(message)).await.unwrap();
        }
        store.delete_event(3).await.unwrap();

        let next = store.insert_event(&new_event("d")).await.unwrap();
        assert_eq!(next.id, 3);
    }

    #[tokio::test]
    async fn note_ids_do_not_share_the_event_namespace() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;

        store.insert_event(&new_event("a")).await.unwrap();
        store.insert_event(&new_event("b")).await.unwrap();
        let note = store.insert_note(&new_note("first", "")).await.unwrap();
        assert_eq!(note.id, 1);
    }

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;

        let inserted = store
            .insert_note(&new_note("Title", "Content"))
            .await
            .unwrap();
        assert_eq!(inserted.created_at, inserted.updated_at);

        let read = store.get_note(inserted.id).await.unwrap();
        assert_eq!(read.title, inserted.title);
        assert_eq!(read.content, inserted.content);
        assert_eq!(read.created_at, inserted.created_at);
        assert_eq!(read.updated_at, inserted.updated_at);
    }

    #[tokio::test]
    async fn list_events_is_newest_first_and_capped() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;

        for message in ["a", "b", "c"] {
            store.insert_event(&new_event(message)).await.unwrap();
        }

        let events = store.list_events(2).await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, 3);
        assert_eq!(events[1].id, 2);
    }

    #[tokio::test]
    async fn update_refreshes_updated_at_and_keeps_created_at() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;

        let inserted = store.insert_note(&new_note("A", "B")).await.unwrap();
        let updated = store
            .update_note(inserted.id, &new_note("A2", "B2"))
            .await
            .unwrap();

        assert_eq!(updated.id, inserted.id);
        assert_eq!(updated.title, "A2");
        assert_eq!(updated.content, "B2");
        assert_eq!(updated.created_at, inserted.created_at);
        assert!(updated.updated_at > inserted.updated_at);
    }

    #[tokio::test]
    async fn update_of_absent_note_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;

        let result = store.update_note(42, &new_note("A", "B")).await;
        assert!(matches!(result, Err(StoreError::NoteNotFound(42))));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;

        let note = store.insert_note(&new_note("A", "")).await.unwrap();
        store.delete_note(note.id).await.unwrap();
        store.delete_note(note.id).await.unwrap();

        let notes = store.list_notes().await.unwrap();
        assert!(notes.iter().all(|n| n.id != note.id));
        assert!(matches!(
            store.get_note(note.id).await,
            Err(StoreError::NoteNotFound(_))
        ));
    }

    #[tokio::test]
    async fn schema_creation_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir).await;

        schema::ensure_schema(store.pool()).await.unwrap();
        assert!(schema::is_schema_initialized(store.pool()).await.unwrap());
    }
}
