//! Route definitions for the storage tier.

pub mod events;
pub mod health;
pub mod notes;

use axum::Router;

use cascade_http::error::not_found;

use crate::state::AppState;

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(events::routes())
        .merge(notes::routes())
        .fallback(not_found)
        .with_state(state)
}

/// Parse a positive id from a path segment.
pub(crate) fn parse_id(raw: &str) -> Option<i64> {
    let id = raw.parse::<i64>().ok()?;
    (id > 0).then_some(id)
}

#[cfg(test)]
pub(crate) mod testing {
    use axum::Router;
    use tempfile::TempDir;

    use cascade_store::{Store, StoreConfig};

    use crate::state::AppState;

    /// Build a router over a throwaway on-disk store.
    ///
    /// The TempDir must outlive the router.
    pub(crate) async fn router_with_temp_store() -> (Router, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig {
            database_url: format!("sqlite:{}", dir.path().join("test.db").display()),
            max_connections: 5,
            ensure_schema: true,
        };
        let store = Store::connect(config).await.unwrap();
        let router = super::build_router(AppState::new(store, "storage"));
        (router, dir)
    }
}

#[cfg(test)]
mod tests {
    use super::parse_id;

    #[test]
    fn parse_id_accepts_positive_integers() {
        assert_eq!(parse_id("1"), Some(1));
        assert_eq!(parse_id("42"), Some(42));
    }

    #[test]
    fn parse_id_rejects_garbage() {
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("0"), None);
        assert_eq!(parse_id("-3"), None);
        assert_eq!(parse_id("1.5"), None);
    }
}
