//! Best-effort note lifecycle notifications.
//!
//! After a note mutation completes its primary operation, a small JSON
//! payload is posted to the configured notifier service. The call is
//! dispatched as a detached task with its own timeout: failures are logged
//! and swallowed, never retried, and never change the response already
//! committed to the caller. With no notifier configured the dispatch is
//! skipped entirely.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

/// Timeout for a single notifier call.
const NOTIFY_TIMEOUT: Duration = Duration::from_secs(5);

/// Note lifecycle actions reported to the notifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteAction {
    Created,
    Updated,
    Deleted,
}

impl NoteAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        }
    }
}

/// Wire payload accepted by the notifier's POST /notify.
#[derive(Debug, Serialize)]
struct NotifyRequest<'a> {
    action: &'static str,
    title: &'a str,
    note_id: i64,
}

/// Fire-and-forget client for the notifier service.
#[derive(Debug, Clone)]
pub struct Notifier {
    client: reqwest::Client,
    notify_url: Option<Arc<str>>,
}

impl Notifier {
    /// Create a notifier. `base_url` of None disables dispatching.
    pub fn new(client: reqwest::Client, base_url: Option<&str>) -> Self {
        let notify_url = base_url
            .map(|base| Arc::from(format!("{}/notify", base.trim_end_matches('/')).as_str()));
        Self { client, notify_url }
    }

    /// Whether a notifier address is configured.
    pub fn is_enabled(&self) -> bool {
        self.notify_url.is_some()
    }

    /// Dispatch a lifecycle notification on a detached task.
    ///
    /// Returns immediately; the outcome is only ever logged.
    pub fn dispatch(&self, action: NoteAction, note_id: i64, title: Option<String>) {
        let Some(url) = self.notify_url.clone() else {
            return;
        };
        let client = self.client.clone();

        tokio::spawn(async move {
            let payload = NotifyRequest {
                action: action.as_str(),
                title: title.as_deref().unwrap_or(""),
                note_id,
            };

            let result = client
                .post(url.as_ref())
                .timeout(NOTIFY_TIMEOUT)
                .json(&payload)
                .send()
                .await
                .and_then(|response| response.error_for_status());

            match result {
                Ok(_) => {
                    tracing::debug!(action = action.as_str(), note_id, "notifier acknowledged");
                }
                Err(error) => {
                    tracing::warn!(
                        error = %error,
                        action = action.as_str(),
                        note_id,
                        "notifier call failed"
                    );
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, routing::post};
    use tokio::sync::mpsc;

    #[test]
    fn action_strings() {
        assert_eq!(NoteAction::Created.as_str(), "created");
        assert_eq!(NoteAction::Updated.as_str(), "updated");
        assert_eq!(NoteAction::Deleted.as_str(), "deleted");
    }

    #[test]
    fn payload_shape() {
        let payload = NotifyRequest {
            action: "created",
            title: "A",
            note_id: 3,
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"action":"created","title":"A","note_id":3}"#
        );
    }

    #[test]
    fn unconfigured_notifier_skips_dispatch() {
        // No runtime: dispatch must return before ever spawning.
        let notifier = Notifier::new(reqwest::Client::new(), None);
        assert!(!notifier.is_enabled());
        notifier.dispatch(NoteAction::Deleted, 1, None);
    }

    #[tokio::test]
    async fn dispatch_posts_the_payload() {
        let (tx, mut rx) = mpsc::channel::<serde_json::Value>(1);
        let router = Router::new().route(
            "/notify",
            post(move |Json(payload): Json<serde_json::Value>| {
                let tx = tx.clone();
                async move {
                    tx.send(payload).await.unwrap();
                    Json(serde_json::json!({"status": "ok"}))
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let base_url = format!("http://{}", addr);
        let notifier = Notifier::new(reqwest::Client::new(), Some(base_url.as_str()));
        notifier.dispatch(NoteAction::Created, 1, Some("First".to_string()));

        let payload = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(payload["action"], "created");
        assert_eq!(payload["title"], "First");
        assert_eq!(payload["note_id"], 1);
    }
}
