mod common;

use std::io::Write;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::IntoResponse;

use contact_intake::error::AppError;
use contact_intake::models::Submission;
use contact_intake::submission::pipeline;

/// Shared in-memory sink for a scoped fmt subscriber.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn store_failure_is_logged_but_not_returned() {
    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer({
            let logs = logs.clone();
            move || logs.clone()
        })
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let submission = Submission {
        first_name: Some("Jane".to_string()),
        last_name: Some("Doe".to_string()),
        email: Some("jane@example.com".to_string()),
    };

    let err = pipeline::run(&common::FailingStore, Some(&submission))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Persistence(_)));

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = String::from_utf8_lossy(&body);
    assert!(!body.contains(common::FAILING_STORE_DETAIL), "leaked: {body}");

    let logged = logs.contents();
    assert!(logged.contains("ERROR"), "logs: {logged}");
    assert!(logged.contains(common::FAILING_STORE_DETAIL), "logs: {logged}");
}

#[tokio::test]
async fn validation_rejection_is_not_logged_as_error() {
    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer({
            let logs = logs.clone();
            move || logs.clone()
        })
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let submission = Submission {
        first_name: Some("A".to_string()),
        last_name: Some("B".to_string()),
        email: Some("not-an-email".to_string()),
    };

    let response = pipeline::run(&common::FailingStore, Some(&submission))
        .await
        .unwrap_err()
        .into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(!logs.contents().contains("ERROR"));
}
