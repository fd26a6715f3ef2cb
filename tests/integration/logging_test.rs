//! Integration tests for request logging.

mod helpers;

use std::io;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use tracing::Level;

use helpers::TestApp;

/// In-memory log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_request_logs_never_contain_refresh_tokens() {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let app = TestApp::new();
    let admin = app.admin_token().await;
    let session = app.register("ann@homefruits.test").await;
    let refresh_token = session["refresh_token"].as_str().unwrap().to_string();

    for method in ["POST", "GET"] {
        let revoked = app
            .request(
                method,
                &format!("/admin/revoke/{refresh_token}"),
                None,
                Some(&admin),
            )
            .await;
        assert_eq!(revoked.status, StatusCode::NO_CONTENT);
    }

    let output = logs.contents();
    assert!(output.contains("http_request"), "no request spans:\n{output}");
    assert!(output.contains("/admin/revoke/{token}"), "{output}");
    assert!(!output.contains(&refresh_token), "token leaked:\n{output}");
}

#[tokio::test]
async fn test_unrouted_requests_log_no_path() {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let app = TestApp::new();
    let secret_path = format!("/nowhere/{}", "cd".repeat(32));
    let response = app.request("GET", &secret_path, None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let output = logs.contents();
    assert!(output.contains("route=unmatched"), "{output}");
    assert!(!output.contains(&secret_path), "{output}");
}
