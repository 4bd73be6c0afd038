//! Integration tests for the people directory.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p people-directory-integration-tests
//! ```
//!
//! Every test binds its own server on an ephemeral localhost port, so no
//! external services are needed.
//!
//! # Test Categories
//!
//! - `directory_flow` - Page-level scenarios driven through the client
//! - `server_contract` - Raw HTTP contract of the backend

use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use people_directory_client::{ClientConfig, DirectoryApp, HttpDirectory};
use people_directory_server::config::ServerConfig;
use people_directory_server::state::AppState;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing_subscriber::fmt::MakeWriter;

/// A router served on `127.0.0.1` for the lifetime of the value.
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Serve a fresh, empty directory backend.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn start() -> Self {
        let state = AppState::new(ServerConfig::default());
        Self::serve(people_directory_server::app(state)).await
    }

    /// Serve an empty directory backend that records every request it receives.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn start_recording() -> (Self, RequestLog) {
        let state = AppState::new(ServerConfig::default());
        let log = RequestLog::default();
        let router = people_directory_server::app(state).layer(
            middleware::from_fn_with_state(log.clone(), record_request),
        );
        (Self::serve(router).await, log)
    }

    /// Serve a backend started from `config`.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn start_with(config: ServerConfig) -> Self {
        Self::serve(people_directory_server::app(AppState::new(config))).await
    }

    /// Serve an arbitrary router.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn serve(router: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Test server error");
        });

        Self { addr, handle }
    }

    /// Collection endpoint URL.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Client configuration pointing at this server.
    ///
    /// # Panics
    ///
    /// Panics if the address does not form a valid URL.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::with_base_url(&self.base_url()).expect("Invalid test server URL")
    }

    /// A directory page wired to this server. Not yet initialised.
    #[must_use]
    pub fn app(&self) -> DirectoryApp<HttpDirectory> {
        DirectoryApp::new(HttpDirectory::new(&self.client_config()))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Requests seen by a recording server, as `"METHOD /path"`.
#[derive(Clone, Default)]
pub struct RequestLog(Arc<Mutex<Vec<String>>>);

impl RequestLog {
    /// Requests received so far, in arrival order.
    ///
    /// # Panics
    ///
    /// Panics if the log lock is poisoned.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.0.lock().expect("lock request log").clone()
    }

    /// Forget everything recorded so far.
    ///
    /// # Panics
    ///
    /// Panics if the log lock is poisoned.
    pub fn clear(&self) {
        self.0.lock().expect("lock request log").clear();
    }
}

async fn record_request(State(log): State<RequestLog>, request: Request, next: Next) -> Response {
    let line = format!("{} {}", request.method(), request.uri().path());
    if let Ok(mut requests) = log.0.lock() {
        requests.push(line);
    }
    next.run(request).await
}

/// Captures formatted log output for assertions.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

pub struct LogWriter(Arc<Mutex<Vec<u8>>>);

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter(Arc::clone(&self.0))
    }
}

impl io::Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::other("lock poisoned"))?;
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogCapture {
    /// Install as the default subscriber for the current thread.
    #[must_use]
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Captured lines logged at ERROR level by targets under `target`.
    ///
    /// The server runs on the same thread in tests, so its events land in
    /// the same buffer.
    ///
    /// # Panics
    ///
    /// Panics if the buffer lock is poisoned.
    #[must_use]
    pub fn error_lines(&self, target: &str) -> Vec<String> {
        let bytes = self.0.lock().expect("lock log buffer").clone();
        String::from_utf8_lossy(&bytes)
            .lines()
            .filter(|line| line.contains("ERROR") && line.contains(target))
            .map(String::from)
            .collect()
    }
}
