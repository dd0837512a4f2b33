//! Blocking `tiny_http` accept loop with a fixed pool of worker threads.
//!
//! Each worker pulls requests off the shared listener with `recv_timeout`, so
//! a shutdown request is noticed within one poll interval even when idle.

use std::io::Read;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use survey_store::TemplateStore;
use thiserror::Error;

use crate::http::{self, ApiError, ApiResponse};

const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Largest request body accepted; anything longer gets 413.
pub const MAX_BODY_BYTES: u64 = 1024 * 1024;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },
}

/// Signals a running [`SurveyServer`] to stop accepting requests.
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    flag: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub fn trigger(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }
}

pub struct SurveyServer {
    listener: Arc<tiny_http::Server>,
    store: Arc<TemplateStore>,
    workers: usize,
    shutdown: Arc<AtomicBool>,
}

impl SurveyServer {
    /// Bind the listener. Use port `0` to pick a free port.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Bind` if the address cannot be bound.
    pub fn bind(
        addr: &str,
        store: Arc<TemplateStore>,
        workers: usize,
    ) -> Result<Self, ServerError> {
        let listener = tiny_http::Server::http(addr).map_err(|e| ServerError::Bind {
            addr: addr.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            listener: Arc::new(listener),
            store,
            workers: workers.max(1),
            shutdown: Arc::new(AtomicBool::new(false)),
        })
    }

    /// The bound TCP address, if listening on IP.
    #[must_use]
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.listener.server_addr().to_ip()
    }

    #[must_use]
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            flag: Arc::clone(&self.shutdown),
        }
    }

    /// Serve until the shutdown handle fires. Blocks the calling thread.
    pub fn run(self) {
        tracing::info!(workers = self.workers, "survey server accepting requests");
        let this = &self;
        std::thread::scope(|scope| {
            for worker in 0..this.workers {
                scope.spawn(move || this.worker_loop(worker));
            }
        });
        tracing::info!("survey server stopped");
    }

    fn worker_loop(&self, worker: usize) {
        while !self.shutdown.load(Ordering::SeqCst) {
            match self.listener.recv_timeout(POLL_INTERVAL) {
                Ok(Some(request)) => self.serve(request),
                Ok(None) => {}
                Err(error) => tracing::warn!(worker, %error, "failed to receive request"),
            }
        }
    }

    fn serve(&self, mut request: tiny_http::Request) {
        let method = request.method().clone();
        let url = request.url().to_string();

        let response = match read_body(request.as_reader(), MAX_BODY_BYTES) {
            Ok(body) => http::handle(&self.store, &method, &url, &body),
            Err(error) => {
                tracing::warn!(%method, %url, %error, "request rejected");
                ApiResponse::error(&error)
            }
        };

        if let Err(error) = request.respond(response.into_http()) {
            tracing::warn!(%method, %url, %error, "failed to write response");
        }
    }
}

/// Read at most `limit` bytes of body. One extra byte is pulled to tell an
/// exact fit from an overflow.
fn read_body(reader: impl Read, limit: u64) -> Result<Vec<u8>, ApiError> {
    let mut body = Vec::new();
    reader
        .take(limit.saturating_add(1))
        .read_to_end(&mut body)
        .map_err(ApiError::Body)?;
    if u64::try_from(body.len()).unwrap_or(u64::MAX) > limit {
        return Err(ApiError::PayloadTooLarge { limit });
    }
    Ok(body)
}
