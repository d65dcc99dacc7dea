//! Static file server for web builds.
//!
//! Serves the output directory over plain HTTP for local development. The
//! serve loop polls a [`CancelToken`] between requests, so it can be stopped
//! from a signal handler or from a test.

use std::fs::File;
use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use percent_encoding::percent_decode_str;
use tiny_http::{Header, Request, Response, Server, StatusCode};

use crate::builder::profile::HOST_PAGE_NAME;
use crate::core::BuildError;

/// How long the serve loop blocks before re-checking its token.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Shared cancellation flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// A bound development server.
pub struct DevServer {
    server: Server,
    root: PathBuf,
}

impl DevServer {
    /// Bind to `host:port` and serve files from `root`.
    ///
    /// Port 0 picks a free port; see [`DevServer::local_addr`].
    pub fn bind(root: &Path, host: &str, port: u16) -> Result<Self> {
        let server = Server::http((host, port)).map_err(|e| BuildError::ServerBind {
            addr: format!("{}:{}", host, port),
            message: e.to_string(),
        })?;

        Ok(DevServer {
            server,
            root: root.to_path_buf(),
        })
    }

    /// The address actually bound.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Serve requests until `token` is cancelled.
    pub fn serve(&self, token: &CancelToken) -> Result<()> {
        while !token.is_cancelled() {
            let request = self
                .server
                .recv_timeout(POLL_INTERVAL)
                .context("development server stopped accepting connections")?;

            if let Some(request) = request {
                self.handle(request);
            }
        }

        tracing::debug!("development server cancelled");
        Ok(())
    }

    fn handle(&self, request: Request) {
        let url = request.url().to_string();

        let result = match resolve_request_path(&self.root, &url) {
            Ok(path) => match File::open(&path) {
                Ok(file) => {
                    tracing::debug!("GET {} -> {}", url, path.display());
                    let mut response = Response::from_file(file);
                    let mime = content_type(&path);
                    if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], mime) {
                        response.add_header(header);
                    }
                    request.respond(response)
                }
                Err(e) => {
                    tracing::warn!("failed to open {}: {}", path.display(), e);
                    request.respond(status_response(500))
                }
            },
            Err(code) => {
                tracing::debug!("GET {} -> {}", url, code);
                request.respond(status_response(code))
            }
        };

        if let Err(e) = result {
            tracing::debug!("failed to send response for {}: {}", url, e);
        }
    }
}

fn status_response(code: u16) -> Response<std::io::Cursor<Vec<u8>>> {
    let reason = StatusCode(code).default_reason_phrase();
    Response::from_string(reason).with_status_code(code)
}

/// MIME type for a served file, by extension.
pub fn content_type(path: &Path) -> String {
    match path.extension().and_then(|e| e.to_str()) {
        Some("wasm") => "application/wasm".to_string(),
        _ => mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string(),
    }
}

/// Map a request URL to a file under `root`.
///
/// The query string is ignored and `/` maps to the host page. Segments are
/// percent-decoded first; a segment that is not UTF-8 afterwards is 400 and
/// any `..` is 403. Missing files are 404.
pub fn resolve_request_path(root: &Path, url: &str) -> Result<PathBuf, u16> {
    let path = url.split(['?', '#']).next().unwrap_or("");

    let mut resolved = root.to_path_buf();
    for segment in path.split('/') {
        let decoded = percent_decode_str(segment)
            .decode_utf8()
            .map_err(|_| 400u16)?;

        for component in Path::new(decoded.as_ref()).components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(403)
                }
            }
        }
    }

    if resolved.is_dir() {
        resolved.push(HOST_PAGE_NAME);
    }

    if resolved.is_file() {
        Ok(resolved)
    } else {
        Err(404)
    }
}
