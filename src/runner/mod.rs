//! Running build artifacts.
//!
//! Native builds are executed in place; web builds are served over HTTP.

pub mod browser;
pub mod native;
pub mod server;

use std::path::Path;

use anyhow::Result;

use crate::util::{Shell, Status};

pub use native::run_native;
pub use server::{CancelToken, DevServer};

/// Interface the development server listens on.
pub const SERVE_HOST: &str = "0.0.0.0";

/// Serve `output_dir` on `port` until `token` is cancelled.
///
/// Binding failure (port already in use) is fatal and not retried.
pub fn serve_web(
    output_dir: &Path,
    port: u16,
    open: bool,
    token: &CancelToken,
    shell: &Shell,
) -> Result<()> {
    let server = DevServer::bind(output_dir, SERVE_HOST, port)?;
    let port = server.local_addr().map(|a| a.port()).unwrap_or(port);
    let url = format!("http://localhost:{}/", port);

    shell.status(
        Status::Serving,
        format!("{} at {} (press Ctrl-C to stop)", output_dir.display(), url),
    );

    if open {
        browser::open_browser(&url, shell);
    }

    server.serve(token)
}
