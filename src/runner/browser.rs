//! Opening the default browser.

use crate::util::Shell;

/// Open `url` in the default browser.
///
/// Failing to open a browser is not fatal; the server keeps running and the
/// operator can open the URL by hand.
pub fn open_browser(url: &str, shell: &Shell) {
    tracing::debug!("opening {} in the default browser", url);
    if let Err(e) = webbrowser::open(url) {
        shell.warn(format!("could not open a browser for {}: {}", url, e));
    }
}
