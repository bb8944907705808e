//! Opens demo links in the system browser.

use acolyte_catalog::{LinkError, LinkOpener};

/// [`LinkOpener`] that hands URLs to the default browser.
///
/// The browser gets a fresh context with no handle back to the app.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserOpener;

impl LinkOpener for BrowserOpener {
    fn open(&self, url: &str) -> Result<(), LinkError> {
        webbrowser::open(url).map_err(|e| LinkError::new(url, e.to_string()))
    }
}
