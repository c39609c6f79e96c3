//! Hard navigation seam.
//!
//! The HTTP pipeline needs to know the current view and to force a full page
//! load to `/login` when a session dies. Routing through a trait keeps that
//! side effect observable in native tests.

pub const LOGIN_ROUTE: &str = "/login";

pub trait Navigator: Send + Sync {
    /// Current location pathname, e.g. `/courses`.
    fn current_path(&self) -> String;
    /// Full page navigation; discards in-memory application state.
    fn hard_redirect(&self, path: &str);
}

/// `window.location`. Reports `/` and ignores redirects outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_else(|| "/".to_owned())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            "/".to_owned()
        }
    }

    fn hard_redirect(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    }
}
