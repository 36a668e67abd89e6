//! cvpage: a headless renderer for JSON-driven personal resume pages.
//!
//! The pipeline fetches a Resume Document from a primary HTTP endpoint,
//! falls back to a local JSON resource when the primary source fails, and
//! splices the rendered sections into a pre-existing HTML shell. Cosmetic
//! page behavior is modeled as explicit components: a persisted light/dark
//! theme, a falling-glyph background animation on a fixed timer cadence, and
//! scroll-triggered reveal of content cards.
//!
//! # Example
//!
//! ```no_run
//! use cvpage::{Page, PageConfig, PageShell, Theme};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> cvpage::Result<()> {
//! let config = PageConfig::default();
//! let shell = PageShell::builtin()?;
//! let mut page = Page::new(&config, shell, Theme::Light)?;
//! let output = page.load_and_render().await?;
//! println!("{}", output.html);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

pub mod model;
pub mod render;
pub mod shell;
pub mod theme;
pub mod background;
pub mod reveal;
pub mod loader;
pub mod page;

pub use page::{Page, PageOutput};
pub use shell::{PageShell, PageState, PageView};
pub use theme::{Theme, ThemeStore};

/// Production resume API endpoint.
pub const DEFAULT_API_URL: &str = "https://faezeh-resume-api.onrender.com/api/resume";

/// Default local fallback resource.
pub const DEFAULT_FALLBACK: &str = "resume.json";

/// Viewport dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Configuration for one page build.
///
/// The defaults reproduce the production page: the hosted resume API with a
/// `resume.json` fallback next to the page, a 1280x720 viewport and the
/// standard reveal threshold.
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Primary data source, tried first.
    pub api_url: String,
    /// Local fallback resource, tried once if the primary source fails.
    pub fallback_path: PathBuf,
    /// User agent sent with the primary request.
    pub user_agent: String,
    /// Timeout for the primary request in milliseconds.
    pub timeout_ms: u64,
    /// Viewport used for particle density and card layout.
    pub viewport: Viewport,
    /// Visible fraction at which a hidden card reveals.
    pub reveal_threshold: f32,
    /// Override for the persisted theme file location.
    pub theme_path: Option<PathBuf>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            fallback_path: PathBuf::from(DEFAULT_FALLBACK),
            user_agent: format!("cvpage/{}", env!("CARGO_PKG_VERSION")),
            timeout_ms: 30000,
            viewport: Viewport::default(),
            reveal_threshold: reveal::DEFAULT_THRESHOLD,
            theme_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PageConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.fallback_path, PathBuf::from("resume.json"));
        assert_eq!(config.viewport.width, 1280);
        assert_eq!(config.viewport.height, 720);
        assert_eq!(config.reveal_threshold, 0.1);
    }

    #[test]
    fn test_viewport() {
        let viewport = Viewport {
            width: 1920,
            height: 1080,
        };
        assert_eq!(viewport.width, 1920);
        assert_eq!(viewport.height, 1080);
    }
}
