//! readme-canvas
//!
//! The editing model behind a card-based GitHub profile README designer:
//! cards are dropped onto a canvas, customized one at a time, and exported as
//! README markdown. A GitHub username is persisted locally and used to fetch a
//! profile summary for the side panel.
//!
//! # Features
//!
//! - **github** (default): blocking GitHub REST client and the single-shot
//!   asynchronous profile lookup built on it
//!
//! # Example
//!
//! ```
//! use readme_canvas::{CardOptions, Editor, EditorConfig, MemoryUsernameStore};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut editor = Editor::start(EditorConfig::default(), Box::new(MemoryUsernameStore::new()));
//!
//! let id = editor.drop_tag("text").id();
//! editor.customize(id)?;
//! editor.save_customization(CardOptions::new().with_text("Hi there"))?;
//!
//! assert!(editor.export_markdown().contains("Hi there"));
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use std::time::Duration;

pub mod cards;
pub mod editor;
pub mod error;
pub mod export;
pub mod profile;
pub mod session;
pub mod storage;
pub mod store;

#[cfg(feature = "github")]
pub mod github;

// Single-shot background lookup (worker thread + oneshot channel)
#[cfg(feature = "github")]
pub mod lookup;

pub use cards::{Card, CardId, CardKind, CardOptions, CardTag, Rendered};
pub use editor::{Editor, ProfilePanel};
pub use error::{Error, Result};
pub use profile::ProfileSummary;
pub use session::CustomizationSession;
pub use storage::{FileUsernameStore, MemoryUsernameStore, UsernameStore};
pub use store::CardStore;

#[cfg(feature = "github")]
pub use github::GitHubClient;
#[cfg(feature = "github")]
pub use lookup::ProfileLookup;

/// Public GitHub REST endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Configuration for the editor and its GitHub client
///
/// The defaults talk to the public GitHub API and persist the username under
/// the platform config directory.
///
/// # Examples
///
/// ```
/// let cfg = readme_canvas::EditorConfig::default();
/// assert_eq!(cfg.api_base_url, "https://api.github.com");
/// assert!(cfg.user_agent.starts_with("readme-canvas/"));
/// ```
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Base URL of the GitHub REST API (overridable for tests and GHES)
    pub api_base_url: String,
    /// User agent sent with every request; GitHub rejects requests without one
    pub user_agent: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// File holding the persisted username. `None` uses the platform default.
    pub state_path: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            user_agent: concat!("readme-canvas/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_ms: 10_000,
            state_path: None,
        }
    }
}

impl EditorConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// `state_path`, or `<config dir>/readme-canvas/state.json`.
    pub fn resolved_state_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.state_path {
            return Ok(path.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join("readme-canvas").join("state.json"))
            .ok_or_else(|| Error::ConfigError("no config directory on this platform".into()))
    }
}
