//! Runtime settings resolved from command-line flags and environment

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::content::ContentRoot;
use crate::error::{Result, config_invalid};

pub const DEFAULT_CONTENT_ROOT: &str = "content";
pub const DEFAULT_ADDR: &str = "127.0.0.1:4321";

/// Admin server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub addr: SocketAddr,
    /// Adds error details to API responses.
    pub dev_mode: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 4321)),
            dev_mode: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub content_root: PathBuf,
    pub server: ServerSettings,
}

impl Settings {
    pub fn new(content_root: impl Into<PathBuf>) -> Self {
        Self {
            content_root: content_root.into(),
            server: ServerSettings::default(),
        }
    }

    pub fn with_server(mut self, server: ServerSettings) -> Self {
        self.server = server;
        self
    }

    /// Check that the content root exists and open it.
    pub fn open_content_root(&self) -> Result<ContentRoot> {
        validate_content_root(&self.content_root)?;
        Ok(ContentRoot::new(&self.content_root))
    }
}

fn validate_content_root(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(config_invalid(format!(
            "content root '{}' is not a directory",
            path.display()
        )));
    }
    Ok(())
}
