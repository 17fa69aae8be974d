//! Template root directory resolution.
//!
//! Templates ship as plain files under a `templates/` directory with one
//! subdirectory per template set (`module`, `module_user`, `module_auth`,
//! `service`, `repository`, `project`, `docker`). This module locates that
//! root once per invocation.

use std::io;
use std::path::{Path, PathBuf};

/// A validated template root directory.
#[derive(Debug, Clone)]
pub struct TemplateRoot {
    root: PathBuf,
}

impl TemplateRoot {
    /// Create a TemplateRoot from an explicit path
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Locate the template root, using the override when supplied.
    ///
    /// Without an override the standard locations are checked in order:
    /// the `MODGEN_TEMPLATE_DIR` environment variable, `./templates` in the
    /// current directory, the workspace `templates/` directory next to the
    /// crate (for development), and `~/.modgen/templates`.
    pub fn discover(custom_dir: Option<&Path>) -> io::Result<Self> {
        let root = if let Some(dir) = custom_dir {
            if !dir.exists() {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Template directory not found: {}", dir.display()),
                ));
            }
            dir.to_path_buf()
        } else {
            Self::find_template_root().ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    "Could not find template directory in any standard location",
                )
            })?
        };

        Ok(Self::new(root))
    }

    /// Check the standard locations for a template root
    fn find_template_root() -> Option<PathBuf> {
        // 1. Check environment variable
        if let Ok(dir) = std::env::var("MODGEN_TEMPLATE_DIR") {
            let path = PathBuf::from(dir);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check current directory
        let templates_dir = PathBuf::from("templates");
        if templates_dir.exists() {
            return Some(templates_dir);
        }

        // 3. Check the workspace root (for development)
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let manifest_path = PathBuf::from(manifest_dir);
            if let Some(crates_dir) = manifest_path.parent() {
                if let Some(workspace_root) = crates_dir.parent() {
                    let templates_dir = workspace_root.join("templates");
                    if templates_dir.exists() {
                        return Some(templates_dir);
                    }
                }
            }
        }

        // 4. Check in the user's home directory
        if let Some(home_dir) = dirs::home_dir() {
            let templates_dir = home_dir.join(".modgen").join("templates");
            if templates_dir.exists() {
                return Some(templates_dir);
            }
        }

        None
    }

    /// Path to a named template set directory under the root
    pub fn set_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// The template root path
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Check if the template root exists
    pub fn exists(&self) -> bool {
        self.root.exists()
    }
}
