//! Resource kind definitions for Modgen.
//!
//! A resource kind determines which template files are produced and whether
//! generation creates a fresh directory (modules) or drops a single file
//! into an existing one (services and repositories).
//!
//! # Examples
//!
//! ```
//! use modgen_core::templates::ResourceKind;
//! use std::str::FromStr;
//!
//! let kind = ResourceKind::from_str("service").unwrap();
//! assert_eq!(kind, ResourceKind::Service);
//! assert_eq!(kind.as_str(), "service");
//! assert_eq!(kind.to_string(), "service");
//! ```

// Internal imports (std, crate)
use std::fmt;
use std::str::FromStr;

// External imports (alphabetized)
use serde::Serialize;

/// Supported resource kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// A module: its own directory with controller, service, repository and DTO
    Module,
    /// A standalone service file
    Service,
    /// A standalone repository file
    Repository,
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "module" => Ok(ResourceKind::Module),
            "service" => Ok(ResourceKind::Service),
            "repository" => Ok(ResourceKind::Repository),
            _ => Err(format!("Unknown resource kind: {}", s)),
        }
    }
}

impl ResourceKind {
    /// Returns the kind identifier as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Service => "service",
            Self::Repository => "repository",
        }
    }

    /// Plural directory segment used for this kind, e.g. `src/common/services`
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Module => "modules",
            Self::Service => "services",
            Self::Repository => "repositories",
        }
    }

    /// Returns an iterator over all resource kinds
    pub fn all() -> impl Iterator<Item = Self> {
        use ResourceKind::*;
        [Module, Service, Repository].iter().copied()
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
