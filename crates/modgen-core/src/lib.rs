//! Modgen Core Library
//!
//! This library provides the core functionality for scaffolding modular
//! Express projects: identifier normalization, template-set and
//! destination resolution, and conflict-aware file generation.

pub mod config;
pub mod destination;
pub mod error;
pub mod generate;
pub mod ident;
pub mod project;
pub mod prompt;
pub mod templates;
pub mod writer;

pub use crate::{
    config::Config,
    destination::{resolve_destination, Destination, PlacementMode, GLOBAL_SHARED},
    error::{Error, Result},
    generate::{generate, GenerationReport},
    ident::{normalize, NormalizedName},
    project::{
        add_docker, check_project, init_project, list_modules, remove_module, HealthCheck,
        ModuleEntry,
    },
    prompt::{Chooser, ScriptedChooser},
    templates::{resolve_templates, ResourceKind, TemplateRoot, TemplateSet, TemplateVariant},
    writer::{write_set, FileOutcome, SubstitutionContext, WriteReport},
};

/// Result type for Modgen scaffolding operations
pub type ModgenResult<T> = std::result::Result<T, Error>;
