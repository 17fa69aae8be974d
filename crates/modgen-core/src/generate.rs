//! Resource generation entry point.
//!
//! Orchestrates one scaffolding invocation: resolve the destination,
//! resolve the template set, then render and write. Resolution order
//! matters: the destination rules run first so an `AlreadyExists` conflict
//! or a cancelled placement prompt aborts before any template is consulted.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::destination::{resolve_destination, PlacementMode};
use crate::error::Result;
use crate::ident::NormalizedName;
use crate::prompt::Chooser;
use crate::templates::{resolve_templates, ResourceKind, TemplateRoot, TemplateVariant};
use crate::writer::{write_set, SubstitutionContext, WriteReport};

/// Everything the caller needs to render a per-file summary of one
/// generation.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    /// The kind that was generated
    pub kind: ResourceKind,
    /// Normalized name used across every generated file
    pub name: NormalizedName,
    /// Directory the files were written to
    pub destination: PathBuf,
    /// The placement rule that matched
    pub mode: PlacementMode,
    /// Template variant the generation used
    pub variant: TemplateVariant,
    /// Per-file outcomes in write order
    pub files: WriteReport,
}

/// Generate one resource under `root`.
///
/// `root` is the project working root; `custom_path` is the explicit
/// destination override; `templates` is the resolved template root. The
/// chooser is consulted only where the resolvers need a decision, and a
/// cancelled prompt abandons the generation with no files written.
pub async fn generate(
    root: &Path,
    kind: ResourceKind,
    raw_name: &str,
    custom_path: Option<&Path>,
    chooser: &dyn Chooser,
    templates: &TemplateRoot,
) -> Result<GenerationReport> {
    log::debug!("generating {} '{}' under {}", kind, raw_name, root.display());

    let destination = resolve_destination(root, kind, raw_name, custom_path, chooser).await?;
    let set = resolve_templates(kind, &destination.name.kebab, chooser, templates).await?;
    let context = SubstitutionContext::for_name(&destination.name);
    let files = write_set(&set, &destination.dir, &context).await?;

    Ok(GenerationReport {
        kind,
        name: destination.name,
        destination: destination.dir,
        mode: destination.mode,
        variant: set.variant,
        files,
    })
}
