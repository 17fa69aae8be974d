//! Template rendering and conflict-aware file writing.
//!
//! Processes a template set strictly in order, one file at a time: read the
//! template, substitute the placeholder tokens, check the destination and
//! write. An existing destination file is never overwritten; it is skipped
//! and reported, and the batch continues. A missing template aborts the
//! batch, but files written before the abort stay on disk. Scaffolding is
//! additive, never destructive; there is no rollback.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tokio::fs;

use crate::error::{Error, Result};
use crate::ident::NormalizedName;
use crate::templates::TemplateSet;

/// Placeholder token replaced by the PascalCase name.
pub const PASCAL_TOKEN: &str = "{{PascalName}}";
/// Placeholder token replaced by the kebab-case name.
pub const KEBAB_TOKEN: &str = "{{kebabName}}";

/// Ordered placeholder-token replacements applied to template text.
///
/// Closed set: generation uses exactly the two name tokens; verbatim copies
/// (e.g. docker files) use an empty context.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionContext {
    entries: Vec<(String, String)>,
}

impl SubstitutionContext {
    /// Context with no replacements, for templates copied verbatim
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard generation context for one normalized name
    pub fn for_name(name: &NormalizedName) -> Self {
        Self {
            entries: vec![
                (PASCAL_TOKEN.to_string(), name.pascal.clone()),
                (KEBAB_TOKEN.to_string(), name.kebab.clone()),
            ],
        }
    }

    /// Replace every occurrence of every token. Literal, global,
    /// non-overlapping substitution; no pattern syntax.
    pub fn apply(&self, text: &str) -> String {
        self.entries
            .iter()
            .fold(text.to_string(), |acc, (token, value)| {
                acc.replace(token, value)
            })
    }
}

/// What happened to one intended output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutcome {
    /// The file was rendered and written
    Created,
    /// The destination already existed and was left untouched
    Skipped,
}

/// Per-file record of a write batch.
#[derive(Debug, Clone, Serialize)]
pub struct WriteEntry {
    /// Output file, relative to the destination directory
    pub file: String,
    pub outcome: FileOutcome,
}

/// Outcome of one write batch, in template-set order.
///
/// Partial success (some files created, some skipped) is an expected,
/// reportable result, not an error.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WriteReport {
    pub entries: Vec<WriteEntry>,
}

impl WriteReport {
    /// Number of files written
    pub fn created(&self) -> usize {
        self.count(FileOutcome::Created)
    }

    /// Number of files skipped because they already existed
    pub fn skipped(&self) -> usize {
        self.count(FileOutcome::Skipped)
    }

    fn count(&self, outcome: FileOutcome) -> usize {
        self.entries.iter().filter(|e| e.outcome == outcome).count()
    }
}

/// Render every file of a template set into `dest_dir`.
///
/// Strictly sequential in the set's fixed order so per-file progress
/// reporting matches generation order.
pub async fn write_set(
    set: &TemplateSet,
    dest_dir: &Path,
    context: &SubstitutionContext,
) -> Result<WriteReport> {
    let mut report = WriteReport::default();

    for planned in &set.files {
        let template_path = set.dir.join(&planned.source);
        let template_text = read_template(&template_path).await?;
        let rendered = context.apply(&template_text);

        let output_path = dest_dir.join(&planned.output);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        if output_path.exists() {
            log::warn!("skipping existing file: {}", output_path.display());
            report.entries.push(WriteEntry {
                file: planned.output.clone(),
                outcome: FileOutcome::Skipped,
            });
            continue;
        }

        fs::write(&output_path, rendered).await?;
        log::debug!("wrote {}", output_path.display());
        report.entries.push(WriteEntry {
            file: planned.output.clone(),
            outcome: FileOutcome::Created,
        });
    }

    Ok(report)
}

async fn read_template(path: &Path) -> Result<String> {
    fs::read_to_string(path).await.map_err(|source| {
        let path = PathBuf::from(path);
        Error::TemplateRead { path, source }
    })
}
