//! Template set resolution.
//!
//! Maps a resource kind and a normalized name to the directory of template
//! files to read and the output files they produce. Modules with the
//! conventional names `user`, `users` or `auth` are offered a richer
//! specialized template set; declining the offer always falls back to the
//! generic one. Services and repositories have a single generic set.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::prompt::Chooser;

use super::{ResourceKind, TemplateRoot};

/// Which template bundle a generation uses.
///
/// Resolution is a pure function of the kind, the kebab name and the user's
/// decision; the chooser is only consulted for the reserved module names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateVariant {
    /// Plain scaffold for any name
    Generic,
    /// Standard user CRUD module (`user` / `users`)
    User,
    /// Standard auth module (`auth`)
    Auth,
}

impl TemplateVariant {
    /// Directory name of this variant's template set for the given kind
    pub fn dir_name(&self, kind: ResourceKind) -> &'static str {
        match (kind, self) {
            (ResourceKind::Module, TemplateVariant::User) => "module_user",
            (ResourceKind::Module, TemplateVariant::Auth) => "module_auth",
            (ResourceKind::Module, TemplateVariant::Generic) => "module",
            (ResourceKind::Service, _) => "service",
            (ResourceKind::Repository, _) => "repository",
        }
    }
}

/// One template file and the output file it renders to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Template file name, relative to the set directory
    pub source: String,
    /// Output file name, relative to the destination directory
    pub output: String,
}

impl PlannedFile {
    fn new(source: &str, output: String) -> Self {
        Self {
            source: source.to_string(),
            output,
        }
    }
}

/// A resolved template directory plus the fixed list of files it produces.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    /// Directory holding the template files
    pub dir: PathBuf,
    /// The variant this set was resolved to
    pub variant: TemplateVariant,
    /// Files to generate, in write order
    pub files: Vec<PlannedFile>,
}

/// Resolve the template set for one generation.
///
/// Only module generation for a reserved conventional name suspends on the
/// chooser; every other path resolves without interaction.
pub async fn resolve_templates(
    kind: ResourceKind,
    kebab: &str,
    chooser: &dyn Chooser,
    templates: &TemplateRoot,
) -> Result<TemplateSet> {
    let variant = resolve_variant(kind, kebab, chooser).await?;

    let dir = templates.set_dir(variant.dir_name(kind));
    if !dir.exists() {
        return Err(Error::TemplateRead {
            path: dir,
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "template set directory not found",
            ),
        });
    }

    Ok(TemplateSet {
        dir,
        variant,
        files: planned_files(kind, kebab),
    })
}

async fn resolve_variant(
    kind: ResourceKind,
    kebab: &str,
    chooser: &dyn Chooser,
) -> Result<TemplateVariant> {
    if kind != ResourceKind::Module {
        return Ok(TemplateVariant::Generic);
    }
    match kebab {
        "user" | "users" => {
            if chooser
                .confirm("Use the standard user module template?", true)
                .await?
            {
                Ok(TemplateVariant::User)
            } else {
                Ok(TemplateVariant::Generic)
            }
        }
        "auth" => {
            if chooser
                .confirm("Use the standard auth module template?", true)
                .await?
            {
                Ok(TemplateVariant::Auth)
            } else {
                Ok(TemplateVariant::Generic)
            }
        }
        _ => Ok(TemplateVariant::Generic),
    }
}

/// The fixed file list per kind, with output names rendered from the kebab
/// name up front so every file of one invocation agrees on casing.
fn planned_files(kind: ResourceKind, kebab: &str) -> Vec<PlannedFile> {
    match kind {
        ResourceKind::Module => vec![
            PlannedFile::new("controller.tpl", format!("{kebab}.controller.ts")),
            PlannedFile::new("service.tpl", format!("{kebab}.service.ts")),
            PlannedFile::new("repository.tpl", format!("{kebab}.repository.ts")),
            PlannedFile::new("dto.tpl", format!("dto/{kebab}.dto.ts")),
        ],
        ResourceKind::Service => {
            vec![PlannedFile::new("service.tpl", format!("{kebab}.service.ts"))]
        }
        ResourceKind::Repository => vec![PlannedFile::new(
            "repository.tpl",
            format!("{kebab}.repository.ts"),
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedChooser;
    use std::fs;
    use tempfile::tempdir;

    fn template_root_fixture() -> (tempfile::TempDir, TemplateRoot) {
        let temp = tempdir().unwrap();
        for set in ["module", "module_user", "module_auth", "service", "repository"] {
            fs::create_dir_all(temp.path().join(set)).unwrap();
        }
        let root = TemplateRoot::new(temp.path().to_path_buf());
        (temp, root)
    }

    #[tokio::test]
    async fn test_module_set_lists_four_files() -> Result<()> {
        let (_tmp, root) = template_root_fixture();
        let chooser = ScriptedChooser::new();

        let set = resolve_templates(ResourceKind::Module, "billing", &chooser, &root).await?;
        assert_eq!(set.variant, TemplateVariant::Generic);
        let outputs: Vec<_> = set.files.iter().map(|f| f.output.as_str()).collect();
        assert_eq!(
            outputs,
            [
                "billing.controller.ts",
                "billing.service.ts",
                "billing.repository.ts",
                "dto/billing.dto.ts",
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_reserved_name_affirmed_uses_specialized_set() -> Result<()> {
        let (_tmp, root) = template_root_fixture();
        let chooser = ScriptedChooser::new().with_confirmation(true);

        let set = resolve_templates(ResourceKind::Module, "user", &chooser, &root).await?;
        assert_eq!(set.variant, TemplateVariant::User);
        assert!(set.dir.ends_with("module_user"));
        Ok(())
    }

    #[tokio::test]
    async fn test_reserved_name_declined_falls_back_to_generic() -> Result<()> {
        let (_tmp, root) = template_root_fixture();
        let chooser = ScriptedChooser::new().with_confirmation(false);

        let set = resolve_templates(ResourceKind::Module, "users", &chooser, &root).await?;
        assert_eq!(set.variant, TemplateVariant::Generic);
        assert!(set.dir.ends_with("module"));
        Ok(())
    }

    #[tokio::test]
    async fn test_auth_name_offers_auth_set() -> Result<()> {
        let (_tmp, root) = template_root_fixture();
        let chooser = ScriptedChooser::new().with_confirmation(true);

        let set = resolve_templates(ResourceKind::Module, "auth", &chooser, &root).await?;
        assert_eq!(set.variant, TemplateVariant::Auth);
        Ok(())
    }

    #[tokio::test]
    async fn test_components_never_prompt() -> Result<()> {
        let (_tmp, root) = template_root_fixture();
        // An empty chooser cancels on any prompt, so success proves no
        // prompt was issued even for a reserved name.
        let chooser = ScriptedChooser::new();

        let set = resolve_templates(ResourceKind::Service, "user", &chooser, &root).await?;
        assert_eq!(set.variant, TemplateVariant::Generic);
        assert_eq!(set.files.len(), 1);
        assert_eq!(set.files[0].output, "user.service.ts");

        let set = resolve_templates(ResourceKind::Repository, "auth", &chooser, &root).await?;
        assert_eq!(set.files[0].output, "auth.repository.ts");
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_set_directory_is_template_error() {
        let temp = tempdir().unwrap();
        let root = TemplateRoot::new(temp.path().to_path_buf());
        let chooser = ScriptedChooser::new();

        let result = resolve_templates(ResourceKind::Service, "billing", &chooser, &root).await;
        assert!(matches!(result, Err(Error::TemplateRead { .. })));
    }
}
