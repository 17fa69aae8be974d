//! Destination path resolution for generated resources.
//!
//! Decides where the files of one generation land, creating the directory
//! as a side effect. Explicit structural signals always win over
//! interactive disambiguation: a path separator in the name or a custom
//! base path routes the component without a prompt, so the tool stays
//! scriptable when the caller supplies enough information. Only a bare
//! component name falls through to the interactive module/global selection.
//!
//! The working root is an explicit parameter on every call; the core never
//! reads the process working directory.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tokio::fs;

use crate::error::{Error, Result};
use crate::ident::{normalize, NormalizedName};
use crate::prompt::Chooser;
use crate::templates::ResourceKind;

/// Synthetic chooser entry that routes a component into `src/common`
/// instead of a module directory.
pub const GLOBAL_SHARED: &str = "Global/Shared";

/// How the destination of a generation was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementMode {
    /// A new module directory under `src/modules`
    ModuleRoot,
    /// Component routed by path separators in its name
    NestedPath,
    /// Component routed by an explicit base path
    CustomBase,
    /// Component routed to `src/common` via the Global/Shared selection
    GlobalShared,
    /// Component placed inside an existing module chosen interactively
    ModuleScoped,
}

/// A resolved output directory for one generation.
///
/// The normalized name is derived here, exactly once, from the terminal
/// segment of the raw name; everything downstream reuses it.
#[derive(Debug, Clone)]
pub struct Destination {
    /// Directory the output files land in; exists once resolution returns
    pub dir: PathBuf,
    /// Normalized resource name
    pub name: NormalizedName,
    /// The placement rule that matched
    pub mode: PlacementMode,
}

/// Resolve the destination directory for a generation. First matching rule
/// wins; see the module docs for the precedence rationale.
pub async fn resolve_destination(
    root: &Path,
    kind: ResourceKind,
    raw_name: &str,
    custom_path: Option<&Path>,
    chooser: &dyn Chooser,
) -> Result<Destination> {
    match kind {
        ResourceKind::Module => resolve_module(root, raw_name, custom_path).await,
        ResourceKind::Service | ResourceKind::Repository => {
            resolve_component(root, kind, raw_name, custom_path, chooser).await
        }
    }
}

/// Modules always get a fresh directory: `src/modules/<kebab>` by default,
/// or the custom path verbatim (no kebab subfolder appended).
async fn resolve_module(
    root: &Path,
    raw_name: &str,
    custom_path: Option<&Path>,
) -> Result<Destination> {
    let name = normalize(raw_name);
    let dir = match custom_path {
        Some(path) => resolve_against(root, path),
        None => modules_dir(root).join(&name.kebab),
    };

    if dir.exists() {
        return Err(Error::AlreadyExists { path: dir });
    }
    fs::create_dir_all(&dir).await?;

    Ok(Destination {
        dir,
        name,
        mode: PlacementMode::ModuleRoot,
    })
}

async fn resolve_component(
    root: &Path,
    kind: ResourceKind,
    raw_name: &str,
    custom_path: Option<&Path>,
    chooser: &dyn Chooser,
) -> Result<Destination> {
    // Rule 1: a separator in the name carries an explicit relative path.
    if let Some((prefix, last)) = raw_name.rsplit_once('/') {
        if last.is_empty() {
            return Err(Error::invalid_name(format!(
                "component name must not end with a path separator: '{raw_name}'"
            )));
        }
        let mut dir = root.join("src");
        for segment in prefix.split('/').filter(|s| !s.is_empty()) {
            dir.push(segment);
        }
        // Components may share a directory, so no existence conflict here.
        fs::create_dir_all(&dir).await?;
        return Ok(Destination {
            dir,
            name: normalize(last),
            mode: PlacementMode::NestedPath,
        });
    }

    // Rule 2: an explicit base path, resolved against the working root.
    if let Some(path) = custom_path {
        let dir = resolve_against(root, path);
        fs::create_dir_all(&dir).await?;
        return Ok(Destination {
            dir,
            name: normalize(raw_name),
            mode: PlacementMode::CustomBase,
        });
    }

    // Rule 3: interactive selection among existing modules, plus the
    // synthetic Global/Shared entry.
    let modules = modules_dir(root);
    if !modules.is_dir() {
        return Err(Error::ModulesDirectoryMissing { path: modules });
    }

    let mut choices = list_module_dirs(&modules).await?;
    choices.push(GLOBAL_SHARED.to_string());

    let prompt = format!("Where should this {kind} live?");
    let selected = chooser.select(&prompt, &choices).await?;

    if selected == GLOBAL_SHARED {
        let dir = root.join("src").join("common").join(kind.plural());
        fs::create_dir_all(&dir).await?;
        return Ok(Destination {
            dir,
            name: normalize(raw_name),
            mode: PlacementMode::GlobalShared,
        });
    }

    // The module may have vanished between listing and selection.
    let dir = modules.join(&selected);
    if !dir.is_dir() {
        return Err(Error::ModuleNotFound { name: selected });
    }
    Ok(Destination {
        dir,
        name: normalize(raw_name),
        mode: PlacementMode::ModuleScoped,
    })
}

/// The module root of a project
pub fn modules_dir(root: &Path) -> PathBuf {
    root.join("src").join("modules")
}

/// Sorted names of the module subdirectories
pub async fn list_module_dirs(modules: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    let mut entries = fs::read_dir(modules).await?;
    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_dir() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    names.sort();
    Ok(names)
}

fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
