//! Project-level operations: scaffold a new project, list and remove
//! modules, health checks, and optional feature files.
//!
//! Everything here re-reads the filesystem at call time; there is no
//! registry of generated artifacts. Destructive operations go through the
//! chooser and default to "no".

use std::io;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value as JsonValue;
use tokio::{fs, task};

use crate::destination::{list_module_dirs, modules_dir};
use crate::error::{Error, Result};
use crate::ident::normalize;
use crate::prompt::Chooser;
use crate::templates::{PlannedFile, TemplateRoot, TemplateSet, TemplateVariant};
use crate::writer::{write_set, SubstitutionContext, WriteReport};

/// Valid project name: lowercase letters, digits, `-`, `_`, `.`
static PROJECT_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9\-_.]+$").expect("project name pattern is valid"));

const GITIGNORE: &str = "node_modules\ndist\n.env\n.DS_Store\ncoverage\n";

/// One module row for display, with its direct files.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleEntry {
    pub name: String,
    pub files: Vec<String>,
}

/// Result of a single project health check.
#[derive(Debug, Clone, Serialize)]
pub struct HealthCheck {
    pub ok: bool,
    pub message: String,
}

impl HealthCheck {
    fn pass(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Scaffold a new project directory from the `project` template tree.
///
/// Prompts for a name when none is supplied, validates it, asks for
/// confirmation, copies the template tree, patches the `package.json` name
/// and writes a `.gitignore`. Returns the created project path.
pub async fn init_project(
    root: &Path,
    name: Option<String>,
    chooser: &dyn Chooser,
    templates: &TemplateRoot,
) -> Result<PathBuf> {
    let name = match name {
        Some(name) => name,
        None => {
            chooser
                .input(
                    "What is the name of your project?",
                    Some("my-express-app"),
                    false,
                )
                .await?
        }
    };

    if !PROJECT_NAME.is_match(&name) {
        return Err(Error::invalid_name(format!(
            "project name '{name}' may only include lowercase letters, numbers, '-', '_' and '.'"
        )));
    }

    let project_path = root.join(&name);
    if project_path.exists() {
        return Err(Error::AlreadyExists {
            path: project_path,
        });
    }

    let confirmed = chooser
        .confirm(
            &format!("Create a new project in {}?", project_path.display()),
            true,
        )
        .await?;
    if !confirmed {
        return Err(Error::Cancelled);
    }

    let template_dir = templates.set_dir("project");
    if !template_dir.is_dir() {
        return Err(Error::TemplateRead {
            path: template_dir,
            source: io::Error::new(io::ErrorKind::NotFound, "project template not found"),
        });
    }

    copy_dir_recursive(template_dir, project_path.clone()).await?;
    patch_package_name(&project_path, &name).await?;
    fs::write(project_path.join(".gitignore"), GITIGNORE).await?;

    log::debug!("created project at {}", project_path.display());
    Ok(project_path)
}

/// Copy a directory tree. The walk is synchronous filesystem work, so it
/// runs on the blocking pool.
async fn copy_dir_recursive(src: PathBuf, dst: PathBuf) -> Result<()> {
    task::spawn_blocking(move || {
        fn copy_dir(src: &Path, dst: &Path) -> io::Result<()> {
            std::fs::create_dir_all(dst)?;
            for entry in std::fs::read_dir(src)? {
                let entry = entry?;
                let target = dst.join(entry.file_name());
                if entry.file_type()?.is_dir() {
                    copy_dir(&entry.path(), &target)?;
                } else {
                    std::fs::copy(entry.path(), target)?;
                }
            }
            Ok(())
        }

        copy_dir(&src, &dst)
    })
    .await
    .map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to join blocking task: {}", e),
        )
    })??;
    Ok(())
}

/// Set the `name` field of the scaffolded `package.json`, when present.
async fn patch_package_name(project_path: &Path, name: &str) -> Result<()> {
    let package_json = project_path.join("package.json");
    if !package_json.exists() {
        return Ok(());
    }

    let content = fs::read_to_string(&package_json).await?;
    let mut manifest: JsonValue = serde_json::from_str(&content)?;
    if let Some(object) = manifest.as_object_mut() {
        object.insert("name".to_string(), JsonValue::String(name.to_string()));
    }
    let mut rendered = serde_json::to_string_pretty(&manifest)?;
    rendered.push('\n');
    fs::write(&package_json, rendered).await?;
    Ok(())
}

/// Enumerate the modules of a project with their direct files.
pub async fn list_modules(root: &Path) -> Result<Vec<ModuleEntry>> {
    let modules = modules_dir(root);
    if !modules.is_dir() {
        return Err(Error::ModulesDirectoryMissing { path: modules });
    }

    let mut entries = Vec::new();
    for name in list_module_dirs(&modules).await? {
        let module_path = modules.join(&name);
        let mut files = Vec::new();
        let mut dir = fs::read_dir(&module_path).await?;
        while let Some(entry) = dir.next_entry().await? {
            if entry.file_type().await?.is_file() {
                files.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        files.sort();
        entries.push(ModuleEntry { name, files });
    }
    Ok(entries)
}

/// Delete a module directory after explicit confirmation (default no).
pub async fn remove_module(root: &Path, raw_name: &str, chooser: &dyn Chooser) -> Result<()> {
    let kebab = normalize(raw_name).kebab;
    let dir = modules_dir(root).join(&kebab);
    if !dir.is_dir() {
        return Err(Error::ModuleNotFound {
            name: raw_name.to_string(),
        });
    }

    let confirmed = chooser
        .confirm(
            &format!("Permanently delete module '{raw_name}'? This cannot be undone."),
            false,
        )
        .await?;
    if !confirmed {
        return Err(Error::Cancelled);
    }

    fs::remove_dir_all(&dir).await?;
    log::debug!("removed module at {}", dir.display());
    Ok(())
}

/// Run the project health checks. Never fails the call itself; each check
/// reports its own outcome.
pub async fn check_project(root: &Path) -> Vec<HealthCheck> {
    let mut checks = vec![
        existence_check(root, "package.json", "package.json not found. Are you in the root of the project?"),
        existence_check(root, "tsconfig.json", "tsconfig.json not found."),
        existence_check(root, "src", "src directory not found."),
        existence_check(root, ".env", ".env file is missing (common for new clones; make sure you have one)."),
    ];
    checks.push(dependency_check(root).await);
    checks
}

fn existence_check(root: &Path, entry: &str, missing_message: &str) -> HealthCheck {
    if root.join(entry).exists() {
        HealthCheck::pass(format!("{entry} found."))
    } else {
        HealthCheck::fail(missing_message)
    }
}

async fn dependency_check(root: &Path) -> HealthCheck {
    let manifest: JsonValue = match fs::read_to_string(root.join("package.json")).await {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(_) => return HealthCheck::fail("Could not read package.json"),
        },
        Err(_) => return HealthCheck::fail("Could not read package.json"),
    };

    let has_dependency = |name: &str| {
        ["dependencies", "devDependencies"]
            .iter()
            .any(|section| manifest.get(section).and_then(|deps| deps.get(name)).is_some())
    };

    let missing: Vec<&str> = ["express", "typescript"]
        .into_iter()
        .filter(|dep| !has_dependency(dep))
        .collect();

    if missing.is_empty() {
        HealthCheck::pass("Key dependencies found.")
    } else {
        HealthCheck::fail(format!("Missing dependencies: {}", missing.join(", ")))
    }
}

/// Copy the Docker support files into the project root, skipping any that
/// already exist.
pub async fn add_docker(root: &Path, templates: &TemplateRoot) -> Result<WriteReport> {
    let dir = templates.set_dir("docker");
    if !dir.is_dir() {
        return Err(Error::TemplateRead {
            path: dir,
            source: io::Error::new(io::ErrorKind::NotFound, "docker template not found"),
        });
    }

    let set = TemplateSet {
        dir,
        variant: TemplateVariant::Generic,
        files: ["Dockerfile", "docker-compose.yml", ".dockerignore"]
            .iter()
            .map(|file| PlannedFile {
                source: file.to_string(),
                output: file.to_string(),
            })
            .collect(),
    };

    write_set(&set, root, &SubstitutionContext::empty()).await
}
