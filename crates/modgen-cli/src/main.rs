//! modgen CLI entrypoint
//! Parses command-line arguments and dispatches to the core scaffolding
//! engine, binding interactive prompts to the terminal via dialoguer.

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

// External imports (alphabetized)
use anyhow::Context;
use async_trait::async_trait;
use clap::Parser;
use dialoguer::{Confirm, Input, Select};
use modgen_core::{
    add_docker, check_project, generate, init_project, list_modules, remove_module, Chooser,
    Config, Error, FileOutcome, GenerationReport, ResourceKind, TemplateRoot,
};

#[derive(Parser)]
#[command(name = "modgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new modular Express project
    Init {
        /// Name of the project (prompted when omitted)
        project_name: Option<String>,
        /// Custom template directory
        #[arg(long)]
        template_dir: Option<PathBuf>,
    },
    /// Generate a new resource (module, service, repository)
    Create {
        /// Type of resource (module, service, repository)
        kind: String,
        /// Name of the resource
        ///
        /// For services and repositories the name may carry a path prefix,
        /// e.g. `Services/Mailer` lands in `src/Services/`.
        name: String,
        /// Explicit destination directory for the resource
        #[arg(long)]
        path: Option<PathBuf>,
        /// Custom template directory
        #[arg(long)]
        template_dir: Option<PathBuf>,
    },
    /// List all modules in the project
    List,
    /// Remove a module
    Remove {
        /// Type of resource (module)
        kind: String,
        /// Name of the resource
        name: String,
    },
    /// Add features to your project (docker)
    Add {
        /// Feature to add (docker)
        feature: String,
        /// Custom template directory
        #[arg(long)]
        template_dir: Option<PathBuf>,
    },
    /// Check your project health and environment
    Doctor,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    let root = std::env::current_dir().context("Failed to determine working directory")?;

    match run(cli.command, &root).await {
        Ok(()) => Ok(()),
        Err(Error::Cancelled) => {
            println!("Operation cancelled.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

async fn run(command: Commands, root: &Path) -> modgen_core::Result<()> {
    let config = Config::load_or_default(root).await?;
    let chooser = DialoguerChooser;

    match command {
        Commands::Init {
            project_name,
            template_dir,
        } => {
            let templates = template_root(template_dir, &config)?;
            let project = init_project(root, project_name, &chooser, &templates).await?;
            let name = project
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();

            println!("✅ Project {} created successfully!", name);
            println!("\nNext steps:");
            println!("  cd {}", name);
            println!("  npm install");
            println!("  npm run dev");
        }
        Commands::Create {
            kind,
            name,
            path,
            template_dir,
        } => {
            let kind: ResourceKind = kind.parse()?;
            let templates = template_root(template_dir, &config)?;

            println!("Generating {} {}...", kind, name);
            let report = generate(root, kind, &name, path.as_deref(), &chooser, &templates).await?;
            render_report(&report);
        }
        Commands::List => {
            let modules = list_modules(root).await?;
            if modules.is_empty() {
                println!("No modules found.");
                return Ok(());
            }

            println!("\n📦 Modules:\n");
            for module in &modules {
                println!("├── 📂 {}", module.name);
                for file in &module.files {
                    println!("│   ├── {} {}", file_icon(file), file);
                }
                println!("│");
            }
            println!("Found {} modules.\n", modules.len());
        }
        Commands::Remove { kind, name } => {
            let kind: ResourceKind = kind.parse()?;
            if kind != ResourceKind::Module {
                return Err(Error::config(format!(
                    "Only 'module' removal is supported, got '{kind}'"
                )));
            }
            remove_module(root, &name, &chooser).await?;
            println!("✅ Module '{}' deleted successfully.", name);
        }
        Commands::Add {
            feature,
            template_dir,
        } => {
            if feature != "docker" {
                return Err(Error::config(format!(
                    "Feature '{feature}' not supported. Try 'docker'."
                )));
            }
            let templates = template_root(template_dir, &config)?;
            let report = add_docker(root, &templates).await?;
            for entry in &report.entries {
                match entry.outcome {
                    FileOutcome::Created => println!("  Created {}", entry.file),
                    FileOutcome::Skipped => println!("  Skipped {} (already exists)", entry.file),
                }
            }
            println!("\n✅ Docker support added! 🐳");
            println!("Run: docker-compose up --build");
        }
        Commands::Doctor => {
            println!("\n🩺 Checking project health...\n");
            let checks = check_project(root).await;
            let issues = checks.iter().filter(|c| !c.ok).count();
            for check in &checks {
                if check.ok {
                    println!("✔ {}", check.message);
                } else {
                    println!("⚠ {}", check.message);
                }
            }
            println!("\n{}\n", "-".repeat(30));
            if issues == 0 {
                println!("✨ Everything looks good! You are ready to code.");
            } else {
                println!("Found {} potential issues. Please review them.", issues);
            }
        }
    }
    Ok(())
}

/// Resolve the template root from the flag, the project configuration, or
/// the standard discovery locations.
fn template_root(flag: Option<PathBuf>, config: &Config) -> modgen_core::Result<TemplateRoot> {
    let custom = flag.or_else(|| config.template_dir.as_ref().map(PathBuf::from));
    let root = TemplateRoot::discover(custom.as_deref())?;
    tracing::debug!("using templates from {}", root.path().display());
    Ok(root)
}

fn render_report(report: &GenerationReport) {
    for entry in &report.files.entries {
        match entry.outcome {
            FileOutcome::Created => println!("  Created {}", entry.file),
            FileOutcome::Skipped => println!("  Skipped {} (already exists)", entry.file),
        }
    }
    println!(
        "\n✅ Successfully generated {} '{}' in: {}",
        report.kind,
        report.name.kebab,
        report.destination.display()
    );
}

fn file_icon(file: &str) -> &'static str {
    if file.contains("controller") {
        "🎮"
    } else if file.contains("service") {
        "⚙️ "
    } else if file.contains("repository") {
        "🗄️ "
    } else if file.contains("dto") {
        "📨"
    } else {
        "📄"
    }
}

/// Terminal-backed chooser over dialoguer prompts. Esc or an interrupted
/// prompt maps to cancellation.
struct DialoguerChooser;

#[async_trait]
impl Chooser for DialoguerChooser {
    async fn select(&self, prompt: &str, choices: &[String]) -> modgen_core::Result<String> {
        let selection = Select::new()
            .with_prompt(prompt)
            .items(choices)
            .default(0)
            .interact_opt()
            .map_err(prompt_error)?;
        match selection {
            Some(index) => Ok(choices[index].clone()),
            None => Err(Error::Cancelled),
        }
    }

    async fn confirm(&self, prompt: &str, default: bool) -> modgen_core::Result<bool> {
        let answer = Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
            .map_err(prompt_error)?;
        answer.ok_or(Error::Cancelled)
    }

    async fn input(
        &self,
        prompt: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> modgen_core::Result<String> {
        let mut input = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(allow_empty);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(prompt_error)
    }
}

fn prompt_error(err: dialoguer::Error) -> Error {
    Error::Io(std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))
}
