//! End-to-end generation tests against the shipped template tree.

use std::path::{Path, PathBuf};

use modgen_core::{
    generate, FileOutcome, PlacementMode, ResourceKind, Result, ScriptedChooser, TemplateRoot,
    TemplateVariant, GLOBAL_SHARED,
};
use tempfile::tempdir;

/// The workspace `templates/` directory, two levels up from this crate.
fn shipped_templates() -> TemplateRoot {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir
        .parent()
        .and_then(Path::parent)
        .expect("crate lives two levels under the workspace root");
    TemplateRoot::new(workspace_root.join("templates"))
}

#[tokio::test]
async fn generates_generic_user_module_when_specialization_declined() -> Result<()> {
    let root = tempdir()?;
    let templates = shipped_templates();
    let chooser = ScriptedChooser::new().with_confirmation(false);

    let report = generate(
        root.path(),
        ResourceKind::Module,
        "user",
        None,
        &chooser,
        &templates,
    )
    .await?;

    assert_eq!(report.variant, TemplateVariant::Generic);
    assert_eq!(report.mode, PlacementMode::ModuleRoot);
    assert_eq!(report.files.created(), 4);

    let module_dir = root.path().join("src/modules/user");
    let expected = [
        "user.controller.ts",
        "user.service.ts",
        "user.repository.ts",
        "dto/user.dto.ts",
    ];
    for (entry, name) in report.files.entries.iter().zip(expected) {
        assert_eq!(entry.file, name);
        assert_eq!(entry.outcome, FileOutcome::Created);

        let content = std::fs::read_to_string(module_dir.join(name))?;
        assert!(
            !content.contains("{{PascalName}}") && !content.contains("{{kebabName}}"),
            "unsubstituted token left in {name}"
        );
        assert!(content.contains("User"), "pascal name missing in {name}");
    }

    let controller = std::fs::read_to_string(module_dir.join("user.controller.ts"))?;
    assert!(controller.contains("export class UserController"));
    assert!(controller.contains("./user.service"));
    Ok(())
}

#[tokio::test]
async fn generates_specialized_user_module_when_affirmed() -> Result<()> {
    let root = tempdir()?;
    let templates = shipped_templates();
    let chooser = ScriptedChooser::new().with_confirmation(true);

    let report = generate(
        root.path(),
        ResourceKind::Module,
        "users",
        None,
        &chooser,
        &templates,
    )
    .await?;

    assert_eq!(report.variant, TemplateVariant::User);
    let service = std::fs::read_to_string(
        root.path().join("src/modules/users/users.service.ts"),
    )?;
    assert!(service.contains("export class UsersService"));
    assert!(service.contains("findByEmail"));
    Ok(())
}

#[tokio::test]
async fn existing_module_directory_aborts_before_any_write() -> Result<()> {
    let root = tempdir()?;
    let templates = shipped_templates();
    std::fs::create_dir_all(root.path().join("src/modules/billing"))?;
    let chooser = ScriptedChooser::new();

    let result = generate(
        root.path(),
        ResourceKind::Module,
        "billing",
        None,
        &chooser,
        &templates,
    )
    .await;

    assert!(matches!(result, Err(modgen_core::Error::AlreadyExists { .. })));
    let entries: Vec<_> = std::fs::read_dir(root.path().join("src/modules/billing"))?.collect();
    assert!(entries.is_empty());
    Ok(())
}

#[tokio::test]
async fn module_custom_path_is_used_without_kebab_subfolder() -> Result<()> {
    let root = tempdir()?;
    let templates = shipped_templates();
    let chooser = ScriptedChooser::new();

    let report = generate(
        root.path(),
        ResourceKind::Module,
        "billing",
        Some(Path::new("lib/billing")),
        &chooser,
        &templates,
    )
    .await?;

    assert_eq!(report.destination, root.path().join("lib/billing"));
    assert!(root.path().join("lib/billing/billing.controller.ts").exists());
    Ok(())
}

#[tokio::test]
async fn existing_component_file_is_skipped_byte_identical() -> Result<()> {
    let root = tempdir()?;
    let templates = shipped_templates();
    let module_dir = root.path().join("src/modules/billing");
    std::fs::create_dir_all(&module_dir)?;
    let original = "// hand-written billing service\n";
    std::fs::write(module_dir.join("billing.service.ts"), original)?;

    let chooser = ScriptedChooser::new().with_selection("billing");
    let report = generate(
        root.path(),
        ResourceKind::Service,
        "billing",
        None,
        &chooser,
        &templates,
    )
    .await?;

    assert_eq!(report.files.created(), 0);
    assert_eq!(report.files.skipped(), 1);
    let preserved = std::fs::read_to_string(module_dir.join("billing.service.ts"))?;
    assert_eq!(preserved, original);
    Ok(())
}

#[tokio::test]
async fn path_separator_routes_component_under_src() -> Result<()> {
    let root = tempdir()?;
    let templates = shipped_templates();
    let chooser = ScriptedChooser::new();

    let report = generate(
        root.path(),
        ResourceKind::Service,
        "Services/AwsHelper",
        None,
        &chooser,
        &templates,
    )
    .await?;

    assert_eq!(report.mode, PlacementMode::NestedPath);
    assert_eq!(report.name.pascal, "AwsHelper");

    let output = root.path().join("src/Services/aws-helper.service.ts");
    let content = std::fs::read_to_string(output)?;
    assert!(content.contains("export class AwsHelperService"));
    Ok(())
}

#[tokio::test]
async fn global_shared_repository_routes_to_common() -> Result<()> {
    let root = tempdir()?;
    let templates = shipped_templates();
    std::fs::create_dir_all(root.path().join("src/modules/billing"))?;
    let chooser = ScriptedChooser::new().with_selection(GLOBAL_SHARED);

    let report = generate(
        root.path(),
        ResourceKind::Repository,
        "audit",
        None,
        &chooser,
        &templates,
    )
    .await?;

    assert_eq!(report.mode, PlacementMode::GlobalShared);
    assert!(root
        .path()
        .join("src/common/repositories/audit.repository.ts")
        .exists());
    // Never lands inside a module directory.
    assert!(!root
        .path()
        .join("src/modules/billing/audit.repository.ts")
        .exists());
    Ok(())
}

#[tokio::test]
async fn cancelled_placement_prompt_writes_nothing() -> Result<()> {
    let root = tempdir()?;
    let templates = shipped_templates();
    std::fs::create_dir_all(root.path().join("src/modules/billing"))?;
    let chooser = ScriptedChooser::new(); // empty queue: prompt cancels

    let result = generate(
        root.path(),
        ResourceKind::Service,
        "mailer",
        None,
        &chooser,
        &templates,
    )
    .await;

    assert!(matches!(result, Err(modgen_core::Error::Cancelled)));
    assert!(!root.path().join("src/common").exists());
    let entries: Vec<_> = std::fs::read_dir(root.path().join("src/modules/billing"))?.collect();
    assert!(entries.is_empty());
    Ok(())
}
