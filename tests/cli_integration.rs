//! CLI integration tests for cursor-playbook
//!
//! Each test gets its own fake home directory (for the user registry) and
//! project directory, then drives the real binary end to end. The built-in
//! rule store resolves to the `rules/` directory of this checkout.

use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Command with HOME pointed at a fake home and cwd at the project
fn playbook_cmd(home: &Path, project: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("cursor-playbook"));
    cmd.env("HOME", home).current_dir(project);
    cmd
}

/// Fresh (home, project) directory pair
fn setup() -> (TempDir, TempDir) {
    (TempDir::new().unwrap(), TempDir::new().unwrap())
}

fn registry_rules_dir(home: &TempDir) -> std::path::PathBuf {
    home.path().join(".cursor-playbook").join("rules")
}

fn project_rules_dir(project: &TempDir) -> std::path::PathBuf {
    project.path().join(".cursor").join("rules")
}

// =============================================================================
// List
// =============================================================================

#[test]
fn test_list_shows_builtin_rules_and_groups() {
    let (home, project) = setup();

    playbook_cmd(home.path(), project.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available rules:"))
        .stdout(predicate::str::contains("- typescript"))
        .stdout(predicate::str::contains("- react"))
        .stdout(predicate::str::contains("typescript (1 rules)"))
        .stdout(predicate::str::contains("react (1 rules)"))
        .stdout(predicate::str::contains("all (2 rules)"));
}

#[test]
fn test_list_shows_user_rules_when_present() {
    let (home, project) = setup();
    let user_rules = registry_rules_dir(&home);
    fs::create_dir_all(&user_rules).unwrap();
    fs::write(user_rules.join("custom.mdc"), "custom rule").unwrap();

    playbook_cmd(home.path(), project.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("User rules:"))
        .stdout(predicate::str::contains("- custom"));
}

// =============================================================================
// Add / add-group
// =============================================================================

#[test]
fn test_add_copies_builtin_rule() {
    let (home, project) = setup();

    playbook_cmd(home.path(), project.path())
        .args(["add", "typescript"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'typescript' rule to .cursor/rules/"));

    let copied = project_rules_dir(&project).join("typescript.mdc");
    assert!(copied.is_file());
    assert!(fs::read_to_string(copied)
        .unwrap()
        .contains("Typescript Guidelines"));
}

#[test]
fn test_add_is_idempotent() {
    let (home, project) = setup();

    for _ in 0..2 {
        playbook_cmd(home.path(), project.path())
            .args(["add", "typescript"])
            .assert()
            .success();
    }

    assert!(project_rules_dir(&project).join("typescript.mdc").is_file());
}

#[test]
fn test_add_user_rule_reports_origin() {
    let (home, project) = setup();
    let user_rules = registry_rules_dir(&home);
    fs::create_dir_all(&user_rules).unwrap();
    fs::write(user_rules.join("custom.mdc"), "custom rule").unwrap();

    playbook_cmd(home.path(), project.path())
        .args(["add", "custom"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "user rule 'custom' to .cursor/rules/",
        ));
}

#[test]
fn test_add_unknown_rule_fails_with_alternatives() {
    let (home, project) = setup();

    playbook_cmd(home.path(), project.path())
        .args(["add", "nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'nonexistent' not found"))
        .stderr(predicate::str::contains("typescript"));

    assert!(!project_rules_dir(&project).join("nonexistent.mdc").exists());
}

#[test]
fn test_add_group_all() {
    let (home, project) = setup();

    playbook_cmd(home.path(), project.path())
        .args(["add-group", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rules from group 'all'"));

    let dir = project_rules_dir(&project);
    assert!(dir.join("typescript.mdc").is_file());
    assert!(dir.join("react.mdc").is_file());
}

#[test]
fn test_add_group_unknown_fails_with_group_names() {
    let (home, project) = setup();

    playbook_cmd(home.path(), project.path())
        .args(["add-group", "python"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Group 'python' not found"))
        .stderr(predicate::str::contains("typescript, react, all"));
}

// =============================================================================
// Create
// =============================================================================

#[test]
fn test_create_global_then_duplicate_fails() {
    let (home, project) = setup();

    playbook_cmd(home.path(), project.path())
        .args(["create", "my-rule", "--global"])
        .assert()
        .success()
        .stdout(predicate::str::contains("new rule template"))
        .stdout(predicate::str::contains("(in user registry)"));

    let created = registry_rules_dir(&home).join("my-rule.mdc");
    assert!(created.is_file());
    let content = fs::read_to_string(&created).unwrap();
    assert!(content.starts_with("---\n"));
    assert!(content.contains("alwaysApply: false"));
    assert!(content.contains("# My-rule Guidelines"));

    playbook_cmd(home.path(), project.path())
        .args(["create", "my-rule", "--global"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'my-rule' already exists"));

    // First file unchanged by the failed second call
    assert_eq!(fs::read_to_string(&created).unwrap(), content);
}

// =============================================================================
// Export / import
// =============================================================================

#[test]
fn test_export_missing_rule_fails_and_registry_untouched() {
    let (home, project) = setup();

    playbook_cmd(home.path(), project.path())
        .args(["export", "foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found in current project"));

    assert!(!home.path().join(".cursor-playbook").exists());
}

#[test]
fn test_export_then_import() {
    let (home, project) = setup();

    playbook_cmd(home.path(), project.path())
        .args(["add", "react"])
        .assert()
        .success();

    playbook_cmd(home.path(), project.path())
        .args(["export", "react"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rule 'react' to user registry"));

    assert!(registry_rules_dir(&home).join("react.mdc").is_file());

    // Into a second, empty project
    let other_project = TempDir::new().unwrap();
    playbook_cmd(home.path(), other_project.path())
        .args(["import", "react"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rule 'react' to current project"));

    assert!(project_rules_dir(&other_project).join("react.mdc").is_file());
}

#[test]
fn test_import_missing_rule_fails() {
    let (home, project) = setup();

    playbook_cmd(home.path(), project.path())
        .args(["import", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found in user registry"));
}

// =============================================================================
// Profiles
// =============================================================================

#[test]
fn test_list_profiles_without_registry() {
    let (home, project) = setup();

    playbook_cmd(home.path(), project.path())
        .arg("list-profiles")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved profiles found."));
}

#[test]
fn test_save_profile_without_project_rules_fails() {
    let (home, project) = setup();

    playbook_cmd(home.path(), project.path())
        .args(["save-profile", "web"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No rules found in current project"));
}

#[test]
fn test_save_apply_list_profile_flow() {
    let (home, project) = setup();

    playbook_cmd(home.path(), project.path())
        .args(["add-group", "all"])
        .assert()
        .success();

    playbook_cmd(home.path(), project.path())
        .args(["save-profile", "web"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 rules as profile 'web'"));

    playbook_cmd(home.path(), project.path())
        .arg("list-profiles")
        .assert()
        .success()
        .stdout(predicate::str::contains("- web (2 rules)"));

    // Apply into a fresh project: same rule-name set, identical contents
    let other_project = TempDir::new().unwrap();
    playbook_cmd(home.path(), other_project.path())
        .args(["apply-profile", "web"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "profile 'web' with 2 rules to current project",
        ));

    for rule in ["typescript", "react"] {
        let file = format!("{rule}.mdc");
        let original = fs::read(project_rules_dir(&project).join(&file)).unwrap();
        let applied = fs::read(project_rules_dir(&other_project).join(&file)).unwrap();
        assert_eq!(original, applied);
    }
}

#[test]
fn test_apply_profile_missing_fails() {
    let (home, project) = setup();

    playbook_cmd(home.path(), project.path())
        .args(["apply-profile", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Profile 'ghost' not found"));
}

#[test]
fn test_apply_profile_keeps_existing_rules() {
    let (home, project) = setup();

    playbook_cmd(home.path(), project.path())
        .args(["add", "typescript"])
        .assert()
        .success();
    playbook_cmd(home.path(), project.path())
        .args(["save-profile", "ts-only"])
        .assert()
        .success();

    playbook_cmd(home.path(), project.path())
        .args(["add", "react"])
        .assert()
        .success();
    playbook_cmd(home.path(), project.path())
        .args(["apply-profile", "ts-only"])
        .assert()
        .success();

    // react was not in the profile but must survive the apply
    assert!(project_rules_dir(&project).join("react.mdc").is_file());
    assert!(project_rules_dir(&project).join("typescript.mdc").is_file());
}

// =============================================================================
// Completion data
// =============================================================================

#[test]
fn test_list_for_completion() {
    let (home, project) = setup();

    playbook_cmd(home.path(), project.path())
        .args(["list-for-completion", "rules"])
        .assert()
        .success()
        .stdout(predicate::str::contains("typescript"))
        .stdout(predicate::str::contains("react"));

    playbook_cmd(home.path(), project.path())
        .args(["list-for-completion", "groups"])
        .assert()
        .success()
        .stdout(predicate::str::contains("typescript react all"));

    playbook_cmd(home.path(), project.path())
        .args(["list-for-completion", "profiles"])
        .assert()
        .success();
}
