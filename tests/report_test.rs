//! End-to-end report scenarios through the library, with canned npm/node output.

use bpk_envinfo::cli::{Command, InfoArgs, InfoCommand};
use bpk_envinfo::shell::MockRunner;
use bpk_envinfo::ui::MockUI;
use bpk_envinfo::EnvInfoError;
use tempfile::TempDir;

const SCENARIO_A_INSTALLED: &str = r#"{"dependencies": {
    "backpack-react-scripts": {"version": "1.2.3"},
    "bpk-component-button": {"version": "2.0.0"}
}}"#;

fn run(runner: &MockRunner, args: InfoArgs) -> (bpk_envinfo::Result<()>, MockUI) {
    let temp = TempDir::new().unwrap();
    let mut ui = MockUI::new();
    let result = InfoCommand::new(temp.path(), args, runner)
        .execute(&mut ui)
        .map(|_| ());
    (result, ui)
}

fn has_line(ui: &MockUI, line: &str) -> bool {
    ui.messages().iter().any(|m| m == line)
}

#[test]
fn scenario_a_full_report() {
    let runner = MockRunner::new()
        .with_success("npm list --json", SCENARIO_A_INSTALLED)
        .with_success("npm outdated --json", "{}")
        .with_success("node --version", "v18.2.0\n")
        .with_success("npm --version", "8.1.0\n");

    let (result, ui) = run(&runner, InfoArgs::default());

    result.unwrap();
    assert!(has_line(&ui, "Node version: 18.2.0"));
    assert!(has_line(&ui, "NPM version: 8.1.0"));
    assert!(has_line(&ui, "Backpack React Scripts used: Yes"));
    assert!(has_line(&ui, "Backpack React Scripts version: 1.2.3"));
    assert!(has_line(&ui, "bpk-component-button: 2.0.0"));
}

#[test]
fn scenario_b_without_react_scripts() {
    let runner = MockRunner::new()
        .with_success(
            "npm list --json",
            r#"{"dependencies": {"bpk-component-button": {"version": "2.0.0"}}}"#,
        )
        .with_success("npm outdated --json", "{}")
        .with_success("node --version", "v18.2.0")
        .with_success("npm --version", "8.1.0");

    let (result, ui) = run(&runner, InfoArgs::default());

    result.unwrap();
    assert!(has_line(&ui, "Backpack React Scripts used: No"));
    assert!(!ui
        .messages()
        .iter()
        .any(|m| m.starts_with("Backpack React Scripts version")));
}

#[test]
fn react_scripts_without_version_is_used() {
    let runner = MockRunner::new()
        .with_success(
            "npm list --json",
            r#"{"dependencies": {"backpack-react-scripts": {"missing": true}}}"#,
        )
        .with_success("npm outdated --json", "{}")
        .with_success("node --version", "v18.2.0")
        .with_success("npm --version", "8.1.0");

    let (result, ui) = run(&runner, InfoArgs::default());

    result.unwrap();
    assert_eq!(
        ui.messages(),
        [
            "Backpack environment info",
            "Node version: 18.2.0",
            "NPM version: 8.1.0",
            "Backpack React Scripts used: Yes",
        ]
    );
}

#[test]
fn scenario_c_failed_command_aborts() {
    let runner = MockRunner::new()
        .with_success("npm list --json", SCENARIO_A_INSTALLED)
        .with_success("npm outdated --json", "{}")
        .with_exit("node --version", 1, "")
        .with_success("npm --version", "8.1.0");

    let (result, ui) = run(&runner, InfoArgs::default());

    assert!(matches!(
        result.unwrap_err(),
        EnvInfoError::CommandFailed { .. }
    ));
    assert!(ui.messages().is_empty());
}

#[test]
fn outdated_packages_are_flagged() {
    let runner = MockRunner::new()
        .with_success("npm list --json", SCENARIO_A_INSTALLED)
        .with_exit(
            "npm outdated --json",
            1,
            r#"{
                "backpack-react-scripts": {"current": "1.2.3", "wanted": "1.2.3", "latest": "1.2.3"},
                "bpk-component-button": {"current": "2.0.0", "wanted": "2.1.0", "latest": "3.0.0"}
            }"#,
        )
        .with_success("node --version", "v18.2.0")
        .with_success("npm --version", "8.1.0");

    let (result, ui) = run(&runner, InfoArgs::default());

    result.unwrap();
    assert!(has_line(
        &ui,
        "Backpack React Scripts version: 1.2.3 (wanted: 1.2.3, latest: 1.2.3)"
    ));
    assert!(has_line(
        &ui,
        "bpk-component-button: 2.0.0 (wanted: 2.1.0, latest: 3.0.0) [Outdated]"
    ));
}

#[test]
fn skip_outdated_uses_plain_versions() {
    let runner = MockRunner::new()
        .with_success("npm list --json", SCENARIO_A_INSTALLED)
        .with_success("node --version", "v18.2.0")
        .with_success("npm --version", "8.1.0");
    let args = InfoArgs {
        skip_outdated: true,
        ..Default::default()
    };

    let (result, ui) = run(&runner, args);

    result.unwrap();
    assert!(has_line(&ui, "bpk-component-button: 2.0.0"));
    assert!(!runner
        .commands()
        .iter()
        .any(|c| c.contains("outdated")));
}

#[test]
fn packages_listed_in_name_order() {
    let runner = MockRunner::new()
        .with_success(
            "npm list --json",
            r#"{"dependencies": {
                "react-native-bpk-component-text": {"version": "1.0.0"},
                "bpk-mixins": {"version": "1.0.0"},
                "bpk-component-card": {"version": "1.0.0"}
            }}"#,
        )
        .with_success("npm outdated --json", "")
        .with_success("node --version", "v18.2.0")
        .with_success("npm --version", "8.1.0");

    let (result, ui) = run(&runner, InfoArgs::default());

    result.unwrap();
    let header = ui
        .messages()
        .iter()
        .position(|m| m == "Backpack Packages:")
        .unwrap();
    assert_eq!(
        &ui.messages()[header + 1..],
        [
            "bpk-component-card: 1.0.0",
            "bpk-mixins: 1.0.0",
            "react-native-bpk-component-text: 1.0.0",
        ]
    );
}
