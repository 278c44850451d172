//! Tests for the builder demonstrations and CLI argument parsing

use clap::Parser;
use rstest::rstest;

use fluentbuild::application::{run_demo, ApplicationError, DemoKind};
use fluentbuild::cli::{Cli, CliError, Commands};
use fluentbuild::config::{OutputFormat, Settings};
use fluentbuild::domain::DomainError;
use fluentbuild::exitcode;

// ============================================================
// DemoKind
// ============================================================

#[rstest]
#[case("markup", DemoKind::Markup)]
#[case("Person", DemoKind::Person)]
#[case(" employee ", DemoKind::Employee)]
fn given_demo_name_when_parsing_then_matches_kind(#[case] name: &str, #[case] kind: DemoKind) {
    assert_eq!(name.parse::<DemoKind>().unwrap(), kind);
}

#[test]
fn given_unknown_demo_name_when_parsing_then_errors() {
    let result = "factory".parse::<DemoKind>();

    assert!(matches!(result, Err(ApplicationError::UnknownDemo(name)) if name == "factory"));
}

#[test]
fn given_configured_demo_names_when_parsing_all_then_deduplicates_in_run_order() {
    let kinds = DemoKind::parse_all(&["person", "employee", "markup", "person"]).unwrap();

    assert_eq!(
        kinds,
        vec![DemoKind::Markup, DemoKind::Person, DemoKind::Employee]
    );
}

// ============================================================
// run_demo
// ============================================================

#[test]
fn given_markup_demo_when_running_then_reports_populated_and_cleared_tree() {
    // Act
    let report = run_demo(DemoKind::Markup, &Settings::default()).unwrap();

    // Assert
    assert_eq!(report.kind, DemoKind::Markup);
    assert_eq!(report.sections.len(), 2);
    assert!(report.sections[0].body.contains("    div text 3\n"));
    assert_eq!(report.sections[1].body, "<root>\n</root>\n");
}

#[test]
fn given_tree_view_when_running_markup_demo_then_reports_outline() {
    let settings = Settings {
        tree_view: true,
        ..Settings::default()
    };

    let report = run_demo(DemoKind::Markup, &settings).unwrap();

    assert!(report.sections[0].body.starts_with("root\n"));
    assert!(report.sections[0].body.contains("div: div text 1"));
}

#[test]
fn given_person_demo_when_running_then_both_builders_agree() {
    let report = run_demo(DemoKind::Person, &Settings::default()).unwrap();

    assert_eq!(report.sections.len(), 3);
    assert!(report.sections[0].body.contains("does not compile"));
    for section in &report.sections[1..] {
        assert_eq!(section.body, "Name: Rafi, Job: SDE");
    }
}

#[test]
fn given_employee_demo_when_running_with_toml_then_renders_every_field() {
    let settings = Settings {
        format: OutputFormat::Toml,
        ..Settings::default()
    };

    let report = run_demo(DemoKind::Employee, &settings).unwrap();

    let body = &report.sections[0].body;
    assert!(body.contains("street_name = \"Nakhalpara\""));
    assert!(body.contains("post_code = \"1215\""));
    assert!(body.contains("salary = 123"));
    assert!(body.contains("title = \"SDE\""));
}

// ============================================================
// CLI arguments and exit codes
// ============================================================

#[test]
fn given_markup_args_when_parsing_then_children_keep_order() {
    let cli = Cli::try_parse_from([
        "fluentbuild",
        "-dd",
        "--format",
        "toml",
        "markup",
        "root",
        "-c",
        "div=t1",
        "--child",
        "p=t2",
    ])
    .unwrap();

    assert_eq!(cli.debug, 2);
    assert_eq!(cli.format, Some(OutputFormat::Toml));
    match cli.command {
        Some(Commands::Markup {
            root,
            children,
            tree,
        }) => {
            assert_eq!(root, "root");
            assert_eq!(children, vec!["div=t1", "p=t2"]);
            assert!(!tree);
        }
        other => panic!("expected markup command, got {:?}", other),
    }
}

#[test]
fn given_negative_salary_when_parsing_employee_then_accepts_it() {
    let cli = Cli::try_parse_from(["fluentbuild", "employee", "--salary", "-5"]).unwrap();

    assert!(matches!(
        cli.command,
        Some(Commands::Employee {
            salary: Some(-5),
            ..
        })
    ));
}

#[test]
fn given_errors_when_mapping_exit_codes_then_follow_sysexits() {
    let invalid = CliError::from(DomainError::invalid_argument("root_name", "empty"));
    let config = CliError::from(ApplicationError::Config {
        message: "bad".into(),
    });
    let usage = CliError::InvalidArgs("--ordered".into());

    assert_eq!(invalid.exit_code(), exitcode::DATAERR);
    assert_eq!(config.exit_code(), exitcode::CONFIG);
    assert_eq!(usage.exit_code(), exitcode::USAGE);
}
