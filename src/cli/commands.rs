//! Command dispatch: builds products from CLI arguments and prints them.

use std::io;
use std::path::Path;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::application::{render, render_element, run_demo, DemoKind};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::{
    ElementBuilder, EmployeeBuilder, EmployeeFacet, Person, PersonInfoBuilder, PersonJobBuilder,
};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let project_dir = cli
        .project_dir
        .clone()
        .or_else(|| std::env::current_dir().ok());
    let project_dir = project_dir.as_deref();

    match &cli.command {
        Some(Commands::Markup {
            root,
            children,
            tree,
        }) => _markup(&load_settings(cli, project_dir)?, root, children, *tree),
        Some(Commands::Person { name, job, ordered }) => _person(
            &load_settings(cli, project_dir)?,
            name.as_deref(),
            job.as_deref(),
            *ordered,
        ),
        Some(Commands::Employee {
            street_name,
            post_code,
            salary,
            title,
        }) => _employee(
            &load_settings(cli, project_dir)?,
            street_name.as_deref(),
            post_code.as_deref(),
            *salary,
            title.as_deref(),
        ),
        Some(Commands::Demo { kinds }) => _demo(&load_settings(cli, project_dir)?, kinds),
        Some(Commands::Config { command }) => _config(cli, command, project_dir),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

/// Layered settings with the `--format` flag applied on top.
///
/// Only commands that render products call this, so `config path`,
/// `config template` and `completion` work with a broken config file.
fn load_settings(cli: &Cli, project_dir: Option<&Path>) -> CliResult<Settings> {
    let mut settings = Settings::load(project_dir)?;
    if let Some(format) = cli.format {
        settings.format = format;
    }
    debug!("settings: {:?}", settings);
    Ok(settings)
}

/// Split a `NAME=TEXT` argument; a missing `=` leaves the text undefined.
pub fn parse_child_spec(spec: &str) -> (Option<String>, Option<String>) {
    match spec.split_once('=') {
        Some((name, text)) => (Some(name.to_string()), Some(text.to_string())),
        None => (Some(spec.to_string()), None),
    }
}

#[instrument(skip(settings))]
fn _markup(settings: &Settings, root: &str, children: &[String], tree: bool) -> CliResult<()> {
    let mut builder = ElementBuilder::create(root)?;
    for spec in children {
        let (name, text) = parse_child_spec(spec);
        builder.try_add_child(name, text)?;
    }

    let settings = Settings {
        tree_view: settings.tree_view || tree,
        ..settings.clone()
    };
    let rendered = render_element(builder.root(), &settings)?;
    output::info(rendered.trim_end());
    Ok(())
}

#[instrument(skip(settings))]
fn _person(
    settings: &Settings,
    name: Option<&str>,
    job: Option<&str>,
    ordered: bool,
) -> CliResult<()> {
    let person = if ordered {
        match (name, job) {
            (Some(name), Some(job)) => Person::staged().name(name).job(job).build(),
            _ => {
                return Err(CliError::InvalidArgs(
                    "--ordered requires both --name and --job".to_string(),
                ))
            }
        }
    } else {
        let mut builder = Person::builder();
        if let Some(name) = name {
            builder = builder.set_name(name);
        }
        if let Some(job) = job {
            builder = builder.set_job(job);
        }
        builder.build()
    };

    output::info(render(&person, settings.format)?.trim_end());
    Ok(())
}

#[instrument(skip(settings))]
fn _employee(
    settings: &Settings,
    street_name: Option<&str>,
    post_code: Option<&str>,
    salary: Option<i32>,
    title: Option<&str>,
) -> CliResult<()> {
    let mut address = EmployeeBuilder::new().address();
    if let Some(street_name) = street_name {
        address = address.set_street_name(street_name);
    }
    if let Some(post_code) = post_code {
        address = address.set_post_code(post_code);
    }

    let mut job = address.job();
    if let Some(salary) = salary {
        job = job.set_salary(salary);
    }
    if let Some(title) = title {
        job = job.set_title(title);
    }

    let employee = job.build();
    output::info(render(&employee, settings.format)?.trim_end());
    Ok(())
}

#[instrument(skip(settings))]
fn _demo(settings: &Settings, kinds: &[String]) -> CliResult<()> {
    let names = if kinds.is_empty() {
        settings.demos.as_slice()
    } else {
        kinds
    };
    let kinds = DemoKind::parse_all(names)?;
    if kinds.is_empty() {
        return Err(CliError::Usage(
            "no demos selected (check `demos` in config)".to_string(),
        ));
    }

    for kind in kinds {
        let report = run_demo(kind, settings)?;
        output::header(&format!("{} demo", report.kind));
        for section in &report.sections {
            output::action(&section.title, "");
            output::info(section.body.trim_end());
        }
    }
    Ok(())
}

fn _config(cli: &Cli, command: &ConfigCommands, project_dir: Option<&Path>) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli, project_dir)?;
            output::info(settings.to_toml()?.trim_end());
        }
        ConfigCommands::Path => {
            let global = global_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<unavailable>".to_string());
            output::action("global", &global);
            if let Some(dir) = project_dir {
                output::action("local", &local_config_path(dir).display());
            }
        }
        ConfigCommands::Template => output::info(Settings::template().trim_end()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_name_and_text_when_parsing_child_spec_then_splits_on_first_equals() {
        assert_eq!(
            parse_child_spec("div=a=b"),
            (Some("div".to_string()), Some("a=b".to_string()))
        );
    }

    #[test]
    fn given_missing_equals_when_parsing_child_spec_then_text_is_undefined() {
        assert_eq!(parse_child_spec("div"), (Some("div".to_string()), None));
    }

    #[test]
    fn given_empty_text_when_parsing_child_spec_then_text_is_empty() {
        assert_eq!(
            parse_child_spec("br="),
            (Some("br".to_string()), Some(String::new()))
        );
    }
}
