//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::config::OutputFormat;

/// Fluent builders: element trees rendered as markup, staged and faceted builders
#[derive(Parser, Debug)]
#[command(name = "fluentbuild")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Project directory holding .fluentbuild.toml (default: cwd)
    #[arg(short = 'C', long, global = true)]
    pub project_dir: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build an element tree and print it
    Markup {
        /// Root element name
        root: String,
        /// Child element as NAME=TEXT (repeatable, kept in order)
        #[arg(short, long = "child", value_name = "NAME=TEXT")]
        children: Vec<String>,
        /// Print an outline instead of markup
        #[arg(long)]
        tree: bool,
    },

    /// Build a person through the staged builder
    Person {
        /// Person name
        #[arg(long)]
        name: Option<String>,
        /// Job title
        #[arg(long)]
        job: Option<String>,
        /// Use the ordered typestate builder (requires --name and --job)
        #[arg(long)]
        ordered: bool,
    },

    /// Build an employee through the address and job facets
    Employee {
        /// Street name (address facet)
        #[arg(long)]
        street_name: Option<String>,
        /// Post code (address facet)
        #[arg(long)]
        post_code: Option<String>,
        /// Salary (job facet)
        #[arg(long, allow_negative_numbers = true)]
        salary: Option<i32>,
        /// Title (job facet)
        #[arg(long)]
        title: Option<String>,
    },

    /// Run builder demonstrations
    Demo {
        /// Demos to run: markup, person, employee (default: from config)
        kinds: Vec<String>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,

    /// Print a config template
    Template,
}
