//! Fluent builders.
//!
//! - [`domain::ElementBuilder`]: a rooted element tree serialized as indented markup
//! - [`domain::PersonBuilder`]: staged setters that keep the concrete builder type
//! - [`domain::EmployeeBuilder`]: address and job facets writing to one shared product
//!
//! The `application`, `config` and `cli` modules back the `fluentbuild` binary.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
