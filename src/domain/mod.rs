//! Domain layer: products and their builders
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod element;
pub mod employee;
pub mod error;
pub mod person;

pub use builder::ElementBuilder;
pub use element::{Element, INDENT_SIZE};
pub use employee::{
    Employee, EmployeeAddressBuilder, EmployeeBuilder, EmployeeFacet, EmployeeJobBuilder,
};
pub use error::{DomainError, DomainResult};
pub use person::{
    Complete, NeedsJob, NeedsName, Person, PersonBuilder, PersonBuilderBase, PersonInfoBuilder,
    PersonJobBuilder, StagedPersonBuilder,
};
