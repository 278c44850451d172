//! Staged person builder.
//!
//! Each stage is a trait whose setters take the builder by value and return
//! `Self`, so a chain started on a concrete builder keeps that concrete type
//! across every stage:
//!
//! ```
//! use fluentbuild::domain::{Person, PersonInfoBuilder, PersonJobBuilder};
//!
//! let person = Person::builder().set_name("Rafi").set_job("SDE").build();
//! assert_eq!(person.to_string(), "Name: Rafi, Job: SDE");
//! ```
//!
//! A builder whose base setter returns the base type loses the job stage
//! after the first call, so this chain does not compile:
//!
//! ```compile_fail
//! #[derive(Default)]
//! struct NameBuilder {
//!     name: String,
//! }
//!
//! impl NameBuilder {
//!     fn set_name(&mut self, name: &str) -> &mut NameBuilder {
//!         self.name = name.to_string();
//!         self
//!     }
//! }
//!
//! #[derive(Default)]
//! struct JobBuilder {
//!     base: NameBuilder,
//!     job: String,
//! }
//!
//! impl JobBuilder {
//!     fn set_job(&mut self, job: &str) -> &mut JobBuilder {
//!         self.job = job.to_string();
//!         self
//!     }
//! }
//!
//! impl std::ops::Deref for JobBuilder {
//!     type Target = NameBuilder;
//!     fn deref(&self) -> &NameBuilder {
//!         &self.base
//!     }
//! }
//!
//! impl std::ops::DerefMut for JobBuilder {
//!     fn deref_mut(&mut self) -> &mut NameBuilder {
//!         &mut self.base
//!     }
//! }
//!
//! let mut builder = JobBuilder::default();
//! // `set_name` hands back a `NameBuilder`, which has no `set_job`
//! builder.set_name("Rafi").set_job("SDE");
//! ```
//!
//! [`StagedPersonBuilder`] is the ordered alternative: every step returns the
//! next stage's type and `build` exists only once all fields are set.

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use tracing::{debug, trace};

/// Product of the staged builders. Unset fields stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Person {
    pub name: String,
    pub job: String,
}

impl Person {
    /// Entry point for the unordered, self-typed builder.
    pub fn builder() -> PersonBuilder {
        PersonBuilder::default()
    }

    /// Entry point for the ordered typestate builder: name, then job.
    pub fn staged() -> StagedPersonBuilder<NeedsName> {
        StagedPersonBuilder::new()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Job: {}", self.name, self.job)
    }
}

/// Access to the in-progress person shared by every stage.
pub trait PersonBuilderBase: Sized {
    fn person_mut(&mut self) -> &mut Person;
}

/// Name stage.
pub trait PersonInfoBuilder: PersonBuilderBase {
    fn set_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        trace!("set_name: {}", name);
        self.person_mut().name = name;
        self
    }
}

impl<B: PersonBuilderBase> PersonInfoBuilder for B {}

/// Job stage; builds on the name stage.
pub trait PersonJobBuilder: PersonInfoBuilder {
    fn set_job(mut self, job: impl Into<String>) -> Self {
        let job = job.into();
        trace!("set_job: {}", job);
        self.person_mut().job = job;
        self
    }
}

impl<B: PersonInfoBuilder> PersonJobBuilder for B {}

/// Concrete builder returned by [`Person::builder`].
#[derive(Debug, Default)]
pub struct PersonBuilder {
    person: Person,
}

impl PersonBuilderBase for PersonBuilder {
    fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }
}

impl PersonBuilder {
    pub fn build(self) -> Person {
        debug!("build: {}", self.person);
        self.person
    }
}

impl From<PersonBuilder> for Person {
    fn from(builder: PersonBuilder) -> Self {
        builder.build()
    }
}

/// Stage marker: name not yet set.
#[derive(Debug)]
pub struct NeedsName;
/// Stage marker: name set, job not yet set.
#[derive(Debug)]
pub struct NeedsJob;
/// Stage marker: every field set.
#[derive(Debug)]
pub struct Complete;

/// Ordered builder whose stage is tracked in the type parameter.
#[derive(Debug)]
pub struct StagedPersonBuilder<S> {
    person: Person,
    _stage: PhantomData<S>,
}

impl StagedPersonBuilder<NeedsName> {
    pub fn new() -> Self {
        Self {
            person: Person::default(),
            _stage: PhantomData,
        }
    }

    pub fn name(self, name: impl Into<String>) -> StagedPersonBuilder<NeedsJob> {
        StagedPersonBuilder {
            person: Person {
                name: name.into(),
                ..self.person
            },
            _stage: PhantomData,
        }
    }
}

impl Default for StagedPersonBuilder<NeedsName> {
    fn default() -> Self {
        Self::new()
    }
}

impl StagedPersonBuilder<NeedsJob> {
    pub fn job(self, job: impl Into<String>) -> StagedPersonBuilder<Complete> {
        StagedPersonBuilder {
            person: Person {
                job: job.into(),
                ..self.person
            },
            _stage: PhantomData,
        }
    }
}

impl StagedPersonBuilder<Complete> {
    pub fn build(self) -> Person {
        debug!("build (staged): {}", self.person);
        self.person
    }
}

impl From<StagedPersonBuilder<Complete>> for Person {
    fn from(builder: StagedPersonBuilder<Complete>) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_setters_when_building_then_fields_are_empty() {
        let person = Person::builder().build();
        assert_eq!(person, Person::default());
        assert_eq!(person.to_string(), "Name: , Job: ");
    }

    #[test]
    fn given_job_before_name_when_building_then_both_are_set() {
        let person = Person::builder().set_job("SDE").set_name("Rafi").build();
        assert_eq!(person.name, "Rafi");
        assert_eq!(person.job, "SDE");
    }

    #[test]
    fn given_typestate_chain_when_building_then_fields_are_set() {
        let person = Person::staged().name("Rafi").job("SDE").build();
        assert_eq!(
            person,
            Person {
                name: "Rafi".into(),
                job: "SDE".into()
            }
        );
    }
}
