//! Builder demonstrations
//!
//! Each demo drives one builder through a typical session and reports the
//! intermediate and final products as titled sections.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, instrument};

use crate::application::{render, ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::{
    Element, ElementBuilder, EmployeeBuilder, EmployeeFacet, Person, PersonInfoBuilder,
    PersonJobBuilder,
};

/// Available demonstrations, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DemoKind {
    Markup,
    Person,
    Employee,
}

impl DemoKind {
    pub const ALL: [DemoKind; 3] = [DemoKind::Markup, DemoKind::Person, DemoKind::Employee];

    pub fn as_str(&self) -> &'static str {
        match self {
            DemoKind::Markup => "markup",
            DemoKind::Person => "person",
            DemoKind::Employee => "employee",
        }
    }

    /// Parse demo names, dropping duplicates and ordering them for running.
    pub fn parse_all<S: AsRef<str>>(names: &[S]) -> ApplicationResult<Vec<DemoKind>> {
        let mut kinds = names
            .iter()
            .map(|n| n.as_ref().parse())
            .collect::<ApplicationResult<Vec<DemoKind>>>()?;
        kinds.sort();
        kinds.dedup();
        Ok(kinds)
    }
}

impl FromStr for DemoKind {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DemoKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ApplicationError::UnknownDemo(s.to_string()))
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One titled block of demo output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub body: String,
}

impl Section {
    fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Output of a single demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub kind: DemoKind,
    pub sections: Vec<Section>,
}

/// Run one demonstration, rendering products according to `settings`.
#[instrument(level = "debug", skip(settings))]
pub fn run_demo(kind: DemoKind, settings: &Settings) -> ApplicationResult<DemoReport> {
    let sections = match kind {
        DemoKind::Markup => markup_demo(settings)?,
        DemoKind::Person => person_demo(settings)?,
        DemoKind::Employee => employee_demo(settings)?,
    };
    debug!("run_demo: {} produced {} sections", kind, sections.len());
    Ok(DemoReport { kind, sections })
}

/// Markup or outline of an element, as configured.
pub fn render_element(element: &Element, settings: &Settings) -> ApplicationResult<String> {
    if settings.tree_view {
        Ok(element.to_tree().to_string())
    } else {
        render(element, settings.format)
    }
}

fn markup_demo(settings: &Settings) -> ApplicationResult<Vec<Section>> {
    let mut builder = ElementBuilder::create("root")?;
    builder.add_child("div", "div text 1");
    builder
        .add_child("div", "div text 2")
        .add_child("div", "div text 3");
    let populated = render_element(builder.root(), settings)?;

    builder.clear();
    let cleared = render_element(builder.root(), settings)?;

    Ok(vec![
        Section::new("After populating the element builder", populated),
        Section::new("After clearing", cleared),
    ])
}

/// Setter chains that mix name and job stages.
///
/// A builder whose name setter returned the base type would stop the chain
/// before `set_job`; the first section names that shape, the others show the
/// two builders that keep the chain going.
fn person_demo(settings: &Settings) -> ApplicationResult<Vec<Section>> {
    let fluent = Person::builder().set_name("Rafi").set_job("SDE").build();
    let ordered = Person::staged().name("Rafi").job("SDE").build();

    Ok(vec![
        Section::new(
            "Base-typed stages",
            "builder.set_name(\"Rafi\").set_job(\"SDE\")\n  \
             does not compile: set_name returns the name-only builder",
        ),
        Section::new("Self-typed stages", render(&fluent, settings.format)?),
        Section::new("Typestate stages", render(&ordered, settings.format)?),
    ])
}

fn employee_demo(settings: &Settings) -> ApplicationResult<Vec<Section>> {
    let employee = EmployeeBuilder::new()
        .address()
        .set_street_name("Nakhalpara")
        .set_post_code("1215")
        .job()
        .set_salary(123)
        .set_title("SDE")
        .build();

    Ok(vec![Section::new(
        "Address and job facets",
        render(&employee, settings.format)?,
    )])
}
