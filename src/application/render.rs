//! Product rendering for terminal output.

use std::fmt::Display;

use serde::Serialize;

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::OutputFormat;

/// Render a built product as its display text or as TOML.
pub fn render<T>(value: &T, format: OutputFormat) -> ApplicationResult<String>
where
    T: Serialize + Display + ?Sized,
{
    match format {
        OutputFormat::Text => Ok(value.to_string()),
        OutputFormat::Toml => toml::to_string_pretty(value).map_err(|e| ApplicationError::Render {
            message: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Person, PersonInfoBuilder, PersonJobBuilder};

    #[test]
    fn given_text_format_when_rendering_then_uses_display() {
        let person = Person::builder().set_name("Rafi").set_job("SDE").build();
        let out = render(&person, OutputFormat::Text).unwrap();
        assert_eq!(out, "Name: Rafi, Job: SDE");
    }

    #[test]
    fn given_toml_format_when_rendering_then_emits_fields() {
        let person = Person::builder().set_name("Rafi").set_job("SDE").build();
        let out = render(&person, OutputFormat::Toml).unwrap();
        assert!(out.contains("name = \"Rafi\""));
        assert!(out.contains("job = \"SDE\""));
    }
}
