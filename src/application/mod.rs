//! Application layer: demonstrations and rendering
//!
//! This layer orchestrates the domain builders for the CLI.

pub mod error;
pub mod render;
pub mod showcase;

pub use error::{ApplicationError, ApplicationResult};
pub use render::render;
pub use showcase::{render_element, run_demo, DemoKind, DemoReport, Section};
