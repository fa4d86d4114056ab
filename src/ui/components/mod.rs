//! UI building blocks shared across rendering and state modules.

/// Single-line query editor.
pub mod input;
/// Single-select option cycler.
pub mod select;
/// Table rendering and configuration.
pub mod tables;

pub use input::QueryInput;
pub use select::SelectField;
pub use tables::{TableSpec, render_table};
