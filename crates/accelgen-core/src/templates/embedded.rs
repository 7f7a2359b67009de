//! Compile-time embedded default templates.
//!
//! Each constant loads a template file from `templates/` via [`include_str!`]. The paths
//! are relative to this source file (`crates/accelgen-core/src/templates/embedded.rs`).
//!
//! ## Adding a new template
//!
//! 1. Place the template file under `templates/`
//! 2. Add a `pub const` here with `include_str!("../../../../templates/<file>")`
//! 3. List it in [`DEFAULT_TEMPLATES`] under the name of the file to generate

pub const README: &str = include_str!("../../../../templates/README.md");
pub const RUN_EXAMPLE: &str = include_str!("../../../../templates/run_example.py");

/// Output file name and content of every default template.
pub const DEFAULT_TEMPLATES: &[(&str, &str)] = &[
    ("README.md", README),
    ("run_example.py", RUN_EXAMPLE),
];
