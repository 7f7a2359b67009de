//! Output templates for accelerator repositories.
//!
//! Templates come from a [`source::TemplateSource`]: either the defaults embedded into
//! the binary at compile-time via [`include_str!`] in the [`embedded`] module, or every
//! file of a directory chosen at runtime. They are rendered with the
//! [`renderer::TemplateRenderer`].
//!
//! ## Placeholders
//!
//! Templates use `$name` or `${name}` placeholders. Common identifiers:
//! - `${accelerator_name}`, `${accelerator_id}`: from the definition's `<template>` section
//! - `${parameters_start}`, `${parameters_process}`, `${parameters_stop}`: parameter docs
//! - `${example_apyfal_start}`, `${example_accelerator_process}`, ...: usage examples
//!
//! Unknown placeholders are kept as-is in the output and `$$` renders a single `$`.
//!
//! **Warning**: Template files in `templates/` and constants in [`embedded`] must stay in sync.
//! The `include_str!` paths are relative to this file and checked at compile-time.

pub mod embedded;
pub mod renderer;
pub mod source;
