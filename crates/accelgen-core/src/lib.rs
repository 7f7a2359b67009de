//! Core library for accelgen, the accelerator repository generator.
//!
//! Reads an accelerator definition (`.resources/accelerator_def.xml`) and renders the
//! repository documents (README, example script) from templates. The pipeline:
//!
//! 1. [`definition`]: parse the XML document into a typed schema
//! 2. [`example`] (via [`call`]): render the usage example for the Python client and
//!    the accelerator executable
//! 3. [`parameters`] (via [`describe`]): document the parameters of each method
//! 4. [`templates`]: substitute the resulting [`identifiers`] into every template
//!
//! [`generator::Generator`] runs the whole pipeline.

pub mod call;
pub mod definition;
pub mod describe;
pub mod error;
pub mod example;
pub mod generator;
pub mod identifiers;
pub mod parameters;
pub mod project;
pub mod templates;

#[cfg(test)]
mod fixtures;
