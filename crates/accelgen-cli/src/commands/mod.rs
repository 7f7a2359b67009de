//! CLI command implementations for accelgen.

pub mod generate;
