//! Unified error types for the accelgen toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while generating an accelerator repository.
#[derive(Error, Debug)]
pub enum AccelGenError {
    // --- Definition ---

    /// The accelerator definition file could not be read.
    #[error("definition file not found at {path}")]
    DefinitionNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The definition file exists but is not well-formed XML.
    #[error("failed to parse definition at {path}")]
    DefinitionParse {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    /// The definition is well-formed XML but does not follow the expected layout.
    #[error("malformed definition: {0}")]
    MalformedDefinition(String),

    /// A required top-level section (`template`, `parameters`, `example`) is absent.
    #[error("definition is missing the <{0}> section")]
    MissingSection(&'static str),

    // --- Examples ---

    /// An example step names a method with no command-line mode (supported: start, process, stop).
    #[error("unknown method: {0} (supported: start, process, stop)")]
    UnknownMethod(String),

    /// An example call passes a parameter with no command-line flag.
    #[error("unknown parameter '{parameter}' in {method} call (supported: datafile, file_in, file_out)")]
    UnknownParameter { method: String, parameter: String },

    /// The `<example>` section declares no call at all.
    #[error("example section has no call, a start call is required")]
    EmptyExample,

    /// The first example step is not a `start` call.
    #[error("example must begin with a start call, found '{0}'")]
    MissingStart(String),

    // --- Templates ---

    /// The template directory passed on the command line does not exist.
    #[error("template directory not found: {0}")]
    TemplateDirNotFound(PathBuf),

    // --- Repository ---

    /// The directory has no `.resources/accelerator_def.xml` file.
    #[error("not an accelerator repository (missing {0})")]
    NotARepository(PathBuf),

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, AccelGenError>`.
pub type Result<T> = std::result::Result<T, AccelGenError>;
