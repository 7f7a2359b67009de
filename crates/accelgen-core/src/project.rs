//! Accelerator repository layout.
//!
//! ```text
//! <repository>/
//! ├── .resources/
//! │   └── accelerator_def.xml   # Definition
//! ├── README.md                 # generated
//! └── run_example.py            # generated
//! ```

use std::path::{Path, PathBuf};

use crate::error::{AccelGenError, Result};

/// Location of the definition, relative to the repository root.
pub const DEFINITION_PATH: &str = ".resources/accelerator_def.xml";

/// Conventional definition path of a repository.
pub fn definition_path(repository: &Path) -> PathBuf {
    repository.join(DEFINITION_PATH)
}

/// Definition path of an existing accelerator repository.
pub fn locate_definition(repository: &Path) -> Result<PathBuf> {
    let path = definition_path(repository);
    if !path.is_file() {
        return Err(AccelGenError::NotARepository(path));
    }
    Ok(path)
}
