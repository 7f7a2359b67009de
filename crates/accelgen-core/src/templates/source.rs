//! Where templates are read from.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{AccelGenError, Result};
use crate::templates::embedded;

/// A template and the name of the file it generates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Kept as read from the directory, so names that are not valid UTF-8 survive.
    pub name: OsString,
    pub content: String,
}

/// Origin of the templates to render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    /// The default README and example script built into the binary.
    #[default]
    Embedded,
    /// Every regular file directly inside a directory.
    Directory(PathBuf),
}

impl TemplateSource {
    /// Read all templates, sorted by file name.
    pub fn load(&self) -> Result<Vec<Template>> {
        match self {
            Self::Embedded => Ok(embedded::DEFAULT_TEMPLATES
                .iter()
                .map(|(name, content)| Template {
                    name: OsString::from(*name),
                    content: (*content).to_string(),
                })
                .collect()),
            Self::Directory(dir) => {
                if !dir.is_dir() {
                    return Err(AccelGenError::TemplateDirNotFound(dir.clone()));
                }

                let mut templates = Vec::new();
                for entry in std::fs::read_dir(dir)? {
                    let entry = entry?;
                    if !entry.file_type()?.is_file() {
                        continue;
                    }
                    templates.push(Template {
                        name: entry.file_name(),
                        content: std::fs::read_to_string(entry.path())?,
                    });
                }
                templates.sort_by(|a, b| a.name.cmp(&b.name));

                tracing::debug!("found {} templates in {}", templates.len(), dir.display());
                Ok(templates)
            }
        }
    }
}
