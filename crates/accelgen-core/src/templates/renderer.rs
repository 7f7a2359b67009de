//! Placeholder substitution for output templates.
//!
//! Substitution is **lenient**: a placeholder with no matching identifier is left
//! verbatim, so a partially filled definition still produces a readable README.
//! The rules are those of shell-style `$` templates:
//!
//! | Template      | Output                                  |
//! |---------------|-----------------------------------------|
//! | `$$`          | `$`                                     |
//! | `$name`       | value of `name`, or `$name` if unknown  |
//! | `${name}`     | value of `name`, or `${name}` if unknown|
//! | any other `$` | unchanged                               |
//!
//! ## Usage
//!
//! ```ignore
//! use crate::templates::{embedded, renderer::TemplateRenderer};
//!
//! let renderer = TemplateRenderer::new();
//! let output = renderer.render(embedded::README, &identifiers);
//! ```

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::Result;
use crate::identifiers::Identifiers;
use crate::templates::source::Template;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:(\$)|([_A-Za-z][_A-Za-z0-9]*)|\{([_A-Za-z][_A-Za-z0-9]*)\})")
        .expect("placeholder pattern is valid")
});

/// Template renderer substituting identifiers into template text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateRenderer;

impl TemplateRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render a template string against the identifiers.
    pub fn render(&self, template: &str, identifiers: &Identifiers) -> String {
        PLACEHOLDER
            .replace_all(template, |caps: &Captures| {
                if caps.get(1).is_some() {
                    return "$".to_string();
                }
                let name = caps
                    .get(2)
                    .or_else(|| caps.get(3))
                    .map_or("", |m| m.as_str());
                match identifiers.get(name) {
                    Some(value) => value.to_string(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }

    /// Render every template into `dest`, overwriting files of the same name.
    ///
    /// Returns the written paths. Stops at the first I/O failure; files written
    /// before it are left in place.
    pub fn render_to_dir(
        &self,
        templates: &[Template],
        identifiers: &Identifiers,
        dest: &Path,
    ) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(templates.len());
        for template in templates {
            let path = dest.join(&template.name);
            std::fs::write(&path, self.render(&template.content, identifiers))?;
            tracing::info!("wrote {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}
