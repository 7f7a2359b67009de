//! Generation of an accelerator repository's documents.

use std::path::{Path, PathBuf};

use crate::definition::Definition;
use crate::error::Result;
use crate::example::assemble_example;
use crate::identifiers::Identifiers;
use crate::parameters::build_parameter_paragraphs;
use crate::templates::renderer::TemplateRenderer;
use crate::templates::source::TemplateSource;

/// Outcome of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Files written, in template order.
    pub written: Vec<PathBuf>,
    /// Number of identifiers available to the templates.
    pub identifiers: usize,
}

/// Renders templates for one accelerator definition into a destination directory.
#[derive(Debug, Clone)]
pub struct Generator {
    dest: PathBuf,
    definition: Definition,
}

impl Generator {
    pub fn new(dest: impl Into<PathBuf>, definition: Definition) -> Self {
        Self {
            dest: dest.into(),
            definition,
        }
    }

    /// Load the definition at `definition_path`.
    pub fn from_path(dest: impl Into<PathBuf>, definition_path: &Path) -> Result<Self> {
        Ok(Self::new(dest, Definition::load(definition_path)?))
    }

    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    pub fn dest(&self) -> &Path {
        &self.dest
    }

    /// Compute every identifier the templates may reference.
    pub fn identifiers(&self) -> Result<Identifiers> {
        let mut identifiers = Identifiers::new();
        identifiers.extend(
            self.definition
                .template
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str())),
        );

        assemble_example(&self.definition.example)?.write_identifiers(&mut identifiers);
        build_parameter_paragraphs(&self.definition, &mut identifiers);

        Ok(identifiers)
    }

    /// Render every template of `source` into the destination directory.
    pub fn generate(&self, source: &TemplateSource) -> Result<GenerationReport> {
        let identifiers = self.identifiers()?;
        let templates = source.load()?;
        tracing::debug!(
            "rendering {} templates with {} identifiers",
            templates.len(),
            identifiers.len()
        );

        let written = TemplateRenderer::new().render_to_dir(&templates, &identifiers, &self.dest)?;

        Ok(GenerationReport {
            written,
            identifiers: identifiers.len(),
        })
    }
}
