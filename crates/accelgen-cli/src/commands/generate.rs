use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use accelgen_core::generator::Generator;
use accelgen_core::project;
use accelgen_core::templates::source::TemplateSource;

use crate::output;

/// Generate the repository documents.
///
/// Loads the accelerator definition (by default from the repository's
/// `.resources/accelerator_def.xml`), then renders the templates into the
/// repository directory, overwriting previously generated files.
pub fn run(path: &Path, definition: Option<&Path>, templates: Option<PathBuf>) -> Result<()> {
    output::print_header("accelgen");

    let repository = std::path::absolute(path)
        .with_context(|| format!("invalid repository path: {}", path.display()))?;
    let definition_path = match definition {
        Some(p) => p.to_path_buf(),
        None => project::locate_definition(&repository)?,
    };
    tracing::debug!(
        "repository {}, definition {}",
        repository.display(),
        definition_path.display()
    );

    output::print_step(1, 2, "Loading accelerator definition");
    let generator = Generator::from_path(&repository, &definition_path)?;
    output::print_definition(
        &definition_path,
        generator
            .definition()
            .template
            .get("accelerator_name")
            .map(String::as_str),
    );

    let source = templates.map_or(TemplateSource::Embedded, TemplateSource::Directory);
    output::print_step(2, 2, "Rendering templates");
    output::print_key_value("Templates", &output::template_origin(&source));

    let report = generator
        .generate(&source)
        .with_context(|| format!("generation failed in {}", repository.display()))?;
    output::print_report(&report);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFINITION: &str = r#"<repository>
        <template><accelerator_name>Echo</accelerator_name></template>
        <parameters><start/><process/><stop/></parameters>
        <example><start/><process><file_in>in.txt</file_in></process><stop/></example>
    </repository>"#;

    #[test]
    fn test_run_in_repository() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".resources")).unwrap();
        std::fs::write(dir.path().join(project::DEFINITION_PATH), DEFINITION).unwrap();

        run(dir.path(), None, None).unwrap();

        let readme = std::fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert!(readme.starts_with("# Echo\n"));
        assert!(dir.path().join("run_example.py").is_file());
    }

    #[test]
    fn test_run_outside_repository() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(dir.path(), None, None).is_err());
    }

    #[test]
    fn test_run_with_explicit_definition_and_templates() {
        let dest = tempfile::tempdir().unwrap();
        let inputs = tempfile::tempdir().unwrap();
        let definition = inputs.path().join("def.xml");
        std::fs::write(&definition, DEFINITION).unwrap();
        let templates = inputs.path().join("templates");
        std::fs::create_dir(&templates).unwrap();
        std::fs::write(templates.join("USAGE.md"), "${example_apyfal_process}").unwrap();

        run(dest.path(), Some(&definition), Some(templates)).unwrap();

        assert_eq!(
            std::fs::read_to_string(dest.path().join("USAGE.md")).unwrap(),
            "    myaccel.process(file_in=in.txt)\n    myaccel.stop()"
        );
        assert!(!dest.path().join("README.md").exists());
    }
}
