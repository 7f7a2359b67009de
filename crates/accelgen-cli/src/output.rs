//! What `accelgen` prints while generating an accelerator repository.
//!
//! Progress goes to stdout through the [`console`] crate; diagnostics go through
//! `tracing` on stderr.

use std::path::Path;

use console::style;

use accelgen_core::generator::GenerationReport;
use accelgen_core::templates::source::TemplateSource;

/// Print the run banner, underlined to its width.
pub fn print_header(text: &str) {
    println!("\n{}", style(text).bold().cyan());
    println!("{}", style("=".repeat(text.len())).dim());
}

pub fn print_success(text: &str) {
    println!("{} {}", style("[OK]").green().bold(), text);
}

pub fn print_warning(text: &str) {
    println!("{} {}", style("[WARN]").yellow().bold(), text);
}

/// `[1/2] Loading accelerator definition`
pub fn print_step(step: u32, total: u32, text: &str) {
    println!("{} {}", style(format!("[{step}/{total}]")).dim(), text);
}

pub fn print_key_value(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Definition file in use and, when the definition names it, the accelerator.
pub fn print_definition(path: &Path, accelerator: Option<&str>) {
    print_key_value("Definition", &path.display().to_string());
    if let Some(name) = accelerator {
        print_key_value("Accelerator", name);
    }
}

/// Human label of where templates are read from.
pub fn template_origin(source: &TemplateSource) -> String {
    match source {
        TemplateSource::Embedded => "built-in".to_string(),
        TemplateSource::Directory(dir) => dir.display().to_string(),
    }
}

/// Summary of a generation run, one line per written file.
pub fn print_report(report: &GenerationReport) {
    if report.written.is_empty() {
        print_warning("No template found, nothing was generated");
        return;
    }

    print_success(&format!(
        "Generated {} files from {} identifiers",
        report.written.len(),
        report.identifiers
    ));
    for file in &report.written {
        print_key_value("File", &file.display().to_string());
    }
}
