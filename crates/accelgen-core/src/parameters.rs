//! Parameter and output paragraphs of the README.
//!
//! Produces one `parameters_<method>` identifier per parameter section and a
//! single `process_output` identifier.

use crate::definition::{Definition, MethodSection, OutputSection};
use crate::describe::{describe_parameter, sentence, specific_paragraph};
use crate::identifiers::Identifiers;

const FILE_OUT_SENTENCE: &str = "Processing output is file defined by `file_out` parameter.";

/// Add the `parameters_*` and `process_output` identifiers.
pub fn build_parameter_paragraphs(def: &Definition, identifiers: &mut Identifiers) {
    for method in &def.parameters {
        let paragraph = method_paragraph(method);
        tracing::debug!("parameters_{}: {} bytes", method.name, paragraph.len());
        identifiers.insert(format!("parameters_{}", method.name), paragraph);
    }

    identifiers.insert("process_output", output_paragraph(def));
}

/// Generic then specific parameters of one method, separated by a blank line.
pub fn method_paragraph(method: &MethodSection) -> String {
    if method.is_empty() {
        return String::new();
    }

    let mut generic: Vec<String> = method
        .generic
        .iter()
        .map(|(key, node)| describe_parameter(node, Some(key.as_str())))
        .filter(|line| !line.is_empty())
        .collect();

    let mut paragraph = Vec::new();
    if !generic.is_empty() {
        generic.insert(0, "**Generic parameters:**".to_string());
        paragraph.push(generic.join("\n"));
    }

    let specific = specific_paragraph(&method.specific, "Specific parameters");
    if !specific.is_empty() {
        paragraph.push(specific);
    }

    paragraph.join("\n\n")
}

/// Description of the `process` result. Empty when there is no `<output>` section.
pub fn output_paragraph(def: &Definition) -> String {
    let Some(output) = &def.output else {
        return String::new();
    };

    let mut parts = Vec::new();
    if let Some(desc) = &output.desc {
        parts.push(sentence(desc.trim_start_matches('.')));
    }

    if output.file_out && documents_file_out(def) {
        parts.push(FILE_OUT_SENTENCE.to_string());
    }

    let specific = specific_outputs(output);
    if !specific.is_empty() {
        parts.push(specific);
    }

    parts.join("\n\n")
}

/// The `process` section declares a described `file_out` parameter.
fn documents_file_out(def: &Definition) -> bool {
    def.method("process")
        .and_then(|m| m.generic.get("file_out"))
        .and_then(|p| p.desc.as_deref())
        .is_some_and(|d| !d.is_empty())
}

fn specific_outputs(output: &OutputSection) -> String {
    specific_paragraph(&output.specific, "Specific outputs")
}
