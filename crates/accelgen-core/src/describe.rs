//! Markdown lines describing parameters.
//!
//! Used for the `parameters_*` and `process_output` paragraphs of the README.

use crate::definition::ParameterNode;

/// Strip every trailing period and put exactly one back.
pub(crate) fn sentence(text: &str) -> String {
    format!("{}.", text.trim_end_matches('.'))
}

/// Format a parameter as a markdown bullet, optionally listing its allowed values.
///
/// `name` overrides the node's own name. Returns an empty string when the
/// parameter has no description, so undocumented parameters drop out.
///
/// ```text
/// * `level`: Compression level. Possibles values:
///     * `1`: Fastest
///     * `9`: Best ratio
/// ```
pub fn describe_parameter(node: &ParameterNode, name: Option<&str>) -> String {
    let Some(desc) = node.desc.as_deref().filter(|d| !d.is_empty()) else {
        return String::new();
    };
    let name = name.unwrap_or(node.name.as_str());

    let values = if node.values.is_empty() {
        String::new()
    } else {
        let lines: Vec<String> = node
            .values
            .iter()
            .map(|v| format!("    * `{}`: {}", v.value, v.desc.trim_end_matches('.')))
            .collect();
        format!(" Possibles values:\n{}", lines.join("\n"))
    };

    format!("* `{name}`: {}{values}", sentence(desc))
}

/// Format a group of specific parameters under a bold title.
///
/// Returns an empty string for an empty group. Nodes without a description are
/// skipped rather than rendered as blank lines.
pub fn specific_paragraph(nodes: &[ParameterNode], title: &str) -> String {
    let mut lines = Vec::with_capacity(nodes.len() + 1);
    for node in nodes {
        let line = describe_parameter(node, None);
        if line.is_empty() {
            tracing::warn!("specific entry '{}' has no description, skipped", node.name);
            continue;
        }
        lines.push(line);
    }

    if lines.is_empty() {
        return String::new();
    }

    lines.insert(0, format!("**{title}:**"));
    lines.join("\n")
}
