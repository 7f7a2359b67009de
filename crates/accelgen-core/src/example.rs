//! Assembles the multi-step usage example from the `<example>` section.
//!
//! The first call is the `start` command. Every following call, `stop` included,
//! is part of the "process" block. Both blocks are rendered for the Python client
//! and for the command line, and the client block is also reindented for the
//! generated `run_example.py` script.

use crate::call::read_call;
use crate::definition::ExampleStep;
use crate::error::{AccelGenError, Result};
use crate::identifiers::Identifiers;

/// Indentation of calls inside the example script's `with` block.
const SCRIPT_INDENT: &str = "    ";

/// Rendered example, one field per template identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Example {
    pub client_start: String,
    pub client_process: String,
    pub command_start: String,
    pub command_process: String,
    pub script_start: String,
    pub script_process: String,
    /// Markdown note naming the result file, empty when no call writes one.
    pub output_note: String,
}

impl Example {
    /// Add the `example_*` identifiers.
    pub fn write_identifiers(&self, identifiers: &mut Identifiers) {
        identifiers.insert("example_apyfal_start", self.client_start.as_str());
        identifiers.insert("example_accelerator_start", self.command_start.as_str());
        identifiers.insert("example_apyfal_process", self.client_process.as_str());
        identifiers.insert("example_accelerator_process", self.command_process.as_str());
        identifiers.insert("example_script_start", self.script_start.as_str());
        identifiers.insert("example_script_process", self.script_process.as_str());
        identifiers.insert("example_output", self.output_note.as_str());
    }
}

/// Walk the example steps in order and render every call.
pub fn assemble_example(steps: &[ExampleStep]) -> Result<Example> {
    let first = steps
        .iter()
        .find(|s| !s.calls.is_empty())
        .ok_or(AccelGenError::EmptyExample)?;
    if first.method != "start" {
        return Err(AccelGenError::MissingStart(first.method.clone()));
    }

    let mut client = Vec::new();
    let mut command = Vec::new();
    let mut outputs: Vec<&str> = Vec::new();

    for step in steps {
        for call in &step.calls {
            let rendered = read_call(call, &step.method)?;
            if let Some(file_out) = call.file_out() {
                outputs.push(file_out);
            }
            client.push(rendered.client);
            command.push(rendered.command);
        }
    }

    let output_file = outputs.last().copied();
    if outputs.iter().any(|f| Some(*f) != output_file) {
        tracing::warn!(
            "example writes several output files, only '{}' is documented",
            output_file.unwrap_or_default()
        );
    }

    let client_start = client.remove(0);
    let command_start = command.remove(0);
    let client_process = client.join("\n");

    Ok(Example {
        script_start: script_lines(&client_start),
        script_process: script_lines(&client_process),
        command_process: command.join("\n\n"),
        client_start,
        client_process,
        command_start,
        output_note: output_file
            .map(|f| format!(">The result is the `{f}` file.\n"))
            .unwrap_or_default(),
    })
}

/// Client lines without comments, indented for the script body.
fn script_lines(client: &str) -> String {
    client
        .lines()
        .filter(|line| !line.contains('#'))
        .map(|line| format!("{SCRIPT_INDENT}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{CallNode, Definition};
    use crate::fixtures::SAMPLE_DEFINITION;

    fn step(method: &str, calls: Vec<CallNode>) -> ExampleStep {
        ExampleStep {
            method: method.into(),
            calls,
        }
    }

    fn with_params(params: &[(&str, &str)]) -> CallNode {
        CallNode {
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_start_process_stop() {
        let steps = vec![
            step("start", vec![CallNode::default()]),
            step("process", vec![with_params(&[("file_in", "a.txt")])]),
            step("stop", vec![CallNode::default()]),
        ];
        let example = assemble_example(&steps).unwrap();

        assert_eq!(example.client_start, "    myaccel.start()");
        assert_eq!(
            example.client_process,
            "    myaccel.process(file_in=a.txt)\n    myaccel.stop()"
        );
        assert!(example.command_process.contains("-m 1 -i a.txt\n"));
        assert!(example.command_process.contains("```\n\n```bash"));
        assert!(example.command_process.contains("-m 2 \n"));
        assert_eq!(example.output_note, "");
    }

    #[test]
    fn test_script_drops_comments_and_indents() {
        let def = Definition::parse(SAMPLE_DEFINITION).unwrap();
        let example = assemble_example(&def.example).unwrap();

        assert_eq!(example.script_start, "        myaccel.start()");
        assert_eq!(
            example.script_process,
            "        myaccel.process(file_in=sample_1_1MB.txt, file_out=sample_1_1MB.txt.gz)\n\
             \x20       result = myaccel.process(file_in=sample_1_1MB.txt, file_out=sample_1_1MB.txt.gz, level=9)[\"ratio\"]\n\
             \x20       myaccel.stop()"
        );
        assert!(example.client_process.contains("#    Compress with default level."));
    }

    #[test]
    fn test_output_note_uses_file_out() {
        let steps = vec![
            step("start", vec![CallNode::default()]),
            step(
                "process",
                vec![with_params(&[("file_in", "data.csv"), ("file_out", "result.zip")])],
            ),
            step("stop", vec![CallNode::default()]),
        ];
        let example = assemble_example(&steps).unwrap();
        assert_eq!(example.output_note, ">The result is the `result.zip` file.\n");
    }

    #[test]
    fn test_last_output_file_wins() {
        let steps = vec![
            step("start", vec![CallNode::default()]),
            step(
                "process",
                vec![
                    with_params(&[("file_out", "first.zip")]),
                    with_params(&[("file_out", "second.zip")]),
                ],
            ),
        ];
        let example = assemble_example(&steps).unwrap();
        assert_eq!(example.output_note, ">The result is the `second.zip` file.\n");
    }

    #[test]
    fn test_start_only_has_empty_process() {
        let example = assemble_example(&[step("start", vec![CallNode::default()])]).unwrap();
        assert_eq!(example.client_process, "");
        assert_eq!(example.command_process, "");
        assert_eq!(example.script_process, "");
    }

    #[test]
    fn test_empty_example_fails() {
        assert!(matches!(assemble_example(&[]), Err(AccelGenError::EmptyExample)));
    }

    #[test]
    fn test_missing_start_fails() {
        let steps = vec![step("process", vec![CallNode::default()])];
        assert!(matches!(
            assemble_example(&steps),
            Err(AccelGenError::MissingStart(ref m)) if m == "process"
        ));
    }

    #[test]
    fn test_write_identifiers() {
        let example = assemble_example(&[step("start", vec![CallNode::default()])]).unwrap();
        let mut ids = Identifiers::new();
        example.write_identifiers(&mut ids);
        for key in [
            "example_apyfal_start",
            "example_accelerator_start",
            "example_apyfal_process",
            "example_accelerator_process",
            "example_script_start",
            "example_script_process",
            "example_output",
        ] {
            assert!(ids.contains(key), "missing {key}");
        }
    }
}
