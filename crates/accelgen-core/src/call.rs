//! Renders one example call for both ways of driving an accelerator.
//!
//! - **client**: a line of Python using the `myaccel` client object
//!   (`myaccel.process(file_in=..., file_out=...)`);
//! - **command**: a markdown block invoking the accelerator executable directly,
//!   with a `parameters.json` snippet when the call passes specific parameters.

use indexmap::IndexMap;

use crate::definition::CallNode;
use crate::describe::sentence;
use crate::error::{AccelGenError, Result};

/// Accelerator executable installed on the host.
pub const ACCELERATOR_BIN: &str = "/opt/accelize/accelerator/accelerator";

/// File holding specific parameters for the command-line rendering.
pub const PARAMETERS_FILE: &str = "parameters.json";

/// The `-m` value selecting the accelerator method.
fn command_mode(method: &str) -> Option<u8> {
    match method {
        "start" => Some(0),
        "process" => Some(1),
        "stop" => Some(2),
        _ => None,
    }
}

/// Command-line flag for a generic parameter.
fn command_flag(parameter: &str) -> Option<&'static str> {
    match parameter {
        "datafile" | "file_in" => Some("-i"),
        "file_out" => Some("-o"),
        "specific" => Some("-j"),
        _ => None,
    }
}

/// Both renderings of a single call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRendering {
    pub client: String,
    pub command: String,
}

/// Render `call` as an invocation of `method`.
///
/// Fails when `method` or one of the generic parameters has no command-line
/// equivalent.
pub fn read_call(call: &CallNode, method: &str) -> Result<CallRendering> {
    let mut client = Vec::new();
    let mut command = Vec::new();

    if let Some(desc) = &call.desc {
        let desc = sentence(desc);
        client.push(format!("    #    {desc}"));
        command.push(desc);
    }

    let mut generic: IndexMap<&str, &str> = call
        .params
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    let specific: IndexMap<&str, &str> = call
        .specific
        .iter()
        .map(|s| (s.name.as_str(), s.text.as_str()))
        .collect();

    let arguments = client_arguments(&generic, &specific);

    client.push(match &call.specific_output {
        Some(key) => format!("    result = myaccel.{method}({arguments})[\"{key}\"]"),
        None => format!("    myaccel.{method}({arguments})"),
    });

    if !specific.is_empty() {
        generic.insert("specific", PARAMETERS_FILE);
        let entries = join_pairs(specific.iter().map(|(k, v)| format!("\"{k}\": {v}")), ", ");
        command.push(format!(
            "With `{PARAMETERS_FILE}` as:\n```python\n{{\"app\": {{\"specific\": {{{entries}}}}}}}\n```"
        ));
    }

    let mode = command_mode(method).ok_or_else(|| AccelGenError::UnknownMethod(method.into()))?;
    let flags = generic
        .iter()
        .map(|(parameter, value)| {
            command_flag(parameter)
                .map(|flag| format!("{flag} {value}"))
                .ok_or_else(|| AccelGenError::UnknownParameter {
                    method: method.into(),
                    parameter: (*parameter).into(),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    command.push(format!(
        "```bash\nsudo {ACCELERATOR_BIN} -m {mode} {}\n```",
        flags.join(" ")
    ));

    tracing::debug!("rendered {method} call with {} arguments", flags.len());

    Ok(CallRendering {
        client: client.join("\n"),
        command: command.join("\n"),
    })
}

/// `key=value` list of the client call. Specific values win over generic ones
/// of the same name without moving them.
fn client_arguments(generic: &IndexMap<&str, &str>, specific: &IndexMap<&str, &str>) -> String {
    let mut arguments = generic.clone();
    arguments.extend(specific.iter().map(|(k, v)| (*k, *v)));
    join_pairs(arguments.iter().map(|(k, v)| format!("{k}={v}")), ", ")
}

fn join_pairs(pairs: impl Iterator<Item = String>, separator: &str) -> String {
    pairs.collect::<Vec<_>>().join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::SpecificValue;

    fn call(params: &[(&str, &str)], specific: &[(&str, &str)]) -> CallNode {
        CallNode {
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            specific: specific
                .iter()
                .map(|(name, text)| SpecificValue {
                    name: name.to_string(),
                    text: text.to_string(),
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_start_call() {
        let rendered = read_call(&CallNode::default(), "start").unwrap();
        assert_eq!(rendered.client, "    myaccel.start()");
        assert_eq!(
            rendered.command,
            "```bash\nsudo /opt/accelize/accelerator/accelerator -m 0 \n```"
        );
    }

    #[test]
    fn test_process_mode_and_flags() {
        let c = call(&[("file_in", "in.txt"), ("file_out", "out.gz")], &[]);
        let rendered = read_call(&c, "process").unwrap();
        assert_eq!(rendered.client, "    myaccel.process(file_in=in.txt, file_out=out.gz)");
        assert!(rendered.command.contains("-m 1 -i in.txt -o out.gz\n"));
    }

    #[test]
    fn test_stop_mode() {
        let rendered = read_call(&CallNode::default(), "stop").unwrap();
        assert!(rendered.command.contains("accelerator -m 2 "));
    }

    #[test]
    fn test_datafile_uses_input_flag() {
        let rendered = read_call(&call(&[("datafile", "data.bin")], &[]), "start").unwrap();
        assert!(rendered.command.contains("-m 0 -i data.bin\n"));
    }

    #[test]
    fn test_description_rendered_in_both_forms() {
        let mut c = CallNode::default();
        c.desc = Some("Stop the accelerator..".into());
        let rendered = read_call(&c, "stop").unwrap();
        assert_eq!(
            rendered.client,
            "    #    Stop the accelerator.\n    myaccel.stop()"
        );
        assert!(rendered.command.starts_with("Stop the accelerator.\n```bash\n"));
    }

    #[test]
    fn test_specific_parameters_json_block() {
        let c = call(&[("file_in", "in.txt")], &[("a", "1"), ("b", "2")]);
        let rendered = read_call(&c, "process").unwrap();
        assert_eq!(rendered.client, "    myaccel.process(file_in=in.txt, a=1, b=2)");
        assert_eq!(
            rendered.command,
            "With `parameters.json` as:\n```python\n\
             {\"app\": {\"specific\": {\"a\": 1, \"b\": 2}}}\n```\n\
             ```bash\nsudo /opt/accelize/accelerator/accelerator -m 1 -i in.txt -j parameters.json\n```"
        );
    }

    #[test]
    fn test_specific_overrides_generic_in_place() {
        let generic: IndexMap<&str, &str> = [("level", "1"), ("file_in", "in.txt")].into_iter().collect();
        let specific: IndexMap<&str, &str> = [("level", "9"), ("mode", "x")].into_iter().collect();
        assert_eq!(
            client_arguments(&generic, &specific),
            "level=9, file_in=in.txt, mode=x"
        );
    }

    #[test]
    fn test_unknown_parameter() {
        let c = call(&[("level", "1")], &[]);
        let err = read_call(&c, "process").unwrap_err();
        assert!(matches!(
            err,
            AccelGenError::UnknownParameter { ref parameter, .. } if parameter == "level"
        ));
    }

    #[test]
    fn test_specific_output_subscript() {
        let mut c = call(&[("file_in", "in.txt")], &[]);
        c.specific_output = Some("ratio".into());
        let rendered = read_call(&c, "process").unwrap();
        assert_eq!(
            rendered.client,
            "    result = myaccel.process(file_in=in.txt)[\"ratio\"]"
        );
    }

    #[test]
    fn test_unknown_method() {
        let err = read_call(&CallNode::default(), "reset").unwrap_err();
        assert!(matches!(err, AccelGenError::UnknownMethod(ref m) if m == "reset"));
    }
}
