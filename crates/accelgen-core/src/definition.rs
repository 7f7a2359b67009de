//! Typed schema for the accelerator definition document.
//!
//! The definition lives at `.resources/accelerator_def.xml` inside an accelerator
//! repository. It is parsed once with [`roxmltree`] and converted into plain structs,
//! so the formatting stages never deal with raw XML nodes or "single node or list"
//! ambiguity.
//!
//! ## Document layout
//!
//! ```text
//! <repository>
//!   <template>                 flat key -> text identifiers
//!   <parameters>               one child per method (start, process, stop)
//!     <process>
//!       <file_in><desc/><value><value/><desc/></value></file_in>
//!       <specific name="..."><desc/></specific>
//!   <output file_out="true">   optional
//!   <example>                  ordered call steps
//!     <start/> <process/> ... <stop/>
//! </repository>
//! ```

use std::path::Path;

use indexmap::IndexMap;
use roxmltree::{Document, Node, ParsingOptions};

use crate::error::{AccelGenError, Result};

const ROOT: &str = "repository";
const SPECIFIC: &str = "specific";

/// A parsed accelerator definition.
#[derive(Debug, Clone, Default)]
pub struct Definition {
    /// Template identifiers, copied as-is into the identifier mapping.
    pub template: IndexMap<String, String>,
    /// Parameter documentation, one section per method.
    pub parameters: Vec<MethodSection>,
    /// Description of what `process` produces.
    pub output: Option<OutputSection>,
    /// Example call steps, in execution order.
    pub example: Vec<ExampleStep>,
}

/// Documented parameters of one accelerator method.
#[derive(Debug, Clone, Default)]
pub struct MethodSection {
    pub name: String,
    /// Generic parameters keyed by their element name.
    pub generic: IndexMap<String, ParameterNode>,
    /// Accelerator-specific parameters.
    pub specific: Vec<ParameterNode>,
}

impl MethodSection {
    pub fn is_empty(&self) -> bool {
        self.generic.is_empty() && self.specific.is_empty()
    }
}

/// Description of one parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterNode {
    pub name: String,
    pub desc: Option<String>,
    /// Allowed values, empty when the parameter is free-form.
    pub values: Vec<ValueNode>,
}

/// One allowed value of a parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueNode {
    pub value: String,
    pub desc: String,
}

/// The `<output>` section.
#[derive(Debug, Clone, Default)]
pub struct OutputSection {
    pub desc: Option<String>,
    /// Set by `file_out="true"`: processing writes the file named by `file_out`.
    pub file_out: bool,
    pub specific: Vec<ParameterNode>,
}

/// A named example step holding one or more calls of the same method.
#[derive(Debug, Clone, Default)]
pub struct ExampleStep {
    pub method: String,
    pub calls: Vec<CallNode>,
}

/// One example invocation.
#[derive(Debug, Clone, Default)]
pub struct CallNode {
    pub desc: Option<String>,
    /// Key of the result entry to surface in the client rendering.
    pub specific_output: Option<String>,
    /// Generic parameters in declaration order.
    pub params: IndexMap<String, String>,
    pub specific: Vec<SpecificValue>,
}

impl CallNode {
    /// Output file written by this call, if any.
    pub fn file_out(&self) -> Option<&str> {
        self.params.get("file_out").map(String::as_str)
    }
}

/// A specific parameter value passed in an example call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecificValue {
    pub name: String,
    pub text: String,
}

impl Definition {
    /// Read and parse a definition file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| AccelGenError::DefinitionNotFound {
                path: path.to_path_buf(),
                source: e,
            })?;
        Self::parse_at(&contents, path)
    }

    /// Parse a definition from an in-memory document.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_at(text, Path::new("<inline>"))
    }

    fn parse_at(text: &str, path: &Path) -> Result<Self> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        };
        let doc = Document::parse_with_options(text, options).map_err(|e| {
            AccelGenError::DefinitionParse {
                path: path.to_path_buf(),
                source: e,
            }
        })?;

        let root = doc.root_element();
        if root.tag_name().name() != ROOT {
            return Err(AccelGenError::MalformedDefinition(format!(
                "root element must be <{ROOT}>, found <{}>",
                root.tag_name().name()
            )));
        }

        let template = parse_template(section(root, "template")?);
        let parameters = section(root, "parameters")?
            .children()
            .filter(Node::is_element)
            .map(parse_method_section)
            .collect::<Result<Vec<_>>>()?;
        let output = child(root, "output").map(parse_output).transpose()?;
        let example = parse_example(section(root, "example")?)?;

        tracing::debug!(
            "loaded definition: {} template identifiers, {} parameter sections, {} example steps",
            template.len(),
            parameters.len(),
            example.len()
        );

        Ok(Self {
            template,
            parameters,
            output,
            example,
        })
    }

    /// Look up a parameter section by method name.
    pub fn method(&self, name: &str) -> Option<&MethodSection> {
        self.parameters.iter().find(|m| m.name == name)
    }
}

fn section<'a, 'input>(root: Node<'a, 'input>, name: &'static str) -> Result<Node<'a, 'input>> {
    child(root, name).ok_or(AccelGenError::MissingSection(name))
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|c| c.is_element() && c.tag_name().name() == name)
}

fn children_named<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |c| c.is_element() && c.tag_name().name() == name)
}

/// Trimmed text content; whitespace-only counts as absent.
fn text_of(node: Node) -> Option<String> {
    node.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
}

fn child_text(node: Node, name: &str) -> Option<String> {
    child(node, name).and_then(text_of)
}

fn required_name(node: Node) -> Result<String> {
    node.attribute("name")
        .map(str::to_owned)
        .ok_or_else(|| {
            AccelGenError::MalformedDefinition(format!(
                "<{}> element without a name attribute",
                node.tag_name().name()
            ))
        })
}

fn parse_template(node: Node) -> IndexMap<String, String> {
    node.children()
        .filter(Node::is_element)
        .map(|c| (c.tag_name().name().to_owned(), text_of(c).unwrap_or_default()))
        .collect()
}

fn parse_method_section(node: Node) -> Result<MethodSection> {
    let mut method = MethodSection {
        name: node.tag_name().name().to_owned(),
        ..Default::default()
    };

    for param in node.children().filter(Node::is_element) {
        let key = param.tag_name().name();
        if key == SPECIFIC {
            method.specific.push(parse_parameter(param, required_name(param)?)?);
        } else {
            let name = param.attribute("name").unwrap_or(key).to_owned();
            method.generic.insert(key.to_owned(), parse_parameter(param, name)?);
        }
    }

    Ok(method)
}

fn parse_parameter(node: Node, name: String) -> Result<ParameterNode> {
    let values = children_named(node, "value")
        .map(|v| {
            let value = child_text(v, "value").ok_or_else(|| {
                AccelGenError::MalformedDefinition(format!(
                    "allowed value of '{name}' has no <value> text"
                ))
            })?;
            Ok(ValueNode {
                value,
                desc: child_text(v, "desc").unwrap_or_default(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ParameterNode {
        desc: child_text(node, "desc"),
        name,
        values,
    })
}

fn parse_output(node: Node) -> Result<OutputSection> {
    let specific = children_named(node, SPECIFIC)
        .map(|s| parse_parameter(s, required_name(s)?))
        .collect::<Result<Vec<_>>>()?;

    Ok(OutputSection {
        desc: child_text(node, "desc"),
        file_out: node
            .attribute("file_out")
            .is_some_and(|v| v.eq_ignore_ascii_case("true")),
        specific,
    })
}

/// Repeated step names are grouped under their first occurrence.
fn parse_example(node: Node) -> Result<Vec<ExampleStep>> {
    let mut steps: Vec<ExampleStep> = Vec::new();

    for element in node.children().filter(Node::is_element) {
        let method = element.tag_name().name();
        let call = parse_call(element)?;
        match steps.iter_mut().find(|s| s.method == method) {
            Some(step) => step.calls.push(call),
            None => steps.push(ExampleStep {
                method: method.to_owned(),
                calls: vec![call],
            }),
        }
    }

    Ok(steps)
}

fn parse_call(node: Node) -> Result<CallNode> {
    let mut call = CallNode::default();

    for param in node.children().filter(Node::is_element) {
        match param.tag_name().name() {
            "desc" => call.desc = text_of(param),
            "specific_output" => call.specific_output = text_of(param),
            SPECIFIC => call.specific.push(SpecificValue {
                name: required_name(param)?,
                text: text_of(param).unwrap_or_default(),
            }),
            key => {
                call.params
                    .insert(key.to_owned(), text_of(param).unwrap_or_default());
            }
        }
    }

    Ok(call)
}
