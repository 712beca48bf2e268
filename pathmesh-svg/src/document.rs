//! Typed element tree for SVG documents.
//!
//! The tree is built from the `svg` crate's pull parser. Only elements and
//! their attributes are kept; text, comments and declarations are dropped.

use std::collections::BTreeMap;

use log::trace;
use pathmesh_core::{ErrorKind, PipelineError, PipelineResult};
use svg::node::element::tag::Type;
use svg::parser::Event;

/// Name of the synthetic element that holds a document's top-level
/// elements.
pub const DOCUMENT_ROOT: &str = "#document";

/// One element with its attributes and child elements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub name: String,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<Self>,
}

impl Element {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style attribute setter.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Builder-style child append.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }
}

fn syntax_error(message: impl Into<String>) -> PipelineError {
    PipelineError::new(ErrorKind::Parse, message)
}

/// Parse SVG text into a tree rooted at a [`DOCUMENT_ROOT`] element.
///
/// # Errors
///
/// Returns a [`ErrorKind::Parse`] error for malformed markup, for end tags
/// that do not match the open element, and for elements left open at the
/// end of the input.
pub fn parse_document(content: &str) -> PipelineResult<Element> {
    let parser = svg::read(content).map_err(|e| syntax_error(format!("cannot read document: {e}")))?;

    // Open elements, innermost last. The root is never popped.
    let mut stack = vec![Element::new(DOCUMENT_ROOT)];

    for event in parser {
        match event {
            Event::Tag(name, kind, attributes) => {
                let element = || Element {
                    name: name.to_string(),
                    attributes: attributes
                        .iter()
                        .map(|(k, v)| (k.clone(), v.to_string()))
                        .collect(),
                    children: Vec::new(),
                };
                match kind {
                    Type::Start => stack.push(element()),
                    Type::Empty => append(&mut stack, element()),
                    Type::End => {
                        let open = if stack.len() > 1 { stack.pop() } else { None };
                        let Some(open) = open else {
                            return Err(syntax_error(format!("unexpected </{name}>")));
                        };
                        if open.name != name {
                            return Err(syntax_error(format!(
                                "</{name}> closes <{}>",
                                open.name
                            )));
                        }
                        append(&mut stack, open);
                    }
                }
            }
            Event::Error(e) => return Err(syntax_error(format!("malformed document: {e}"))),
            _ => {}
        }
    }

    if stack.len() > 1 {
        let names: Vec<&str> = stack[1..].iter().map(|e| e.name.as_str()).collect();
        return Err(syntax_error(format!("unclosed elements: {}", names.join(", "))));
    }
    let root = stack.pop().unwrap_or_else(|| Element::new(DOCUMENT_ROOT));
    trace!("parsed document with {} top-level elements", root.children.len());
    Ok(root)
}

fn append(stack: &mut [Element], element: Element) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
