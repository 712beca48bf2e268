//! SVG document lookup for `pathmesh`.
//!
//! Parses a document into a typed [`Element`] tree, lists every `<path>`
//! element with its `d` attribute, and picks the one to mesh.
//!
//! Key design points:
//! - The walk is depth-first in document order. Element names in the skip
//!   list are visited but their subtrees are not, so e.g. skipping `defs`
//!   hides paths that only serve as clip or marker geometry.
//! - A `<path>` without a `d` attribute has nothing to mesh and is left
//!   out of the listing.
//! - A document with exactly one path selects it whatever the requested id.

pub mod document;
pub mod visit;

use std::collections::BTreeSet;

use log::{debug, warn};
use pathmesh_core::{ErrorKind, PipelineError, PipelineResult};

pub use document::{Element, parse_document};
pub use visit::{Flow, Visitor, walk};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// A `<path>` element found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathElement {
    pub id: Option<String>,
    /// Path data, the `d` attribute.
    pub d: String,
}

/// Options for [`find_paths`].
#[derive(Debug, Clone, Default)]
pub struct LookupOptions {
    /// Element names whose subtrees are not searched.
    pub skip_elements: BTreeSet<String>,
}

/// Collects `<path>` elements, skipping configured subtrees.
struct PathCollector<'a> {
    skip: &'a BTreeSet<String>,
    paths: Vec<PathElement>,
}

impl Visitor for PathCollector<'_> {
    fn visit(&mut self, element: &Element) -> Flow {
        if self.skip.contains(&element.name) {
            debug!("not descending into <{}>", element.name);
            return Flow::SkipChildren;
        }
        if element.name == "path" {
            match element.attribute("d") {
                Some(d) => self.paths.push(PathElement {
                    id: element.id().map(str::to_owned),
                    d: d.to_owned(),
                }),
                None => warn!("ignoring <path> without path data (id {:?})", element.id()),
            }
        }
        Flow::Descend
    }
}

/// List every `<path>` with path data under `root`, in document order.
#[must_use]
pub fn find_paths(root: &Element, options: &LookupOptions) -> Vec<PathElement> {
    let mut collector = PathCollector {
        skip: &options.skip_elements,
        paths: Vec::new(),
    };
    walk(root, &mut collector);
    debug!("found {} paths", collector.paths.len());
    collector.paths
}

/// Parse `content` and list its paths.
///
/// # Errors
///
/// Returns a [`ErrorKind::Parse`] error for malformed markup.
pub fn read_paths(content: &str, options: &LookupOptions) -> PipelineResult<Vec<PathElement>> {
    let root = parse_document(content)?;
    Ok(find_paths(&root, options))
}

fn selection_error(message: impl Into<String>) -> PipelineError {
    PipelineError::new(ErrorKind::InputSelection, message)
}

/// Pick the path to mesh.
///
/// A single path is returned as is. With several paths, `id` is required
/// and must match one of them.
///
/// # Errors
///
/// Returns a [`ErrorKind::InputSelection`] error when there are no paths,
/// when there are several and no `id` was given, or when no path has the
/// given `id`.
pub fn select_path<'a>(paths: &'a [PathElement], id: Option<&str>) -> PipelineResult<&'a PathElement> {
    match paths {
        [] => Err(selection_error("no paths found in input file")),
        [only] => Ok(only),
        _ => {
            let Some(id) = id else {
                return Err(selection_error(
                    "input file has multiple paths, please specify the desired id as an additional parameter",
                ));
            };
            paths
                .iter()
                .find(|p| p.id.as_deref() == Some(id))
                .ok_or_else(|| selection_error(format!("input file has no path with id '{id}'")))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
