use super::Selector;
use crate::error::{ProjectError, Result};
use crate::tree::{Chunk, NodeRef};
use std::ops::ControlFlow;

/// Locate the first node, in document order, matched by `selector`
///
/// The scope node itself never matches. A required selector with no match
/// fails with `MissingField`; an optional one yields `Ok(None)`.
pub fn resolve<'a>(
    root: NodeRef<'a>,
    selector: &Selector,
    required: bool,
) -> Result<Option<NodeRef<'a>>> {
    let mut found = None;
    visit_matches(root, selector, &mut |node| {
        found = Some(node);
        ControlFlow::Break(())
    });

    match found {
        None if required => Err(ProjectError::missing(selector.to_string())),
        found => Ok(found),
    }
}

/// Every node matched by `selector`, in document order
pub fn resolve_all<'a>(root: NodeRef<'a>, selector: &Selector) -> Vec<NodeRef<'a>> {
    let mut found = Vec::new();
    visit_matches(root, selector, &mut |node| {
        found.push(node);
        ControlFlow::Continue(())
    });
    found
}

/// Resolve a nested scope that a record cannot be assembled without
///
/// Unlike a missing field, the absence of a whole scope reports
/// `MissingRequiredSubtree`.
pub fn resolve_scope<'a>(root: NodeRef<'a>, selector: &Selector) -> Result<NodeRef<'a>> {
    let mut found = None;
    visit_matches(root, selector, &mut |node| {
        if node.as_chunk().is_some() {
            found = Some(node);
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    found.ok_or_else(|| ProjectError::subtree(selector.to_string()))
}

fn visit_matches<'a>(
    root: NodeRef<'a>,
    selector: &Selector,
    visit: &mut dyn FnMut(NodeRef<'a>) -> ControlFlow<()>,
) {
    if let NodeRef::Chunk(chunk) = root {
        let mut path = Vec::new();
        let _ = walk(chunk, selector, &mut path, visit);
    }
}

/// Pre-order walk: a chunk's items, then each child chunk followed by its
/// own subtree
fn walk<'a>(
    chunk: &'a Chunk,
    selector: &Selector,
    path: &mut Vec<&'a str>,
    visit: &mut dyn FnMut(NodeRef<'a>) -> ControlFlow<()>,
) -> ControlFlow<()> {
    for item in &chunk.items {
        path.push(&item.name);
        let matched = selector.matches_path(path);
        path.pop();
        if matched {
            visit(NodeRef::Item(item))?;
        }
    }

    for child in &chunk.chunks {
        path.push(&child.name);
        let flow = descend(child, selector, path, visit);
        path.pop();
        flow?;
    }

    ControlFlow::Continue(())
}

fn descend<'a>(
    child: &'a Chunk,
    selector: &Selector,
    path: &mut Vec<&'a str>,
    visit: &mut dyn FnMut(NodeRef<'a>) -> ControlFlow<()>,
) -> ControlFlow<()> {
    if selector.matches_path(path) {
        visit(NodeRef::Chunk(child))?;
    }

    // child-only selectors cannot match below their own depth
    if !selector.is_deep() && path.len() >= selector.steps().len() {
        return ControlFlow::Continue(());
    }

    walk(child, selector, path, visit)
}
