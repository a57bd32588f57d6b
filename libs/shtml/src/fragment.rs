//! Fragments and the combinators producing them.

use crate::{modifier::Modifier, node::Node};

/// A sequence of nodes with no enclosing tag of its own. When added
/// to an element, its nodes end up directly in the element's body.
#[derive(Debug, Clone, Default)]
pub struct Fragment {
    nodes: Vec<Node>,
}

impl Fragment {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self { nodes: Vec::with_capacity(cap) }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    /// Nested fragments are flattened.
    pub fn push(&mut self, node: Node) {
        match node {
            Node::Fragment(f) => self.nodes.extend(f.nodes),
            node => self.nodes.push(node),
        }
    }
}

impl FromIterator<Node> for Fragment {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        let mut f = Fragment::new();
        for node in iter {
            f.push(node);
        }
        f
    }
}

/// One node per item, in input order.
pub fn for_each<T, I, F>(items: I, mut project: F) -> Fragment
where I: IntoIterator<Item = T>,
      F: FnMut(T) -> Node
{
    let items = items.into_iter();
    let mut f = Fragment::with_capacity(items.size_hint().0);
    for item in items {
        f.push(project(item));
    }
    f
}

/// Like `for_each` but for projections that can fail, which is the
/// case for all that use the element builders. Stops at the first
/// error.
pub fn try_for_each<T, E, I, F>(items: I, mut project: F) -> Result<Fragment, E>
where I: IntoIterator<Item = T>,
      F: FnMut(T) -> Result<Node, E>
{
    let items = items.into_iter();
    let mut f = Fragment::with_capacity(items.size_hint().0);
    for item in items {
        f.push(project(item)?);
    }
    Ok(f)
}

pub trait TryCollectFragment<E> {
    fn try_collect_fragment(self) -> Result<Fragment, E>;
}

impl<E, I: Iterator<Item = Result<Node, E>>> TryCollectFragment<E> for I {
    fn try_collect_fragment(self) -> Result<Fragment, E> {
        let mut f = Fragment::with_capacity(self.size_hint().0);
        for item in self {
            f.push(item?);
        }
        Ok(f)
    }
}

/// Only run `thunk` if `cond` is true; `Modifier::Empty` otherwise.
pub fn when<E, M, F>(cond: bool, thunk: F) -> Result<Modifier, E>
where M: Into<Modifier>,
      F: FnOnce() -> Result<M, E>
{
    if cond {
        Ok(thunk()?.into())
    } else {
        Ok(Modifier::Empty)
    }
}
