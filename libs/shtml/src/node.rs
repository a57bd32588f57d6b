use std::sync::Arc;

use kstring::KString;
use shtml_html::meta::ElementMeta;

use crate::fragment::Fragment;

/// Serialized HTML fragment string. Can be included in `Node`s
/// again. Contains the metainformation about the outermost element
/// in the serialized fragment for checking where it is placed.
#[derive(Debug)]
pub struct SerHtmlFrag {
    pub(crate) meta: &'static ElementMeta,
    pub(crate) kstring: KString
}

impl SerHtmlFrag {
    #[inline(always)]
    pub fn meta(&self) -> &'static ElementMeta {
        self.meta
    }
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.kstring
    }
}

#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    /// Raw text, escaped when printed.
    Text(KString),
    /// Nodes without an enclosing tag; spliced into the body of any
    /// element it is added to.
    Fragment(Fragment),
    Preserialized(Arc<SerHtmlFrag>),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
            Node::Fragment(_) => None,
            Node::Preserialized(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(s) => Some(s.as_str()),
            _ => None
        }
    }

    /// The tag name if this is an element, or preserialized element.
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Node::Element(e) => Some(e.meta.tag_name.as_str()),
            Node::Preserialized(p) => Some(p.meta.tag_name.as_str()),
            Node::Text(_) | Node::Fragment(_) => None,
        }
    }
}

/// An element with its attributes and body. Only constructed via the
/// builder functions, which maintain that attribute names are unique
/// and valid and that the body never contains `Node::Fragment`s.
#[derive(Debug, Clone)]
pub struct Element {
    pub(crate) meta: &'static ElementMeta,
    pub(crate) attr: Vec<(KString, KString)>,
    pub(crate) body: Vec<Node>,
}

impl Element {
    pub fn meta(&self) -> &'static ElementMeta { self.meta }
    pub fn tag_name(&self) -> &str { self.meta.tag_name.as_str() }
    pub fn attributes(&self) -> &[(KString, KString)] { &self.attr }
    pub fn body(&self) -> &[Node] { &self.body }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

impl From<Fragment> for Node {
    fn from(f: Fragment) -> Self {
        Node::Fragment(f)
    }
}

impl From<Arc<SerHtmlFrag>> for Node {
    fn from(s: Arc<SerHtmlFrag>) -> Self {
        Node::Preserialized(s)
    }
}
