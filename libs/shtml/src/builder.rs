//! Building elements from modifiers.

use kstring::KString;
use shtml_html::meta::ElementMeta;

use crate::{error::BuildError, fragment::Fragment, modifier::Modifier,
            node::{Element, Node}, METADB};

fn all_whitespace(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_whitespace())
}

pub fn element_meta(tag_name: &str) -> Result<&'static ElementMeta, BuildError> {
    METADB.get(tag_name).ok_or_else(
        || BuildError::UnknownElement(KString::from_ref(tag_name)))
}

/// Build an element by applying `modifiers` in the given order.
pub fn element(
    tag_name: &str,
    modifiers: impl IntoIterator<Item = Modifier>
) -> Result<Node, BuildError> {
    element_with_meta(element_meta(tag_name)?, modifiers)
}

pub fn element_with_meta(
    meta: &'static ElementMeta,
    modifiers: impl IntoIterator<Item = Modifier>
) -> Result<Node, BuildError> {
    let mut e = Element::with_meta(meta);
    for m in modifiers {
        e.apply(m)?;
    }
    Ok(Node::Element(e))
}

impl Element {
    pub fn new(tag_name: &str) -> Result<Element, BuildError> {
        Ok(Element::with_meta(element_meta(tag_name)?))
    }

    pub fn with_meta(meta: &'static ElementMeta) -> Element {
        Element {
            meta,
            attr: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn apply(&mut self, modifier: Modifier) -> Result<(), BuildError> {
        match modifier {
            Modifier::Attribute(k, v) => self.set_attribute_kstring(k, v),
            Modifier::Class(v) => self.add_class(v),
            Modifier::Child(node) => self.push_child(node),
            Modifier::Text(s) => self.push_child(Node::Text(s)),
            Modifier::Fragment(f) => self.push_fragment(f),
            Modifier::Empty => Ok(()),
        }
    }

    /// Fragments are spliced in.
    pub fn push_child(&mut self, node: Node) -> Result<(), BuildError> {
        match node {
            Node::Fragment(f) => self.push_fragment(f),
            node => {
                self.verify_has_body()?;
                self.body.push(node);
                Ok(())
            }
        }
    }

    pub fn push_fragment(&mut self, fragment: Fragment) -> Result<(), BuildError> {
        let nodes = fragment.into_nodes();
        self.body.reserve(nodes.len());
        for node in nodes {
            self.push_child(node)?;
        }
        Ok(())
    }

    fn verify_has_body(&self) -> Result<(), BuildError> {
        let meta = self.meta;
        if meta.is_void() {
            return Err(BuildError::VoidElementChild(meta.tag_name.clone()))
        }
        Ok(())
    }

    /// Check the tree below this element against the content model:
    /// non-whitespace text directly inside elements like `ul` or
    /// `table` is reported. Not applied by the builders.
    pub fn check_text_content(&self) -> Result<(), BuildError> {
        for node in &self.body {
            match node {
                Node::Text(s) if !self.meta.allows_child_text && !all_whitespace(s) =>
                    return Err(BuildError::TextNotAllowed {
                        element: self.meta.tag_name.clone(),
                        text: s.clone(),
                    }),
                Node::Element(e) => e.check_text_content()?,
                _ => (),
            }
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{elements::{div, li, ul, br, span, table},
                fragment::for_each,
                modifier::{att, cls, text, id}};

    #[test]
    fn t_unknown_element() {
        assert_eq!(element("blink", []).unwrap_err(),
                   BuildError::UnknownElement(KString::from_static("blink")));
    }

    #[test]
    fn t_modifier_order() {
        let n = div([
            text("a"),
            cls("x"),
            span([text("b")]).unwrap().into(),
            att("title", "t"),
            cls("y"),
            text("c"),
        ]).unwrap();
        let e = n.as_element().unwrap();
        assert_eq!(e.attributes().len(), 2);
        assert_eq!(e.attribute("class"), Some("x y"));
        assert_eq!(e.attribute("title"), Some("t"));
        assert_eq!(e.body().len(), 3);
        assert_eq!(e.body()[0].as_text(), Some("a"));
        assert_eq!(e.body()[1].tag_name(), Some("span"));
        assert_eq!(e.body()[2].as_text(), Some("c"));
    }

    #[test]
    fn t_fragment_spliced() {
        let n = ul([
            li([text("first")]).unwrap().into(),
            for_each(["a", "b"], |s| Node::Text(KString::from_ref(s))).into(),
            Modifier::Empty,
            li([text("last")]).unwrap().into(),
        ]).unwrap();
        let e = n.as_element().unwrap();
        assert_eq!(e.body().len(), 4);
        assert_eq!(e.body()[1].as_text(), Some("a"));
        assert_eq!(e.body()[2].as_text(), Some("b"));

        let n = div([
            id("d"),
            for_each(["a", "b"], |s| Node::Text(KString::from_ref(s))).into(),
        ]).unwrap();
        let e = n.as_element().unwrap();
        assert_eq!(e.body().len(), 2);
        assert!(e.body().iter().all(|n| !matches!(n, Node::Fragment(_))));
    }

    #[test]
    fn t_text_anywhere() {
        let n = ul([cls("x"), text("hello")]).unwrap();
        assert_eq!(n.as_element().unwrap().body()[0].as_text(), Some("hello"));
        assert!(table([text("t")]).is_ok());
    }

    #[test]
    fn t_check_text_content() {
        let n = ul([text("\n  "), li([text("item")]).unwrap().into()]).unwrap();
        assert_eq!(n.as_element().unwrap().check_text_content(), Ok(()));

        let n = div([ul([text("hello")]).unwrap().into()]).unwrap();
        assert_eq!(n.as_element().unwrap().check_text_content(),
                   Err(BuildError::TextNotAllowed {
                       element: KString::from_static("ul"),
                       text: KString::from_static("hello"),
                   }));
    }

    #[test]
    fn t_void() {
        assert!(br([cls("x")]).is_ok());
        assert_eq!(br([text("no")]).unwrap_err(),
                   BuildError::VoidElementChild(KString::from_static("br")));
    }
}
