//! The values that can be passed to element builders, in any order.

use std::sync::Arc;

use kstring::KString;

use crate::{fragment::Fragment, myfrom::MyFrom, node::{Node, SerHtmlFrag}};

#[derive(Debug, Clone)]
pub enum Modifier {
    Attribute(KString, KString),
    /// Appended to the class attribute.
    Class(KString),
    Child(Node),
    Text(KString),
    /// Spliced into the body.
    Fragment(Fragment),
    /// Does nothing; the result of conditionals that didn't apply.
    Empty,
}

fn ks<T>(s: T) -> KString
where KString: MyFrom<T>
{
    KString::myfrom(s)
}

pub fn att<T, U>(key: T, val: U) -> Modifier
where KString: MyFrom<T> + MyFrom<U>
{
    Modifier::Attribute(ks(key), ks(val))
}

pub fn opt_att<T, U>(key: T, val: Option<U>) -> Modifier
where KString: MyFrom<T> + MyFrom<U>
{
    match val {
        Some(val) => att(key, val),
        None => Modifier::Empty,
    }
}

pub fn cls<T>(val: T) -> Modifier
where KString: MyFrom<T>
{
    Modifier::Class(ks(val))
}

pub fn id<T>(val: T) -> Modifier
where KString: MyFrom<T>
{
    Modifier::Attribute(KString::from_static("id"), ks(val))
}

pub fn href<T>(val: T) -> Modifier
where KString: MyFrom<T>
{
    Modifier::Attribute(KString::from_static("href"), ks(val))
}

/// A `data-*` attribute, `name` is given without the prefix.
pub fn data<T, U>(name: T, val: U) -> Modifier
where KString: MyFrom<T> + MyFrom<U>
{
    let name = ks(name);
    Modifier::Attribute(KString::from_string(format!("data-{name}")), ks(val))
}

pub fn text<T>(s: T) -> Modifier
where KString: MyFrom<T>
{
    Modifier::Text(ks(s))
}

impl From<Node> for Modifier {
    fn from(node: Node) -> Self {
        match node {
            Node::Fragment(f) => Modifier::Fragment(f),
            node => Modifier::Child(node),
        }
    }
}

impl From<Fragment> for Modifier {
    fn from(f: Fragment) -> Self {
        Modifier::Fragment(f)
    }
}

impl From<Arc<SerHtmlFrag>> for Modifier {
    fn from(s: Arc<SerHtmlFrag>) -> Self {
        Modifier::Child(Node::Preserialized(s))
    }
}

impl<T: Into<Modifier>> From<Option<T>> for Modifier {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Modifier::Empty,
        }
    }
}
