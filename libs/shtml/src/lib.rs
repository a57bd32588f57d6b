//! Building HTML as trees of owned nodes, and streaming them out
//! with correct escaping.

pub mod myfrom;
pub mod error;
pub mod node;
pub mod attr;
pub mod modifier;
pub mod builder;
pub mod elements;
pub mod fragment;
pub mod print;
pub mod page;

use lazy_static::lazy_static;
use shtml_html::meta::{MetaDb, read_meta_db};

pub use error::{BuildError, RenderError};
pub use node::{Node, Element, SerHtmlFrag};
pub use modifier::{Modifier, att, opt_att, cls, id, href, data, text};
pub use builder::element;
pub use fragment::{Fragment, for_each, try_for_each, when, TryCollectFragment};
pub use print::{Print, render, render_document, to_html_string, preserialize};
pub use page::{PageMetadata, ScriptRef, assemble};

pub const NBSP: &str = "\u{00A0}";

lazy_static!{
    pub static ref METADB: MetaDb = read_meta_db().expect(
        "element database is valid (checked by the shtml_html tests)");
}
