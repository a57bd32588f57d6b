//! Wrapping content in the document skeleton.

use kstring::KString;

use crate::{elements::{body, head, html, link, meta, script, title},
            error::BuildError, fragment::try_for_each,
            modifier::{att, opt_att, text, Modifier}, node::Node};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRef {
    pub src: KString,
    /// Emit `type="module"`.
    pub module: bool,
    pub defer: bool,
}

impl ScriptRef {
    pub fn new(src: impl Into<KString>) -> Self {
        ScriptRef { src: src.into(), module: false, defer: false }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: KString,
    pub description: Option<KString>,
    pub lang: KString,
    pub stylesheets: Vec<KString>,
    pub scripts: Vec<ScriptRef>,
    pub body_class: Option<KString>,
}

impl PageMetadata {
    pub fn new(title: impl Into<KString>) -> Self {
        PageMetadata {
            title: title.into(),
            description: None,
            lang: KString::from_static("en"),
            stylesheets: Vec::new(),
            scripts: Vec::new(),
            body_class: None,
        }
    }
}

fn bool_att(name: &'static str, on: bool) -> Modifier {
    if on {
        att(name, "")
    } else {
        Modifier::Empty
    }
}

/// `html[lang]` with a `head` built from `page` and a `body`
/// containing `content`.
pub fn assemble(content: Node, page: &PageMetadata) -> Result<Node, BuildError> {
    html([
        att("lang", &page.lang),
        head([
            meta([att("charset", "utf-8")])?.into(),
            meta([att("name", "viewport"),
                  att("content", "width=device-width, initial-scale=1")])?.into(),
            title([text(&page.title)])?.into(),
            page.description.as_ref().map(
                |d| meta([att("name", "description"), att("content", d)])
            ).transpose()?.into(),
            try_for_each(&page.stylesheets, |href| {
                link([att("rel", "stylesheet"), att("href", href)])
            })?.into(),
            try_for_each(&page.scripts, |s| {
                script([
                    if s.module { att("type", "module") } else { Modifier::Empty },
                    bool_att("defer", s.defer),
                    att("src", &s.src),
                ])
            })?.into(),
        ])?.into(),
        body([
            opt_att("class", page.body_class.as_ref()),
            content.into(),
        ])?.into(),
    ])
}
