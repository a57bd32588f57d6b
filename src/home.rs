//! The home page, built from explicit content tables.

use std::{collections::BTreeMap, sync::Arc};

use anyhow::{Context, Result};
use kstring::KString;
use serde::Deserialize;
use shtml::{cls, data, href, id, text,
            elements::{a, code, div, h1, h3, h5, li, p, pre, span, ul},
            preserialize, try_for_each, BuildError, Fragment, Node, SerHtmlFrag};

use crate::{asset::AssetSize, icons::{self, icon}};

#[derive(Debug, Clone)]
pub enum Details {
    Text(KString),
    /// Shown as a wrapped row of short items.
    Breadcrumbs(Vec<KString>),
}

#[derive(Debug, Clone)]
pub struct Feature {
    pub description: KString,
    /// Iconify id.
    pub icon: &'static str,
    pub details: Details,
}

pub fn default_features() -> Vec<Feature> {
    vec![
        Feature {
            description: "Fine Grained Reactivity via Signals".into(),
            icon: icons::GIT_DIFF,
            details: Details::Text(
                "No Virtual DOM, proxy wrappers, or re-rendering the entire page \
                 on every change. Take the best available options and use hassle \
                 free.".into()),
        },
        Feature {
            description: "Fully Compliant".into(),
            icon: icons::HTML5,
            details: Details::Text(
                "No monkey patching, no custom elements, no custom attributes, \
                 no custom anything. Just plain old HTML5.".into()),
        },
        Feature {
            description: "Everything is a Plugin".into(),
            icon: icons::PLUGINS,
            details: Details::Text(
                "Disagree with the built-in behavior? No problem, just write your \
                 own extension in a type safe way. Take what you need, leave what \
                 you don't.".into()),
        },
        Feature {
            description: "Batteries Included (but optional)".into(),
            icon: icons::BATTERIES,
            details: Details::Breadcrumbs(
                [
                    "Custom Actions",
                    "Attribute Binding",
                    "Focus",
                    "Signals",
                    "DOM Events",
                    "Refs",
                    "Intersects",
                    "Two-Way Binding",
                    "Visibility",
                    "Teleporting",
                    "Text Replacement",
                    "HTMX like features",
                    "Server Sent Events",
                ].into_iter().map(KString::from_static).collect()),
        },
    ]
}

/// File type names in the vscode-icons set.
pub const DEFAULT_LANGUAGES: &[&str] = &[
    "assembly", "apl", "c", "ceylon", "cpp", "cobol", "coffeescript",
    "clojure", "crystal", "csharp", "dartlang", "elixir", "erlang", "fsharp",
    "fortran", "go-gopher", "groovy", "haskell", "haxe", "java", "js",
    "julia", "kotlin", "lisp", "lolcode", "lua", "nim", "ocaml", "perl",
    "php", "python", "r", "ruby", "rust", "scala", "shell", "swift",
    "typescript", "vb", "zig",
];

pub fn default_languages() -> Vec<KString> {
    DEFAULT_LANGUAGES.iter().copied().map(KString::from_static).collect()
}

pub const CODE_SAMPLE: &str = r#"<div data-signal-count="0">
	<div>
		<button data-on-click="$count++">Increment +</button>
		<button data-on-click="$count--">Decrement -</button>
		<input type="number" data-model="count" />
	</div>
	<div data-text="$count"></div>
</div>
"#;

#[derive(Deserialize)]
struct PackageJson {
    #[serde(default)]
    dependencies: BTreeMap<String, serde_json::Value>,
}

/// The number of runtime dependencies declared in a `package.json`.
pub fn count_dependencies(package_json: &str) -> Result<usize> {
    let pkg: PackageJson = serde_json::from_str(package_json)
        .context("parsing package.json")?;
    Ok(pkg.dependencies.len())
}

pub fn language_grid(languages: &[KString]) -> Result<Node, BuildError> {
    div([
        cls("flex flex-wrap gap-2 justify-center items-center text-6xl"),
        try_for_each(languages, |name| {
            div([
                cls("avatar avatar-xl"),
                icon(&icons::file_type(name), [
                    cls("w-24 h-24 mask bg-gradient-to-t from-base-200 to-base-300 \
                         p-4 mask-hexagon")
                ])?.into(),
            ])
        })?.into(),
    ])
}

/// Everything the home page shows. Shared read-only between requests.
#[derive(Debug, Clone)]
pub struct HomeContent {
    pub features: Vec<Feature>,
    pub bundle_size: AssetSize,
    pub dependency_count: usize,
    /// Rendered once from the language list.
    pub language_grid: Arc<SerHtmlFrag>,
}

impl HomeContent {
    pub fn new(
        features: Vec<Feature>,
        languages: &[KString],
        bundle_size: AssetSize,
        dependency_count: usize,
    ) -> Result<Self, BuildError> {
        Ok(HomeContent {
            features,
            bundle_size,
            dependency_count,
            language_grid: preserialize(&language_grid(languages)?)?,
        })
    }
}

fn details(d: &Details) -> Result<Node, BuildError> {
    match d {
        Details::Text(s) => div([text(s)]),
        Details::Breadcrumbs(items) => div([
            cls("breadcrumbs"),
            ul([
                cls("flex flex-wrap gap-2 justify-center items-center"),
                try_for_each(items, |s| li([text(s)]))?.into(),
            ])?.into(),
        ]),
    }
}

fn feature_item(f: &Feature) -> Result<Node, BuildError> {
    li([
        div([
            cls("flex flex-col gap-1 justify-center items-center"),
            div([
                cls("flex gap-2 items-center"),
                icon(f.icon, [])?.into(),
                text(&f.description),
            ])?.into(),
            div([
                cls("text-lg opacity-50 p-2 rounded"),
                details(&f.details)?.into(),
            ])?.into(),
        ])?.into(),
    ])
}

fn badge(icon_id: &str, label: String) -> Result<Node, BuildError> {
    div([
        cls("badge badge-accent flex-1 gap-1"),
        icon(icon_id, [])?.into(),
        text(label),
    ])
}

fn hero(content: &HomeContent) -> Result<Node, BuildError> {
    div([
        cls("flex flex-wrap gap-6 justify-center items-center"),
        content.language_grid.clone().into(),
        a([
            cls("link-accent text-4xl"),
            href("https://htmx.org/essays/hypermedia-on-whatever-youd-like/"),
            text("HTML on whatever you want"),
        ])?.into(),
    ])
}

fn code_example(content: &HomeContent) -> Result<Node, BuildError> {
    div([
        cls("flex flex-col gap-2 w-full"),
        h3([cls("text-3xl font-bold"), text("Simple count example code")])?.into(),
        div([
            cls("bg-base-100 shadow-inner text-base-content p-4 rounded-box"),
            pre([
                code([cls("language-html"), text(CODE_SAMPLE)])?.into(),
            ])?.into(),
        ])?.into(),
        div([
            cls("flex gap-2 justify-center items-center"),
            badge(icons::FILE_ZIP,
                  format!("{} w/ all extensions", content.bundle_size.human_readable))?.into(),
            badge(icons::COLUMN_DEPENDENCY,
                  format!("{} Dependencies", content.dependency_count))?.into(),
            badge(icons::CHECKMARK, "Fully Tree Shakeable".into())?.into(),
        ])?.into(),
    ])
}

fn backend_example() -> Result<Node, BuildError> {
    div([
        cls("flex flex-col gap-2 w-full"),
        h3([cls("text-3xl font-bold"), text("Global count example from Backend")])?.into(),
        div([
            id("global-count-example"),
            cls("flex justify-center p-4 items-center gap-2"),
            data("signal-get", "'/api/globalCount'"),
            data("on-load", "@get"),
            span([text("Loading example on delay...")])?.into(),
            icon(icons::SPINNER, [cls("datastar-indicator")])?.into(),
        ])?.into(),
        h5([cls("text-2xl font-bold"),
            text("Open the console to see the Fetch/XHR traffic")])?.into(),
    ])
}

fn feature_card(content: &HomeContent) -> Result<Node, BuildError> {
    div([
        cls("card w-full shadow-2xl ring-4 bg-base-300 ring-secondary \
             text-secondary-content"),
        div([
            cls("card-body flex flex-col justify-center items-center"),
            ul([
                cls("flex flex-col gap-6 justify-center items-center text-2xl \
                     gap-4 max-w-xl"),
                try_for_each(&content.features, feature_item)?.into(),
            ])?.into(),
        ])?.into(),
    ])
}

fn built_with() -> Result<Node, BuildError> {
    let mut stack = Fragment::new();
    for (i, name) in ["html", "typescript-official", "vite", "rust"].iter().enumerate() {
        if i > 0 {
            stack.push(icon(icons::PLUS, [])?);
        }
        stack.push(icon(&icons::file_type(name), [])?);
    }
    div([
        cls("flex flex-col gap-2 justify-center items-center"),
        text("Built with "),
        div([
            cls("flex gap-1 justify-center items-center text-5xl"),
            stack.into(),
        ])?.into(),
        div([
            cls("flex gap-2 justify-center items-center"),
            text("by "),
            a([cls("link-accent"), href("https://github.com/pflanze"), text("us")])?.into(),
            text(" and looking for contributors!"),
        ])?.into(),
    ])
}

fn call_to_action() -> Result<Node, BuildError> {
    div([
        cls("w-full flex gap-2 items-center"),
        a([
            cls("btn btn-lg flex-1"),
            href("/essays/why-another-framework"),
            icon(icons::HELP, [])?.into(),
            text("Why another framework?"),
        ])?.into(),
        a([
            cls("btn btn-primary btn-lg flex-1"),
            href("/docs"),
            icon(icons::ROCKET, [])?.into(),
            text("Don't care, just get started"),
        ])?.into(),
    ])
}

/// The body content of the home page.
pub fn home_page(content: &HomeContent) -> Result<Node, BuildError> {
    div([
        cls("flex-1 flex flex-wrap md:p-16 text-xl flex-col items-center text-center \
             bg-gradient-to-tr from-base-100 to-base-200"),
        div([
            cls("max-w-4xl flex flex-col items-center justify-center gap-16"),
            div([
                h1([cls("text-6xl font-bold"), text("Declarative HTML")])?.into(),
                p([text("Delivered in a blazing fast, simple single framework")])?.into(),
            ])?.into(),
            hero(content)?.into(),
            code_example(content)?.into(),
            backend_example()?.into(),
            feature_card(content)?.into(),
            built_with()?.into(),
            call_to_action()?.into(),
        ])?.into(),
    ])
}
