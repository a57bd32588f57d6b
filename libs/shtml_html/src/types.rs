//! Serialized form of the element definitions, as found in
//! `resources/elements.json`.

use kstring::KString;
use serde::{Deserialize, Serialize};

fn yes() -> bool {
    true
}

/// One entry of the element definitions file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementDef {
    pub tag_name: KString,
    /// False for void elements like `br`, `img`, `meta`.
    #[serde(default = "yes")]
    pub has_closing_tag: bool,
    /// Whether non-whitespace text may appear directly inside.
    #[serde(default = "yes")]
    pub allows_child_text: bool,
}
