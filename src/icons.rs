//! Iconify icons, rendered as placeholders that the Iconify client
//! script replaces with the SVG.

use shtml::{cls, data, elements::span, BuildError, Modifier, Node};

/// `id` is "set:name", e.g. "mdi:rocket-launch". Further modifiers
/// (usually classes) are applied to the placeholder element.
pub fn icon(
    id: &str,
    modifiers: impl IntoIterator<Item = Modifier>
) -> Result<Node, BuildError> {
    span([cls("iconify"), data("icon", id)].into_iter().chain(modifiers))
}

pub const FILE_ZIP: &str = "tabler:file-zip";
pub const COLUMN_DEPENDENCY: &str = "carbon:column-dependency";
pub const CHECKMARK: &str = "zondicons:checkmark";
pub const SPINNER: &str = "svg-spinners:eclipse";
pub const GIT_DIFF: &str = "ph:git-diff";
pub const HTML5: &str = "mdi:language-html5";
pub const PLUGINS: &str = "gridicons:plugins";
pub const BATTERIES: &str = "game-icons:batteries";
pub const PLUS: &str = "material-symbols:add-rounded";
pub const HELP: &str = "material-symbols:help";
pub const ROCKET: &str = "mdi:rocket-launch";

/// Icons of the vscode-icons set are named by file type.
pub fn file_type(name: &str) -> String {
    format!("vscode-icons:file-type-{name}")
}
