//! One builder function per HTML element, e.g. `div([cls("x"),
//! text("hi")])`.

use crate::{builder::element, error::BuildError, modifier::Modifier, node::Node};

macro_rules! def_elements {
    { $($name:ident)* } => {
        /// The tag names having a builder function in this module.
        pub const ELEMENT_NAMES: &[&str] = &[$(stringify!($name)),*];

        $(
            #[doc = concat!("Build a `<", stringify!($name), ">` element.")]
            pub fn $name(
                modifiers: impl IntoIterator<Item = Modifier>
            ) -> Result<Node, BuildError> {
                element(stringify!($name), modifiers)
            }
        )*
    }
}

// `data` is missing to avoid the clash with the data-* attribute
// helper; use `element("data", ..)`.
def_elements! {
    html head body title meta link script style noscript
    div span p a h1 h2 h3 h4 h5 h6
    ul ol li dl dt dd
    pre code blockquote strong em b i small sub sup mark abbr time kbd samp var q cite s u
    br hr wbr img picture source track embed area col colgroup
    figure figcaption section article aside header footer main nav address
    button input label form textarea select option optgroup fieldset legend
    output progress meter
    table caption thead tbody tfoot tr td th
    iframe video audio canvas
    details summary dialog template
    base
}
