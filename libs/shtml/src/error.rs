use std::io;

use kstring::KString;

/// Errors from building a tree. These are programming errors in the
/// code doing the building, and are expected to be caught by tests.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("unknown element {0:?}")]
    UnknownElement(KString),
    #[error("invalid attribute name {name:?} for element {element:?}")]
    InvalidAttributeName {
        element: KString,
        name: KString,
    },
    #[error("element {0:?} is a void element and can't have content")]
    VoidElementChild(KString),
    #[error("text is not allowed as a child of element {element:?}: {text:?}")]
    TextNotAllowed {
        element: KString,
        text: KString,
    },
    #[error("can only preserialize element nodes")]
    PreserializeNonElement,
}

/// Errors from serializing a tree to a sink. Rendering stops at the
/// first failing write.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("output sink was closed, rendering cancelled: {0}")]
    Cancelled(#[source] io::Error),
    #[error("writing to output sink: {0}")]
    Io(#[source] io::Error),
}

impl RenderError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RenderError::Cancelled(_))
    }
}

impl From<io::Error> for RenderError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::BrokenPipe
                | io::ErrorKind::ConnectionReset
                | io::ErrorKind::ConnectionAborted
                | io::ErrorKind::UnexpectedEof => RenderError::Cancelled(e),
            _ => RenderError::Io(e),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_classify() {
        let e: RenderError = io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
        assert!(e.is_cancelled());
        let e: RenderError = io::Error::new(io::ErrorKind::Other, "disk full").into();
        assert!(!e.is_cancelled());
        assert_eq!(e.to_string(), "writing to output sink: disk full");
    }
}
