//! Element metadata for the shtml markup tree: which tags exist,
//! which of them are void elements, and which accept text content.

pub mod types;
pub mod meta;
