//! Cleaned up and indexed element data for building and checking
//! markup trees.

use std::{collections::HashMap, env, path::Path};
use anyhow::{anyhow, bail, Context, Result};
use kstring::KString;
use crate::types::ElementDef;

const ELEMENTS_JSON: &str = include_str!("../resources/elements.json");

#[derive(Debug)]
pub struct ElementMeta {
    pub tag_name: KString,
    pub has_closing_tag: bool,
    pub allows_child_text: bool,
}

impl ElementMeta {
    /// Void elements can't have any content.
    pub fn is_void(&self) -> bool {
        !self.has_closing_tag
    }
}

impl PartialEq for ElementMeta {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.tag_name == other.tag_name
    }
}

impl Eq for ElementMeta {}

#[derive(Debug)]
pub struct MetaDb {
    pub elementmeta: HashMap<KString, ElementMeta>,
}

impl MetaDb {
    pub fn get(&self, tag_name: &str) -> Option<&ElementMeta> {
        self.elementmeta.get(tag_name)
    }

    pub fn len(&self) -> usize {
        self.elementmeta.len()
    }
}

pub fn read_meta_db_from_json_str(json: &str) -> Result<MetaDb> {
    let defs: Vec<ElementDef> = serde_json::from_str(json)?;
    let mut elementmeta = HashMap::new();
    for def in defs {
        if def.tag_name.is_empty() {
            bail!("element definition with empty tag name")
        }
        if !def.has_closing_tag && def.allows_child_text {
            bail!("void element {:?} can't allow child text", def.tag_name.as_str())
        }
        let tag_name = def.tag_name.clone();
        let old = elementmeta.insert(tag_name, ElementMeta {
            tag_name: def.tag_name,
            has_closing_tag: def.has_closing_tag,
            allows_child_text: def.allows_child_text,
        });
        if let Some(old) = old {
            bail!("duplicate element definition for {:?}", old.tag_name.as_str())
        }
    }
    Ok(MetaDb { elementmeta })
}

pub fn read_meta_db_from_json_file(path: &Path) -> Result<MetaDb> {
    let json = std::fs::read_to_string(path)
        .with_context(|| anyhow!("reading element definitions from {path:?}"))?;
    read_meta_db_from_json_str(&json)
        .with_context(|| anyhow!("parsing element definitions from {path:?}"))
}

/// Reads the definitions compiled into the binary, unless the
/// `HTML_META_DB_JSON` env var points to a replacement file.
pub fn read_meta_db() -> Result<MetaDb> {
    match env::var("HTML_META_DB_JSON") {
        Ok(path) => {
            log::info!("reading element definitions from {path:?}");
            read_meta_db_from_json_file(path.as_ref())
        }
        Err(env::VarError::NotPresent) =>
            read_meta_db_from_json_str(ELEMENTS_JSON)
            .context("parsing built-in element definitions"),
        Err(e @ env::VarError::NotUnicode(_)) =>
            bail!("could not decode HTML_META_DB_JSON env var: {e}"),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_builtin_db() {
        let db = read_meta_db_from_json_str(ELEMENTS_JSON).unwrap();
        let div = db.get("div").unwrap();
        assert!(div.has_closing_tag);
        assert!(div.allows_child_text);
        let br = db.get("br").unwrap();
        assert!(br.is_void());
        assert!(!br.allows_child_text);
        assert!(!db.get("ul").unwrap().allows_child_text);
        assert!(db.get("blink").is_none());
    }

    #[test]
    fn t_defaults() {
        let db = read_meta_db_from_json_str(r#"[{"tag_name": "x"}]"#).unwrap();
        assert_eq!(db.len(), 1);
        let x = db.get("x").unwrap();
        assert!(x.has_closing_tag);
        assert!(x.allows_child_text);
    }

    #[test]
    fn t_invalid_defs() {
        assert!(read_meta_db_from_json_str(
            r#"[{"tag_name": "x"}, {"tag_name": "x"}]"#).is_err());
        assert!(read_meta_db_from_json_str(
            r#"[{"tag_name": "x", "has_closing_tag": false}]"#).is_err());
        assert!(read_meta_db_from_json_str(r#"[{"tag_name": ""}]"#).is_err());
        assert!(read_meta_db_from_json_str("{").is_err());
    }

    #[test]
    fn t_meta_eq() {
        let db = read_meta_db_from_json_str(ELEMENTS_JSON).unwrap();
        assert_eq!(db.get("p").unwrap(), db.get("p").unwrap());
        assert_ne!(db.get("p").unwrap(), db.get("div").unwrap());
    }
}
