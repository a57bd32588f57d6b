//! Setting and merging attributes on elements.

use kstring::KString;

use crate::{error::BuildError, myfrom::MyFrom, node::Element};

/// Attributes whose values are appended to (space separated) instead
/// of replaced when set again.
pub const ACCUMULATING_ATTRIBUTES: &[&str] = &["class"];

pub fn is_accumulating(name: &str) -> bool {
    ACCUMULATING_ATTRIBUTES.contains(&name)
}

/// Attribute names are printed verbatim, thus anything that could end
/// the name or the tag is refused.
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(
            |c| !(c.is_ascii_whitespace()
                  || c.is_control()
                  || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')))
}

impl Element {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attr.iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set attribute `name` to `value`, replacing an earlier value
    /// in place (keeps its position). For accumulating attributes
    /// (`class`), appends instead, like `add_class`.
    pub fn set_attribute<K, V>(&mut self, name: K, value: V) -> Result<(), BuildError>
    where KString: MyFrom<K> + MyFrom<V>
    {
        self.set_attribute_kstring(KString::myfrom(name), KString::myfrom(value))
    }

    /// Append `value` to the class attribute, separated by a
    /// space. Repeated values are kept as they are (no set
    /// semantics). An empty value still adds its separator.
    pub fn add_class<V>(&mut self, value: V) -> Result<(), BuildError>
    where KString: MyFrom<V>
    {
        self.append_to_attribute(KString::from_static("class"), KString::myfrom(value));
        Ok(())
    }

    pub(crate) fn set_attribute_kstring(
        &mut self,
        name: KString,
        value: KString
    ) -> Result<(), BuildError> {
        if !is_valid_attribute_name(&name) {
            return Err(BuildError::InvalidAttributeName {
                element: self.meta.tag_name.clone(),
                name,
            })
        }
        if is_accumulating(&name) {
            self.append_to_attribute(name, value);
        } else if let Some((_, v)) = self.attr.iter_mut().find(|(k, _)| *k == name) {
            *v = value;
        } else {
            self.attr.push((name, value));
        }
        Ok(())
    }

    fn append_to_attribute(&mut self, name: KString, value: KString) {
        if let Some((_, v)) = self.attr.iter_mut().find(|(k, _)| *k == name) {
            let mut s = String::with_capacity(v.len() + 1 + value.len());
            s.push_str(v);
            s.push(' ');
            s.push_str(&value);
            *v = KString::from_string(s);
        } else {
            self.attr.push((name, value));
        }
    }
}
