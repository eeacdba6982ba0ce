//! Style declarations and their serialization into `style` attributes.
//!
//! A [`StyleSet`] is an ordered list of `name: value` declarations. Turning
//! it into attribute text is delegated to a [`StyleComposer`], so callers can
//! plug in their own serialization (e.g. one that drops vendor prefixes)
//! without touching the renderer.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ordered set of presentation declarations.
///
/// Insertion order is preserved and is the order the default composer
/// emits. Setting a name that is already present replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSet {
    declarations: Vec<(String, String)>,
}

impl StyleSet {
    /// Create an empty style set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a declaration and return self.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a declaration, replacing any existing value for the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.declarations.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => self.declarations.push((name, value)),
        }
    }

    /// Get the value declared for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Remove a declaration, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.declarations.iter().position(|(n, _)| n == name)?;
        Some(self.declarations.remove(index).1)
    }

    /// Iterate declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Check if the set has no declarations.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for StyleSet {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut set = StyleSet::new();
        for (name, value) in iter {
            set.set(name, value);
        }
        set
    }
}

impl Serialize for StyleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.declarations.len()))?;
        for (name, value) in &self.declarations {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StyleSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StyleSetVisitor;

        impl<'de> Visitor<'de> for StyleSetVisitor {
            type Value = StyleSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of style declarations")
            }

            // Entries are visited in document order, which keeps the
            // declaration order independent of serde_json's map type.
            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<StyleSet, A::Error> {
                let mut set = StyleSet::new();
                while let Some((name, value)) = access.next_entry::<String, String>()? {
                    set.set(name, value);
                }
                Ok(set)
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<StyleSet, E> {
                Ok(StyleSet::new())
            }
        }

        deserializer.deserialize_any(StyleSetVisitor)
    }
}

/// Serializes a [`StyleSet`] into the text of a `style` attribute.
///
/// Implementations must be reentrant: the renderer may call the same
/// composer from several threads when rendering a batch.
pub trait StyleComposer: fmt::Debug + Send + Sync {
    /// Serialize the declarations. An empty set must yield an empty string.
    fn compose(&self, styles: &StyleSet) -> String;
}

/// Default composer: `name:value` pairs joined by `;` in insertion order.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineStyleComposer;

impl StyleComposer for InlineStyleComposer {
    fn compose(&self, styles: &StyleSet) -> String {
        styles
            .iter()
            .map(|(name, value)| format!("{}:{}", name, value))
            .collect::<Vec<_>>()
            .join(";")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let mut styles = StyleSet::new().with("color", "red").with("margin", "0");
        styles.set("color", "blue");

        let names: Vec<_> = styles.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["color", "margin"]);
        assert_eq!(styles.get("color"), Some("blue"));
        assert_eq!(styles.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut styles = StyleSet::new().with("color", "red");
        assert_eq!(styles.remove("color"), Some("red".to_string()));
        assert_eq!(styles.remove("color"), None);
        assert!(styles.is_empty());
    }

    #[test]
    fn test_inline_composer() {
        let composer = InlineStyleComposer;
        assert_eq!(composer.compose(&StyleSet::new()), "");

        let styles: StyleSet = [("color", "red"), ("font-size", "12px")]
            .into_iter()
            .collect();
        assert_eq!(composer.compose(&styles), "color:red;font-size:12px");
    }

    #[test]
    fn test_json_keeps_declaration_order() {
        let styles: StyleSet =
            serde_json::from_str(r#"{"z-index":"2","color":"red","a":"b"}"#).unwrap();
        let names: Vec<_> = styles.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["z-index", "color", "a"]);

        let json = serde_json::to_string(&styles).unwrap();
        assert_eq!(json, r#"{"z-index":"2","color":"red","a":"b"}"#);
    }

    #[test]
    fn test_json_null_is_empty() {
        let styles: StyleSet = serde_json::from_str("null").unwrap();
        assert!(styles.is_empty());
    }
}
