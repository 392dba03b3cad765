//! Ordered HTML attribute dictionaries with class-token merging.

use std::fmt;

use regex::Regex;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::sync::OnceLock;

use crate::error::{MaterializeError, MaterializeResult};
use crate::html::encode;

/// Attributes rendered before all others, in this order. Anything else keeps
/// its insertion order.
const ATTRIBUTE_ORDER: &[&str] = &[
    "type", "id", "class", "name", "value", "href", "src", "srcset", "for", "form", "action",
    "method", "selected", "checked", "readonly", "disabled", "multiple", "size", "maxlength",
    "width", "height", "rows", "cols", "alt", "title", "rel", "media", "target",
];

/// Attribute names whose map values expand into prefixed attributes
/// (`data: {length: 10}` renders `data-length="10"`).
const EXPANDED_PREFIXES: &[&str] = &["data", "aria"];

/// A single attribute value.
///
/// `Null` and `Flag(false)` suppress the attribute entirely, `Flag(true)`
/// renders it bare (`disabled`).
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Null,
    Flag(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
    Map(Attributes),
}

impl AttrValue {
    /// Space-separated tokens carried by this value (used for `class`).
    pub fn tokens(&self) -> Vec<String> {
        match self {
            AttrValue::Text(s) => s.split_whitespace().map(str::to_string).collect(),
            AttrValue::List(items) => items
                .iter()
                .flat_map(|s| s.split_whitespace())
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Whether the value suppresses its attribute.
    pub fn is_suppressed(&self) -> bool {
        matches!(self, AttrValue::Null | AttrValue::Flag(false))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// JSON form, used for non-class list and map values.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            AttrValue::Null => serde_json::Value::Null,
            AttrValue::Flag(b) => serde_json::Value::Bool(*b),
            AttrValue::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            AttrValue::Text(s) => serde_json::Value::String(s.clone()),
            AttrValue::List(items) => serde_json::Value::Array(
                items.iter().cloned().map(serde_json::Value::String).collect(),
            ),
            AttrValue::Map(attrs) => serde_json::Value::Object(
                attrs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_json()))
                    .collect(),
            ),
        }
    }

    fn scalar_text(&self) -> Option<String> {
        match self {
            AttrValue::Text(s) => Some(s.clone()),
            AttrValue::Number(n) => Some(n.to_string()),
            AttrValue::Flag(true) => Some("true".to_string()),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Text(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Flag(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Number(value as f64)
    }
}

impl From<usize> for AttrValue {
    fn from(value: usize) -> Self {
        AttrValue::Number(value as f64)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(value: Vec<String>) -> Self {
        AttrValue::List(value)
    }
}

impl From<Attributes> for AttrValue {
    fn from(value: Attributes) -> Self {
        AttrValue::Map(value)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(AttrValue::Null)
    }
}

/// Ordered attribute dictionary.
///
/// `class` is treated as a token set: [`Attributes::add_class`] and
/// [`Attributes::merged`] union tokens instead of replacing them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attributes holding only the given class tokens.
    pub fn class(classes: &str) -> Self {
        Self::new().with_class(classes)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Text value of an attribute, if it is set to a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttrValue::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Sets an attribute, keeping its position if it already exists.
    pub fn set(&mut self, name: &str, value: impl Into<AttrValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    pub fn with(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets an attribute only when it is not present yet.
    pub fn set_default(&mut self, name: &str, value: impl Into<AttrValue>) {
        if !self.contains(name) {
            self.set(name, value);
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        let pos = self.entries.iter().position(|(k, _)| k == name)?;
        Some(self.entries.remove(pos).1)
    }

    /// Class tokens in order.
    pub fn classes(&self) -> Vec<String> {
        self.get("class").map(AttrValue::tokens).unwrap_or_default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| c == class)
    }

    /// Adds whitespace-separated class tokens, skipping ones already present.
    pub fn add_class(&mut self, classes: &str) {
        let mut tokens = self.classes();
        let before = tokens.len();
        for token in classes.split_whitespace() {
            if !tokens.iter().any(|t| t == token) {
                tokens.push(token.to_string());
            }
        }
        if tokens.len() != before {
            self.set("class", AttrValue::List(tokens));
        }
    }

    pub fn with_class(mut self, classes: &str) -> Self {
        self.add_class(classes);
        self
    }

    pub fn remove_class(&mut self, class: &str) {
        let tokens: Vec<String> = self
            .classes()
            .into_iter()
            .filter(|t| !class.split_whitespace().any(|c| c == t))
            .collect();
        if tokens.is_empty() {
            self.remove("class");
        } else {
            self.set("class", AttrValue::List(tokens));
        }
    }

    /// Returns a new dictionary: `self` as defaults, `overrides` on top.
    /// Override values win, except `class`, whose tokens are unioned.
    pub fn merged(&self, overrides: &Attributes) -> Attributes {
        let mut result = self.clone();
        for (name, value) in &overrides.entries {
            if name == "class" {
                for token in value.tokens() {
                    result.add_class(&token);
                }
            } else {
                result.set(name, value.clone());
            }
        }
        result
    }

    /// Checks every attribute name against the HTML attribute-name grammar.
    pub fn validate(&self) -> MaterializeResult<()> {
        static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = NAME_REGEX.get_or_init(|| Regex::new(r"^[a-zA-Z_:@][a-zA-Z0-9_:.\-]*$").unwrap());
        for (name, value) in &self.entries {
            if !re.is_match(name) {
                return Err(MaterializeError::InvalidAttribute { name: name.clone() });
            }
            if let AttrValue::Map(inner) = value {
                inner.validate()?;
            }
        }
        Ok(())
    }

    /// Renders the attributes with a leading space before each one.
    pub fn render(&self) -> String {
        let mut ordered: Vec<&(String, AttrValue)> = Vec::with_capacity(self.entries.len());
        for key in ATTRIBUTE_ORDER {
            if let Some(entry) = self.entries.iter().find(|(k, _)| k == key) {
                ordered.push(entry);
            }
        }
        ordered.extend(
            self.entries
                .iter()
                .filter(|(k, _)| !ATTRIBUTE_ORDER.contains(&k.as_str())),
        );

        let mut out = String::new();
        for (name, value) in ordered {
            render_attribute(&mut out, name, value);
        }
        out
    }
}

fn render_attribute(out: &mut String, name: &str, value: &AttrValue) {
    match value {
        AttrValue::Null | AttrValue::Flag(false) => {}
        AttrValue::Flag(true) => {
            out.push(' ');
            out.push_str(name);
        }
        AttrValue::Text(_) | AttrValue::Number(_) => {
            if let Some(text) = value.scalar_text() {
                push_pair(out, name, &text);
            }
        }
        AttrValue::List(_) if name == "class" => {
            let tokens = value.tokens();
            if !tokens.is_empty() {
                push_pair(out, name, &tokens.join(" "));
            }
        }
        AttrValue::Map(inner) if EXPANDED_PREFIXES.contains(&name) => {
            for (key, v) in inner.iter() {
                let full = format!("{}-{}", name, key);
                match v {
                    AttrValue::List(_) | AttrValue::Map(_) => {
                        push_pair(out, &full, &v.to_json().to_string())
                    }
                    _ => render_attribute(out, &full, v),
                }
            }
        }
        AttrValue::Map(inner) if name == "style" => {
            let css: Vec<String> = inner
                .iter()
                .filter_map(|(k, v)| v.scalar_text().map(|t| format!("{}: {};", k, t)))
                .collect();
            if !css.is_empty() {
                push_pair(out, name, &css.join(" "));
            }
        }
        AttrValue::List(_) | AttrValue::Map(_) => {
            push_pair(out, name, &value.to_json().to_string());
        }
    }
}

fn push_pair(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&encode(value));
    out.push('"');
}

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AttributesVisitor;

        impl<'de> Visitor<'de> for AttributesVisitor {
            type Value = Attributes;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of HTML attributes")
            }

            fn visit_unit<E>(self) -> Result<Attributes, E> {
                Ok(Attributes::new())
            }

            fn visit_none<E>(self) -> Result<Attributes, E> {
                Ok(Attributes::new())
            }

            fn visit_map<M>(self, mut access: M) -> Result<Attributes, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut attrs = Attributes::new();
                while let Some((key, value)) = access.next_entry::<String, AttrValue>()? {
                    attrs.set(&key, value);
                }
                Ok(attrs)
            }
        }

        deserializer.deserialize_any(AttributesVisitor)
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_class_is_a_union() {
        let mut attrs = Attributes::class("btn");
        attrs.add_class("btn red");
        attrs.add_class("  large ");
        assert_eq!(attrs.classes(), vec!["btn", "red", "large"]);
    }

    #[test]
    fn merged_keeps_default_classes() {
        let defaults = Attributes::class("collection").with("id", "w0");
        let overrides = Attributes::class("z-depth-1 collection").with("id", "mine");
        let merged = defaults.merged(&overrides);
        assert_eq!(merged.classes(), vec!["collection", "z-depth-1"]);
        assert_eq!(merged.get_str("id"), Some("mine"));
        // The inputs are untouched.
        assert_eq!(defaults.get_str("id"), Some("w0"));
        assert_eq!(overrides.classes(), vec!["z-depth-1", "collection"]);
    }

    #[test]
    fn null_and_false_values_are_not_rendered() {
        let attrs = Attributes::new()
            .with("title", AttrValue::Null)
            .with("disabled", false)
            .with("readonly", true);
        assert_eq!(attrs.render(), " readonly");
    }

    #[test]
    fn priority_attributes_render_first() {
        let attrs = Attributes::new()
            .with("data-x", "1")
            .with("class", "a")
            .with("id", "i")
            .with("type", "submit");
        assert_eq!(
            attrs.render(),
            r#" type="submit" id="i" class="a" data-x="1""#
        );
    }

    #[test]
    fn values_are_encoded() {
        let attrs = Attributes::new().with("title", r#"a "quoted" <b>"#);
        assert_eq!(
            attrs.render(),
            r#" title="a &quot;quoted&quot; &lt;b&gt;""#
        );
    }

    #[test]
    fn data_maps_expand() {
        let data = Attributes::new().with("length", 10_i64).with("tooltip", "hi");
        let attrs = Attributes::new().with("data", data);
        assert_eq!(attrs.render(), r#" data-length="10" data-tooltip="hi""#);
    }

    #[test]
    fn remove_class_drops_empty_attribute() {
        let mut attrs = Attributes::class("active");
        attrs.remove_class("active");
        assert!(!attrs.contains("class"));
    }

    #[test]
    fn deserializes_from_yaml_in_order() {
        let attrs: Attributes =
            serde_yaml::from_str("target: _blank\nclass: [red, lighten-2]\ntitle: ~\n").unwrap();
        assert_eq!(attrs.len(), 3);
        assert_eq!(attrs.classes(), vec!["red", "lighten-2"]);
        assert_eq!(attrs.get("title"), Some(&AttrValue::Null));
        assert_eq!(attrs.iter().next().map(|(k, _)| k), Some("target"));
    }

    #[test]
    fn validate_rejects_bad_names() {
        let attrs = Attributes::new().with("on click", "x");
        assert!(matches!(
            attrs.validate(),
            Err(MaterializeError::InvalidAttribute { .. })
        ));
        assert!(Attributes::new().with("data-id", "1").validate().is_ok());
    }
}
