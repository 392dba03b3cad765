//! Markup emitter and the Materialize-specific tag helpers.
//!
//! Content passed to [`tag`] is inserted as-is; encode untrusted text with
//! [`encode`] first or use [`text_tag`].

use regex::Regex;
use std::sync::OnceLock;

use crate::attributes::Attributes;
use crate::error::{MaterializeError, MaterializeResult};
use crate::types::Waves;

/// Elements that never get a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Escapes the five markup-significant characters.
pub fn encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Encodes `text` unless the caller vouches for it.
pub fn encode_if(text: &str, should_encode: bool) -> String {
    if should_encode {
        encode(text)
    } else {
        text.to_string()
    }
}

/// Rejects tag names that would break the markup (`tagName` is caller-supplied).
pub fn validate_tag_name(name: &str) -> MaterializeResult<()> {
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = TAG_REGEX.get_or_init(|| Regex::new(r"^[a-z][a-z0-9\-]*$").unwrap());
    if re.is_match(name) {
        Ok(())
    } else {
        Err(MaterializeError::InvalidTag {
            tag: name.to_string(),
        })
    }
}

pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

/// Opening tag.
pub fn begin_tag(name: &str, attrs: &Attributes) -> String {
    format!("<{}{}>", name, attrs.render())
}

/// Closing tag.
pub fn end_tag(name: &str) -> String {
    format!("</{}>", name)
}

/// Complete tag around trusted `content`. Void elements ignore the content.
pub fn tag(name: &str, content: &str, attrs: &Attributes) -> String {
    if is_void_element(name) {
        return begin_tag(name, attrs);
    }
    format!("<{0}{1}>{2}</{0}>", name, attrs.render(), content)
}

/// Complete tag around text that gets HTML-encoded.
pub fn text_tag(name: &str, text: &str, attrs: &Attributes) -> String {
    tag(name, &encode(text), attrs)
}

/// Complete tag whose content is produced by `content`. Errors from the
/// callback abort the whole tag.
pub fn tag_with<F>(name: &str, attrs: &Attributes, content: F) -> MaterializeResult<String>
where
    F: FnOnce(&mut String) -> MaterializeResult<()>,
{
    let mut out = begin_tag(name, attrs);
    if is_void_element(name) {
        return Ok(out);
    }
    content(&mut out)?;
    out.push_str(&end_tag(name));
    Ok(out)
}

/// Hyperlink. `label` is trusted HTML.
pub fn a(label: &str, url: Option<&str>, attrs: &Attributes) -> String {
    let mut attrs = attrs.clone();
    if let Some(url) = url {
        attrs.set("href", url);
    }
    tag("a", label, &attrs)
}

/// Image with `alt` defaulting to empty.
pub fn img(src: &str, attrs: &Attributes) -> String {
    let mut attrs = attrs.clone();
    attrs.set("src", src);
    attrs.set_default("alt", "");
    begin_tag("img", &attrs)
}

/// Material icon: `<i class="material-icons …">name</i>`.
pub fn icon(name: &str, attrs: &Attributes) -> String {
    let attrs = Attributes::class("material-icons").merged(attrs);
    text_tag("i", name, &attrs)
}

/// Returns a copy of `attrs` with the Waves classes for `waves` added.
/// `waves-effect` is always present once any effect is requested.
pub fn add_waves(waves: &[Waves], attrs: &Attributes) -> Attributes {
    let mut attrs = attrs.clone();
    if waves.is_empty() {
        return attrs;
    }
    attrs.add_class(&Waves::Effect.css_class());
    for w in waves.iter().filter(|w| **w != Waves::Effect) {
        attrs.add_class(&w.css_class());
    }
    attrs
}

// ─── Grid and typography ─────────────────────────────────────────────────────

pub fn begin_grid_row(attrs: &Attributes) -> String {
    begin_tag("div", &Attributes::class("row").merged(attrs))
}

pub fn end_grid_row() -> String {
    end_tag("div")
}

pub fn begin_grid_col(attrs: &Attributes) -> String {
    begin_tag("div", &Attributes::class("col").merged(attrs))
}

pub fn end_grid_col() -> String {
    end_tag("div")
}

pub fn grid_col(content: &str, attrs: &Attributes) -> String {
    tag("div", content, &Attributes::class("col").merged(attrs))
}

pub fn begin_blockquote(attrs: &Attributes) -> String {
    begin_tag("blockquote", attrs)
}

pub fn end_blockquote() -> String {
    end_tag("blockquote")
}

pub fn blockquote(content: &str, attrs: &Attributes) -> String {
    tag("blockquote", content, attrs)
}
