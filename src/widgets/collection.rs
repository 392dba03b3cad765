use serde::Deserialize;

use crate::attributes::Attributes;
use crate::error::{require, MaterializeError, MaterializeResult};
use crate::html;
use crate::page::View;
use crate::widget::{IconSpec, Widget, WidgetBase};

/// Materialize collection (list group).
///
/// ```yaml
/// Collection:
///   items:
///     - { label: First Names, header: true }
///     - label: Alvin
///       avatar: { icon: folder, title: Title }
///       secondary: { icon: send, url: /send }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Collection {
    pub items: Vec<CollectionItem>,
    pub options: Attributes,
    pub encode_labels: bool,
    /// Renders a `div` of links instead of a `ul`.
    pub as_links: bool,
}

impl Default for Collection {
    fn default() -> Self {
        Collection {
            items: Vec::new(),
            options: Attributes::new(),
            encode_labels: true,
            as_links: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CollectionItem {
    pub label: Option<String>,
    pub header: bool,
    pub encode: Option<bool>,
    pub options: Attributes,
    /// Link target when the collection renders as links.
    pub url: Option<String>,
    /// Wraps the label in a link when not rendering as links.
    pub link_options: Option<Attributes>,
    pub active: bool,
    pub visible: bool,
    pub avatar: Option<Avatar>,
    pub secondary: Option<Secondary>,
}

impl Default for CollectionItem {
    fn default() -> Self {
        CollectionItem {
            label: None,
            header: false,
            encode: None,
            options: Attributes::new(),
            url: None,
            link_options: None,
            active: false,
            visible: true,
            avatar: None,
            secondary: None,
        }
    }
}

impl CollectionItem {
    pub fn new(label: &str) -> Self {
        CollectionItem {
            label: Some(label.to_string()),
            ..Default::default()
        }
    }

    pub fn header(label: &str) -> Self {
        CollectionItem {
            header: true,
            ..Self::new(label)
        }
    }
}

/// Leading image or icon of an item.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Avatar {
    pub image: Option<AvatarImage>,
    pub icon: Option<IconSpec>,
    pub title: Option<String>,
    pub title_options: Attributes,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AvatarImage {
    Url(String),
    Config {
        url: String,
        #[serde(default)]
        options: Attributes,
    },
}

/// Trailing icon link (`secondary-content`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Secondary {
    pub icon: Option<IconSpec>,
    pub url: Option<String>,
    pub options: Attributes,
}

impl Collection {
    pub fn new(items: Vec<CollectionItem>) -> Self {
        Collection {
            items,
            ..Default::default()
        }
    }

    fn render_avatar(&self, avatar: &Avatar) -> MaterializeResult<String> {
        let mut parts = Vec::new();
        if let Some(image) = &avatar.image {
            let (url, mut options) = match image {
                AvatarImage::Url(url) => (url.as_str(), Attributes::new()),
                AvatarImage::Config { url, options } => (url.as_str(), options.clone()),
            };
            options.validate()?;
            options.set_default("class", "circle");
            parts.push(html::img(url, &options));
        } else if let Some(icon) = &avatar.icon {
            let mut defaults = Attributes::new();
            let has_class = matches!(icon, IconSpec::Config(cfg) if cfg.options.contains("class"));
            if !has_class {
                defaults.add_class("circle");
            }
            parts.push(icon.render("Collection", &defaults)?);
        }
        if let Some(title) = &avatar.title {
            avatar.title_options.validate()?;
            let attrs = Attributes::class("title").merged(&avatar.title_options);
            parts.push(html::tag("span", &html::encode_if(title, self.encode_labels), &attrs));
        }
        Ok(parts.join("\n"))
    }

    fn render_secondary(&self, secondary: &Secondary) -> MaterializeResult<String> {
        let icon = secondary
            .icon
            .as_ref()
            .ok_or_else(|| MaterializeError::missing("Collection", "secondary.icon"))?;
        secondary.options.validate()?;
        let attrs = Attributes::class("secondary-content").merged(&secondary.options);
        Ok(html::a(
            &icon.render("Collection", &Attributes::new())?,
            Some(secondary.url.as_deref().unwrap_or("#")),
            &attrs,
        ))
    }

    fn render_item(&self, item: &CollectionItem, label: &str) -> MaterializeResult<String> {
        item.options.validate()?;
        let mut options = item.options.clone();
        let mut label = html::encode_if(label, item.encode.unwrap_or(self.encode_labels));

        if item.header {
            options.add_class("collection-header");
        } else {
            options.add_class("collection-item");
            if item.active {
                options.add_class("active");
            }
            if let Some(avatar) = &item.avatar {
                options.add_class("avatar");
                let avatar = self.render_avatar(avatar)?;
                if !avatar.is_empty() {
                    label = format!("{}\n{}", avatar, label);
                }
            }
            if let Some(secondary) = &item.secondary {
                label = format!("{}\n{}", label, self.render_secondary(secondary)?);
            }
        }

        if self.as_links {
            options.set("href", item.url.as_deref().unwrap_or("#"));
            return Ok(html::tag("a", &label, &options));
        }
        if let Some(link_options) = &item.link_options {
            link_options.validate()?;
            label = html::a(&label, Some(item.url.as_deref().unwrap_or("#")), link_options);
        }
        Ok(html::tag("li", &label, &options))
    }
}

impl Widget for Collection {
    fn render(&self, view: &mut dyn View) -> MaterializeResult<String> {
        let mut rendered = Vec::new();
        let mut has_header = false;
        for item in &self.items {
            let label = require(&item.label, "Collection", "items.label")?;
            if !item.visible {
                continue;
            }
            has_header |= item.header;
            rendered.push(self.render_item(item, label)?);
        }

        let mut base = WidgetBase::init("Collection", &self.options, view)?;
        base.add_class("collection");
        if has_header {
            base.add_class("with-header");
        }
        base.register_assets(view)?;

        let tag = if self.as_links { "div" } else { "ul" };
        let body = if rendered.is_empty() {
            "\n".to_string()
        } else {
            format!("\n{}\n", rendered.join("\n"))
        };
        Ok(html::tag(tag, &body, base.options()))
    }
}
