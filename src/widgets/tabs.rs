use serde::Deserialize;

use crate::attributes::Attributes;
use crate::error::{require, MaterializeResult};
use crate::html;
use crate::page::View;
use crate::widget::{ClientEvents, ClientOptions, Widget, WidgetBase};

/// Tab strip plus content panes.
///
/// ```yaml
/// Tabs:
///   items:
///     - { label: One, content: <p>First</p> }
///     - { label: Two, content: <p>Second</p>, active: true }
///     - { label: Docs, url: /docs }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tabs {
    pub items: Vec<TabItem>,
    /// Options of the `ul.tabs` element.
    pub options: Attributes,
    /// Defaults for every `li.tab`.
    pub header_options: Attributes,
    /// Defaults for every header link.
    pub link_options: Attributes,
    /// Defaults for every pane.
    pub item_options: Attributes,
    pub encode_labels: bool,
    pub fixed_width: bool,
    pub client_options: ClientOptions,
    pub client_events: ClientEvents,
}

impl Default for Tabs {
    fn default() -> Self {
        Tabs {
            items: Vec::new(),
            options: Attributes::new(),
            header_options: Attributes::new(),
            link_options: Attributes::new(),
            item_options: Attributes::new(),
            encode_labels: true,
            fixed_width: false,
            client_options: ClientOptions::new(),
            client_events: ClientEvents::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TabItem {
    pub label: Option<String>,
    pub encode: Option<bool>,
    pub header_options: Attributes,
    pub link_options: Attributes,
    /// Pane markup, inserted as-is.
    pub content: Option<String>,
    /// External target; such tabs get no pane.
    pub url: Option<String>,
    /// Pane options.
    pub options: Attributes,
    pub active: bool,
    pub disabled: bool,
    pub visible: bool,
}

impl Default for TabItem {
    fn default() -> Self {
        TabItem {
            label: None,
            encode: None,
            header_options: Attributes::new(),
            link_options: Attributes::new(),
            content: None,
            url: None,
            options: Attributes::new(),
            active: false,
            disabled: false,
            visible: true,
        }
    }
}

impl TabItem {
    pub fn new(label: &str, content: &str) -> Self {
        TabItem {
            label: Some(label.to_string()),
            content: Some(content.to_string()),
            ..Default::default()
        }
    }

    pub fn link(label: &str, url: &str) -> Self {
        TabItem {
            label: Some(label.to_string()),
            url: Some(url.to_string()),
            ..Default::default()
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

impl Tabs {
    pub fn new(items: Vec<TabItem>) -> Self {
        Tabs {
            items,
            ..Default::default()
        }
    }

    /// Index of the item activated when none is marked: the first visible,
    /// enabled one.
    fn implicit_active(&self) -> Option<usize> {
        if self.items.iter().any(|item| item.visible && item.active) {
            return None;
        }
        self.items
            .iter()
            .position(|item| item.visible && !item.disabled)
    }
}

impl Widget for Tabs {
    fn render(&self, view: &mut dyn View) -> MaterializeResult<String> {
        for item in &self.items {
            require(&item.label, "Tabs", "items.label")?;
            item.header_options.validate()?;
            item.link_options.validate()?;
            item.options.validate()?;
        }
        self.header_options.validate()?;
        self.link_options.validate()?;
        self.item_options.validate()?;

        let mut base = WidgetBase::init("Tabs", &self.options, view)?;
        base.add_class("tabs");
        if self.fixed_width {
            base.add_class("tabs-fixed-width");
        }
        let implicit = self.implicit_active();

        let mut headers = Vec::new();
        let mut panes = Vec::new();
        for (index, item) in self.items.iter().enumerate() {
            if !item.visible {
                continue;
            }
            let label = require(&item.label, "Tabs", "items.label")?;
            let active = item.active || implicit == Some(index);

            let mut header = Attributes::class("tab")
                .merged(&self.header_options)
                .merged(&item.header_options);
            if item.disabled {
                header.add_class("disabled");
            }

            let mut link = self.link_options.merged(&item.link_options);
            if active {
                link.add_class("active");
            }
            match &item.url {
                Some(url) => {
                    link.set("href", url.as_str());
                    link.set_default("target", "_self");
                }
                None => {
                    let mut pane = self.item_options.merged(&item.options);
                    let pane_id = match pane.get_str("id") {
                        Some(id) => id.to_string(),
                        None => format!("{}-tab{}", base.id(), index),
                    };
                    pane.set("id", pane_id.as_str());
                    if active {
                        pane.add_class("active");
                    }
                    link.set("href", format!("#{}", pane_id));
                    panes.push(html::tag(
                        "div",
                        item.content.as_deref().unwrap_or_default(),
                        &pane,
                    ));
                }
            }

            let label = html::encode_if(label, item.encode.unwrap_or(self.encode_labels));
            headers.push(html::tag("li", &html::tag("a", &label, &link), &header));
        }

        base.register_plugin(view, "Tabs", &self.client_options, &self.client_events)?;

        let mut lines = vec![html::tag("ul", &format!("\n{}\n", headers.join("\n")), base.options())];
        lines.extend(panes);
        Ok(lines.join("\n"))
    }
}
