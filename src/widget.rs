//! Behavior shared by every widget: option initialization, plugin
//! registration and icon rendering.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::assets::PLUGIN_BUNDLE;
use crate::attributes::Attributes;
use crate::error::{MaterializeError, MaterializeResult};
use crate::html;
use crate::page::{ScriptPosition, View};
use crate::types::Position;

/// A configuration-to-markup template.
pub trait Widget {
    /// Renders the widget, registering the assets and scripts it needs on `view`.
    fn render(&self, view: &mut dyn View) -> MaterializeResult<String>;
}

/// Options forwarded verbatim (as JSON) to a Materialize plugin constructor.
pub type ClientOptions = Map<String, Value>;

/// Event name to handler source, attached after the plugin is initialized.
pub type ClientEvents = BTreeMap<String, String>;

/// Working copy of a widget's root options.
///
/// Created from the caller's options at the start of a render; the caller's
/// configuration is never touched.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetBase {
    widget: &'static str,
    id: String,
    options: Attributes,
}

impl WidgetBase {
    /// Validates `options`, copies them and makes sure they carry an id.
    pub fn init(
        widget: &'static str,
        options: &Attributes,
        view: &mut dyn View,
    ) -> MaterializeResult<Self> {
        options.validate()?;
        let mut options = options.clone();
        let id = match options.get_str("id") {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => {
                let id = view.next_widget_id();
                options.set("id", id.as_str());
                id
            }
        };
        debug!(widget, %id, "rendering widget");
        Ok(WidgetBase {
            widget,
            id,
            options,
        })
    }

    pub fn widget(&self) -> &'static str {
        self.widget
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn options(&self) -> &Attributes {
        &self.options
    }

    pub fn add_class(&mut self, classes: &str) {
        self.options.add_class(classes);
    }

    /// Registers the Materialize JS bundle without initializing a plugin.
    pub fn register_assets(&self, view: &mut dyn View) -> MaterializeResult<()> {
        view.register_bundle(PLUGIN_BUNDLE)
    }

    /// Registers the JS bundle and the `M.<plugin>.init` call for this
    /// widget's element, followed by any client event handlers.
    pub fn register_plugin(
        &self,
        view: &mut dyn View,
        plugin: &str,
        client_options: &ClientOptions,
        client_events: &ClientEvents,
    ) -> MaterializeResult<()> {
        self.register_assets(view)?;
        let script = plugin_script(plugin, &self.id, client_options, client_events)?;
        view.register_js(&script, ScriptPosition::Ready, None);
        Ok(())
    }
}

/// Script that initializes `plugin` on the element with `id`.
pub fn plugin_script(
    plugin: &str,
    id: &str,
    client_options: &ClientOptions,
    client_events: &ClientEvents,
) -> MaterializeResult<String> {
    let element = format!("document.getElementById({})", serde_json::to_string(id)?);
    let options = serde_json::to_string(client_options)?;
    let mut script = format!("M.{}.init({}, {});", plugin, element, options);
    for (event, handler) in client_events {
        script.push_str(&format!(
            "\n{}.addEventListener({}, {});",
            element,
            serde_json::to_string(event)?,
            handler
        ));
    }
    Ok(script)
}

// ─── Icons ───────────────────────────────────────────────────────────────────

/// Icon reference: either a bare name or a full configuration.
///
/// ```yaml
/// icon: favorite
/// icon: { name: alarm, position: left, options: { class: red-text } }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IconSpec {
    Name(String),
    Config(IconConfig),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    pub name: Option<String>,
    pub position: Option<Position>,
    pub options: Attributes,
}

impl IconSpec {
    pub fn named(name: &str) -> Self {
        IconSpec::Name(name.to_string())
    }

    pub fn with_position(name: &str, position: Position) -> Self {
        IconSpec::Config(IconConfig {
            name: Some(name.to_string()),
            position: Some(position),
            options: Attributes::new(),
        })
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            IconSpec::Name(name) => Some(name),
            IconSpec::Config(cfg) => cfg.name.as_deref(),
        }
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            IconSpec::Name(_) => None,
            IconSpec::Config(cfg) => cfg.position,
        }
    }

    /// Renders the icon; `defaults` supply classes the widget requires and
    /// options a caller left unset.
    pub fn render(&self, widget: &str, defaults: &Attributes) -> MaterializeResult<String> {
        let name = self
            .name()
            .filter(|n| !n.is_empty())
            .ok_or_else(|| MaterializeError::missing(widget, "icon.name"))?;
        let mut attrs = match self {
            IconSpec::Name(_) => defaults.clone(),
            IconSpec::Config(cfg) => {
                cfg.options.validate()?;
                defaults.merged(&cfg.options)
            }
        };
        if let Some(position) = self.position() {
            attrs.add_class(position.as_str());
        }
        Ok(html::icon(name, &attrs))
    }
}

impl From<&str> for IconSpec {
    fn from(name: &str) -> Self {
        IconSpec::named(name)
    }
}
