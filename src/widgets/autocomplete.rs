use serde::Deserialize;

use crate::attributes::Attributes;
use crate::error::{MaterializeError, MaterializeResult};
use crate::html;
use crate::model::{input_id, input_name, FormModel};
use crate::page::View;
use crate::widget::{ClientEvents, ClientOptions, Widget, WidgetBase};

/// Text input with Materialize autocompletion.
///
/// ```yaml
/// Autocomplete:
///   name: fruit
///   clientOptions:
///     data: { Apple: ~, Banana: ~ }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Autocomplete {
    /// Input name when not bound to a model.
    pub name: Option<String>,
    pub value: Option<String>,
    pub options: Attributes,
    pub client_options: ClientOptions,
    pub client_events: ClientEvents,
}

impl Autocomplete {
    pub fn new(name: &str) -> Self {
        Autocomplete {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// Completion candidates (`data` client option), without images.
    pub fn suggestions(mut self, items: &[&str]) -> Self {
        let data: ClientOptions = items
            .iter()
            .map(|item| (item.to_string(), serde_json::Value::Null))
            .collect();
        self.client_options
            .insert("data".to_string(), serde_json::Value::Object(data));
        self
    }

    /// Renders the input bound to a model attribute; `defaults` carry the
    /// field's input options.
    pub fn render_for_model(
        &self,
        model: &dyn FormModel,
        attribute: &str,
        defaults: &Attributes,
        view: &mut dyn View,
    ) -> MaterializeResult<String> {
        let mut options = defaults.merged(&self.options);
        options.set_default("id", input_id(model, attribute));
        options.set("name", input_name(model, attribute));
        options.set_default("value", model.value(attribute));
        self.render_input(&options, view)
    }

    fn render_input(&self, options: &Attributes, view: &mut dyn View) -> MaterializeResult<String> {
        let mut base = WidgetBase::init("Autocomplete", options, view)?;
        base.add_class("autocomplete");
        base.register_plugin(view, "Autocomplete", &self.client_options, &self.client_events)?;
        let attrs = base.options().clone().with("type", "text");
        Ok(html::tag("input", "", &attrs))
    }
}

impl Widget for Autocomplete {
    fn render(&self, view: &mut dyn View) -> MaterializeResult<String> {
        let name = self
            .name
            .as_deref()
            .ok_or_else(|| MaterializeError::missing("Autocomplete", "name"))?;
        let mut options = self.options.clone();
        options.set("name", name);
        options.set_default("value", self.value.as_deref());
        self.render_input(&options, view)
    }
}
