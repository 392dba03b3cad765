use serde::Deserialize;
use tracing::debug;

use crate::error::MaterializeResult;
use crate::page::View;
use crate::widget::Widget;
use crate::widgets::{
    Autocomplete, Breadcrumbs, Button, Card, Collection, SubmitButton, Tabs,
};

/// One widget configuration in a YAML document, keyed by widget name.
///
/// ```yaml
/// - Breadcrumbs:
///     links: [Settings]
/// - Card:
///     title: Account
///     content: <p>Details</p>
/// - SubmitButton:
///     label: Save
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum WidgetSpec {
    Button(Button),
    SubmitButton(SubmitButton),
    Card(Card),
    Tabs(Tabs),
    Collection(Collection),
    Breadcrumbs(Breadcrumbs),
    Autocomplete(Autocomplete),
}

impl WidgetSpec {
    pub fn name(&self) -> &'static str {
        match self {
            WidgetSpec::Button(_) => "Button",
            WidgetSpec::SubmitButton(_) => "SubmitButton",
            WidgetSpec::Card(_) => "Card",
            WidgetSpec::Tabs(_) => "Tabs",
            WidgetSpec::Collection(_) => "Collection",
            WidgetSpec::Breadcrumbs(_) => "Breadcrumbs",
            WidgetSpec::Autocomplete(_) => "Autocomplete",
        }
    }

    pub fn widget(&self) -> &dyn Widget {
        match self {
            WidgetSpec::Button(w) => w,
            WidgetSpec::SubmitButton(w) => w,
            WidgetSpec::Card(w) => w,
            WidgetSpec::Tabs(w) => w,
            WidgetSpec::Collection(w) => w,
            WidgetSpec::Breadcrumbs(w) => w,
            WidgetSpec::Autocomplete(w) => w,
        }
    }
}

impl Widget for WidgetSpec {
    fn render(&self, view: &mut dyn View) -> MaterializeResult<String> {
        self.widget().render(view)
    }
}

/// Parses a YAML list of widget configurations.
pub fn parse_document(yaml: &str) -> MaterializeResult<Vec<WidgetSpec>> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Renders widgets in order, one per line. Stops at the first error.
pub fn render_document(widgets: &[WidgetSpec], view: &mut dyn View) -> MaterializeResult<String> {
    let mut out = Vec::with_capacity(widgets.len());
    for spec in widgets {
        debug!(widget = spec.name(), "rendering document entry");
        let html = spec.render(view)?;
        if !html.is_empty() {
            out.push(html);
        }
    }
    Ok(out.join("\n"))
}

/// [`parse_document`] followed by [`render_document`].
pub fn render_yaml(yaml: &str, view: &mut dyn View) -> MaterializeResult<String> {
    let widgets = parse_document(yaml)?;
    render_document(&widgets, view)
}
