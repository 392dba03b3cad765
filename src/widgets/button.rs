use serde::Deserialize;

use crate::attributes::Attributes;
use crate::error::MaterializeResult;
use crate::html;
use crate::page::View;
use crate::types::{one_or_many, ButtonType, Position, Size, Waves};
use crate::widget::{IconSpec, Widget, WidgetBase};

/// Materialize button.
///
/// ```yaml
/// Button:
///   label: Save
///   waves: light
///   icon: { name: cloud, position: left }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Button {
    pub tag_name: String,
    /// `None` falls back to the widget's default label; an empty string
    /// renders no label at all.
    pub label: Option<String>,
    pub encode_label: bool,
    pub icon: Option<IconSpec>,
    #[serde(deserialize_with = "one_or_many")]
    pub waves: Vec<Waves>,
    #[serde(rename = "type")]
    pub kind: ButtonType,
    pub size: Option<Size>,
    pub disabled: bool,
    pub options: Attributes,
}

impl Default for Button {
    fn default() -> Self {
        Button {
            tag_name: "button".to_string(),
            label: None,
            encode_label: true,
            icon: None,
            waves: Vec::new(),
            kind: ButtonType::default(),
            size: None,
            disabled: false,
            options: Attributes::new(),
        }
    }
}

impl Button {
    pub const DEFAULT_LABEL: &'static str = "Button";

    pub fn new(label: &str) -> Self {
        Button {
            label: Some(label.to_string()),
            ..Default::default()
        }
    }

    pub fn tag_name(mut self, tag_name: &str) -> Self {
        self.tag_name = tag_name.to_string();
        self
    }

    pub fn icon(mut self, name: &str, position: Position) -> Self {
        self.icon = Some(IconSpec::with_position(name, position));
        self
    }

    pub fn waves(mut self, waves: &[Waves]) -> Self {
        self.waves = waves.to_vec();
        self
    }

    pub fn kind(mut self, kind: ButtonType) -> Self {
        self.kind = kind;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn encode_label(mut self, encode: bool) -> Self {
        self.encode_label = encode;
        self
    }

    pub fn options(mut self, options: Attributes) -> Self {
        self.options = options;
        self
    }

    pub(crate) fn render_as(
        &self,
        view: &mut dyn View,
        default_label: &str,
        extra: &Attributes,
    ) -> MaterializeResult<String> {
        html::validate_tag_name(&self.tag_name)?;
        let mut base = WidgetBase::init("Button", &extra.merged(&self.options), view)?;

        let label = html::encode_if(
            self.label.as_deref().unwrap_or(default_label),
            self.encode_label,
        );

        base.add_class(self.kind.css_class());
        if let Some(size) = self.size {
            base.add_class(&format!("btn-{}", size.as_str()));
        }
        if self.disabled {
            base.add_class("disabled");
        }
        let attrs = html::add_waves(&self.waves, base.options());

        let icon = match &self.icon {
            Some(icon) => icon.render(base.widget(), &Attributes::new())?,
            None => String::new(),
        };

        base.register_assets(view)?;
        Ok(html::tag(&self.tag_name, &format!("{}{}", icon, label), &attrs))
    }
}

impl Widget for Button {
    fn render(&self, view: &mut dyn View) -> MaterializeResult<String> {
        self.render_as(view, Self::DEFAULT_LABEL, &Attributes::new())
    }
}

/// A [`Button`] with `type="submit"` and a `Submit` default label.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct SubmitButton(pub Button);

impl SubmitButton {
    pub const DEFAULT_LABEL: &'static str = "Submit";

    pub fn new(label: &str) -> Self {
        SubmitButton(Button::new(label))
    }
}

impl Widget for SubmitButton {
    fn render(&self, view: &mut dyn View) -> MaterializeResult<String> {
        self.0.render_as(
            view,
            Self::DEFAULT_LABEL,
            &Attributes::new().with("type", "submit"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::PLUGIN_BUNDLE;
    use crate::error::MaterializeError;
    use crate::page::Page;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_button() {
        let mut page = Page::default();
        let html = Button::default().render(&mut page).unwrap();
        assert_eq!(html, r#"<button id="w0" class="btn">Button</button>"#);
        assert!(page.has_bundle(PLUGIN_BUNDLE));
    }

    #[test]
    fn icon_precedes_label() {
        let mut page = Page::default();
        let html = Button::new("Alarm")
            .icon("alarm", Position::Left)
            .render(&mut page)
            .unwrap();
        assert_eq!(
            html,
            r#"<button id="w0" class="btn"><i class="material-icons left">alarm</i>Alarm</button>"#
        );
    }

    #[test]
    fn type_size_disabled_and_waves() {
        let mut page = Page::default();
        let html = Button::new("Go")
            .kind(ButtonType::Floating)
            .size(Size::Large)
            .disabled(true)
            .waves(&[Waves::Light])
            .options(Attributes::class("red").with("id", "go"))
            .tag_name("a")
            .render(&mut page)
            .unwrap();
        assert_eq!(
            html,
            r#"<a id="go" class="red btn-floating btn-large disabled waves-effect waves-light">Go</a>"#
        );
    }

    #[test]
    fn label_is_encoded_unless_disabled() {
        let mut page = Page::default();
        let encoded = Button::new("<b>Bold</b>").render(&mut page).unwrap();
        assert!(encoded.contains("&lt;b&gt;Bold&lt;/b&gt;"));
        let raw = Button::new("<b>Bold</b>")
            .encode_label(false)
            .render(&mut page)
            .unwrap();
        assert!(raw.contains("<b>Bold</b>"));
    }

    #[test]
    fn empty_label_renders_icon_only() {
        let mut page = Page::default();
        let html = Button::new("")
            .kind(ButtonType::Floating)
            .icon("add", Position::Left)
            .render(&mut page)
            .unwrap();
        assert_eq!(
            html,
            r#"<button id="w0" class="btn-floating"><i class="material-icons left">add</i></button>"#
        );
    }

    #[test]
    fn submit_button_defaults() {
        let mut page = Page::default();
        let html = SubmitButton::default().render(&mut page).unwrap();
        assert_eq!(
            html,
            r#"<button type="submit" id="w0" class="btn">Submit</button>"#
        );
    }

    #[test]
    fn bad_tag_name_is_rejected() {
        let mut page = Page::default();
        let err = Button::default().tag_name("div onclick").render(&mut page);
        assert!(matches!(err, Err(MaterializeError::InvalidTag { .. })));
    }

    #[test]
    fn deserializes_from_yaml() {
        let button: Button = serde_yaml::from_str(
            "label: Send\ntype: flat\nwaves: [teal]\nicon: send\noptions:\n  id: send\n",
        )
        .unwrap();
        let mut page = Page::default();
        assert_eq!(
            button.render(&mut page).unwrap(),
            r#"<button id="send" class="btn-flat waves-effect waves-teal"><i class="material-icons">send</i>Send</button>"#
        );
    }
}
